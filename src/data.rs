use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A sub-feature bullet shown on the detail view.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct InstallationStep {
    /// Display label only; steps keep their insertion order.
    pub step_number: u32,
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallationGuide {
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<InstallationStep>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Developer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// A catalog entry. `id` is the store key.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Feature {
    pub id: String,
    pub title: String,
    pub description: String,
    pub r#type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub platforms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_link: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub developer: Developer,
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<FeatureItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub screenshots: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub installation_guide: InstallationGuide,
    #[serde(deserialize_with = "null_as_default")]
    pub faq: Vec<Faq>,
}

/// Top-level object wrapping a batch of entries for import or fetch.
///
/// Only `new_features` is consumed when importing; the envelope's own
/// `version` and `release_date` are carried for export only.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    pub new_features: Vec<Feature>,
}

impl Envelope {
    pub fn wrap(features: Vec<Feature>) -> Self {
        Self {
            version: None,
            release_date: None,
            new_features: features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_feature_defaults_everything_else() {
        let feature: Feature =
            serde_json::from_str(r#"{"id":"f9","title":"t","description":"d"}"#).unwrap();

        assert_eq!(feature.id, "f9");
        assert_eq!(feature.title, "t");
        assert_eq!(feature.description, "d");
        assert_eq!(feature.r#type, "");
        assert!(feature.platforms.is_empty());
        assert!(feature.image.is_none());
        assert_eq!(feature.developer, Developer::default());
        assert!(feature.installation_guide.steps.is_empty());
    }

    #[test]
    fn test_installation_steps_keep_insertion_order() {
        let feature: Feature = serde_json::from_str(
            r#"{"id":"a","title":"t","description":"d","installation_guide":{"steps":[
                {"step_number":3,"title":"c","description":""},
                {"step_number":1,"title":"a","description":""},
                {"step_number":3,"title":"dup","description":""}
            ]}}"#,
        )
        .unwrap();

        let titles: Vec<&str> = feature
            .installation_guide
            .steps
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["c", "a", "dup"]);
    }

    #[test]
    fn test_type_field_uses_plain_json_key() {
        let feature = Feature {
            id: "x".to_string(),
            r#type: "Security".to_string(),
            ..Feature::default()
        };
        let value = serde_json::to_value(&feature).unwrap();
        assert_eq!(value["type"], "Security");
        assert!(value.get("image").is_none());
    }
}
