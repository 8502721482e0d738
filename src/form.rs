//! Create/edit submission rules.
//!
//! The option lists are what the form offers; the store and the import
//! validator accept any string for `type`, `status` and platforms.

use uuid::Uuid;

use crate::data::Feature;
use crate::error::CatalogError;
use crate::store::{Action, FeatureStore};

pub const FEATURE_TYPES: [&str; 7] = [
    "UI Enhancement",
    "Security",
    "Performance",
    "Notification",
    "Integration",
    "Analytics",
    "Other",
];

pub const STATUS_OPTIONS: [&str; 4] = ["Development", "Beta", "Released", "Deprecated"];

pub const PLATFORM_OPTIONS: [&str; 5] = ["Web", "iOS", "Android", "Desktop", "API"];

pub const DEFAULT_STATUS: &str = "Development";

/// A blank form with a freshly generated id.
pub fn blank_feature() -> Feature {
    Feature {
        id: Uuid::new_v4().to_string(),
        status: DEFAULT_STATUS.to_string(),
        ..Feature::default()
    }
}

fn missing_fields(feature: &Feature) -> Vec<&'static str> {
    [
        ("title", &feature.title),
        ("description", &feature.description),
        ("type", &feature.r#type),
        ("status", &feature.status),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect()
}

pub fn validate(feature: &Feature) -> Result<(), CatalogError> {
    let missing = missing_fields(feature);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::InvalidForm(missing))
    }
}

/// Validates a create submission and turns it into an `Add`.
/// New entries always get a fresh UUID; any submitted id is discarded.
pub fn create(mut feature: Feature) -> Result<Action, CatalogError> {
    validate(&feature)?;
    feature.id = Uuid::new_v4().to_string();
    Ok(Action::Add(feature))
}

/// Validates an edit submission. The target must already be in the store.
pub fn edit(store: &FeatureStore, feature: Feature) -> Result<Action, CatalogError> {
    validate(&feature)?;
    if !store.contains(&feature.id) {
        return Err(CatalogError::NotFound(feature.id));
    }
    Ok(Action::Update(feature))
}
