use std::fmt::Write;

use crate::data::Feature;

fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

/// One block per entry, or the empty/no-match message.
pub fn render_list(total: usize, features: &[&Feature]) -> String {
    if total == 0 {
        return "No features yet. Import a JSON file or add one to get started.\n".to_string();
    }
    if features.is_empty() {
        return "No features match the current search. Try a different keyword.\n".to_string();
    }

    let mut out = String::new();
    for feature in features {
        let _ = writeln!(out, "[{}] {}", feature.id, feature.title);
        let _ = writeln!(out, "    {} | {}", feature.r#type, feature.status);
        if !feature.platforms.is_empty() {
            let _ = writeln!(out, "    Platforms: {}", feature.platforms.join(", "));
        }
        let _ = writeln!(out, "    {}", feature.description);
        if !feature.developer.name.is_empty() {
            let _ = writeln!(out, "    By {}", feature.developer.name);
        }
    }
    let _ = writeln!(out, "{} of {} features", features.len(), total);
    out
}

pub fn render_detail(feature: &Feature) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", feature.title);
    let _ = writeln!(out, "id: {}", feature.id);
    let _ = writeln!(out, "type: {}", feature.r#type);
    let _ = writeln!(out, "status: {}", feature.status);
    let _ = writeln!(out, "version: {}", or_dash(feature.version.as_deref()));
    let _ = writeln!(out, "released: {}", or_dash(feature.release_date.as_deref()));
    let _ = writeln!(out, "platforms: {}", feature.platforms.join(", "));
    let _ = writeln!(out, "image: {}", or_dash(feature.image.as_deref()));
    let _ = writeln!(
        out,
        "documentation: {}",
        or_dash(feature.documentation_link.as_deref())
    );
    let _ = writeln!(
        out,
        "developer: {} <{}>",
        feature.developer.name, feature.developer.email
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", feature.description);

    if !feature.features.is_empty() {
        let _ = writeln!(out, "\nFeatures:");
        for item in &feature.features {
            let _ = writeln!(out, "  - {}: {}", item.title, item.description);
        }
    }

    if !feature.screenshots.is_empty() {
        let _ = writeln!(out, "\nScreenshots:");
        for url in &feature.screenshots {
            let _ = writeln!(out, "  {}", url);
        }
    }

    if !feature.installation_guide.steps.is_empty() {
        let _ = writeln!(out, "\nInstallation:");
        for step in &feature.installation_guide.steps {
            let _ = writeln!(
                out,
                "  {}. {}: {}",
                step.step_number, step.title, step.description
            );
        }
    }

    if !feature.faq.is_empty() {
        let _ = writeln!(out, "\nFAQ:");
        for faq in &feature.faq {
            let _ = writeln!(out, "  Q: {}", faq.question);
            let _ = writeln!(out, "  A: {}", faq.answer);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Faq, InstallationGuide, InstallationStep};

    fn feature(id: &str, title: &str) -> Feature {
        Feature {
            id: id.to_string(),
            title: title.to_string(),
            description: "desc".to_string(),
            r#type: "UI".to_string(),
            status: "Beta".to_string(),
            ..Feature::default()
        }
    }

    #[test]
    fn test_empty_catalog_and_no_match_differ() {
        let empty = render_list(0, &[]);
        let no_match = render_list(2, &[]);
        assert!(empty.starts_with("No features yet"));
        assert!(no_match.starts_with("No features match"));
    }

    #[test]
    fn test_list_shows_entries_and_count() {
        let a = feature("f1", "Dark Mode");
        let out = render_list(3, &[&a]);
        assert!(out.contains("[f1] Dark Mode"));
        assert!(out.contains("UI | Beta"));
        assert!(out.ends_with("1 of 3 features\n"));
    }

    #[test]
    fn test_detail_keeps_step_order_and_blanks() {
        let mut f = feature("f1", "Dark Mode");
        f.installation_guide = InstallationGuide {
            steps: vec![
                InstallationStep {
                    step_number: 2,
                    title: "second".to_string(),
                    description: String::new(),
                },
                InstallationStep {
                    step_number: 1,
                    title: "first".to_string(),
                    description: String::new(),
                },
            ],
        };
        f.faq = vec![Faq {
            question: "Why?".to_string(),
            answer: "Because.".to_string(),
        }];

        let out = render_detail(&f);
        assert!(out.contains("version: -"));
        assert!(out.find("2. second").unwrap() < out.find("1. first").unwrap());
        assert!(out.contains("Q: Why?"));
    }
}
