//! Portfolio core crate.
//!
//! This crate contains everything except HTTP: the portfolio data model
//! (`model`), construction of the one canonical record (`store`), the two
//! presentation adapters that turn that record into HTML or JSON
//! (`adapters`), and the error taxonomy (`error`). The web crate only
//! wires these pieces to routes; all content decisions live here so both
//! representations stay driven by the same single source of truth.
//!
/// Portfolio, Project and Contact record types
pub mod model;
/// Canonical record construction and shape validation
pub mod store;
/// HTML and JSON presentation adapters
pub mod adapters;
/// Error taxonomy shared by store and adapters
pub mod error;

#[cfg(test)]
mod tests {
    use crate::adapters::{render_html, to_json};
    use crate::error::FolioError;
    use crate::model::Portfolio;
    use serde_json::Value;

    /// Escape a value the way the HTML template does.
    fn esc(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    fn record() -> Portfolio {
        Portfolio::canonical().unwrap()
    }

    fn json_value(portfolio: &Portfolio) -> Value {
        serde_json::from_str(&to_json(portfolio).unwrap()).unwrap()
    }

    /// The canonical record passes validation and carries the expected content
    #[test]
    fn canonical_record_is_valid() {
        let portfolio = record();
        assert_eq!(portfolio.name, "Ali Bacelonia");
        assert_eq!(portfolio.title, "Full-Stack Developer");
        assert_eq!(portfolio.skills.len(), 7);
        assert_eq!(portfolio.projects.len(), 2);
        assert_eq!(portfolio.contact.email, "ali@example.com");
    }

    /// Structurally invalid records are rejected at construction time
    #[test]
    fn validation_rejects_empty_required_fields() {
        let mut portfolio = record();
        portfolio.name = "  ".to_string();
        assert!(matches!(portfolio.validate(), Err(FolioError::Init(_))));

        let mut portfolio = record();
        portfolio.title = String::new();
        assert!(matches!(portfolio.validate(), Err(FolioError::Init(_))));

        let mut portfolio = record();
        portfolio.projects[1].name = String::new();
        assert!(matches!(portfolio.validate(), Err(FolioError::Init(_))));
    }

    /// JSON output mirrors the record shape, with `url` present-or-absent
    #[test]
    fn json_mirrors_record_shape() {
        let portfolio = record();
        let json = json_value(&portfolio);

        assert_eq!(json["name"], "Ali Bacelonia");
        assert_eq!(json["title"], "Full-Stack Developer");
        assert_eq!(json["contact"]["email"], "ali@example.com");
        assert_eq!(json["contact"]["location"], "Manila, Philippines");

        let projects = json["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(
            projects[0]["url"],
            "https://github.com/ali/buzzerboy-saas"
        );
        // No link must mean no key, never "url": ""
        assert!(projects[1].as_object().unwrap().get("url").is_none());
    }

    /// Both outputs keep the record's skill and project order
    #[test]
    fn outputs_preserve_sequence_order() {
        let portfolio = record();
        let json = json_value(&portfolio);
        let html = render_html(&portfolio).unwrap();

        let skills: Vec<&str> = json["skills"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s.as_str().unwrap())
            .collect();
        assert_eq!(
            skills,
            ["Python", "Django", "Docker", "Postgres", "Redis", "HTMX", "CI/CD"]
        );

        // Skills section precedes projects, so first occurrence is the
        // skill list item.
        let python = html.find("<li>Python</li>").unwrap();
        let django = html.find("<li>Django</li>").unwrap();
        assert!(python < django);

        let first = html.find("<h3>Buzzerboy SaaS</h3>").unwrap();
        let second = html.find("<h3>Resume AI</h3>").unwrap();
        assert!(first < second);
    }

    /// Every value visible in the JSON output also appears in the HTML page
    #[test]
    fn html_and_json_expose_the_same_content() {
        let portfolio = record();
        let html = render_html(&portfolio).unwrap();

        for field in [
            &portfolio.name,
            &portfolio.title,
            &portfolio.summary,
            &portfolio.contact.email,
            &portfolio.contact.location,
        ] {
            assert!(html.contains(&esc(field)), "missing field: {field}");
        }
        for skill in &portfolio.skills {
            assert!(html.contains(&esc(skill)), "missing skill: {skill}");
        }
        for project in &portfolio.projects {
            assert!(html.contains(&esc(&project.name)));
            assert!(html.contains(&esc(&project.description)));
            for tag in &project.tech {
                assert!(html.contains(&esc(tag)), "missing tag: {tag}");
            }
            if let Some(url) = &project.url {
                assert!(html.contains(&esc(url)));
            }
        }
    }

    /// Rendering the same record twice yields identical output
    #[test]
    fn adapters_are_idempotent() {
        let portfolio = record();
        assert_eq!(
            render_html(&portfolio).unwrap(),
            render_html(&portfolio).unwrap()
        );
        assert_eq!(json_value(&portfolio), json_value(&portfolio));
    }
}
