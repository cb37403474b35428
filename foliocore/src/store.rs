//! Construction of the one authoritative portfolio record.
//!
//! The record is a literal built here exactly once per process, validated
//! before anything is allowed to serve it. There is no write path: callers
//! share the constructed value read-only (typically behind an `Arc`) for
//! the rest of the process lifetime.
//!
use crate::error::FolioError;
use crate::model::{Contact, Portfolio, Project};

impl Portfolio {
    /// Build the canonical portfolio record.
    ///
    /// Returns `FolioError::Init` if the literal data is structurally
    /// invalid, in which case the caller must fail fast instead of
    /// serving a partially-initialized record.
    pub fn canonical() -> Result<Portfolio, FolioError> {
        let portfolio = Portfolio {
            name: "Ali Bacelonia".to_string(),
            title: "Full-Stack Developer".to_string(),
            summary: "6 years building web apps, Django & Python fan, DevOps-curious."
                .to_string(),
            skills: ["Python", "Django", "Docker", "Postgres", "Redis", "HTMX", "CI/CD"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            projects: vec![
                Project {
                    name: "Buzzerboy SaaS".to_string(),
                    description:
                        "Multi-tenant SaaS platform for HR workflows with modular apps."
                            .to_string(),
                    tech: ["Django", "Postgres", "Docker", "HTMX"]
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                    url: Some("https://github.com/ali/buzzerboy-saas".to_string()),
                },
                Project {
                    name: "Resume AI".to_string(),
                    description: "AI-powered resume optimizer with prompt-tuning features."
                        .to_string(),
                    tech: ["FastAPI", "OpenAI", "LangChain"]
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                    url: None,
                },
            ],
            contact: Contact {
                email: "ali@example.com".to_string(),
                location: "Manila, Philippines".to_string(),
            },
        };
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Check the structural shape of the record.
    ///
    /// Only shape is checked: `name`, `title` and every project name must
    /// be non-empty. Free-text fields and empty sequences are fine.
    pub fn validate(&self) -> Result<(), FolioError> {
        if self.name.trim().is_empty() {
            return Err(FolioError::Init("name must not be empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(FolioError::Init("title must not be empty".to_string()));
        }
        for (idx, project) in self.projects.iter().enumerate() {
            if project.name.trim().is_empty() {
                return Err(FolioError::Init(format!(
                    "project {idx} has an empty name"
                )));
            }
        }
        Ok(())
    }
}
