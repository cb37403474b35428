use serde::{Deserialize, Serialize};

/// The single record describing one person's professional profile.
///
/// This struct is serialized as-is for the JSON API and fed to the HTML
/// template, so its field names and nesting are the public wire shape.
/// Sequence fields keep insertion order; that order is the display order
/// in every representation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Portfolio {
    /// Full name, never empty.
    pub name: String,
    /// Professional title, never empty.
    pub title: String,
    /// Free-text summary paragraph.
    pub summary: String,
    /// Technical skills in display order. Duplicates are permitted but
    /// discouraged.
    pub skills: Vec<String>,
    /// Project history in display order.
    pub projects: Vec<Project>,
    /// How to reach the person.
    pub contact: Contact,
}

/// One entry in a portfolio's project list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    /// Project name, expected unique within the list.
    pub name: String,
    /// Short description of the work.
    pub description: String,
    /// Technology tags in display order.
    pub tech: Vec<String>,
    /// Public link, if one exists. Serialized as an omitted key when
    /// absent so consumers can tell "no link" from "empty link".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Contact details shown on the portfolio page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Contact {
    /// Contact e-mail address.
    pub email: String,
    /// City and country.
    pub location: String,
}
