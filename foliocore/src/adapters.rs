//! The two presentation adapters.
//!
//! Both are stateless pure functions over a borrowed `Portfolio`. They are
//! the only way content leaves the core, so as long as callers pass the
//! same record to both, the HTML page and the JSON API cannot diverge.
//!
use askama::Template;

use crate::error::FolioError;
use crate::model::Portfolio;

/// The single fixed page template, compiled into the binary by askama.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    portfolio: &'a Portfolio,
}

/// Render the portfolio as a browser-ready HTML document.
///
/// Sequence order in the record is preserved in the rendered output.
pub fn render_html(portfolio: &Portfolio) -> Result<String, FolioError> {
    let page = IndexTemplate { portfolio };
    Ok(page.render()?)
}

/// Serialize the portfolio to its JSON API representation.
///
/// The shape mirrors the `Portfolio` struct exactly; a project without a
/// URL omits the `url` key entirely.
pub fn to_json(portfolio: &Portfolio) -> Result<String, FolioError> {
    Ok(serde_json::to_string(portfolio)?)
}
