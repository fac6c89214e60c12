use askama::Template;

use crate::errors::AppError;
use crate::views::results::PageChrome;

/// Shown after a redirect from the results page when nothing has been stored yet.
pub const NO_RESULTS_NOTICE: &str = "No job matches found. Please upload your resume first.";

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub chrome: PageChrome<'a>,
    pub results_url: &'a str,
    pub notice: Option<&'a str>,
}

pub fn render_index(
    chrome: PageChrome<'_>,
    results_url: &str,
    notice: Option<&str>,
) -> Result<String, AppError> {
    let page = IndexPage {
        chrome,
        results_url,
        notice,
    };
    Ok(page.render()?)
}
