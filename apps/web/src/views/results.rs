use askama::Template;

use crate::errors::AppError;
use crate::models::JobMatch;

/// Links and assets shared by every rendered page.
#[derive(Debug, Clone, Copy)]
pub struct PageChrome<'a> {
    pub index_url: &'a str,
    pub icon_stylesheet_url: &'a str,
}

/// Display-ready projection of one `JobMatch`, placeholders already applied.
pub struct JobCard<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub location: &'a str,
    pub description: &'a str,
    pub score_label: String,
    pub matched_skills: &'a [String],
    pub missing_skills: &'a [String],
    pub matched_experience: &'a [String],
    pub match_reasoning: &'a str,
    pub improvement_suggestions: &'a [String],
    pub additional_comments: Option<&'a str>,
}

impl<'a> From<&'a JobMatch> for JobCard<'a> {
    fn from(job: &'a JobMatch) -> Self {
        let details = job.details();
        JobCard {
            title: job.title(),
            company: job.company(),
            location: job.location(),
            description: job.description(),
            score_label: details.match_score.label(),
            matched_skills: &details.matched_skills,
            missing_skills: &details.missing_skills,
            matched_experience: &details.matched_experience,
            match_reasoning: &details.match_reasoning,
            improvement_suggestions: &details.improvement_suggestions,
            additional_comments: details.additional_comments(),
        }
    }
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsPage<'a> {
    pub chrome: PageChrome<'a>,
    pub cards: Vec<JobCard<'a>>,
}

impl<'a> ResultsPage<'a> {
    /// One card per match, in the order given.
    pub fn new(matches: &'a [JobMatch], chrome: PageChrome<'a>) -> Self {
        Self {
            chrome,
            cards: matches.iter().map(JobCard::from).collect(),
        }
    }
}

pub fn render_results(matches: &[JobMatch], chrome: PageChrome<'_>) -> Result<String, AppError> {
    Ok(ResultsPage::new(matches, chrome).render()?)
}
