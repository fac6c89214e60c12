use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const UNTITLED_POSITION: &str = "Untitled Position";
pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const UNKNOWN_LOCATION: &str = "Unknown Location";
pub const NO_DESCRIPTION: &str = "No job description available.";

/// Shared stand-in for records that arrive without `match_details`.
static EMPTY_DETAILS: MatchDetails = MatchDetails {
    match_score: Score(0.0),
    matched_skills: Vec::new(),
    missing_skills: Vec::new(),
    matched_experience: Vec::new(),
    match_reasoning: String::new(),
    improvement_suggestions: Vec::new(),
    additional_comments: None,
};

/// One job posting paired with the match analysis the upstream matcher produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_details: Option<MatchDetails>,
    /// Remaining listing fields (requirements, salary_range, ...), kept as-is.
    #[serde(flatten)]
    pub listing: Map<String, Value>,
}

impl JobMatch {
    pub fn title(&self) -> &str {
        non_blank(&self.job_title).unwrap_or(UNTITLED_POSITION)
    }

    pub fn company(&self) -> &str {
        non_blank(&self.company).unwrap_or(UNKNOWN_COMPANY)
    }

    pub fn location(&self) -> &str {
        non_blank(&self.location).unwrap_or(UNKNOWN_LOCATION)
    }

    pub fn description(&self) -> &str {
        non_blank(&self.description).unwrap_or(NO_DESCRIPTION)
    }

    /// Match details, or an empty analysis (score 0, no lists) when absent.
    pub fn details(&self) -> &MatchDetails {
        self.match_details.as_ref().unwrap_or(&EMPTY_DETAILS)
    }

    pub fn score(&self) -> Score {
        self.details().match_score
    }
}

/// Score, skill comparison, reasoning and suggestions for a single job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    #[serde(default)]
    pub match_score: Score,
    #[serde(default, deserialize_with = "string_list")]
    pub matched_skills: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub missing_skills: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub matched_experience: Vec<String>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub match_reasoning: String,
    #[serde(default, deserialize_with = "string_list")]
    pub improvement_suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_comments: Option<String>,
}

impl MatchDetails {
    /// Comments worth showing; blank strings count as absent.
    pub fn additional_comments(&self) -> Option<&str> {
        non_blank(&self.additional_comments)
    }
}

/// Match score on a 0-100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(pub f64);

impl Score {
    /// Badge text: `87` -> `"87%"`, `87.5` -> `"87.5%"`.
    pub fn label(&self) -> String {
        format!("{self}%")
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display already drops a zero fractional part
        write!(f, "{}", self.0)
    }
}

// Upstream scores come from LLM output: numbers, "87", "87%" and null all occur.
impl<'de> Deserialize<'de> for Score {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => return Ok(Score(0.0)),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| D::Error::custom("match_score is out of range"))?,
            Some(Value::String(s)) => s
                .trim()
                .trim_end_matches('%')
                .trim_end()
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid match_score '{s}'")))?,
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "match_score must be a number, got {other}"
                )))
            }
        };

        if !value.is_finite() {
            return Err(D::Error::custom("match_score must be finite"));
        }
        Ok(Score(value))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => s,
            other => other.to_string(),
        })
        .collect())
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> JobMatch {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_record() {
        let job = parse(json!({
            "job_title": "Backend Engineer",
            "company": "Acme",
            "location": "Kathmandu",
            "description": "Build services.",
            "match_details": {
                "match_score": 87,
                "matched_skills": ["Rust", "SQL"],
                "missing_skills": ["Kubernetes"],
                "matched_experience": ["3 years backend"],
                "match_reasoning": "Strong overlap.",
                "improvement_suggestions": ["Learn k8s"],
                "additional_comments": "Good fit."
            }
        }));

        assert_eq!(job.title(), "Backend Engineer");
        assert_eq!(job.company(), "Acme");
        assert_eq!(job.score(), Score(87.0));
        assert_eq!(job.details().matched_skills, vec!["Rust", "SQL"]);
        assert_eq!(job.details().additional_comments(), Some("Good fit."));
    }

    #[test]
    fn test_placeholders_for_missing_and_blank_fields() {
        let job = parse(json!({ "company": "", "location": "   ", "match_details": {} }));
        assert_eq!(job.title(), UNTITLED_POSITION);
        assert_eq!(job.company(), UNKNOWN_COMPANY);
        assert_eq!(job.location(), UNKNOWN_LOCATION);
        assert_eq!(job.description(), NO_DESCRIPTION);
    }

    #[test]
    fn test_missing_details_fall_back_to_empty() {
        let job = parse(json!({ "job_title": "Designer" }));
        assert!(job.match_details.is_none());
        assert_eq!(job.score(), Score(0.0));
        assert!(job.details().matched_skills.is_empty());
        assert!(job.details().match_reasoning.is_empty());
        assert_eq!(job.details().additional_comments(), None);
    }

    #[test]
    fn test_score_accepts_strings_and_null() {
        let details: MatchDetails = serde_json::from_value(json!({ "match_score": "72%" })).unwrap();
        assert_eq!(details.match_score, Score(72.0));

        let details: MatchDetails = serde_json::from_value(json!({ "match_score": " 64.5 " })).unwrap();
        assert_eq!(details.match_score, Score(64.5));

        let details: MatchDetails = serde_json::from_value(json!({ "match_score": null })).unwrap();
        assert_eq!(details.match_score, Score(0.0));
    }

    #[test]
    fn test_score_rejects_garbage() {
        let result: Result<MatchDetails, _> =
            serde_json::from_value(json!({ "match_score": "high" }));
        assert!(result.is_err());

        let result: Result<MatchDetails, _> =
            serde_json::from_value(json!({ "match_score": [90] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_score_label() {
        assert_eq!(Score(87.0).label(), "87%");
        assert_eq!(Score(87.5).label(), "87.5%");
        assert_eq!(Score(0.0).label(), "0%");
    }

    #[test]
    fn test_null_lists_and_non_string_items() {
        let details: MatchDetails = serde_json::from_value(json!({
            "matched_skills": null,
            "matched_experience": [{"role": "Lead"}, 5, "Mentoring"],
            "match_reasoning": null
        }))
        .unwrap();

        assert!(details.matched_skills.is_empty());
        assert_eq!(
            details.matched_experience,
            vec![r#"{"role":"Lead"}"#, "5", "Mentoring"]
        );
        assert_eq!(details.match_reasoning, "");
    }

    #[test]
    fn test_blank_comments_are_absent() {
        let details = MatchDetails {
            additional_comments: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(details.additional_comments(), None);
    }

    #[test]
    fn test_listing_fields_survive_round_trip() {
        let original = json!({
            "job_title": "Data Engineer",
            "salary_range": "$100k",
            "requirements": ["Python"],
            "match_details": { "match_score": 50 }
        });

        let job = parse(original);
        assert_eq!(job.listing.get("salary_range"), Some(&json!("$100k")));

        let encoded = serde_json::to_value(&job).unwrap();
        assert_eq!(encoded["requirements"], json!(["Python"]));
        assert_eq!(encoded["match_details"]["match_score"], json!(50.0));
    }
}
