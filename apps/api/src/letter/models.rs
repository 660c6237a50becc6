use std::fmt;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Action
// ────────────────────────────────────────────────────────────────────────────

/// What the caller wants done with a letter section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Improve,
    Feedback,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Generate => "generate",
            Action::Improve => "improve",
            Action::Feedback => "feedback",
        }
    }

    /// Generic 500 message for a failed provider call.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Action::Generate => "Failed to generate text.",
            Action::Improve => "Failed to improve text.",
            Action::Feedback => "Failed to generate feedback.",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section
// ────────────────────────────────────────────────────────────────────────────

/// A part of the letter. Recognized names are matched exactly (case and
/// spacing included); anything else is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Section {
    Introduction,
    AcademicAchievements,
    CareerGoals,
    ExtracurricularActivities,
    FinancialNeed,
    Conclusion,
    Other(String),
}

impl Section {
    pub fn as_str(&self) -> &str {
        match self {
            Section::Introduction => "Introduction",
            Section::AcademicAchievements => "Academic Achievements",
            Section::CareerGoals => "Career Goals",
            Section::ExtracurricularActivities => "Extracurricular Activities",
            Section::FinancialNeed => "Financial Need",
            Section::Conclusion => "Conclusion",
            Section::Other(name) => name,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl From<String> for Section {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Introduction" => Section::Introduction,
            "Academic Achievements" => Section::AcademicAchievements,
            "Career Goals" => Section::CareerGoals,
            "Extracurricular Activities" => Section::ExtracurricularActivities,
            "Financial Need" => Section::FinancialNeed,
            "Conclusion" => Section::Conclusion,
            _ => Section::Other(name),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// StudentContext
// ────────────────────────────────────────────────────────────────────────────

/// Student profile supplied by the caller. Every field is optional free text;
/// nothing is checked for content (a GPA of "excellent" is passed through).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentContext {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gpa: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub major: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub goals: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub achievements: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub involvement: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub financial_need: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub existing_text: Option<String>,
}

/// Accepts strings, numbers and booleans as text. `null` and blank strings
/// become `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => {
            return Err(D::Error::custom(format!(
                "expected text, found {}",
                match other {
                    Value::Array(_) => "an array",
                    _ => "an object",
                }
            )))
        }
    };
    Ok(text.filter(|s| !s.trim().is_empty()))
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body shared by all three letter endpoints. Both fields are optional at the
/// serde layer so that a missing one is reported as a 400, not a 422.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LetterRequest {
    #[serde(default)]
    pub section: Option<Section>,
    #[serde(default)]
    pub context: Option<StudentContext>,
}

/// Success body. Serializes to a single-key object whose key names the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LetterResponse {
    #[serde(rename = "generatedText")]
    Generated(String),
    #[serde(rename = "improvedText")]
    Improved(String),
    #[serde(rename = "feedbackText")]
    Feedback(String),
}

impl LetterResponse {
    pub fn new(action: Action, text: String) -> Self {
        match action {
            Action::Generate => LetterResponse::Generated(text),
            Action::Improve => LetterResponse::Improved(text),
            Action::Feedback => LetterResponse::Feedback(text),
        }
    }
}
