//! Declared payload schemas for each generation call site, plus the generic
//! validator that gates what the model returned before it is accepted.
//!
//! One typed schema per use site (insights, course batches, interview sets)
//! instead of ad hoc inline checks. List-typed required fields must be
//! non-empty — an empty array is as useless downstream as a missing one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field `{0}` is missing or empty")]
    EmptyField(&'static str),

    #[error("required list `{0}` is empty")]
    EmptyList(&'static str),

    #[error("`{field}` must have exactly {expected} entries, got {actual}")]
    WrongLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Schema check applied to a parsed payload before it is accepted as a
/// generation result. Implemented by every per-call-site payload type;
/// the provider is generic over it.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

fn require_list<T>(field: &'static str, list: &[T]) -> Result<(), ValidationError> {
    if list.is_empty() {
        return Err(ValidationError::EmptyList(field));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Industry insights
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRange {
    pub role: String,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketOutlook {
    Positive,
    Neutral,
    Negative,
}

/// Salary, skill, and trend snapshot for one industry. Wire field names are
/// camelCase — the frontend contract predates this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryInsights {
    pub salary_ranges: Vec<SalaryRange>,
    /// Percentage, no `%` symbol.
    pub growth_rate: f64,
    pub demand_level: DemandLevel,
    pub top_skills: Vec<String>,
    pub market_outlook: MarketOutlook,
    pub key_trends: Vec<String>,
    pub recommended_skills: Vec<String>,
}

impl Validate for IndustryInsights {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list("salaryRanges", &self.salary_ranges)?;
        require_list("topSkills", &self.top_skills)?;
        require_list("keyTrends", &self.key_trends)?;
        require_list("recommendedSkills", &self.recommended_skills)?;
        for range in &self.salary_ranges {
            require_text("salaryRanges.role", &range.role)?;
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Interview question sets
// ────────────────────────────────────────────────────────────────────────────

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSet {
    pub questions: Vec<QuizQuestion>,
}

impl Validate for InterviewSet {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list("questions", &self.questions)?;
        for q in &self.questions {
            require_text("questions.question", &q.question)?;
            require_text("questions.correctAnswer", &q.correct_answer)?;
            if q.options.len() != OPTIONS_PER_QUESTION {
                return Err(ValidationError::WrongLength {
                    field: "questions.options",
                    expected: OPTIONS_PER_QUESTION,
                    actual: q.options.len(),
                });
            }
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Course batches
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedCourse {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseBatch {
    pub courses: Vec<GeneratedCourse>,
}

impl Validate for CourseBatch {
    fn validate(&self) -> Result<(), ValidationError> {
        require_list("courses", &self.courses)?;
        for course in &self.courses {
            require_text("courses.title", &course.title)?;
            require_text("courses.description", &course.description)?;
            require_text("courses.category", &course.category)?;
            require_text("courses.level", &course.level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insights() -> IndustryInsights {
        IndustryInsights {
            salary_ranges: vec![SalaryRange {
                role: "Software Engineer".to_string(),
                min: 70000.0,
                max: 150000.0,
                median: 95000.0,
                location: "US".to_string(),
            }],
            growth_rate: 22.0,
            demand_level: DemandLevel::High,
            top_skills: vec!["Rust".to_string()],
            market_outlook: MarketOutlook::Positive,
            key_trends: vec!["AI Integration".to_string()],
            recommended_skills: vec!["Kubernetes".to_string()],
        }
    }

    #[test]
    fn test_complete_insights_validate() {
        assert!(insights().validate().is_ok());
    }

    #[test]
    fn test_empty_required_list_is_rejected() {
        let mut payload = insights();
        payload.key_trends.clear();
        assert_eq!(
            payload.validate(),
            Err(ValidationError::EmptyList("keyTrends"))
        );
    }

    /// A payload missing a required field must fail at the parse layer, not
    /// slip through to validation.
    #[test]
    fn test_missing_field_fails_deserialization() {
        let json = r#"{
            "salaryRanges": [],
            "growthRate": 10,
            "demandLevel": "High",
            "marketOutlook": "Positive",
            "keyTrends": ["x"],
            "recommendedSkills": ["y"]
        }"#;
        let result: Result<IndustryInsights, _> = serde_json::from_str(json);
        assert!(result.is_err(), "topSkills is required");
    }

    #[test]
    fn test_insights_wire_format_is_camel_case() {
        let value = serde_json::to_value(insights()).unwrap();
        assert!(value.get("salaryRanges").is_some());
        assert!(value.get("growthRate").is_some());
        assert!(value.get("salary_ranges").is_none());
    }

    #[test]
    fn test_question_with_wrong_option_count_is_rejected() {
        let set = InterviewSet {
            questions: vec![QuizQuestion {
                question: "What does CRM stand for?".to_string(),
                options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
                correct_answer: "A".to_string(),
                explanation: String::new(),
            }],
        };
        assert_eq!(
            set.validate(),
            Err(ValidationError::WrongLength {
                field: "questions.options",
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_empty_question_list_is_rejected() {
        let set = InterviewSet { questions: vec![] };
        assert_eq!(set.validate(), Err(ValidationError::EmptyList("questions")));
    }

    #[test]
    fn test_course_batch_with_blank_title_is_rejected() {
        let batch = CourseBatch {
            courses: vec![GeneratedCourse {
                title: "  ".to_string(),
                description: "desc".to_string(),
                category: "Technology".to_string(),
                level: "Beginner".to_string(),
                price: 0.0,
            }],
        };
        assert_eq!(
            batch.validate(),
            Err(ValidationError::EmptyField("courses.title"))
        );
    }

    #[test]
    fn test_quiz_question_round_trips_camel_case() {
        let json = r#"{
            "question": "What is the time complexity of binary search?",
            "options": ["O(n)", "O(log n)", "O(n^2)", "O(1)"],
            "correctAnswer": "O(log n)",
            "explanation": "Binary search halves the search space."
        }"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.correct_answer, "O(log n)");
        let back = serde_json::to_value(&q).unwrap();
        assert!(back.get("correctAnswer").is_some());
    }
}
