//! Axum route handlers for interview prep — the third fallback-guarded
//! generation call site, plus quiz grading with an optional generated
//! improvement tip.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::ai::fallback::Topic;
use crate::ai::prompts::{improvement_tip_prompt, INTERVIEW_RULES, INTERVIEW_SCHEMA};
use crate::ai::schema::{InterviewSet, QuizQuestion};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

/// Industry assumed for users who have not filled in their profile yet.
const DEFAULT_INDUSTRY: &str = "Technology";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct SaveResultsRequest {
    pub questions: Vec<QuizQuestion>,
    pub answers: Vec<String>,
    pub score: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question: String,
    /// The correct answer.
    pub answer: String,
    pub user_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub quiz_score: f64,
    pub questions: Vec<QuestionResult>,
    pub category: String,
    pub improvement_tip: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub assessment: Assessment,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/interview/generate
///
/// Generates a question set for the caller's profile industry. Always 200
/// with ten usable questions — failures resolve to the static sets.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<QuestionsResponse>, AppError> {
    let user: User = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(auth.user_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let industry = if user.industry.trim().is_empty() {
        DEFAULT_INDUSTRY
    } else {
        user.industry.trim()
    };
    let topic = Topic::parse(industry).map_err(|e| AppError::Validation(e.to_string()))?;

    // Profile skills steer question selection when present.
    let mut rules: Vec<String> = INTERVIEW_RULES.iter().map(|r| r.to_string()).collect();
    let skills = user.skills.trim();
    if !skills.is_empty() {
        rules.push(format!("Weight questions toward expertise in: {skills}."));
    }
    let rule_refs: Vec<&str> = rules.iter().map(String::as_str).collect();

    let outcome = state
        .ai
        .generate_with_fallback::<InterviewSet>(
            &topic,
            &INTERVIEW_SCHEMA,
            &rule_refs,
            &state.fallbacks.interview,
        )
        .await;

    info!(
        topic = %topic,
        source = ?outcome.source,
        count = outcome.payload.questions.len(),
        "serving interview questions"
    );

    Ok(Json(QuestionsResponse {
        questions: outcome.payload.questions,
    }))
}

/// POST /api/interview/results
///
/// Grades submitted answers and, when any were wrong, asks the generation
/// backend for a short improvement tip. A failed tip call degrades to no
/// tip — never to an error.
pub async fn handle_save_results(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<SaveResultsRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    if request.questions.is_empty() {
        return Err(AppError::Validation("questions cannot be empty".to_string()));
    }

    let user: User = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(auth.user_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let results = grade(&request.questions, &request.answers);

    let wrong: Vec<&QuestionResult> = results.iter().filter(|r| !r.is_correct).collect();
    let improvement_tip = if wrong.is_empty() {
        None
    } else {
        let industry = if user.industry.trim().is_empty() {
            DEFAULT_INDUSTRY
        } else {
            user.industry.trim()
        };
        let prompt = improvement_tip_prompt(industry, &mistakes_summary(&wrong));
        match state.ai.generate_text(&prompt).await {
            Ok(tip) => Some(tip.trim().to_string()),
            Err(e) => {
                warn!("improvement tip generation failed: {e}");
                None
            }
        }
    };

    Ok(Json(AssessmentResponse {
        assessment: Assessment {
            id: Uuid::new_v4(),
            user_id: auth.user_id,
            quiz_score: request.score,
            questions: results,
            category: "Technical".to_string(),
            improvement_tip,
            created_at: Utc::now(),
        },
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Grading
// ────────────────────────────────────────────────────────────────────────────

/// Pairs each question with the caller's answer at the same index. A missing
/// answer grades as incorrect with an empty user answer.
fn grade(questions: &[QuizQuestion], answers: &[String]) -> Vec<QuestionResult> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let user_answer = answers.get(i).cloned().unwrap_or_default();
            let is_correct = q.correct_answer == user_answer;
            QuestionResult {
                question: q.question.clone(),
                answer: q.correct_answer.clone(),
                user_answer,
                is_correct,
                explanation: q.explanation.clone(),
            }
        })
        .collect()
}

fn mistakes_summary(wrong: &[&QuestionResult]) -> String {
    wrong
        .iter()
        .map(|r| {
            format!(
                "Question: \"{}\"\nCorrect Answer: \"{}\"\nUser Answer: \"{}\"",
                r.question, r.answer, r.user_answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str, correct: &str) -> QuizQuestion {
        QuizQuestion {
            question: text.to_string(),
            options: vec![
                correct.to_string(),
                "B".to_string(),
                "C".to_string(),
                "D".to_string(),
            ],
            correct_answer: correct.to_string(),
            explanation: "because".to_string(),
        }
    }

    #[test]
    fn test_grade_marks_matching_answers_correct() {
        let questions = vec![q("1+1?", "2"), q("2+2?", "4")];
        let answers = vec!["2".to_string(), "5".to_string()];
        let results = grade(&questions, &answers);
        assert!(results[0].is_correct);
        assert!(!results[1].is_correct);
        assert_eq!(results[1].answer, "4");
        assert_eq!(results[1].user_answer, "5");
    }

    #[test]
    fn test_grade_treats_missing_answers_as_incorrect() {
        let questions = vec![q("1+1?", "2"), q("2+2?", "4")];
        let answers = vec!["2".to_string()];
        let results = grade(&questions, &answers);
        assert_eq!(results.len(), 2);
        assert!(!results[1].is_correct);
        assert_eq!(results[1].user_answer, "");
    }

    #[test]
    fn test_mistakes_summary_quotes_each_wrong_answer() {
        let questions = vec![q("What is NPV?", "Net Present Value")];
        let answers = vec!["Net Profit Value".to_string()];
        let results = grade(&questions, &answers);
        let wrong: Vec<&QuestionResult> = results.iter().filter(|r| !r.is_correct).collect();
        let summary = mistakes_summary(&wrong);
        assert!(summary.contains("Question: \"What is NPV?\""));
        assert!(summary.contains("Correct Answer: \"Net Present Value\""));
        assert!(summary.contains("User Answer: \"Net Profit Value\""));
    }
}
