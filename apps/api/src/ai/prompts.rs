//! Prompt construction for the generation pipeline.
//!
//! One template, parametrized per call site with an output-schema block and
//! a rule list. The topic is repeated in the instruction — generic models
//! bleed in adjacent-topic content unless told more than once to restrict
//! themselves to the named topic.

use super::fallback::Topic;

/// Textual description of the JSON shape the model must return, embedded
/// verbatim in the prompt. The `name` is used for logging only.
pub struct OutputSchema {
    pub name: &'static str,
    pub shape: &'static str,
}

const GENERATION_PROMPT_TEMPLATE: &str = r#"You are producing content about the {topic} domain. Restrict yourself strictly to {topic}; do not include material from adjacent or related domains.

Respond in ONLY the following JSON format, without any additional notes, text, or markdown:
{schema}

Rules:
{rules}
- Return ONLY valid JSON. No explanations. No markdown. No code fences."#;

/// Builds the full generation instruction for one call. Pure formatting;
/// the topic appears at least twice by construction.
pub fn build_prompt(topic: &Topic, schema: &OutputSchema, rules: &[&str]) -> String {
    let rules_block = rules
        .iter()
        .map(|r| format!("- {r}"))
        .collect::<Vec<_>>()
        .join("\n");

    GENERATION_PROMPT_TEMPLATE
        .replace("{topic}", topic.as_str())
        .replace("{schema}", schema.shape)
        .replace("{rules}", &rules_block)
}

// ────────────────────────────────────────────────────────────────────────────
// Industry insights call site
// ────────────────────────────────────────────────────────────────────────────

pub const INSIGHTS_SCHEMA: OutputSchema = OutputSchema {
    name: "industry_insights",
    shape: r#"{
  "salaryRanges": [
    { "role": "string", "min": number, "max": number, "median": number, "location": "string" }
  ],
  "growthRate": number,
  "demandLevel": "High" | "Medium" | "Low",
  "topSkills": ["skill1", "skill2", "skill3", "skill4", "skill5"],
  "marketOutlook": "Positive" | "Neutral" | "Negative",
  "keyTrends": ["trend1", "trend2", "trend3", "trend4", "trend5"],
  "recommendedSkills": ["skill1", "skill2", "skill3", "skill4", "skill5"]
}"#,
};

pub const INSIGHTS_RULES: &[&str] = &[
    "Include at least 5 roles in salaryRanges.",
    "Salary figures are annual, in the local currency of the stated location.",
    "Growth rate must be a percentage (number only, no % symbol).",
    "Include minimum 5 skills, 5 trends, and 5 recommended skills.",
];

// ────────────────────────────────────────────────────────────────────────────
// Interview question call site
// ────────────────────────────────────────────────────────────────────────────

pub const INTERVIEW_SCHEMA: OutputSchema = OutputSchema {
    name: "interview_set",
    shape: r#"{
  "questions": [
    {
      "question": "string",
      "options": ["string", "string", "string", "string"],
      "correctAnswer": "string",
      "explanation": "string"
    }
  ]
}"#,
};

pub const INTERVIEW_RULES: &[&str] = &[
    "Generate exactly 10 technical interview questions.",
    "Each question must be multiple choice with exactly 4 options.",
    "correctAnswer must match one of the 4 options verbatim.",
    "Focus only on domain-specific knowledge, tools, concepts, and current practices.",
];

// ────────────────────────────────────────────────────────────────────────────
// Course batch call site
// ────────────────────────────────────────────────────────────────────────────

pub const COURSE_SCHEMA: OutputSchema = OutputSchema {
    name: "course_batch",
    shape: r#"{
  "courses": [
    {
      "title": "string",
      "description": "string",
      "category": "string",
      "level": "Beginner" | "Intermediate" | "Advanced",
      "price": number
    }
  ]
}"#,
};

pub const COURSE_RULES: &[&str] = &[
    "Generate exactly 5 courses spanning Beginner, Intermediate, and Advanced levels.",
    "Each description is 1-2 sentences naming the concrete skills taught.",
    "Price is in USD; use 0 for free courses and keep paid courses under 100.",
];

// ────────────────────────────────────────────────────────────────────────────
// Improvement tip (plain-text call, no JSON pipeline)
// ────────────────────────────────────────────────────────────────────────────

const IMPROVEMENT_TIP_TEMPLATE: &str = r#"The user got the following {industry} technical interview questions wrong:

{mistakes}

Based on these mistakes, provide a concise, specific improvement tip.
Focus on the knowledge gaps revealed by these wrong answers.
Keep the response under 2 sentences and make it encouraging.
Don't explicitly mention the mistakes, instead focus on what to learn and practice."#;

/// Builds the free-text prompt for a post-quiz improvement tip.
pub fn improvement_tip_prompt(industry: &str, mistakes: &str) -> String {
    IMPROVEMENT_TIP_TEMPLATE
        .replace("{industry}", industry)
        .replace("{mistakes}", mistakes)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The drift guard: the instruction must name the topic at least twice.
    #[test]
    fn test_prompt_repeats_topic_at_least_twice() {
        let topic = Topic::parse("Finance").unwrap();
        let prompt = build_prompt(&topic, &INSIGHTS_SCHEMA, INSIGHTS_RULES);
        assert!(prompt.matches("Finance").count() >= 2);
    }

    #[test]
    fn test_prompt_embeds_schema_and_rules() {
        let topic = Topic::parse("Sales").unwrap();
        let prompt = build_prompt(&topic, &INTERVIEW_SCHEMA, INTERVIEW_RULES);
        assert!(prompt.contains("correctAnswer"));
        assert!(prompt.contains("- Generate exactly 10 technical interview questions."));
        assert!(prompt.contains("No code fences."));
    }

    #[test]
    fn test_prompt_forbids_markdown() {
        let topic = Topic::parse("Technology").unwrap();
        let prompt = build_prompt(&topic, &COURSE_SCHEMA, COURSE_RULES);
        assert!(prompt.contains("without any additional notes, text, or markdown"));
    }

    #[test]
    fn test_improvement_tip_prompt_names_industry() {
        let prompt = improvement_tip_prompt("Finance", "Question: \"What is NPV?\"");
        assert!(prompt.contains("Finance technical interview questions"));
        assert!(prompt.contains("What is NPV?"));
    }
}
