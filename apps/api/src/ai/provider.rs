//! Fallback-guarded provider — orchestrates one generation attempt.
//!
//! Flow: build prompt → bounded backend call → sanitize → parse → validate.
//! Any failure along that chain resolves to the static fallback table. The
//! provider is failure-absorbing: its caller always receives a complete
//! payload, tagged with where it came from.
//!
//! Exactly one attempt per request. No retry, no backoff, and no
//! single-flight collapsing — concurrent calls for the same topic each make
//! their own upstream call. The fallback is always a complete, valid answer,
//! so a failed attempt costs nothing but freshness.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use super::client::{GenerateText, GenerationError};
use super::fallback::{FallbackTable, Topic};
use super::prompts::{build_prompt, OutputSchema};
use super::sanitize::parse_sanitized;
use super::schema::{Validate, ValidationError};

/// Provenance of a served payload. Consumers only need the payload; the tag
/// is kept for logging and response assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Generated,
    Fallback,
}

/// A payload plus where it came from. The provider never returns an error.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    pub payload: T,
    pub source: Source,
}

/// Everything that can go wrong between prompt and accepted payload.
/// Absorbed at the provider boundary; never escapes to callers.
#[derive(Debug, Error)]
enum ProvideError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("response was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// The one reusable abstraction behind the AI routes. Construct once at
/// startup and clone freely — all fields are shared handles.
#[derive(Clone)]
pub struct Provider {
    backend: Arc<dyn GenerateText>,
    timeout: Duration,
    /// Caps outstanding upstream calls process-wide so a traffic spike
    /// cannot fan out unboundedly against the generation endpoint.
    permits: Arc<Semaphore>,
}

impl Provider {
    pub fn new(backend: Arc<dyn GenerateText>, timeout: Duration, max_concurrent: usize) -> Self {
        Self {
            backend,
            timeout,
            permits: Arc::new(Semaphore::new(max_concurrent)),
        }
    }

    /// Generates a payload for `topic`, serving the fallback table on any
    /// failure. The topic is already validated — `Topic::parse` rejects
    /// blank input before this point, so no network call is ever made for a
    /// malformed topic.
    pub async fn generate_with_fallback<T>(
        &self,
        topic: &Topic,
        schema: &OutputSchema,
        rules: &[&str],
        fallback: &FallbackTable<T>,
    ) -> Outcome<T>
    where
        T: DeserializeOwned + Validate + Clone,
    {
        match self.try_generate::<T>(topic, schema, rules).await {
            Ok(payload) => {
                info!(topic = %topic, schema = schema.name, "serving generated content");
                Outcome {
                    payload,
                    source: Source::Generated,
                }
            }
            Err(err) => {
                warn!(
                    topic = %topic,
                    schema = schema.name,
                    error = %err,
                    "generation failed, serving fallback content"
                );
                Outcome {
                    payload: fallback.lookup(topic).clone(),
                    source: Source::Fallback,
                }
            }
        }
    }

    /// Plain-text generation with the same bounds (timeout, concurrency cap)
    /// but no JSON pipeline and no fallback table. Callers decide how to
    /// degrade when this fails.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        self.bounded_generate(prompt).await
    }

    async fn try_generate<T>(
        &self,
        topic: &Topic,
        schema: &OutputSchema,
        rules: &[&str],
    ) -> Result<T, ProvideError>
    where
        T: DeserializeOwned + Validate,
    {
        let prompt = build_prompt(topic, schema, rules);
        let raw = self.bounded_generate(&prompt).await?;
        let payload: T = parse_sanitized(&raw)?;
        payload.validate()?;
        Ok(payload)
    }

    async fn bounded_generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .expect("generation semaphore is never closed");

        match tokio::time::timeout(self.timeout, self.backend.generate(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(GenerationError::TimedOut(self.timeout.as_secs())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::defaults::FallbackCatalog;
    use crate::ai::prompts::{INSIGHTS_RULES, INSIGHTS_SCHEMA};
    use crate::ai::schema::IndustryInsights;

    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend test double that counts calls and replays a scripted reply.
    struct ScriptedBackend {
        reply: Option<String>,
        calls: AtomicUsize,
    }

    impl ScriptedBackend {
        fn ok(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerateText for ScriptedBackend {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err(GenerationError::MissingCredential),
            }
        }
    }

    /// Backend that never completes — exercises the timeout bound.
    struct HangingBackend {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GenerateText for HangingBackend {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::future::pending().await
        }
    }

    fn provider(backend: Arc<dyn GenerateText>) -> Provider {
        Provider::new(backend, Duration::from_secs(10), 8)
    }

    /// A minimal but schema-complete insights payload the validator accepts.
    const VALID_INSIGHTS: &str = r#"{
        "salaryRanges": [
            {"role": "Account Executive", "min": 50000, "max": 120000, "median": 75000, "location": "US"}
        ],
        "growthRate": 6,
        "demandLevel": "Medium",
        "topSkills": ["Negotiation"],
        "marketOutlook": "Positive",
        "keyTrends": ["Social Selling"],
        "recommendedSkills": ["CRM"]
    }"#;

    #[tokio::test]
    async fn test_forced_failure_returns_exact_fallback_payload() {
        let catalog = FallbackCatalog::new();
        let backend = ScriptedBackend::failing();
        let provider = provider(backend.clone());
        let topic = Topic::parse("Technology").unwrap();

        let outcome: Outcome<IndustryInsights> = provider
            .generate_with_fallback(&topic, &INSIGHTS_SCHEMA, INSIGHTS_RULES, &catalog.insights)
            .await;

        assert_eq!(outcome.source, Source::Fallback);
        assert_eq!(&outcome.payload, catalog.insights.lookup(&topic));
        assert_eq!(backend.calls(), 1, "exactly one attempt, no retry");
    }

    #[tokio::test]
    async fn test_unknown_topic_falls_back_to_explicit_default() {
        let catalog = FallbackCatalog::new();
        let provider = provider(ScriptedBackend::failing());
        let topic = Topic::parse("Astrology").unwrap();

        let outcome: Outcome<IndustryInsights> = provider
            .generate_with_fallback(&topic, &INSIGHTS_SCHEMA, INSIGHTS_RULES, &catalog.insights)
            .await;

        assert_eq!(outcome.source, Source::Fallback);
        assert_eq!(&outcome.payload, catalog.insights.default_payload());
    }

    /// Scenario: topic="Finance", generation times out. The caller still gets
    /// a full answer — the Finance fallback entry with its five salary bands.
    #[tokio::test(start_paused = true)]
    async fn test_timeout_resolves_to_finance_fallback() {
        let catalog = FallbackCatalog::new();
        let backend = Arc::new(HangingBackend {
            calls: AtomicUsize::new(0),
        });
        let provider = Provider::new(backend.clone(), Duration::from_secs(10), 8);
        let topic = Topic::parse("Finance").unwrap();

        let outcome: Outcome<IndustryInsights> = provider
            .generate_with_fallback(&topic, &INSIGHTS_SCHEMA, INSIGHTS_RULES, &catalog.insights)
            .await;

        assert_eq!(outcome.source, Source::Fallback);
        assert!(outcome.payload.salary_ranges.len() >= 5);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    /// Scenario: topic="Sales", the model wraps valid JSON in prose and
    /// fences. The sanitizer recovers it and the result counts as generated.
    #[tokio::test]
    async fn test_fenced_reply_is_sanitized_and_accepted_as_generated() {
        let catalog = FallbackCatalog::new();
        let wrapped = format!("Here is the JSON:\n```json\n{VALID_INSIGHTS}\n```");
        let backend = ScriptedBackend::ok(&wrapped);
        let provider = provider(backend.clone());
        let topic = Topic::parse("Sales").unwrap();

        let outcome: Outcome<IndustryInsights> = provider
            .generate_with_fallback(&topic, &INSIGHTS_SCHEMA, INSIGHTS_RULES, &catalog.insights)
            .await;

        assert_eq!(outcome.source, Source::Generated);
        assert_eq!(outcome.payload.salary_ranges[0].role, "Account Executive");
    }

    #[tokio::test]
    async fn test_schema_invalid_reply_falls_back() {
        let catalog = FallbackCatalog::new();
        // Valid JSON, but keyTrends is empty — validation must reject it.
        let invalid = VALID_INSIGHTS.replace(r#"["Social Selling"]"#, "[]");
        let provider = provider(ScriptedBackend::ok(&invalid));
        let topic = Topic::parse("Sales").unwrap();

        let outcome: Outcome<IndustryInsights> = provider
            .generate_with_fallback(&topic, &INSIGHTS_SCHEMA, INSIGHTS_RULES, &catalog.insights)
            .await;

        assert_eq!(outcome.source, Source::Fallback);
    }

    #[tokio::test]
    async fn test_non_json_reply_falls_back() {
        let catalog = FallbackCatalog::new();
        let provider = provider(ScriptedBackend::ok("I'm sorry, I can't produce that."));
        let topic = Topic::parse("Technology").unwrap();

        let outcome: Outcome<IndustryInsights> = provider
            .generate_with_fallback(&topic, &INSIGHTS_SCHEMA, INSIGHTS_RULES, &catalog.insights)
            .await;

        assert_eq!(outcome.source, Source::Fallback);
    }

    /// A blank topic never reaches the provider — `Topic::parse` rejects it
    /// first, so the backend sees zero calls.
    #[tokio::test]
    async fn test_blank_topic_rejected_before_any_backend_call() {
        let backend = ScriptedBackend::failing();
        let _provider = provider(backend.clone());

        assert!(Topic::parse("  ").is_err());
        assert_eq!(backend.calls(), 0);
    }

    /// Two concurrent requests for the same topic each make their own
    /// upstream call — duplicate generation is allowed, not collapsed.
    #[tokio::test]
    async fn test_concurrent_duplicate_topics_are_not_deduplicated() {
        let catalog = FallbackCatalog::new();
        let backend = ScriptedBackend::ok(VALID_INSIGHTS);
        let provider = provider(backend.clone());
        let topic = Topic::parse("Finance").unwrap();

        let (a, b): (Outcome<IndustryInsights>, Outcome<IndustryInsights>) = tokio::join!(
            provider.generate_with_fallback(&topic, &INSIGHTS_SCHEMA, INSIGHTS_RULES, &catalog.insights),
            provider.generate_with_fallback(&topic, &INSIGHTS_SCHEMA, INSIGHTS_RULES, &catalog.insights),
        );

        assert_eq!(a.source, Source::Generated);
        assert_eq!(b.source, Source::Generated);
        assert_eq!(backend.calls(), 2, "no single-flight collapsing");
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_text_times_out_with_generation_error() {
        let backend = Arc::new(HangingBackend {
            calls: AtomicUsize::new(0),
        });
        let provider = Provider::new(backend, Duration::from_secs(10), 8);

        let result = provider.generate_text("tip prompt").await;
        assert!(matches!(result, Err(GenerationError::TimedOut(10))));
    }
}
