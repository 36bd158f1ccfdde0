//! Answers trainer questions. Tries the live model once when a
//! credential is configured and falls back to the canned answers on
//! any failure. Errors are logged, never returned.
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Error, Result};
use async_trait::async_trait;
use handlebars::Handlebars;
use serde::{Deserialize, Serialize};

use crate::ai::fallback::FallbackTable;
use crate::ai::prompt::{render_trainer_prompt, templates};
use crate::core::AppConfig;
use crate::gemini::generate_text;

/// Anything that can turn a prompt into generated text.
#[async_trait]
pub trait TextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, Error>;
}

pub type BoxedTextGenerator = Arc<dyn TextGenerator + Send + Sync + 'static>;

pub struct GeminiGenerator {
    client: reqwest::Client,
    api_hostname: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GeminiGenerator {
    pub fn new(api_hostname: &str, api_key: &str, model: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, Error> {
        generate_text(
            &self.client,
            prompt,
            &self.api_hostname,
            &self.api_key,
            &self.model,
            self.timeout,
        )
        .await
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceSource {
    Live,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub text: String,
    pub source: AdviceSource,
}

impl Advice {
    fn fallback(text: &str) -> Self {
        Self {
            text: text.to_string(),
            source: AdviceSource::Fallback,
        }
    }
}

pub struct FitnessAdvisor {
    generator: Option<BoxedTextGenerator>,
    fallback: FallbackTable,
    templates: Handlebars<'static>,
}

impl FitnessAdvisor {
    /// Without a generator every answer comes from `fallback`.
    pub fn new(generator: Option<BoxedTextGenerator>, fallback: FallbackTable) -> Self {
        Self {
            generator,
            fallback,
            templates: templates(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        if !config.has_credential() {
            tracing::info!("No GEMINI_API_KEY configured, chat answers use the fallback table");
        }
        let generator = config.gemini_api_key.as_ref().map(|api_key| {
            Arc::new(GeminiGenerator::new(
                &config.gemini_api_hostname,
                api_key,
                &config.gemini_model,
                Duration::from_secs(config.gemini_timeout_secs),
            )) as BoxedTextGenerator
        });
        Self::new(generator, FallbackTable::default())
    }

    pub fn is_live(&self) -> bool {
        self.generator.is_some()
    }

    pub fn fallback(&self) -> &FallbackTable {
        &self.fallback
    }

    pub async fn advise(&self, message: &str) -> Advice {
        let Some(generator) = &self.generator else {
            return Advice::fallback(self.fallback.respond(message));
        };

        match self.ask_live(generator, message).await {
            Ok(text) => Advice {
                text,
                source: AdviceSource::Live,
            },
            Err(e) => {
                tracing::error!(
                    "Live advice failed, using fallback: {}. Root cause: {}",
                    e,
                    e.root_cause()
                );
                Advice::fallback(self.fallback.respond(message))
            }
        }
    }

    async fn ask_live(&self, generator: &BoxedTextGenerator, message: &str) -> Result<String> {
        let prompt = render_trainer_prompt(&self.templates, message)?;
        tracing::debug!("Requesting live advice");
        generator.generate(&prompt).await
    }
}
