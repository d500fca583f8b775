//! Gemini implementation of the [`CharacterGenerator`] port

use super::error::{GeminiError, Result};
use super::types::{
    PredictRequest, parse_error_response, parse_image_response, parse_traits_response,
    traits_request,
};
use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use forge_application::{CharacterGenerator, GeneratorError};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

/// Character generator backed by Imagen and Gemini
pub struct GeminiCharacterGenerator {
    client: Client,
    api_key: String,
    base_url: String,
    image_model: String,
    text_model: String,
}

impl GeminiCharacterGenerator {
    /// Create a generator, reading the API key from the configured
    /// environment variable.
    pub fn from_config(config: &FileGeminiConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GeminiError::MissingApiKey(config.api_key_env.clone()))?;
        Self::with_api_key(config, api_key)
    }

    /// Create a generator with an explicit API key.
    pub fn with_api_key(config: &FileGeminiConfig, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        info!(
            "GeminiCharacterGenerator initialized (image: {}, text: {})",
            config.image_model, config.text_model
        );

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            image_model: config.image_model.clone(),
            text_model: config.text_model.clone(),
        })
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.base_url, model, method)
    }

    /// POST a JSON body and return the response text of a 2xx reply.
    async fn post<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<String> {
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(parse_error_response(status.as_u16(), &text));
        }
        Ok(text)
    }

    async fn request_image(&self, prompt: &str) -> Result<String> {
        let url = self.endpoint(&self.image_model, "predict");
        let body = self.post(&url, &PredictRequest::portrait(prompt)).await?;
        let image = parse_image_response(&body)?;
        debug!("Received {} bytes of base64 image data", image.len());
        Ok(image)
    }

    async fn request_traits(&self, prompt: &str) -> Result<Vec<String>> {
        let url = self.endpoint(&self.text_model, "generateContent");
        let body = self.post(&url, &traits_request(prompt)).await?;
        let traits = parse_traits_response(&body)?;
        debug!("Received traits: {:?}", traits);
        Ok(traits)
    }
}

#[async_trait]
impl CharacterGenerator for GeminiCharacterGenerator {
    async fn generate_character_image(
        &self,
        prompt: &str,
    ) -> std::result::Result<String, GeneratorError> {
        self.request_image(prompt).await.map_err(GeneratorError::from)
    }

    async fn generate_character_traits(
        &self,
        prompt: &str,
    ) -> std::result::Result<Vec<String>, GeneratorError> {
        self.request_traits(prompt).await.map_err(GeneratorError::from)
    }
}
