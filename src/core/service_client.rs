// src/core/service_client.rs
//! HTTP client for the external ATS scoring / AI enhancement service.
//! The scoring itself happens remotely; this only ships text and unwraps envelopes.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::app_log;
use crate::types::response::{ApiEnvelope, AtsScoreResponse, EnhanceResponse};

const ATS_SCORE_ENDPOINT: &str = "/ai/ats-score";
const ENHANCE_ENDPOINT: &str = "/ai/enhance";

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Score a plain-text resume, optionally against a job description
    pub async fn score_resume(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<AtsScoreResponse> {
        let payload = serde_json::json!({
            "resumeText": resume_text,
            "jobDescription": job_description,
        });

        app_log!(
            trace,
            "Requesting ATS score for {} characters of resume text",
            resume_text.len()
        );
        let envelope: ApiEnvelope<AtsScoreResponse> =
            self.post_json(ATS_SCORE_ENDPOINT, &payload).await?;
        envelope.into_data().context("ATS scoring failed")
    }

    /// Ask the AI service to rewrite a piece of text (e.g. a summary)
    pub async fn enhance_text(&self, text: &str, section: &str) -> Result<String> {
        let payload = serde_json::json!({
            "text": text,
            "section": section,
        });

        let envelope: ApiEnvelope<EnhanceResponse> =
            self.post_json(ENHANCE_ENDPOINT, &payload).await?;
        Ok(envelope
            .into_data()
            .context("Text enhancement failed")?
            .enhanced_text)
    }

    /// Generic POST request with JSON
    pub async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        app_log!(info, "Calling service: {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<R>()
                .await
                .context("Failed to parse JSON response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            app_log!(error, "Service error response from {}: {}", url, error_text);
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }
}
