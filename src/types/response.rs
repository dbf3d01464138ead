use serde::{Deserialize, Serialize};

/// `{ success, data, message? }` envelope used by the REST API and AI services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, turning a failed envelope into an error
    pub fn into_data(self) -> anyhow::Result<T> {
        if !self.success {
            anyhow::bail!(
                "Service reported failure: {}",
                self.message.unwrap_or_else(|| "no message".to_string())
            );
        }
        self.data
            .ok_or_else(|| anyhow::anyhow!("Service response carried no data"))
    }
}

// ===== Service Response Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsScoreResponse {
    pub score: f64,
    #[serde(default)]
    pub matched_keywords: Vec<String>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub enhanced_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_envelope() {
        let envelope: ApiEnvelope<AtsScoreResponse> = serde_json::from_str(
            r#"{"success": true, "data": {"score": 82.5, "missingKeywords": ["kubernetes"]}}"#,
        )
        .unwrap();

        let data = envelope.into_data().unwrap();
        assert_eq!(data.score, 82.5);
        assert_eq!(data.missing_keywords, vec!["kubernetes".to_string()]);
        assert!(data.matched_keywords.is_empty());
    }

    #[test]
    fn test_failed_envelope_is_an_error() {
        let envelope: ApiEnvelope<EnhanceResponse> =
            serde_json::from_str(r#"{"success": false, "data": null, "message": "quota"}"#)
                .unwrap();

        let err = envelope.into_data().unwrap_err();
        assert!(err.to_string().contains("quota"));
    }
}
