//! Wire types for the Gemini REST API and their conversion to plain values

use super::error::{GeminiError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

// ─── Imagen :predict ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub instances: [PredictInstance<'a>; 1],
    pub parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
pub struct PredictInstance<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    pub sample_count: u32,
    pub output_mime_type: &'static str,
    pub aspect_ratio: &'static str,
}

impl<'a> PredictRequest<'a> {
    /// One square JPEG portrait.
    pub fn portrait(prompt: &'a str) -> Self {
        Self {
            instances: [PredictInstance { prompt }],
            parameters: PredictParameters {
                sample_count: 1,
                output_mime_type: "image/jpeg",
                aspect_ratio: "1:1",
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub bytes_base64_encoded: Option<String>,
    pub rai_filtered_reason: Option<String>,
}

/// Extract the first image payload from an Imagen response body.
pub fn parse_image_response(body: &str) -> Result<String> {
    let response: PredictResponse = serde_json::from_str(body)?;
    let Some(first) = response.predictions.into_iter().next() else {
        return Err(GeminiError::UnexpectedResponse(
            "no image was returned (the prompt may have been filtered)".to_string(),
        ));
    };
    match (first.bytes_base64_encoded, first.rai_filtered_reason) {
        (Some(bytes), _) if !bytes.is_empty() => Ok(bytes),
        (_, Some(reason)) => Err(GeminiError::UnexpectedResponse(format!(
            "image was filtered: {}",
            reason
        ))),
        _ => Err(GeminiError::UnexpectedResponse(
            "image payload is empty".to_string(),
        )),
    }
}

// ─── Gemini :generateContent ─────────────────────────────────────

/// Request body asking for `{"traits": [string]}` as JSON.
pub fn traits_request(prompt: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "traits": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" }
                    }
                },
                "required": ["traits"]
            }
        }
    })
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TraitsPayload {
    traits: Vec<String>,
}

/// Extract the trait list from a `generateContent` response body.
pub fn parse_traits_response(body: &str) -> Result<Vec<String>> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or_else(|| GeminiError::UnexpectedResponse("no text candidate returned".to_string()))?;

    let payload: TraitsPayload = serde_json::from_str(text.trim())?;
    Ok(payload
        .traits
        .into_iter()
        .map(|t| t.trim().to_string())
        .collect())
}

// ─── Errors ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Build an API error from a non-success response, preferring the message
/// Google puts in `{"error": {"message": ...}}`.
pub fn parse_error_response(status: u16, body: &str) -> GeminiError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| {
            let body = body.trim();
            if body.is_empty() {
                format!("HTTP status {}", status)
            } else {
                body.to_string()
            }
        });
    GeminiError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portrait_request_shape() {
        let body = serde_json::to_value(PredictRequest::portrait("a knight")).unwrap();
        assert_eq!(
            body,
            json!({
                "instances": [{ "prompt": "a knight" }],
                "parameters": {
                    "sampleCount": 1,
                    "outputMimeType": "image/jpeg",
                    "aspectRatio": "1:1"
                }
            })
        );
    }

    #[test]
    fn test_parse_image_response() {
        let body = r#"{"predictions":[{"bytesBase64Encoded":"/9j/4AAQ","mimeType":"image/jpeg"}]}"#;
        assert_eq!(parse_image_response(body).unwrap(), "/9j/4AAQ");
    }

    #[test]
    fn test_parse_image_response_without_predictions() {
        let err = parse_image_response("{}").unwrap_err();
        assert!(matches!(err, GeminiError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_parse_image_response_filtered() {
        let body = r#"{"predictions":[{"raiFilteredReason":"violence"}]}"#;
        let err = parse_image_response(body).unwrap_err();
        assert!(err.to_string().contains("violence"));
    }

    #[test]
    fn test_parse_traits_response() {
        let body = r#"{
            "candidates": [{
                "content": {
                    "parts": [{ "text": "{\"traits\": [\"Brave \", \"Cautious\", \"Loyal\"]}" }],
                    "role": "model"
                }
            }]
        }"#;
        assert_eq!(
            parse_traits_response(body).unwrap(),
            vec!["Brave", "Cautious", "Loyal"]
        );
    }

    #[test]
    fn test_parse_traits_response_rejects_non_json_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Brave, Cautious"}]}}]}"#;
        assert!(matches!(
            parse_traits_response(body).unwrap_err(),
            GeminiError::Json(_)
        ));
    }

    #[test]
    fn test_parse_traits_response_without_candidates() {
        let err = parse_traits_response(r#"{"candidates":[]}"#).unwrap_err();
        assert!(matches!(err, GeminiError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_traits_request_uses_schema() {
        let body = traits_request("three traits");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "three traits");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            body["generationConfig"]["responseSchema"]["properties"]["traits"]["type"],
            "ARRAY"
        );
    }

    #[test]
    fn test_parse_error_response() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        match parse_error_response(400, body) {
            GeminiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_response_plain_body() {
        match parse_error_response(503, "") {
            GeminiError::Api { message, .. } => assert_eq!(message, "HTTP status 503"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
