use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::errors::VoiceError;

/// Speech-to-text collaborator. One call covers the whole capture:
/// ambient-noise calibration, the bounded listen window, and decoding.
pub trait Transcriber: Send + Sync {
    fn listen(&self, timeout: Duration, calibration: Duration) -> Result<String, VoiceError>;
}

#[derive(Serialize)]
struct ListenRequest {
    timeout_secs: f64,
    calibration_secs: f64,
}

#[derive(Deserialize)]
struct ListenResponse {
    transcript: Option<String>,
    error: Option<String>,
}

/// Client for a local transcription sidecar speaking a one-endpoint JSON
/// protocol: POST /listen with the window parameters, response carries
/// either a transcript or an error kind.
pub struct HttpTranscriber {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpTranscriber {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), client: reqwest::blocking::Client::new() }
    }

    fn map_service_error(kind: &str) -> VoiceError {
        match kind {
            "timeout" => VoiceError::Timeout,
            "unrecognized" => VoiceError::Unrecognized,
            other => VoiceError::Unknown(other.to_string()),
        }
    }
}

impl Transcriber for HttpTranscriber {
    fn listen(&self, timeout: Duration, calibration: Duration) -> Result<String, VoiceError> {
        let request = ListenRequest {
            timeout_secs: timeout.as_secs_f64(),
            calibration_secs: calibration.as_secs_f64(),
        };

        // The sidecar holds the connection open for calibration plus the
        // listen window; pad the HTTP timeout so we don't cut it off.
        let http_timeout = timeout + calibration + Duration::from_secs(10);

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(http_timeout)
            .json(&request)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    VoiceError::Timeout
                } else if e.is_connect() {
                    VoiceError::ServiceUnavailable
                } else {
                    VoiceError::Unknown(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(VoiceError::ServiceUnavailable);
        }

        let body: ListenResponse =
            response.json().map_err(|e| VoiceError::Unknown(e.to_string()))?;

        if let Some(kind) = body.error {
            return Err(Self::map_service_error(&kind));
        }

        match body.transcript {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(VoiceError::Unrecognized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_kinds_map_onto_voice_errors() {
        assert_eq!(HttpTranscriber::map_service_error("timeout"), VoiceError::Timeout);
        assert_eq!(HttpTranscriber::map_service_error("unrecognized"), VoiceError::Unrecognized);
        assert_eq!(
            HttpTranscriber::map_service_error("disk on fire"),
            VoiceError::Unknown("disk on fire".to_string())
        );
    }
}
