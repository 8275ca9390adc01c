use std::time::Duration;

use crate::core::errors::VoiceError;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Text-to-speech collaborator. Returns encoded audio (mp3) for
/// immediate playback; failures here are never fatal to the workflow.
pub trait Synthesizer: Send + Sync {
    fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, VoiceError>;
}

/// Client for a gTTS-style HTTP endpoint: GET with `text` and `lang`
/// query parameters, mp3 bytes in the body.
pub struct HttpSynthesizer {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpSynthesizer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), client: reqwest::blocking::Client::new() }
    }
}

impl Synthesizer for HttpSynthesizer {
    fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, VoiceError> {
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(Duration::from_secs(15))
            .query(&[("text", text), ("lang", language)])
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    VoiceError::ServiceUnavailable
                } else {
                    VoiceError::Unknown(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(VoiceError::ServiceUnavailable);
        }

        let bytes = response.bytes().map_err(|e| VoiceError::Unknown(e.to_string()))?;

        if bytes.is_empty() {
            return Err(VoiceError::Unknown("synthesis returned no audio".to_string()));
        }

        Ok(bytes.to_vec())
    }
}
