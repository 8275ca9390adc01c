use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediVoiceError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Model decode error: {0}")]
    ModelDecode(String),

    #[error("Missing model file: {0}")]
    MissingModel(String),

    #[error("Audio playback failed: {0}")]
    Playback(String),
}

impl From<std::io::Error> for MediVoiceError {
    fn from(error: std::io::Error) -> Self {
        MediVoiceError::Io(Box::new(error))
    }
}

/// Outcome of one voice capture attempt. All variants are transient,
/// user-visible warnings; none touch the stored field value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    #[error("Listening timed out. Please try again.")]
    Timeout,

    #[error("Could not understand audio")]
    Unrecognized,

    #[error("Could not reach the transcription service")]
    ServiceUnavailable,

    #[error("Error: {0}")]
    Unknown(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// One blanket message; validation never names the failing field.
    #[error("Please enter valid numbers for all fields")]
    InvalidInput,

    #[error("Error making prediction: {0}")]
    Classifier(String),
}
