use std::sync::Arc;

use crate::{
    classifier::ClassifierSet,
    core::errors::VoiceError,
};

#[derive(Clone)]
pub enum TaskResult {
    ClassifiersLoaded(Result<Arc<ClassifierSet>, String>),
    LoadingMessage(String),

    VoiceCapture { key: String, result: Result<String, VoiceError> },
    SpeechFinished(Result<(), String>),
}
