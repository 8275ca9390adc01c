pub mod collector;
pub mod errors;
pub mod forms;
pub mod models;
pub mod submission;
pub mod tasks;

#[cfg(test)]
mod submission_tests;

pub use collector::FormState;
pub use errors::{
    MediVoiceError,
    SubmissionError,
    VoiceError,
};
pub use models::{
    Category,
    Diagnosis,
    FieldKind,
    FieldSpec,
    FieldValue,
};
