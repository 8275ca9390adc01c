use std::time::Duration;

use super::{
    forms::fields_for,
    models::{
        Category,
        FieldValue,
    },
};
use crate::{
    core::errors::VoiceError,
    voice::{
        capture,
        CaptureGate,
        Transcriber,
    },
};

/// Ordered field state for one diagnosis category. Field order is the
/// catalog order; everything that reads the record in sequence relies on
/// that, never on any keyed lookup order.
pub struct FormState {
    category: Category,
    fields: Vec<FieldValue>,
}

impl FormState {
    pub fn new(category: Category) -> Self {
        let fields = fields_for(category).iter().map(|spec| FieldValue::new(*spec)).collect();
        Self { category, fields }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }

    /// Current stored value, empty string for unset or unknown keys.
    pub fn value_of(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|field| field.spec.key == key)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    /// Unconditional overwrite; typed input and voice capture share this
    /// path. Unknown keys are ignored.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|field| field.spec.key == key) {
            field.value = value.into();
        }
    }

    /// Lenient display policy for numeric widgets: a stored value that is
    /// empty or fails to parse shows as 0.0, while the raw string stays
    /// in storage untouched. Submission re-validates strictly.
    pub fn display_number(&self, key: &str) -> f64 {
        let raw = self.value_of(key);
        if raw.is_empty() {
            return 0.0;
        }

        raw.parse::<f64>().unwrap_or(0.0)
    }

    /// One voice capture attempt for a field: acquires the shared gate,
    /// runs the transcriber, and stores the transcript verbatim on
    /// success. Any error leaves the stored value untouched.
    pub fn request_voice_capture(
        &mut self,
        key: &str,
        gate: &CaptureGate,
        transcriber: &dyn Transcriber,
        timeout: Duration,
        calibration: Duration,
    ) -> Result<String, VoiceError> {
        let transcript = capture(gate, transcriber, timeout, calibration)?;
        self.set_value(key, transcript.clone());
        Ok(transcript)
    }
}
