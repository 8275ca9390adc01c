use super::{
    collector::FormState,
    errors::SubmissionError,
    models::Diagnosis,
};
use crate::classifier::Classifier;

/// Validates the whole record and runs the classifier once. Every field
/// must hold a finite number; any failure aborts before the classifier
/// is touched. The row is built in catalog order, which is the order the
/// model was trained on.
pub fn submit(form: &FormState, classifier: &dyn Classifier) -> Result<Diagnosis, SubmissionError> {
    let mut row = Vec::with_capacity(form.fields().len());

    for field in form.fields() {
        let parsed = field.value.trim().parse::<f64>();
        match parsed {
            Ok(value) if value.is_finite() => row.push(value),
            _ => return Err(SubmissionError::InvalidInput),
        }
    }

    let prediction = classifier.predict(&row).map_err(SubmissionError::Classifier)?;

    Ok(Diagnosis::from_prediction(form.category(), prediction))
}
