#[cfg(test)]
mod tests {
    use std::{
        sync::Mutex,
        time::Duration,
    };

    use crate::{
        classifier::Classifier,
        core::{
            errors::{
                SubmissionError,
                VoiceError,
            },
            forms::fields_for,
            models::Category,
            submission::submit,
            FormState,
        },
        voice::{
            CaptureGate,
            Synthesizer,
            Transcriber,
        },
    };

    /// Records every row it is asked to predict on.
    struct CountingClassifier {
        calls: Mutex<Vec<Vec<f64>>>,
        prediction: f64,
    }

    impl CountingClassifier {
        fn returning(prediction: f64) -> Self {
            Self { calls: Mutex::new(Vec::new()), prediction }
        }

        fn calls(&self) -> Vec<Vec<f64>> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Classifier for CountingClassifier {
        fn predict(&self, row: &[f64]) -> Result<f64, String> {
            self.calls.lock().unwrap().push(row.to_vec());
            Ok(self.prediction)
        }
    }

    struct FaultyClassifier;

    impl Classifier for FaultyClassifier {
        fn predict(&self, _row: &[f64]) -> Result<f64, String> {
            Err("matrix dimensions do not agree".to_string())
        }
    }

    struct FixedTranscriber(Result<String, VoiceError>);

    impl Transcriber for FixedTranscriber {
        fn listen(&self, _timeout: Duration, _calibration: Duration) -> Result<String, VoiceError> {
            self.0.clone()
        }
    }

    struct RecordingSynthesizer {
        spoken: Mutex<Vec<String>>,
    }

    impl RecordingSynthesizer {
        fn new() -> Self {
            Self { spoken: Mutex::new(Vec::new()) }
        }
    }

    impl Synthesizer for RecordingSynthesizer {
        fn synthesize(&self, text: &str, _language: &str) -> Result<Vec<u8>, VoiceError> {
            self.spoken.lock().unwrap().push(text.to_string());
            Ok(vec![0u8])
        }
    }

    fn fill_in_order(form: &mut FormState, values: &[f64]) {
        let keys: Vec<&str> = fields_for(form.category()).iter().map(|f| f.key).collect();
        assert_eq!(keys.len(), values.len());
        for (key, value) in keys.iter().zip(values) {
            form.set_value(key, value.to_string());
        }
    }

    #[test]
    fn numeric_display_defaults_to_zero_without_touching_storage() {
        let mut form = FormState::new(Category::Diabetes);

        // Unset field.
        assert_eq!(form.display_number("Glucose"), 0.0);
        assert_eq!(form.value_of("Glucose"), "");

        // Non-numeric stored value: display falls back, raw text stays.
        form.set_value("Glucose", "one forty");
        assert_eq!(form.display_number("Glucose"), 0.0);
        assert_eq!(form.value_of("Glucose"), "one forty");

        form.set_value("Glucose", "140.5");
        assert_eq!(form.display_number("Glucose"), 140.5);
    }

    #[test]
    fn voice_capture_round_trip_stores_transcript_verbatim() {
        let mut form = FormState::new(Category::Diabetes);
        let gate = CaptureGate::new();
        let transcriber = FixedTranscriber(Ok("ninety nine".to_string()));

        let transcript = form
            .request_voice_capture(
                "BMI",
                &gate,
                &transcriber,
                Duration::from_secs(5),
                Duration::from_millis(500),
            )
            .unwrap();

        assert_eq!(transcript, "ninety nine");
        // No coercion before storage, even though "ninety nine" is not numeric.
        assert_eq!(form.value_of("BMI"), "ninety nine");
        assert!(!gate.is_listening());
    }

    #[test]
    fn failed_capture_preserves_prior_value_and_clears_flag() {
        for error in
            [VoiceError::Timeout, VoiceError::Unrecognized, VoiceError::ServiceUnavailable]
        {
            let mut form = FormState::new(Category::Diabetes);
            form.set_value("Age", "52");

            let gate = CaptureGate::new();
            let transcriber = FixedTranscriber(Err(error.clone()));

            let result = form.request_voice_capture(
                "Age",
                &gate,
                &transcriber,
                Duration::from_secs(5),
                Duration::from_millis(500),
            );

            assert_eq!(result, Err(error));
            assert_eq!(form.value_of("Age"), "52");
            assert!(!gate.is_listening());
        }
    }

    #[test]
    fn capture_rejected_while_listening_has_no_side_effects() {
        let mut form = FormState::new(Category::Diabetes);
        form.set_value("Age", "52");

        let gate = CaptureGate::new();
        let _held = gate.try_begin().unwrap();
        let transcriber = FixedTranscriber(Ok("33".to_string()));

        let result = form.request_voice_capture(
            "Age",
            &gate,
            &transcriber,
            Duration::from_secs(5),
            Duration::from_millis(500),
        );

        assert!(matches!(result, Err(VoiceError::Unknown(_))));
        assert_eq!(form.value_of("Age"), "52");
    }

    #[test]
    fn diabetes_submission_makes_one_ordered_predict_call() {
        let mut form = FormState::new(Category::Diabetes);
        let values = [2.0, 120.0, 70.0, 20.0, 80.0, 25.5, 0.47, 33.0];
        fill_in_order(&mut form, &values);

        let classifier = CountingClassifier::returning(0.0);
        let diagnosis = submit(&form, &classifier).unwrap();

        let calls = classifier.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], values.to_vec());
        assert!(!diagnosis.is_positive);
        assert_eq!(diagnosis.message, "The person is not diabetic");
    }

    #[test]
    fn any_non_numeric_field_blocks_the_classifier() {
        let mut form = FormState::new(Category::Diabetes);
        let values = [2.0, 120.0, 70.0, 20.0, 80.0, 25.5, 0.47, 33.0];
        fill_in_order(&mut form, &values);
        form.set_value("Insulin", "a lot");

        let classifier = CountingClassifier::returning(1.0);
        let result = submit(&form, &classifier);

        assert_eq!(result, Err(SubmissionError::InvalidInput));
        assert!(classifier.calls().is_empty());
    }

    #[test]
    fn empty_field_blocks_the_classifier() {
        let mut form = FormState::new(Category::Thyroid);
        let classifier = CountingClassifier::returning(1.0);

        assert_eq!(submit(&form, &classifier), Err(SubmissionError::InvalidInput));
        assert!(classifier.calls().is_empty());
    }

    #[test]
    fn non_finite_values_are_invalid_input() {
        let mut form = FormState::new(Category::Thyroid);
        fill_in_order(&mut form, &[45.0, 1.0, 0.0, 2.4, 1.0, 1.1, 7.0]);
        form.set_value("tsh", "inf");

        let classifier = CountingClassifier::returning(1.0);
        assert_eq!(submit(&form, &classifier), Err(SubmissionError::InvalidInput));
        assert!(classifier.calls().is_empty());
    }

    #[test]
    fn heart_disease_positive_scenario_message_and_speech() {
        let mut form = FormState::new(Category::HeartDisease);
        let values = [
            63.0, 1.0, 3.0, 145.0, 233.0, 1.0, 0.0, 150.0, 0.0, 2.3, 0.0, 0.0, 1.0,
        ];
        fill_in_order(&mut form, &values);

        let classifier = CountingClassifier::returning(1.0);
        let diagnosis = submit(&form, &classifier).unwrap();

        assert!(diagnosis.is_positive);
        assert_eq!(diagnosis.message, "The person has heart disease");
        assert_eq!(classifier.calls()[0], values.to_vec());

        // On-screen text and speech always carry the same message.
        let synthesizer = RecordingSynthesizer::new();
        synthesizer.synthesize(&diagnosis.message, "en").unwrap();
        assert_eq!(synthesizer.spoken.lock().unwrap().as_slice(), ["The person has heart disease"]);
    }

    #[test]
    fn heart_disease_negative_scenario_message() {
        let mut form = FormState::new(Category::HeartDisease);
        let values = [
            63.0, 1.0, 3.0, 145.0, 233.0, 1.0, 0.0, 150.0, 0.0, 2.3, 0.0, 0.0, 1.0,
        ];
        fill_in_order(&mut form, &values);

        let classifier = CountingClassifier::returning(0.0);
        let diagnosis = submit(&form, &classifier).unwrap();

        assert!(!diagnosis.is_positive);
        assert_eq!(diagnosis.message, "The person does not have heart disease");
    }

    #[test]
    fn classifier_fault_surfaces_without_a_diagnosis() {
        let mut form = FormState::new(Category::Diabetes);
        fill_in_order(&mut form, &[2.0, 120.0, 70.0, 20.0, 80.0, 25.5, 0.47, 33.0]);

        let result = submit(&form, &FaultyClassifier);
        assert_eq!(
            result,
            Err(SubmissionError::Classifier("matrix dimensions do not agree".to_string()))
        );
    }

    #[test]
    fn non_one_predictions_are_negative() {
        let mut form = FormState::new(Category::Diabetes);
        fill_in_order(&mut form, &[2.0, 120.0, 70.0, 20.0, 80.0, 25.5, 0.47, 33.0]);

        // Anything other than exactly 1 counts as negative.
        for prediction in [0.0, -1.0, 2.0, 0.99] {
            let classifier = CountingClassifier::returning(prediction);
            let diagnosis = submit(&form, &classifier).unwrap();
            assert!(!diagnosis.is_positive, "prediction {} treated as positive", prediction);
        }
    }
}
