use serde::{
    Deserialize,
    Serialize,
};

use super::Classifier;

/// Standardized logistic regression, the serialized form the training
/// side exports. `means`/`scales` are the per-feature standardization
/// parameters baked in at training time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    pub intercept: f64,
    pub means: Vec<f64>,
    pub scales: Vec<f64>,
}

impl LogisticModel {
    fn decision(&self, row: &[f64]) -> f64 {
        let mut score = self.intercept;
        for (i, value) in row.iter().enumerate() {
            let scale = if self.scales[i] == 0.0 { 1.0 } else { self.scales[i] };
            score += self.weights[i] * ((value - self.means[i]) / scale);
        }
        score
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, row: &[f64]) -> Result<f64, String> {
        if row.len() != self.weights.len() {
            return Err(format!(
                "model expects {} features, got {}",
                self.weights.len(),
                row.len()
            ));
        }

        if self.means.len() != self.weights.len() || self.scales.len() != self.weights.len() {
            return Err("model standardization parameters are malformed".to_string());
        }

        // Sigmoid threshold at 0.5 is a zero decision boundary.
        Ok(if self.decision(row) > 0.0 { 1.0 } else { 0.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_model(weights: Vec<f64>) -> LogisticModel {
        let n = weights.len();
        LogisticModel { weights, intercept: 0.0, means: vec![0.0; n], scales: vec![1.0; n] }
    }

    #[test]
    fn predicts_on_either_side_of_the_boundary() {
        let model = unit_model(vec![1.0, -1.0]);

        assert_eq!(model.predict(&[3.0, 1.0]), Ok(1.0));
        assert_eq!(model.predict(&[1.0, 3.0]), Ok(0.0));
    }

    #[test]
    fn intercept_shifts_the_boundary() {
        let model = LogisticModel {
            weights: vec![1.0],
            intercept: -5.0,
            means: vec![0.0],
            scales: vec![1.0],
        };

        assert_eq!(model.predict(&[4.0]), Ok(0.0));
        assert_eq!(model.predict(&[6.0]), Ok(1.0));
    }

    #[test]
    fn standardization_is_applied() {
        let model = LogisticModel {
            weights: vec![1.0],
            intercept: 0.0,
            means: vec![100.0],
            scales: vec![10.0],
        };

        assert_eq!(model.predict(&[130.0]), Ok(1.0));
        assert_eq!(model.predict(&[70.0]), Ok(0.0));
    }

    #[test]
    fn wrong_arity_is_an_error_not_a_panic() {
        let model = unit_model(vec![1.0, 2.0, 3.0]);
        let err = model.predict(&[1.0]).unwrap_err();
        assert!(err.contains("expects 3 features"));
    }

    #[test]
    fn zero_scale_does_not_divide_by_zero() {
        let model = LogisticModel {
            weights: vec![1.0],
            intercept: 0.0,
            means: vec![0.0],
            scales: vec![0.0],
        };

        assert_eq!(model.predict(&[2.0]), Ok(1.0));
    }
}
