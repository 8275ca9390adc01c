pub mod linear;
pub mod store;

pub use linear::LogisticModel;
pub use store::ClassifierSet;

/// An opaque, pre-trained binary predictor. One row in, one scalar out;
/// 1.0 means positive, anything else negative. Errors are plain strings
/// because they only ever travel to a user-visible message.
pub trait Classifier: Send + Sync {
    fn predict(&self, row: &[f64]) -> Result<f64, String>;
}
