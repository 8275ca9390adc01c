use std::{
    collections::HashMap,
    fs,
    path::Path,
};

use super::{
    Classifier,
    LogisticModel,
};
use crate::core::{
    errors::MediVoiceError,
    models::Category,
};

const MODEL_DIR: &str = "models";

/// The five loaded category models. Built once at startup on a task
/// thread and shared read-only with the GUI.
pub struct ClassifierSet {
    models: HashMap<Category, Box<dyn Classifier>>,
}

impl ClassifierSet {
    pub fn get(&self, category: Category) -> Option<&dyn Classifier> {
        self.models.get(&category).map(|boxed| boxed.as_ref())
    }

    /// Loads every category model from the models directory next to the
    /// executable's working directory. Any missing or corrupt blob fails
    /// the whole load; a partially usable set would silently disable
    /// some forms.
    pub fn load_all() -> Result<Self, MediVoiceError> {
        Self::load_from(Path::new(MODEL_DIR))
    }

    pub fn load_from(dir: &Path) -> Result<Self, MediVoiceError> {
        let mut models: HashMap<Category, Box<dyn Classifier>> = HashMap::new();

        for category in Category::ALL {
            let path = dir.join(category.model_file());
            let model = load_model(&path)?;

            if model.weights.len() != category.arity() {
                return Err(MediVoiceError::ModelDecode(format!(
                    "{} has {} weights, {} expects {}",
                    path.display(),
                    model.weights.len(),
                    category.title(),
                    category.arity()
                )));
            }

            models.insert(category, Box::new(model));
        }

        println!("Loaded {} classifier models from {}", models.len(), dir.display());

        Ok(Self { models })
    }
}

fn load_model(path: &Path) -> Result<LogisticModel, MediVoiceError> {
    if !path.exists() {
        return Err(MediVoiceError::MissingModel(path.display().to_string()));
    }

    let buffer = fs::read(path)?;

    let (model, _): (LogisticModel, usize) =
        bincode::serde::decode_from_slice(&buffer, bincode::config::standard())
            .map_err(|e| MediVoiceError::ModelDecode(format!("{}: {}", path.display(), e)))?;

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_model(dir: &Path, category: Category, arity: usize) {
        let model = LogisticModel {
            weights: vec![0.1; arity],
            intercept: 0.0,
            means: vec![0.0; arity],
            scales: vec![1.0; arity],
        };
        let encoded = bincode::serde::encode_to_vec(&model, bincode::config::standard()).unwrap();
        fs::write(dir.join(category.model_file()), encoded).unwrap();
    }

    #[test]
    fn loads_a_complete_model_directory() {
        let dir = std::env::temp_dir().join("medivoice_store_ok");
        fs::create_dir_all(&dir).unwrap();
        for category in Category::ALL {
            write_model(&dir, category, category.arity());
        }

        let set = ClassifierSet::load_from(&dir).unwrap();
        for category in Category::ALL {
            assert!(set.get(category).is_some());
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_blob_fails_the_whole_load() {
        let dir = std::env::temp_dir().join("medivoice_store_missing");
        fs::create_dir_all(&dir).unwrap();
        write_model(&dir, Category::Diabetes, Category::Diabetes.arity());

        let result = ClassifierSet::load_from(&dir);
        assert!(matches!(result, Err(MediVoiceError::MissingModel(_))));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn arity_mismatch_is_rejected_at_load_time() {
        let dir = std::env::temp_dir().join("medivoice_store_arity");
        fs::create_dir_all(&dir).unwrap();
        for category in Category::ALL {
            write_model(&dir, category, category.arity());
        }
        write_model(&dir, Category::Thyroid, 3);

        let result = ClassifierSet::load_from(&dir);
        assert!(matches!(result, Err(MediVoiceError::ModelDecode(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
