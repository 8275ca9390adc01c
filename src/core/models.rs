/// How a field's widget renders. Numeric fields still store raw strings;
/// the parse only happens for display and at submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// One named measurement in a diagnosis form. Catalog data, fixed at
/// compile time so field order can never drift.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub tooltip: &'static str,
    pub kind: FieldKind,
}

/// A field spec paired with the value the user has entered so far.
#[derive(Debug, Clone)]
pub struct FieldValue {
    pub spec: FieldSpec,
    pub value: String,
}

impl FieldValue {
    pub fn new(spec: FieldSpec) -> Self {
        Self { spec, value: String::new() }
    }
}

/// The five diagnosis categories. Each carries its classifier's input
/// arity and result messages as data so assembly logic stays generic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Diabetes,
    HeartDisease,
    Parkinsons,
    LungCancer,
    Thyroid,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Diabetes,
        Category::HeartDisease,
        Category::Parkinsons,
        Category::LungCancer,
        Category::Thyroid,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Diabetes => "Diabetes Prediction",
            Category::HeartDisease => "Heart Disease Prediction",
            Category::Parkinsons => "Parkinsons Prediction",
            Category::LungCancer => "Lung Cancer Prediction",
            Category::Thyroid => "Hypo-Thyroid Prediction",
        }
    }

    /// Fixed-length, fixed-order input vector each trained model expects.
    pub fn arity(&self) -> usize {
        match self {
            Category::Diabetes => 8,
            Category::HeartDisease => 13,
            Category::Parkinsons => 22,
            Category::LungCancer => 15,
            Category::Thyroid => 7,
        }
    }

    /// Model blob file name under the models directory.
    pub fn model_file(&self) -> &'static str {
        match self {
            Category::Diabetes => "diabetes_model.bin",
            Category::HeartDisease => "heart_disease_model.bin",
            Category::Parkinsons => "parkinsons_model.bin",
            Category::LungCancer => "lungs_disease_model.bin",
            Category::Thyroid => "thyroid_model.bin",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Category::Diabetes => "Diabetes Test Result",
            Category::HeartDisease => "Heart Disease Test Result",
            Category::Parkinsons => "Parkinson's Test Result",
            Category::LungCancer => "Lung Cancer Test Result",
            Category::Thyroid => "Thyroid Test Result",
        }
    }

    pub fn positive_message(&self) -> &'static str {
        match self {
            Category::Diabetes => "The person is diabetic",
            Category::HeartDisease => "The person has heart disease",
            Category::Parkinsons => "The person has Parkinson's disease",
            Category::LungCancer => "The person has lung cancer disease",
            Category::Thyroid => "The person has Hypo-Thyroid disease",
        }
    }

    pub fn negative_message(&self) -> &'static str {
        match self {
            Category::Diabetes => "The person is not diabetic",
            Category::HeartDisease => "The person does not have heart disease",
            Category::Parkinsons => "The person does not have Parkinson's disease",
            Category::LungCancer => "The person does not have lung cancer disease",
            Category::Thyroid => "The person does not have Hypo-Thyroid disease",
        }
    }
}

/// Result of one classified record. Transient: rendered, spoken, dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosis {
    pub is_positive: bool,
    pub message: String,
}

impl Diagnosis {
    pub fn from_prediction(category: Category, prediction: f64) -> Self {
        let is_positive = prediction == 1.0;
        let message = if is_positive {
            category.positive_message().to_string()
        } else {
            category.negative_message().to_string()
        };

        Self { is_positive, message }
    }
}
