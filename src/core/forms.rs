//! Per-category field catalogs. Order here is the order the trained
//! models expect; reordering entries silently changes predictions, so
//! these tables are the single source of truth for both the form layout
//! and the classifier input vector.

use super::models::{
    Category,
    FieldKind,
    FieldSpec,
};

const fn number(key: &'static str, label: &'static str, tooltip: &'static str) -> FieldSpec {
    FieldSpec { key, label, tooltip, kind: FieldKind::Number }
}

static DIABETES_FIELDS: [FieldSpec; 8] = [
    number("Pregnancies", "Number of Pregnancies", "Enter number of times pregnant"),
    number("Glucose", "Glucose Level", "Enter glucose level in mg/dL"),
    number("BloodPressure", "Blood Pressure value", "Enter blood pressure value in mmHg"),
    number(
        "SkinThickness",
        "Skin Thickness value",
        "Enter skin thickness value at triceps in mm",
    ),
    number("Insulin", "Insulin Level", "Enter insulin level in mu U/mL"),
    number("BMI", "BMI value", "Enter Body Mass Index value in kg/m²"),
    number(
        "DiabetesPedigreeFunction",
        "Diabetes Pedigree Function value",
        "Enter diabetes pedigree function value",
    ),
    number("Age", "Age of the Person", "Enter age of the person in years"),
];

static HEART_DISEASE_FIELDS: [FieldSpec; 13] = [
    number("age", "Age", "Enter age of the person in years"),
    number("sex", "Sex (1 = male; 0 = female)", "Enter 1 for male or 0 for female"),
    number(
        "cp",
        "Chest Pain types (0, 1, 2, 3)",
        "Enter chest pain type: 0 for typical angina, 1 for atypical angina, 2 for non-anginal pain, 3 for asymptomatic",
    ),
    number("trestbps", "Resting Blood Pressure", "Enter resting blood pressure in mmHg"),
    number("chol", "Serum Cholesterol in mg/dl", "Enter serum cholesterol in mg/dL"),
    number(
        "fbs",
        "Fasting Blood Sugar > 120 mg/dl (1 = true; 0 = false)",
        "Enter 1 if fasting blood sugar is greater than 120 mg/dL, otherwise 0",
    ),
    number(
        "restecg",
        "Resting Electrocardiographic results (0, 1, 2)",
        "Enter resting ECG results: 0 for normal, 1 for ST-T wave abnormality, 2 for probable or definite left ventricular hypertrophy",
    ),
    number("thalach", "Maximum Heart Rate achieved", "Enter maximum heart rate achieved"),
    number(
        "exang",
        "Exercise Induced Angina (1 = yes; 0 = no)",
        "Enter 1 if exercise induced angina is present, otherwise 0",
    ),
    number(
        "oldpeak",
        "ST depression induced by exercise",
        "Enter ST depression induced by exercise relative to rest",
    ),
    number(
        "slope",
        "Slope of the peak exercise ST segment (0, 1, 2)",
        "Enter slope of the peak exercise ST segment: 0 for upsloping, 1 for flat, 2 for downsloping",
    ),
    number(
        "ca",
        "Major vessels colored by fluoroscopy (0-3)",
        "Enter number of major vessels colored by fluoroscopy (0-3)",
    ),
    number(
        "thal",
        "Thal (0 = normal; 1 = fixed defect; 2 = reversible defect)",
        "Enter thalassemia type: 0 for normal, 1 for fixed defect, 2 for reversible defect",
    ),
];

static PARKINSONS_FIELDS: [FieldSpec; 22] = [
    number("fo", "MDVP:Fo(Hz)", "Enter average vocal fundamental frequency in Hz"),
    number("fhi", "MDVP:Fhi(Hz)", "Enter maximum vocal fundamental frequency in Hz"),
    number("flo", "MDVP:Flo(Hz)", "Enter minimum vocal fundamental frequency in Hz"),
    number("Jitter_percent", "MDVP:Jitter(%)", "Enter jitter percentage"),
    number("Jitter_Abs", "MDVP:Jitter(Abs)", "Enter absolute jitter in microseconds"),
    number("RAP", "MDVP:RAP", "Enter relative amplitude perturbation"),
    number("PPQ", "MDVP:PPQ", "Enter five-point period perturbation quotient"),
    number(
        "DDP",
        "Jitter:DDP",
        "Enter average absolute difference of differences between consecutive periods",
    ),
    number("Shimmer", "MDVP:Shimmer", "Enter shimmer"),
    number("Shimmer_dB", "MDVP:Shimmer(dB)", "Enter shimmer in decibels"),
    number("APQ3", "Shimmer:APQ3", "Enter three-point amplitude perturbation quotient"),
    number("APQ5", "Shimmer:APQ5", "Enter five-point amplitude perturbation quotient"),
    number("APQ", "MDVP:APQ", "Enter amplitude perturbation quotient"),
    number(
        "DDA",
        "Shimmer:DDA",
        "Enter average absolute difference between consecutive differences between amplitudes",
    ),
    number("NHR", "NHR", "Enter noise-to-harmonics ratio"),
    number("HNR", "HNR", "Enter harmonics-to-noise ratio"),
    number("RPDE", "RPDE", "Enter recurrence period density entropy"),
    number("DFA", "DFA", "Enter detrended fluctuation analysis"),
    number("spread1", "Spread1", "Enter nonlinear measure of fundamental frequency variation"),
    number("spread2", "Spread2", "Enter nonlinear measure of fundamental frequency variation"),
    number("D2", "D2", "Enter nonlinear dynamical complexity measure"),
    number("PPE", "PPE", "Enter pitch period entropy"),
];

static LUNG_CANCER_FIELDS: [FieldSpec; 15] = [
    number("GENDER", "Gender (1 = Male; 0 = Female)", "Enter 1 for male or 0 for female"),
    number("AGE", "Age", "Enter age of the person in years"),
    number("SMOKING", "Smoking (1 = Yes; 0 = No)", "Enter 1 if the person smokes, otherwise 0"),
    number(
        "YELLOW_FINGERS",
        "Yellow Fingers (1 = Yes; 0 = No)",
        "Enter 1 if the person has yellow fingers, otherwise 0",
    ),
    number(
        "ANXIETY",
        "Anxiety (1 = Yes; 0 = No)",
        "Enter 1 if the person has anxiety, otherwise 0",
    ),
    number(
        "PEER_PRESSURE",
        "Peer Pressure (1 = Yes; 0 = No)",
        "Enter 1 if the person is under peer pressure, otherwise 0",
    ),
    number(
        "CHRONIC_DISEASE",
        "Chronic Disease (1 = Yes; 0 = No)",
        "Enter 1 if the person has a chronic disease, otherwise 0",
    ),
    number(
        "FATIGUE",
        "Fatigue (1 = Yes; 0 = No)",
        "Enter 1 if the person experiences fatigue, otherwise 0",
    ),
    number(
        "ALLERGY",
        "Allergy (1 = Yes; 0 = No)",
        "Enter 1 if the person has allergies, otherwise 0",
    ),
    number(
        "WHEEZING",
        "Wheezing (1 = Yes; 0 = No)",
        "Enter 1 if the person experiences wheezing, otherwise 0",
    ),
    number(
        "ALCOHOL_CONSUMING",
        "Alcohol Consuming (1 = Yes; 0 = No)",
        "Enter 1 if the person consumes alcohol, otherwise 0",
    ),
    number(
        "COUGHING",
        "Coughing (1 = Yes; 0 = No)",
        "Enter 1 if the person experiences coughing, otherwise 0",
    ),
    number(
        "SHORTNESS_OF_BREATH",
        "Shortness Of Breath (1 = Yes; 0 = No)",
        "Enter 1 if the person experiences shortness of breath, otherwise 0",
    ),
    number(
        "SWALLOWING_DIFFICULTY",
        "Swallowing Difficulty (1 = Yes; 0 = No)",
        "Enter 1 if the person has difficulty swallowing, otherwise 0",
    ),
    number(
        "CHEST_PAIN",
        "Chest Pain (1 = Yes; 0 = No)",
        "Enter 1 if the person experiences chest pain, otherwise 0",
    ),
];

static THYROID_FIELDS: [FieldSpec; 7] = [
    number("age", "Age", "Enter age of the person in years"),
    number("sex", "Sex (1 = Male; 0 = Female)", "Enter 1 for male or 0 for female"),
    number(
        "on_thyroxine",
        "On Thyroxine (1 = Yes; 0 = No)",
        "Enter 1 if the person is on thyroxine, otherwise 0",
    ),
    number("tsh", "TSH Level", "Enter thyroid stimulating hormone level in mIU/L"),
    number(
        "t3_measured",
        "T3 Measured (1 = Yes; 0 = No)",
        "Enter 1 if T3 was measured, otherwise 0",
    ),
    number("t3", "T3 Level", "Enter triiodothyronine level in ng/dL"),
    number("tt4", "TT4 Level", "Enter total thyroxine level in μg/dL"),
];

pub fn fields_for(category: Category) -> &'static [FieldSpec] {
    match category {
        Category::Diabetes => &DIABETES_FIELDS,
        Category::HeartDisease => &HEART_DISEASE_FIELDS,
        Category::Parkinsons => &PARKINSONS_FIELDS,
        Category::LungCancer => &LUNG_CANCER_FIELDS,
        Category::Thyroid => &THYROID_FIELDS,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_lengths_match_model_arity() {
        for category in Category::ALL {
            assert_eq!(
                fields_for(category).len(),
                category.arity(),
                "{} catalog length != arity",
                category.title()
            );
        }
    }

    #[test]
    fn keys_are_unique_within_each_category() {
        for category in Category::ALL {
            let mut seen = HashSet::new();
            for spec in fields_for(category) {
                assert!(seen.insert(spec.key), "duplicate key {} in {}", spec.key, category.title());
            }
        }
    }

    #[test]
    fn declared_order_is_stable() {
        let diabetes: Vec<&str> = fields_for(Category::Diabetes).iter().map(|f| f.key).collect();
        assert_eq!(
            diabetes,
            vec![
                "Pregnancies",
                "Glucose",
                "BloodPressure",
                "SkinThickness",
                "Insulin",
                "BMI",
                "DiabetesPedigreeFunction",
                "Age"
            ]
        );

        let heart = fields_for(Category::HeartDisease);
        assert_eq!(heart[0].key, "age");
        assert_eq!(heart[9].key, "oldpeak");
        assert_eq!(heart[12].key, "thal");
    }
}
