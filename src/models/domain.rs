use serde::{Deserialize, Serialize};

/// The three screening forms the service offers
///
/// A closed enum rather than a menu string so dispatch on the selected
/// disease is exhaustive at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disease {
    Diabetes,
    Heart,
    Parkinsons,
}

/// One input field of a screening form
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    /// Short display name, used in validation error messages
    pub name: &'static str,
    /// Full label rendered next to the input, including value hints
    pub prompt: &'static str,
}

const fn field(name: &'static str, prompt: &'static str) -> FieldSpec {
    FieldSpec { name, prompt }
}

const DIABETES_FIELDS: &[FieldSpec] = &[
    field("Pregnancy's age (Months)", "Pregnancy's age (Months)"),
    field("Glucose Level", "Glucose Level"),
    field("Blood Pressure Value", "Blood Pressure Value"),
    field("Skin Thickness Value", "Skin Thickness Value"),
    field("Insulin Level", "Insulin Level"),
    field("BMI Value", "BMI Value"),
    field("Diabetes Pedigree Function Value", "Diabetes Pedigree Function Value"),
    field("Age of the Person", "Age of the Person"),
];

const HEART_FIELDS: &[FieldSpec] = &[
    field("Age", "Age of the Person"),
    field("Sex (1 = Male, 0 = Female)", "Sex (1 = Male, 0 = Female)"),
    field(
        "Chest Pain Type (0-3)",
        "Chest Pain Type (0 = Typical Angina, 1 = Atypical Angina, 2 = Non-anginal Pain, 3 = Asymptomatic)",
    ),
    field("Resting Blood Pressure (mmHg)", "Resting Blood Pressure (mmHg)"),
    field("Serum Cholesterol (mg/dl)", "Serum Cholesterol (mg/dl)"),
    field(
        "Fasting Blood Sugar (>120 mg/dl, 1 = Yes, 0 = No)",
        "Fasting Blood Sugar (>120 mg/dl, 1 = Yes, 0 = No)",
    ),
    field(
        "Resting ECG Results (0-2)",
        "Resting ECG Results (0 = Normal, 1 = ST-T Wave Abnormality, 2 = Left Ventricular Hypertrophy)",
    ),
    field("Maximum Heart Rate Achieved", "Maximum Heart Rate Achieved"),
    field("Exercise Induced Angina (1 = Yes, 0 = No)", "Exercise Induced Angina (1 = Yes, 0 = No)"),
    field("ST Depression Induced by Exercise", "ST Depression Induced by Exercise"),
    field(
        "Slope of Peak Exercise ST Segment (0-2)",
        "Slope of Peak Exercise ST Segment (0 = Upsloping, 1 = Flat, 2 = Downsloping)",
    ),
    field(
        "Number of Major Vessels Colored by Fluoroscopy (0-3)",
        "Number of Major Vessels Colored by Fluoroscopy (0-3)",
    ),
    field(
        "Thalassemia (1 = Normal, 2 = Fixed Defect, 3 = Reversible Defect)",
        "Thalassemia (1 = Normal, 2 = Fixed Defect, 3 = Reversible Defect)",
    ),
];

const PARKINSONS_FIELDS: &[FieldSpec] = &[
    field(
        "Unified Parkinson's Disease Rating Scale (UPDRS)",
        "Unified Parkinson's Disease Rating Scale (UPDRS)",
    ),
    field("Functional Assessment Score", "Functional Assessment Score (range: 0-100)"),
    field("Tremor Severity Score", "Tremor Severity Score (range: 0-10)"),
    field(
        "Montreal Cognitive Assessment (MoCA) Score",
        "Montreal Cognitive Assessment (MoCA) Score (range: 0-30)",
    ),
    field("Postural Instability Score", "Postural Instability Score (range: 0-10)"),
    field("Bradykinesia Score", "Bradykinesia Score (range: 0-10)"),
    field("Education Level (Years)", "Years of Education"),
    field("Diabetes (1 = Yes, 0 = No)", "Diabetes Diagnosis (1 = Yes, 0 = No)"),
    field("Depression (1 = Yes, 0 = No)", "Depression Diagnosis (1 = Yes, 0 = No)"),
    field("Hypertension (1 = Yes, 0 = No)", "Hypertension Diagnosis (1 = Yes, 0 = No)"),
    field("Gender (1 = Male, 0 = Female)", "Gender (1 = Male, 0 = Female)"),
    field("Body Mass Index (BMI)", "Body Mass Index (BMI)"),
    field("History of Stroke (1 = Yes, 0 = No)", "History of Stroke (1 = Yes, 0 = No)"),
    field("Sleep Disorders (1 = Yes, 0 = No)", "Sleep Disorders Diagnosis (1 = Yes, 0 = No)"),
    field("Diastolic Blood Pressure (mmHg)", "Diastolic Blood Pressure (mmHg)"),
    field("Constipation (1 = Yes, 0 = No)", "Constipation Diagnosis (1 = Yes, 0 = No)"),
    field("Rigidity Score", "Rigidity Score (range: 0-10)"),
    field("Cholesterol/HDL Ratio", "Cholesterol/HDL Ratio"),
    field(
        "Family History of Parkinson's (1 = Yes, 0 = No)",
        "Family History of Parkinson's (1 = Yes, 0 = No)",
    ),
    field(
        "Traumatic Brain Injury History (1 = Yes, 0 = No)",
        "History of Traumatic Brain Injury (1 = Yes, 0 = No)",
    ),
];

impl Disease {
    pub const ALL: [Disease; 3] = [Disease::Diabetes, Disease::Heart, Disease::Parkinsons];

    /// URL path segment identifying this form
    pub fn slug(&self) -> &'static str {
        match self {
            Disease::Diabetes => "diabetes",
            Disease::Heart => "heart",
            Disease::Parkinsons => "parkinsons",
        }
    }

    /// Parse a URL slug back into a disease, if it names one
    pub fn from_slug(slug: &str) -> Option<Disease> {
        Disease::ALL.iter().copied().find(|d| d.slug() == slug)
    }

    /// Page title shown above the form
    pub fn title(&self) -> &'static str {
        match self {
            Disease::Diabetes => "Diabetes Prediction using ML",
            Disease::Heart => "Heart Disease Prediction using ML",
            Disease::Parkinsons => "Parkinson's Disease Prediction using ML",
        }
    }

    /// Menu entry for this form
    pub fn menu_label(&self) -> &'static str {
        match self {
            Disease::Diabetes => "Diabetes Prediction",
            Disease::Heart => "Heart Disease Prediction",
            Disease::Parkinsons => "Parkinson's Prediction",
        }
    }

    /// Ordered field schema; the feature vector must match this order
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Disease::Diabetes => DIABETES_FIELDS,
            Disease::Heart => HEART_FIELDS,
            Disease::Parkinsons => PARKINSONS_FIELDS,
        }
    }

    /// Fixed verdict sentence for a binary label
    pub fn verdict(&self, positive: bool) -> &'static str {
        match (self, positive) {
            (Disease::Diabetes, true) => "The person is diabetic",
            (Disease::Diabetes, false) => "The person is not diabetic",
            (Disease::Heart, true) => "The person has heart disease",
            (Disease::Heart, false) => "The person does not have heart disease",
            (Disease::Parkinsons, true) => "The person has Parkinson's disease",
            (Disease::Parkinsons, false) => "The person does not have Parkinson's disease",
        }
    }
}

/// Outcome of a successful screening
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screening {
    pub disease: Disease,
    pub label: i64,
    pub positive: bool,
    pub verdict: String,
}
