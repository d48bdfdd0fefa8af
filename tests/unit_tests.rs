// Unit tests for MedScreen

use medscreen::core::{parse_features, Classifier, InferenceError, ScreenError, Screener};
use medscreen::models::Disease;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Classifier stub that records calls and returns a fixed label
struct RecordingClassifier {
    label: i64,
    calls: AtomicUsize,
    last_features: Mutex<Vec<f32>>,
}

impl RecordingClassifier {
    fn new(label: i64) -> Arc<Self> {
        Arc::new(Self {
            label,
            calls: AtomicUsize::new(0),
            last_features: Mutex::new(Vec::new()),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for RecordingClassifier {
    fn predict(&self, features: &[f32]) -> Result<i64, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_features.lock().unwrap() = features.to_vec();
        Ok(self.label)
    }
}

/// Classifier stub that always fails
struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _features: &[f32]) -> Result<i64, InferenceError> {
        Err(InferenceError("backend unavailable".to_string()))
    }
}

fn screener_with_label(label: i64) -> (Screener, Arc<RecordingClassifier>) {
    let stub = RecordingClassifier::new(label);
    let screener = Screener::new(stub.clone(), stub.clone(), stub.clone());
    (screener, stub)
}

fn valid_values(disease: Disease) -> Vec<String> {
    (0..disease.fields().len()).map(|i| format!("{}", i + 1)).collect()
}

#[test]
fn test_schema_field_counts() {
    assert_eq!(Disease::Diabetes.fields().len(), 8);
    assert_eq!(Disease::Heart.fields().len(), 13);
    assert_eq!(Disease::Parkinsons.fields().len(), 20);
}

#[test]
fn test_slugs_round_trip() {
    for disease in Disease::ALL {
        assert_eq!(Disease::from_slug(disease.slug()), Some(disease));
    }
    assert_eq!(Disease::from_slug("unknown"), None);
}

#[test]
fn test_titles_and_menu_labels() {
    assert_eq!(Disease::Diabetes.title(), "Diabetes Prediction using ML");
    assert_eq!(Disease::Heart.menu_label(), "Heart Disease Prediction");
    assert_eq!(Disease::Parkinsons.menu_label(), "Parkinson's Prediction");
}

#[test]
fn test_parse_features_preserves_order() {
    let values: Vec<String> = vec!["1", "2.5", " 3 ", "4", "5", "6", "7.25", "8"]
        .into_iter()
        .map(String::from)
        .collect();

    let features = parse_features(Disease::Diabetes.fields(), &values).unwrap();
    assert_eq!(features, vec![1.0, 2.5, 3.0, 4.0, 5.0, 6.0, 7.25, 8.0]);
}

#[test]
fn test_parse_features_lists_all_blank_names_in_order() {
    let mut values = valid_values(Disease::Heart);
    values[0] = String::new();
    values[4] = "   ".to_string();
    values[12] = "\t".to_string();

    let err = parse_features(Disease::Heart.fields(), &values).unwrap_err();
    match err {
        ScreenError::EmptyFields(names) => {
            assert_eq!(
                names,
                vec![
                    "Age",
                    "Serum Cholesterol (mg/dl)",
                    "Thalassemia (1 = Normal, 2 = Fixed Defect, 3 = Reversible Defect)",
                ]
            );
        }
        other => panic!("expected EmptyFields, got {:?}", other),
    }
}

#[test]
fn test_parse_features_blank_check_runs_before_parse() {
    // A blank field and a non-numeric field together: the blank report wins.
    let mut values = valid_values(Disease::Diabetes);
    values[0] = String::new();
    values[1] = "abc".to_string();

    let err = parse_features(Disease::Diabetes.fields(), &values).unwrap_err();
    assert!(matches!(err, ScreenError::EmptyFields(_)));
}

#[test]
fn test_parse_features_names_offending_value() {
    let mut values = valid_values(Disease::Parkinsons);
    values[7] = "yes".to_string();

    let err = parse_features(Disease::Parkinsons.fields(), &values).unwrap_err();
    match &err {
        ScreenError::NotNumeric { field, value } => {
            assert_eq!(field, "Diabetes (1 = Yes, 0 = No)");
            assert_eq!(value, "yes");
        }
        other => panic!("expected NotNumeric, got {:?}", other),
    }
    let message = err.to_string();
    assert!(message.contains("yes"), "message should name the value: {}", message);
}

#[test]
fn test_parse_features_count_mismatch() {
    let values = valid_values(Disease::Diabetes);
    let err = parse_features(Disease::Heart.fields(), &values).unwrap_err();
    assert!(matches!(
        err,
        ScreenError::FieldCountMismatch { expected: 13, got: 8 }
    ));
}

#[test]
fn test_screen_calls_predict_exactly_once() {
    for disease in Disease::ALL {
        let (screener, stub) = screener_with_label(0);
        let values = valid_values(disease);

        let result = screener.screen(disease, &values).unwrap();

        assert_eq!(stub.call_count(), 1);
        assert_eq!(result.label, 0);
        assert!(!result.positive);
        assert_eq!(
            stub.last_features.lock().unwrap().len(),
            disease.fields().len()
        );
    }
}

#[test]
fn test_no_predict_call_on_invalid_input() {
    for disease in Disease::ALL {
        let (screener, stub) = screener_with_label(1);

        let mut blank = valid_values(disease);
        blank[2] = String::new();
        assert!(screener.screen(disease, &blank).is_err());

        let mut garbage = valid_values(disease);
        garbage[0] = "not-a-number".to_string();
        assert!(screener.screen(disease, &garbage).is_err());

        assert_eq!(stub.call_count(), 0);
    }
}

#[test]
fn test_verdict_sentences_per_disease() {
    let expectations = [
        (Disease::Diabetes, "The person is diabetic", "The person is not diabetic"),
        (
            Disease::Heart,
            "The person has heart disease",
            "The person does not have heart disease",
        ),
        (
            Disease::Parkinsons,
            "The person has Parkinson's disease",
            "The person does not have Parkinson's disease",
        ),
    ];

    for (disease, positive_sentence, negative_sentence) in expectations {
        let (positive, _) = screener_with_label(1);
        let (negative, _) = screener_with_label(0);
        let values = valid_values(disease);

        assert_eq!(positive.screen(disease, &values).unwrap().verdict, positive_sentence);
        assert_eq!(negative.screen(disease, &values).unwrap().verdict, negative_sentence);
    }
}

#[test]
fn test_inference_failure_is_not_user_error() {
    let failing = Arc::new(FailingClassifier);
    let screener = Screener::new(failing.clone(), failing.clone(), failing);

    let err = screener
        .screen(Disease::Diabetes, &valid_values(Disease::Diabetes))
        .unwrap_err();

    assert!(matches!(err, ScreenError::Inference(_)));
    assert!(!err.is_user_error());
}
