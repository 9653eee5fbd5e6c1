//! Patient biomarker snapshot submitted for risk evaluation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One patient's biomarker snapshot.
///
/// Units are fixed by convention and never rescaled by this crate:
/// glucose values in mg/dL, HbA1c in %, the lipid panel in mg/dL, blood
/// pressure in mmHg, BMI in kg/m². The struct serializes directly into the
/// request body sent to the remote model service, so field names here are
/// the wire names.
///
/// An `Assessment` is immutable once handed to the prediction gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Patient identifier.
    pub patient_id: i64,

    /// Fasting blood sugar (mg/dL).
    pub fbs: f64,
    /// Glycated hemoglobin (%).
    pub hba1c: f64,

    /// Total cholesterol (mg/dL).
    pub cholesterol: i32,
    /// Low-density lipoprotein (mg/dL).
    pub ldl: i32,
    /// High-density lipoprotein (mg/dL).
    pub hdl: i32,
    /// Triglycerides (mg/dL).
    pub triglycerides: i32,

    /// Systolic blood pressure (mmHg).
    pub systolic: i32,
    /// Diastolic blood pressure (mmHg).
    pub diastolic: i32,

    /// Body mass index (kg/m²).
    pub bmi: f64,

    /// Physical activity level, passed through unchanged.
    #[serde(default)]
    pub activity: String,
    /// Smoking status, passed through unchanged.
    #[serde(default)]
    pub smoking: String,
    /// Hypertension status, passed through unchanged.
    #[serde(default)]
    pub hypertension: String,
    /// Heart disease status, passed through unchanged.
    #[serde(default)]
    pub heart_disease: String,
    /// Family history flag.
    #[serde(default)]
    pub history_flag: bool,

    /// Set by the persistence collaborator, not by this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Assessment {
    /// Create an assessment with the given identifier and all biomarkers
    /// zeroed. Intended for tests and builders; production callers receive
    /// fully populated assessments from the request layer.
    #[must_use]
    pub fn for_patient(patient_id: i64) -> Self {
        Self {
            patient_id,
            fbs: 0.0,
            hba1c: 0.0,
            cholesterol: 0,
            ldl: 0,
            hdl: 0,
            triglycerides: 0,
            systolic: 0,
            diastolic: 0,
            bmi: 0.0,
            activity: String::new(),
            smoking: String::new(),
            hypertension: String::new(),
            heart_disease: String::new(),
            history_flag: false,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_biomarkers_with_wire_names() {
        let mut a = Assessment::for_patient(7);
        a.fbs = 110.0;
        a.hba1c = 6.2;
        a.cholesterol = 190;
        a.systolic = 130;
        a.bmi = 28.5;
        a.smoking = "never".into();

        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["patient_id"], 7);
        assert_eq!(json["fbs"], 110.0);
        assert_eq!(json["hba1c"], 6.2);
        assert_eq!(json["cholesterol"], 190);
        assert_eq!(json["systolic"], 130);
        assert_eq!(json["bmi"], 28.5);
        assert_eq!(json["smoking"], "never");
        // Absent timestamp must not appear on the wire.
        assert!(json.get("created_at").is_none());
    }
}
