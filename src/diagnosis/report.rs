//! Diagnosis Report
//!
//! Everything shown to the grower after a leaf image is classified. Derived
//! purely from the classifier's label, confidence and severity call.

use serde::{Deserialize, Serialize};

use super::lookup_tables::treatment_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantPart {
    Leaves,
    Stems,
    Fruits,
    Roots,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Moderate,
}

impl ConfidenceLevel {
    /// `> 0.85` High, `> 0.75` Medium, anything else Moderate
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.85 {
            ConfidenceLevel::High
        } else if confidence > 0.75 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Moderate
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl From<Severity> for RiskLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Severe => RiskLevel::High,
            Severity::Moderate => RiskLevel::Medium,
            Severity::Mild => RiskLevel::Low,
        }
    }
}

/// Classifier verdict plus the guidance derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisReport {
    /// Raw classifier label, e.g. "Tomato Late Blight"
    pub disease: String,
    pub disease_display_name: String,
    pub plant_type: String,
    pub confidence: f64,
    pub confidence_level: ConfidenceLevel,
    pub severity: Severity,
    pub risk_level: RiskLevel,
    pub primary_affected_area: PlantPart,
    pub treatment: String,
    pub prevention: String,
    pub immediate_actions: Vec<String>,
    pub long_term_actions: Vec<String>,
}

impl DiagnosisReport {
    pub fn new(
        label: &str,
        confidence: f64,
        severity: Severity,
        primary_affected_area: PlantPart,
        immediate_actions: Vec<String>,
        long_term_actions: Vec<String>,
    ) -> Self {
        let (plant_type, disease_type) = split_label(label);
        let guidance = treatment_for(label);

        Self {
            disease: label.to_string(),
            disease_display_name: title_case(&disease_type.replace('_', " ")),
            plant_type: plant_type.to_string(),
            confidence,
            confidence_level: ConfidenceLevel::from_confidence(confidence),
            severity,
            risk_level: severity.into(),
            primary_affected_area,
            treatment: guidance.treatment.to_string(),
            prevention: guidance.prevention.to_string(),
            immediate_actions,
            long_term_actions,
        }
    }
}

/// "Tomato Late Blight" -> ("Tomato", "Late Blight"); single words have no plant
fn split_label(label: &str) -> (&str, &str) {
    match label.split_once(' ') {
        Some((plant, disease)) => (plant, disease),
        None => ("Unknown", label),
    }
}

/// Capitalise the first letter of every alphabetic run, lowercase the rest
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
