//! Leaf Image Classifier Seam
//!
//! The real image model is an external collaborator behind
//! [`DiseaseClassifier`]. [`DemoClassifier`] is a stand-in that picks labels
//! at random so the rest of the flow can run without a model; it does not
//! look at the image.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::lookup_tables::DISEASE_CLASSES;
use super::report::{DiagnosisReport, PlantPart, Severity};
use crate::error::ProviderError;

const SEVERITIES: &[Severity] = &[Severity::Mild, Severity::Moderate, Severity::Severe];

const AFFECTED_AREAS: &[PlantPart] = &[
    PlantPart::Leaves,
    PlantPart::Stems,
    PlantPart::Fruits,
    PlantPart::Roots,
];

pub const IMMEDIATE_ACTIONS: &[&str] = &[
    "Remove affected plant parts immediately",
    "Isolate infected plants from healthy ones",
    "Apply appropriate fungicide/treatment",
    "Improve air circulation around plants",
    "Adjust watering schedule to prevent moisture buildup",
];

pub const LONG_TERM_ACTIONS: &[&str] = &[
    "Monitor plants daily for symptom progression",
    "Implement crop rotation in next season",
    "Improve soil drainage and fertility",
    "Use disease-resistant varieties in future plantings",
    "Maintain proper plant spacing for air circulation",
];

/// Number of actions drawn from each pool
const ACTIONS_PER_REPORT: usize = 3;

/// Turns an uploaded leaf image into a diagnosis
pub trait DiseaseClassifier {
    fn classify(&mut self, image: &[u8]) -> Result<DiagnosisReport, ProviderError>;
}

/// Random-label placeholder for a real model
pub struct DemoClassifier {
    rng: StdRng,
}

impl DemoClassifier {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence of verdicts for a given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn sample_actions(&mut self, pool: &[&str]) -> Vec<String> {
        pool.choose_multiple(&mut self.rng, ACTIONS_PER_REPORT)
            .map(|action| action.to_string())
            .collect()
    }
}

impl Default for DemoClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DiseaseClassifier for DemoClassifier {
    fn classify(&mut self, image: &[u8]) -> Result<DiagnosisReport, ProviderError> {
        if image.is_empty() {
            return Err(ProviderError::MalformedPayload("empty image".to_string()));
        }

        let label = DISEASE_CLASSES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("Healthy");
        let confidence = self.rng.gen_range(0.75..0.95);
        let severity = SEVERITIES.choose(&mut self.rng).copied().unwrap_or(Severity::Mild);
        let area = AFFECTED_AREAS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(PlantPart::Leaves);
        let immediate = self.sample_actions(IMMEDIATE_ACTIONS);
        let long_term = self.sample_actions(LONG_TERM_ACTIONS);

        tracing::info!(label, confidence, "demo classifier verdict");
        Ok(DiagnosisReport::new(label, confidence, severity, area, immediate, long_term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seeded_classifier_is_deterministic() {
        let image = [0u8; 16];
        let first = DemoClassifier::with_seed(7).classify(&image).unwrap();
        let second = DemoClassifier::with_seed(7).classify(&image).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_verdicts_stay_in_catalogue() {
        let mut classifier = DemoClassifier::with_seed(42);
        for _ in 0..50 {
            let report = classifier.classify(b"leaf").unwrap();
            assert!(DISEASE_CLASSES.contains(&report.disease.as_str()));
            assert!((0.75..0.95).contains(&report.confidence));

            let immediate: HashSet<_> = report.immediate_actions.iter().collect();
            assert_eq!(immediate.len(), ACTIONS_PER_REPORT);
            assert_eq!(report.long_term_actions.len(), ACTIONS_PER_REPORT);
        }
    }

    #[test]
    fn test_empty_image_rejected() {
        let err = DemoClassifier::with_seed(1).classify(&[]).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedPayload(_)));
    }
}
