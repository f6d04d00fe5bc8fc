//! Plant Disease Diagnosis Reference
//!
//! - `lookup_tables.rs` - classifier labels + treatment/prevention table
//! - `report.rs` - DiagnosisReport derived from a classifier verdict
//! - `classifier.rs` - DiseaseClassifier seam + random DemoClassifier

pub mod lookup_tables;
pub mod report;
pub mod classifier;

pub use lookup_tables::{is_known_class, treatment_for, Treatment, DISEASE_CLASSES};
pub use report::{ConfidenceLevel, DiagnosisReport, PlantPart, RiskLevel, Severity};
pub use classifier::{DemoClassifier, DiseaseClassifier};
