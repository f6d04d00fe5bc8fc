//! Disease Catalogue and Treatment Lookup Tables
//!
//! Labels the leaf classifier can emit, plus the treatment and prevention
//! guidance shown alongside a diagnosis. Labels are "<Plant> <Disease>" except
//! for the bare "Healthy" class.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Treatment and prevention guidance for one disease label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Treatment {
    pub treatment: &'static str,
    pub prevention: &'static str,
}

// ============================================================================
// EMBEDDED CLASSIFIER LABELS (classifier output order)
// ============================================================================

pub static DISEASE_CLASSES: &[&str] = &[
    "Healthy",
    "Apple Scab",
    "Apple Black Rot",
    "Apple Cedar Apple Rust",
    "Cherry Powdery Mildew",
    "Cherry Healthy",
    "Corn Gray Leaf Spot",
    "Corn Common Rust",
    "Corn Northern Leaf Blight",
    "Corn Healthy",
    "Grape Black Rot",
    "Grape Esca Black Measles",
    "Grape Leaf Blight",
    "Grape Healthy",
    "Orange Haunglongbing Citrus Greening",
    "Peach Bacterial Spot",
    "Peach Healthy",
    "Pepper Bell Bacterial Spot",
    "Pepper Bell Healthy",
    "Potato Early Blight",
    "Potato Late Blight",
    "Potato Healthy",
    "Raspberry Healthy",
    "Soybean Healthy",
    "Squash Powdery Mildew",
    "Strawberry Leaf Scorch",
    "Strawberry Healthy",
    "Tomato Bacterial Spot",
    "Tomato Early Blight",
    "Tomato Late Blight",
    "Tomato Leaf Mold",
    "Tomato Septoria Leaf Spot",
    "Tomato Spider Mites",
    "Tomato Target Spot",
    "Tomato Yellow Leaf Curl Virus",
    "Tomato Mosaic Virus",
    "Tomato Healthy",
];

/// Used for any label without its own entry (crop-specific "Healthy" classes included)
pub static FALLBACK_TREATMENT: Treatment = Treatment {
    treatment: "Consult with a local agricultural expert for proper diagnosis and treatment.",
    prevention: "Follow general good agricultural practices for disease prevention.",
};

// ============================================================================
// EMBEDDED TREATMENT TABLE
// ============================================================================

static TREATMENTS: &[(&str, Treatment)] = &[
    ("Healthy", Treatment {
        treatment: "No treatment needed. Continue with regular care and monitoring.",
        prevention: "Maintain good agricultural practices: proper spacing, adequate nutrition, and regular monitoring.",
    }),
    ("Apple Scab", Treatment {
        treatment: "Apply fungicides like captan or myclobutanil. Remove infected leaves and fruit.",
        prevention: "Ensure good air circulation, avoid overhead watering, and plant resistant varieties.",
    }),
    ("Apple Black Rot", Treatment {
        treatment: "Remove infected parts, apply copper-based fungicides during dormant season.",
        prevention: "Prune for good air circulation, remove mummified fruits, and avoid wounding trees.",
    }),
    ("Apple Cedar Apple Rust", Treatment {
        treatment: "Apply preventive fungicides in early spring. Remove nearby cedar trees if possible.",
        prevention: "Plant resistant apple varieties and maintain distance from cedar trees.",
    }),
    ("Cherry Powdery Mildew", Treatment {
        treatment: "Apply sulfur-based fungicides or neem oil. Improve air circulation.",
        prevention: "Avoid overhead watering, ensure proper spacing, and prune for airflow.",
    }),
    ("Corn Gray Leaf Spot", Treatment {
        treatment: "Apply fungicides containing azoxystrobin or propiconazole.",
        prevention: "Rotate crops, plant resistant varieties, and manage crop residue.",
    }),
    ("Corn Common Rust", Treatment {
        treatment: "Apply fungicides if severe. Usually not economically damaging.",
        prevention: "Plant resistant hybrids and avoid late planting.",
    }),
    ("Corn Northern Leaf Blight", Treatment {
        treatment: "Apply fungicides containing strobilurin or triazole compounds.",
        prevention: "Use resistant hybrids, rotate crops, and manage crop residue.",
    }),
    ("Grape Black Rot", Treatment {
        treatment: "Apply fungicides like captan or myclobutanil starting at bud break.",
        prevention: "Remove mummified berries, prune for air circulation, and avoid overhead irrigation.",
    }),
    ("Grape Esca Black Measles", Treatment {
        treatment: "No effective chemical treatment. Remove affected parts and improve vine health.",
        prevention: "Avoid pruning wounds, maintain vine vigor, and ensure proper nutrition.",
    }),
    ("Grape Leaf Blight", Treatment {
        treatment: "Apply copper-based fungicides or organic fungicides.",
        prevention: "Improve air circulation, avoid overhead watering, and remove infected leaves.",
    }),
    ("Orange Haunglongbing Citrus Greening", Treatment {
        treatment: "No cure available. Remove infected trees to prevent spread.",
        prevention: "Control Asian citrus psyllid vectors and plant certified disease-free trees.",
    }),
    ("Peach Bacterial Spot", Treatment {
        treatment: "Apply copper-based bactericides. Avoid overhead irrigation.",
        prevention: "Plant resistant varieties, ensure good drainage, and avoid working with wet plants.",
    }),
    ("Pepper Bell Bacterial Spot", Treatment {
        treatment: "Apply copper-based bactericides and remove infected plants.",
        prevention: "Use disease-free seeds, avoid overhead watering, and rotate crops.",
    }),
    ("Potato Early Blight", Treatment {
        treatment: "Apply fungicides containing chlorothalonil or azoxystrobin.",
        prevention: "Rotate crops, ensure proper nutrition, and avoid overhead irrigation.",
    }),
    ("Potato Late Blight", Treatment {
        treatment: "Apply fungicides containing metalaxyl or dimethomorph immediately.",
        prevention: "Use certified seed potatoes, ensure good drainage, and monitor weather conditions.",
    }),
    ("Squash Powdery Mildew", Treatment {
        treatment: "Apply sulfur-based fungicides or baking soda solution.",
        prevention: "Ensure good air circulation, avoid overhead watering, and plant resistant varieties.",
    }),
    ("Strawberry Leaf Scorch", Treatment {
        treatment: "Remove infected leaves and apply fungicides if severe.",
        prevention: "Ensure good air circulation, avoid overhead watering, and plant resistant varieties.",
    }),
    ("Tomato Bacterial Spot", Treatment {
        treatment: "Apply copper-based bactericides and remove infected plants.",
        prevention: "Use disease-free seeds, avoid overhead watering, and practice crop rotation.",
    }),
    ("Tomato Early Blight", Treatment {
        treatment: "Apply fungicides containing chlorothalonil or azoxystrobin.",
        prevention: "Mulch around plants, avoid overhead watering, and ensure proper spacing.",
    }),
    ("Tomato Late Blight", Treatment {
        treatment: "Apply fungicides containing metalaxyl immediately upon detection.",
        prevention: "Ensure good air circulation, avoid overhead watering, and monitor humidity.",
    }),
    ("Tomato Leaf Mold", Treatment {
        treatment: "Improve ventilation and apply fungicides if in greenhouse.",
        prevention: "Reduce humidity, ensure good air circulation, and avoid overhead watering.",
    }),
    ("Tomato Septoria Leaf Spot", Treatment {
        treatment: "Apply fungicides containing chlorothalonil or copper compounds.",
        prevention: "Mulch soil, avoid overhead watering, and remove infected debris.",
    }),
    ("Tomato Spider Mites", Treatment {
        treatment: "Apply miticides or use predatory mites. Increase humidity.",
        prevention: "Maintain adequate humidity, avoid drought stress, and encourage beneficial insects.",
    }),
    ("Tomato Target Spot", Treatment {
        treatment: "Apply fungicides containing azoxystrobin or chlorothalonil.",
        prevention: "Avoid overhead irrigation, ensure good drainage, and rotate crops.",
    }),
    ("Tomato Yellow Leaf Curl Virus", Treatment {
        treatment: "No chemical treatment. Remove infected plants and control whiteflies.",
        prevention: "Control whitefly vectors, use reflective mulches, and plant resistant varieties.",
    }),
    ("Tomato Mosaic Virus", Treatment {
        treatment: "No chemical treatment. Remove infected plants immediately.",
        prevention: "Use virus-free seeds, disinfect tools, and avoid handling wet plants.",
    }),
];

static TREATMENT_INDEX: LazyLock<FxHashMap<&'static str, &'static Treatment>> = LazyLock::new(|| {
    TREATMENTS
        .iter()
        .map(|(label, treatment)| (*label, treatment))
        .collect()
});

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Treatment guidance for a label, falling back to the generic entry
pub fn treatment_for(label: &str) -> &'static Treatment {
    TREATMENT_INDEX.get(label).copied().unwrap_or(&FALLBACK_TREATMENT)
}

/// Whether the classifier can emit this label
pub fn is_known_class(label: &str) -> bool {
    DISEASE_CLASSES.contains(&label)
}
