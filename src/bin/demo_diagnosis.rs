// Demo Diagnosis Binary
//
// Purpose: Run the placeholder classifier on an image file and print the report
// Usage: CLASSIFIER_SEED=7 cargo run --bin demo_diagnosis -- leaf.jpg

use anyhow::Context;
use crop_advisor_rust::config::{init_tracing, Settings};
use crop_advisor_rust::diagnosis::{DemoClassifier, DiseaseClassifier};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let settings = Settings::from_env();
    let path = std::env::args()
        .nth(1)
        .context("usage: demo_diagnosis <image path>")?;

    let image = std::fs::read(&path).with_context(|| format!("reading image {}", path))?;
    tracing::info!(path = %path, bytes = image.len(), "Loaded image");

    let mut classifier = match settings.classifier_seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded demo classifier");
            DemoClassifier::with_seed(seed)
        }
        None => DemoClassifier::new(),
    };

    let report = classifier.classify(&image)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
