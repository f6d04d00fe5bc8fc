//! Content Shaping Integration Tests
//!
//! Drives the public API end to end: assistant text through the formatter and
//! renderers, snapshots through the advisor, and the collaborator seams with
//! fake providers standing in for the real services.

use crop_advisor_rust::assistant::{Assistant, ChatProvider, ChatRequest, ChatSettings, PROVIDER_FAILURE_REPLY};
use crop_advisor_rust::diagnosis::{treatment_for, DemoClassifier, DiseaseClassifier, DISEASE_CLASSES};
use crop_advisor_rust::response::{
    format_response, Block, BlockKind, FormattedResponse, HtmlFormatter, Inline, ListItem, NO_RESPONSE,
};
use crop_advisor_rust::weather::{advise, farming_advice_for, AdvisoryCategory, WeatherProvider, WeatherSnapshot};
use crop_advisor_rust::ProviderError;

fn categories(temperature: f64, humidity: f64, wind_speed: f64, description: &str) -> Vec<AdvisoryCategory> {
    advise(&WeatherSnapshot::new(temperature, humidity, wind_speed, description))
        .iter()
        .map(|a| a.category)
        .collect()
}

// =========================================================================
// Section 1: Response formatting
// =========================================================================

#[test]
fn test_blank_input_produces_fallback_text() {
    let formatted = format_response(" \n\t ");
    assert_eq!(formatted.plain_text(), NO_RESPONSE);
}

#[test]
fn test_non_blank_input_is_never_visibly_empty() {
    let samples = [
        "x",
        "*",
        "**",
        "***",
        "****",
        "* *",
        "** **",
        "-",
        "1.",
        "\u{2022}",
        "a\n\n\n\nb",
        "**unterminated",
        "*a **b* c**",
    ];
    for raw in samples {
        let formatted = format_response(raw);
        assert!(
            !formatted.plain_text().trim().is_empty(),
            "no visible text for {:?}",
            raw
        );
        let html = HtmlFormatter::format(&formatted);
        assert!(html.starts_with("<div class=\"mb-3\">"), "bad html for {:?}", raw);
        assert!(!html.contains("></strong>") && !html.contains("<em></em>"), "blank span for {:?}", raw);
    }
}

#[test]
fn test_bold_span_without_stray_asterisks() {
    let formatted = format_response("**Water** daily");

    assert_eq!(
        formatted.blocks,
        vec![Block::Paragraph {
            lines: vec![vec![Inline::Bold(vec![Inline::text("Water")]), Inline::text(" daily")]],
        }]
    );
    assert_eq!(formatted.plain_text(), "Water daily");
}

#[test]
fn test_numbered_list_two_items_in_order() {
    let formatted = format_response("1. Remove leaves\n2. Apply fungicide");

    assert_eq!(formatted.blocks.len(), 1);
    let items = formatted.blocks[0].items();
    assert_eq!(formatted.blocks[0].kind(), BlockKind::NumberedList);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].marker.as_deref(), Some("1."));
    assert_eq!(items[1].marker.as_deref(), Some("2."));
    assert_eq!(formatted.plain_text(), "1. Remove leaves\n2. Apply fungicide");
}

#[test]
fn test_bulleted_list_markers_stripped() {
    let formatted = format_response("* Tip one\n* Tip two");

    assert_eq!(
        formatted.blocks,
        vec![Block::BulletedList {
            items: vec![
                ListItem { marker: None, content: vec![Inline::text("Tip one")] },
                ListItem { marker: None, content: vec![Inline::text("Tip two")] },
            ],
        }]
    );
}

#[test]
fn test_realistic_assistant_reply() {
    let raw = "\
**Early blight** is a common *fungal* disease of tomatoes.

1. **Remove** infected leaves
   and dispose of them away from the garden
2. Apply a copper-based fungicide

Prevention tips:

- Water at the base of the plant
- Rotate crops every *2-3* years
• Mulch around stems

Good luck with your harvest!";

    let formatted = format_response(raw);
    let kinds: Vec<BlockKind> = formatted.blocks.iter().map(Block::kind).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Paragraph,
            BlockKind::NumberedList,
            BlockKind::Paragraph,
            BlockKind::BulletedList,
            BlockKind::Paragraph,
        ]
    );

    let steps = formatted.blocks[1].items();
    assert_eq!(
        steps[0].content,
        vec![
            Inline::Bold(vec![Inline::text("Remove")]),
            Inline::text(" infected leaves and dispose of them away from the garden"),
        ]
    );
    assert_eq!(formatted.blocks[3].items().len(), 3);

    let html = HtmlFormatter::format(&formatted);
    assert!(html.contains("<strong class=\"text-primary\">Early blight</strong> is a common <em>fungal</em> disease"));
    assert!(html.contains("<span class=\"text-success me-2\">•</span>Rotate crops every <em>2-3</em> years</div>"));
    assert!(!html.contains('*'));
}

#[test]
fn test_italic_first_line_is_plain_paragraph() {
    let formatted = format_response("* Tip *one*\n* Tip two");

    assert_eq!(formatted.blocks[0].kind(), BlockKind::Paragraph);
}

#[test]
fn test_html_output_is_escaped() {
    let html = HtmlFormatter::format(&format_response("Mix <1 part> bleach & water"));

    assert_eq!(html, "<div class=\"mb-3\">Mix &lt;1 part&gt; bleach &amp; water</div>");
}

// =========================================================================
// Section 2: Weather advice
// =========================================================================

#[test]
fn test_frost_and_clear_sky() {
    assert_eq!(
        categories(2.0, 50.0, 5.0, "Clear sky"),
        vec![AdvisoryCategory::Frost, AdvisoryCategory::Clear]
    );
}

#[test]
fn test_ideal_and_partly_cloudy() {
    assert_eq!(
        categories(20.0, 50.0, 3.0, "partly cloudy"),
        vec![AdvisoryCategory::Ideal, AdvisoryCategory::Cloudy]
    );
}

#[test]
fn test_unmatched_condition_is_not_default() {
    assert_eq!(categories(20.0, 50.0, 3.0, "overcast but calm"), vec![AdvisoryCategory::Ideal]);
}

#[test]
fn test_silent_snapshot_gets_default() {
    assert_eq!(categories(10.0, 50.0, 3.0, "mild"), vec![AdvisoryCategory::Normal]);
}

#[test]
fn test_dry_windy_heat() {
    let advice = advise(&WeatherSnapshot::new(38.0, 20.0, 14.0, "Sunny"));
    let lines: Vec<String> = advice.iter().map(ToString::to_string).collect();

    assert_eq!(
        lines,
        vec![
            "🌡️ High temperature: Increase watering frequency and provide shade for sensitive plants.",
            "🏜️ Low humidity: Increase irrigation and consider mulching to retain moisture.",
            "💨 Strong winds: Secure tall plants and protect greenhouse structures.",
            "☀️ Clear skies: Excellent for field work and harvesting activities.",
        ]
    );
}

struct StaticWeather;

impl WeatherProvider for StaticWeather {
    fn current(&self, location: &str) -> Result<Option<WeatherSnapshot>, ProviderError> {
        match location {
            "Kisumu" => Ok(Some(WeatherSnapshot::new(27.0, 85.0, 4.0, "Light Rain"))),
            "Nowhere" => Ok(None),
            _ => Err(ProviderError::Network("connection refused".into())),
        }
    }
}

#[test]
fn test_provider_backed_advice() {
    let (snapshot, advice) = farming_advice_for(&StaticWeather, "Kisumu").unwrap();
    assert_eq!(snapshot.description, "Light Rain");
    let cats: Vec<_> = advice.iter().map(|a| a.category).collect();
    assert_eq!(cats, vec![AdvisoryCategory::HumidityHigh, AdvisoryCategory::Rain]);

    assert!(farming_advice_for(&StaticWeather, "Nowhere").is_none());
    assert!(farming_advice_for(&StaticWeather, "Lima").is_none());
}

// =========================================================================
// Section 3: Diagnosis and assistant seams
// =========================================================================

#[test]
fn test_demo_classifier_report() {
    let mut classifier = DemoClassifier::with_seed(2024);
    let report = classifier.classify(b"\x89PNG fake bytes").unwrap();

    assert!(DISEASE_CLASSES.contains(&report.disease.as_str()));
    assert!(report.confidence >= 0.75 && report.confidence < 0.95);
    assert_eq!(report.treatment, treatment_for(&report.disease).treatment);
    assert_eq!(report.immediate_actions.len(), 3);
}

struct EchoProvider;

impl ChatProvider for EchoProvider {
    fn generate(&self, request: &ChatRequest<'_>) -> Result<Option<String>, ProviderError> {
        if request.message.is_empty() {
            return Err(ProviderError::Unavailable("quota exhausted".into()));
        }
        Ok(Some(format!("You asked: **{}**", request.message)))
    }
}

#[test]
fn test_assistant_reply_and_failure() {
    let assistant = Assistant::new(EchoProvider, ChatSettings::default());

    let html = HtmlFormatter::format(&assistant.reply("aphids"));
    assert_eq!(
        html,
        "<div class=\"mb-3\">You asked: <strong class=\"text-primary\">aphids</strong></div>"
    );

    assert_eq!(assistant.reply(""), FormattedResponse::message(PROVIDER_FAILURE_REPLY));
}
