// Format Response Binary
//
// Purpose: Shape raw assistant text from stdin into display-ready output
// Usage: echo "**Water** daily" | cargo run --bin format_response -- [--markdown|--json]

use anyhow::Context;
use crop_advisor_rust::config::init_tracing;
use crop_advisor_rust::response::{format_response, HtmlFormatter, JsonFormatter, MarkdownFormatter};
use std::io::Read;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "--html".to_string());

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("reading response text from stdin")?;
    tracing::info!(bytes = raw.len(), "formatting response");

    let formatted = format_response(&raw);

    let output = match mode.as_str() {
        "--html" => HtmlFormatter::format(&formatted),
        "--markdown" => MarkdownFormatter::format(&formatted),
        "--json" => JsonFormatter::format(&formatted).context("serializing formatted response")?,
        other => anyhow::bail!("unknown output mode {other} (expected --html, --markdown or --json)"),
    };
    println!("{}", output);

    Ok(())
}
