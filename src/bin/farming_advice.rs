// Farming Advice Binary
//
// Purpose: Print weather-based farming advisories for one snapshot
// Usage: cargo run --bin farming_advice -- <temp_c> <humidity_pct> <wind_speed> <description...>
//        cargo run --bin farming_advice -- --json < snapshot.json

use anyhow::Context;
use crop_advisor_rust::config::init_tracing;
use crop_advisor_rust::weather::{advise, WeatherSnapshot};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let (snapshot, as_json) = if args.first().map(String::as_str) == Some("--json") {
        let snapshot: WeatherSnapshot = serde_json::from_reader(std::io::stdin().lock())
            .context("parsing weather snapshot JSON from stdin")?;
        (snapshot, true)
    } else {
        (parse_args(&args)?, false)
    };

    tracing::info!(
        temperature = snapshot.temperature,
        humidity = snapshot.humidity,
        wind_speed = snapshot.wind_speed,
        description = %snapshot.description,
        "Snapshot:"
    );

    let advice = advise(&snapshot);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
    } else {
        for advisory in &advice {
            println!("{}", advisory);
        }
    }

    Ok(())
}

fn parse_args(args: &[String]) -> anyhow::Result<WeatherSnapshot> {
    if args.len() < 4 {
        anyhow::bail!("usage: farming_advice <temp_c> <humidity_pct> <wind_speed> <description...>");
    }

    let temperature: f64 = args[0].parse().with_context(|| format!("invalid temperature {:?}", args[0]))?;
    let humidity: f64 = args[1].parse().with_context(|| format!("invalid humidity {:?}", args[1]))?;
    let wind_speed: f64 = args[2].parse().with_context(|| format!("invalid wind speed {:?}", args[2]))?;
    let description = args[3..].join(" ");

    Ok(WeatherSnapshot::new(temperature, humidity, wind_speed, description))
}
