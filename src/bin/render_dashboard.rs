//! Render the park priority dashboard to stdout
//!
//! Usage: render_dashboard [a|b] [markdown|json|html] [park ...]
//!
//! With no park names every park is shown. The detail view defaults to the
//! top-ranked park; set DETAIL_PARK to pick another.

use anyhow::{bail, Context, Result};
use park_priority_rust::presentation::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
use park_priority_rust::{Dataset, DashboardGenerator, DatasetVariant, Selection};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "park_priority_rust=warn,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);

    let variant: DatasetVariant = match args.next() {
        Some(v) => v.parse().with_context(|| format!("Invalid dataset variant '{}'", v))?,
        None => DatasetVariant::A,
    };
    let format = args.next().unwrap_or_else(|| "markdown".to_string());
    let parks: Vec<String> = args.collect();

    let selection = if parks.is_empty() {
        Selection::all()
    } else {
        Selection::of(parks)
    };
    let detail = std::env::var("DETAIL_PARK").ok();

    let dataset = Dataset::builtin(variant);
    let dashboard = DashboardGenerator::generate(&dataset, &selection, detail.as_deref())
        .context("Failed to generate dashboard")?;

    let output = match format.as_str() {
        "markdown" | "md" => MarkdownFormatter::format_dashboard(&dashboard),
        "json" => JsonFormatter::format(&dashboard).context("Failed to serialize dashboard")?,
        "html" => HtmlFormatter::format(&dashboard),
        other => bail!("Unknown output format '{}' (expected markdown, json or html)", other),
    };

    println!("{}", output);
    Ok(())
}
