//! Translate a free-text query into provider filters and run it
//!
//! Standalone utility, deliberately not wired into the server. Sends the
//! query to the language model, maps the extracted parameters onto the
//! provider's ES-DSL search schema, and prints the matching company IDs.
//!
//! Usage: query-translate "companies in Italy in retail with 10-15 employees"

use anyhow::Result;
use corelens::config::Settings;
use corelens::network::HttpClient;
use corelens::translator::{build_filter_query, QueryTranslator};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.trim().is_empty() {
        eprintln!("usage: query-translate <free-text query>");
        std::process::exit(2);
    }

    let mut settings = Settings::default();
    settings.merge_env();

    let translator = QueryTranslator::new(&settings.translator)?;

    let Some(params) = translator.translate(&query).await else {
        eprintln!("No valid query parameters extracted.");
        std::process::exit(1);
    };

    println!(
        "Extracted query parameters: {}",
        serde_json::to_string_pretty(&params)?
    );

    let body = build_filter_query(&params);
    println!(
        "Final API query payload: {}",
        serde_json::to_string_pretty(&body)?
    );

    let client = HttpClient::with_settings(&settings.outgoing, &settings.upstream.api_key)?;
    let response = client.post_json(&settings.upstream.es_dsl_url(), &body).await?;

    match response.as_array() {
        Some(ids) if ids.is_empty() => println!("No companies found matching your criteria."),
        Some(ids) => {
            for id in ids {
                println!("Company ID: {}", id);
            }
        }
        None => println!("Unexpected API response format: {}", response),
    }

    Ok(())
}
