use std::sync::Arc;

use anyhow::Context;
use realty_outreach::config::PipelineConfig;
use realty_outreach::llm::{LlmBackend, LlmConfig, create_provider};
use realty_outreach::pipeline::Pipeline;
use realty_outreach::pipeline::playbook::StaticPlaybook;
use realty_outreach::pipeline::types::{ClientRecord, EmailRequest, PropertyRecord};
use realty_outreach::weather::OpenWeatherMap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(client_path), Some(property_path)) = (args.next(), args.next()) else {
        eprintln!("Usage: realty-outreach <client.json> <property.json> [notes]");
        std::process::exit(2);
    };
    let notes = args.next();

    // Read API key from environment
    let api_key = std::env::var("ANTHROPIC_API_KEY").unwrap_or_else(|_| {
        eprintln!("Error: ANTHROPIC_API_KEY not set");
        eprintln!("  export ANTHROPIC_API_KEY=sk-ant-...");
        std::process::exit(1);
    });

    let model = std::env::var("OUTREACH_MODEL")
        .unwrap_or_else(|_| "claude-3-5-haiku-latest".to_string());

    let client: ClientRecord = load_json(&client_path)
        .with_context(|| format!("Failed to load client record from {client_path}"))?;
    let property: PropertyRecord = load_json(&property_path)
        .with_context(|| format!("Failed to load property record from {property_path}"))?;

    let llm_config = LlmConfig {
        backend: LlmBackend::Anthropic,
        api_key: secrecy::SecretString::from(api_key),
        model,
    };
    let llm = create_provider(&llm_config)?;

    let pipeline = Pipeline::new(
        llm,
        Arc::new(OpenWeatherMap::from_env()),
        Arc::new(StaticPlaybook),
        PipelineConfig::from_env()?,
    );

    let email = pipeline
        .run(EmailRequest {
            client: Some(client),
            property: Some(property),
            notes,
        })
        .await?;

    println!("SUBJECT: {}", email.subject);
    println!();
    println!("{}", email.body);
    Ok(())
}

fn load_json<T: serde::de::DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
