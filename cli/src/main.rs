//! CLI entrypoint for finops-advisor
//!
//! This is the main binary that wires together all layers using
//! dependency injection, then applies the caller-side degraded-mode
//! policy: the pipeline itself never substitutes the offline
//! generator, so the decision to fall back lives here.

use advisor_application::{
    ExchangeLogger, GenerateRecommendationError, GenerateRecommendationUseCase, NoExchangeLogger,
    ProviderCredentials,
};
use advisor_domain::{CompanyContext, Recommendation, fallback_recommendation, identity};
use advisor_infrastructure::{
    AzureOpenAiModel, ConfigLoader, FileConfig, GeminiModel, HttpIntelligenceGatherer,
    JsonlExchangeLogger,
};
use anyhow::{Context as _, Result, bail};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable sections.
    Text,
    /// The raw recommendation JSON.
    Json,
}

/// Generate FinOps recommendations for a company.
#[derive(Parser, Debug)]
#[command(name = "finops-advisor", version, about)]
struct Cli {
    /// Company name to generate recommendations for.
    company_name: String,

    /// Company website URL, used for identity sanity-checking and
    /// intelligence gathering.
    #[arg(long, default_value = "")]
    website: String,

    /// Contact email to attach to the request context.
    #[arg(long)]
    email: Option<String>,

    /// Focus on private pricing agreement / commitment optimization.
    #[arg(long)]
    ppa: bool,

    /// Focus on generative-AI infrastructure cost.
    #[arg(long = "gen-ai")]
    gen_ai: bool,

    /// Focus on cloud cost risk signals.
    #[arg(long = "cloud-cost")]
    cloud_cost: bool,

    /// Skip the provider pipeline entirely and emit the template-based
    /// recommendation.
    #[arg(long)]
    offline: bool,

    /// On a provider or parsing failure, fall back to the
    /// template-based recommendation instead of failing. Credential
    /// problems still fail loudly.
    #[arg(long)]
    degrade: bool,

    /// Abort when the company name does not plausibly match the
    /// website (advisory warning otherwise).
    #[arg(long)]
    strict_identity: bool,

    /// Explicit configuration file path.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let context = CompanyContext::new(cli.company_name.clone())
        .with_website_url(cli.website.clone())
        .with_ppa(cli.ppa)
        .with_gen_ai(cli.gen_ai)
        .with_cloud_cost_concerns(cli.cloud_cost);
    let context = match cli.email.clone() {
        Some(email) => context.with_email(email),
        None => context,
    };

    if context.company_name.trim().is_empty() {
        bail!("Company name must not be empty");
    }

    // Advisory pre-flight: a mismatch is a warning, not a failure,
    // unless the caller asked for strictness.
    if !identity::matches(&context.company_name, &context.website_url) {
        if cli.strict_identity {
            bail!(
                "'{}' does not appear to match {}",
                context.company_name,
                context.website_url
            );
        }
        warn!(
            "'{}' does not appear to match {}; proceeding anyway",
            context.company_name, context.website_url
        );
    }

    if cli.offline {
        info!("Offline mode: using the template-based generator");
        let recommendation = fallback_recommendation(&context);
        print_output(&context, &recommendation, cli.output);
        return Ok(());
    }

    let config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
    let credentials = ConfigLoader::load_credentials();

    if config.intelligence.endpoint.trim().is_empty() {
        bail!(
            "No intelligence endpoint configured. Set [intelligence].endpoint in \
             advisor.toml or ADVISOR_INTELLIGENCE__ENDPOINT, or run with --offline."
        );
    }

    let use_case = build_use_case(&config, credentials)?;

    // Ctrl-C cancels between pipeline steps.
    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });
    let use_case = use_case.with_cancellation(token);

    let recommendation = match use_case.execute(&context).await {
        Ok(recommendation) => recommendation,
        Err(e) if cli.degrade && e.is_degradable() => {
            warn!("Pipeline failed ({}); degrading to the template-based generator", e);
            fallback_recommendation(&context)
        }
        Err(e @ GenerateRecommendationError::Credential(_)) => {
            bail!("Configuration problem: {}", e);
        }
        Err(e) => return Err(e).context("Recommendation generation failed"),
    };

    print_output(&context, &recommendation, cli.output);
    Ok(())
}

/// Dependency injection: construct adapters from config and hand them
/// to the use case.
fn build_use_case(
    config: &FileConfig,
    credentials: ProviderCredentials,
) -> Result<GenerateRecommendationUseCase> {
    let timeout = Duration::from_secs(config.providers.request_timeout_secs);

    let primary = Arc::new(
        GeminiModel::new(
            credentials.gemini_api_key.clone(),
            config.providers.gemini_model.clone(),
            timeout,
        )
        .map_err(|e| anyhow::anyhow!("Failed to build primary provider client: {}", e))?,
    );

    let secondary = Arc::new(
        AzureOpenAiModel::new(
            credentials.azure_api_key.clone(),
            credentials.azure_endpoint.clone(),
            config.providers.azure_deployment.clone(),
            config.providers.azure_api_version.clone(),
            timeout,
        )
        .map_err(|e| anyhow::anyhow!("Failed to build secondary provider client: {}", e))?,
    );

    let gatherer = Arc::new(
        HttpIntelligenceGatherer::new(config.intelligence.endpoint.clone(), timeout)
            .map_err(|e| anyhow::anyhow!("Failed to build intelligence client: {}", e))?,
    );

    let logger: Arc<dyn ExchangeLogger> = match &config.logging.exchange_log {
        Some(path) => match JsonlExchangeLogger::new(path) {
            Some(logger) => Arc::new(logger),
            None => Arc::new(NoExchangeLogger),
        },
        None => Arc::new(NoExchangeLogger),
    };

    Ok(GenerateRecommendationUseCase::new(
        primary,
        secondary,
        gatherer,
        credentials,
        config.generation.clone(),
    )
    .with_logger(logger))
}

fn print_output(context: &CompanyContext, recommendation: &Recommendation, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(recommendation)
                    .expect("recommendation serializes")
            );
        }
        OutputFormat::Text => {
            println!("{}", format_text(context, recommendation));
        }
    }
}

fn format_text(context: &CompanyContext, recommendation: &Recommendation) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "FinOps recommendations for {}\n\n",
        context.company_name
    ));

    out.push_str("## Unit cost metrics\n\n");
    for (i, metric) in recommendation.unit_metrics.iter().enumerate() {
        out.push_str(&format!("{}. {}\n   {}\n", i + 1, metric.title, metric.description));
    }

    out.push_str("\n## Conversation starters\n\n");
    for (i, question) in recommendation.conversation_starters.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, question));
    }

    let insights = &recommendation.conditional_insights;
    for (title, list) in [
        ("Private pricing & commitments", &insights.ppa),
        ("Generative AI infrastructure", &insights.gen_ai),
        ("Cloud cost risk signals", &insights.cloud_cost_concerns),
    ] {
        if let Some(items) = list {
            out.push_str(&format!("\n## {}\n\n", title));
            for item in items {
                out.push_str(&format!("- {}\n", item));
            }
        }
    }

    out
}
