use anyhow::Context;
use clap::Parser;
use empath_core::{Classifier, EmotionCategory, EmpathConfig, Lexicon};
use empath_gateway::GatewayServer;
use empath_nlp::RuleAnalyzer;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "empath.toml")]
    config: String,

    /// Bind host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Lexicon TOML overriding the built-in keyword/response tables
    #[arg(long)]
    lexicon: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = EmpathConfig::load_or_default(&args.config);
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(lexicon) = args.lexicon {
        config.lexicon_path = Some(lexicon);
    }

    let lexicon = match &config.lexicon_path {
        Some(path) => {
            info!("Loading lexicon from {}...", path.display());
            Lexicon::from_file(path)
                .with_context(|| format!("Failed to load lexicon from {}", path.display()))?
        }
        None => Lexicon::default(),
    };
    for category in EmotionCategory::ALL {
        info!(
            "Category {}: {} keywords",
            category,
            lexicon.keyword_count(category)
        );
    }

    let classifier = Arc::new(Classifier::new(Arc::new(RuleAnalyzer::new()), lexicon));

    info!(
        "Starting empath on {}:{}",
        config.server.host, config.server.port
    );
    let server = GatewayServer::new(classifier, &config.server.host, config.server.port);
    server.start().await?;

    Ok(())
}
