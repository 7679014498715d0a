use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use cmdnorm_core::{AddressingConfig, CmdnormConfig};
use cmdnorm_pipeline::Normalizer;

mod session;

use session::{ConsoleSession, Outcome};

#[derive(Parser, Debug)]
#[command(name = "cmdnorm")]
#[command(about = "Rewrite chat messages into canonical bot commands")]
struct Cli {
    /// Config file (default: $CMDNORM_CONFIG, then ~/.cmdnorm/cmdnorm.toml).
    #[arg(long, short = 'c')]
    config: Option<String>,
    /// Quoted-message text attached to every input message.
    #[arg(long, short = 'q')]
    quote: Option<String>,
    /// Command prefix; repeat for several. Replaces [addressing] from the config.
    #[arg(long = "prefix", short = 'p')]
    prefixes: Vec<String>,
    /// Bot nickname; repeat for several. Replaces [addressing] from the config.
    #[arg(long = "nickname", short = 'n')]
    nicknames: Vec<String>,
    /// Print one JSON object per message instead of tab-separated lines.
    #[arg(long)]
    json: bool,
    /// Messages to normalize. Read from stdin, one per line, when omitted.
    messages: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cmdnorm=info,cmdnorm_pipeline=info".into()),
        )
        .init();

    let cli = Cli::parse();

    // explicit flag > CMDNORM_CONFIG env > ~/.cmdnorm/cmdnorm.toml
    let config_path = cli.config.clone().or_else(|| std::env::var("CMDNORM_CONFIG").ok());
    let mut config = CmdnormConfig::load(config_path.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed ({}), using defaults", e);
        CmdnormConfig::default()
    });

    if !cli.prefixes.is_empty() || !cli.nicknames.is_empty() {
        config.addressing = AddressingConfig::new(cli.prefixes.clone(), cli.nicknames.clone());
    }

    let normalizer = Normalizer::from_config(&config)?;
    info!(
        allow = config.normalize.allow_list.len(),
        deny = config.normalize.deny_list.len(),
        ignore_quote = config.normalize.ignore_quote,
        "normalizer ready"
    );

    if !cli.messages.is_empty() {
        for message in &cli.messages {
            emit(&normalizer, message, &cli).await?;
        }
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        emit(&normalizer, &line, &cli).await?;
    }
    Ok(())
}

async fn emit(normalizer: &Normalizer, message: &str, cli: &Cli) -> anyhow::Result<()> {
    let session = ConsoleSession::new(message, cli.quote.clone());
    let outcome = normalizer
        .handle(&session, || async { Outcome::pass(message) })
        .await;

    if cli.json {
        println!("{}", serde_json::to_string(&outcome)?);
    } else {
        println!("{}", outcome.to_line());
    }
    Ok(())
}
