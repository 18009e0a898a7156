use anyhow::{Context, Result, bail};
use clap::Parser;
use mfe_observability::config;
use mfe_observability::telemetry::init_tracing;
use mfe_observability::{LogContext, LogLevel, MicrofrontendInfo, create_microfrontend_observability};
use serde_json::Value;

/// Emit one log event enriched with microfrontend metadata.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Microfrontend id
    #[arg(long, env = "MFE_ID")]
    id: String,

    /// Display name
    #[arg(long, env = "MFE_NAME")]
    name: String,

    /// Microfrontend version
    #[arg(long = "mfe-version", env = "MFE_VERSION")]
    mfe_version: String,

    /// Owning team
    #[arg(long, env = "MFE_TEAM")]
    team: Option<String>,

    /// Business domain
    #[arg(long, env = "MFE_DOMAIN")]
    domain: Option<String>,

    /// Level of the emitted event
    #[arg(long, default_value = "info")]
    level: LogLevel,

    /// Context as a JSON object
    #[arg(long)]
    context: Option<String>,

    /// Message to log
    message: String,
}

fn parse_context(raw: Option<&str>) -> Result<Option<LogContext>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match serde_json::from_str::<Value>(raw).context("--context is not valid JSON")? {
        Value::Object(map) => Ok(Some(map)),
        other => bail!("--context must be a JSON object, got {other}"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = config::get_configuration()?;
    init_tracing(settings.log_format)?;
    tracing::debug!(?settings, "Loaded settings");

    let observability = create_microfrontend_observability(settings.build_sink()?);

    let mut info = MicrofrontendInfo::new(cli.id.as_str(), cli.name, cli.mfe_version);
    info.team = cli.team;
    info.domain = cli.domain;
    observability.register_microfrontend(info)?;

    let context = parse_context(cli.context.as_deref())?;
    observability
        .create_logger(&cli.id)?
        .log_at(cli.level, &cli.message, context)?;

    Ok(())
}
