use clap::Parser;
use ec2_dns_sync_application::use_cases::Outcome;
use ec2_dns_sync_domain::config::LogFormat;
use ec2_dns_sync_domain::CliOverrides;
use tracing::{error, info, warn};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ec2-dns-sync")]
#[command(version)]
#[command(about = "Keeps Route 53 records in step with EC2 instance state changes")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// State-change event JSON file ("-" or omitted reads stdin)
    #[arg(short = 'e', long, value_name = "FILE")]
    event: Option<String>,

    /// AWS region
    #[arg(long)]
    region: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (text, json)
    #[arg(long, value_parser = parse_log_format)]
    log_format: Option<LogFormat>,
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    s.parse()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        log_format: cli.log_format,
        region: cli.region.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting ec2-dns-sync v{}", env!("CARGO_PKG_VERSION"));

    let event = bootstrap::read_event(cli.event.as_deref()).await.map_err(|e| {
        error!(error = %e, "Failed to load lifecycle event");
        e
    })?;

    let collaborators = di::Collaborators::new(&config.aws);
    let use_cases = di::UseCases::new(&collaborators, &config);

    let report = use_cases.reconcile.execute(&event).await.map_err(|e| {
        error!(error = %e, "Reconciliation aborted");
        anyhow::anyhow!(e)
    })?;

    for tag in &report.outcomes {
        match &tag.outcome {
            Outcome::Submitted { action, status } => info!(
                role = %tag.role,
                dns_name = %tag.dns_name,
                action = %action,
                status = %status,
                "Record set change submitted"
            ),
            Outcome::Failed { reasons } => warn!(
                role = %tag.role,
                dns_name = %tag.dns_name,
                reasons = %reasons.join("; "),
                "Record set left unchanged after failure"
            ),
            other => info!(
                role = %tag.role,
                dns_name = %tag.dns_name,
                outcome = other.as_str(),
                "No change needed"
            ),
        }
    }

    Ok(())
}
