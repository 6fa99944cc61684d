use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};

use fastlink_app::application::services::CheckInScheduler;
use fastlink_app::presentation::bootstrap::{build_notification_service, build_workflow};
use fastlink_app::presentation::cli::{Cli, Command};
use fastlink_app::presentation::http_server;
use fastlink_infrastructure::config::AppConfig;
use fastlink_infrastructure::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logger(AppConfig::log_dir_from_env()) {
        eprintln!("Failed to initialize logger: {}", e);
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
            .try_init();
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e.format_with_code());
            eprintln!("Error: {}", e.format_with_code());
            return ExitCode::FAILURE;
        }
    };
    for warning in &config.warnings {
        warn!("{}", warning);
    }

    let result = match cli.command() {
        Command::Serve => serve(config).await,
        Command::Run { bark } => run_once(config, bark).await,
        Command::TestNotify => test_notify(config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: AppConfig) -> Result<()> {
    let workflow = build_workflow(&config)?;
    let scheduler = CheckInScheduler::start(workflow.clone(), &config.checkin_cron).await?;

    http_server::serve(workflow, config.listen_addr).await?;

    scheduler.shutdown().await?;
    info!("Server exited by user");
    Ok(())
}

async fn run_once(config: AppConfig, force_notify: bool) -> Result<()> {
    let workflow = build_workflow(&config)?;
    let report = workflow.run(force_notify).await?;
    println!("{}", report);
    Ok(())
}

async fn test_notify(config: AppConfig) -> Result<()> {
    build_notification_service(&config)?.send_test().await?;
    println!("Test notification sent");
    Ok(())
}
