use clap::Parser;
use tenant_desk::utils::error::DeskError;
use tenant_desk::utils::{logger, validation::Validate};
use tenant_desk::{run_messaging, run_report, CliConfig, Command, DeskConfig, ReportOverrides};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting tenant-desk");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!(
            "❌ tenant-desk failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}

fn run(cli: CliConfig) -> Result<(), DeskError> {
    let config = DeskConfig::load_or_sample(cli.config.as_deref())?;
    config.validate()?;
    tracing::debug!("Configuration loaded and validated");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Messages { recipient } => {
            run_messaging(config.messaging()?, recipient.as_deref(), &mut out)?;
        }
        Command::Report {
            format,
            threshold,
            title,
        } => {
            let overrides = ReportOverrides {
                format,
                threshold,
                title,
            };
            run_report(config.report()?, overrides, &mut out)?;
        }
    }

    Ok(())
}
