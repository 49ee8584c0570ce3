use tenant_desk::utils::logger;
use tenant_desk::{run_report, DeskConfig, ReportOverrides};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_cli_logger(false);

    let config = DeskConfig::sample();
    let stdout = std::io::stdout();
    run_report(
        config.report()?,
        ReportOverrides::default(),
        &mut stdout.lock(),
    )?;

    Ok(())
}
