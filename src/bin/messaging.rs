use tenant_desk::utils::logger;
use tenant_desk::{run_messaging, DeskConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_cli_logger(false);

    let config = DeskConfig::sample();
    let stdout = std::io::stdout();
    run_messaging(config.messaging()?, None, &mut stdout.lock())?;

    Ok(())
}
