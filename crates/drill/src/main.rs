mod bootstrap;
mod runner;

use anyhow::Result;
use drill_core::settings::Settings;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("drill v{} starting", env!("CARGO_PKG_VERSION"));

    for command in settings.commands() {
        let outcome = runner::run(&command)?;
        if settings.is_json() {
            println!("{}", outcome.to_json(command.name()));
        } else {
            println!("{}", outcome.render_text());
        }
    }

    Ok(())
}
