use std::io;

use tracing::info;

use crate::cli::core::{run_session, CliError, CliMode, SessionContext};
use crate::cli::io::{PromptSource, ScriptSource};
use crate::config::Config;

pub fn run_cli() -> Result<(), CliError> {
    let mode = CliMode::detect();
    let config = Config::from_env();
    info!(?mode, "starting expense session");

    let mut context = SessionContext::new(mode, config, io::stdout());

    let report = match mode {
        CliMode::Interactive => run_session(&mut context, &mut PromptSource::new())?,
        CliMode::Script => {
            let stdin = io::stdin();
            run_session(&mut context, &mut ScriptSource::new(stdin.lock()))?
        }
    };

    info!(
        total = report.grand_total,
        budget = report.budget,
        "expense session finished"
    );
    Ok(())
}
