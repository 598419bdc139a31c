//! Purpose: Hold top-level CLI demo dispatch for `motifs`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate demo execution.
//! Invariants: Unknown and missing tokens stay a no-op with exit code 0.
//! Invariants: Demo run functions own all stdout output.

use super::*;

pub(super) fn dispatch_command(cli: Cli) -> Result<RunOutcome, Error> {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::aot::generate(shell, &mut cmd, "motifs", &mut io::stdout());
        return Ok(RunOutcome::ok());
    }

    let Some(token) = cli.demo.as_deref() else {
        tracing::debug!("no demo token given; nothing to do");
        return Ok(RunOutcome::ok());
    };

    let mut stdout = io::stdout().lock();
    match token {
        "template_method" => demo::template_method(&mut stdout)?,
        "factory_method" => demo::factory_method(&mut stdout)?,
        "singleton" => demo::singleton(&mut stdout)?,
        "singleton2" => demo::singleton2(&mut stdout)?,
        "adapter" => demo::adapter(&mut stdout)?,
        "adapter2" => demo::adapter2(&mut stdout)?,
        other => {
            tracing::debug!(token = other, "unknown demo token; nothing to do");
        }
    }
    Ok(RunOutcome::ok())
}
