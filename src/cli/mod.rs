use anyhow::Result;

pub use args::Arguments;
pub use exit_status::ExitStatus;

mod args;
mod exit_status;
mod report;
mod run;

pub use run::{ResolvedSettings, RunResult, resolve_settings, run};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose;

    let result = run(&args)?;
    if verbose {
        report::print_summary(&result);
    }

    Ok(ExitStatus::Success)
}
