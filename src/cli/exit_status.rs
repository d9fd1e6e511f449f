use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): Collection completed, including when nothing was found
/// - `Error` (1): Collection aborted (I/O error, invalid config or arguments)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Collection completed and output was written.
    Success,
    /// Collection failed; nothing was written to stdout.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
