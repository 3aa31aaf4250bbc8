//! Run a finished script through the external renderer.

use crate::config::PlotConfig;
use crate::error::{Error, Result};
use log::debug;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

/// Outcome of a renderer run that managed to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// Nonzero exit; `None` when the process was terminated by a signal.
    Failed(Option<i32>),
}

impl RunStatus {
    pub fn success(self) -> bool {
        self == RunStatus::Success
    }
}

/// Run `program` with `args`, no stdin, inheriting stdout/stderr.
///
/// Only a failure to start is an [`Error`]; exit status is reported as [`RunStatus`].
pub fn run_batch_cmd<I, S>(program: &str, args: I) -> Result<RunStatus>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| Error::Spawn {
            program: program.to_string(),
            source,
        })?;
    debug!("{program} exited with {status}");
    if status.success() {
        Ok(RunStatus::Success)
    } else {
        Ok(RunStatus::Failed(status.code()))
    }
}

/// Render `script` with the configured gnuplot binary.
pub fn run_plot<P: AsRef<Path>>(script: P, config: &PlotConfig) -> Result<RunStatus> {
    let program = config.gnuplot_program();
    debug!("running {} {}", program, script.as_ref().display());
    run_batch_cmd(&program, [script.as_ref()])
}
