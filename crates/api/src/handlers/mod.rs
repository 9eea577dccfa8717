pub mod inspector;
pub mod sherlock;
pub mod whois;

use osint_core::process::{ProcessInvoker, ProcessOutput};

use crate::error::{AnalysisKind, AppError, AppResult};

/// Run `invoker` with `args` and keep the output only if it is usable.
///
/// A non-zero exit that still printed results is logged and accepted.
pub(crate) async fn run_tool(
    kind: AnalysisKind,
    invoker: &ProcessInvoker,
    args: &[String],
) -> AppResult<ProcessOutput> {
    let output = invoker
        .invoke(args)
        .await
        .and_then(ProcessOutput::into_usable)
        .map_err(|e| AppError::analysis(kind, e))?;

    if !output.success() {
        tracing::warn!(
            analysis = %kind,
            exit_code = output.exit_code,
            stderr = %output.stderr.trim(),
            "Tool exited non-zero, parsing partial output"
        );
    }

    Ok(output)
}
