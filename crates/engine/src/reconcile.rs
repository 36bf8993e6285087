use anyhow::{Context, Result};
use tracing::debug;

use lombok_support_core::{
    ClasspathScope, LanguageServerControl, ProjectHost, ReconcileOutcome, RestartPrompt,
    SessionState, is_lombok_jar, version_token,
};

pub const RESTART_ACTION: &str = "Restart";

const IMPORT_MESSAGE: &str = "Do you want to restart Java Language Server for Lombok support?";

/// One reconciliation pass over the workspace.
///
/// Projects are inspected in host order and each runtime classpath is
/// awaited before the next is requested; the first Lombok entry found
/// anywhere wins and ends the scan immediately. A failed query aborts the
/// pass so the session never reconciles against partial data.
///
/// # Errors
/// Returns error if project enumeration or a classpath query fails, or if
/// the stored resolved path has lost its version token.
pub async fn reconcile(
    host: &dyn ProjectHost,
    state: &mut SessionState,
) -> Result<ReconcileOutcome> {
    for project in host.java_projects().await? {
        let entries = host.classpath(&project, ClasspathScope::Runtime).await?;
        for entry in entries {
            if !is_lombok_jar(&entry) {
                continue;
            }
            debug!(project = %project, entry = %entry, "lombok artifact on runtime classpath");
            if !state.is_imported() {
                state.mark_imported(&entry);
                return Ok(ReconcileOutcome::NewlyImported(entry));
            }
            let Ok(current) = version_token(&entry) else {
                // no resolvable version; keep scanning
                debug!(entry = %entry, "skipping entry without version token");
                continue;
            };
            let stored = state
                .resolved_path()
                .context("imported session has no resolved lombok path")?;
            let previous = version_token(&stored)
                .context("stored lombok path has no version token")?;
            if previous == current {
                return Ok(ReconcileOutcome::NoChange);
            }
            state.set_resolved_path(&entry);
            return Ok(ReconcileOutcome::VersionChanged { previous, current });
        }
    }
    Ok(ReconcileOutcome::NoChange)
}

fn restart_message(outcome: &ReconcileOutcome) -> Option<String> {
    match outcome {
        ReconcileOutcome::NoChange => None,
        ReconcileOutcome::NewlyImported(_) => Some(IMPORT_MESSAGE.to_string()),
        ReconcileOutcome::VersionChanged { previous, current } => Some(format!(
            "Lombok version changed from {previous} to {current}. \
             Do you want to restart Java Language Server for new version Lombok support?"
        )),
    }
}

/// Reconcile, then offer a restart when the pass changed anything.
///
/// The session state is already updated by the time the prompt is shown;
/// declining keeps the new state and simply skips the restart.
///
/// # Errors
/// Returns error if reconciliation, the prompt, or the restart command
/// fails.
pub async fn check_lombok_dependency(
    host: &dyn ProjectHost,
    prompt: &dyn RestartPrompt,
    control: &dyn LanguageServerControl,
    state: &mut SessionState,
) -> Result<ReconcileOutcome> {
    let outcome = reconcile(host, state).await?;
    if let Some(message) = restart_message(&outcome) {
        debug!(outcome = %outcome, "offering language server restart");
        if prompt.confirm(&message, RESTART_ACTION).await? {
            control.restart().await?;
        }
    }
    Ok(outcome)
}
