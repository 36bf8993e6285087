use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use tracing::info;

use lombok_support_core::{
    LanguageServerControl, Navigator, ProjectHost, ReconcileOutcome, RestartPrompt, SessionState,
    StateStore, SupportConfig, VersionStatusDisplay,
};

use crate::{agent, configure, reconcile, status};

/// Session-lifetime owner of Lombok support.
///
/// Holds the configuration, the session state over the host's key-value
/// store, and the goto-command registration flag. One instance lives for
/// the duration of a host session; state is never shared across sessions.
#[derive(Debug)]
pub struct LombokSupport {
    config: SupportConfig,
    state: SessionState,
    goto_command_registered: AtomicBool,
}

impl LombokSupport {
    #[must_use]
    pub fn new(config: SupportConfig, store: Box<dyn StateStore>) -> Self {
        Self {
            config,
            state: SessionState::new(store),
            goto_command_registered: AtomicBool::new(false),
        }
    }

    /// Support over a fresh in-memory store, for hosts without
    /// persistence and for tests.
    #[must_use]
    pub fn in_memory(config: SupportConfig) -> Self {
        Self {
            config,
            state: SessionState::in_memory(),
            goto_command_registered: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.config.enabled
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    /// One reconciliation pass without any prompting. Disabled support
    /// reconciles nothing.
    ///
    /// # Errors
    /// Returns error if a host query fails mid-pass.
    pub async fn reconcile(&mut self, host: &dyn ProjectHost) -> Result<ReconcileOutcome> {
        if !self.config.enabled {
            return Ok(ReconcileOutcome::NoChange);
        }
        reconcile::reconcile(host, &mut self.state).await
    }

    /// Reconcile and, when anything changed, offer a language-server
    /// restart through the host prompt.
    ///
    /// # Errors
    /// Returns error if a host query, the prompt, or the restart fails.
    pub async fn check_dependency(
        &mut self,
        host: &dyn ProjectHost,
        prompt: &dyn RestartPrompt,
        control: &dyn LanguageServerControl,
    ) -> Result<ReconcileOutcome> {
        if !self.config.enabled {
            return Ok(ReconcileOutcome::NoChange);
        }
        let outcome =
            reconcile::check_lombok_dependency(host, prompt, control, &mut self.state).await?;
        if outcome.needs_restart() {
            info!(outcome = %outcome, "lombok dependency changed");
        }
        Ok(outcome)
    }

    /// Attach the Lombok agent to a launch parameter list. No-op while
    /// support is disabled.
    pub fn inject_agent_param(&mut self, params: &mut Vec<String>) {
        if !self.config.enabled {
            return;
        }
        agent::inject_agent_param(params, &mut self.state);
    }

    /// Jump to the Lombok version declaration in a build file.
    ///
    /// # Errors
    /// Returns error if the host fails to read the document or move the
    /// cursor.
    pub async fn goto_version_declaration(
        &self,
        navigator: &dyn Navigator,
        build_file: &Path,
    ) -> Result<Option<usize>> {
        configure::goto_version_declaration(navigator, build_file).await
    }

    /// Claim the goto-command registration. True exactly once per
    /// session; the host registers its command on the first claim and
    /// skips re-registration afterwards.
    pub fn register_goto_command(&self) -> bool {
        !self.goto_command_registered.swap(true, Ordering::SeqCst)
    }

    #[must_use]
    pub fn version_label(&self) -> Option<String> {
        self.state.version_label()
    }

    /// Push the resolved version label into the host's status item, when
    /// the capability exists and a version has been resolved.
    ///
    /// # Errors
    /// Returns error if the host fails to render the item.
    pub fn update_status_item(
        &self,
        display: &mut dyn VersionStatusDisplay,
        build_file: Option<&Path>,
    ) -> Result<bool> {
        let Some(label) = self.version_label() else {
            return Ok(false);
        };
        status::update_version_item(display, &label, build_file)
    }
}
