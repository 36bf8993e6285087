use tracing::debug;

use lombok_support_core::SessionState;
use lombok_support_core::classpath::AGENT_JAR_PATTERN;

/// Mutate language-server launch parameters to attach the Lombok agent.
///
/// The tracked agent version is cleared up front on every invocation, so
/// callers must not rely on it between calls. When the session has Lombok
/// imported, any existing agent-jar parameter is removed before the fresh
/// `-javaagent` flag is appended; the whole sequence is synchronous, with
/// no suspension point between removal and append.
pub fn inject_agent_param(params: &mut Vec<String>, state: &mut SessionState) {
    state.clear_agent_version();
    if !state.is_imported() {
        return;
    }
    let Some(path) = state.resolved_path() else {
        return;
    };
    let before = params.len();
    params.retain(|param| !AGENT_JAR_PATTERN.is_match(param));
    if before != params.len() {
        debug!(removed = before - params.len(), "dropped stale lombok agent params");
    }
    params.push(format!("-javaagent:{path}"));
    state.set_agent_version(&path);
}
