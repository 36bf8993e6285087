//! # lombok-support-core
//!
//! Core types and host contracts for Lombok integration in a Java language
//! server host: classpath entry matching, per-session import state over a
//! host-owned key-value store, and the collaborator traits the engine is
//! driven through.

pub mod classpath;
pub mod config;
pub mod host;
pub mod outcome;
pub mod session;

// Re-export the names most callers need
pub use classpath::{VersionPatternError, is_lombok_jar, version_label, version_token};
pub use config::SupportConfig;
pub use host::{
    ClasspathScope, LanguageServerControl, Navigator, ProjectHost, RestartPrompt, StatusCommand,
    VersionStatusDisplay,
};
pub use outcome::ReconcileOutcome;
pub use session::{InMemoryStateStore, SessionState, StateStore};
