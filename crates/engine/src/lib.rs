//! # lombok-support-engine
//!
//! The event-driven side of Lombok support: reconciling workspace
//! classpaths against the session state, offering a language-server
//! restart when the observed Lombok artifact appears or changes version,
//! injecting the `-javaagent` launch flag, and jumping to the version
//! declaration in a build file.
//!
//! Everything host-facing goes through the collaborator traits in
//! `lombok-support-core`; the engine itself never talks to an editor.

pub mod agent;
pub mod configure;
pub mod reconcile;
pub mod status;
pub mod support;

pub use agent::inject_agent_param;
pub use configure::goto_version_declaration;
pub use reconcile::{check_lombok_dependency, reconcile};
pub use status::update_version_item;
pub use support::LombokSupport;
