use colored::Colorize;
use std::fmt::Display;

/// Result of one reconciliation pass over the workspace classpaths.
///
/// `VersionChanged` carries bare version tokens ("1.18.20"), compared for
/// textual equality only. Removal of the library is never reported; once a
/// session has observed Lombok it keeps treating it as present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    NoChange,
    NewlyImported(String),
    VersionChanged { previous: String, current: String },
}

impl ReconcileOutcome {
    /// Whether this outcome warrants offering a language-server restart.
    #[must_use]
    pub const fn needs_restart(&self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

impl Display for ReconcileOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoChange => write!(f, "no change"),
            Self::NewlyImported(path) => {
                write!(f, "{} {}", "imported".green().bold(), path)
            }
            Self::VersionChanged { previous, current } => {
                write!(
                    f,
                    "{} {} -> {}",
                    "version changed".yellow().bold(),
                    previous,
                    current
                )
            }
        }
    }
}
