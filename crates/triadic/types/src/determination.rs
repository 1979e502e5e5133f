use serde::{Deserialize, Serialize};

/// Authorization status of a confession.
///
/// Starts at [`Determination::Unknown`] and moves to one of the three
/// terminal variants exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Determination {
    /// Dwelling: no determination made yet.
    #[default]
    Unknown,
    AuthorizedClear,
    AuthorizedFlag,
    Forgiven,
}

impl Determination {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Only `Unknown -> terminal` is a legal transition.
    pub fn can_transition_to(self, next: Determination) -> bool {
        matches!(self, Self::Unknown) && next.is_terminal()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::AuthorizedClear => "authorized_clear",
            Self::AuthorizedFlag => "authorized_flag",
            Self::Forgiven => "forgiven",
        }
    }
}

impl std::fmt::Display for Determination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
