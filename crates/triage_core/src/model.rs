use std::fmt;
use std::str::FromStr;

/// Labelled model option. Stored and forwarded with process requests only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelChoice {
    #[default]
    Claude3Sonnet,
    Claude3Opus,
    Claude3Haiku,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 3] = [
        ModelChoice::Claude3Sonnet,
        ModelChoice::Claude3Opus,
        ModelChoice::Claude3Haiku,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ModelChoice::Claude3Sonnet => "claude-3-sonnet",
            ModelChoice::Claude3Opus => "claude-3-opus",
            ModelChoice::Claude3Haiku => "claude-3-haiku",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModelChoice::Claude3Sonnet => "Claude 3 Sonnet",
            ModelChoice::Claude3Opus => "Claude 3 Opus",
            ModelChoice::Claude3Haiku => "Claude 3 Haiku",
        }
    }

    /// Next option in display order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModel(pub String);

impl fmt::Display for UnknownModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown model id {:?}", self.0)
    }
}

impl std::error::Error for UnknownModel {}

impl FromStr for ModelChoice {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownModel(wanted.to_string()))
    }
}
