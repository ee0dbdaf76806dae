use thiserror::Error;

/// Why a single input line was rejected.
///
/// Every variant is reported to callers the same way, as a [`BadLine`]
/// carrying the raw line text; the variant itself only drives internal
/// control flow and tests.
///
/// [`BadLine`]: crate::models::BadLine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("expected two comma-separated results, found {found}")]
    WrongSegmentCount { found: usize },

    #[error("result segment has no separable score token")]
    MissingScore,

    #[error("score is not a valid integer: {token}")]
    InvalidScore { token: String },

    #[error("team name is empty")]
    EmptyTeamName,

    #[error("a team cannot play itself: {name}")]
    SelfPlay { name: String },
}

impl LineError {
    /// Whether the line failed on structure (shape/score syntax) rather
    /// than on post-parse validation of otherwise well-formed content.
    pub fn is_structural(&self) -> bool {
        match self {
            LineError::WrongSegmentCount { .. } => true,
            LineError::MissingScore => true,
            LineError::InvalidScore { .. } => true,
            LineError::EmptyTeamName => false,
            LineError::SelfPlay { .. } => false,
        }
    }
}
