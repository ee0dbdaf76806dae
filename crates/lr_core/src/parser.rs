use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::LineError;
use crate::models::{BadLine, GameResult};

/// Points handed out for each game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub win: u64,
    pub draw: u64,
    pub loss: u64,
}

impl ScoringRules {
    /// Standard league scoring: 3 for a win, 1 for a draw, 0 for a loss.
    pub const STANDARD: ScoringRules = ScoringRules {
        win: 3,
        draw: 1,
        loss: 0,
    };
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Converts one raw result line into the per-team point awards.
///
/// Pure: the same `(line_number, line)` input always produces the same
/// output, and nothing is mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineParser {
    rules: ScoringRules,
}

impl LineParser {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    /// Parser with [`ScoringRules::STANDARD`].
    pub fn standard() -> Self {
        Self::new(ScoringRules::STANDARD)
    }

    pub fn rules(&self) -> ScoringRules {
        self.rules
    }

    /// Parse a single `"<name> <score>, <name> <score>"` result line.
    ///
    /// The line must split on `,` into exactly two segments. Within a
    /// segment the last whitespace-delimited token is the score (signed
    /// base-10), everything before it is the team name with surrounding
    /// whitespace stripped and inner runs collapsed to single spaces.
    /// Equal scores award both sides the draw points; otherwise the higher
    /// score takes the win points and the lower the loss points.
    ///
    /// On any failure the returned [`BadLine`] carries `line_number` and
    /// the original untrimmed `line` text, never a partial parse.
    pub fn parse_line(
        &self,
        line_number: u64,
        line: &str,
    ) -> Result<(GameResult, GameResult), BadLine> {
        self.parse_inner(line)
            .map_err(|reason| BadLine::new(line_number, line, reason))
    }

    fn parse_inner(&self, line: &str) -> Result<(GameResult, GameResult), LineError> {
        let segments: Vec<&str> = line.split(',').collect();
        if segments.len() != 2 {
            return Err(LineError::WrongSegmentCount {
                found: segments.len(),
            });
        }

        let (home_name, home_score) = split_result(segments[0])?;
        let (away_name, away_score) = split_result(segments[1])?;

        if home_name == away_name {
            return Err(LineError::SelfPlay { name: home_name });
        }

        let (home_points, away_points) = match home_score.cmp(&away_score) {
            Ordering::Equal => (self.rules.draw, self.rules.draw),
            Ordering::Greater => (self.rules.win, self.rules.loss),
            Ordering::Less => (self.rules.loss, self.rules.win),
        };

        Ok((
            GameResult::new(home_name, home_points),
            GameResult::new(away_name, away_points),
        ))
    }
}

/// Split one result segment into `(team name, score)`.
///
/// The score is the token after the last whitespace run; a segment without
/// one cannot hold both a name and a score.
fn split_result(segment: &str) -> Result<(String, i64), LineError> {
    let trimmed = segment.trim_end();
    let (name_part, score_token) = trimmed
        .rsplit_once(char::is_whitespace)
        .ok_or(LineError::MissingScore)?;

    // i64 bounds double as the overflow limit: an out-of-range literal is
    // rejected like any other malformed score.
    let score: i64 = score_token.parse().map_err(|_| LineError::InvalidScore {
        token: score_token.to_string(),
    })?;

    let name = name_part.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return Err(LineError::EmptyTeamName);
    }

    Ok((name, score))
}
