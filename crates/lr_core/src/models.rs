use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LineError;

/// A team's accumulated standing within one ranking computation.
///
/// Identity is the exact (case-sensitive) name; at most one `Team` exists
/// per distinct name while a computation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub points: u64,
}

impl Team {
    pub fn new(name: impl Into<String>, points: u64) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Add points earned in a further game to the running total.
    pub fn add_points(&mut self, additional: u64) {
        self.points += additional;
    }
}

/// Points awarded to one side of a single game.
///
/// Produced per parsed line and folded into the accumulation map; never
/// retained past that step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub name: String,
    pub points: u64,
}

impl GameResult {
    pub fn new(name: impl Into<String>, points: u64) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Diagnostic for an input line that failed validation.
///
/// Keeps the original untrimmed line text together with its 1-based number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadLine {
    pub line_number: u64,
    pub text: String,
    pub reason: LineError,
}

impl BadLine {
    pub fn new(line_number: u64, text: impl Into<String>, reason: LineError) -> Self {
        Self {
            line_number,
            text: text.into(),
            reason,
        }
    }
}

impl fmt::Display for BadLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Two spaces after the colon, reason deliberately omitted.
        write!(f, "{}:  {}", self.line_number, self.text)
    }
}

/// One row of the final standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: u64,
    pub team: Team,
}

impl RankedEntry {
    pub fn new(rank: u64, team: Team) -> Self {
        Self { rank, team }
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.team.points == 1 { "pt" } else { "pts" };
        write!(
            f,
            "{}. {}, {} {}",
            self.rank, self.team.name, self.team.points, unit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_points_accumulates() {
        let mut team = Team::new("Lions", 3);
        team.add_points(1);
        team.add_points(0);
        assert_eq!(team.points, 4);
    }

    #[test]
    fn test_ranked_entry_display_pluralizes() {
        let one = RankedEntry::new(3, Team::new("FC Awesome", 1));
        let many = RankedEntry::new(1, Team::new("Tarantulas", 6));
        let zero = RankedEntry::new(5, Team::new("Grouches", 0));

        assert_eq!(one.to_string(), "3. FC Awesome, 1 pt");
        assert_eq!(many.to_string(), "1. Tarantulas, 6 pts");
        assert_eq!(zero.to_string(), "5. Grouches, 0 pts");
    }

    #[test]
    fn test_bad_line_display_keeps_original_text() {
        let bad = BadLine::new(2, "  Team1, Team2 5 ", LineError::MissingScore);
        assert_eq!(bad.to_string(), "2:    Team1, Team2 5 ");
    }
}
