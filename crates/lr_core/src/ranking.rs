use std::collections::HashMap;

use crate::models::{BadLine, RankedEntry, Team};
use crate::parser::{LineParser, ScoringRules};

/// Computes league standings from a sequence of raw result lines.
///
/// Holds only immutable configuration, so a single engine can be shared
/// across invocations; every call owns its own accumulation state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine {
    parser: LineParser,
}

impl RankingEngine {
    pub fn new(rules: ScoringRules) -> Self {
        Self {
            parser: LineParser::new(rules),
        }
    }

    /// Engine with [`ScoringRules::STANDARD`].
    pub fn standard() -> Self {
        Self::new(ScoringRules::STANDARD)
    }

    /// Tally every line and produce the ranked standings.
    ///
    /// Lines are consumed strictly once, front to back, with a 1-based
    /// counter that advances for every line regardless of outcome. A line
    /// that fails to parse contributes nothing to the tally; its diagnostic
    /// is collected instead. If any line failed, the full diagnostic list
    /// (in input order) is returned and no table is computed.
    ///
    /// On success the table is sorted by points descending, ties broken by
    /// name ascending (case-sensitive). Tied teams share a rank and the
    /// next distinct rank equals the 1-based position of its first team, so
    /// ranks may gap (1, 1, 3, ...). Empty input yields an empty table.
    pub fn calculate_rankings<I, S>(&self, lines: I) -> Result<Vec<RankedEntry>, Vec<BadLine>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut teams: HashMap<String, Team> = HashMap::new();
        let mut bad_lines: Vec<BadLine> = Vec::new();
        let mut line_number: u64 = 0;

        for line in lines {
            line_number += 1;
            match self.parser.parse_line(line_number, line.as_ref()) {
                Ok((home, away)) => {
                    for result in [home, away] {
                        match teams.get_mut(&result.name) {
                            Some(team) => team.add_points(result.points),
                            None => {
                                teams.insert(
                                    result.name.clone(),
                                    Team::new(result.name, result.points),
                                );
                            }
                        }
                    }
                }
                Err(bad) => bad_lines.push(bad),
            }
        }

        log::debug!(
            "processed {} lines: {} teams, {} bad lines",
            line_number,
            teams.len(),
            bad_lines.len()
        );

        if !bad_lines.is_empty() {
            // One bad line voids the whole table, but every diagnostic is
            // still reported.
            return Err(bad_lines);
        }

        let mut standings: Vec<Team> = teams.into_values().collect();
        standings.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.name.cmp(&b.name)));

        let mut rankings = Vec::with_capacity(standings.len());
        let mut rank: u64 = 0;
        let mut last_points: Option<u64> = None;
        for (position, team) in standings.into_iter().enumerate() {
            if last_points != Some(team.points) {
                rank = position as u64 + 1;
                last_points = Some(team.points);
            }
            rankings.push(RankedEntry::new(rank, team));
        }

        Ok(rankings)
    }
}
