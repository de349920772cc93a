//! Cross-round statistics and the leaderboard.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::options::ScorePolicy;

/// Wins and losses recorded for one name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    /// Hands won.
    pub wins: u32,
    /// Hands lost.
    pub losses: u32,
}

impl Record {
    /// Returns the number of decided hands.
    #[must_use]
    pub const fn games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Returns `wins / (wins + losses)`, or 0 with no decided hands.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => f64::from(self.wins) / f64::from(games),
        }
    }
}

/// A leaderboard entry.
///
/// Entries order by money descending, then name ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Recorded balance.
    pub money: usize,
    /// Player name.
    pub name: String,
}

impl Ord for ScoreEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .money
            .cmp(&self.money)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for ScoreEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Win/loss counts per player name plus a ranked leaderboard.
///
/// Lookups of unknown names return zeroes or `None`; nothing here panics on
/// a missing name.
#[derive(Debug, Clone, Default)]
pub struct GameStats {
    records: HashMap<String, Record>,
    high_scores: BTreeSet<ScoreEntry>,
    standings: HashMap<String, usize>,
    policy: ScorePolicy,
}

impl GameStats {
    /// Creates empty statistics using `policy` for the leaderboard.
    #[must_use]
    pub fn new(policy: ScorePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Changes the leaderboard policy for later updates.
    pub const fn set_policy(&mut self, policy: ScorePolicy) {
        self.policy = policy;
    }

    /// Returns the leaderboard policy.
    #[must_use]
    pub const fn policy(&self) -> ScorePolicy {
        self.policy
    }

    fn record_mut(&mut self, name: &str) -> &mut Record {
        self.records.entry(name.into()).or_default()
    }

    /// Counts a win for `name`.
    pub fn record_win(&mut self, name: &str) {
        self.record_mut(name).wins += 1;
    }

    /// Counts a loss for `name`.
    pub fn record_loss(&mut self, name: &str) {
        self.record_mut(name).losses += 1;
    }

    /// Replaces the stored counts for `name`, e.g. from a loaded profile.
    pub fn restore(&mut self, name: &str, wins: u32, losses: u32) {
        *self.record_mut(name) = Record { wins, losses };
    }

    /// Returns the record for `name`, if any hand was recorded.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<Record> {
        self.records.get(name).copied()
    }

    /// Returns the number of wins for `name`.
    #[must_use]
    pub fn wins(&self, name: &str) -> u32 {
        self.record(name).map_or(0, |r| r.wins)
    }

    /// Returns the number of losses for `name`.
    #[must_use]
    pub fn losses(&self, name: &str) -> u32 {
        self.record(name).map_or(0, |r| r.losses)
    }

    /// Returns the win rate for `name` in `[0, 1]`.
    #[must_use]
    pub fn win_rate(&self, name: &str) -> f64 {
        self.record(name).map_or(0.0, |r| r.win_rate())
    }

    /// Returns every recorded name with its record, sorted by name.
    #[must_use]
    pub fn records(&self) -> Vec<(&str, Record)> {
        let mut records: Vec<_> = self
            .records
            .iter()
            .map(|(name, record)| (name.as_str(), *record))
            .collect();
        records.sort_unstable_by(|a, b| a.0.cmp(b.0));
        records
    }

    /// Updates the leaderboard entry for `name`.
    ///
    /// Any existing entry for the name is removed first, so the board holds
    /// at most one entry per name. Under [`ScorePolicy::Peak`] the higher of
    /// the old and new balance is kept.
    pub fn update_high_score(&mut self, name: &str, money: usize) {
        let money = match (self.policy, self.remove_score(name)) {
            (ScorePolicy::Peak, Some(previous)) => previous.max(money),
            _ => money,
        };

        self.high_scores.insert(ScoreEntry {
            money,
            name: name.into(),
        });
        self.standings.insert(name.into(), money);
    }

    fn remove_score(&mut self, name: &str) -> Option<usize> {
        let money = self.standings.remove(name)?;
        self.high_scores.remove(&ScoreEntry {
            money,
            name: name.into(),
        });
        Some(money)
    }

    /// Returns the leaderboard balance for `name`.
    #[must_use]
    pub fn high_score(&self, name: &str) -> Option<usize> {
        self.standings.get(name).copied()
    }

    /// Returns the best `n` entries, richest first.
    #[must_use]
    pub fn top_scores(&self, n: usize) -> Vec<ScoreEntry> {
        self.high_scores.iter().take(n).cloned().collect()
    }

    /// Drops every statistic kept for `name`.
    pub fn forget(&mut self, name: &str) {
        self.records.remove(name);
        self.remove_score(name);
    }
}
