//! Candidate ranking and result reporting
//!
//! Candidates are sorted by descending confidence with ties keeping their
//! discovery order. An empty scan is a valid outcome, reported with
//! diagnostics rather than treated as a failure.

use crate::core::types::Candidate;
use std::fmt::Write;

/// How many candidates the detailed report shows
const TOP_DETAIL_ROWS: usize = 5;

/// Candidates ordered by descending confidence
#[derive(Debug, Clone, Default)]
pub struct RankedCandidates {
    candidates: Vec<Candidate>,
}

impl RankedCandidates {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// The highest-confidence candidate, if any
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Up to the first `k` candidates
    pub fn top(&self, k: usize) -> &[Candidate] {
        &self.candidates[..self.candidates.len().min(k)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }
}

/// Rank candidates by score, descending; stable on ties.
pub fn rank(mut candidates: Vec<Candidate>) -> RankedCandidates {
    candidates.sort_by_key(|c| std::cmp::Reverse(c.score));
    RankedCandidates { candidates }
}

/// Render the console report.
///
/// The single actionable artifact is the winning candidate's offset from
/// the module base, printed in a form ready to paste into downstream
/// configuration.
pub fn render_report(ranked: &RankedCandidates) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "===========================================");
    let _ = writeln!(out, "  SCAN RESULTS");
    let _ = writeln!(out, "===========================================");

    if ranked.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "No GWorld candidates found");
        let _ = writeln!(out);
        let _ = writeln!(out, "Possible reasons:");
        let _ = writeln!(out, "  - Game is in menu/lobby (not in match)");
        let _ = writeln!(out, "  - Structures haven't initialized yet");
        let _ = writeln!(out, "  - Try waiting longer in an active session");
        let _ = writeln!(out, "  - Move around in game to load actors");
        return out;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Found {} candidate(s)", ranked.len());
    let _ = writeln!(out);

    for (index, candidate) in ranked.top(TOP_DETAIL_ROWS).iter().enumerate() {
        let _ = writeln!(out, "Candidate #{}:", index + 1);
        let _ = writeln!(out, "  Offset:     0x{:X}", candidate.offset);
        let _ = writeln!(out, "  Address:    {:X}", candidate.address);
        let _ = writeln!(out, "  Confidence: {}", candidate.score);
        let _ = writeln!(out, "  World Ptr:  0x{:X}", candidate.value);
        let _ = writeln!(out, "  Actors:     {}", candidate.actor_count);
        let _ = writeln!(out);
    }

    if let Some(best) = ranked.best() {
        let _ = writeln!(out, "Recommended: Candidate #1 (highest confidence)");
        let _ = writeln!(out, "GWorld Offset: 0x{:X}", best.offset);
        let _ = writeln!(out);
        let _ = writeln!(out, "GWORLD_OFFSET = 0x{:X}", best.offset);
    }

    out
}
