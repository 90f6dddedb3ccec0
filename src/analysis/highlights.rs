//! Season highlight selection.
//!
//! Each category yields the leading driver, or None when nobody qualifies.
//! A zero count never makes a highlight; an empty season has none at all.

use crate::models::{DriverSeasonSummary, Highlight, SeasonHighlights};

/// Pick the season's superlatives from summaries in championship order.
///
/// Ties go to the better-ranked driver, which the scan gets for free by
/// only replacing the running best on a strict improvement.
pub(crate) fn season_highlights(ranked: &[DriverSeasonSummary]) -> SeasonHighlights {
    SeasonHighlights {
        most_wins: leading_count(ranked, |s| s.wins),
        most_podiums: leading_count(ranked, |s| s.podiums),
        most_poles: leading_count(ranked, |s| s.pole_positions),
        most_fastest_laps: leading_count(ranked, |s| s.fastest_laps),
        best_average_finish: lowest_average_finish(ranked),
        best_consistency: highest_consistency(ranked),
    }
}

fn highlight(summary: &DriverSeasonSummary, value: f64) -> Highlight {
    Highlight {
        driver_id: summary.driver_id.clone(),
        driver_name: summary.name.clone(),
        value,
    }
}

/// Largest non-zero count wins.
fn leading_count(
    ranked: &[DriverSeasonSummary],
    value: fn(&DriverSeasonSummary) -> u32,
) -> Option<Highlight> {
    let mut best: Option<(&DriverSeasonSummary, u32)> = None;
    for summary in ranked {
        let v = value(summary);
        if v == 0 {
            continue;
        }
        if best.map_or(true, |(_, bv)| v > bv) {
            best = Some((summary, v));
        }
    }
    best.map(|(s, v)| highlight(s, v as f64))
}

/// Lowest mean finishing position among drivers that have one.
fn lowest_average_finish(ranked: &[DriverSeasonSummary]) -> Option<Highlight> {
    let mut best: Option<(&DriverSeasonSummary, f64)> = None;
    for summary in ranked {
        if let Some(avg) = summary.average_finish {
            if best.map_or(true, |(_, bv)| avg < bv) {
                best = Some((summary, avg));
            }
        }
    }
    best.map(|(s, v)| highlight(s, v))
}

/// Highest non-zero consistency percentage.
fn highest_consistency(ranked: &[DriverSeasonSummary]) -> Option<Highlight> {
    let mut best: Option<(&DriverSeasonSummary, f64)> = None;
    for summary in ranked {
        if summary.consistency <= 0.0 {
            continue;
        }
        if best.map_or(true, |(_, bv)| summary.consistency > bv) {
            best = Some((summary, summary.consistency));
        }
    }
    best.map(|(s, v)| highlight(s, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityId;

    fn make_summary(name: &str, position: u32) -> DriverSeasonSummary {
        DriverSeasonSummary {
            driver_id: EntityId::generate(&[name]),
            name: name.to_string(),
            team: None,
            car_number: None,
            position,
            points: 0.0,
            wins: 0,
            podiums: 0,
            pole_positions: 0,
            fastest_laps: 0,
            dnfs: 0,
            points_finishes: 0,
            total_races: 0,
            average_finish: None,
            consistency: 0.0,
            recent_results: Vec::new(),
        }
    }

    #[test]
    fn test_most_wins_picks_largest() {
        let mut alice = make_summary("Alice", 1);
        alice.wins = 2;
        let mut bruno = make_summary("Bruno", 2);
        bruno.wins = 4;

        let highlights = season_highlights(&[alice, bruno]);

        let most_wins = highlights.most_wins.unwrap();
        assert_eq!(most_wins.driver_name, "Bruno");
        assert_eq!(most_wins.value, 4.0);
    }

    #[test]
    fn test_tie_goes_to_better_ranked_driver() {
        let mut alice = make_summary("Alice", 1);
        alice.wins = 3;
        let mut bruno = make_summary("Bruno", 2);
        bruno.wins = 3;

        // Slice is in championship order, so Alice holds the tie
        let highlights = season_highlights(&[alice, bruno]);

        assert_eq!(highlights.most_wins.unwrap().driver_name, "Alice");
    }

    #[test]
    fn test_zero_counts_never_qualify() {
        let alice = make_summary("Alice", 1);
        let bruno = make_summary("Bruno", 2);

        let highlights = season_highlights(&[alice, bruno]);

        assert!(highlights.most_wins.is_none());
        assert!(highlights.most_podiums.is_none());
        assert!(highlights.most_poles.is_none());
        assert!(highlights.most_fastest_laps.is_none());
        assert!(highlights.best_consistency.is_none());
        assert!(highlights.best_average_finish.is_none());
    }

    #[test]
    fn test_best_average_finish_is_lowest() {
        let mut alice = make_summary("Alice", 1);
        alice.average_finish = Some(3.5);
        let mut bruno = make_summary("Bruno", 2);
        bruno.average_finish = Some(2.25);
        // No classified finishes, never considered
        let mika = make_summary("Mika", 3);

        let highlights = season_highlights(&[alice, bruno, mika]);

        let best = highlights.best_average_finish.unwrap();
        assert_eq!(best.driver_name, "Bruno");
        assert_eq!(best.value, 2.25);
    }

    #[test]
    fn test_best_consistency() {
        let mut alice = make_summary("Alice", 1);
        alice.consistency = 66.7;
        let mut bruno = make_summary("Bruno", 2);
        bruno.consistency = 100.0;

        let highlights = season_highlights(&[alice, bruno]);

        let best = highlights.best_consistency.unwrap();
        assert_eq!(best.driver_name, "Bruno");
        assert_eq!(best.value, 100.0);
    }

    #[test]
    fn test_empty_season_has_no_highlights() {
        let highlights = season_highlights(&[]);

        assert!(highlights.most_wins.is_none());
        assert!(highlights.best_average_finish.is_none());
    }

    #[test]
    fn test_categories_select_independently() {
        let mut alice = make_summary("Alice", 1);
        alice.wins = 2;
        alice.pole_positions = 1;
        let mut bruno = make_summary("Bruno", 2);
        bruno.podiums = 3;
        bruno.fastest_laps = 2;

        let highlights = season_highlights(&[alice, bruno]);

        assert_eq!(highlights.most_wins.unwrap().driver_name, "Alice");
        assert_eq!(highlights.most_poles.unwrap().driver_name, "Alice");
        assert_eq!(highlights.most_podiums.unwrap().driver_name, "Bruno");
        assert_eq!(highlights.most_fastest_laps.unwrap().driver_name, "Bruno");
    }
}
