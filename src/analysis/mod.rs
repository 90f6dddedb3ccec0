//! Season analysis engine.
//!
//! Computes derived season views from a snapshot:
//! - Per-driver season summaries (tallies, averages, recent form)
//! - Championship standings with a deterministic total order
//! - Season highlights (most wins, best average finish, ...)
//! - Per-driver trend series aligned on the event calendar

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{
    DriverId, DriverResult, DriverSeasonSummary, EventCounts, EventId, RaceEvent, SeasonAnalysis,
    SeasonSummary,
};
use crate::normalize::normalize_row;
use crate::snapshot::SeasonSnapshot;

mod highlights;
mod standings;
mod summary;
mod trends;

pub use trends::*;

use highlights::season_highlights;
use standings::rank_standings;
use summary::summarize_driver;

// ── Options ─────────────────────────────────────────────────────

/// Tunables for season analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// How many recent results each driver summary carries
    #[serde(default = "default_recent_results")]
    pub recent_results: usize,
}

fn default_recent_results() -> usize {
    5
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            recent_results: default_recent_results(),
        }
    }
}

// ── Event Calendar ──────────────────────────────────────────────

/// One completed event with its derived round number and display label.
#[derive(Debug, Clone)]
pub(crate) struct CalendarEntry {
    pub event_id: EventId,
    pub label: String,
    pub date: NaiveDate,
    pub round: u32,
}

/// The season's completed events in chronological order (date, then round).
///
/// Round numbers and labels are derived from the full event list before
/// filtering, so an event keeps its round number even when earlier rounds
/// are still scheduled.
pub(crate) struct EventCalendar {
    entries: Vec<CalendarEntry>,
    index: HashMap<EventId, usize>,
}

impl EventCalendar {
    pub fn from_events(events: &[RaceEvent]) -> Self {
        let mut entries: Vec<CalendarEntry> = events
            .iter()
            .enumerate()
            .filter(|(_, e)| e.status.is_completed())
            .map(|(position, e)| CalendarEntry {
                event_id: e.id.clone(),
                label: e.display_name(position),
                date: e.date,
                round: e.round_number(position),
            })
            .collect();

        entries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.round.cmp(&b.round)));

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.event_id.clone(), i))
            .collect();

        Self { entries, index }
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &EventId) -> Option<&CalendarEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[CalendarEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ── Season Facade ───────────────────────────────────────────────

/// Analyze a season snapshot with default options.
pub fn analyze_season(snapshot: &SeasonSnapshot) -> SeasonAnalysis {
    analyze_season_with(snapshot, &AnalysisOptions::default())
}

/// Analyze a season snapshot: normalize raw rows, aggregate per driver,
/// rank the standings, and pick season highlights.
///
/// Pure and deterministic: the same snapshot content always produces the
/// same output, regardless of result row order. Rows referencing unknown
/// events or drivers are dropped (logged at debug level), and only
/// completed events contribute to aggregates.
pub fn analyze_season_with(snapshot: &SeasonSnapshot, options: &AnalysisOptions) -> SeasonAnalysis {
    debug!(
        "Analyzing season snapshot: {} events, {} drivers, {} result rows",
        snapshot.events.len(),
        snapshot.drivers.len(),
        snapshot.results.len()
    );

    let calendar = EventCalendar::from_events(&snapshot.events);
    let known_events: HashSet<&EventId> = snapshot.events.iter().map(|e| &e.id).collect();
    let roster: HashSet<&DriverId> = snapshot.drivers.iter().map(|d| &d.id).collect();

    // Normalize and group rows, dropping structural violations
    let mut by_driver: HashMap<DriverId, Vec<DriverResult>> = HashMap::new();
    let mut seen: HashSet<(&EventId, &DriverId)> = HashSet::new();
    for raw in &snapshot.results {
        if !known_events.contains(&raw.event_id) {
            debug!("Dropping result row for unknown event {}", raw.event_id);
            continue;
        }
        if !roster.contains(&raw.driver_id) {
            debug!("Dropping result row for unknown driver {}", raw.driver_id);
            continue;
        }
        if !calendar.contains(&raw.event_id) {
            // Scheduled or cancelled round: not part of season aggregates
            continue;
        }
        // At most one result per (event, driver); later duplicates lose
        if !seen.insert((&raw.event_id, &raw.driver_id)) {
            debug!(
                "Dropping duplicate result row for event {} driver {}",
                raw.event_id, raw.driver_id
            );
            continue;
        }
        let result = normalize_row(raw);
        by_driver
            .entry(result.driver_id.clone())
            .or_default()
            .push(result);
    }

    // One summary per roster driver, zero-result drivers included
    let mut summaries: Vec<DriverSeasonSummary> = snapshot
        .drivers
        .iter()
        .map(|driver| {
            let results = by_driver.get(&driver.id).map(Vec::as_slice).unwrap_or(&[]);
            summarize_driver(driver, results, &calendar, options.recent_results)
        })
        .collect();

    rank_standings(&mut summaries);
    let highlights = season_highlights(&summaries);

    SeasonAnalysis {
        drivers: summaries,
        events: EventCounts {
            all: snapshot.events.len() as u32,
            completed: calendar.len() as u32,
        },
        summary: SeasonSummary { highlights },
    }
}
