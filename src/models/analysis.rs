//! Derived season analysis models.
//!
//! Everything here is recomputed from the snapshot on every analysis call;
//! nothing is persisted or cached by the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DriverId, EventId};

/// A compact recent-result row for driver cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentResult {
    /// Event the result came from
    pub event_id: EventId,

    /// Chart label for the event
    pub event_name: String,

    /// Race date
    pub event_date: NaiveDate,

    /// Finishing position, if classified
    pub position: Option<u32>,

    /// Points scored
    pub points: f64,
}

/// One driver's aggregated season statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverSeasonSummary {
    /// Driver identifier
    pub driver_id: DriverId,

    /// Display name
    pub name: String,

    /// Team or constructor name
    pub team: Option<String>,

    /// Car number
    pub car_number: Option<u32>,

    /// Championship position (1-based, assigned by the ranker)
    pub position: u32,

    /// Total championship points
    pub points: f64,

    /// Race wins (P1)
    pub wins: u32,

    /// Podium finishes (P1-P3)
    pub podiums: u32,

    /// Pole positions
    pub pole_positions: u32,

    /// Fastest race laps
    pub fastest_laps: u32,

    /// Results with an explicit non-finish status
    pub dnfs: u32,

    /// Results that scored points
    pub points_finishes: u32,

    /// Completed events this driver has a result for
    pub total_races: u32,

    /// Mean finishing position over classified finishes; None if there are none
    pub average_finish: Option<f64>,

    /// Points finishes as a percentage of races entered (one decimal)
    pub consistency: f64,

    /// Most recent results, newest first, bounded for display
    pub recent_results: Vec<RecentResult>,
}

/// The leading driver for one season-wide superlative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    /// Leading driver's ID
    pub driver_id: DriverId,

    /// Leading driver's display name
    pub driver_name: String,

    /// The leading value (count, percentage, or average position)
    pub value: f64,
}

/// Season-wide superlatives. A category with no qualifying driver is None.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonHighlights {
    pub most_wins: Option<Highlight>,
    pub most_podiums: Option<Highlight>,
    pub most_poles: Option<Highlight>,
    pub most_fastest_laps: Option<Highlight>,
    pub best_average_finish: Option<Highlight>,
    pub best_consistency: Option<Highlight>,
}

/// Schedule completeness tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCounts {
    /// All events on the calendar, whatever their status
    pub all: u32,

    /// Events with final results
    pub completed: u32,
}

/// Season-level derived summary block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub highlights: SeasonHighlights,
}

/// The full derived analysis for one season: everything the dashboard
/// views consume, ready for JSON serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonAnalysis {
    /// Driver summaries in championship order
    pub drivers: Vec<DriverSeasonSummary>,

    /// Schedule completeness
    pub events: EventCounts,

    /// Season-wide summary block
    pub summary: SeasonSummary,
}

impl SeasonAnalysis {
    /// Look up a driver's summary by ID.
    pub fn get_driver(&self, id: &DriverId) -> Option<&DriverSeasonSummary> {
        self.drivers.iter().find(|d| &d.driver_id == id)
    }

    /// The championship leader, if the season has any drivers.
    pub fn leader(&self) -> Option<&DriverSeasonSummary> {
        self.drivers.first()
    }
}
