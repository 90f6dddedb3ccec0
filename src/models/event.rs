//! Race event model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EntityId, EventId, SeasonId};

/// Lifecycle state of a race event.
///
/// Only completed events contribute results to the season analysis;
/// scheduled and cancelled events count toward the schedule tally only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl EventStatus {
    /// Returns true if results for this event are final and countable.
    pub fn is_completed(&self) -> bool {
        matches!(self, EventStatus::Completed)
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Scheduled => write!(f, "scheduled"),
            EventStatus::Completed => write!(f, "completed"),
            EventStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// One scheduled session slot in a season's calendar.
///
/// Events are created by season administration and are read-only here;
/// the engine never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceEvent {
    /// Unique identifier (derived from season + track + date)
    pub id: EventId,

    /// Season this event belongs to
    pub season_id: SeasonId,

    /// Track display name (e.g., "Autodromo Nazionale Monza")
    pub track: String,

    /// Short display name (e.g., "Monza GP"), if the league set one
    pub short_name: Option<String>,

    /// Scheduled race date
    pub date: NaiveDate,

    /// Lifecycle state
    pub status: EventStatus,

    /// Explicit 1-based round number within the season.
    /// When absent, the position in the season's event array substitutes.
    pub ordinal: Option<u32>,
}

impl RaceEvent {
    /// Create a new RaceEvent with auto-generated ID.
    pub fn new(season_id: SeasonId, track: String, date: NaiveDate) -> Self {
        let id = EntityId::generate(&[season_id.as_str(), &track, &date.to_string()]);

        Self {
            id,
            season_id,
            track,
            short_name: None,
            date,
            status: EventStatus::Scheduled,
            ordinal: None,
        }
    }

    /// Builder method to set the short display name.
    pub fn with_short_name(mut self, short_name: String) -> Self {
        self.short_name = Some(short_name);
        self
    }

    /// Builder method to set the lifecycle state.
    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder method to set the explicit round number.
    pub fn with_ordinal(mut self, ordinal: u32) -> Self {
        self.ordinal = Some(ordinal);
        self
    }

    /// The 1-based round number, falling back to array position.
    ///
    /// `position` is the event's 0-based index in the season's event array.
    pub fn round_number(&self, position: usize) -> u32 {
        self.ordinal.unwrap_or(position as u32 + 1)
    }

    /// Chart label for this event: short name, else track name,
    /// else `Race {n}` from the 1-based round number.
    pub fn display_name(&self, position: usize) -> String {
        if let Some(ref short) = self.short_name {
            if !short.trim().is_empty() {
                return short.clone();
            }
        }
        if !self.track.trim().is_empty() {
            return self.track.clone();
        }
        format!("Race {}", self.round_number(position))
    }
}
