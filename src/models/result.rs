//! Per-driver race result model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DriverId, EventId};

/// Classification code attached to a result by the importer.
///
/// The wire format is an integer code; [`ResultStatus::from_code`] maps it,
/// with unknown codes degrading to "no status" during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    /// Classified finisher
    Finished,
    /// Did not finish
    Dnf,
    /// Disqualified after the session
    Disqualified,
    /// Retired from the session
    Retired,
    /// Ran but was not classified (e.g., insufficient distance)
    NotClassified,
}

impl ResultStatus {
    /// Map an integer wire code to a status.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ResultStatus::Finished),
            1 => Some(ResultStatus::Dnf),
            2 => Some(ResultStatus::Disqualified),
            3 => Some(ResultStatus::Retired),
            4 => Some(ResultStatus::NotClassified),
            _ => None,
        }
    }

    /// The integer wire code for this status.
    pub fn code(&self) -> i64 {
        match self {
            ResultStatus::Finished => 0,
            ResultStatus::Dnf => 1,
            ResultStatus::Disqualified => 2,
            ResultStatus::Retired => 3,
            ResultStatus::NotClassified => 4,
        }
    }

    /// Returns true if this status counts as a classified finish.
    pub fn is_finish(&self) -> bool {
        matches!(self, ResultStatus::Finished)
    }
}

impl std::fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultStatus::Finished => write!(f, "finished"),
            ResultStatus::Dnf => write!(f, "dnf"),
            ResultStatus::Disqualified => write!(f, "disqualified"),
            ResultStatus::Retired => write!(f, "retired"),
            ResultStatus::NotClassified => write!(f, "not classified"),
        }
    }
}

/// One driver's canonical outcome in one completed event.
///
/// Produced by the normalizer from a raw importer row; the engine only reads
/// these. At most one result exists per (event, driver) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverResult {
    /// Event this result belongs to
    pub event_id: EventId,

    /// Driver this result belongs to
    pub driver_id: DriverId,

    /// Finishing position (1 = winner); None means unclassified/DNF
    pub position: Option<u32>,

    /// Grid / qualifying position
    pub grid_position: Option<u32>,

    /// Championship points awarded (never negative)
    pub points: f64,

    /// Whether this driver set the fastest race lap
    pub fastest_lap: bool,

    /// Whether this driver started from pole
    pub pole_position: bool,

    /// Classification code, if the importer recorded one
    pub status: Option<ResultStatus>,

    /// Import timestamp, carried for display only
    pub recorded_at: Option<DateTime<Utc>>,
}

impl DriverResult {
    /// Create an empty result for a (event, driver) pair.
    pub fn new(event_id: EventId, driver_id: DriverId) -> Self {
        Self {
            event_id,
            driver_id,
            position: None,
            grid_position: None,
            points: 0.0,
            fastest_lap: false,
            pole_position: false,
            status: None,
            recorded_at: None,
        }
    }

    /// Builder method to set the finishing position.
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// Builder method to set the grid position.
    pub fn with_grid_position(mut self, grid: u32) -> Self {
        self.grid_position = Some(grid);
        self
    }

    /// Builder method to set the points awarded.
    pub fn with_points(mut self, points: f64) -> Self {
        self.points = points;
        self
    }

    /// Builder method to mark the fastest lap.
    pub fn with_fastest_lap(mut self) -> Self {
        self.fastest_lap = true;
        self
    }

    /// Builder method to mark pole position.
    pub fn with_pole_position(mut self) -> Self {
        self.pole_position = true;
        self
    }

    /// Builder method to set the classification status.
    pub fn with_status(mut self, status: ResultStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Check if this is a race win (P1).
    pub fn is_win(&self) -> bool {
        self.position == Some(1)
    }

    /// Check if this is a podium finish (P1-P3).
    pub fn is_podium(&self) -> bool {
        matches!(self.position, Some(p) if p <= 3)
    }

    /// Check if this result counts as a DNF.
    ///
    /// Only an explicit non-finish status counts. A missing status is never
    /// a DNF: with a position it means a finish, without one it means the
    /// outcome was not recorded.
    pub fn is_dnf(&self) -> bool {
        matches!(self.status, Some(s) if !s.is_finish())
    }

    /// Check if this result scored championship points.
    pub fn is_points_finish(&self) -> bool {
        self.points > 0.0
    }
}
