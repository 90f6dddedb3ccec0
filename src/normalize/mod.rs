//! Raw result row normalization.
//!
//! Result feeds are semi-trusted: depending on the importer path, a row's
//! numeric fields arrive as numbers, numeric strings, or nothing at all.
//! Normalization never fails: every malformed field degrades to the
//! unknown representation (None / 0 / false) so a single bad row cannot
//! abort a season analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{DriverId, DriverResult, EventId, ResultStatus};

/// One raw result row as emitted by the result importer.
///
/// Only the IDs are typed; every outcome field is loose JSON and goes
/// through [`normalize_row`] before the engine touches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawResultRow {
    /// Event this row belongs to
    pub event_id: EventId,

    /// Driver this row belongs to
    pub driver_id: DriverId,

    /// Finishing position: number, numeric string, or absent
    #[serde(default)]
    pub position: Value,

    /// Grid / qualifying position, same shapes as `position`
    #[serde(default)]
    pub grid_position: Value,

    /// Points awarded
    #[serde(default)]
    pub points: Value,

    /// Fastest-lap flag, any truthy value
    #[serde(default)]
    pub fastest_lap: Value,

    /// Pole-position flag, any truthy value
    #[serde(default)]
    pub pole_position: Value,

    /// Integer classification code (see [`ResultStatus`])
    #[serde(default)]
    pub status: Value,

    /// Import timestamp as an RFC 3339 string
    #[serde(default)]
    pub recorded_at: Value,
}

impl RawResultRow {
    /// Create a row with all outcome fields absent.
    pub fn new(event_id: EventId, driver_id: DriverId) -> Self {
        Self {
            event_id,
            driver_id,
            position: Value::Null,
            grid_position: Value::Null,
            points: Value::Null,
            fastest_lap: Value::Null,
            pole_position: Value::Null,
            status: Value::Null,
            recorded_at: Value::Null,
        }
    }
}

/// Normalize one raw row into a canonical [`DriverResult`].
///
/// Infallible by design: malformed fields fall back to None / 0 / false
/// rather than surfacing an error.
pub fn normalize_row(raw: &RawResultRow) -> DriverResult {
    DriverResult {
        event_id: raw.event_id.clone(),
        driver_id: raw.driver_id.clone(),
        position: parse_position(&raw.position),
        grid_position: parse_position(&raw.grid_position),
        points: parse_points(&raw.points),
        fastest_lap: parse_flag(&raw.fastest_lap),
        pole_position: parse_flag(&raw.pole_position),
        status: parse_status(&raw.status),
        recorded_at: parse_timestamp(&raw.recorded_at),
    }
}

/// Interpret a JSON value as a finite number, accepting numeric strings.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Parse a position field: a positive integer, else None.
fn parse_position(value: &Value) -> Option<u32> {
    let v = numeric_value(value)?;
    if v >= 1.0 && v <= u32::MAX as f64 && v.fract() == 0.0 {
        Some(v as u32)
    } else {
        None
    }
}

/// Parse a points field: a non-negative number, else 0.
fn parse_points(value: &Value) -> f64 {
    match numeric_value(value) {
        Some(v) if v >= 0.0 => v,
        _ => 0.0,
    }
}

/// Coerce a flag field the way the result feed always has: by truthiness.
/// Non-empty strings count as set, zero and null do not.
fn parse_flag(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parse a status field: a known integer code, else None.
fn parse_status(value: &Value) -> Option<ResultStatus> {
    let v = numeric_value(value)?;
    if v.fract() != 0.0 {
        return None;
    }
    ResultStatus::from_code(v as i64)
}

/// Parse a pass-through timestamp field, RFC 3339 only.
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    }
}
