//! Per-driver form trends across the season.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DriverId, DriverResult, EventId};
use crate::normalize::normalize_row;
use crate::snapshot::SeasonSnapshot;

use super::EventCalendar;

/// One chart point: a completed event and the driver's positions there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub event_id: EventId,

    /// Chart label (short name, track, or a round fallback)
    pub label: String,

    /// Race date
    pub date: NaiveDate,

    /// Finishing position, None when unclassified or absent
    pub race_position: Option<u32>,

    /// Grid position, None when unknown
    pub qualifying_position: Option<u32>,
}

/// A driver's positions across the season, chart-ready.
///
/// Carries one point per completed event in chronological order, with
/// nulls for events the driver skipped, so two series built from the same
/// snapshot align index by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSeries {
    pub driver_id: DriverId,
    pub driver_name: String,
    pub data_points: Vec<TrendPoint>,

    /// Mean race position over events with one (two decimals)
    pub average_race_position: Option<f64>,

    /// Mean grid position over events with one (two decimals)
    pub average_qualifying_position: Option<f64>,
}

/// Two index-aligned series for head-to-head charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendComparison {
    pub baseline: TrendSeries,
    pub comparison: TrendSeries,
}

/// Build one driver's trend series.
///
/// Returns None when the driver is not on the snapshot's roster.
pub fn driver_trend(snapshot: &SeasonSnapshot, driver_id: &DriverId) -> Option<TrendSeries> {
    let calendar = EventCalendar::from_events(&snapshot.events);
    trend_on_calendar(snapshot, &calendar, driver_id)
}

/// Build two aligned series for a head-to-head view.
///
/// Returns None unless both drivers are on the roster.
pub fn trend_comparison(
    snapshot: &SeasonSnapshot,
    baseline_id: &DriverId,
    comparison_id: &DriverId,
) -> Option<TrendComparison> {
    let calendar = EventCalendar::from_events(&snapshot.events);
    Some(TrendComparison {
        baseline: trend_on_calendar(snapshot, &calendar, baseline_id)?,
        comparison: trend_on_calendar(snapshot, &calendar, comparison_id)?,
    })
}

fn trend_on_calendar(
    snapshot: &SeasonSnapshot,
    calendar: &EventCalendar,
    driver_id: &DriverId,
) -> Option<TrendSeries> {
    let driver = snapshot.drivers.iter().find(|d| d.id == *driver_id)?;

    // First row per completed event for this driver
    let mut by_event: HashMap<&EventId, DriverResult> = HashMap::new();
    for raw in &snapshot.results {
        if raw.driver_id != *driver_id || !calendar.contains(&raw.event_id) {
            continue;
        }
        by_event
            .entry(&raw.event_id)
            .or_insert_with(|| normalize_row(raw));
    }

    let data_points: Vec<TrendPoint> = calendar
        .entries()
        .iter()
        .map(|entry| {
            let result = by_event.get(&entry.event_id);
            TrendPoint {
                event_id: entry.event_id.clone(),
                label: entry.label.clone(),
                date: entry.date,
                race_position: result.and_then(|r| r.position),
                qualifying_position: result.and_then(|r| r.grid_position),
            }
        })
        .collect();

    let average_race_position = average_position(data_points.iter().map(|p| p.race_position));
    let average_qualifying_position =
        average_position(data_points.iter().map(|p| p.qualifying_position));

    Some(TrendSeries {
        driver_id: driver.id.clone(),
        driver_name: driver.name.clone(),
        data_points,
        average_race_position,
        average_qualifying_position,
    })
}

fn average_position(values: impl Iterator<Item = Option<u32>>) -> Option<f64> {
    let known: Vec<u32> = values.flatten().collect();
    if known.is_empty() {
        None
    } else {
        // Positions run up to u32::MAX, so the sum accumulates in f64
        let avg = known.iter().map(|&p| p as f64).sum::<f64>() / known.len() as f64;
        Some((avg * 100.0).round() / 100.0)
    }
}
