//! Per-driver season summaries.

use crate::models::{Driver, DriverResult, DriverSeasonSummary, RecentResult};

use super::EventCalendar;

/// Aggregate one driver's results into a season summary.
///
/// `results` must already be restricted to this driver; rows without a
/// calendar entry (events not yet completed) contribute nothing. The
/// championship `position` is left at zero for the ranker to assign.
pub(crate) fn summarize_driver(
    driver: &Driver,
    results: &[DriverResult],
    calendar: &EventCalendar,
    recent_window: usize,
) -> DriverSeasonSummary {
    let mut rows: Vec<(&DriverResult, &super::CalendarEntry)> = results
        .iter()
        .filter_map(|r| calendar.get(&r.event_id).map(|entry| (r, entry)))
        .collect();

    let total_races = rows.len() as u32;
    let wins = rows.iter().filter(|(r, _)| r.is_win()).count() as u32;
    let podiums = rows.iter().filter(|(r, _)| r.is_podium()).count() as u32;
    let pole_positions = rows.iter().filter(|(r, _)| r.pole_position).count() as u32;
    let fastest_laps = rows.iter().filter(|(r, _)| r.fastest_lap).count() as u32;
    let dnfs = rows.iter().filter(|(r, _)| r.is_dnf()).count() as u32;
    let points_finishes = rows.iter().filter(|(r, _)| r.is_points_finish()).count() as u32;
    let points: f64 = rows.iter().map(|(r, _)| r.points).sum();

    // Mean over classified finishes only; a season of DNFs has no average
    let classified: Vec<u32> = rows.iter().filter_map(|(r, _)| r.position).collect();
    let average_finish = if classified.is_empty() {
        None
    } else {
        // Positions run up to u32::MAX, so the sum accumulates in f64
        let avg = classified.iter().map(|&p| p as f64).sum::<f64>() / classified.len() as f64;
        Some((avg * 100.0).round() / 100.0)
    };

    let consistency = if total_races > 0 {
        let rate = points_finishes as f64 / total_races as f64 * 100.0;
        (rate * 10.0).round() / 10.0
    } else {
        0.0
    };

    // Recent results: newest first, bounded for display
    rows.sort_by(|a, b| b.1.date.cmp(&a.1.date).then_with(|| b.1.round.cmp(&a.1.round)));
    let recent_results: Vec<RecentResult> = rows
        .iter()
        .take(recent_window)
        .map(|(r, entry)| RecentResult {
            event_id: entry.event_id.clone(),
            event_name: entry.label.clone(),
            event_date: entry.date,
            position: r.position,
            points: r.points,
        })
        .collect();

    DriverSeasonSummary {
        driver_id: driver.id.clone(),
        name: driver.name.clone(),
        team: driver.team.clone(),
        car_number: driver.car_number,
        position: 0,
        points,
        wins,
        podiums,
        pole_positions,
        fastest_laps,
        dnfs,
        points_finishes,
        total_races,
        average_finish,
        consistency,
        recent_results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventStatus, RaceEvent, ResultStatus, SeasonId};
    use chrono::NaiveDate;

    fn make_event(track: &str, date: &str) -> RaceEvent {
        RaceEvent::new(
            SeasonId::from("season-2026"),
            track.to_string(),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
        .with_status(EventStatus::Completed)
    }

    fn make_result(event: &RaceEvent, driver: &Driver, position: u32, points: f64) -> DriverResult {
        DriverResult::new(event.id.clone(), driver.id.clone())
            .with_position(position)
            .with_points(points)
            .with_status(ResultStatus::Finished)
    }

    #[test]
    fn test_summarize_worked_season() {
        let e1 = make_event("Silverstone", "2026-03-08");
        let e2 = make_event("Monza", "2026-03-22");
        let e3 = make_event("Spa", "2026-04-05");
        let driver = Driver::new("Alice Arden".to_string())
            .with_team("Arden Racing".to_string())
            .with_car_number(7);

        let results = vec![
            make_result(&e1, &driver, 1, 25.0).with_fastest_lap(),
            make_result(&e2, &driver, 3, 15.0),
            make_result(&e3, &driver, 1, 25.0),
        ];
        let calendar = EventCalendar::from_events(&[e1, e2, e3]);

        let summary = summarize_driver(&driver, &results, &calendar, 5);

        assert_eq!(summary.name, "Alice Arden");
        assert_eq!(summary.team.as_deref(), Some("Arden Racing"));
        assert_eq!(summary.car_number, Some(7));
        assert_eq!(summary.total_races, 3);
        assert_eq!(summary.wins, 2);
        assert_eq!(summary.podiums, 3);
        assert_eq!(summary.fastest_laps, 1);
        assert_eq!(summary.points, 65.0);
        assert_eq!(summary.points_finishes, 3);
        assert_eq!(summary.consistency, 100.0);
        // (1 + 3 + 1) / 3 = 1.666..., rounded to two decimals
        assert_eq!(summary.average_finish, Some(1.67));
        assert_eq!(summary.dnfs, 0);
    }

    #[test]
    fn test_recent_results_newest_first() {
        let e1 = make_event("Silverstone", "2026-03-08");
        let e2 = make_event("Monza", "2026-03-22");
        let e3 = make_event("Spa", "2026-04-05");
        let driver = Driver::new("Alice Arden".to_string());

        let results = vec![
            make_result(&e1, &driver, 4, 12.0),
            make_result(&e3, &driver, 2, 18.0),
            make_result(&e2, &driver, 6, 8.0),
        ];
        let calendar = EventCalendar::from_events(&[e1, e2, e3]);

        let summary = summarize_driver(&driver, &results, &calendar, 2);

        assert_eq!(summary.recent_results.len(), 2);
        assert_eq!(summary.recent_results[0].event_name, "Spa");
        assert_eq!(summary.recent_results[0].position, Some(2));
        assert_eq!(summary.recent_results[1].event_name, "Monza");
        assert_eq!(summary.total_races, 3);
    }

    #[test]
    fn test_blank_row_counts_entry_only() {
        let e1 = make_event("Silverstone", "2026-03-08");
        let driver = Driver::new("Alice Arden".to_string());

        // A row with no position, status or points still marks participation
        let results = vec![DriverResult::new(e1.id.clone(), driver.id.clone())];
        let calendar = EventCalendar::from_events(&[e1]);

        let summary = summarize_driver(&driver, &results, &calendar, 5);

        assert_eq!(summary.total_races, 1);
        assert_eq!(summary.dnfs, 0);
        assert_eq!(summary.points_finishes, 0);
        assert_eq!(summary.average_finish, None);
        assert_eq!(summary.consistency, 0.0);
        assert_eq!(summary.recent_results[0].position, None);
    }

    #[test]
    fn test_dnf_needs_explicit_status() {
        let e1 = make_event("Silverstone", "2026-03-08");
        let e2 = make_event("Monza", "2026-03-22");
        let driver = Driver::new("Alice Arden".to_string());

        let results = vec![
            DriverResult::new(e1.id.clone(), driver.id.clone()).with_status(ResultStatus::Dnf),
            // Classified P5 with no status: a finish, not a DNF
            DriverResult::new(e2.id.clone(), driver.id.clone())
                .with_position(5)
                .with_points(10.0),
        ];
        let calendar = EventCalendar::from_events(&[e1, e2]);

        let summary = summarize_driver(&driver, &results, &calendar, 5);

        assert_eq!(summary.total_races, 2);
        assert_eq!(summary.dnfs, 1);
        assert_eq!(summary.points_finishes, 1);
        assert_eq!(summary.average_finish, Some(5.0));
        // One scoring result in two starts
        assert_eq!(summary.consistency, 50.0);
    }

    #[test]
    fn test_rows_off_calendar_are_ignored() {
        let done = make_event("Silverstone", "2026-03-08");
        let pending = RaceEvent::new(
            SeasonId::from("season-2026"),
            "Monza".to_string(),
            NaiveDate::from_ymd_opt(2026, 3, 22).unwrap(),
        );
        let driver = Driver::new("Alice Arden".to_string());

        let results = vec![
            make_result(&done, &driver, 1, 25.0),
            make_result(&pending, &driver, 1, 25.0),
        ];
        let calendar = EventCalendar::from_events(&[done, pending]);

        let summary = summarize_driver(&driver, &results, &calendar, 5);

        assert_eq!(summary.total_races, 1);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.points, 25.0);
    }

    #[test]
    fn test_empty_results() {
        let driver = Driver::new("Alice Arden".to_string());
        let calendar = EventCalendar::from_events(&[]);

        let summary = summarize_driver(&driver, &[], &calendar, 5);

        assert_eq!(summary.total_races, 0);
        assert_eq!(summary.points, 0.0);
        assert_eq!(summary.wins, 0);
        assert_eq!(summary.average_finish, None);
        assert_eq!(summary.consistency, 0.0);
        assert!(summary.recent_results.is_empty());
    }

    #[test]
    fn test_pole_and_points_tallies() {
        let e1 = make_event("Silverstone", "2026-03-08");
        let e2 = make_event("Monza", "2026-03-22");
        let driver = Driver::new("Alice Arden".to_string());

        let results = vec![
            make_result(&e1, &driver, 1, 25.0).with_pole_position(),
            make_result(&e2, &driver, 11, 0.0),
        ];
        let calendar = EventCalendar::from_events(&[e1, e2]);

        let summary = summarize_driver(&driver, &results, &calendar, 5);

        assert_eq!(summary.pole_positions, 1);
        assert_eq!(summary.points_finishes, 1);
        assert_eq!(summary.podiums, 1);
        assert_eq!(summary.average_finish, Some(6.0));
        assert_eq!(summary.consistency, 50.0);
    }

    #[test]
    fn test_average_finish_with_extreme_positions() {
        let e1 = make_event("Silverstone", "2026-03-08");
        let e2 = make_event("Monza", "2026-03-22");
        let driver = Driver::new("Alice Arden".to_string());

        // A timestamp leaked into the position column still parses as a
        // position, so the mean has to carry the full u32 range
        let results = vec![
            make_result(&e1, &driver, u32::MAX, 0.0),
            make_result(&e2, &driver, 2, 18.0),
        ];
        let calendar = EventCalendar::from_events(&[e1, e2]);

        let summary = summarize_driver(&driver, &results, &calendar, 5);

        assert_eq!(summary.average_finish, Some(2_147_483_648.5));
        assert_eq!(summary.total_races, 2);
    }
}
