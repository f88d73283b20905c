use crate::error::ScheduleError;
use crate::models::appointment::Appointment;
use crate::models::gap::Gap;
use crate::models::operatory::Operatory;
use crate::models::utilization::UtilizationSummary;
use crate::scheduling::hours::ScheduleConfig;
use chrono::{NaiveDate, NaiveTime};

/**
Chair utilization over the lookahead window anchored at `anchor`.

Every appointment dated inside the window counts toward booked minutes,
whatever its operatory or status and even when it sits outside business
hours, so the percentage can exceed 100.
*/
pub fn utilization(
    config: &ScheduleConfig,
    anchor: NaiveDate,
    operatories: &[Operatory],
    appointments: &[Appointment],
) -> UtilizationSummary {
    let window_end = config.window_end(anchor);

    let available_minutes = u32::try_from(operatories.len())
        .unwrap_or(u32::MAX)
        .saturating_mul(config.span_minutes())
        .saturating_mul(config.lookahead_days());

    let booked_minutes = appointments
        .iter()
        .filter(|appt| appt.date >= anchor && appt.date <= window_end)
        .fold(0u32, |total, appt| total.saturating_add(appt.duration));

    let percentage = if available_minutes == 0 {
        0
    } else {
        (100.0 * f64::from(booked_minutes) / f64::from(available_minutes)).round() as u32
    };

    UtilizationSummary {
        percentage,
        available_minutes,
        booked_minutes,
    }
}

/**
Idle windows of at least the configured minimum, walked day by day, then
operatory by operatory, then chronologically. Only the first
`config.gap_limit()` are returned.

Overlapping or out-of-hours appointments are tolerated: the cursor never
moves backwards and gaps are clipped to business hours.
*/
pub fn find_gaps(
    config: &ScheduleConfig,
    anchor: NaiveDate,
    operatories: &[Operatory],
    appointments: &[Appointment],
) -> Result<Vec<Gap>, ScheduleError> {
    let window_end = config.window_end(anchor);

    if let Some(orphan) = appointments.iter().find(|appt| {
        appt.date >= anchor
            && appt.date <= window_end
            && !operatories.iter().any(|op| op.id == appt.operatory_id)
    }) {
        return Err(ScheduleError::UnknownOperatory(orphan.operatory_id));
    }

    let mut gaps = Vec::new();

    for day in config.window(anchor) {
        for operatory in operatories {
            let mut booked: Vec<&Appointment> = appointments
                .iter()
                .filter(|appt| appt.date == day && appt.operatory_id == operatory.id)
                .collect();
            booked.sort_by_key(|appt| appt.start_time);

            gaps.extend(day_gaps(config, day, operatory.id, &booked)?);

            if gaps.len() >= config.gap_limit() {
                gaps.truncate(config.gap_limit());
                return Ok(gaps);
            }
        }
    }

    Ok(gaps)
}

/// `booked` must be sorted by start time.
fn day_gaps(
    config: &ScheduleConfig,
    day: NaiveDate,
    operatory_id: u32,
    booked: &[&Appointment],
) -> Result<Vec<Gap>, ScheduleError> {
    let close = config.close_minute();
    let mut cursor = config.open_minute();
    let mut gaps = Vec::new();

    for appt in booked {
        let gap_end = appt.start_minute().min(close);
        if gap_end > cursor && gap_end - cursor >= config.min_gap_minutes() {
            gaps.push(gap(day, operatory_id, cursor, gap_end - cursor)?);
        }
        cursor = cursor.max(appt.end_minute());
    }

    if close > cursor && close - cursor >= config.min_gap_minutes() {
        gaps.push(gap(day, operatory_id, cursor, close - cursor)?);
    }

    Ok(gaps)
}

fn gap(day: NaiveDate, operatory_id: u32, start: u32, duration: u32) -> Result<Gap, ScheduleError> {
    let start_time = NaiveTime::from_num_seconds_from_midnight_opt(start * 60, 0)
        .ok_or(ScheduleError::TimeOutOfRange(start))?;

    Ok(Gap {
        date: day,
        start_time,
        duration,
        operatory_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::AppointmentStatus;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn ops(n: u32) -> Vec<Operatory> {
        (1..=n)
            .map(|id| Operatory {
                id,
                name: format!("Op {id}"),
                color: "#3b82f6".into(),
            })
            .collect()
    }

    fn appt(id: u32, operatory_id: u32, date: NaiveDate, start: NaiveTime, duration: u32) -> Appointment {
        Appointment {
            id,
            operatory_id,
            patient_id: 100 + id,
            provider_id: 1,
            date,
            start_time: start,
            duration,
            status: AppointmentStatus::Scheduled,
            procedure_code: None,
        }
    }

    fn single_day() -> ScheduleConfig {
        ScheduleConfig::new(8, 18, 20, 1, 5).unwrap()
    }

    #[test]
    fn no_appointments_means_zero_utilization() {
        let summary = utilization(&ScheduleConfig::default(), day(3), &ops(3), &[]);
        assert_eq!(summary.booked_minutes, 0);
        assert_eq!(summary.percentage, 0);
        assert_eq!(summary.available_minutes, 3 * 600 * 3);
    }

    #[test]
    fn one_hour_of_one_chair_is_ten_percent() {
        let appts = vec![appt(1, 1, day(3), at(9, 0), 60)];
        let summary = utilization(&single_day(), day(3), &ops(1), &appts);
        assert_eq!(
            summary,
            UtilizationSummary {
                percentage: 10,
                available_minutes: 600,
                booked_minutes: 60,
            }
        );
    }

    #[test]
    fn utilization_ignores_days_outside_window() {
        let appts = vec![
            appt(1, 1, day(2), at(9, 0), 60),
            appt(2, 1, day(3), at(9, 0), 30),
            appt(3, 1, day(5), at(9, 0), 30),
            appt(4, 1, day(6), at(9, 0), 600),
        ];
        let summary = utilization(&ScheduleConfig::default(), day(3), &ops(1), &appts);
        assert_eq!(summary.booked_minutes, 60);
    }

    #[test]
    fn utilization_counts_out_of_hours_minutes() {
        let appts = vec![appt(1, 1, day(3), at(19, 0), 60)];
        let summary = utilization(&single_day(), day(3), &ops(1), &appts);
        assert_eq!(summary.booked_minutes, 60);
        assert_eq!(summary.percentage, 10);
    }

    #[test]
    fn utilization_rounds_to_nearest() {
        // 5 / 600 = 0.83%
        let appts = vec![appt(1, 1, day(3), at(9, 0), 5)];
        assert_eq!(utilization(&single_day(), day(3), &ops(1), &appts).percentage, 1);
    }

    #[test]
    fn oversized_inputs_saturate() {
        let appts = vec![
            appt(1, 1, day(3), at(9, 0), u32::MAX),
            appt(2, 1, day(3), at(12, 0), 60),
        ];
        let summary = utilization(&single_day(), day(3), &ops(1), &appts);
        assert_eq!(summary.booked_minutes, u32::MAX);

        let appts = vec![appt(1, 1, day(3), at(9, 0), u32::MAX)];
        let gaps = find_gaps(&single_day(), day(3), &ops(1), &appts).unwrap();
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].duration, 60);
    }

    #[test]
    fn window_at_end_of_calendar_is_cut_short() {
        let last = NaiveDate::MAX;
        assert_eq!(ScheduleConfig::default().window(last), vec![last]);
        assert!(find_gaps(&ScheduleConfig::default(), last, &ops(1), &[]).is_ok());
        assert_eq!(utilization(&ScheduleConfig::default(), last, &ops(1), &[]).booked_minutes, 0);
    }

    #[test]
    fn no_operatories_no_division_by_zero() {
        let summary = utilization(&single_day(), day(3), &[], &[]);
        assert_eq!(summary.available_minutes, 0);
        assert_eq!(summary.percentage, 0);
    }

    #[test]
    fn single_appointment_splits_the_day() {
        let appts = vec![appt(1, 1, day(3), at(9, 0), 60)];
        let gaps = find_gaps(&single_day(), day(3), &ops(1), &appts).unwrap();
        assert_eq!(
            gaps,
            vec![
                Gap {
                    date: day(3),
                    start_time: at(8, 0),
                    duration: 60,
                    operatory_id: 1,
                },
                Gap {
                    date: day(3),
                    start_time: at(10, 0),
                    duration: 480,
                    operatory_id: 1,
                },
            ]
        );
    }

    #[test]
    fn empty_day_is_one_long_gap() {
        let gaps = find_gaps(&single_day(), day(3), &ops(1), &[]).unwrap();
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].start_time, at(8, 0));
        assert_eq!(gaps[0].duration, 600);
    }

    #[test]
    fn threshold_is_inclusive() {
        // 20 minutes free before the first appointment, 19 between the two
        let appts = vec![
            appt(1, 1, day(3), at(8, 20), 60),
            appt(2, 1, day(3), at(9, 39), 501),
        ];
        let gaps = find_gaps(&single_day(), day(3), &ops(1), &appts).unwrap();
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].start_time, at(8, 0));
        assert_eq!(gaps[0].duration, 20);
    }

    #[test]
    fn unsorted_input_is_walked_chronologically() {
        let appts = vec![
            appt(1, 1, day(3), at(14, 0), 60),
            appt(2, 1, day(3), at(9, 0), 60),
        ];
        let gaps = find_gaps(&single_day(), day(3), &ops(1), &appts).unwrap();
        let starts: Vec<_> = gaps.iter().map(|g| (g.start_time, g.duration)).collect();
        assert_eq!(
            starts,
            vec![(at(8, 0), 60), (at(10, 0), 240), (at(15, 0), 180)]
        );
    }

    #[test]
    fn gaps_plus_bookings_fill_the_day() {
        let appts = vec![
            appt(1, 1, day(3), at(8, 30), 45),
            appt(2, 1, day(3), at(10, 0), 90),
            appt(3, 1, day(3), at(13, 0), 30),
            appt(4, 1, day(3), at(17, 0), 60),
        ];
        let config = ScheduleConfig::new(8, 18, 1, 1, 100).unwrap();
        let gaps = find_gaps(&config, day(3), &ops(1), &appts).unwrap();
        let idle: u32 = gaps.iter().map(|g| g.duration).sum();
        let booked: u32 = appts.iter().map(|a| a.duration).sum();
        assert_eq!(idle + booked, config.span_minutes());
    }

    #[test]
    fn overlap_never_yields_negative_gaps() {
        let appts = vec![
            appt(1, 1, day(3), at(9, 0), 120),
            appt(2, 1, day(3), at(10, 0), 30),
            appt(3, 1, day(3), at(11, 30), 30),
        ];
        let gaps = find_gaps(&single_day(), day(3), &ops(1), &appts).unwrap();
        let starts: Vec<_> = gaps.iter().map(|g| (g.start_time, g.duration)).collect();
        // the 10:00 booking sits inside 09:00-11:00 and must not rewind the cursor
        assert_eq!(
            starts,
            vec![(at(8, 0), 60), (at(11, 0), 30), (at(12, 0), 360)]
        );
    }

    #[test]
    fn gaps_are_clipped_to_business_hours() {
        let appts = vec![
            appt(1, 1, day(3), at(7, 0), 90),
            appt(2, 1, day(3), at(19, 0), 60),
        ];
        let gaps = find_gaps(&single_day(), day(3), &ops(1), &appts).unwrap();
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].start_time, at(8, 30));
        assert_eq!(gaps[0].duration, 570);
    }

    #[test]
    fn appointment_running_past_close_leaves_no_trailing_gap() {
        let appts = vec![appt(1, 1, day(3), at(17, 0), 120)];
        let gaps = find_gaps(&single_day(), day(3), &ops(1), &appts).unwrap();
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].duration, 540);
    }

    #[test]
    fn truncates_to_first_five_in_iteration_order() {
        // every operatory on every day is empty: 3 days x 3 chairs = 9 gaps
        let gaps = find_gaps(&ScheduleConfig::default(), day(3), &ops(3), &[]).unwrap();
        let order: Vec<_> = gaps.iter().map(|g| (g.date, g.operatory_id)).collect();
        assert_eq!(
            order,
            vec![
                (day(3), 1),
                (day(3), 2),
                (day(3), 3),
                (day(4), 1),
                (day(4), 2),
            ]
        );
    }

    #[test]
    fn fewer_than_limit_are_all_returned() {
        let gaps = find_gaps(&ScheduleConfig::default(), day(3), &ops(1), &[]).unwrap();
        assert_eq!(gaps.len(), 3);
    }

    #[test]
    fn repeated_calls_agree() {
        let appts = vec![
            appt(1, 2, day(4), at(9, 0), 60),
            appt(2, 1, day(3), at(12, 0), 30),
        ];
        let config = ScheduleConfig::default();
        let first = find_gaps(&config, day(3), &ops(2), &appts).unwrap();
        let second = find_gaps(&config, day(3), &ops(2), &appts).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_operatory_is_an_error() {
        let appts = vec![appt(1, 7, day(3), at(9, 0), 60)];
        let err = find_gaps(&single_day(), day(3), &ops(1), &appts).unwrap_err();
        assert_eq!(err, ScheduleError::UnknownOperatory(7));
    }

    #[test]
    fn unknown_operatory_outside_window_is_ignored() {
        let appts = vec![appt(1, 7, day(20), at(9, 0), 60)];
        assert!(find_gaps(&single_day(), day(3), &ops(1), &appts).is_ok());
    }

    #[test]
    fn close_at_midnight_is_supported() {
        let config = ScheduleConfig::new(22, 24, 20, 1, 5).unwrap();
        let gaps = find_gaps(&config, day(3), &ops(1), &[]).unwrap();
        assert_eq!(gaps[0].start_time, at(22, 0));
        assert_eq!(gaps[0].duration, 120);
    }
}
