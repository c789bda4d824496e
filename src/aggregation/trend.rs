//! Spending trend series derived from transaction history
//!
//! Each window has its own bucket granularity: days for a week, 7-day spans
//! for a month, calendar months for a year. The first bucket starts on the
//! day of the window's cutoff, so the buckets together hold exactly the
//! transactions `filter_by_window` selects. Transactions dated after the
//! reference day fall in the last bucket.

use chrono::{Duration, Months, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::window::filter_by_window;
use crate::models::period::start_of_month;
use crate::models::{Money, TimeWindow, Transaction};

/// One bar of a trend chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// Axis label ("Mon 17", "Week 2", "Jan 23")
    pub label: String,
    /// First day covered by the bucket
    pub start: NaiveDate,
    /// Amount spent in the bucket
    pub amount: Money,
}

/// Bucketed spending for the window ending at `now`
pub fn spending_trend(
    transactions: &[Transaction],
    window: TimeWindow,
    now: NaiveDateTime,
) -> Vec<TrendPoint> {
    let first_day = window.cutoff(now).date();
    let today = now.date();
    let mut points = match window {
        TimeWindow::Week => daily_buckets(first_day, today),
        TimeWindow::Month => weekly_buckets(first_day, today),
        TimeWindow::Year => monthly_buckets(first_day, today),
    };

    for txn in filter_by_window(transactions, window, now) {
        let day = txn.date.date();
        let index = points.partition_point(|p| p.start <= day);
        if let Some(point) = index.checked_sub(1).and_then(|i| points.get_mut(i)) {
            point.amount += txn.amount;
        }
    }
    points
}

fn bucket(label: String, start: NaiveDate) -> TrendPoint {
    TrendPoint {
        label,
        start,
        amount: Money::zero(),
    }
}

fn daily_buckets(first_day: NaiveDate, today: NaiveDate) -> Vec<TrendPoint> {
    let days = (today - first_day).num_days();
    (0..=days)
        .map(|offset| {
            let day = first_day + Duration::days(offset);
            bucket(day.format("%a %-d").to_string(), day)
        })
        .collect()
}

fn weekly_buckets(first_day: NaiveDate, today: NaiveDate) -> Vec<TrendPoint> {
    let span_days = (today - first_day).num_days() + 1;
    let bucket_count = (span_days + 6) / 7;
    (0..bucket_count)
        .map(|i| bucket(format!("Week {}", i + 1), first_day + Duration::days(i * 7)))
        .collect()
}

fn monthly_buckets(first_day: NaiveDate, today: NaiveDate) -> Vec<TrendPoint> {
    let mut points = vec![bucket(first_day.format("%b %y").to_string(), first_day)];
    let mut month = start_of_month(first_day);
    while let Some(next) = month.checked_add_months(Months::new(1)) {
        if next > today {
            break;
        }
        points.push(bucket(next.format("%b %y").to_string(), next));
        month = next;
    }
    points
}

/// Percent change of spending in the window ending at `now` compared with
/// the window of the same kind immediately before it
///
/// Returns `None` when nothing was spent in the previous window.
pub fn trend_change(
    transactions: &[Transaction],
    window: TimeWindow,
    now: NaiveDateTime,
) -> Option<f64> {
    let cutoff = window.cutoff(now);
    let previous_cutoff = window.cutoff(cutoff);

    let mut current = Money::zero();
    let mut previous = Money::zero();
    for txn in transactions {
        if txn.date >= cutoff {
            current += txn.amount;
        } else if txn.date >= previous_cutoff {
            previous += txn.amount;
        }
    }

    if previous.is_zero() {
        return None;
    }
    let delta = (current - previous).cents() as f64;
    Some(delta / previous.cents() as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::total_amount;
    use crate::models::Category;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn txn(cents: i64, date: NaiveDateTime) -> Transaction {
        Transaction::new(Money::from_cents(cents), Category::Food, "trend", date)
    }

    // Wednesday, July 19 2023
    fn now() -> NaiveDateTime {
        at(2023, 7, 19, 15)
    }

    fn trend_total(points: &[TrendPoint]) -> Money {
        points.iter().map(|p| p.amount).sum()
    }

    #[test]
    fn test_daily_trend_starts_on_cutoff_day() {
        // Week window: July 12 15:00 .. July 19 15:00
        let transactions = vec![
            txn(1000, at(2023, 7, 19, 9)),
            txn(500, at(2023, 7, 19, 18)),
            txn(250, at(2023, 7, 13, 9)),
            txn(700, at(2023, 7, 12, 18)),
            txn(9999, at(2023, 7, 12, 9)),
        ];
        let points = spending_trend(&transactions, TimeWindow::Week, now());
        assert_eq!(points.len(), 8);

        let labels: Vec<_> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Wed 12", "Thu 13", "Fri 14", "Sat 15", "Sun 16", "Mon 17", "Tue 18", "Wed 19"]
        );

        assert_eq!(points[0].start, NaiveDate::from_ymd_opt(2023, 7, 12).unwrap());
        assert_eq!(points[0].amount.cents(), 700);
        assert_eq!(points[1].amount.cents(), 250);
        assert_eq!(points[7].amount.cents(), 1500);
        assert_eq!(trend_total(&points).cents(), 2450);
    }

    #[test]
    fn test_weekly_trend_buckets_from_cutoff() {
        // Month window: June 19 15:00 .. July 19, 31 calendar days -> 5 buckets
        let transactions = vec![
            txn(100, at(2023, 6, 19, 16)),
            txn(200, at(2023, 6, 25, 12)),
            txn(300, at(2023, 6, 26, 12)),
            txn(400, at(2023, 7, 19, 12)),
            txn(9999, at(2023, 6, 19, 14)),
        ];
        let points = spending_trend(&transactions, TimeWindow::Month, now());
        let labels: Vec<_> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Week 1", "Week 2", "Week 3", "Week 4", "Week 5"]);
        assert_eq!(points[0].amount.cents(), 300);
        assert_eq!(points[1].amount.cents(), 300);
        assert_eq!(points[4].amount.cents(), 400);
    }

    #[test]
    fn test_monthly_trend_starts_on_cutoff_day() {
        // Year window: July 19 2022 15:00 .. July 19 2023
        let transactions = vec![
            txn(1000, at(2023, 7, 1, 9)),
            txn(2000, at(2022, 8, 31, 9)),
            txn(700, at(2022, 7, 31, 9)),
            txn(9999, at(2022, 7, 18, 9)),
            txn(3000, at(2023, 1, 15, 9)),
        ];
        let points = spending_trend(&transactions, TimeWindow::Year, now());
        assert_eq!(points.len(), 13);
        assert_eq!(points[0].label, "Jul 22");
        assert_eq!(points[0].start, NaiveDate::from_ymd_opt(2022, 7, 19).unwrap());
        assert_eq!(points[1].start, NaiveDate::from_ymd_opt(2022, 8, 1).unwrap());
        assert_eq!(points[12].label, "Jul 23");
        assert_eq!(points[0].amount.cents(), 700);
        assert_eq!(points[1].amount.cents(), 2000);
        assert_eq!(points[6].amount.cents(), 3000);
        assert_eq!(points[12].amount.cents(), 1000);
    }

    #[test]
    fn test_monthly_trend_cutoff_on_first_of_month() {
        let points = spending_trend(&[], TimeWindow::Year, at(2023, 3, 1, 0));
        assert_eq!(points.len(), 13);
        assert_eq!(points[0].start, NaiveDate::from_ymd_opt(2022, 3, 1).unwrap());
        assert_eq!(points[1].start, NaiveDate::from_ymd_opt(2022, 4, 1).unwrap());
    }

    #[test]
    fn test_buckets_add_up_to_window_total() {
        let transactions = vec![
            txn(10000, at(2022, 7, 25, 9)),
            txn(1200, at(2023, 7, 12, 18)),
            txn(3400, at(2023, 6, 20, 9)),
            txn(560, at(2023, 7, 19, 9)),
            txn(780, at(2023, 7, 21, 9)),
            txn(9999, at(2021, 1, 1, 9)),
        ];
        for window in [TimeWindow::Week, TimeWindow::Month, TimeWindow::Year] {
            let points = spending_trend(&transactions, window, now());
            let expected = total_amount(filter_by_window(&transactions, window, now()));
            assert_eq!(trend_total(&points), expected, "window {}", window);
        }
    }

    #[test]
    fn test_later_dated_transactions_fall_in_last_bucket() {
        let transactions = vec![txn(780, at(2023, 7, 21, 9))];
        let points = spending_trend(&transactions, TimeWindow::Week, now());
        assert_eq!(points.last().unwrap().amount.cents(), 780);
    }

    #[test]
    fn test_empty_history_yields_zero_buckets() {
        let points = spending_trend(&[], TimeWindow::Year, now());
        assert!(points.iter().all(|p| p.amount.is_zero()));
    }

    #[test]
    fn test_trend_change_against_previous_window() {
        let transactions = vec![
            txn(15000, at(2023, 7, 15, 9)),
            txn(10000, at(2023, 7, 8, 9)),
            txn(5000, at(2023, 6, 30, 9)),
        ];
        // week: current Jul 12..19 = 150, previous Jul 5..12 = 100
        let change = trend_change(&transactions, TimeWindow::Week, now()).unwrap();
        assert!((change - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_trend_change_without_previous_spending() {
        let transactions = vec![txn(15000, at(2023, 7, 15, 9))];
        assert_eq!(trend_change(&transactions, TimeWindow::Week, now()), None);
    }

    #[test]
    fn test_trend_change_can_be_negative() {
        let transactions = vec![
            txn(5000, at(2023, 7, 15, 9)),
            txn(10000, at(2023, 7, 8, 9)),
        ];
        let change = trend_change(&transactions, TimeWindow::Week, now()).unwrap();
        assert!((change + 50.0).abs() < 1e-9);
    }
}
