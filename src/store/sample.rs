//! Demonstration data for a fresh store

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{Budget, Category, Money, Transaction};

const SAMPLE_TRANSACTIONS: [(i64, Category, &str, u32); 8] = [
    (4599, Category::Food, "Grocery shopping", 15),
    (3250, Category::Transportation, "Gas", 14),
    (120000, Category::Housing, "Rent", 1),
    (1599, Category::Entertainment, "Movie ticket", 10),
    (8999, Category::Health, "Pharmacy", 8),
    (12050, Category::Shopping, "New clothes", 5),
    (35000, Category::Education, "Online course", 2),
    (2599, Category::Other, "Miscellaneous", 4),
];

const SAMPLE_BUDGET: [(Category, u32); 8] = [
    (Category::Food, 50000),
    (Category::Transportation, 20000),
    (Category::Housing, 150000),
    (Category::Entertainment, 10000),
    (Category::Health, 15000),
    (Category::Shopping, 20000),
    (Category::Education, 40000),
    (Category::Other, 10000),
];

/// Sample expenses, all dated July 2023 at midnight
pub(super) fn transactions() -> Vec<Transaction> {
    SAMPLE_TRANSACTIONS
        .iter()
        .map(|&(cents, category, description, day)| {
            Transaction::new(Money::from_cents(cents), category, description, july_2023(day))
        })
        .collect()
}

pub(super) fn budget() -> Budget {
    Budget::from_target_cents(SAMPLE_BUDGET)
}

fn july_2023(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 7, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}
