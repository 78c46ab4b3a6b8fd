//! Sample dataset
//!
//! The dashboard boots with a month of demo data so every panel has something
//! to show. Loaded unless the session is started with `--empty`.

use chrono::NaiveDate;

use crate::models::{CategoryBudget, Expense, Money, MonthlyBudget, RecurringPayment};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}

/// The demo monthly budget: $2200 across six categories
pub fn budget() -> MonthlyBudget {
    MonthlyBudget::new(
        Money::from_cents(220_000),
        vec![
            CategoryBudget::new("Groceries", Money::from_cents(45_000)),
            CategoryBudget::new("Housing", Money::from_cents(95_000)),
            CategoryBudget::new("Transportation", Money::from_cents(25_000)),
            CategoryBudget::new("Entertainment", Money::from_cents(18_000)),
            CategoryBudget::new("Utilities", Money::from_cents(20_000)),
            CategoryBudget::new("Health", Money::from_cents(17_000)),
        ],
    )
}

/// Nine demo expenses totalling $1481.76
pub fn expenses() -> Vec<Expense> {
    vec![
        Expense::with_notes(
            date(2024, 4, 2),
            "Housing",
            "Urban Living",
            Money::from_cents(95_000),
            "April rent",
        ),
        Expense::with_notes(
            date(2024, 4, 4),
            "Groceries",
            "Whole Foods",
            Money::from_cents(8_642),
            "Weekly staples",
        ),
        Expense::with_notes(
            date(2024, 4, 6),
            "Transportation",
            "Metro Card",
            Money::from_cents(4_500),
            "Monthly pass top-up",
        ),
        Expense::with_notes(
            date(2024, 4, 8),
            "Entertainment",
            "Criterion Stream",
            Money::from_cents(1_999),
            "Annual subscription",
        ),
        Expense::with_notes(
            date(2024, 4, 9),
            "Health",
            "ZenFit Studio",
            Money::from_cents(5_800),
            "Drop-in yoga",
        ),
        Expense::with_notes(
            date(2024, 4, 10),
            "Utilities",
            "City Power",
            Money::from_cents(11_237),
            "Electric",
        ),
        Expense::new(
            date(2024, 4, 11),
            "Groceries",
            "Trader Joe's",
            Money::from_cents(6_418),
        ),
        Expense::with_notes(
            date(2024, 4, 12),
            "Entertainment",
            "Local Cinema",
            Money::from_cents(2_750),
            "Weekend movie",
        ),
        Expense::with_notes(
            date(2024, 4, 13),
            "Transportation",
            "Lyft",
            Money::from_cents(1_830),
            "Airport ride",
        ),
    ]
}

/// Three demo recurring payments
pub fn recurring() -> Vec<RecurringPayment> {
    vec![
        RecurringPayment::new(
            "Internet",
            Money::from_cents(7_900),
            date(2024, 4, 20),
            "Utilities",
        ),
        RecurringPayment::new(
            "Gym Membership",
            Money::from_cents(5_800),
            date(2024, 4, 25),
            "Health",
        ),
        RecurringPayment::new(
            "Spotify Family",
            Money::from_cents(1_799),
            date(2024, 4, 22),
            "Entertainment",
        ),
    ]
}
