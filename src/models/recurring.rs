//! Recurring payment model
//!
//! A recurring payment is a display-only record of an expected future charge.
//! It has no lifecycle: no due-date evaluation, no notifications, no state
//! transitions. The dashboard simply lists what is coming up.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecurringId;
use super::money::Money;

/// An expected future charge, rendered but never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringPayment {
    /// Unique identifier
    pub id: RecurringId,

    /// What the charge is for
    pub title: String,

    /// Expected amount
    pub amount: Money,

    /// Next date the charge is expected to land
    pub next_due: NaiveDate,

    /// Category the charge will fall under
    pub category: String,
}

impl RecurringPayment {
    /// Create a new recurring payment record
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        next_due: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: RecurringId::new(),
            title: title.into(),
            amount,
            next_due,
            category: category.into(),
        }
    }
}

impl fmt::Display for RecurringPayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} due {}",
            self.title,
            self.amount,
            self.next_due.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recurring_payment() {
        let payment = RecurringPayment::new(
            "Internet",
            Money::from_cents(7900),
            NaiveDate::from_ymd_opt(2024, 4, 20).unwrap(),
            "Utilities",
        );
        assert_eq!(payment.title, "Internet");
        assert_eq!(payment.category, "Utilities");
        assert_eq!(payment.to_string(), "Internet $79.00 due 2024-04-20");
    }
}
