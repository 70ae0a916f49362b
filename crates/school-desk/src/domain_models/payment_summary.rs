//! Payment totals for the fee and salary dashboards
//!
//! Amounts arrive as JSON numbers but are summed in minor units (cents), so
//! totals do not depend on the order records are folded in.

use school_api::{Employee, FeeDetail, PaymentStatus};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// An amount of money in minor units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Convert a wire amount, rounding to the nearest minor unit
    pub fn from_major(amount: f64) -> Self {
        Money((amount * 100.0).round() as i64)
    }

    pub fn minor(self) -> i64 {
        self.0
    }

    /// Half of the amount, rounded down to a whole minor unit
    pub fn half(self) -> Self {
        Money(self.0 / 2)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Totals by payment status
///
/// `paid + partial + unpaid == total` for every summary built here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentSummary {
    pub total: Money,
    pub paid: Money,
    pub partial: Money,
    pub unpaid: Money,
}

impl PaymentSummary {
    /// Account for one amount with its status
    ///
    /// A partial payment counts `paid_amount`, or half the amount when the
    /// backend did not record what was paid.
    pub fn record(&mut self, amount: f64, status: PaymentStatus, paid_amount: Option<f64>) {
        let amount = Money::from_major(amount);
        self.total += amount;
        match status {
            PaymentStatus::Paid => self.paid += amount,
            PaymentStatus::Partial => {
                let contribution = match paid_amount.map(Money::from_major) {
                    Some(paid) if paid != Money::ZERO => paid,
                    _ => amount.half(),
                };
                self.partial += contribution;
                self.unpaid += amount - contribution;
            }
            PaymentStatus::Unpaid => self.unpaid += amount,
        }
    }
}

impl Add for PaymentSummary {
    type Output = PaymentSummary;

    fn add(self, other: PaymentSummary) -> PaymentSummary {
        PaymentSummary {
            total: self.total + other.total,
            paid: self.paid + other.paid,
            partial: self.partial + other.partial,
            unpaid: self.unpaid + other.unpaid,
        }
    }
}

impl AddAssign for PaymentSummary {
    fn add_assign(&mut self, other: PaymentSummary) {
        *self = *self + other;
    }
}

pub fn summarize_fees(details: &[FeeDetail]) -> PaymentSummary {
    details
        .iter()
        .fold(PaymentSummary::default(), |mut summary, detail| {
            summary.record(detail.amount, detail.status, detail.paid_amount);
            summary
        })
}

pub fn summarize_salaries(employees: &[Employee]) -> PaymentSummary {
    employees
        .iter()
        .fold(PaymentSummary::default(), |mut summary, employee| {
            summary.record(
                employee.base_salary,
                employee.salary_status,
                employee.paid_amount,
            );
            summary
        })
}
