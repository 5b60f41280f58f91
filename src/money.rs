//! Integer cent amounts and currency display.
//!
//! The whole pricing path works in integer cents to avoid rounding drift
//! across additions. `rust_decimal` is only involved at the display edge,
//! where amounts are rescaled to two decimal places for rendering.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A monetary amount in whole cents.
///
/// # Examples
///
/// ```
/// use theater_billing::Cents;
///
/// let amount = Cents::new(40000) + Cents::new(25000);
/// assert_eq!(amount, Cents::new(65000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Cents(u64);

impl Cents {
    /// Zero value.
    pub const ZERO: Self = Cents(0);

    /// Creates an amount from a whole number of cents.
    pub fn new(cents: u64) -> Self {
        Cents(cents)
    }

    /// Returns the raw cent count.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Cents(self.0 + rhs.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Cents::ZERO, Add::add)
    }
}

/// Formats a cent amount as Brazilian currency: `"R$ 1.234,56"`.
///
/// Thousands are grouped with `.`, the decimal separator is `,`, and two
/// decimal places are always shown.
///
/// # Examples
///
/// ```
/// use theater_billing::money::format_brl;
/// use theater_billing::Cents;
///
/// assert_eq!(format_brl(Cents::new(65000)), "R$ 650,00");
/// assert_eq!(format_brl(Cents::new(159000)), "R$ 1.590,00");
/// ```
pub fn format_brl(amount: Cents) -> String {
    let mut reais = Decimal::from(amount.value()) / Decimal::from(100u32);
    reais.rescale(2);

    let text = reais.to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("R$ {grouped},{fraction}")
}
