//! Fixed-point money amounts, stored as whole pence.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A GBP amount in pence. All earnings arithmetic happens on integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    pub const fn from_pounds(pounds: i64) -> Self {
        Money(pounds * 100)
    }

    pub const fn pence(self) -> i64 {
        self.0
    }

    /// Multiply a per-unit rate by a unit count, saturating at the `i64`
    /// bounds.
    pub fn times(self, units: i64) -> Self {
        Money(self.0.saturating_mul(units))
    }

    /// Divide by a count, rounding half away from zero to the penny.
    /// A zero divisor yields zero.
    pub fn div_round(self, divisor: i64) -> Self {
        if divisor == 0 {
            return Money::ZERO;
        }
        let q = self.0 / divisor;
        let r = self.0 % divisor;
        if (r.abs() * 2) >= divisor.abs() {
            if (self.0 < 0) != (divisor < 0) {
                Money(q - 1)
            } else {
                Money(q + 1)
            }
        } else {
            Money(q)
        }
    }

    /// Plain two-decimal rendering with a dot separator, e.g. `1234.56`.
    pub fn to_fixed2(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Currency rendering: GBP symbol, `.` thousands, `,` decimals.
    pub fn format_currency(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!(
            "{}£\u{a0}{},{:02}",
            sign,
            group_thousands(abs / 100),
            abs % 100
        )
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_currency())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed2_pads_pence() {
        assert_eq!(Money::from_pence(0).to_fixed2(), "0.00");
        assert_eq!(Money::from_pence(80).to_fixed2(), "0.80");
        assert_eq!(Money::from_pence(123456).to_fixed2(), "1234.56");
        assert_eq!(Money::from_pence(-5).to_fixed2(), "-0.05");
    }

    #[test]
    fn currency_uses_ptbr_separators() {
        assert_eq!(Money::from_pounds(180).format_currency(), "£\u{a0}180,00");
        assert_eq!(
            Money::from_pence(123456789).format_currency(),
            "£\u{a0}1.234.567,89"
        );
        assert_eq!(Money::from_pence(-250).to_string(), "-£\u{a0}2,50");
    }

    #[test]
    fn div_round_half_up() {
        assert_eq!(Money::from_pence(1000).div_round(3), Money::from_pence(333));
        assert_eq!(Money::from_pence(500).div_round(3), Money::from_pence(167));
        assert_eq!(Money::from_pence(5).div_round(2), Money::from_pence(3));
        assert_eq!(Money::from_pence(100).div_round(0), Money::ZERO);
    }

    #[test]
    fn arithmetic_saturates_instead_of_overflowing() {
        assert_eq!(Money::from_pence(100).times(i64::MAX).pence(), i64::MAX);
        assert_eq!(Money::from_pence(80).times(i64::MIN).pence(), i64::MIN);

        let mut total = Money::from_pence(i64::MAX - 1);
        total += Money::from_pence(10);
        assert_eq!(total.pence(), i64::MAX);
        assert_eq!(
            [Money::from_pence(i64::MAX), Money::from_pence(1)]
                .iter()
                .sum::<Money>()
                .pence(),
            i64::MAX
        );
    }

    #[test]
    fn sums_by_reference_and_value() {
        let v = [Money::from_pence(10), Money::from_pence(20)];
        assert_eq!(v.iter().sum::<Money>(), Money::from_pence(30));
        assert_eq!(v.into_iter().sum::<Money>(), Money::from_pence(30));
    }
}
