use serde::{Deserialize, Serialize};

use crate::errors::InputError;

use super::category::Category;

/// A single categorised expense. Immutable once created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    category: Category,
    amount: f64,
}

impl ExpenseRecord {
    pub fn new(category: Category, amount: f64) -> Self {
        Self { category, amount }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Parses an expense amount: a finite, non-negative decimal.
pub fn parse_amount(raw: &str) -> Result<f64, InputError> {
    parse_non_negative(raw).ok_or_else(|| InputError::InvalidAmount(raw.trim().to_string()))
}

/// Parses the session budget with the same rules as an expense amount.
pub fn parse_budget(raw: &str) -> Result<f64, InputError> {
    parse_non_negative(raw).ok_or_else(|| InputError::InvalidBudget(raw.trim().to_string()))
}

fn parse_non_negative(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        // collapse -0.0 so it never renders as "-0.00"
        .map(|value| value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_accept_plain_decimals() {
        assert_eq!(parse_amount("12.50"), Ok(12.5));
        assert_eq!(parse_amount("  7 "), Ok(7.0));
        assert_eq!(parse_amount("0"), Ok(0.0));
    }

    #[test]
    fn amounts_reject_garbage_negative_and_non_finite() {
        for raw in ["", "abc", "-1", "NaN", "inf", "1,000", "12.5.1"] {
            assert!(
                matches!(parse_amount(raw), Err(InputError::InvalidAmount(_))),
                "`{raw}` should be rejected"
            );
        }
    }

    #[test]
    fn negative_zero_is_normalized() {
        let value = parse_amount("-0").unwrap();
        assert!(value.is_sign_positive());
    }

    #[test]
    fn budget_errors_use_budget_variant() {
        assert_eq!(
            parse_budget("lots"),
            Err(InputError::InvalidBudget("lots".into()))
        );
        assert_eq!(parse_budget("1000"), Ok(1000.0));
    }

    #[test]
    fn record_exposes_fields() {
        let record = ExpenseRecord::new(Category::Bills, 42.0);
        assert_eq!(record.category(), Category::Bills);
        assert_eq!(record.amount(), 42.0);
    }
}
