//! Common validation utilities

/// Check that a monetary amount is a finite, non-negative number
pub fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}
