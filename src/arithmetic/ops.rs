use crate::arithmetic::rounding;
use crate::core::error::MoneyError;
use crate::core::money::Money;
use rust_decimal::Decimal;

/// Same-currency arithmetic.
///
/// All results are exact integers except for the fractional multipliers,
/// which round half-to-even (see [`rounding`]). Overflowing `i64` is an error,
/// never a wrap-around.
impl Money {
    /// Sum of two values of the same currency.
    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount()
            .checked_add(other.amount())
            .ok_or_else(|| MoneyError::overflow("add"))?;
        Ok(self.with_amount(amount))
    }

    pub fn subtract(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount()
            .checked_sub(other.amount())
            .ok_or_else(|| MoneyError::overflow("subtract"))?;
        Ok(self.with_amount(amount))
    }

    /// Scale by a whole number. Exact.
    pub fn multiply(&self, factor: i64) -> Result<Money, MoneyError> {
        let amount = self
            .amount()
            .checked_mul(factor)
            .ok_or_else(|| MoneyError::overflow("multiply"))?;
        Ok(self.with_amount(amount))
    }

    /// Scale by `numerator / denominator`, rounding half-to-even.
    ///
    /// ```
    /// use money_engine::core::money::Money;
    ///
    /// // 250 * 1/100 = 2.5 -> 2
    /// assert_eq!(Money::new(250, "EUR").unwrap().multiply_ratio(1, 100).unwrap().amount(), 2);
    /// ```
    pub fn multiply_ratio(&self, numerator: i64, denominator: i64) -> Result<Money, MoneyError> {
        let product = i128::from(self.amount()) * i128::from(numerator);
        let rounded = rounding::div_round_half_even(product, i128::from(denominator))
            .ok_or_else(|| MoneyError::invalid("ratio denominator must not be zero"))?;
        let amount = i64::try_from(rounded).map_err(|_| MoneyError::overflow("multiply_ratio"))?;
        Ok(self.with_amount(amount))
    }

    /// Scale by a decimal factor (a rate, a percentage), rounding half-to-even.
    pub fn multiply_decimal(&self, factor: Decimal) -> Result<Money, MoneyError> {
        let product = Decimal::from(self.amount())
            .checked_mul(factor)
            .ok_or_else(|| MoneyError::overflow("multiply_decimal"))?;
        Ok(self.with_amount(rounding::round_decimal(product)?))
    }
}
