use crate::core::error::MoneyError;
use crate::core::money::Money;
use log::trace;

impl Money {
    /// Split into `parts` values that sum exactly to `self`.
    ///
    /// Every part receives `amount div parts`; the remaining minor units are
    /// handed out one each to the leading parts, in order.
    ///
    /// A part count of zero or less, or one too large to allocate, is an
    /// `InvalidArgument`.
    ///
    /// # Examples
    ///
    /// ```
    /// use money_engine::core::money::Money;
    ///
    /// let eur = Money::for_currency("EUR").unwrap();
    /// let parts = eur.amount(99).divide(2).unwrap();
    /// assert_eq!(parts, vec![eur.amount(50), eur.amount(49)]);
    /// ```
    pub fn divide(&self, parts: i64) -> Result<Vec<Money>, MoneyError> {
        if parts <= 0 {
            return Err(MoneyError::invalid(format!(
                "cannot divide into {} parts",
                parts
            )));
        }

        // Euclidean division keeps the remainder in 0..parts for negative amounts too.
        let base = self.amount().div_euclid(parts);
        let remainder = self.amount().rem_euclid(parts);
        trace!(
            "divide {} into {} parts: base {}, remainder {}",
            self.amount(),
            parts,
            base,
            remainder
        );

        let count = usize::try_from(parts)
            .map_err(|_| MoneyError::invalid(format!("cannot divide into {} parts", parts)))?;
        let mut out = Vec::new();
        out.try_reserve_exact(count).map_err(|_| {
            MoneyError::invalid(format!("too many parts to hold in memory: {}", parts))
        })?;
        out.extend((0..parts).map(|i| {
            let extra = i64::from(i < remainder);
            self.with_amount(base + extra)
        }));
        Ok(out)
    }

    /// Split proportionally to `ratios`, e.g. `[70, 20, 10]`.
    ///
    /// Shares are rounded down and the leftover minor units go one each to the
    /// leading entries with a non-zero ratio. The result always sums exactly to
    /// `self` and has one entry per ratio.
    pub fn allocate(&self, ratios: &[u32]) -> Result<Vec<Money>, MoneyError> {
        if ratios.is_empty() {
            return Err(MoneyError::invalid("allocation needs at least one ratio"));
        }
        let total: i128 = ratios.iter().map(|&r| i128::from(r)).sum();
        if total == 0 {
            return Err(MoneyError::invalid("allocation ratios must not all be zero"));
        }

        let amount = i128::from(self.amount());
        let mut shares: Vec<i128> = ratios
            .iter()
            .map(|&r| (amount * i128::from(r)).div_euclid(total))
            .collect();

        let mut leftover = amount - shares.iter().sum::<i128>();
        trace!(
            "allocate {} over {:?}: {} units left after flooring",
            self.amount(),
            ratios,
            leftover
        );
        for (share, _) in shares
            .iter_mut()
            .zip(ratios)
            .filter(|(_, &ratio)| ratio > 0)
        {
            if leftover == 0 {
                break;
            }
            *share += 1;
            leftover -= 1;
        }

        shares
            .into_iter()
            .map(|share| {
                i64::try_from(share)
                    .map(|a| self.with_amount(a))
                    .map_err(|_| MoneyError::overflow("allocate"))
            })
            .collect()
    }
}
