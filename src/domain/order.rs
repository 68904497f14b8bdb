use crate::error::{PaymentError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// An order being paid for. Owned by the storefront; read-only here.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub id: String,
    /// Total in major currency units.
    pub total: Decimal,
}

impl Order {
    pub fn new(id: impl Into<String>, total: Decimal) -> Self {
        Self {
            id: id.into(),
            total,
        }
    }

    /// Total in minor units (cents), as card processors expect it.
    pub fn minor_units(&self) -> Result<i64> {
        self.ensure_non_negative()?;
        self.total
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|cents| cents.to_i64())
            .ok_or_else(|| {
                PaymentError::AmountError(format!(
                    "Order {} total {} does not fit in minor units",
                    self.id, self.total
                ))
            })
    }

    /// Total as a two-decimal string, as redirect wallets expect it.
    pub fn decimal_string(&self) -> Result<String> {
        self.ensure_non_negative()?;
        let rounded = self
            .total
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Ok(format!("{rounded:.2}"))
    }

    fn ensure_non_negative(&self) -> Result<()> {
        if self.total < Decimal::ZERO {
            return Err(PaymentError::AmountError(format!(
                "Order {} has a negative total",
                self.id
            )));
        }
        Ok(())
    }
}
