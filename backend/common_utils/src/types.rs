//! Amount newtypes shared across the gateway models.

use std::fmt::Display;

use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};

use crate::errors::ParsingError;

/// Amount in minor currency units (kopecks, cents).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct MinorUnit(i64);

impl MinorUnit {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }
}

impl Display for MinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Amount in major units the way the gateway reports it (e.g. `10.00000`).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FloatMajorUnit(pub f64);

impl FloatMajorUnit {
    /// forms a new major unit from amount
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// forms a new major unit with zero amount
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// converts to minor unit as i64 from FloatMajorUnit. Every currency the
    /// gateway settles in uses two decimal places.
    pub fn to_minor_unit_as_i64(self) -> Result<MinorUnit, error_stack::Report<ParsingError>> {
        let amount_decimal =
            Decimal::from_f64(self.0).ok_or(ParsingError::FloatToDecimalConversionFailure)?;
        let amount_i64 = (amount_decimal * Decimal::from(100))
            .to_i64()
            .ok_or(ParsingError::IntegerOverflow)?;
        Ok(MinorUnit::new(amount_i64))
    }
}

impl Display for FloatMajorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    #[allow(clippy::unwrap_used)]
    mod float_major_unit {
        use crate::types::{FloatMajorUnit, MinorUnit};

        #[test]
        fn converts_to_minor_units_without_precision_loss() {
            assert_eq!(
                FloatMajorUnit::new(10.0).to_minor_unit_as_i64().unwrap(),
                MinorUnit::new(1000)
            );
            // 1.02 is not representable exactly in binary; the decimal
            // conversion must still land on 102, not 101.
            assert_eq!(
                FloatMajorUnit::new(1.02).to_minor_unit_as_i64().unwrap(),
                MinorUnit::new(102)
            );
        }
    }
}
