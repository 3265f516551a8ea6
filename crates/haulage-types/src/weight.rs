//! Weight value type

use serde::{Deserialize, Serialize};

use crate::error::WeightError;

/// Non-negative mass in kilograms.
///
/// Construction goes through [`Weight::new`], which rejects negative and
/// non-finite values. Deserialization applies the same check.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "RawWeight")]
pub struct Weight {
    kg: f64,
}

#[derive(Deserialize)]
struct RawWeight {
    kg: f64,
}

impl TryFrom<RawWeight> for Weight {
    type Error = WeightError;

    fn try_from(raw: RawWeight) -> Result<Self, Self::Error> {
        Weight::new(raw.kg)
    }
}

impl Weight {
    pub fn new(kg: f64) -> Result<Self, WeightError> {
        if !kg.is_finite() {
            return Err(WeightError::NotFinite(kg));
        }
        if kg < 0.0 {
            return Err(WeightError::Negative(kg));
        }
        Ok(Self { kg })
    }

    /// The zero weight
    pub const fn empty() -> Self {
        Self { kg: 0.0 }
    }

    pub fn kg(&self) -> f64 {
        self.kg
    }

    pub fn plus(self, other: Weight) -> Weight {
        Weight {
            kg: self.kg + other.kg,
        }
    }

    /// Subtract `other`, flooring at zero.
    pub fn minus(self, other: Weight) -> Weight {
        let kg = self.kg - other.kg;
        if kg <= 0.0 {
            return Weight::empty();
        }
        Weight { kg }
    }

    pub fn less_than(self, other: Weight) -> bool {
        self.kg < other.kg
    }

    pub fn is_empty(&self) -> bool {
        self.kg == 0.0
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kg", self.kg)
    }
}
