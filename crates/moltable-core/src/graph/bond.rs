use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Chemical bond multiplicity.
///
/// `None` is the null order: connecting two atoms with it is a no-op at
/// the table level, so stored bonds normally carry a real order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum BondOrder {
    None,
    #[default]
    Single,
    Aromatic,
    Double,
    Triple,
}

static BOND_ORDER_CODES: Map<&'static str, BondOrder> = phf_map! {
    "0" => BondOrder::None,
    "none" => BondOrder::None,
    "1" => BondOrder::Single,
    "s" => BondOrder::Single,
    "single" => BondOrder::Single,
    "ar" => BondOrder::Aromatic,
    "aromatic" => BondOrder::Aromatic,
    "2" => BondOrder::Double,
    "d" => BondOrder::Double,
    "double" => BondOrder::Double,
    "3" => BondOrder::Triple,
    "t" => BondOrder::Triple,
    "triple" => BondOrder::Triple,
};

/// Fractional codes used by quantum-chemistry connectivity blocks,
/// paired with the order they decode to.
const GAUSSIAN_BOND_CODES: [(f64, BondOrder); 5] = [
    (0.0, BondOrder::None),
    (1.0, BondOrder::Single),
    (1.5, BondOrder::Aromatic),
    (2.0, BondOrder::Double),
    (3.0, BondOrder::Triple),
];

const GAUSSIAN_CODE_TOLERANCE: f64 = 1e-3;

impl BondOrder {
    /// Returns the fractional bond code used in connectivity blocks.
    pub fn gaussian_code(&self) -> &'static str {
        match self {
            Self::None => "0.0",
            Self::Single => "1.0",
            Self::Aromatic => "1.5",
            Self::Double => "2.0",
            Self::Triple => "3.0",
        }
    }

    /// Decodes a fractional bond code, tolerating small round-trip error.
    pub fn from_gaussian_code(code: f64) -> Option<Self> {
        GAUSSIAN_BOND_CODES
            .iter()
            .find(|(value, _)| (code - value).abs() < GAUSSIAN_CODE_TOLERANCE)
            .map(|&(_, order)| order)
    }
}

#[derive(Debug, Error)]
#[error("Invalid bond order string")]
pub struct ParseBondOrderError;

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BOND_ORDER_CODES
            .get(s.to_lowercase().as_str())
            .copied()
            .ok_or(ParseBondOrderError)
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::None => "None",
                Self::Single => "Single",
                Self::Aromatic => "Aromatic",
                Self::Double => "Double",
                Self::Triple => "Triple",
            }
        )
    }
}

/// A single edge of the bonded graph: the index of the partner atom and
/// the order of the bond. Immutable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bond {
    pub target: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(target: usize, order: BondOrder) -> Self {
        Self { target, order }
    }

    /// Shorthand for a single bond, the overwhelmingly common case.
    pub fn single(target: usize) -> Self {
        Self::new(target, BondOrder::Single)
    }

    /// Returns a copy with `shift_by` added to the target when the
    /// target is at or above `threshold`; otherwise an unchanged copy.
    ///
    /// Callers only shift down past a threshold that excludes the slot
    /// being removed, so the shifted target never goes negative.
    pub(crate) fn shifted(self, shift_by: isize, threshold: usize) -> Self {
        if self.target >= threshold {
            Self::new((self.target as isize + shift_by) as usize, self.order)
        } else {
            self
        }
    }
}
