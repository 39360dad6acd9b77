use super::bond::{Bond, BondOrder};
use serde::{Deserialize, Serialize};

/// All bonds leaving one atom, in insertion order.
///
/// Targets are indices into the owning [`ConnectionTable`]; a list never
/// holds two bonds to the same target (connect-if-absent). Symmetry with
/// the partner atoms' lists is the table's responsibility, not this
/// type's: callers mutating a bare `BondList` must mirror the edit on
/// the target's list themselves.
///
/// [`ConnectionTable`]: super::table::ConnectionTable
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondList {
    bonds: Vec<Bond>,
}

impl BondList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from explicit bonds.
    ///
    /// The caller is trusted not to supply duplicate targets.
    pub fn from_bonds(bonds: Vec<Bond>) -> Self {
        Self { bonds }
    }

    /// Builds a list of single bonds to the given targets.
    pub fn from_targets(targets: &[usize]) -> Self {
        Self {
            bonds: targets.iter().map(|&t| Bond::single(t)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Defensive copy of the bonds.
    pub fn to_vec(&self) -> Vec<Bond> {
        self.bonds.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bond> {
        self.bonds.iter()
    }

    /// Whether this atom is bonded to `target`. Linear scan.
    pub fn connected_to(&self, target: usize) -> bool {
        self.bonds.iter().any(|bond| bond.target == target)
    }

    /// Returns the bond to `target`, if any.
    pub fn bond_to(&self, target: usize) -> Option<Bond> {
        self.bonds.iter().find(|bond| bond.target == target).copied()
    }

    /// Appends a bond to `target` unless one already exists.
    pub fn connect(&mut self, target: usize, order: BondOrder) {
        if !self.connected_to(target) {
            self.bonds.push(Bond::new(target, order));
        }
    }

    /// Removes the bond to `target` if present; no-op otherwise.
    pub fn disconnect(&mut self, target: usize) {
        self.bonds.retain(|bond| bond.target != target);
    }

    /// Returns a new list with `shift_by` added to every target at or
    /// above `threshold`; bonds below the threshold are copied as-is.
    ///
    /// Used when atoms are inserted or removed elsewhere in the table so
    /// that stale targets stay valid.
    pub fn shifted(&self, shift_by: isize, threshold: usize) -> Self {
        Self {
            bonds: self
                .bonds
                .iter()
                .map(|bond| bond.shifted(shift_by, threshold))
                .collect(),
        }
    }

    /// Returns only the bonds whose target is at or above `min_target`.
    ///
    /// With `min_target` set to the owning atom's own index this yields
    /// the upper-triangle view of the symmetric table, keeping each
    /// undirected edge exactly once.
    pub fn culled(&self, min_target: usize) -> Vec<Bond> {
        self.bonds
            .iter()
            .filter(|bond| bond.target >= min_target)
            .copied()
            .collect()
    }
}

impl<'a> IntoIterator for &'a BondList {
    type Item = &'a Bond;
    type IntoIter = std::slice::Iter<'a, Bond>;

    fn into_iter(self) -> Self::IntoIter {
        self.bonds.iter()
    }
}
