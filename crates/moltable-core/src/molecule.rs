use crate::error::GraphError;
use crate::graph::bond::BondOrder;
use crate::graph::bond_list::BondList;
use crate::graph::table::ConnectionTable;
use crate::positions::PositionArray;
use nalgebra::{DMatrix, Point3};
use tracing::debug;

/// A bonded set of atoms: one [`ConnectionTable`] and one
/// [`PositionArray`] kept in lockstep.
///
/// The two containers share a dense index space, so every structural
/// edit (add, insert, remove, subset) is forwarded to both. All methods
/// accept negative indices counting from the end.
///
/// Single-writer by design: nothing here locks, and callers using a
/// molecule from several threads must serialize mutation externally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    table: ConnectionTable,
    positions: PositionArray,
}

impl Molecule {
    /// Creates an empty molecule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a molecule of `size` unbonded atoms at the origin.
    pub fn with_size(size: usize) -> Self {
        Self {
            table: ConnectionTable::new(size),
            positions: PositionArray::new(size),
        }
    }

    /// Number of atoms.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.table.len(), self.positions.len());
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn table(&self) -> &ConnectionTable {
        &self.table
    }

    pub fn positions(&self) -> &PositionArray {
        &self.positions
    }

    /// Appends an unbonded atom, returning its index.
    pub fn add_atom(&mut self, position: Point3<f64>) -> usize {
        let index = self.table.add();
        self.positions.add(position);
        debug!(index, "added atom");
        index
    }

    /// Inserts an unbonded atom at `index`, shifting higher indices up.
    pub fn insert_atom(&mut self, position: Point3<f64>, index: isize) -> Result<usize, GraphError> {
        let w = self.table.insert(index)?;
        self.positions.insert(position, w as isize)?;
        debug!(index = w, "inserted atom");
        Ok(w)
    }

    /// Inserts an atom at `index` along with its bonds.
    ///
    /// The bond list names targets in pre-insert indexing; mirror edges
    /// are registered on every named neighbour.
    pub fn insert_bonded_atom(
        &mut self,
        position: Point3<f64>,
        bonds: BondList,
        index: isize,
    ) -> Result<usize, GraphError> {
        let w = self.table.insert_with(bonds, index)?;
        self.positions.insert(position, w as isize)?;
        debug!(index = w, "inserted bonded atom");
        Ok(w)
    }

    /// Removes the atom at `index`, returning its coordinates.
    ///
    /// The atom's bonds are permanently lost and every other atom's
    /// bonds are re-indexed.
    pub fn remove_atom(&mut self, index: isize) -> Result<Point3<f64>, GraphError> {
        self.table.remove(index)?;
        let position = self.positions.remove(index)?;
        debug!(size = self.len(), "removed atom");
        Ok(position)
    }

    pub fn connect(&mut self, i: isize, j: isize, order: BondOrder) -> Result<(), GraphError> {
        self.table.connect(i, j, order)
    }

    pub fn disconnect(&mut self, i: isize, j: isize) -> Result<(), GraphError> {
        self.table.disconnect(i, j)
    }

    pub fn are_connected(&self, i: isize, j: isize) -> Result<bool, GraphError> {
        self.table.are_connected(i, j)
    }

    pub fn position(&self, index: isize) -> Result<Point3<f64>, GraphError> {
        self.positions.position(index)
    }

    pub fn set_position(&mut self, index: isize, position: Point3<f64>) -> Result<(), GraphError> {
        self.positions.set_position(index, position)
    }

    pub fn distance(&self, i: isize, j: isize) -> Result<f64, GraphError> {
        self.positions.distance(i, j)
    }

    pub fn distance_matrix(&self) -> DMatrix<f64> {
        self.positions.distance_matrix()
    }

    /// Extracts the atoms at the given indices as a new molecule,
    /// re-indexed to `0..k`. Bonds into excluded atoms are dropped.
    pub fn subset(&self, indices: &[isize]) -> Result<Molecule, GraphError> {
        Ok(Molecule {
            table: self.table.subset(indices)?,
            positions: self.positions.subset(indices)?,
        })
    }

    /// The molecule's 1-indexed connectivity block.
    pub fn gaussian_connectivity(&self) -> String {
        self.table.gaussian_connectivity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Propane-like backbone: 0-1-2 chain with known distances.
    fn chain_molecule() -> Molecule {
        let mut molecule = Molecule::new();
        molecule.add_atom(Point3::new(0.0, 0.0, 0.0));
        molecule.add_atom(Point3::new(1.5, 0.0, 0.0));
        molecule.add_atom(Point3::new(3.0, 0.0, 0.0));
        molecule.connect(0, 1, BondOrder::Single).unwrap();
        molecule.connect(1, 2, BondOrder::Single).unwrap();
        molecule
    }

    fn assert_lockstep(molecule: &Molecule) {
        assert_eq!(molecule.table().len(), molecule.positions().len());
    }

    #[test]
    fn new_molecule_is_empty() {
        let molecule = Molecule::new();
        assert!(molecule.is_empty());
        assert_lockstep(&molecule);
    }

    #[test]
    fn with_size_pre_sizes_both_containers() {
        let molecule = Molecule::with_size(4);
        assert_eq!(molecule.len(), 4);
        assert_lockstep(&molecule);
        assert!(molecule.table().row(3).unwrap().is_empty());
        assert_eq!(molecule.position(3).unwrap(), Point3::origin());
    }

    #[test]
    fn add_and_connect_build_a_chain() {
        let molecule = chain_molecule();
        assert_eq!(molecule.len(), 3);
        assert!(molecule.are_connected(0, 1).unwrap());
        assert!(molecule.are_connected(-1, -2).unwrap());
        assert!(!molecule.are_connected(0, 2).unwrap());
        assert_lockstep(&molecule);
    }

    #[test]
    fn insert_atom_keeps_sizes_in_lockstep_and_reindexes() {
        let mut molecule = chain_molecule();
        let w = molecule.insert_atom(Point3::new(0.75, 1.0, 0.0), 1).unwrap();

        assert_eq!(w, 1);
        assert_eq!(molecule.len(), 4);
        assert_lockstep(&molecule);
        // The old 0-1 bond now spans indices 0 and 2.
        assert!(molecule.are_connected(0, 2).unwrap());
        assert!(molecule.table().row(1).unwrap().is_empty());
        assert_eq!(molecule.position(2).unwrap(), Point3::new(1.5, 0.0, 0.0));
    }

    #[test]
    fn insert_bonded_atom_bridges_its_neighbours() {
        let mut molecule = chain_molecule();
        let bonds = BondList::from_targets(&[0, 1]);
        molecule
            .insert_bonded_atom(Point3::new(0.75, 1.2, 0.0), bonds, 1)
            .unwrap();

        assert_eq!(molecule.len(), 4);
        assert_lockstep(&molecule);
        assert!(molecule.are_connected(1, 0).unwrap());
        assert!(molecule.are_connected(1, 2).unwrap()); // old atom 1
        assert_eq!(molecule.position(1).unwrap(), Point3::new(0.75, 1.2, 0.0));
    }

    #[test]
    fn remove_atom_drops_its_bonds_and_coordinates() {
        let mut molecule = chain_molecule();
        let removed = molecule.remove_atom(1).unwrap();

        assert_eq!(removed, Point3::new(1.5, 0.0, 0.0));
        assert_eq!(molecule.len(), 2);
        assert_lockstep(&molecule);
        // The middle atom's bonds vanish with it.
        assert!(!molecule.are_connected(0, 1).unwrap());
        assert_eq!(molecule.position(1).unwrap(), Point3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn subset_extracts_a_reindexed_fragment() {
        let molecule = chain_molecule();
        let fragment = molecule.subset(&[1, 2]).unwrap();

        assert_eq!(fragment.len(), 2);
        assert_lockstep(&fragment);
        assert!(fragment.are_connected(0, 1).unwrap());
        assert_eq!(fragment.position(0).unwrap(), Point3::new(1.5, 0.0, 0.0));
    }

    #[test]
    fn distances_come_from_the_position_array() {
        let molecule = chain_molecule();
        assert_eq!(molecule.distance(0, 1).unwrap(), 1.5);
        assert_eq!(molecule.distance(0, -1).unwrap(), 3.0);

        let matrix = molecule.distance_matrix();
        assert_eq!(matrix[(0, 2)], 3.0);
        assert_eq!(matrix[(2, 0)], 3.0);
        assert_eq!(matrix[(1, 1)], 0.0);
    }

    #[test]
    fn gaussian_connectivity_covers_every_atom() {
        let molecule = chain_molecule();
        assert_eq!(
            molecule.gaussian_connectivity(),
            " 1 2 1.0\n 2 3 1.0\n 3\n"
        );
    }
}
