use super::bond::{Bond, BondOrder};
use super::bond_list::BondList;
use crate::error::GraphError;
use crate::index::wrap_index;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use tracing::{debug, trace};

/// Undirected bonded-graph connectivity over a dense atom index space.
///
/// One [`BondList`] per atom, indexed `0..n`. Connectivity is not
/// directional at this level: if atom `i` holds a bond to `j`, atom `j`
/// holds the mirror bond with the same order, and every mutation on this
/// type maintains that symmetry. Structural edits (insert, remove,
/// subset) re-index the whole table so that stored targets stay valid.
///
/// Every public index parameter accepts negative values counting from
/// the end, normalized through [`wrap_index`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionTable {
    rows: Vec<BondList>,
}

impl ConnectionTable {
    /// Creates a table of `size` atoms with no bonds.
    pub fn new(size: usize) -> Self {
        Self {
            rows: vec![BondList::new(); size],
        }
    }

    /// Number of atoms (not bonds) in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The bond list of one atom.
    pub fn row(&self, index: isize) -> Result<&BondList, GraphError> {
        Ok(&self.rows[wrap_index(index, self.rows.len())?])
    }

    pub fn rows(&self) -> &[BondList] {
        &self.rows
    }

    /// Replaces the backing rows wholesale.
    ///
    /// The replacement must match the current atom count, and the caller
    /// is trusted to supply symmetric rows.
    pub fn set_rows(&mut self, rows: Vec<BondList>) -> Result<(), GraphError> {
        if rows.len() != self.rows.len() {
            return Err(GraphError::SizeMismatch {
                expected: self.rows.len(),
                actual: rows.len(),
            });
        }
        self.rows = rows;
        Ok(())
    }

    /// Bonds atoms `i` and `j` symmetrically.
    ///
    /// A `BondOrder::None` order is a no-op. Connecting an already
    /// bonded pair is a no-op too; the existing order wins.
    pub fn connect(&mut self, i: isize, j: isize, order: BondOrder) -> Result<(), GraphError> {
        if order == BondOrder::None {
            return Ok(());
        }
        let wi = wrap_index(i, self.rows.len())?;
        let wj = wrap_index(j, self.rows.len())?;
        self.rows[wi].connect(wj, order);
        self.rows[wj].connect(wi, order);
        trace!(i = wi, j = wj, %order, "connected atoms");
        Ok(())
    }

    /// Removes the bond between atoms `i` and `j`, both ways.
    pub fn disconnect(&mut self, i: isize, j: isize) -> Result<(), GraphError> {
        let wi = wrap_index(i, self.rows.len())?;
        let wj = wrap_index(j, self.rows.len())?;
        self.rows[wi].disconnect(wj);
        self.rows[wj].disconnect(wi);
        trace!(i = wi, j = wj, "disconnected atoms");
        Ok(())
    }

    pub fn are_connected(&self, i: isize, j: isize) -> Result<bool, GraphError> {
        let wi = wrap_index(i, self.rows.len())?;
        let wj = wrap_index(j, self.rows.len())?;
        Ok(self.rows[wi].connected_to(wj))
    }

    /// Appends an unbonded atom, returning its index.
    pub fn add(&mut self) -> usize {
        self.rows.push(BondList::new());
        self.rows.len() - 1
    }

    /// Appends an atom carrying pre-declared bonds, registering the
    /// mirror edge on every named target.
    ///
    /// Targets refer to the atoms already in the table. An out-of-range
    /// target fails after the slot has grown (not transactional).
    pub fn add_with(&mut self, list: BondList) -> Result<usize, GraphError> {
        let new_index = self.add();
        for bond in list.bonds() {
            self.connect(new_index as isize, bond.target as isize, bond.order)?;
        }
        Ok(new_index)
    }

    /// Grows the table by one unbonded atom at `index`, shifting every
    /// bond target at or above it up by one.
    ///
    /// Appending must go through [`add`](Self::add); `index` addresses an
    /// existing slot.
    pub fn insert(&mut self, index: isize) -> Result<usize, GraphError> {
        let w = wrap_index(index, self.rows.len())?;
        for row in &mut self.rows {
            *row = row.shifted(1, w);
        }
        self.rows.insert(w, BondList::new());
        debug!(index = w, size = self.rows.len(), "inserted atom slot");
        Ok(w)
    }

    /// Inserts an atom carrying pre-declared bonds at `index`.
    ///
    /// The supplied list names targets in pre-insert indexing; it is
    /// shifted along with the rest of the table, then each of its bonds
    /// is registered through [`connect`](Self::connect) so the reverse
    /// edges appear. This keeps a pre-populated atom consistent with
    /// neighbours whose indices move around it.
    pub fn insert_with(&mut self, list: BondList, index: isize) -> Result<usize, GraphError> {
        let w = self.insert(index)?;
        for bond in list.shifted(1, w).bonds() {
            self.connect(w as isize, bond.target as isize, bond.order)?;
        }
        Ok(w)
    }

    /// Removes the atom at `index`, dropping its bonds.
    ///
    /// Bonds pointing at the removed atom are purged from every other
    /// row before re-indexing; purging first is what stops them from
    /// being silently remapped onto the atom that slides into the freed
    /// slot. Returns the removed row, with targets still in pre-removal
    /// indexing.
    pub fn remove(&mut self, index: isize) -> Result<BondList, GraphError> {
        let w = wrap_index(index, self.rows.len())?;
        let removed = self.rows.remove(w);
        for row in &mut self.rows {
            row.disconnect(w);
            *row = row.shifted(-1, w + 1);
        }
        debug!(index = w, size = self.rows.len(), "removed atom slot");
        Ok(removed)
    }

    /// Builds a new table holding only the given atoms, remapped to
    /// `0..k` in the order supplied.
    ///
    /// Bonds into atoms outside the selection are dropped, not errored;
    /// bonds between kept atoms are remapped to the new index space.
    pub fn subset(&self, indices: &[isize]) -> Result<ConnectionTable, GraphError> {
        let wrapped = indices
            .iter()
            .map(|&i| wrap_index(i, self.rows.len()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut table = ConnectionTable::new(wrapped.len());
        for (new_index, &old_index) in wrapped.iter().enumerate() {
            let mut list = BondList::new();
            for bond in self.rows[old_index].bonds() {
                if let Some(new_target) = wrapped.iter().position(|&old| old == bond.target) {
                    list.connect(new_target, bond.order);
                }
            }
            table.rows[new_index] = list;
        }
        Ok(table)
    }

    /// The adjacency of the table as a jagged array.
    ///
    /// Directed: each atom's upper-triangle bonds only (`target >=
    /// index`), so every undirected edge appears exactly once.
    /// Undirected: the raw rows, every edge appearing twice.
    pub fn to_jagged(&self, directed: bool) -> Vec<Vec<Bond>> {
        if directed {
            self.rows
                .iter()
                .enumerate()
                .map(|(index, row)| row.culled(index))
                .collect()
        } else {
            self.rows.iter().map(|row| row.to_vec()).collect()
        }
    }

    /// Formats the table as a 1-indexed connectivity block suitable for
    /// quantum-chemistry input decks.
    ///
    /// One line per atom: the atom's 1-based index, then a
    /// `target code` pair for each directed bond.
    pub fn gaussian_connectivity(&self) -> String {
        let mut block = String::new();
        for (index, bonds) in self.to_jagged(true).iter().enumerate() {
            let _ = write!(block, " {}", index + 1);
            for bond in bonds {
                let _ = write!(block, " {} {}", bond.target + 1, bond.order.gaussian_code());
            }
            block.push('\n');
        }
        block
    }
}
