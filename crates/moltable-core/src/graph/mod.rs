//! Bonded connectivity for dense, shifting atom index spaces.
//!
//! The graph is undirected and kept symmetric by [`table::ConnectionTable`];
//! [`bond_list::BondList`] is one atom's edge list and [`bond::Bond`] a
//! single edge. Directed (upper-triangle) views exist only as exports,
//! never as stored state.

pub mod bond;
pub mod bond_list;
pub mod table;

pub use bond::{Bond, BondOrder};
pub use bond_list::BondList;
pub use table::ConnectionTable;
