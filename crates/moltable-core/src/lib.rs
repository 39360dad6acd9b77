//! # moltable
//!
//! Bonded connectivity tables and flattened coordinate arrays for
//! molecular editing.
//!
//! An editing front-end owns atoms as a dense, re-indexable sequence:
//! inserting or removing an atom shifts every higher index, and all
//! bookkeeping that refers to atoms by index has to shift with it. This
//! crate provides that bookkeeping layer:
//!
//! - **[`graph`]** - the undirected bonded graph: [`graph::Bond`] /
//!   [`graph::BondOrder`] values, per-atom [`graph::BondList`]s, and the
//!   symmetric [`graph::ConnectionTable`] with insert/remove/subset
//!   re-indexing and directed adjacency export.
//! - **[`positions`]** - [`positions::PositionArray`], an N×3 flattened
//!   coordinate store with the same shift semantics plus distance
//!   queries and the pairwise distance matrix.
//! - **[`molecule`]** - [`molecule::Molecule`], the owner that keeps the
//!   two containers in lockstep and forwards every structural edit to
//!   both.
//! - **[`select`]** - comparison predicates for turning per-atom
//!   attribute arrays into subset-ready index lists.
//!
//! Every public index parameter is Python-style: negative values count
//! from the end, and anything outside `[0, len)` after wrapping fails
//! with [`error::GraphError::IndexOutOfRange`].
//!
//! The crate is a pure data-structure layer: no rendering, no file
//! formats, no interior mutability. A molecule has a single logical
//! writer, and operations run to completion synchronously.

pub mod error;
pub mod graph;
pub mod index;
pub mod molecule;
pub mod positions;
pub mod select;
