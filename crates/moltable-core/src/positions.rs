use crate::error::GraphError;
use crate::index::wrap_index;
use nalgebra::{DMatrix, Point3};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Flattened per-atom coordinate storage.
///
/// One 3-vector per atom in the same index space as the owning
/// [`ConnectionTable`], stored row-major as `[x0, y0, z0, x1, y1, z1,
/// ...]`. Insert, remove, and subset mirror the table's shift semantics
/// but carry no bond bookkeeping; keeping the two containers the same
/// size is the owner's job (see [`Molecule`]).
///
/// [`ConnectionTable`]: crate::graph::table::ConnectionTable
/// [`Molecule`]: crate::molecule::Molecule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionArray {
    coords: Vec<f64>,
}

impl PositionArray {
    /// Creates storage for `size` atoms, all at the origin.
    pub fn new(size: usize) -> Self {
        Self {
            coords: vec![0.0; size * 3],
        }
    }

    pub fn from_points(points: &[Point3<f64>]) -> Self {
        Self {
            coords: points.iter().flat_map(|p| [p.x, p.y, p.z]).collect(),
        }
    }

    /// Wraps an already flattened coordinate buffer.
    ///
    /// The length must be a multiple of three.
    pub fn from_flat(coords: Vec<f64>) -> Result<Self, GraphError> {
        if coords.len() % 3 != 0 {
            return Err(GraphError::SizeMismatch {
                expected: coords.len() - coords.len() % 3,
                actual: coords.len(),
            });
        }
        Ok(Self { coords })
    }

    /// Number of atoms (coordinate triples), not floats.
    pub fn len(&self) -> usize {
        self.coords.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The raw flattened buffer.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Replaces the flattened buffer; the length must match the current
    /// atom count exactly.
    pub fn set_coords(&mut self, coords: &[f64]) -> Result<(), GraphError> {
        if coords.len() != self.coords.len() {
            return Err(GraphError::SizeMismatch {
                expected: self.coords.len(),
                actual: coords.len(),
            });
        }
        self.coords.copy_from_slice(coords);
        Ok(())
    }

    pub fn to_points(&self) -> Vec<Point3<f64>> {
        self.coords
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect()
    }

    pub fn position(&self, index: isize) -> Result<Point3<f64>, GraphError> {
        let w = wrap_index(index, self.len())? * 3;
        Ok(Point3::new(
            self.coords[w],
            self.coords[w + 1],
            self.coords[w + 2],
        ))
    }

    pub fn set_position(&mut self, index: isize, position: Point3<f64>) -> Result<(), GraphError> {
        let w = wrap_index(index, self.len())? * 3;
        self.coords[w] = position.x;
        self.coords[w + 1] = position.y;
        self.coords[w + 2] = position.z;
        Ok(())
    }

    /// Appends an atom's coordinates, returning its index.
    pub fn add(&mut self, position: Point3<f64>) -> usize {
        self.coords.extend([position.x, position.y, position.z]);
        self.len() - 1
    }

    /// Inserts an atom's coordinates at `index`, shifting higher slots
    /// up by one. Appending must go through [`add`](Self::add).
    pub fn insert(&mut self, position: Point3<f64>, index: isize) -> Result<usize, GraphError> {
        let w = wrap_index(index, self.len())?;
        self.coords
            .splice(w * 3..w * 3, [position.x, position.y, position.z]);
        debug!(index = w, size = self.len(), "inserted position slot");
        Ok(w)
    }

    /// Removes the atom at `index`, returning its coordinates.
    pub fn remove(&mut self, index: isize) -> Result<Point3<f64>, GraphError> {
        let w = wrap_index(index, self.len())? * 3;
        let removed: Vec<f64> = self.coords.drain(w..w + 3).collect();
        debug!(size = self.len(), "removed position slot");
        Ok(Point3::new(removed[0], removed[1], removed[2]))
    }

    /// Builds a new array holding only the given atoms, in the order
    /// supplied.
    pub fn subset(&self, indices: &[isize]) -> Result<PositionArray, GraphError> {
        let mut array = PositionArray::new(0);
        for &index in indices {
            array.add(self.position(index)?);
        }
        Ok(array)
    }

    /// Euclidean distance between two atoms.
    pub fn distance(&self, i: isize, j: isize) -> Result<f64, GraphError> {
        Ok((self.position(i)? - self.position(j)?).norm())
    }

    /// The full pairwise distance matrix: symmetric, zero diagonal.
    ///
    /// O(N²); the one numerically heavy routine in this layer.
    pub fn distance_matrix(&self) -> DMatrix<f64> {
        let points = self.to_points();
        let n = points.len();
        let mut matrix = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in (i + 1)..n {
                let distance = (points[i] - points[j]).norm();
                matrix[(i, j)] = distance;
                matrix[(j, i)] = distance;
            }
        }
        matrix
    }
}
