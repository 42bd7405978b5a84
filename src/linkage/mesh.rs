//! Toroidal mesh linkage.
//!
//! The `n` variables are laid out on a `(k + 1)`-dimensional torus whose
//! axes all have the same width, the smallest width whose `(k + 1)`-th power
//! reaches `n`. Coordinates are mixed-radix digits with axis 0 as the most
//! significant digit, so on a 3 x 3 grid vertex 8 is `(2, 2)` and `(0, 2)`
//! is vertex 2.
//!
//! Every vertex emits one directed edge per axis, to its successor along
//! that axis. When `n` is not a perfect power the grid is only partially
//! filled and successors past the last vertex wrap to the start of the axis.

use crate::instance::Adjacency;

/// A `dimensions`-dimensional torus holding `vertices` vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Torus {
    vertices: usize,
    dimensions: usize,
    width: usize,
}

impl Torus {
    pub fn new(vertices: usize, dimensions: usize) -> Self {
        let mut width = 1;
        while capacity(width, dimensions) < vertices {
            width += 1;
        }

        Self {
            vertices,
            dimensions,
            width,
        }
    }

    /// Per-axis width.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Mixed-radix digits of `index`, most significant (axis 0) first.
    pub fn to_coordinates(&self, index: usize) -> Vec<usize> {
        let mut coordinates = vec![0; self.dimensions];
        let mut rest = index;
        for axis in (0..self.dimensions).rev() {
            coordinates[axis] = rest % self.width;
            rest /= self.width;
        }
        coordinates
    }

    pub fn to_index(&self, coordinates: &[usize]) -> usize {
        coordinates
            .iter()
            .fold(0, |index, &digit| index * self.width + digit)
    }

    /// Successor of `vertex` along `axis`.
    ///
    /// The axis digit is incremented and wraps to 0 when it reaches the
    /// width; if the result still lands past the last vertex the digit wraps
    /// to 0 as well. Should the wrap lead back to `vertex` itself (the axis
    /// line holds no other vertex), the edge goes to the next vertex in
    /// linear order instead.
    pub fn neighbor(&self, vertex: usize, axis: usize) -> usize {
        let mut coordinates = self.to_coordinates(vertex);

        coordinates[axis] += 1;
        if coordinates[axis] >= self.width {
            coordinates[axis] = 0;
        }

        let mut index = self.to_index(&coordinates);
        if index >= self.vertices {
            coordinates[axis] = 0;
            index = self.to_index(&coordinates);
        }

        if index == vertex {
            (vertex + 1) % self.vertices
        } else {
            index
        }
    }
}

fn capacity(width: usize, dimensions: usize) -> usize {
    u32::try_from(dimensions)
        .ok()
        .and_then(|d| width.checked_pow(d))
        .unwrap_or(usize::MAX)
}

/// Emits `n * (k + 1)` rows `(vertex, neighbor)`, grouped by vertex, axes in order.
pub fn generate(n: usize, k: usize) -> Adjacency {
    let torus = Torus::new(n, k + 1);

    let rows = (0..n)
        .flat_map(|vertex| {
            (0..torus.dimensions()).map(move |axis| vec![vertex, torus.neighbor(vertex, axis)])
        })
        .collect();

    Adjacency::new(rows)
}
