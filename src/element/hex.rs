//! Trilinear hexahedron.
//!
//! Vertex numbering:
//!
//! ```text
//!   bottom (xi3 = -1)        top (xi3 = +1)
//!   0: (-1,-1,-1)  A         4: (-1,-1, 1)  A'
//!   1: ( 1,-1,-1)  B         5: ( 1,-1, 1)  B'
//!   2: ( 1, 1,-1)  C         6: ( 1, 1, 1)  C'
//!   3: (-1, 1,-1)  D         7: (-1, 1, 1)  D'
//! ```
//!
//! The shape functions must agree with this ordering, otherwise the mapping
//! silently twists the element.

use super::ReferenceElement;
use crate::{Coord, RefCoord};

pub const NVERTICES: usize = 8;

/// Corner sign triple $(s_1, s_2, s_3)$ of each vertex.
pub const VERTEX_SIGNS: [[f64; 3]; NVERTICES] = [
  [-1.0, -1.0, -1.0],
  [1.0, -1.0, -1.0],
  [1.0, 1.0, -1.0],
  [-1.0, 1.0, -1.0],
  [-1.0, -1.0, 1.0],
  [1.0, -1.0, 1.0],
  [1.0, 1.0, 1.0],
  [-1.0, 1.0, 1.0],
];

pub const VERTEX_LABELS: [&str; NVERTICES] = ["A", "B", "C", "D", "A'", "B'", "C'", "D'"];

#[rustfmt::skip]
pub const EDGES: [(usize, usize); 12] = [
  (0, 1), (1, 2), (2, 3), (3, 0), // bottom
  (4, 5), (5, 6), (6, 7), (7, 4), // top
  (0, 4), (1, 5), (2, 6), (3, 7), // vertical
];

/// $N_a (xi) = 1/8 (1 + s_1 xi_1)(1 + s_2 xi_2)(1 + s_3 xi_3)$
pub fn shape_functions(xi: &RefCoord) -> na::SVector<f64, NVERTICES> {
  na::SVector::from_fn(|a, _| {
    let s = VERTEX_SIGNS[a];
    0.125 * (1.0 + s[0] * xi[0]) * (1.0 + s[1] * xi[1]) * (1.0 + s[2] * xi[2])
  })
}

pub fn shape_gradients(xi: &RefCoord) -> na::SMatrix<f64, 3, NVERTICES> {
  na::SMatrix::from_fn(|i, a| {
    let s = VERTEX_SIGNS[a];
    (0..3)
      .map(|k| if k == i { s[k] } else { 1.0 + s[k] * xi[k] })
      .product::<f64>()
      * 0.125
  })
}

/// Physical point of `xi` for a straight-sided hexahedron with vertices `vertices`.
pub fn x_of_xi(xi: &RefCoord, vertices: &[Coord; NVERTICES]) -> Coord {
  vertices
    .iter()
    .zip(shape_functions(xi).iter())
    .map(|(v, &w)| w * v)
    .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hexahedron;
impl ReferenceElement<NVERTICES> for Hexahedron {
  const NAME: &'static str = "hexahedron";

  fn ref_vertices() -> [RefCoord; NVERTICES] {
    VERTEX_SIGNS.map(RefCoord::from)
  }
  fn vertex_labels() -> [&'static str; NVERTICES] {
    VERTEX_LABELS
  }
  fn edges() -> &'static [(usize, usize)] {
    &EDGES
  }
  fn shape_functions(xi: &RefCoord) -> na::SVector<f64, NVERTICES> {
    shape_functions(xi)
  }
  fn shape_gradients(xi: &RefCoord) -> na::SMatrix<f64, 3, NVERTICES> {
    shape_gradients(xi)
  }
}
