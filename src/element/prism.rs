//! Collapsed prism embedded in the reference cube.
//!
//! The triangular cross-section in the $(xi_1, xi_3)$ plane is collapsed
//! against the edge $xi_1 = -1, xi_3 = 1$ and the prism extends over the full
//! range of $xi_2$. The collapsed coordinate
//! $overline(eta) = 2 (1 + xi_1) / (1 - xi_3) - 1$
//! maps the triangle onto a square, and the vertex basis is a product of
//! 1D linear blending factors in $overline(eta)$, $xi_2$ and $xi_3$.
//!
//! Vertex order is $[A, B, C, D, E, F]$. E and F sit on the collapsed edge.

use super::ReferenceElement;
use crate::{util::clamp_denominator, Coord, RefCoord};

use tracing::trace;

pub const NVERTICES: usize = 6;

/// Denominator floor of the collapsed coordinate.
pub const COLLAPSE_EPS: f64 = 1e-12;

pub const VERTEX_LABELS: [&str; NVERTICES] = ["A", "B", "C", "D", "E", "F"];

#[rustfmt::skip]
pub const REF_VERTICES: [[f64; 3]; NVERTICES] = [
  [-1.0, -1.0, -1.0], // A
  [ 1.0, -1.0, -1.0], // B
  [-1.0,  1.0, -1.0], // C
  [ 1.0,  1.0, -1.0], // D
  [-1.0, -1.0,  1.0], // E
  [-1.0,  1.0,  1.0], // F
];

/// Book wireframe: triangles A-B-E and D-C-F, connected by A-D, B-C and E-F.
#[rustfmt::skip]
pub const EDGES: [(usize, usize); 9] = [
  (0, 1), (1, 4), (4, 0),
  (3, 2), (2, 5), (5, 3),
  (0, 3), (1, 2), (4, 5),
];

/// Which member of the `L`, `M` and `N` pairs each vertex takes.
/// E and F do not depend on the collapsed coordinate.
const VERTEX_FACTORS: [(Option<usize>, usize, usize); NVERTICES] = [
  (Some(0), 0, 0),
  (Some(1), 0, 0),
  (Some(0), 1, 0),
  (Some(1), 1, 0),
  (None, 0, 1),
  (None, 1, 1),
];

/// Collapsed coordinate $overline(eta)$.
///
/// Close to $xi_3 = 1$ the denominator is floored at `eps`, so the value stays
/// finite but grows without bound.
pub fn collapsed_coord(xi1: f64, xi3: f64, eps: f64) -> f64 {
  let denom = 1.0 - xi3;
  let guarded = clamp_denominator(denom, eps);
  if guarded != denom {
    trace!(xi3, "collapsed coordinate denominator clamped");
  }
  2.0 * (1.0 + xi1) / guarded - 1.0
}

/// The three pairs of 1D linear blending factors.
/// Each pair sums to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blending {
  pub l: [f64; 2],
  pub m: [f64; 2],
  pub n: [f64; 2],
}
impl Blending {
  pub fn new(xi: &RefCoord, eps: f64) -> Self {
    let eta_bar = collapsed_coord(xi[0], xi[2], eps);
    Self {
      l: linear_pair(eta_bar),
      m: linear_pair(xi[1]),
      n: linear_pair(xi[2]),
    }
  }

  fn vertex_factors(&self, ivertex: usize) -> [f64; 3] {
    let (il, im, in_) = VERTEX_FACTORS[ivertex];
    let l = il.map_or(1.0, |il| self.l[il]);
    [l, self.m[im], self.n[in_]]
  }
}

fn linear_pair(t: f64) -> [f64; 2] {
  [0.5 * (1.0 - t), 0.5 * (1.0 + t)]
}

pub fn shape_functions_eps(xi: &RefCoord, eps: f64) -> na::SVector<f64, NVERTICES> {
  let blending = Blending::new(xi, eps);
  na::SVector::from_fn(|a, _| blending.vertex_factors(a).iter().product())
}

pub fn shape_functions(xi: &RefCoord) -> na::SVector<f64, NVERTICES> {
  shape_functions_eps(xi, COLLAPSE_EPS)
}

/// Gradients by the product rule through the collapsed coordinate.
///
/// Where the denominator is clamped it is constant in $xi_3$.
pub fn shape_gradients_eps(xi: &RefCoord, eps: f64) -> na::SMatrix<f64, 3, NVERTICES> {
  let blending = Blending::new(xi, eps);

  let denom = 1.0 - xi[2];
  let guarded = clamp_denominator(denom, eps);
  let deta_dxi3 = if guarded == denom {
    2.0 * (1.0 + xi[0]) / guarded.powi(2)
  } else {
    0.0
  };
  let deta = na::Vector3::new(2.0 / guarded, 0.0, deta_dxi3);

  let pair_sign = |i: usize| if i == 0 { -0.5 } else { 0.5 };

  let mut grads = na::SMatrix::<f64, 3, NVERTICES>::zeros();
  for (a, &(il, im, in_)) in VERTEX_FACTORS.iter().enumerate() {
    let [l, m, n] = blending.vertex_factors(a);
    let dl = il.map_or(na::Vector3::zeros(), |il| pair_sign(il) * deta);
    let dm = na::Vector3::new(0.0, pair_sign(im), 0.0);
    let dn = na::Vector3::new(0.0, 0.0, pair_sign(in_));
    grads.set_column(a, &(dl * m * n + dm * l * n + dn * l * m));
  }
  grads
}

pub fn shape_gradients(xi: &RefCoord) -> na::SMatrix<f64, 3, NVERTICES> {
  shape_gradients_eps(xi, COLLAPSE_EPS)
}

/// Physical point of the reference cube coordinate `xi` for a prism with vertices `vertices`.
pub fn map_from_cube(xi: &RefCoord, vertices: &[Coord; NVERTICES]) -> Coord {
  vertices
    .iter()
    .zip(shape_functions(xi).iter())
    .map(|(v, &w)| w * v)
    .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prism;
impl ReferenceElement<NVERTICES> for Prism {
  const NAME: &'static str = "prism";

  fn ref_vertices() -> [RefCoord; NVERTICES] {
    REF_VERTICES.map(RefCoord::from)
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
