//! Reference elements and their isoparametric images.
//!
//! A reference element fixes the vertex numbering, the vertex shape functions
//! and the wireframe of a cell in the reference cube $[-1,1]^3$.
//! A physical element pairs it with physical vertex coordinates and maps
//! reference points through $x(xi) = sum_a N_a (xi) X_a$.

pub mod hex;
pub mod prism;

use crate::{Coord, RefCoord};

use itertools::Itertools as _;
use std::marker::PhantomData;

pub trait ReferenceElement<const N: usize> {
  const NAME: &'static str;

  /// Reference coordinates of the vertices, in vertex order.
  fn ref_vertices() -> [RefCoord; N];
  fn vertex_labels() -> [&'static str; N];
  /// Vertex pairs drawn as the wireframe of the element.
  fn edges() -> &'static [(usize, usize)];

  /// Vertex weights $N_a (xi)$.
  fn shape_functions(xi: &RefCoord) -> na::SVector<f64, N>;
  /// Partial derivatives $partial N_a / partial xi_i$ in the columns.
  fn shape_gradients(xi: &RefCoord) -> na::SMatrix<f64, 3, N>;
}

pub type HexElement = PhysicalElement<hex::Hexahedron, 8>;
pub type PrismElement = PhysicalElement<prism::Prism, 6>;

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalElement<R, const N: usize> {
  /// The vertex coordinates in the columns of a matrix.
  vertices: na::SMatrix<f64, 3, N>,
  reference: PhantomData<R>,
}

impl<R: ReferenceElement<N>, const N: usize> PhysicalElement<R, N> {
  pub fn new(vertices: na::SMatrix<f64, 3, N>) -> Self {
    Self {
      vertices,
      reference: PhantomData,
    }
  }
  pub fn from_points(points: [Coord; N]) -> Self {
    Self::new(na::SMatrix::from_columns(&points))
  }
  /// The element whose physical vertices are its reference vertices.
  pub fn reference() -> Self {
    Self::from_points(R::ref_vertices())
  }

  pub fn nvertices(&self) -> usize {
    N
  }
  pub fn vertices(&self) -> &na::SMatrix<f64, 3, N> {
    &self.vertices
  }
  pub fn vertex(&self, ivertex: usize) -> Coord {
    self.vertices.column(ivertex).into_owned()
  }
  pub fn vertex_iter(&self) -> impl Iterator<Item = Coord> + '_ {
    self.vertices.column_iter().map(|c| c.into_owned())
  }
  pub fn labels(&self) -> [&'static str; N] {
    R::vertex_labels()
  }

  /// Physical point of the reference coordinate `xi`.
  ///
  /// Reference points outside of the element extrapolate.
  pub fn map(&self, xi: &RefCoord) -> Coord {
    self.vertices * R::shape_functions(xi)
  }
  pub fn map_points(&self, xis: &[RefCoord]) -> Vec<Coord> {
    xis.iter().map(|xi| self.map(xi)).collect()
  }

  /// Jacobian $J_(i j) = partial x_i / partial xi_j$ of the mapping.
  pub fn jacobian(&self, xi: &RefCoord) -> na::Matrix3<f64> {
    self.vertices * R::shape_gradients(xi).transpose()
  }
  pub fn jacobian_det(&self, xi: &RefCoord) -> f64 {
    self.jacobian(xi).determinant()
  }

  /// Arithmetic mean of the vertices.
  pub fn centroid(&self) -> Coord {
    self.vertices.column_mean()
  }

  /// Largest distance between two vertices.
  pub fn diameter(&self) -> f64 {
    (0..N)
      .tuple_combinations()
      .map(|(i, j)| (self.vertex(j) - self.vertex(i)).norm())
      .fold(0.0, f64::max)
  }

  pub fn edges(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
    R::edges()
      .iter()
      .map(|&(i, j)| (self.vertex(i), self.vertex(j)))
  }
}
