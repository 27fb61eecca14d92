//! Reference-element geometry and isoparametric mappings.
//!
//! - Vertex shape functions of the trilinear hexahedron and the collapsed prism.
//! - Mapping of reference points into physical elements and its Jacobian.
//! - Documentation figures of reference domains and mapped elements (SVG, VTK).

extern crate nalgebra as na;

pub mod element;
pub mod error;
pub mod io;
pub mod plot;
pub mod sample;
pub mod scene;
pub mod util;

pub use element::{hex::Hexahedron, prism::Prism, HexElement, PhysicalElement, PrismElement};
pub use error::{Error, Result};

/// Point in the reference domain $[-1,1]^3$.
pub type RefCoord = na::Vector3<f64>;
/// Point in physical space.
pub type Coord = na::Vector3<f64>;
