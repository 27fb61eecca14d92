extern crate nalgebra as na;

use refmap::{
  element::{hex, prism},
  sample, scene, Coord, HexElement, PrismElement, RefCoord,
};

use approx::assert_relative_eq;
use rand::{rngs::StdRng, SeedableRng as _};

#[test]
fn hex_center_maps_to_vertex_mean() {
  let hex = scene::demo_hex();
  let x = hex.map(&RefCoord::zeros());
  assert_relative_eq!(x, hex.centroid(), epsilon = 1e-14);
}

#[test]
fn hex_interpolates_its_vertices() {
  let hex = scene::demo_hex();
  let vertices: [Coord; 8] = std::array::from_fn(|i| hex.vertex(i));
  for (signs, vertex) in hex::VERTEX_SIGNS.iter().zip(&vertices) {
    let xi = RefCoord::from(*signs);
    assert_relative_eq!(hex::x_of_xi(&xi, &vertices), *vertex, epsilon = 1e-14);
  }
}

#[test]
fn explicit_and_matrix_mappings_agree() {
  let mut rng = StdRng::seed_from_u64(42);
  let hex = scene::demo_hex();
  let vertices: [Coord; 8] = std::array::from_fn(|i| hex.vertex(i));
  for xi in sample::reference_cube(&mut rng, 200) {
    assert_relative_eq!(hex::x_of_xi(&xi, &vertices), hex.map(&xi), epsilon = 1e-12);
  }

  let prism = scene::demo_prism();
  let vertices: [Coord; 6] = std::array::from_fn(|i| prism.vertex(i));
  for xi in sample::reference_prism(&mut rng, 200) {
    assert_relative_eq!(prism::map_from_cube(&xi, &vertices), prism.map(&xi), epsilon = 1e-12);
  }
}

#[test]
fn hex_jacobian_positive_inside() {
  let mut rng = StdRng::seed_from_u64(3);
  let hex = scene::demo_hex();
  for xi in sample::reference_cube(&mut rng, 300) {
    assert!(hex.jacobian_det(&xi) > 0.0);
  }
}

#[test]
fn prism_weights_partition_unity() {
  let mut rng = StdRng::seed_from_u64(11);
  for xi in sample::reference_prism(&mut rng, 600) {
    assert!(sample::is_in_reference_prism(&xi));
    assert_relative_eq!(prism::shape_functions(&xi).sum(), 1.0, epsilon = 1e-12);
  }
}

#[test]
fn prism_survives_collapsed_face() {
  let prism = scene::demo_prism();
  for xi1 in [-1.0, 0.0, 1.0] {
    let xi = RefCoord::new(xi1, 0.3, 1.0);
    let weights = prism::shape_functions(&xi);
    assert!(weights.iter().all(|w| w.is_finite()));
    assert!(prism.map(&xi).iter().all(|c| c.is_finite()));
  }
}

#[test]
fn prism_bottom_face_ignores_top_vertices() {
  let prism = scene::demo_prism();
  let [a, b, c, d] = [0, 1, 2, 3].map(|i| prism.vertex(i));
  let (s, t) = (0.25, -0.5);
  let xi = RefCoord::new(s, t, -1.0);
  let weights = prism::shape_functions(&xi);
  assert_relative_eq!(weights[4], 0.0);
  assert_relative_eq!(weights[5], 0.0);

  let (l0, l1) = (0.5 * (1.0 - s), 0.5 * (1.0 + s));
  let (m0, m1) = (0.5 * (1.0 - t), 0.5 * (1.0 + t));
  let bilinear = l0 * m0 * a + l1 * m0 * b + l0 * m1 * c + l1 * m1 * d;
  assert_relative_eq!(prism.map(&xi), bilinear, epsilon = 1e-14);
}

#[test]
fn reference_prism_maps_identically() {
  let mut rng = StdRng::seed_from_u64(5);
  let prism = PrismElement::reference();
  for xi in sample::reference_prism(&mut rng, 300) {
    if 1.0 - xi[2] < 1e-6 {
      continue;
    }
    assert_relative_eq!(prism.map(&xi), xi, epsilon = 1e-12);
    assert_relative_eq!(prism.jacobian_det(&xi), 1.0, epsilon = 1e-9);
  }
}

#[test]
fn reference_hex_maps_identically() {
  let hex = HexElement::reference();
  let xi = RefCoord::new(0.1, -0.7, 0.4);
  assert_relative_eq!(hex.map(&xi), xi, epsilon = 1e-14);
  assert_relative_eq!(hex.jacobian(&xi), na::Matrix3::identity(), epsilon = 1e-14);
}
