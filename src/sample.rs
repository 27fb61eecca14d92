//! Random reference points for visualizing the mappings.

use crate::RefCoord;

use rand::Rng;

/// Points uniformly distributed in the reference cube $[-1,1]^3$.
pub fn reference_cube<R: Rng + ?Sized>(rng: &mut R, npts: usize) -> Vec<RefCoord> {
  (0..npts)
    .map(|_| {
      RefCoord::new(
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
      )
    })
    .collect()
}

/// Points inside the collapsed reference prism.
///
/// $(xi_1, xi_3)$ lies in the triangle $xi_1 + xi_3 <= 0$ of $[-1,1]^2$ and
/// $xi_2$ covers $[-1,1]$. $xi_3$ is drawn uniformly below $-xi_1$, so the
/// density is not uniform over the triangle.
pub fn reference_prism<R: Rng + ?Sized>(rng: &mut R, npts: usize) -> Vec<RefCoord> {
  (0..npts)
    .map(|_| {
      let xi1 = rng.gen_range(-1.0..=1.0);
      let xi3 = rng.gen_range(-1.0..=-xi1);
      let xi2 = rng.gen_range(-1.0..=1.0);
      RefCoord::new(xi1, xi2, xi3)
    })
    .collect()
}

pub fn is_in_reference_cube(xi: &RefCoord) -> bool {
  xi.iter().all(|c| (-1.0..=1.0).contains(c))
}

pub fn is_in_reference_prism(xi: &RefCoord) -> bool {
  is_in_reference_cube(xi) && xi[0] + xi[2] <= 0.0
}
