use itertools::{Itertools as _, MinMaxResult};

/// Replaces a denominator of magnitude below `eps` by `eps`.
///
/// Turns the removable singularity of a collapsed coordinate into a large but
/// finite value. Small negative denominators become positive as well.
pub fn clamp_denominator(denom: f64, eps: f64) -> f64 {
  if denom.abs() < eps {
    eps
  } else {
    denom
  }
}

/// Smallest interval containing all values, `None` for an empty iterator.
pub fn bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
  match values.into_iter().minmax_by(|a, b| a.total_cmp(b)) {
    MinMaxResult::NoElements => None,
    MinMaxResult::OneElement(v) => Some((v, v)),
    MinMaxResult::MinMax(min, max) => Some((min, max)),
  }
}

pub fn deg2rad(deg: f64) -> f64 {
  deg * std::f64::consts::PI / 180.0
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn clamp_keeps_regular_values() {
    assert_eq!(clamp_denominator(0.5, 1e-12), 0.5);
    assert_eq!(clamp_denominator(-2.0, 1e-12), -2.0);
  }

  #[test]
  fn clamp_small_values_to_positive_eps() {
    assert_eq!(clamp_denominator(0.0, 1e-12), 1e-12);
    assert_eq!(clamp_denominator(-0.0, 1e-12), 1e-12);
    assert_eq!(clamp_denominator(1e-15, 1e-12), 1e-12);
    assert_eq!(clamp_denominator(-1e-15, 1e-12), 1e-12);
    assert_eq!(clamp_denominator(-1e-12, 1e-12), -1e-12);
  }

  #[test]
  fn bounds_of_values() {
    assert_eq!(bounds([3.0, -1.0, 2.0]), Some((-1.0, 3.0)));
    assert_eq!(bounds([4.0]), Some((4.0, 4.0)));
    assert_eq!(bounds(std::iter::empty()), None);
  }
}
