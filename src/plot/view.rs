use crate::util::deg2rad;

/// Orthographic camera given by elevation and azimuth in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
  pub elev: f64,
  pub azim: f64,
}
impl Default for View {
  fn default() -> Self {
    Self::new(30.0, -60.0)
  }
}

/// Screen coordinates (y pointing up) and depth towards the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
  pub x: f64,
  pub y: f64,
  pub depth: f64,
}

impl View {
  pub fn new(elev: f64, azim: f64) -> Self {
    Self { elev, azim }
  }

  /// Screen right, screen up and viewing direction (pointing at the eye).
  pub fn basis(&self) -> [na::Vector3<f64>; 3] {
    let (se, ce) = deg2rad(self.elev).sin_cos();
    let (sa, ca) = deg2rad(self.azim).sin_cos();
    let right = na::Vector3::new(-sa, ca, 0.0);
    let up = na::Vector3::new(-se * ca, -se * sa, ce);
    let eye = na::Vector3::new(ce * ca, ce * sa, se);
    [right, up, eye]
  }

  pub fn project(&self, p: &na::Vector3<f64>) -> Projected {
    let [right, up, eye] = self.basis();
    Projected {
      x: right.dot(p),
      y: up.dot(p),
      depth: eye.dot(p),
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  use approx::assert_relative_eq;

  #[test]
  fn basis_is_orthonormal() {
    for view in [View::default(), View::new(22.0, -55.0), View::new(-40.0, 130.0)] {
      let b = na::Matrix3::from_columns(&view.basis());
      assert_relative_eq!(b.transpose() * b, na::Matrix3::identity(), epsilon = 1e-14);
    }
  }

  #[test]
  fn vertical_axis_points_up() {
    let view = View::new(0.0, 0.0);
    let p = view.project(&na::Vector3::new(0.0, 0.0, 1.0));
    assert_relative_eq!(p.x, 0.0);
    assert_relative_eq!(p.y, 1.0);

    // looking down the x axis
    let p = view.project(&na::Vector3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(p.x, 0.0);
    assert_relative_eq!(p.depth, 1.0);
  }
}
