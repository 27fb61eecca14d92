//! Documentation figures of the reference elements and their mappings.

use crate::{
  element::{HexElement, PhysicalElement, PrismElement, ReferenceElement},
  plot::{Anchor, Arrow, Color, Figure, Line, Scatter, Text, View},
  Coord, RefCoord,
};

use tracing::debug;

/// Physical hexahedron of the hexahedron demo, vertices A B C D A' B' C' D'.
pub fn demo_hex() -> HexElement {
  HexElement::from_points([
    Coord::new(0.0, 0.0, 0.0),
    Coord::new(2.0, 0.2, 0.0),
    Coord::new(2.2, 1.8, 0.1),
    Coord::new(0.1, 1.7, 0.0),
    Coord::new(0.0, 0.0, 1.5),
    Coord::new(2.1, 0.3, 1.6),
    Coord::new(2.3, 1.9, 1.7),
    Coord::new(0.2, 1.8, 1.6),
  ])
}

/// Physical prism of the prism demo.
///
/// The triangle A B E is extruded by a constant shift into D C F.
pub fn demo_prism() -> PrismElement {
  let a = Coord::new(0.0, 0.0, 0.0);
  let b = Coord::new(2.0, 0.2, 0.3);
  let e = Coord::new(0.5, 1.4, 0.1);
  let shift = Coord::new(0.3, 0.4, 1.6);
  PrismElement::from_points([a, b, b + shift, a + shift, e, e + shift])
}

fn add_wireframe<R: ReferenceElement<N>, const N: usize>(
  fig: &mut Figure,
  element: &PhysicalElement<R, N>,
  style: impl Fn(Line) -> Line,
) {
  for (from, to) in element.edges() {
    fig.add_line(style(Line::new(from, to)));
  }
}

pub fn hex_physical_figure(element: &HexElement, mapped: &[Coord]) -> Figure {
  let mut fig = Figure::new();
  add_wireframe(&mut fig, element, |l| l);
  fig
    .add_scatter(Scatter::new(element.vertex_iter().collect()).size(60.0).label("Nodes"))
    .add_scatter(Scatter::new(mapped.to_vec()).size(10.0).label("x(ξ)"))
    .set_title("Physical HEX: explicit x(ξ)")
    .show_legend();
  debug!(npoints = mapped.len(), "hexahedron figure assembled");
  fig
}

pub fn reference_cube_figure(xis: &[RefCoord]) -> Figure {
  let mut fig = Figure::new();
  fig
    .add_scatter(Scatter::new(xis.to_vec()).size(10.0))
    .set_lims(-1.0, 1.0)
    .set_title("Reference cube (ξ)");
  fig
}

pub fn prism_reference_figure(xis: &[RefCoord]) -> Figure {
  let mut fig = Figure::new();
  fig
    .add_scatter(Scatter::new(xis.to_vec()).size(10.0).alpha(0.8))
    .set_title("Reference prism embedded in reference cube")
    .set_lims(-1.0, 1.0)
    .set_axis_labels(["ξ₁", "ξ₂", "ξ₃"]);
  fig
}

pub fn prism_physical_figure(element: &PrismElement, mapped: &[Coord]) -> Figure {
  let mut fig = Figure::new();
  add_wireframe(&mut fig, element, |l| l.color(Color::BLACK).width(1.5));
  fig.add_scatter(
    Scatter::new(element.vertex_iter().collect())
      .size(70.0)
      .color(Color::RED)
      .label("Vertices"),
  );

  let offset = Coord::new(0.03, 0.03, 0.03);
  for (vertex, label) in element.vertex_iter().zip(element.labels()) {
    fig.add_text(Text::new(vertex + offset, label).size(12.0).bold());
  }

  fig
    .add_scatter(Scatter::new(mapped.to_vec()).size(10.0).alpha(0.7).label("Mapped points"))
    .set_title("Physical prism (collapsed mapping from ref cube)")
    .set_axis_labels(["x", "y", "z"])
    .show_legend();
  debug!(npoints = mapped.len(), "prism figure assembled");
  fig
}

/// Vertex table of the reference-domain figure.
///
/// Index 2 is left out and 4..=7 all sit at the same corner.
pub const REF_DOMAIN_VERTICES: [(usize, [f64; 3]); 7] = [
  (0, [-1.0, -1.0, -1.0]),
  (1, [1.0, -1.0, -1.0]),
  (3, [-1.0, 1.0, -1.0]),
  (4, [-1.0, -1.0, 1.0]),
  (5, [-1.0, -1.0, 1.0]),
  (6, [-1.0, -1.0, 1.0]),
  (7, [-1.0, -1.0, 1.0]),
];

pub const REF_DOMAIN_LETTERS: [&str; 8] = ["A", "B", " ", "C", "E", " ", " ", " "];

#[rustfmt::skip]
pub const REF_DOMAIN_EDGES: [(usize, usize); 10] = [
  (0, 1), (3, 0),
  (4, 5), (5, 6), (6, 7), (7, 4),
  (0, 4), (1, 5), (3, 7), (1, 3),
];

fn ref_domain_vertex(idx: usize) -> Option<Coord> {
  REF_DOMAIN_VERTICES
    .iter()
    .find(|(i, _)| *i == idx)
    .map(|&(_, v)| Coord::from(v))
}

/// Annotated reference domain with its axes.
pub fn reference_domain_figure() -> Figure {
  let mut fig = Figure::new();
  fig
    .set_box_aspect([1.0, 1.0, 1.0])
    .set_lims(-2.0, 2.0)
    .set_axis_visible(false)
    .set_view(View::new(22.0, -55.0));

  for &(i, j) in &REF_DOMAIN_EDGES {
    if let (Some(from), Some(to)) = (ref_domain_vertex(i), ref_domain_vertex(j)) {
      fig.add_line(Line::new(from, to).color(Color::BLACK).width(1.4));
    }
  }

  let points = REF_DOMAIN_VERTICES.iter().map(|&(_, v)| Coord::from(v)).collect();
  fig.add_scatter(Scatter::new(points).color(Color::BLUE).size(45.0));

  for &(idx, [x, y, z]) in &REF_DOMAIN_VERTICES {
    let letter = REF_DOMAIN_LETTERS[idx];
    let label = format!("{letter}\n({x:+.0}, {y:+.0}, {z:+.0})");
    fig.add_text(Text::new(Coord::new(x, y, z), label).color(Color::BLUE).size(9.0));
  }

  for (axis, name) in ["η₁", "η₂", "η₃"].into_iter().enumerate() {
    let dir = 1.5 * Coord::ith(axis, 1.0);
    fig.add_arrow(Arrow::new(Coord::zeros(), dir).color(Color::RED).head_ratio(0.08));
    let pos = 1.6 * Coord::ith(axis, 1.0);
    fig.add_text(
      Text::new(pos, name)
        .color(Color::RED)
        .size(12.0)
        .anchor(Anchor::Start),
    );
  }

  fig
}

#[cfg(test)]
mod test {
  use super::*;

  use approx::assert_relative_eq;

  #[test]
  fn demo_prism_vertex_order() {
    let prism = demo_prism();
    let shift = Coord::new(0.3, 0.4, 1.6);
    assert_relative_eq!(prism.vertex(3), prism.vertex(0) + shift);
    assert_relative_eq!(prism.vertex(2), prism.vertex(1) + shift);
    assert_relative_eq!(prism.vertex(5), prism.vertex(4) + shift);
  }

  #[test]
  fn reference_domain_tables() {
    let fig = reference_domain_figure();
    assert_eq!(fig.lines.len(), REF_DOMAIN_EDGES.len());
    assert_eq!(fig.scatters[0].points.len(), 7);
    assert_eq!(fig.texts.len(), 7 + 3);
    assert_eq!(fig.arrows.len(), 3);
    assert_eq!(fig.texts[0].text, "A\n(-1, -1, -1)");
    assert_eq!(fig.texts[2].text, "C\n(-1, +1, -1)");
    assert!(!fig.axis_visible);
    let axis_names: Vec<_> = fig.texts[7..].iter().map(|t| t.text.as_str()).collect();
    assert_eq!(axis_names, ["η₁", "η₂", "η₃"]);
    assert!(fig.texts[7..].iter().all(|t| t.anchor == Anchor::Start));
  }

  #[test]
  fn prism_figure_labels_vertices() {
    let prism = demo_prism();
    let fig = prism_physical_figure(&prism, &[prism.centroid()]);
    assert_eq!(fig.lines.len(), 9);
    assert!(fig.lines.iter().all(|l| l.color == Some(Color::BLACK)));
    let labels: Vec<_> = fig.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(labels, ["A", "B", "C", "D", "E", "F"]);
    assert_eq!(fig.scatters[1].label.as_deref(), Some("Mapped points"));
  }

  #[test]
  fn hex_figure_has_wireframe_and_series() {
    let hex = demo_hex();
    let fig = hex_physical_figure(&hex, &[hex.centroid()]);
    assert_eq!(fig.lines.len(), 12);
    assert_eq!(fig.scatters.len(), 2);
    assert!(fig.legend);
  }
}
