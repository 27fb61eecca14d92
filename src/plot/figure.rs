use super::{Color, RenderOptions, View, COLOR_CYCLE};
use crate::{util, Coord};

use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
  pub from: Coord,
  pub to: Coord,
  /// Taken from the color cycle if unset.
  pub color: Option<Color>,
  pub width: f64,
}
impl Line {
  pub fn new(from: Coord, to: Coord) -> Self {
    Self {
      from,
      to,
      color: None,
      width: 1.5,
    }
  }
  pub fn color(mut self, color: Color) -> Self {
    self.color = Some(color);
    self
  }
  pub fn width(mut self, width: f64) -> Self {
    self.width = width;
    self
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
  pub points: Vec<Coord>,
  /// Taken from the color cycle if unset.
  pub color: Option<Color>,
  /// Marker area in square points.
  pub size: f64,
  pub alpha: f64,
  /// Legend entry.
  pub label: Option<String>,
}
impl Scatter {
  pub fn new(points: Vec<Coord>) -> Self {
    Self {
      points,
      color: None,
      size: 36.0,
      alpha: 1.0,
      label: None,
    }
  }
  pub fn color(mut self, color: Color) -> Self {
    self.color = Some(color);
    self
  }
  pub fn size(mut self, size: f64) -> Self {
    self.size = size;
    self
  }
  pub fn alpha(mut self, alpha: f64) -> Self {
    self.alpha = alpha;
    self
  }
  pub fn label(mut self, label: impl Into<String>) -> Self {
    self.label = Some(label.into());
    self
  }

  /// Marker radius in canvas units.
  pub fn radius(&self) -> f64 {
    0.5 * self.size.sqrt()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
  #[default]
  Start,
  Middle,
  End,
}
impl Anchor {
  pub fn as_svg(&self) -> &'static str {
    match self {
      Anchor::Start => "start",
      Anchor::Middle => "middle",
      Anchor::End => "end",
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
  pub pos: Coord,
  /// Lines are separated by `\n`.
  pub text: String,
  pub color: Color,
  pub size: f64,
  pub bold: bool,
  pub anchor: Anchor,
}
impl Text {
  pub fn new(pos: Coord, text: impl Into<String>) -> Self {
    Self {
      pos,
      text: text.into(),
      color: Color::BLACK,
      size: 10.0,
      bold: false,
      anchor: Anchor::default(),
    }
  }
  pub fn color(mut self, color: Color) -> Self {
    self.color = color;
    self
  }
  pub fn size(mut self, size: f64) -> Self {
    self.size = size;
    self
  }
  pub fn bold(mut self) -> Self {
    self.bold = true;
    self
  }
  pub fn anchor(mut self, anchor: Anchor) -> Self {
    self.anchor = anchor;
    self
  }
}

/// Quiver arrow from `origin` along `dir`.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
  pub origin: Coord,
  pub dir: Coord,
  pub color: Color,
  /// Head length relative to the arrow length.
  pub head_ratio: f64,
  pub width: f64,
}
impl Arrow {
  pub fn new(origin: Coord, dir: Coord) -> Self {
    Self {
      origin,
      dir,
      color: Color::BLACK,
      head_ratio: 0.3,
      width: 1.5,
    }
  }
  pub fn color(mut self, color: Color) -> Self {
    self.color = color;
    self
  }
  pub fn head_ratio(mut self, head_ratio: f64) -> Self {
    self.head_ratio = head_ratio;
    self
  }
  pub fn tip(&self) -> Coord {
    self.origin + self.dir
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
  pub title: Option<String>,
  pub view: View,
  /// Fixed data range per axis, otherwise fitted to the content.
  pub limits: [Option<(f64, f64)>; 3],
  pub axis_labels: [Option<String>; 3],
  pub axis_visible: bool,
  /// Relative extent of the axes box along x, y and z.
  pub box_aspect: [f64; 3],
  pub legend: bool,
  pub lines: Vec<Line>,
  pub scatters: Vec<Scatter>,
  pub texts: Vec<Text>,
  pub arrows: Vec<Arrow>,
  ncycled: usize,
}
impl Default for Figure {
  fn default() -> Self {
    Self {
      title: None,
      view: View::default(),
      limits: [None; 3],
      axis_labels: [None, None, None],
      axis_visible: true,
      box_aspect: [4.0, 4.0, 3.0],
      legend: false,
      lines: Vec::new(),
      scatters: Vec::new(),
      texts: Vec::new(),
      arrows: Vec::new(),
      ncycled: 0,
    }
  }
}

impl Figure {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
    self.title = Some(title.into());
    self
  }
  pub fn set_view(&mut self, view: View) -> &mut Self {
    self.view = view;
    self
  }
  pub fn set_lim(&mut self, axis: usize, lo: f64, hi: f64) -> &mut Self {
    self.limits[axis] = Some((lo, hi));
    self
  }
  /// Same limits on all three axes.
  pub fn set_lims(&mut self, lo: f64, hi: f64) -> &mut Self {
    self.limits = [Some((lo, hi)); 3];
    self
  }
  pub fn set_axis_labels(&mut self, labels: [&str; 3]) -> &mut Self {
    self.axis_labels = labels.map(|l| Some(l.to_owned()));
    self
  }
  pub fn set_axis_visible(&mut self, visible: bool) -> &mut Self {
    self.axis_visible = visible;
    self
  }
  pub fn set_box_aspect(&mut self, aspect: [f64; 3]) -> &mut Self {
    self.box_aspect = aspect;
    self
  }
  pub fn show_legend(&mut self) -> &mut Self {
    self.legend = true;
    self
  }

  fn next_color(&mut self) -> Color {
    let color = COLOR_CYCLE[self.ncycled % COLOR_CYCLE.len()];
    self.ncycled += 1;
    color
  }

  pub fn add_line(&mut self, mut line: Line) -> &mut Self {
    if line.color.is_none() {
      line.color = Some(self.next_color());
    }
    self.lines.push(line);
    self
  }
  pub fn add_scatter(&mut self, mut scatter: Scatter) -> &mut Self {
    if scatter.color.is_none() {
      scatter.color = Some(self.next_color());
    }
    self.scatters.push(scatter);
    self
  }
  pub fn add_text(&mut self, text: Text) -> &mut Self {
    self.texts.push(text);
    self
  }
  pub fn add_arrow(&mut self, arrow: Arrow) -> &mut Self {
    self.arrows.push(arrow);
    self
  }

  /// All data points contributing to fitted limits.
  fn data_points(&self) -> impl Iterator<Item = Coord> + '_ {
    let lines = self.lines.iter().flat_map(|l| [l.from, l.to]);
    let scatters = self.scatters.iter().flat_map(|s| s.points.iter().copied());
    let arrows = self.arrows.iter().flat_map(|a| [a.origin, a.tip()]);
    let texts = self.texts.iter().map(|t| t.pos);
    lines.chain(scatters).chain(arrows).chain(texts)
  }

  /// Effective data range per axis.
  ///
  /// Unset limits are fitted to the content with a small padding.
  /// Degenerate ranges, fitted or set, are widened to unit length.
  pub fn data_limits(&self) -> [(f64, f64); 3] {
    std::array::from_fn(|axis| {
      if let Some((lo, hi)) = self.limits[axis] {
        return if is_degenerate(lo, hi) {
          widen(lo, hi)
        } else {
          (lo, hi)
        };
      }
      match util::bounds(self.data_points().map(|p| p[axis])) {
        None => (-1.0, 1.0),
        Some((lo, hi)) if is_degenerate(lo, hi) => widen(lo, hi),
        Some((lo, hi)) => {
          let pad = 0.05 * (hi - lo);
          (lo - pad, hi + pad)
        }
      }
    })
  }

  pub fn to_svg(&self, options: &RenderOptions) -> String {
    debug!(
      title = self.title.as_deref().unwrap_or_default(),
      nlines = self.lines.len(),
      nscatters = self.scatters.len(),
      "rendering figure"
    );
    super::svg::render(self, options)
  }
}

fn is_degenerate(lo: f64, hi: f64) -> bool {
  (hi - lo).abs() <= f64::EPSILON * hi.abs().max(1.0)
}
/// Unit range centered on the midpoint.
fn widen(lo: f64, hi: f64) -> (f64, f64) {
  let mid = 0.5 * (lo + hi);
  (mid - 0.5, mid + 0.5)
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn colors_cycle_in_order() {
    let mut fig = Figure::new();
    for _ in 0..11 {
      fig.add_line(Line::new(Coord::zeros(), Coord::x()));
    }
    fig.add_scatter(Scatter::new(vec![Coord::zeros()]).color(Color::RED));
    assert_eq!(fig.lines[0].color, Some(COLOR_CYCLE[0]));
    assert_eq!(fig.lines[1].color, Some(COLOR_CYCLE[1]));
    assert_eq!(fig.lines[10].color, Some(COLOR_CYCLE[0]));
    assert_eq!(fig.scatters[0].color, Some(Color::RED));
  }

  #[test]
  fn limits_fit_content() {
    let mut fig = Figure::new();
    fig.add_scatter(Scatter::new(vec![
      Coord::new(0.0, 1.0, 2.0),
      Coord::new(10.0, 1.0, 4.0),
    ]));
    fig.set_lim(2, -1.0, 1.0);
    let [x, y, z] = fig.data_limits();
    assert_eq!(x, (-0.5, 10.5));
    assert_eq!(y, (0.5, 1.5));
    assert_eq!(z, (-1.0, 1.0));
  }

  #[test]
  fn collapsed_limits_are_widened() {
    let mut fig = Figure::new();
    fig.add_scatter(Scatter::new(vec![Coord::new(2.0, 0.0, 3.0)]));
    fig.set_lim(0, 1.0, 1.0);
    let [x, _, z] = fig.data_limits();
    assert_eq!(x, (0.5, 1.5));
    assert_eq!(z, (2.5, 3.5));

    let svg = fig.to_svg(&RenderOptions::default());
    assert!(!svg.contains("NaN"));
  }
}
