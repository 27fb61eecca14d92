//! SVG markup for [`Figure`]s.

use super::{figure::Figure, view::Projected, Color, RenderOptions};
use crate::Coord;

use itertools::Itertools as _;

const TITLE_HEIGHT: f64 = 28.0;
const AXIS_LABEL_OFFSET: f64 = 26.0;
const TICK_LABEL_OFFSET: f64 = 12.0;
const LINE_SPACING: f64 = 1.2;

/// Maps data coordinates onto the canvas.
struct Canvas {
  figure_view: super::View,
  limits: [(f64, f64); 3],
  aspect: [f64; 3],
  scale: f64,
  origin: (f64, f64),
}
impl Canvas {
  fn new(fig: &Figure, options: &RenderOptions) -> Self {
    let limits = fig.data_limits();
    let max_aspect = fig.box_aspect.iter().copied().fold(0.0, f64::max);
    let aspect = fig.box_aspect.map(|a| a / max_aspect);

    let mut canvas = Self {
      figure_view: fig.view,
      limits,
      aspect,
      scale: 1.0,
      origin: (0.0, 0.0),
    };

    let corners: Vec<Projected> = canvas
      .box_corners()
      .iter()
      .map(|c| canvas.project(c))
      .collect();
    let (xmin, xmax) = crate::util::bounds(corners.iter().map(|p| p.x)).unwrap_or((-1.0, 1.0));
    let (ymin, ymax) = crate::util::bounds(corners.iter().map(|p| p.y)).unwrap_or((-1.0, 1.0));

    let top = options.margin + if fig.title.is_some() { TITLE_HEIGHT } else { 0.0 };
    let avail_w = (options.width - 2.0 * options.margin).max(1.0);
    let avail_h = (options.height - top - options.margin).max(1.0);
    let scale = (avail_w / (xmax - xmin).max(1e-12)).min(avail_h / (ymax - ymin).max(1e-12));

    canvas.scale = scale;
    canvas.origin = (
      0.5 * options.width - scale * 0.5 * (xmin + xmax),
      top + 0.5 * avail_h + scale * 0.5 * (ymin + ymax),
    );
    canvas
  }

  /// Data point in the centered unit box scaled by the box aspect.
  fn normalize(&self, p: &Coord) -> na::Vector3<f64> {
    na::Vector3::from_fn(|i, _| {
      let (lo, hi) = self.limits[i];
      ((p[i] - lo) / (hi - lo) - 0.5) * self.aspect[i]
    })
  }

  fn project(&self, p: &Coord) -> Projected {
    self.figure_view.project(&self.normalize(p))
  }

  fn screen(&self, p: &Coord) -> (f64, f64, f64) {
    let proj = self.project(p);
    (
      self.origin.0 + self.scale * proj.x,
      self.origin.1 - self.scale * proj.y,
      proj.depth,
    )
  }

  /// Corners of the data box in data coordinates, bit `i` of the index
  /// selecting the upper limit of axis `i`.
  fn box_corners(&self) -> [Coord; 8] {
    std::array::from_fn(|icorner| {
      Coord::from_fn(|i, _| {
        let (lo, hi) = self.limits[i];
        if icorner & (1 << i) == 0 {
          lo
        } else {
          hi
        }
      })
    })
  }

  fn box_center_screen(&self) -> (f64, f64) {
    let center = Coord::from_fn(|i, _| 0.5 * (self.limits[i].0 + self.limits[i].1));
    let (x, y, _) = self.screen(&center);
    (x, y)
  }
}

pub fn render(fig: &Figure, options: &RenderOptions) -> String {
  let canvas = Canvas::new(fig, options);

  let mut svg = String::new();
  svg.push_str(&format!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="{font}">"#,
    w = fmt_num(options.width),
    h = fmt_num(options.height),
    font = escape(&options.font_family),
  ));
  svg.push('\n');
  svg.push_str(&format!(
    r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
    fmt_num(options.width),
    fmt_num(options.height),
    options.background
  ));
  svg.push('\n');

  if let Some(title) = &fig.title {
    svg.push_str(&format!(
      r#"<text x="{}" y="{}" font-size="14" text-anchor="middle">{}</text>"#,
      fmt_num(0.5 * options.width),
      fmt_num(options.margin + 0.5 * TITLE_HEIGHT),
      escape(title)
    ));
    svg.push('\n');
  }

  if fig.axis_visible {
    render_axes(fig, &canvas, &mut svg);
  }
  render_lines(fig, &canvas, &mut svg);
  render_arrows(fig, &canvas, &mut svg);
  render_markers(fig, &canvas, &mut svg);
  render_texts(fig, &canvas, &mut svg);
  if fig.legend {
    render_legend(fig, options, &mut svg);
  }

  svg.push_str("</svg>\n");
  svg
}

fn render_axes(fig: &Figure, canvas: &Canvas, svg: &mut String) {
  let corners = canvas.box_corners();

  svg.push_str(&format!(
    r#"<g class="axes" stroke="{}" stroke-width="0.8">"#,
    Color::GREY
  ));
  svg.push('\n');
  for (i, j) in (0..8usize).tuple_combinations() {
    // box edges connect corners differing in exactly one axis
    if (i ^ j).count_ones() != 1 {
      continue;
    }
    let (x1, y1, _) = canvas.screen(&corners[i]);
    let (x2, y2, _) = canvas.screen(&corners[j]);
    svg.push_str(&format!(
      r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
      fmt_num(x1),
      fmt_num(y1),
      fmt_num(x2),
      fmt_num(y2)
    ));
    svg.push('\n');
  }
  svg.push_str("</g>\n");

  // Edge carrying the ticks and the label of each axis, as the pair of
  // corner indices.
  let axis_edges = [(0b000, 0b001), (0b001, 0b011), (0b010, 0b110)];
  let center = canvas.box_center_screen();
  for (axis, &(c0, c1)) in axis_edges.iter().enumerate() {
    let (lo, hi) = canvas.limits[axis];
    for t in [0.0, 0.5, 1.0] {
      let p = corners[c0] + t * (corners[c1] - corners[c0]);
      let (x, y, _) = canvas.screen(&p);
      let (ox, oy) = outward(center, (x, y), TICK_LABEL_OFFSET);
      svg.push_str(&format!(
        r##"<text x="{}" y="{}" font-size="8" fill="#404040" text-anchor="middle">{}</text>"##,
        fmt_num(x + ox),
        fmt_num(y + oy),
        fmt_num(lo + t * (hi - lo))
      ));
      svg.push('\n');
    }

    if let Some(label) = &fig.axis_labels[axis] {
      let mid = corners[c0] + 0.5 * (corners[c1] - corners[c0]);
      let (x, y, _) = canvas.screen(&mid);
      let (ox, oy) = outward(center, (x, y), AXIS_LABEL_OFFSET);
      svg.push_str(&format!(
        r#"<text x="{}" y="{}" font-size="11" text-anchor="middle">{}</text>"#,
        fmt_num(x + ox),
        fmt_num(y + oy),
        escape(label)
      ));
      svg.push('\n');
    }
  }
}

/// Offset of length `dist` pointing from `center` towards `p`.
fn outward(center: (f64, f64), p: (f64, f64), dist: f64) -> (f64, f64) {
  let (dx, dy) = (p.0 - center.0, p.1 - center.1);
  let norm = dx.hypot(dy);
  if norm < 1e-9 {
    (0.0, dist)
  } else {
    (dist * dx / norm, dist * dy / norm)
  }
}

fn render_lines(fig: &Figure, canvas: &Canvas, svg: &mut String) {
  let lines = fig
    .lines
    .iter()
    .map(|line| (line, canvas.screen(&line.from), canvas.screen(&line.to)))
    .sorted_by(|a, b| (a.1 .2 + a.2 .2).total_cmp(&(b.1 .2 + b.2 .2)));
  for (line, (x1, y1, _), (x2, y2, _)) in lines {
    svg.push_str(&format!(
      r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
      fmt_num(x1),
      fmt_num(y1),
      fmt_num(x2),
      fmt_num(y2),
      line.color.unwrap_or(Color::BLACK),
      fmt_num(line.width)
    ));
    svg.push('\n');
  }
}

fn render_arrows(fig: &Figure, canvas: &Canvas, svg: &mut String) {
  for arrow in &fig.arrows {
    let (x1, y1, _) = canvas.screen(&arrow.origin);
    let (x2, y2, _) = canvas.screen(&arrow.tip());
    svg.push_str(&format!(
      r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
      fmt_num(x1),
      fmt_num(y1),
      fmt_num(x2),
      fmt_num(y2),
      arrow.color,
      fmt_num(arrow.width)
    ));
    svg.push('\n');

    let len = (x2 - x1).hypot(y2 - y1);
    if len < 1e-9 {
      continue;
    }
    let (dx, dy) = ((x2 - x1) / len, (y2 - y1) / len);
    let head = arrow.head_ratio * len;
    let half = 0.4 * head;
    let (bx, by) = (x2 - head * dx, y2 - head * dy);
    svg.push_str(&format!(
      r#"<polygon points="{},{} {},{} {},{}" fill="{}"/>"#,
      fmt_num(x2),
      fmt_num(y2),
      fmt_num(bx - half * dy),
      fmt_num(by + half * dx),
      fmt_num(bx + half * dy),
      fmt_num(by - half * dx),
      arrow.color
    ));
    svg.push('\n');
  }
}

/// Markers of all series, drawn back to front.
fn render_markers(fig: &Figure, canvas: &Canvas, svg: &mut String) {
  let markers = fig
    .scatters
    .iter()
    .flat_map(|scatter| {
      scatter
        .points
        .iter()
        .map(move |p| (scatter, canvas.screen(p)))
    })
    .sorted_by(|a, b| a.1 .2.total_cmp(&b.1 .2));
  for (scatter, (x, y, _)) in markers {
    svg.push_str(&format!(
      r#"<circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}"/>"#,
      fmt_num(x),
      fmt_num(y),
      fmt_num(scatter.radius()),
      scatter.color.unwrap_or(Color::BLACK),
      fmt_num(scatter.alpha)
    ));
    svg.push('\n');
  }
}

/// Multi-line texts sit above their anchor point.
fn render_texts(fig: &Figure, canvas: &Canvas, svg: &mut String) {
  for text in &fig.texts {
    let (x, y, _) = canvas.screen(&text.pos);
    let lines: Vec<&str> = text.text.split('\n').collect();
    let y0 = y - (lines.len() - 1) as f64 * LINE_SPACING * text.size;
    svg.push_str(&format!(
      r#"<text x="{}" y="{}" fill="{}" font-size="{}" font-weight="{}" text-anchor="{}">"#,
      fmt_num(x),
      fmt_num(y0),
      text.color,
      fmt_num(text.size),
      if text.bold { "bold" } else { "normal" },
      text.anchor.as_svg()
    ));
    for (iline, line) in lines.iter().enumerate() {
      let dy = if iline == 0 { 0.0 } else { LINE_SPACING };
      svg.push_str(&format!(
        r#"<tspan x="{}" dy="{}em">{}</tspan>"#,
        fmt_num(x),
        fmt_num(dy),
        escape(line)
      ));
    }
    svg.push_str("</text>\n");
  }
}

fn render_legend(fig: &Figure, options: &RenderOptions, svg: &mut String) {
  let entries: Vec<_> = fig
    .scatters
    .iter()
    .filter_map(|s| s.label.as_deref().map(|l| (s, l)))
    .collect();
  if entries.is_empty() {
    return;
  }

  let row_h = 16.0;
  let max_chars = entries
    .iter()
    .map(|(_, l)| l.chars().count())
    .max()
    .unwrap_or(0);
  let box_w = 30.0 + 6.0 * max_chars as f64;
  let box_h = 8.0 + row_h * entries.len() as f64;
  let x0 = options.width - options.margin - box_w;
  let y0 = options.margin * 0.5;

  svg.push_str(&format!(
    r##"<g class="legend"><rect x="{}" y="{}" width="{}" height="{}" fill="#ffffff" fill-opacity="0.8" stroke="#cccccc" rx="3"/>"##,
    fmt_num(x0),
    fmt_num(y0),
    fmt_num(box_w),
    fmt_num(box_h)
  ));
  for (ientry, (scatter, label)) in entries.iter().enumerate() {
    let cy = y0 + 4.0 + row_h * (ientry as f64 + 0.5);
    svg.push_str(&format!(
      r#"<circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}"/>"#,
      fmt_num(x0 + 12.0),
      fmt_num(cy),
      fmt_num(scatter.radius().clamp(2.0, 5.0)),
      scatter.color.unwrap_or(Color::BLACK),
      fmt_num(scatter.alpha)
    ));
    svg.push_str(&format!(
      r#"<text x="{}" y="{}" font-size="10">{}</text>"#,
      fmt_num(x0 + 24.0),
      fmt_num(cy + 3.5),
      escape(label)
    ));
  }
  svg.push_str("</g>\n");
}

/// Fixed precision without trailing zeros.
fn fmt_num(v: f64) -> String {
  let s = format!("{v:.2}");
  let s = s.trim_end_matches('0').trim_end_matches('.');
  match s {
    "-0" | "" => String::from("0"),
    s => s.to_owned(),
  }
}

pub fn escape(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&apos;"),
      c => escaped.push(c),
    }
  }
  escaped
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::plot::{Arrow, Line, Scatter, Text};

  #[test]
  fn numbers_are_compact() {
    assert_eq!(fmt_num(1.0), "1");
    assert_eq!(fmt_num(0.126), "0.13");
    assert_eq!(fmt_num(-0.001), "0");
    assert_eq!(fmt_num(-2.5), "-2.5");
    assert_eq!(fmt_num(10.0), "10");
  }

  #[test]
  fn text_is_escaped() {
    assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
  }

  #[test]
  fn renders_all_primitives() {
    let mut fig = Figure::new();
    fig
      .set_title("x < y")
      .set_lims(-1.0, 1.0)
      .set_axis_labels(["x", "y", "z"])
      .show_legend();
    fig.add_line(Line::new(Coord::zeros(), Coord::x()));
    fig.add_scatter(Scatter::new(vec![Coord::zeros(), Coord::y(), Coord::z()]).label("pts"));
    fig.add_text(Text::new(Coord::zeros(), "A\n(-1, -1, -1)"));
    fig.add_arrow(Arrow::new(Coord::zeros(), Coord::z()));

    let svg = render(&fig, &RenderOptions::default());
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("x &lt; y"));
    // three data markers plus the legend marker
    assert_eq!(svg.matches("<circle").count(), 4);
    assert_eq!(svg.matches("<tspan").count(), 2);
    assert_eq!(svg.matches("<polygon").count(), 1);
    assert!(svg.contains(">pts</text>"));
  }

  #[test]
  fn hidden_axes_draw_no_box() {
    let mut fig = Figure::new();
    fig.set_axis_visible(false);
    fig.add_line(Line::new(Coord::zeros(), Coord::x()));
    let svg = render(&fig, &RenderOptions::default());
    assert!(!svg.contains(r#"class="axes""#));
    assert_eq!(svg.matches("<line").count(), 1);
  }

  #[test]
  fn content_stays_on_canvas() {
    let mut fig = Figure::new();
    let points = vec![
      Coord::new(-3.0, 2.0, 0.5),
      Coord::new(4.0, -1.0, 2.0),
      Coord::new(0.0, 0.0, -5.0),
    ];
    fig.add_scatter(Scatter::new(points.clone()));
    let options = RenderOptions::default();
    let canvas = Canvas::new(&fig, &options);
    for p in &points {
      let (x, y, _) = canvas.screen(p);
      assert!((0.0..=options.width).contains(&x));
      assert!((0.0..=options.height).contains(&y));
    }
  }
}
