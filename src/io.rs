pub mod vtk;

use crate::{
  plot::{Figure, RenderOptions},
  Result,
};

use std::{fs::File, io::BufWriter, path::Path};
use tracing::info;

pub fn save_figure_to_file(
  figure: &Figure,
  options: &RenderOptions,
  path: impl AsRef<Path>,
) -> Result<()> {
  let path = path.as_ref();
  let file = File::create(path)?;
  let writer = BufWriter::new(file);
  write_figure(writer, figure, options)?;
  info!("wrote figure to {}", path.display());
  Ok(())
}

pub fn write_figure<W: std::io::Write>(
  mut writer: W,
  figure: &Figure,
  options: &RenderOptions,
) -> std::io::Result<()> {
  writer.write_all(figure.to_svg(options).as_bytes())?;
  writer.flush()
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::scene;

  #[test]
  fn figure_written_to_writer() {
    let mut buf = Vec::new();
    write_figure(&mut buf, &scene::reference_domain_figure(), &RenderOptions::default()).unwrap();
    let svg = String::from_utf8(buf).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("η₁"));
  }
}
