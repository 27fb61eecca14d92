//! Annotated figure of the reference domain for the documentation.

use refmap::{io, plot::RenderOptions, scene};

use clap::Parser;
use std::{fs, path::PathBuf};

#[derive(Debug, Parser)]
#[command(about = "Reference domain figure")]
struct Args {
  /// Directory receiving the figure
  #[arg(short, long, default_value = "out")]
  out_dir: PathBuf,
  /// Canvas edge length
  #[arg(long, default_value_t = 700.0)]
  size: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt::init();
  let args = Args::parse();
  fs::create_dir_all(&args.out_dir)?;

  let options = RenderOptions::default().with_size(args.size, args.size);
  let figure = scene::reference_domain_figure();
  io::save_figure_to_file(&figure, &options, args.out_dir.join("ref_tet_basis_domain.svg"))?;

  Ok(())
}
