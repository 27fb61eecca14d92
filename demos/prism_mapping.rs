//! Maps random points of the collapsed reference prism into a physical prism.

use refmap::{
  io::{self, vtk},
  plot::{RenderOptions, View},
  sample, scene,
};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng as _};
use std::{fs, path::PathBuf};

#[derive(Debug, Parser)]
#[command(about = "Collapsed prism mapping figures")]
struct Args {
  /// Number of sampled reference points
  #[arg(short, long, default_value_t = 600)]
  npts: usize,
  /// Seed of the point sampler, random if unset
  #[arg(short, long)]
  seed: Option<u64>,
  /// Directory receiving the figures
  #[arg(short, long, default_value = "out")]
  out_dir: PathBuf,
  /// Also write VTK files of the element and the mapped points
  #[arg(long)]
  vtk: bool,
  #[arg(long, default_value_t = 30.0)]
  elev: f64,
  #[arg(long, default_value_t = -60.0, allow_hyphen_values = true)]
  azim: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt::init();
  let args = Args::parse();
  fs::create_dir_all(&args.out_dir)?;

  let mut rng = match args.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  let prism = scene::demo_prism();
  let xis = sample::reference_prism(&mut rng, args.npts);
  let mapped = prism.map_points(&xis);

  let options = RenderOptions::default();
  let view = View::new(args.elev, args.azim);

  let mut reference = scene::prism_reference_figure(&xis);
  reference.set_view(view);
  io::save_figure_to_file(&reference, &options, args.out_dir.join("prism_reference.svg"))?;

  let mut physical = scene::prism_physical_figure(&prism, &mapped);
  physical.set_view(view);
  io::save_figure_to_file(&physical, &options, args.out_dir.join("prism_physical.svg"))?;

  if args.vtk {
    vtk::save_vtk(vtk::element_to_vtk(&prism), args.out_dir.join("prism_element.vtk"))?;
    vtk::save_vtk(vtk::points_to_vtk(&mapped), args.out_dir.join("prism_points.vtk"))?;
  }

  Ok(())
}
