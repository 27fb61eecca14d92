//! Maps random points of the reference cube into a straight-sided hexahedron.

extern crate nalgebra as na;

use refmap::{
  io::{self, vtk},
  plot::{RenderOptions, View},
  sample, scene,
};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng as _};
use std::{fs, path::PathBuf};

#[derive(Debug, Parser)]
#[command(about = "Hexahedron isoparametric mapping figures")]
struct Args {
  /// Number of sampled reference points
  #[arg(short, long, default_value_t = 300)]
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

  let hex = scene::demo_hex();
  let xis = sample::reference_cube(&mut rng, args.npts);
  let mapped = hex.map_points(&xis);

  let options = RenderOptions::default();
  let view = View::new(args.elev, args.azim);

  let mut physical = scene::hex_physical_figure(&hex, &mapped);
  physical.set_view(view);
  io::save_figure_to_file(&physical, &options, args.out_dir.join("hex_physical.svg"))?;

  let mut reference = scene::reference_cube_figure(&xis);
  reference.set_view(view);
  io::save_figure_to_file(&reference, &options, args.out_dir.join("hex_reference.svg"))?;

  if args.vtk {
    vtk::save_vtk(vtk::element_to_vtk(&hex), args.out_dir.join("hex_element.vtk"))?;
    vtk::save_vtk(vtk::points_to_vtk(&mapped), args.out_dir.join("hex_points.vtk"))?;
  }

  let xi_center = na::Vector3::zeros();
  println!(
    "x(0,0,0) = {:?}, det J = {:.6}",
    hex.map(&xi_center).as_slice(),
    hex.jacobian_det(&xi_center)
  );

  Ok(())
}
