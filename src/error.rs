pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to write output: {0}")]
  Io(#[from] std::io::Error),
  #[error("failed to export vtk file: {0}")]
  Vtk(#[from] vtkio::Error),
}
