//! VTK export of physical elements and mapped points for inspection in ParaView.

use crate::{
  element::{hex::Hexahedron, prism::Prism, PhysicalElement},
  Coord, Result,
};

use std::path::Path;
use tracing::info;
use vtkio::{
  model::{
    Attributes, ByteOrder, CellType, Cells, UnstructuredGridPiece, Version, VertexNumbers, Vtk,
  },
  IOBuffer,
};

/// Element types with a linear VTK counterpart.
pub trait VtkCell<const N: usize> {
  const CELL_TYPE: CellType;
  /// Our vertex index of each VTK vertex.
  const VTK_ORDER: [usize; N];
}
impl VtkCell<8> for Hexahedron {
  const CELL_TYPE: CellType = CellType::Hexahedron;
  const VTK_ORDER: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
}
/// VTK wedges are two triangles joined by three edges; ours are A-B-E and
/// D-C-F joined by A-D, B-C and E-F, the extrusion edges of the wireframe.
///
/// Prisms whose vertices are laid out otherwise, such as the reference prism
/// where C lies opposite A, export as a twisted wedge.
impl VtkCell<6> for Prism {
  const CELL_TYPE: CellType = CellType::Wedge;
  const VTK_ORDER: [usize; 6] = [0, 1, 4, 3, 2, 5];
}

fn unstructured_grid(
  title: String,
  points: Vec<f64>,
  cell_verts: VertexNumbers,
  types: Vec<CellType>,
) -> Vtk {
  let grid = UnstructuredGridPiece {
    points: IOBuffer::F64(points),
    cells: Cells { cell_verts, types },
    data: Attributes::new(),
  };
  Vtk {
    version: Version::new((4, 2)),
    title,
    byte_order: ByteOrder::BigEndian,
    data: grid.into(),
    file_path: None,
  }
}

/// Single cell with the vertices of `element`, ordered by [`VtkCell::VTK_ORDER`].
pub fn element_to_vtk<R, const N: usize>(element: &PhysicalElement<R, N>) -> Vtk
where
  R: VtkCell<N>,
  R: crate::element::ReferenceElement<N>,
{
  let points = element.vertices().iter().copied().collect();
  let mut vertices = Vec::with_capacity(N + 1);
  vertices.push(N as u32);
  vertices.extend(R::VTK_ORDER.iter().map(|&i| i as u32));
  let cell_verts = VertexNumbers::Legacy {
    num_cells: 1,
    vertices,
  };
  let title = format!("refmap {} element", R::NAME);
  unstructured_grid(title, points, cell_verts, vec![R::CELL_TYPE])
}

/// One vertex cell per point.
pub fn points_to_vtk(points: &[Coord]) -> Vtk {
  let coords = points.iter().flat_map(|p| p.iter().copied()).collect();
  let vertices = (0..points.len() as u32).flat_map(|i| [1, i]).collect();
  let cell_verts = VertexNumbers::Legacy {
    num_cells: points.len() as u32,
    vertices,
  };
  let title = String::from("refmap mapped points");
  unstructured_grid(title, coords, cell_verts, vec![CellType::Vertex; points.len()])
}

/// Writes a legacy ASCII `.vtk` file.
pub fn save_vtk(vtk: Vtk, path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  vtk.export_ascii(path)?;
  info!("wrote vtk file to {}", path.display());
  Ok(())
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{scene, HexElement};

  use vtkio::model::DataSet;

  fn single_piece(vtk: &Vtk) -> &UnstructuredGridPiece {
    match &vtk.data {
      DataSet::UnstructuredGrid { pieces, .. } => match &pieces[0] {
        vtkio::model::Piece::Inline(piece) => &**piece,
        _ => panic!("expected inline piece"),
      },
      _ => panic!("expected unstructured grid"),
    }
  }

  #[test]
  fn prism_exports_as_wedge() {
    let vtk = element_to_vtk(&scene::demo_prism());
    let piece = single_piece(&vtk);
    assert_eq!(piece.cells.types, vec![CellType::Wedge]);
    assert_eq!(piece.points.len(), 18);
    match &piece.cells.cell_verts {
      VertexNumbers::Legacy {
        num_cells,
        vertices,
      } => {
        assert_eq!(*num_cells, 1);
        assert_eq!(vertices, &vec![6, 0, 1, 4, 3, 2, 5]);
      }
      _ => panic!("expected legacy connectivity"),
    }
  }

  #[test]
  fn wedge_order_follows_extrusion_edges() {
    let prism = scene::demo_prism();
    let order = Prism::VTK_ORDER;
    let shift = prism.vertex(order[3]) - prism.vertex(order[0]);
    for i in 1..3 {
      let edge = prism.vertex(order[i + 3]) - prism.vertex(order[i]);
      approx::assert_relative_eq!(edge, shift, epsilon = 1e-14);
    }
    for &(i, j) in &[(0, 3), (1, 2), (4, 5)] {
      assert!(crate::element::prism::EDGES.contains(&(i, j)));
    }
  }

  #[test]
  fn hex_exports_as_hexahedron() {
    let vtk = element_to_vtk(&HexElement::reference());
    let piece = single_piece(&vtk);
    assert_eq!(vtk.title, "refmap hexahedron element");
    assert_eq!(piece.cells.types, vec![CellType::Hexahedron]);
    assert_eq!(piece.points.len(), 24);
  }

  #[test]
  fn points_export_as_vertices() {
    let points = vec![Coord::zeros(), Coord::x(), Coord::y()];
    let vtk = points_to_vtk(&points);
    let piece = single_piece(&vtk);
    assert_eq!(piece.cells.types.len(), 3);
    assert_eq!(piece.points.len(), 9);
  }
}
