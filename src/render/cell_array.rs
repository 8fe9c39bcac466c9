use crate::store::Shape;

use super::CategoryPalette;

/// Flat, renderer-ready cell arrays for one partition view.
///
/// Cell `i` owns `connectivity[offsets[i]..offsets[i + 1]]`. Indices point
/// into the store's shared point buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellArray {
    /// Cell start offsets, one more than the cell count; starts at 0.
    pub offsets: Vec<usize>,
    /// Concatenated point indices of all cells.
    pub connectivity: Vec<usize>,
    /// Shape of each cell.
    pub shapes: Vec<Shape>,
    /// Color-by-type category of each cell.
    pub categories: Vec<u8>,
    /// Source id of each cell.
    pub original_ids: Vec<i64>,
}

impl Default for CellArray {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl CellArray {
    /// Creates an empty cell array with room for `cells` cells.
    #[must_use]
    pub fn with_capacity(cells: usize) -> Self {
        let mut offsets = Vec::with_capacity(cells + 1);
        offsets.push(0);
        Self {
            offsets,
            connectivity: Vec::with_capacity(cells * 4),
            shapes: Vec::with_capacity(cells),
            categories: Vec::with_capacity(cells),
            original_ids: Vec::with_capacity(cells),
        }
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if there are no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Appends one cell.
    pub fn push(&mut self, shape: Shape, category: u8, original_id: i64, indices: &[usize]) {
        self.connectivity.extend_from_slice(indices);
        self.offsets.push(self.connectivity.len());
        self.shapes.push(shape);
        self.categories.push(category);
        self.original_ids.push(original_id);
    }

    /// Point indices of cell `i`.
    #[must_use]
    pub fn cell(&self, i: usize) -> Option<&[usize]> {
        let start = *self.offsets.get(i)?;
        let end = *self.offsets.get(i + 1)?;
        self.connectivity.get(start..end)
    }

    /// Per-cell RGBA colors looked up by category.
    #[must_use]
    pub fn colors(&self, palette: &CategoryPalette) -> Vec<[f32; 4]> {
        self.categories.iter().map(|&c| palette.color(c)).collect()
    }

    /// Point indices of vertex cells.
    #[must_use]
    pub fn vertex_indices(&self) -> Vec<usize> {
        self.cells_of(&[Shape::Vertex]).flatten().copied().collect()
    }

    /// Line segments: line cells as-is, spiders as spokes from their first point.
    #[must_use]
    pub fn line_indices(&self) -> Vec<[usize; 2]> {
        let mut lines = Vec::new();
        for (shape, cell) in self.shapes.iter().zip(self.cells()) {
            match (shape, cell) {
                (Shape::Line, &[a, b, ..]) => lines.push([a, b]),
                (Shape::Spider, [hub, spokes @ ..]) => {
                    lines.extend(spokes.iter().map(|&s| [*hub, s]));
                }
                _ => {}
            }
        }
        lines
    }

    /// Triangles: triangle cells as-is, quads split along their 0-2 diagonal.
    #[must_use]
    pub fn triangle_indices(&self) -> Vec<[usize; 3]> {
        let mut triangles = Vec::new();
        for (shape, cell) in self.shapes.iter().zip(self.cells()) {
            match (shape, cell) {
                (Shape::Triangle, &[a, b, c, ..]) => triangles.push([a, b, c]),
                (Shape::Quad, &[a, b, c, d, ..]) => {
                    triangles.push([a, b, c]);
                    triangles.push([a, c, d]);
                }
                _ => {}
            }
        }
        triangles
    }

    fn cells(&self) -> impl Iterator<Item = &[usize]> {
        self.offsets
            .windows(2)
            .map(|w| &self.connectivity[w[0]..w[1]])
    }

    fn cells_of<'a>(&'a self, shapes: &'a [Shape]) -> impl Iterator<Item = &'a [usize]> {
        self.shapes
            .iter()
            .zip(self.cells())
            .filter(move |(shape, _)| shapes.contains(*shape))
            .map(|(_, cell)| cell)
    }
}
