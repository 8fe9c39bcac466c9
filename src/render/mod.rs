mod cell_array;

pub use cell_array::CellArray;

/// RGBA color, components in `[0, 1]`.
pub type Rgba = [f32; 4];

/// Lookup table from category code to display color.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPalette {
    /// Color of category `i` is `colors[i]`.
    pub colors: Vec<Rgba>,
    /// Color for codes past the end of the table.
    pub fallback: Rgba,
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Self {
            colors: vec![
                [0.0, 0.0, 0.0, 1.0], // points: black
                [1.0, 0.0, 0.0, 1.0], // lines: red
                [0.0, 1.0, 0.0, 1.0], // triangles: green
                [0.0, 0.0, 1.0, 1.0], // quads: blue
                [1.0, 0.0, 1.0, 1.0], // rigid: magenta
            ],
            fallback: [0.5, 0.5, 0.5, 1.0],
        }
    }
}

impl CategoryPalette {
    /// Returns the color of `category`.
    #[must_use]
    pub fn color(&self, category: u8) -> Rgba {
        self.colors
            .get(usize::from(category))
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Replaces the color of `category`, growing the table with the fallback
    /// color if needed.
    pub fn set_color(&mut self, category: u8, color: Rgba) {
        let index = usize::from(category);
        if index >= self.colors.len() {
            self.colors.resize(index + 1, self.fallback);
        }
        self.colors[index] = color;
    }
}
