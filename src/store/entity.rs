use std::fmt;

use smallvec::SmallVec;

/// Local point indices of one entity. Inline up to a quad.
pub type Connectivity = SmallVec<[usize; 4]>;

/// The three entity collections a geometry store holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Grid points of the model.
    Node,
    /// Line, shell and other deformable elements.
    Element,
    /// Rigid-body elements.
    Rbe,
}

impl EntityKind {
    /// All kinds, in store order.
    pub const ALL: [Self; 3] = [Self::Node, Self::Element, Self::Rbe];
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Node => "node",
            Self::Element => "element",
            Self::Rbe => "rbe",
        })
    }
}

/// Cell shape of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A bare point. Its point is the one at the entity's own local index.
    Vertex,
    /// Two-node line.
    Line,
    /// Three-node triangle.
    Triangle,
    /// Four-node quadrilateral.
    Quad,
    /// Rigid spider: spokes from the first point to every other point.
    Spider,
}

impl Shape {
    /// Color-by-type category code.
    #[must_use]
    pub fn category(self) -> u8 {
        match self {
            Self::Vertex => 0,
            Self::Line => 1,
            Self::Triangle => 2,
            Self::Quad => 3,
            Self::Spider => 4,
        }
    }

    /// Exact number of points for fixed-size shapes, `None` for spiders.
    #[must_use]
    pub fn arity(self) -> Option<usize> {
        match self {
            Self::Vertex => Some(0),
            Self::Line => Some(2),
            Self::Triangle => Some(3),
            Self::Quad => Some(4),
            Self::Spider => None,
        }
    }

    /// Smallest number of points the shape can be built from.
    #[must_use]
    pub fn min_points(self) -> usize {
        self.arity().unwrap_or(2)
    }
}

/// One node, element or rigid-body element record.
///
/// The local index is implicit (the entity's position in its collection).
/// The source id lives on as `original_id`; the visibility flag is the only
/// attribute that changes after a build.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    original_id: i64,
    shape: Shape,
    category: u8,
    connectivity: Connectivity,
    visible: Option<bool>,
}

impl Entity {
    /// Creates a bare node entity.
    #[must_use]
    pub fn node(original_id: i64) -> Self {
        Self::cell(original_id, Shape::Vertex, Connectivity::new())
    }

    /// Creates a cell entity; the category is derived from the shape.
    #[must_use]
    pub fn cell(original_id: i64, shape: Shape, connectivity: Connectivity) -> Self {
        Self {
            original_id,
            shape,
            category: shape.category(),
            connectivity,
            visible: None,
        }
    }

    /// Id from the input model.
    #[must_use]
    pub fn original_id(&self) -> i64 {
        self.original_id
    }

    /// Shape the entity renders as.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Render category code, derived from the shape.
    #[must_use]
    pub fn category(&self) -> u8 {
        self.category
    }

    /// Local point indices. Empty for bare nodes.
    #[must_use]
    pub fn connectivity(&self) -> &[usize] {
        &self.connectivity
    }

    /// Raw visibility flag, `None` if never set.
    #[must_use]
    pub fn visible(&self) -> Option<bool> {
        self.visible
    }

    /// Whether the entity is shown. Unset counts as shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }

    /// The flag as the 0/1 integer the selection criterion compares against.
    #[must_use]
    pub fn visible_value(&self) -> i32 {
        i32::from(self.is_visible())
    }

    pub(crate) fn set_visible(&mut self, visible: Option<bool>) {
        self.visible = visible;
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.connectivity.shrink_to_fit();
    }
}
