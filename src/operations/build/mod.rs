mod build_model;
mod card_shape;

pub use build_model::BuildModel;
pub use card_shape::classify_card;

/// Options controlling a model build.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Reset the store before building. When `false` the store must already
    /// be empty, or the new model is appended after the existing geometry.
    pub reset_first: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { reset_first: true }
    }
}

/// An element card the builder had no shape handler for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCard {
    pub element: i64,
    pub card_name: String,
}

/// Summary of a successful build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Node entities (and points) created.
    pub nodes: usize,
    /// Element entities created.
    pub elements: usize,
    /// Rigid-body element entities created.
    pub rbes: usize,
    /// Cards dropped because their type is not rendered.
    pub skipped: Vec<SkippedCard>,
}
