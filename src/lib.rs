pub mod error;
pub mod math;
pub mod model;
pub mod operations;
pub mod render;
pub mod selection;
pub mod store;

pub use error::{FemViewError, Result};
pub use model::{BulkModel, ElementCard, FemModel, GridPoint};
pub use operations::build::{BuildModel, BuildOptions, BuildReport};
pub use selection::{PartitionView, SelectionCriterion, SelectionFilter};
pub use store::{Entity, EntityKind, GeometryStore, Shape};
