mod filter;
mod view;

pub use filter::{SelectionCriterion, SelectionFilter};
pub use view::{EntityRef, PartitionView};
