//! Parsed-model input.
//!
//! Reading the deck itself happens elsewhere; the builder only sees a
//! [`FemModel`]: grid points keyed by id and element cards keyed by id.

mod grid;

pub use grid::GridPoint;

use std::collections::BTreeMap;

/// One element record: its card name and the node ids it references, in
/// connectivity order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementCard {
    pub card_name: String,
    pub node_ids: Vec<i64>,
}

impl ElementCard {
    /// Creates a card from its name and node ids.
    #[must_use]
    pub fn new(card_name: impl Into<String>, node_ids: impl Into<Vec<i64>>) -> Self {
        Self {
            card_name: card_name.into(),
            node_ids: node_ids.into(),
        }
    }
}

/// A parsed finite-element model.
///
/// Iteration order decides local indices, so implementations must iterate
/// deterministically.
pub trait FemModel {
    /// Grid points keyed by node id.
    fn nodes(&self) -> impl Iterator<Item = (i64, &GridPoint)>;

    /// Element cards keyed by element id.
    fn elements(&self) -> impl Iterator<Item = (i64, &ElementCard)>;

    /// Number of grid points, used as a capacity hint.
    fn node_count(&self) -> usize {
        self.nodes().count()
    }
}

/// In-memory bulk data, iterated in ascending id order.
#[derive(Debug, Clone, Default)]
pub struct BulkModel {
    nodes: BTreeMap<i64, GridPoint>,
    elements: BTreeMap<i64, ElementCard>,
}

impl BulkModel {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a grid point, returning the one it replaced.
    pub fn add_node(&mut self, id: i64, grid: impl Into<GridPoint>) -> Option<GridPoint> {
        self.nodes.insert(id, grid.into())
    }

    /// Adds an element card, returning the one it replaced.
    pub fn add_element(&mut self, id: i64, card: ElementCard) -> Option<ElementCard> {
        self.elements.insert(id, card)
    }

    /// Grid point with node id `id`.
    #[must_use]
    pub fn node(&self, id: i64) -> Option<&GridPoint> {
        self.nodes.get(&id)
    }

    /// Element card with element id `id`.
    #[must_use]
    pub fn element(&self, id: i64) -> Option<&ElementCard> {
        self.elements.get(&id)
    }

    /// Number of element cards.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

impl FemModel for BulkModel {
    fn nodes(&self) -> impl Iterator<Item = (i64, &GridPoint)> {
        self.nodes.iter().map(|(&id, grid)| (id, grid))
    }

    fn elements(&self) -> impl Iterator<Item = (i64, &ElementCard)> {
        self.elements.iter().map(|(&id, card)| (id, card))
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point3;

    #[test]
    fn iterates_in_id_order() {
        let mut model = BulkModel::new();
        model.add_node(30, Point3::new(3.0, 0.0, 0.0));
        model.add_node(1, Point3::new(1.0, 0.0, 0.0));
        model.add_node(7, Point3::new(7.0, 0.0, 0.0));

        let ids: Vec<_> = model.nodes().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 7, 30]);
        assert_eq!(model.node_count(), 3);
    }

    #[test]
    fn replacing_returns_previous() {
        let mut model = BulkModel::new();
        assert!(model.add_element(5, ElementCard::new("CBEAM", [1, 2])).is_none());
        let old = model.add_element(5, ElementCard::new("CROD", [1, 2]));
        assert_eq!(old.map(|c| c.card_name), Some("CBEAM".to_owned()));
        assert_eq!(model.element_count(), 1);
        assert_eq!(model.element(5).map(|c| c.card_name.as_str()), Some("CROD"));
    }
}
