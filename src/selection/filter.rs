use crate::store::{Entity, EntityCollection, EntityKind, GeometryStore};

use super::PartitionView;

/// Which attribute value counts as "selected".
///
/// The filter compares each entity's `visible` flag (as a 0/1 integer, unset
/// reading as 1) against `selected_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCriterion {
    /// Flag value that puts an entity in the selected view.
    pub selected_value: i32,
}

impl Default for SelectionCriterion {
    fn default() -> Self {
        Self { selected_value: 1 }
    }
}

impl SelectionCriterion {
    /// Returns `true` if the entity belongs in the selected view.
    #[must_use]
    pub fn matches(&self, entity: &Entity) -> bool {
        entity.visible_value() == self.selected_value
    }
}

/// Splits one entity collection into a selected and an unselected view.
///
/// Only local indices are stored; geometry is read through the owning
/// store when a view is requested. Nothing is recomputed until
/// [`execute`](Self::execute) runs; entities appended since then are in
/// neither view. Rebinding with [`set_input`](Self::set_input) is the only
/// thing that empties a partition.
#[derive(Debug, Clone)]
pub struct SelectionFilter {
    criterion: SelectionCriterion,
    input: Option<EntityKind>,
    selected: Vec<usize>,
    unselected: Vec<usize>,
}

impl SelectionFilter {
    /// Creates an unbound filter with an empty partition.
    #[must_use]
    pub fn new(criterion: SelectionCriterion) -> Self {
        Self {
            criterion,
            input: None,
            selected: Vec::new(),
            unselected: Vec::new(),
        }
    }

    /// The criterion the partition is computed with.
    #[must_use]
    pub fn criterion(&self) -> SelectionCriterion {
        self.criterion
    }

    /// The collection this filter is bound to.
    #[must_use]
    pub fn input(&self) -> Option<EntityKind> {
        self.input
    }

    /// Binds the filter to a collection and drops the current partition.
    pub fn set_input(&mut self, kind: EntityKind) {
        self.input = Some(kind);
        self.selected.clear();
        self.unselected.clear();
    }

    /// Recomputes both views from the collection's current flags.
    ///
    /// Does nothing if the filter is unbound or bound to another kind.
    pub fn execute(&mut self, collection: &EntityCollection) {
        if self.input != Some(collection.kind()) {
            tracing::trace!(
                input = ?self.input,
                given = %collection.kind(),
                "selection filter input mismatch, skipping"
            );
            return;
        }

        self.selected.clear();
        self.unselected.clear();
        for (index, entity) in collection.iter().enumerate() {
            if self.criterion.matches(entity) {
                self.selected.push(index);
            } else {
                self.unselected.push(index);
            }
        }

        tracing::trace!(
            kind = %collection.kind(),
            selected = self.selected.len(),
            unselected = self.unselected.len(),
            "selection filter executed"
        );
    }

    /// View of the entities matching the criterion at the last `execute`.
    #[must_use]
    pub fn selected_data<'a>(&'a self, store: &'a GeometryStore) -> PartitionView<'a> {
        self.view(store, &self.selected)
    }

    /// View of the entities not matching the criterion at the last `execute`.
    #[must_use]
    pub fn unselected_data<'a>(&'a self, store: &'a GeometryStore) -> PartitionView<'a> {
        self.view(store, &self.unselected)
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.selected.shrink_to_fit();
        self.unselected.shrink_to_fit();
    }

    fn view<'a>(&'a self, store: &'a GeometryStore, indices: &'a [usize]) -> PartitionView<'a> {
        let Some(kind) = self.input else {
            return PartitionView::empty(store.points());
        };
        PartitionView::new(store.points(), store.collection(kind), indices)
    }
}

impl Default for SelectionFilter {
    fn default() -> Self {
        Self::new(SelectionCriterion::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::Entity;

    fn collection_of(n: i64) -> EntityCollection {
        let mut c = EntityCollection::new(EntityKind::Node);
        for id in 1..=n {
            c.push(Entity::node(id));
        }
        c
    }

    #[test]
    fn unexecuted_filter_is_empty() {
        let store = GeometryStore::new();
        let mut filter = SelectionFilter::default();
        assert!(filter.selected_data(&store).is_empty());
        assert!(filter.unselected_data(&store).is_empty());

        filter.set_input(EntityKind::Node);
        assert!(filter.selected_data(&store).is_empty());
        assert_eq!(filter.selected_data(&store).kind(), Some(EntityKind::Node));
    }

    #[test]
    fn partition_is_complete_and_disjoint() {
        let mut c = collection_of(5);
        c.get_mut(1).unwrap().set_visible(Some(false));
        c.get_mut(3).unwrap().set_visible(Some(false));
        c.get_mut(4).unwrap().set_visible(Some(true));

        let mut filter = SelectionFilter::default();
        filter.set_input(EntityKind::Node);
        filter.execute(&c);

        assert_eq!(filter.selected, vec![0, 2, 4]);
        assert_eq!(filter.unselected, vec![1, 3]);
        assert_eq!(filter.selected.len() + filter.unselected.len(), c.len());
    }

    #[test]
    fn execute_is_idempotent() {
        let mut c = collection_of(4);
        c.get_mut(2).unwrap().set_visible(Some(false));

        let mut filter = SelectionFilter::default();
        filter.set_input(EntityKind::Node);
        filter.execute(&c);
        let first = (filter.selected.clone(), filter.unselected.clone());
        filter.execute(&c);
        assert_eq!(first, (filter.selected.clone(), filter.unselected.clone()));
    }

    #[test]
    fn mutation_needs_execute() {
        let mut c = collection_of(2);
        let mut filter = SelectionFilter::default();
        filter.set_input(EntityKind::Node);
        filter.execute(&c);
        assert_eq!(filter.unselected.len(), 0);

        c.get_mut(0).unwrap().set_visible(Some(false));
        assert_eq!(filter.unselected.len(), 0);

        filter.execute(&c);
        assert_eq!(filter.unselected, vec![0]);
    }

    #[test]
    fn inverted_criterion_selects_hidden() {
        let mut c = collection_of(3);
        c.get_mut(0).unwrap().set_visible(Some(false));

        let mut filter = SelectionFilter::new(SelectionCriterion { selected_value: 0 });
        filter.set_input(EntityKind::Node);
        filter.execute(&c);
        assert_eq!(filter.selected, vec![0]);
        assert_eq!(filter.unselected, vec![1, 2]);
    }

    #[test]
    fn rebinding_drops_partition() {
        let mut c = collection_of(2);
        c.get_mut(1).unwrap().set_visible(Some(false));
        let mut filter = SelectionFilter::default();
        filter.set_input(EntityKind::Node);
        filter.execute(&c);
        assert_eq!(filter.unselected, vec![1]);

        filter.set_input(EntityKind::Node);
        assert!(filter.selected.is_empty());
        assert!(filter.unselected.is_empty());
    }

    #[test]
    fn wrong_kind_is_ignored() {
        let c = collection_of(3);
        let mut filter = SelectionFilter::default();
        filter.set_input(EntityKind::Element);
        filter.execute(&c);
        assert!(filter.selected.is_empty());
        assert!(filter.unselected.is_empty());
    }
}
