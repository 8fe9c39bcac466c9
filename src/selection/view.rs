use std::collections::BTreeSet;

use crate::math::Point3;
use crate::render::CellArray;
use crate::store::{Connectivity, Entity, EntityCollection, EntityKind, Shape};

/// A read-only subset of one entity collection.
///
/// Borrows the store's shared point buffer and the collection; holds only
/// the local indices of its members, in ascending order.
#[derive(Debug, Clone, Copy)]
pub struct PartitionView<'a> {
    points: &'a [Point3],
    collection: Option<&'a EntityCollection>,
    indices: &'a [usize],
}

/// An entity together with its local index.
#[derive(Debug, Clone, Copy)]
pub struct EntityRef<'a> {
    pub local_index: usize,
    pub entity: &'a Entity,
}

impl EntityRef<'_> {
    /// Point indices to draw. A bare node draws the point at its own index.
    #[must_use]
    pub fn point_indices(&self) -> Connectivity {
        if self.entity.shape() == Shape::Vertex && self.entity.connectivity().is_empty() {
            Connectivity::from_slice(&[self.local_index])
        } else {
            Connectivity::from_slice(self.entity.connectivity())
        }
    }
}

impl<'a> PartitionView<'a> {
    pub(crate) fn new(
        points: &'a [Point3],
        collection: &'a EntityCollection,
        indices: &'a [usize],
    ) -> Self {
        Self {
            points,
            collection: Some(collection),
            indices,
        }
    }

    pub(crate) fn empty(points: &'a [Point3]) -> Self {
        Self {
            points,
            collection: None,
            indices: &[],
        }
    }

    /// Kind of the underlying collection, `None` for an unbound filter.
    #[must_use]
    pub fn kind(&self) -> Option<EntityKind> {
        self.collection.map(EntityCollection::kind)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the view has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The shared point buffer (all points, not only those referenced).
    #[must_use]
    pub fn points(&self) -> &'a [Point3] {
        self.points
    }

    /// Local indices of the members, ascending.
    #[must_use]
    pub fn local_indices(&self) -> &'a [usize] {
        self.indices
    }

    /// Iterates the members in local-index order.
    pub fn iter(&self) -> impl Iterator<Item = EntityRef<'a>> + 'a {
        let collection = self.collection;
        let indices = self.indices;
        indices.iter().filter_map(move |&local_index| {
            collection?
                .get(local_index)
                .map(|entity| EntityRef {
                    local_index,
                    entity,
                })
        })
    }

    /// Original ids of the members in local-index order.
    pub fn original_ids(&self) -> impl Iterator<Item = i64> + 'a {
        self.iter().map(|r| r.entity.original_id())
    }

    /// Returns `true` if the entity at `local_index` is a member.
    #[must_use]
    pub fn contains_local_index(&self, local_index: usize) -> bool {
        self.indices.binary_search(&local_index).is_ok()
    }

    /// Returns `true` if a member carries `original_id`.
    #[must_use]
    pub fn contains_original_id(&self, original_id: i64) -> bool {
        self.original_ids().any(|id| id == original_id)
    }

    /// Distinct category codes present, ascending.
    #[must_use]
    pub fn categories_present(&self) -> Vec<u8> {
        self.iter()
            .map(|r| r.entity.category())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Flattens the members into renderer-ready cell arrays.
    #[must_use]
    pub fn cell_array(&self) -> CellArray {
        let mut cells = CellArray::with_capacity(self.len());
        for r in self.iter() {
            cells.push(
                r.entity.shape(),
                r.entity.category(),
                r.entity.original_id(),
                &r.point_indices(),
            );
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn fixture() -> (Vec<Point3>, EntityCollection) {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let mut elements = EntityCollection::new(EntityKind::Element);
        elements.push(Entity::cell(10, Shape::Triangle, smallvec![0, 1, 2]));
        elements.push(Entity::cell(11, Shape::Line, smallvec![2, 3]));
        elements.push(Entity::cell(12, Shape::Quad, smallvec![0, 1, 2, 3]));
        (points, elements)
    }

    #[test]
    fn iterates_members_only() {
        let (points, elements) = fixture();
        let indices = [0, 2];
        let view = PartitionView::new(&points, &elements, &indices);

        assert_eq!(view.len(), 2);
        assert_eq!(view.original_ids().collect::<Vec<_>>(), vec![10, 12]);
        assert!(view.contains_original_id(12));
        assert!(!view.contains_original_id(11));
        assert!(view.contains_local_index(2));
        assert!(!view.contains_local_index(1));
        assert_eq!(view.categories_present(), vec![2, 3]);
        assert_eq!(view.points().len(), 4);
    }

    #[test]
    fn empty_views_are_valid() {
        let (points, elements) = fixture();
        let unbound = PartitionView::empty(&points);
        assert!(unbound.is_empty());
        assert_eq!(unbound.kind(), None);
        assert_eq!(unbound.iter().count(), 0);

        let unexecuted = PartitionView::new(&points, &elements, &[]);
        assert!(unexecuted.is_empty());
        assert_eq!(unexecuted.kind(), Some(EntityKind::Element));
        assert!(unexecuted.cell_array().is_empty());
    }

    #[test]
    fn bare_node_draws_own_point() {
        let points = vec![Point3::origin(), Point3::new(2.0, 0.0, 0.0)];
        let mut nodes = EntityCollection::new(EntityKind::Node);
        nodes.push(Entity::node(100));
        nodes.push(Entity::node(200));
        let indices = [1];
        let view = PartitionView::new(&points, &nodes, &indices);

        let r = view.iter().next();
        assert_eq!(r.map(|r| r.point_indices().to_vec()), Some(vec![1]));
    }

    #[test]
    fn cell_array_matches_members() {
        let (points, elements) = fixture();
        let indices = [0, 1];
        let cells = PartitionView::new(&points, &elements, &indices).cell_array();

        assert_eq!(cells.offsets, vec![0, 3, 5]);
        assert_eq!(cells.connectivity, vec![0, 1, 2, 2, 3]);
        assert_eq!(cells.categories, vec![2, 1]);
        assert_eq!(cells.original_ids, vec![10, 11]);
    }
}
