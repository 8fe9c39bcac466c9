pub mod collection;
pub mod entity;

pub use collection::EntityCollection;
pub use entity::{Connectivity, Entity, EntityKind, Shape};

use crate::error::{BuildError, Result, SelectionError};
use crate::math::Point3;
use crate::selection::{PartitionView, SelectionCriterion, SelectionFilter};

/// Canonical geometry of one mesh.
///
/// Owns a single point buffer shared by three entity collections (nodes,
/// elements, rigid-body elements). Entities reference points by local index
/// only. Each collection has its own [`SelectionFilter`] that splits it into
/// shown and hidden views on [`update`](Self::update).
#[derive(Debug)]
pub struct GeometryStore {
    points: Vec<Point3>,
    nodes: EntityCollection,
    elements: EntityCollection,
    rbes: EntityCollection,
    node_filter: SelectionFilter,
    element_filter: SelectionFilter,
    rbe_filter: SelectionFilter,
    modified: u64,
}

impl Default for GeometryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryStore {
    /// Creates an empty store with every filter bound to its collection.
    #[must_use]
    pub fn new() -> Self {
        Self::with_criterion(SelectionCriterion::default())
    }

    /// Creates an empty store whose filters use `criterion`.
    #[must_use]
    pub fn with_criterion(criterion: SelectionCriterion) -> Self {
        let mut store = Self {
            points: Vec::new(),
            nodes: EntityCollection::new(EntityKind::Node),
            elements: EntityCollection::new(EntityKind::Element),
            rbes: EntityCollection::new(EntityKind::Rbe),
            node_filter: SelectionFilter::new(criterion),
            element_filter: SelectionFilter::new(criterion),
            rbe_filter: SelectionFilter::new(criterion),
            modified: 0,
        };
        store.bind_filters();
        store
    }

    // --- Lifecycle ---

    /// Empties the point buffer and all collections.
    ///
    /// Filters stay bound and their partitions are dropped, so every
    /// shown/hidden view reads as empty until the next [`update`](Self::update).
    pub fn reset(&mut self) {
        self.points.clear();
        for kind in EntityKind::ALL {
            self.collection_mut(kind).clear();
        }
        self.bind_filters();
        tracing::debug!("geometry store reset");
    }

    /// Shrinks backing storage to the current logical size.
    pub fn squeeze(&mut self) {
        self.points.shrink_to_fit();
        for kind in EntityKind::ALL {
            self.collection_mut(kind).shrink_to_fit();
            self.filter_mut(kind).shrink_to_fit();
        }
    }

    /// Marks all geometry as changed and re-runs every filter.
    pub fn update(&mut self) {
        self.modified += 1;
        self.node_filter.execute(&self.nodes);
        self.element_filter.execute(&self.elements);
        self.rbe_filter.execute(&self.rbes);
    }

    /// Modification counter, bumped by each [`update`](Self::update).
    #[must_use]
    pub fn modified(&self) -> u64 {
        self.modified
    }

    // --- Geometry access ---

    /// The shared point buffer.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the collection of the given kind.
    #[must_use]
    pub fn collection(&self, kind: EntityKind) -> &EntityCollection {
        match kind {
            EntityKind::Node => &self.nodes,
            EntityKind::Element => &self.elements,
            EntityKind::Rbe => &self.rbes,
        }
    }

    /// Returns the filter of the given kind.
    #[must_use]
    pub fn filter(&self, kind: EntityKind) -> &SelectionFilter {
        match kind {
            EntityKind::Node => &self.node_filter,
            EntityKind::Element => &self.element_filter,
            EntityKind::Rbe => &self.rbe_filter,
        }
    }

    /// Appends a point and returns its local index.
    pub fn push_point(&mut self, point: Point3) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Appends an entity and returns its local index.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::PointOutOfRange`] if the connectivity references
    /// a point that is not in the buffer, or if the entity is a bare vertex
    /// and the point at its own local index does not exist yet.
    pub fn push_entity(&mut self, kind: EntityKind, entity: Entity) -> Result<usize> {
        let len = self.points.len();
        if let Some(&index) = entity.connectivity().iter().find(|&&i| i >= len) {
            return Err(BuildError::PointOutOfRange { index, len }.into());
        }
        let collection = self.collection_mut(kind);
        let bare_vertex = entity.shape() == Shape::Vertex && entity.connectivity().is_empty();
        if bare_vertex && collection.len() >= len {
            return Err(BuildError::PointOutOfRange {
                index: collection.len(),
                len,
            }
            .into());
        }
        Ok(collection.push(entity))
    }

    // --- Shown / hidden views ---

    /// Entities of `kind` shown as of the last update.
    #[must_use]
    pub fn shown(&self, kind: EntityKind) -> PartitionView<'_> {
        self.filter(kind).selected_data(self)
    }

    /// Entities of `kind` hidden as of the last update.
    #[must_use]
    pub fn hidden(&self, kind: EntityKind) -> PartitionView<'_> {
        self.filter(kind).unselected_data(self)
    }

    /// Nodes shown as of the last update.
    #[must_use]
    pub fn shown_nodes(&self) -> PartitionView<'_> {
        self.shown(EntityKind::Node)
    }

    /// Nodes hidden as of the last update.
    #[must_use]
    pub fn hidden_nodes(&self) -> PartitionView<'_> {
        self.hidden(EntityKind::Node)
    }

    /// Elements shown as of the last update.
    #[must_use]
    pub fn shown_elements(&self) -> PartitionView<'_> {
        self.shown(EntityKind::Element)
    }

    /// Elements hidden as of the last update.
    #[must_use]
    pub fn hidden_elements(&self) -> PartitionView<'_> {
        self.hidden(EntityKind::Element)
    }

    /// Rigid-body elements shown as of the last update.
    #[must_use]
    pub fn shown_rbes(&self) -> PartitionView<'_> {
        self.shown(EntityKind::Rbe)
    }

    /// Rigid-body elements hidden as of the last update.
    #[must_use]
    pub fn hidden_rbes(&self) -> PartitionView<'_> {
        self.hidden(EntityKind::Rbe)
    }

    // --- Visibility mutation ---
    //
    // None of these re-run the filters; call `update` afterwards.

    /// Sets the visibility of the entity at `local_index`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::IndexOutOfRange`] if there is no such entity.
    pub fn set_visible(&mut self, kind: EntityKind, local_index: usize, visible: bool) -> Result<()> {
        let collection = self.collection_mut(kind);
        let len = collection.len();
        let entity = collection
            .get_mut(local_index)
            .ok_or(SelectionError::IndexOutOfRange {
                kind,
                index: local_index,
                len,
            })?;
        entity.set_visible(Some(visible));
        Ok(())
    }

    /// Sets the visibility of the entity carrying `original_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownOriginalId`] if no entity has that id.
    pub fn set_visible_by_original_id(
        &mut self,
        kind: EntityKind,
        original_id: i64,
        visible: bool,
    ) -> Result<()> {
        let local_index = self.local_index_of(kind, original_id)?;
        self.set_visible(kind, local_index, visible)
    }

    /// Sets the visibility of every entity of `kind`.
    pub fn set_all_visible(&mut self, kind: EntityKind, visible: bool) {
        for entity in self.collection_mut(kind).iter_mut() {
            entity.set_visible(Some(visible));
        }
    }

    /// Returns every flag of `kind` to unset, which reads as visible.
    pub fn clear_visibility(&mut self, kind: EntityKind) {
        for entity in self.collection_mut(kind).iter_mut() {
            entity.set_visible(None);
        }
    }

    /// Hides every entity whose original id is in `original_ids`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownOriginalId`] for the first unknown id;
    /// no flag is changed in that case.
    pub fn hide_selection(&mut self, kind: EntityKind, original_ids: &[i64]) -> Result<()> {
        self.apply_selection(kind, original_ids, false)
    }

    /// Shows every entity whose original id is in `original_ids`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownOriginalId`] for the first unknown id;
    /// no flag is changed in that case.
    pub fn show_selection(&mut self, kind: EntityKind, original_ids: &[i64]) -> Result<()> {
        self.apply_selection(kind, original_ids, true)
    }

    fn apply_selection(&mut self, kind: EntityKind, original_ids: &[i64], visible: bool) -> Result<()> {
        let indices = original_ids
            .iter()
            .map(|&id| self.local_index_of(kind, id))
            .collect::<Result<Vec<_>>>()?;
        for local_index in indices {
            self.set_visible(kind, local_index, visible)?;
        }
        Ok(())
    }

    fn local_index_of(&self, kind: EntityKind, original_id: i64) -> Result<usize> {
        self.collection(kind)
            .position_of(original_id)
            .ok_or_else(|| SelectionError::UnknownOriginalId { kind, id: original_id }.into())
    }

    fn collection_mut(&mut self, kind: EntityKind) -> &mut EntityCollection {
        match kind {
            EntityKind::Node => &mut self.nodes,
            EntityKind::Element => &mut self.elements,
            EntityKind::Rbe => &mut self.rbes,
        }
    }

    fn filter_mut(&mut self, kind: EntityKind) -> &mut SelectionFilter {
        match kind {
            EntityKind::Node => &mut self.node_filter,
            EntityKind::Element => &mut self.element_filter,
            EntityKind::Rbe => &mut self.rbe_filter,
        }
    }

    fn bind_filters(&mut self) {
        for kind in EntityKind::ALL {
            self.filter_mut(kind).set_input(kind);
        }
    }
}
