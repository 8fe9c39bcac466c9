use super::entity::{Entity, EntityKind};

/// Ordered entities of one kind.
///
/// The position of an entity is its local index. Entities are only ever
/// appended, so a local index stays valid until the collection is cleared.
#[derive(Debug, Clone)]
pub struct EntityCollection {
    kind: EntityKind,
    entities: Vec<Entity>,
}

impl EntityCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            entities: Vec::new(),
        }
    }

    /// Which of the store's collections this is.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the collection holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns the entity at `local_index`.
    #[must_use]
    pub fn get(&self, local_index: usize) -> Option<&Entity> {
        self.entities.get(local_index)
    }

    /// Iterates entities in local-index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    /// Local index of the first entity carrying `original_id`.
    #[must_use]
    pub fn position_of(&self, original_id: i64) -> Option<usize> {
        self.entities
            .iter()
            .position(|e| e.original_id() == original_id)
    }

    pub(crate) fn get_mut(&mut self, local_index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(local_index)
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Entity> {
        self.entities.iter_mut()
    }

    pub(crate) fn push(&mut self, entity: Entity) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    pub(crate) fn clear(&mut self) {
        self.entities.clear();
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.entities.shrink_to_fit();
        for entity in &mut self.entities {
            entity.shrink_to_fit();
        }
    }
}

impl<'a> IntoIterator for &'a EntityCollection {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
