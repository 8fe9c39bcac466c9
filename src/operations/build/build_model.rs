use std::collections::HashMap;

use crate::error::{BuildError, Result};
use crate::model::{ElementCard, FemModel};
use crate::store::{Connectivity, Entity, EntityKind, GeometryStore, Shape};

use super::card_shape::classify_card;
use super::{BuildOptions, BuildReport, SkippedCard};

/// Populates a [`GeometryStore`] from a parsed model.
///
/// Nodes become points (and bare node entities) in model order; element
/// cards become cells whose connectivity is translated from node ids to
/// local point indices. Cards with no shape handler are skipped and listed
/// in the report.
pub struct BuildModel<'m, M> {
    model: &'m M,
    options: BuildOptions,
}

impl<'m, M: FemModel> BuildModel<'m, M> {
    /// Creates a new `BuildModel` operation with default options.
    #[must_use]
    pub fn new(model: &'m M) -> Self {
        Self::with_options(model, BuildOptions::default())
    }

    /// Creates a new `BuildModel` operation.
    #[must_use]
    pub fn with_options(model: &'m M, options: BuildOptions) -> Self {
        Self { model, options }
    }

    /// Executes the build.
    ///
    /// The filters are not re-run; call [`GeometryStore::update`] to refresh
    /// the shown/hidden views.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MalformedReference`] if an element references a
    /// node id that is not in the model, and [`BuildError::MissingNodes`] if
    /// a card has fewer node ids than its shape needs. The store is left
    /// partially built and must be reset before reuse.
    pub fn execute(&self, store: &mut GeometryStore) -> Result<BuildReport> {
        if self.options.reset_first {
            store.reset();
        }
        tracing::debug!(nodes = self.model.node_count(), "building geometry");

        let mut report = BuildReport::default();

        // Node id -> local point index. Lives only for this build.
        let mut point_of: HashMap<i64, usize> = HashMap::with_capacity(self.model.node_count());
        for (id, grid) in self.model.nodes() {
            let point = store.push_point(grid.to_global());
            point_of.insert(id, point);
            store.push_entity(EntityKind::Node, Entity::node(id))?;
            report.nodes += 1;
        }

        for (id, card) in self.model.elements() {
            let Some((kind, shape)) = classify_card(&card.card_name) else {
                tracing::warn!(element = id, card = %card.card_name, "unsupported element card, skipped");
                report.skipped.push(SkippedCard {
                    element: id,
                    card_name: card.card_name.clone(),
                });
                continue;
            };

            let connectivity = translate(id, card, shape, &point_of)?;
            store.push_entity(kind, Entity::cell(id, shape, connectivity))?;
            match kind {
                EntityKind::Rbe => report.rbes += 1,
                _ => report.elements += 1,
            }
        }

        tracing::debug!(
            nodes = report.nodes,
            elements = report.elements,
            rbes = report.rbes,
            skipped = report.skipped.len(),
            "geometry built"
        );
        Ok(report)
    }
}

/// Maps a card's node ids to local point indices.
///
/// Fixed shapes read only their first `arity` ids; spiders take all of them.
fn translate(
    element: i64,
    card: &ElementCard,
    shape: Shape,
    point_of: &HashMap<i64, usize>,
) -> std::result::Result<Connectivity, BuildError> {
    let needed = shape.min_points();
    if card.node_ids.len() < needed {
        return Err(BuildError::MissingNodes {
            element,
            card: card.card_name.clone(),
            expected: needed,
            found: card.node_ids.len(),
        });
    }
    let take = shape.arity().unwrap_or(card.node_ids.len());

    card.node_ids[..take]
        .iter()
        .map(|&node| {
            point_of
                .get(&node)
                .copied()
                .ok_or(BuildError::MalformedReference { element, node })
        })
        .collect()
}
