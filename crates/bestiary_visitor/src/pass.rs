//! Dispatching visitors over top-level entities.

use bestiary_models::GameEntity;

use crate::visitor::GameModelsVisitor;

/// Runs `visitor` over one top-level entity.
pub fn visit_entity<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    entity: &mut GameEntity,
) -> bool {
    match entity {
        GameEntity::Encounter(encounter) => visitor.visit_encounter(encounter),
        GameEntity::RunningEncounter(running) => visitor.visit_running_encounter(running),
        GameEntity::CompendiumEntry(entry) => visitor.visit_compendium_entry(entry),
        GameEntity::ImportJob(job) => visitor.visit_import_job(job),
    }
}

/// What a pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Entities visited.
    pub visited: usize,
    /// Indices of the entities that changed, in order.
    pub changed: Vec<usize>,
}

impl PassReport {
    /// Returns true if any entity changed.
    #[must_use]
    pub fn any_changed(&self) -> bool {
        !self.changed.is_empty()
    }
}

/// Runs every visitor over every entity.
///
/// All visitors run on an entity even after one of them changed it. The
/// report lists the entities the caller has to persist again.
pub fn run_pass(
    visitors: &mut [&mut dyn GameModelsVisitor],
    entities: &mut [GameEntity],
) -> PassReport {
    let mut report = PassReport::default();
    for (index, entity) in entities.iter_mut().enumerate() {
        let changed = visitors
            .iter_mut()
            .fold(false, |changed, visitor| visit_entity(&mut **visitor, entity) || changed);
        report.visited += 1;
        if changed {
            log::trace!("{} #{index} changed", entity.kind());
            report.changed.push(index);
        }
    }
    log::debug!(
        "visitor pass: {} visitors, {} entities, {} changed",
        visitors.len(),
        report.visited,
        report.changed.len()
    );
    report
}
