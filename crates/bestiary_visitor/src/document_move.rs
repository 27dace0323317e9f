//! Follow-up rewrites after a source document is renamed or moved.

use std::collections::HashSet;

use bestiary_foundation::{CompendiumItemKey, CompendiumItemReference, Error, RealmId, Result};
use bestiary_models::{
    CompendiumCombatant, CompendiumCombatantDefinition, CompendiumEntry, CompendiumImportJob,
    CompendiumSourceDocument, DocumentId,
};

use crate::combine::visit_value;
use crate::visit_all;
use crate::visitor::{
    GameModelsVisitor, walk_compendium_definition, walk_compendium_entry,
};

/// Updates entries, import jobs, and references after a document changed
/// its id, display name, or realm.
///
/// When the document moved to another realm, every key in `moving` is
/// re-keyed into the new realm wherever it is referenced.
#[derive(Debug)]
pub struct PostDocumentMoveVisitor {
    updated_document: CompendiumSourceDocument,
    original_realm: RealmId,
    original_document_id: DocumentId,
    moving: Option<HashSet<CompendiumItemKey>>,
}

impl PostDocumentMoveVisitor {
    /// Creates the visitor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the document changes realm and `moving`
    /// is `None`.
    pub fn new(
        updated_document: CompendiumSourceDocument,
        original_realm: RealmId,
        original_document_id: DocumentId,
        moving: Option<HashSet<CompendiumItemKey>>,
    ) -> Result<Self> {
        if updated_document.realm_id != original_realm && moving.is_none() {
            return Err(Error::invalid_argument(format!(
                "moving document {original_document_id} from realm {original_realm} to {} \
                requires the set of moving keys",
                updated_document.realm_id
            )));
        }
        Ok(Self {
            updated_document,
            original_realm,
            original_document_id,
            moving,
        })
    }

    fn document_id_changed(&self) -> bool {
        self.updated_document.id != self.original_document_id
    }

    fn moved_between_realms(&self) -> bool {
        self.updated_document.realm_id != self.original_realm
    }

    /// The key `key` moves to, if it moves.
    fn moved_key(&self, key: &CompendiumItemKey) -> Option<CompendiumItemKey> {
        if !self.moved_between_realms() {
            return None;
        }
        self.moving
            .as_ref()
            .filter(|moving| moving.contains(key))
            .map(|_| key.in_realm(self.updated_document.realm_id.clone()))
    }
}

impl GameModelsVisitor for PostDocumentMoveVisitor {
    fn visit_compendium_entry(&mut self, entry: &mut CompendiumEntry) -> bool {
        let children = walk_compendium_entry(self, entry);
        if entry.document.id != self.original_document_id {
            return children;
        }
        visit_all!(
            children,
            visit_value(
                &mut entry.document.display_name,
                self.updated_document.display_name.clone()
            ),
            visit_value(&mut entry.document.id, self.updated_document.id.clone()),
            if self.moved_between_realms()
                && entry.item.realm() != &self.updated_document.realm_id
            {
                entry.item.set_realm(self.updated_document.realm_id.clone());
                true
            } else {
                false
            },
        )
    }

    fn visit_import_job(&mut self, job: &mut CompendiumImportJob) -> bool {
        if job.document_id == self.original_document_id && self.document_id_changed() {
            job.document_id = self.updated_document.id.clone();
            return true;
        }
        false
    }

    fn visit_compendium_definition(
        &mut self,
        definition: &mut CompendiumCombatantDefinition,
    ) -> bool {
        let children = walk_compendium_definition(self, definition);
        let Some(key) = self.moved_key(&definition.item.key()) else {
            return children;
        };
        let realm = key.realm;
        let rekeyed = match &mut definition.item {
            CompendiumCombatant::Monster(monster) => visit_value(&mut monster.realm, realm),
            CompendiumCombatant::Character(character) => visit_value(&mut character.realm, realm),
        };
        children || rekeyed
    }

    fn visit_item_reference(&mut self, reference: &mut CompendiumItemReference) -> bool {
        match self.moved_key(&reference.item_key) {
            Some(key) => visit_value(&mut reference.item_key, key),
            None => false,
        }
    }
}
