//! Pointing entries at a different source document.

use bestiary_models::{CompendiumEntry, CompendiumSourceDocument, DocumentId};

use crate::combine::visit_value;
use crate::visit_all;
use crate::visitor::{GameModelsVisitor, walk_compendium_entry};

/// Rewrites the document of entries to `target`, moving their items into
/// the target's realm.
///
/// With an original document id, only entries of that document are
/// touched; without one, every entry is.
#[derive(Debug)]
pub struct UpdateEntryDocumentVisitor {
    original_document_id: Option<DocumentId>,
    target: CompendiumSourceDocument,
}

impl UpdateEntryDocumentVisitor {
    /// Creates the visitor.
    #[must_use]
    pub fn new(original_document_id: Option<DocumentId>, target: CompendiumSourceDocument) -> Self {
        Self {
            original_document_id,
            target,
        }
    }

    fn applies_to(&self, entry: &CompendiumEntry) -> bool {
        self.original_document_id
            .as_ref()
            .is_none_or(|id| &entry.document.id == id)
    }
}

impl GameModelsVisitor for UpdateEntryDocumentVisitor {
    fn visit_compendium_entry(&mut self, entry: &mut CompendiumEntry) -> bool {
        let children = walk_compendium_entry(self, entry);
        if !self.applies_to(entry) {
            return children;
        }
        visit_all!(
            children,
            visit_value(&mut entry.document, self.target.reference()),
            if entry.item.realm() == &self.target.realm_id {
                false
            } else {
                entry.item.set_realm(self.target.realm_id.clone());
                true
            },
        )
    }
}
