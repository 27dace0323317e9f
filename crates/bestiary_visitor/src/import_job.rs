//! Re-pointing import jobs at a renamed document.

use bestiary_models::{CompendiumImportJob, DocumentId};

use crate::visitor::GameModelsVisitor;

/// Rewrites the document id of import jobs that targeted `original`.
#[derive(Debug)]
pub struct UpdateImportJobVisitor {
    original: DocumentId,
    updated: DocumentId,
}

impl UpdateImportJobVisitor {
    /// Creates the visitor.
    #[must_use]
    pub fn new(original: DocumentId, updated: DocumentId) -> Self {
        Self { original, updated }
    }
}

impl GameModelsVisitor for UpdateImportJobVisitor {
    fn visit_import_job(&mut self, job: &mut CompendiumImportJob) -> bool {
        if job.document_id != self.original || self.original == self.updated {
            return false;
        }
        job.document_id = self.updated.clone();
        true
    }
}
