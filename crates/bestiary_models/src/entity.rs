//! The top-level entities persisted by the store.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::compendium::{CompendiumEntry, CompendiumImportJob};
use crate::encounter::{Encounter, RunningEncounter};

/// A top-level entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub enum GameEntity {
    Encounter(Encounter),
    RunningEncounter(RunningEncounter),
    CompendiumEntry(CompendiumEntry),
    ImportJob(CompendiumImportJob),
}

impl GameEntity {
    /// Short kind name, for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Encounter(_) => "encounter",
            Self::RunningEncounter(_) => "running_encounter",
            Self::CompendiumEntry(_) => "compendium_entry",
            Self::ImportJob(_) => "import_job",
        }
    }
}

impl From<Encounter> for GameEntity {
    fn from(value: Encounter) -> Self {
        Self::Encounter(value)
    }
}

impl From<RunningEncounter> for GameEntity {
    fn from(value: RunningEncounter) -> Self {
        Self::RunningEncounter(value)
    }
}

impl From<CompendiumEntry> for GameEntity {
    fn from(value: CompendiumEntry) -> Self {
        Self::CompendiumEntry(value)
    }
}

impl From<CompendiumImportJob> for GameEntity {
    fn from(value: CompendiumImportJob) -> Self {
        Self::ImportJob(value)
    }
}
