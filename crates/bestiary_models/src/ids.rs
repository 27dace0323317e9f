//! String-backed identifiers.
//!
//! Each entity kind gets its own newtype so ids of different kinds cannot be
//! mixed up.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub String);

        impl $name {
            /// Creates an id.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the id as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

string_id!(
    /// Identifies an [`Encounter`](crate::Encounter).
    EncounterId
);
string_id!(
    /// Identifies a [`RunningEncounter`](crate::RunningEncounter).
    RunningEncounterId
);
string_id!(
    /// Identifies a [`Combatant`](crate::Combatant) within an encounter.
    CombatantId
);
string_id!(
    /// Identifies an ad-hoc combatant definition.
    AdHocCombatantId
);
string_id!(
    /// Identifies a [`Character`](crate::Character).
    CharacterId
);
string_id!(
    /// Identifies a [`CompendiumItemGroup`](crate::CompendiumItemGroup).
    GroupId
);
string_id!(
    /// Identifies a [`CompendiumImportJob`](crate::CompendiumImportJob).
    ImportJobId
);
string_id!(
    /// Identifies a [`CompendiumSourceDocument`](crate::CompendiumSourceDocument).
    DocumentId
);
