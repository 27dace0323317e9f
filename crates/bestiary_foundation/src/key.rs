//! Compendium item identity: item types, realms, keys, and references.
//!
//! A key string looks like `monster::core::Goblin`: the item type, the realm
//! the item lives in, and an identifier that is unique within that realm.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Separator between the components of a key string.
pub const KEY_SEPARATOR: &str = "::";

/// The closed set of compendium item kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CompendiumItemType {
    /// A monster stat block.
    Monster,
    /// A player or non-player character.
    Character,
    /// A spell.
    Spell,
    /// A named group of other items.
    Group,
}

impl CompendiumItemType {
    /// All item types, in declaration order.
    pub const ALL: [CompendiumItemType; 4] = [
        CompendiumItemType::Monster,
        CompendiumItemType::Character,
        CompendiumItemType::Spell,
        CompendiumItemType::Group,
    ];

    /// Returns the lowercase name used in key strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monster => "monster",
            Self::Character => "character",
            Self::Spell => "spell",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for CompendiumItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompendiumItemType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::invalid_item_key(s))
    }
}

/// Identifies a realm: a collection that compendium items live in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RealmId(pub String);

impl RealmId {
    /// Creates a realm id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The realm holding bundled content.
    #[must_use]
    pub fn core() -> Self {
        Self::new("core")
    }

    /// The realm holding user-authored content.
    #[must_use]
    pub fn homebrew() -> Self {
        Self::new("homebrew")
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RealmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique key of a compendium item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompendiumItemKey {
    /// What kind of item this is.
    pub item_type: CompendiumItemType,
    /// Which realm the item lives in.
    pub realm: RealmId,
    /// Identifier within the realm (a name for monsters and spells, an id otherwise).
    pub identifier: String,
}

impl CompendiumItemKey {
    /// Creates a key.
    #[must_use]
    pub fn new(
        item_type: CompendiumItemType,
        realm: RealmId,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            item_type,
            realm,
            identifier: identifier.into(),
        }
    }

    /// Returns the same key in another realm.
    #[must_use]
    pub fn in_realm(&self, realm: RealmId) -> Self {
        Self {
            realm,
            ..self.clone()
        }
    }

    /// Returns the `type::realm::identifier` form.
    #[must_use]
    pub fn key_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompendiumItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{KEY_SEPARATOR}{}{KEY_SEPARATOR}{}",
            self.item_type, self.realm, self.identifier
        )
    }
}

impl FromStr for CompendiumItemKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, KEY_SEPARATOR);
        let (Some(item_type), Some(realm), Some(identifier)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::invalid_item_key(s));
        };
        if realm.is_empty() || identifier.is_empty() {
            return Err(Error::invalid_item_key(s));
        }
        let item_type = item_type
            .parse()
            .map_err(|_| Error::invalid_item_key(s))?;
        Ok(Self::new(item_type, RealmId::new(realm), identifier))
    }
}

/// A non-owning pointer to a compendium item, with the title it had when
/// the reference was made.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompendiumItemReference {
    /// Display title of the referenced item.
    pub item_title: String,
    /// Key of the referenced item.
    pub item_key: CompendiumItemKey,
}

impl CompendiumItemReference {
    /// Creates a reference.
    #[must_use]
    pub fn new(item_title: impl Into<String>, item_key: CompendiumItemKey) -> Self {
        Self {
            item_title: item_title.into(),
            item_key,
        }
    }
}
