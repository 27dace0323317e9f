//! Compendium items, entries, source documents, and import jobs.

use bestiary_foundation::{
    CompendiumItemKey, CompendiumItemReference, CompendiumItemType, Error, RealmId, Result,
};
use bestiary_grammar::ParseableSpellDescription;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, DocumentId, GroupId, ImportJobId};
use crate::stat_block::StatBlock;

// =============================================================================
// Items
// =============================================================================

/// A monster. Its key identifier is its name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Monster {
    /// Realm the monster lives in.
    pub realm: RealmId,
    /// Statistics.
    pub stats: StatBlock,
    /// Challenge rating as written.
    pub challenge_rating: Option<String>,
}

impl Monster {
    /// Creates a monster.
    #[must_use]
    pub fn new(realm: RealmId, stats: StatBlock) -> Self {
        Self {
            realm,
            stats,
            challenge_rating: None,
        }
    }

    /// The monster's key.
    #[must_use]
    pub fn key(&self) -> CompendiumItemKey {
        CompendiumItemKey::new(
            CompendiumItemType::Monster,
            self.realm.clone(),
            self.stats.name.clone(),
        )
    }
}

/// A player or non-player character. Its key identifier is its id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Character {
    /// Stable id.
    pub id: CharacterId,
    /// Realm the character lives in.
    pub realm: RealmId,
    /// Character level.
    pub level: Option<i32>,
    /// Statistics.
    pub stats: StatBlock,
}

impl Character {
    /// Creates a character.
    #[must_use]
    pub fn new(id: CharacterId, realm: RealmId, stats: StatBlock) -> Self {
        Self {
            id,
            realm,
            level: None,
            stats,
        }
    }

    /// The character's key.
    #[must_use]
    pub fn key(&self) -> CompendiumItemKey {
        CompendiumItemKey::new(CompendiumItemType::Character, self.realm.clone(), self.id.as_str())
    }
}

/// Spell components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum SpellComponent {
    Verbal,
    Somatic,
    Material,
}

/// A spell. Its key identifier is its name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spell {
    /// Realm the spell lives in.
    pub realm: RealmId,
    /// Spell name.
    pub name: String,
    /// Spell level; `None` for cantrips.
    pub level: Option<i32>,
    /// Casting time as written.
    pub casting_time: String,
    /// Range as written.
    pub range: String,
    /// Components.
    pub components: Vec<SpellComponent>,
    /// Castable as a ritual.
    pub ritual: bool,
    /// Duration as written.
    pub duration: String,
    /// School of magic.
    pub school: String,
    /// Requires concentration.
    pub concentration: bool,
    /// Description with its cached dice.
    pub description: ParseableSpellDescription,
    /// The "At Higher Levels" paragraph.
    pub higher_level_description: Option<String>,
    /// Classes that can learn the spell.
    pub classes: Vec<String>,
    /// Material component detail.
    pub material: Option<String>,
}

impl Spell {
    /// A spell with a name and description and nothing else.
    #[must_use]
    pub fn new(realm: RealmId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            realm,
            name: name.into(),
            level: None,
            casting_time: String::new(),
            range: String::new(),
            components: Vec::new(),
            ritual: false,
            duration: String::new(),
            school: String::new(),
            concentration: false,
            description: ParseableSpellDescription::new(description.into()),
            higher_level_description: None,
            classes: Vec::new(),
            material: None,
        }
    }

    /// The spell's key.
    #[must_use]
    pub fn key(&self) -> CompendiumItemKey {
        CompendiumItemKey::new(CompendiumItemType::Spell, self.realm.clone(), self.name.clone())
    }
}

/// A named group of other items, such as a party.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompendiumItemGroup {
    /// Stable id.
    pub id: GroupId,
    /// Realm the group lives in.
    pub realm: RealmId,
    /// Display title.
    pub title: String,
    /// The grouped items.
    pub members: Vec<CompendiumItemReference>,
}

impl CompendiumItemGroup {
    /// The group's key.
    #[must_use]
    pub fn key(&self) -> CompendiumItemKey {
        CompendiumItemKey::new(CompendiumItemType::Group, self.realm.clone(), self.id.as_str())
    }
}

/// The closed set of compendium items.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub enum CompendiumItem {
    Monster(Monster),
    Character(Character),
    Spell(Spell),
    Group(CompendiumItemGroup),
}

impl CompendiumItem {
    /// The item's type.
    #[must_use]
    pub fn item_type(&self) -> CompendiumItemType {
        match self {
            Self::Monster(_) => CompendiumItemType::Monster,
            Self::Character(_) => CompendiumItemType::Character,
            Self::Spell(_) => CompendiumItemType::Spell,
            Self::Group(_) => CompendiumItemType::Group,
        }
    }

    /// The item's key.
    #[must_use]
    pub fn key(&self) -> CompendiumItemKey {
        match self {
            Self::Monster(m) => m.key(),
            Self::Character(c) => c.key(),
            Self::Spell(s) => s.key(),
            Self::Group(g) => g.key(),
        }
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Monster(m) => &m.stats.name,
            Self::Character(c) => &c.stats.name,
            Self::Spell(s) => &s.name,
            Self::Group(g) => &g.title,
        }
    }

    /// The realm the item lives in.
    #[must_use]
    pub fn realm(&self) -> &RealmId {
        match self {
            Self::Monster(m) => &m.realm,
            Self::Character(c) => &c.realm,
            Self::Spell(s) => &s.realm,
            Self::Group(g) => &g.realm,
        }
    }

    /// Moves the item to another realm.
    pub fn set_realm(&mut self, realm: RealmId) {
        match self {
            Self::Monster(m) => m.realm = realm,
            Self::Character(c) => c.realm = realm,
            Self::Spell(s) => s.realm = realm,
            Self::Group(g) => g.realm = realm,
        }
    }

    /// Re-keys the item: its realm and its identifier.
    ///
    /// # Errors
    ///
    /// Returns `InvalidItemKey` if `key` is for another item type; the item
    /// is left unchanged.
    pub fn set_key(&mut self, key: CompendiumItemKey) -> Result<()> {
        if key.item_type != self.item_type() {
            log::error!("refusing to re-key a {} with {key}", self.item_type());
            return Err(Error::invalid_item_key(key.to_string()));
        }
        let CompendiumItemKey { realm, identifier, .. } = key;
        match self {
            Self::Monster(m) => {
                m.realm = realm;
                m.stats.name = identifier;
            }
            Self::Character(c) => {
                c.realm = realm;
                c.id = CharacterId::new(identifier);
            }
            Self::Spell(s) => {
                s.realm = realm;
                s.name = identifier;
            }
            Self::Group(g) => {
                g.realm = realm;
                g.id = GroupId::new(identifier);
            }
        }
        Ok(())
    }

    /// A reference to this item.
    #[must_use]
    pub fn reference(&self) -> CompendiumItemReference {
        CompendiumItemReference::new(self.title(), self.key())
    }
}

// =============================================================================
// Documents and entries
// =============================================================================

/// A source document's identity as recorded on an entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DocumentRef {
    /// Document id.
    pub id: DocumentId,
    /// Display name at the time of recording.
    pub display_name: String,
}

/// A document that compendium content comes from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompendiumSourceDocument {
    /// Document id.
    pub id: DocumentId,
    /// The realm holding the document's items.
    pub realm_id: RealmId,
    /// Display name.
    pub display_name: String,
}

impl CompendiumSourceDocument {
    /// Creates a document.
    #[must_use]
    pub fn new(id: DocumentId, realm_id: RealmId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            realm_id,
            display_name: display_name.into(),
        }
    }

    /// The reference recorded on entries.
    #[must_use]
    pub fn reference(&self) -> DocumentRef {
        DocumentRef {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// Where an entry came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Origin {
    /// Authored by the user, optionally based on another item.
    Created(Option<CompendiumItemReference>),
    /// Brought in by an import job.
    Imported(Option<ImportJobId>),
}

/// A compendium item as stored, with its provenance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompendiumEntry {
    /// The item.
    pub item: CompendiumItem,
    /// Provenance.
    pub origin: Origin,
    /// The source document.
    pub document: DocumentRef,
}

impl CompendiumEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(item: CompendiumItem, origin: Origin, document: DocumentRef) -> Self {
        Self {
            item,
            origin,
            document,
        }
    }

    /// The item's key.
    #[must_use]
    pub fn key(&self) -> CompendiumItemKey {
        self.item.key()
    }
}

/// Identifies the source an import job reads from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImportSourceId {
    /// Reader kind, e.g. `open5e`.
    pub kind: String,
    /// Reader-specific location.
    pub bookmark: String,
}

/// A record of one import run.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompendiumImportJob {
    /// Job id.
    pub id: ImportJobId,
    /// Where the content was read from.
    pub source_id: ImportSourceId,
    /// Source version, when the source reports one.
    pub source_version: Option<String>,
    /// The document the content was imported into.
    pub document_id: DocumentId,
}
