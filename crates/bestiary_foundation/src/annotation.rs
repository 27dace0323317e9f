//! Text annotations that decorate source text without changing it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dice::DiceExpression;
use crate::key::{CompendiumItemReference, CompendiumItemType};
use crate::located::Located;

/// Something worth highlighting inside a piece of text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TextAnnotation {
    /// A rollable dice expression.
    DiceExpression(DiceExpression),
    /// A mention of a compendium item.
    Reference(CompendiumItemReferenceAnnotation),
}

/// A mention of a compendium item found in text.
///
/// `resolved_to` starts out empty and is filled in by whoever can look the
/// mention up in the compendium.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompendiumItemReferenceAnnotation {
    /// The mention as written.
    pub text: String,
    /// The kind of item the mention refers to, if known.
    pub item_type: Option<CompendiumItemType>,
    /// The item the mention was resolved to.
    pub resolved_to: Option<CompendiumItemReference>,
}

impl CompendiumItemReferenceAnnotation {
    /// Creates an unresolved mention.
    #[must_use]
    pub fn unresolved(text: impl Into<String>, item_type: Option<CompendiumItemType>) -> Self {
        Self {
            text: text.into(),
            item_type,
            resolved_to: None,
        }
    }
}

/// Annotations sorted by where they start, for renderers that walk text
/// front to back.
#[must_use]
pub fn sorted_annotations(
    mut annotations: Vec<Located<TextAnnotation>>,
) -> Vec<Located<TextAnnotation>> {
    annotations.sort_by_key(|a| (a.range.start, a.range.end));
    annotations
}
