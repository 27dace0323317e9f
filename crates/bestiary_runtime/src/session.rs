//! Session state for the parse inspector.
//!
//! The session keeps the parsers in effect, a scratch stat block that
//! collects everything inspected so far, and any entities loaded from disk.

use std::fmt::Write;
use std::path::Path;

use bestiary_foundation::{Located, Parseable, RealmId, Result, TextAnnotation};
use bestiary_grammar::{
    CreatureAction, CreatureFeature, DomainParsers, ParseableMonsterType, ParseableSpellDescription,
    dice_matches,
};
use bestiary_models::{
    CompendiumEntry, CompendiumItem, DocumentId, DocumentRef, GameEntity, Monster, Origin,
    StatBlock,
};
use bestiary_visitor::{GameModelsVisitor, ReparseVisitor, run_pass};

use crate::format::{Style, render_annotated};
use crate::serialize::{load_from_file, save_to_file};

/// Interactive session state.
#[derive(Debug)]
pub struct Session {
    parsers: DomainParsers,
    scratch: StatBlock,
    entities: Vec<GameEntity>,
    style: Style,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DomainParsers::default())
    }
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new(parsers: DomainParsers) -> Self {
        Self {
            parsers,
            scratch: StatBlock::named("Scratch"),
            entities: Vec::new(),
            style: Style::Plain,
        }
    }

    /// Sets how annotations are rendered.
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The parsers in effect.
    #[must_use]
    pub const fn parsers(&self) -> &DomainParsers {
        &self.parsers
    }

    /// Everything inspected so far.
    #[must_use]
    pub const fn scratch(&self) -> &StatBlock {
        &self.scratch
    }

    /// Entities loaded from disk.
    #[must_use]
    pub fn entities(&self) -> &[GameEntity] {
        &self.entities
    }

    /// Forgets the scratch stat block and loaded entities.
    pub fn clear(&mut self) {
        self.scratch = StatBlock::named("Scratch");
        self.entities.clear();
    }

    fn render(&self, text: &str, annotations: Vec<Located<TextAnnotation>>) -> String {
        render_annotated(text, annotations, self.style)
    }

    /// Parses an action and adds it to the scratch stat block.
    pub fn inspect_action(&mut self, action: CreatureAction) -> String {
        let mut parseable = Parseable::new(action);
        parseable.parse_if_needed(&self.parsers.creature_action);
        let input = parseable.input();
        let mut out = String::new();
        match parseable.value(&self.parsers.creature_action) {
            Some(parsed) => {
                let _ = writeln!(out, "{}", self.render(&input.name, parsed.name_annotations()));
                let _ = writeln!(
                    out,
                    "  {}",
                    self.render(&input.description, parsed.description_annotations().to_vec())
                );
                if let Some(limited_use) = &parsed.limited_use {
                    let _ = writeln!(out, "  limited use: {}", limited_use.value);
                }
                if let Some(model) = &parsed.action {
                    let _ = writeln!(out, "  {model:?}");
                }
            }
            None => {
                let _ = writeln!(out, "{}\n  (nothing recognized)", input.name);
            }
        }
        self.scratch.actions.push(parseable);
        out.trim_end().to_string()
    }

    /// Parses a feature and adds it to the scratch stat block.
    pub fn inspect_feature(&mut self, feature: CreatureFeature) -> String {
        let mut parseable = Parseable::new(feature);
        parseable.parse_if_needed(&self.parsers.creature_feature);
        let input = parseable.input();
        let mut out = String::new();
        match parseable.value(&self.parsers.creature_feature) {
            Some(parsed) => {
                let _ = writeln!(out, "{}", self.render(&input.name, parsed.name_annotations()));
                let _ = writeln!(
                    out,
                    "  {}",
                    self.render(&input.description, parsed.description_annotations())
                );
                if let Some(limited_use) = &parsed.limited_use {
                    let _ = writeln!(out, "  limited use: {}", limited_use.value);
                }
                if let Some(spellcasting) = &parsed.spellcasting {
                    let spells: Vec<_> = spellcasting
                        .spell_references()
                        .map(|r| r.value.text.as_str())
                        .collect();
                    let _ = writeln!(out, "  spells: {}", spells.join(", "));
                }
            }
            None => {
                let _ = writeln!(out, "{}\n  (nothing recognized)", input.name);
            }
        }
        self.scratch.features.push(parseable);
        out.trim_end().to_string()
    }

    /// Parses a spell description.
    #[must_use]
    pub fn inspect_spell(&self, description: &str) -> String {
        let mut parseable = ParseableSpellDescription::new(description.to_string());
        match parseable.parsed(&self.parsers.spell_description) {
            Some(parsed) => self.render(description, parsed.annotations()),
            None => "(no dice)".to_string(),
        }
    }

    /// Finds the monster type in `text`.
    #[must_use]
    pub fn inspect_type(&self, text: &str) -> String {
        let mut parseable = ParseableMonsterType::new(text.to_string());
        match parseable.parsed(&self.parsers.monster_type) {
            Some(parsed) => {
                let found = &parsed.monster_type;
                format!("{} (at {}..{})", found.value, found.range.start, found.range.end)
            }
            None => "(no monster type)".to_string(),
        }
    }

    /// Lists the dice expressions in `text` with their ranges.
    #[must_use]
    pub fn inspect_dice(&self, text: &str) -> String {
        let found = dice_matches(text);
        if found.is_empty() {
            return "(no dice)".to_string();
        }
        found
            .iter()
            .map(|d| {
                format!(
                    "{} [{}..{}] min {} max {}",
                    d.value,
                    d.range.start,
                    d.range.end,
                    d.value.minimum(),
                    d.value.maximum()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Re-parses everything held by the session.
    pub fn reparse(&mut self) -> String {
        let mut visitor = ReparseVisitor::new(self.parsers);
        let scratch_changed = visitor.visit_stat_block(&mut self.scratch);
        let report = run_pass(&mut [&mut visitor], &mut self.entities);
        let stats = visitor.stats();
        format!(
            "{} visited, {} re-parsed; scratch {}, {} of {} entities changed",
            stats.visited,
            stats.reparsed,
            if scratch_changed { "changed" } else { "unchanged" },
            report.changed.len(),
            report.visited
        )
    }

    /// Writes the loaded entities plus the scratch stat block to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<usize> {
        let scratch = CompendiumEntry::new(
            CompendiumItem::Monster(Monster::new(RealmId::homebrew(), self.scratch.clone())),
            Origin::Created(None),
            DocumentRef {
                id: DocumentId::new("scratch"),
                display_name: "Scratch".to_string(),
            },
        );
        let mut entities = self.entities.clone();
        entities.push(scratch.into());
        save_to_file(&entities, path)?;
        Ok(entities.len())
    }

    /// Replaces the loaded entities with the contents of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        self.entities = load_from_file(path)?;
        Ok(self.entities.len())
    }
}
