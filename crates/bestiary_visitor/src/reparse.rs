//! Bringing cached parse results up to date.

use bestiary_foundation::{DomainModel, DomainParser, Parseable};
use bestiary_grammar::{
    DomainParsers, ParseableCreatureAction, ParseableCreatureFeature, ParseableMonsterType,
    ParseableSpellDescription,
};

use crate::visit_all;
use crate::visitor::{GameModelsVisitor, walk_creature_feature};

/// Leaf counts from a [`ReparseVisitor`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReparseStats {
    /// Parseable leaves reached.
    pub visited: usize,
    /// Leaves whose cache was missing or stale and got re-parsed.
    pub reparsed: usize,
}

/// Re-parses every parseable leaf whose cache is missing or stale.
#[derive(Debug, Default)]
pub struct ReparseVisitor {
    parsers: DomainParsers,
    stats: ReparseStats,
}

impl ReparseVisitor {
    /// A visitor using `parsers`.
    #[must_use]
    pub fn new(parsers: DomainParsers) -> Self {
        Self {
            parsers,
            stats: ReparseStats::default(),
        }
    }

    /// Counts so far.
    #[must_use]
    pub fn stats(&self) -> ReparseStats {
        self.stats
    }

    /// The parsers in use.
    #[must_use]
    pub fn parsers(&self) -> &DomainParsers {
        &self.parsers
    }

    fn reparse<I, R: DomainModel>(
        &mut self,
        parseable: &mut Parseable<I, R>,
        parser: DomainParser<I, R>,
    ) -> bool {
        self.stats.visited += 1;
        let changed = parseable.parse_if_needed(&parser);
        if changed {
            self.stats.reparsed += 1;
        }
        changed
    }
}

impl GameModelsVisitor for ReparseVisitor {
    fn visit_creature_feature(&mut self, feature: &mut ParseableCreatureFeature) -> bool {
        let parser = self.parsers.creature_feature;
        visit_all!(
            self.reparse(feature, parser),
            walk_creature_feature(self, feature),
        )
    }

    fn visit_creature_action(&mut self, action: &mut ParseableCreatureAction) -> bool {
        let parser = self.parsers.creature_action;
        self.reparse(action, parser)
    }

    fn visit_monster_type(&mut self, monster_type: &mut ParseableMonsterType) -> bool {
        let parser = self.parsers.monster_type;
        self.reparse(monster_type, parser)
    }

    fn visit_spell_description(&mut self, description: &mut ParseableSpellDescription) -> bool {
        let parser = self.parsers.spell_description;
        self.reparse(description, parser)
    }
}
