//! Versioned parse-result cache.
//!
//! A [`Parseable`] owns a raw input together with an optional cached
//! [`ParserResult`]. The cache is tagged with the identity and version of the
//! [`DomainParser`] that produced it and the version of the structured model
//! ([`DomainModel::VERSION`]). A cache is only served while all three match
//! the parser the caller passes in; otherwise it is stale and recomputed.
//!
//! ```text
//!  Unparsed ──parse_if_needed──▶ Valid ──(parser or model bump)──▶ Stale
//!                                  ▲                                 │
//!                                  └─────────parse_if_needed─────────┘
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// A structured model produced by a domain parser.
///
/// Bumping `VERSION` invalidates every cached result of this model.
pub trait DomainModel {
    /// Version of the model's shape and semantics.
    const VERSION: &'static str;
}

/// A named, versioned, pure parse function.
///
/// Descriptors are plain values passed to whoever parses, so the
/// compatibility triple of every cached result traces back to one of them.
pub struct DomainParser<I, R> {
    identity: &'static str,
    version: &'static str,
    parse_fn: fn(&I) -> Option<R>,
}

impl<I, R> DomainParser<I, R> {
    /// Creates a descriptor.
    #[must_use]
    pub const fn new(
        identity: &'static str,
        version: &'static str,
        parse_fn: fn(&I) -> Option<R>,
    ) -> Self {
        Self {
            identity,
            version,
            parse_fn,
        }
    }

    /// The parser's identity.
    #[must_use]
    pub const fn identity(&self) -> &'static str {
        self.identity
    }

    /// The version of the parser's logic.
    #[must_use]
    pub const fn version(&self) -> &'static str {
        self.version
    }

    /// Returns the same parser under another version.
    #[must_use]
    pub fn with_version(self, version: &'static str) -> Self {
        Self { version, ..self }
    }

    /// Runs the parse function.
    pub fn parse(&self, input: &I) -> Option<R> {
        (self.parse_fn)(input)
    }
}

impl<I, R: DomainModel> DomainParser<I, R> {
    /// The version of the model this parser produces.
    #[must_use]
    pub fn model_version(&self) -> &'static str {
        R::VERSION
    }

    /// Parses `input` into a fully tagged result.
    pub fn run(&self, input: &I) -> ParserResult<R> {
        ParserResult {
            value: self.parse(input),
            parser_name: self.identity.to_string(),
            version: self.version.to_string(),
            model_version: R::VERSION.to_string(),
        }
    }
}

impl<I, R> Clone for DomainParser<I, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, R> Copy for DomainParser<I, R> {}

impl<I, R> fmt::Debug for DomainParser<I, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainParser")
            .field("identity", &self.identity)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

/// A cached parse outcome and the triple that produced it.
///
/// `value` is `None` when the parser found nothing; that outcome is cached
/// too, so non-matching text is not re-parsed on every pass.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParserResult<R> {
    /// The structured value, if the parser matched.
    pub value: Option<R>,
    /// Identity of the producing parser.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parser_name: String,
    /// Version of the producing parser.
    pub version: String,
    /// Version of the model `value` conforms to.
    pub model_version: String,
}

impl<R: DomainModel> ParserResult<R> {
    /// Returns true if this result was produced by exactly `parser` against
    /// the current model.
    #[must_use]
    pub fn is_current_for<I>(&self, parser: &DomainParser<I, R>) -> bool {
        self.parser_name == parser.identity()
            && self.version == parser.version()
            && self.model_version == R::VERSION
    }
}

/// Where a [`Parseable`] stands relative to a given parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheState {
    /// No result has been cached.
    Unparsed,
    /// The cached result matches the parser and model.
    Valid,
    /// A cached result exists but its triple does not match.
    Stale,
}

/// Raw input plus an optional version-tagged cached parse result.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Parseable<I, R> {
    input: I,
    result: Option<ParserResult<R>>,
}

impl<I, R> Parseable<I, R> {
    /// Wraps an input with no cached result.
    #[must_use]
    pub const fn new(input: I) -> Self {
        Self {
            input,
            result: None,
        }
    }

    /// Wraps an input together with a previously cached result.
    #[must_use]
    pub const fn with_result(input: I, result: ParserResult<R>) -> Self {
        Self {
            input,
            result: Some(result),
        }
    }

    /// The raw input.
    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Consumes the wrapper, returning the raw input.
    #[must_use]
    pub fn into_input(self) -> I {
        self.input
    }

    /// The cached result, without any staleness check.
    ///
    /// Intended for persistence; callers that want the structured value
    /// use [`Parseable::value`] or [`Parseable::parsed`].
    #[must_use]
    pub fn cached_result(&self) -> Option<&ParserResult<R>> {
        self.result.as_ref()
    }

    /// Mutable access to the cached value, for filling in details that do
    /// not come from the parser (such as resolved references).
    pub fn cached_value_mut(&mut self) -> Option<&mut R> {
        self.result.as_mut().and_then(|r| r.value.as_mut())
    }

    /// Drops the cached result.
    pub fn invalidate(&mut self) {
        self.result = None;
    }
}

impl<I: PartialEq, R> Parseable<I, R> {
    /// Replaces the input. A changed input drops the cached result.
    pub fn set_input(&mut self, input: I) {
        if self.input != input {
            self.input = input;
            self.result = None;
        }
    }
}

impl<I, R: DomainModel> Parseable<I, R> {
    /// Classifies the cache relative to `parser`.
    #[must_use]
    pub fn state(&self, parser: &DomainParser<I, R>) -> CacheState {
        match &self.result {
            None => CacheState::Unparsed,
            Some(result) if result.is_current_for(parser) => CacheState::Valid,
            Some(_) => CacheState::Stale,
        }
    }

    /// Returns true if the cached result may be served for `parser`.
    #[must_use]
    pub fn is_valid(&self, parser: &DomainParser<I, R>) -> bool {
        self.state(parser) == CacheState::Valid
    }

    /// Re-parses the input if the cache is missing or stale.
    ///
    /// Returns true if the cached result was replaced.
    pub fn parse_if_needed(&mut self, parser: &DomainParser<I, R>) -> bool {
        let state = self.state(parser);
        if state == CacheState::Valid {
            return false;
        }
        log::trace!(
            "re-parsing with {}@{} ({state:?})",
            parser.identity(),
            parser.version()
        );
        self.result = Some(parser.run(&self.input));
        true
    }

    /// The cached value, if the cache is valid for `parser` and the parser
    /// matched.
    #[must_use]
    pub fn value(&self, parser: &DomainParser<I, R>) -> Option<&R> {
        if !self.is_valid(parser) {
            return None;
        }
        self.result.as_ref().and_then(|r| r.value.as_ref())
    }

    /// Parses if needed, then returns the structured value.
    pub fn parsed(&mut self, parser: &DomainParser<I, R>) -> Option<&R> {
        self.parse_if_needed(parser);
        self.result.as_ref().and_then(|r| r.value.as_ref())
    }
}

// =============================================================================
// Decoding
// =============================================================================

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
#[serde(bound(deserialize = "I: Deserialize<'de>, R: Deserialize<'de>"))]
enum ParseableRepr<I, R> {
    Current {
        input: I,
        #[serde(default)]
        result: Option<CachedRepr<R>>,
    },
    /// Stores written before inputs were wrapped hold only the input.
    Legacy(I),
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
enum CachedRepr<R> {
    Current(ParserResult<R>),
    Outdated {
        #[serde(default)]
        model_version: Option<String>,
    },
    Unreadable(serde::de::IgnoredAny),
}

#[cfg(feature = "serde")]
impl<R: DomainModel> CachedRepr<R> {
    fn into_result(self) -> Option<ParserResult<R>> {
        match self {
            Self::Current(result) => Some(result),
            Self::Outdated { model_version } => {
                debug_assert!(
                    model_version.as_deref() != Some(R::VERSION),
                    "cached result for model version {} failed to decode",
                    R::VERSION
                );
                log::warn!(
                    "dropping cached result for model version {}",
                    model_version.as_deref().unwrap_or("<unknown>")
                );
                None
            }
            Self::Unreadable(_) => {
                log::warn!("dropping unreadable cached result");
                None
            }
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, I, R> Deserialize<'de> for Parseable<I, R>
where
    I: Deserialize<'de>,
    R: Deserialize<'de> + DomainModel,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match ParseableRepr::<I, R>::deserialize(deserializer)? {
            ParseableRepr::Current { input, result } => Ok(Self {
                input,
                result: result.and_then(CachedRepr::into_result),
            }),
            ParseableRepr::Legacy(input) => Ok(Self::new(input)),
        }
    }
}
