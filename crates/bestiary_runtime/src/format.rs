//! Rendering text with its annotations.

use bestiary_foundation::{Located, TextAnnotation, sorted_annotations};

/// How annotated spans are marked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// `[1d6 + 4]` for dice, `{sacred flame}` for references.
    Plain,
    /// Dice in yellow, resolved references in green, unresolved ones in red.
    Ansi,
}

impl Style {
    fn open(self, annotation: &TextAnnotation) -> &'static str {
        match (self, annotation) {
            (Self::Plain, TextAnnotation::DiceExpression(_)) => "[",
            (Self::Plain, TextAnnotation::Reference(_)) => "{",
            (Self::Ansi, TextAnnotation::DiceExpression(_)) => "\x1b[33m",
            (Self::Ansi, TextAnnotation::Reference(r)) if r.resolved_to.is_some() => "\x1b[32m",
            (Self::Ansi, TextAnnotation::Reference(_)) => "\x1b[31m",
        }
    }

    fn close(self, annotation: &TextAnnotation) -> &'static str {
        match (self, annotation) {
            (Self::Plain, TextAnnotation::DiceExpression(_)) => "]",
            (Self::Plain, TextAnnotation::Reference(_)) => "}",
            (Self::Ansi, _) => "\x1b[0m",
        }
    }
}

/// Marks every annotated span of `text`.
///
/// Ranges are in `char`s. Annotations that overlap an earlier one or fall
/// outside the text are skipped.
#[must_use]
pub fn render_annotated(
    text: &str,
    annotations: Vec<Located<TextAnnotation>>,
    style: Style,
) -> String {
    let mut out = String::with_capacity(text.len() + 8 * annotations.len());
    let mut cursor = 0;
    for annotation in sorted_annotations(annotations) {
        let Some(bytes) = annotation.byte_range(text) else {
            log::debug!("annotation {:?} outside text", annotation.range);
            continue;
        };
        if bytes.start < cursor {
            continue;
        }
        out.push_str(&text[cursor..bytes.start]);
        out.push_str(style.open(&annotation.value));
        out.push_str(&text[bytes.clone()]);
        out.push_str(style.close(&annotation.value));
        cursor = bytes.end;
    }
    out.push_str(&text[cursor..]);
    out
}
