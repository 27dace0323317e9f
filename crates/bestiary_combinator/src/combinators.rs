//! Repetition, alternation, sequencing, and skipping.

use crate::parser::Parser;

// =============================================================================
// Repetition
// =============================================================================

/// Zero or more repetitions of `element`.
///
/// Stops as soon as `element` succeeds without consuming input.
pub fn many0<A: 'static>(element: Parser<A>) -> Parser<Vec<A>> {
    Parser::new(move |start| {
        let mut items = Vec::new();
        let mut cursor = start;
        while let Some((item, rest)) = element.parse(cursor) {
            if rest.position() == cursor.position() {
                break;
            }
            items.push(item);
            cursor = rest;
        }
        Some((items, cursor))
    })
}

/// One or more repetitions of `element`.
pub fn one_or_more<A: 'static>(element: Parser<A>) -> Parser<Vec<A>> {
    many0(element).flat_map(|items| (!items.is_empty()).then_some(items))
}

/// Repetitions of `element` separated by `separator`, followed by `terminator`.
///
/// A separator that is not followed by another element is left unconsumed.
/// Zero elements is a match; use [`Parser::flat_map`] to require some.
pub fn many<A, S, T>(
    element: Parser<A>,
    separator: Parser<S>,
    terminator: Parser<T>,
) -> Parser<Vec<A>>
where
    A: 'static,
    S: 'static,
    T: 'static,
{
    Parser::new(move |start| {
        let mut items = Vec::new();
        let mut cursor = start;
        let mut next = start;
        while let Some((item, after_item)) = element.parse(next) {
            items.push(item);
            cursor = after_item;
            match separator.parse(cursor) {
                Some((_, after_separator)) if after_separator.position() > next.position() => {
                    next = after_separator;
                }
                _ => break,
            }
        }
        let (_, rest) = terminator.parse(cursor)?;
        Some((items, rest))
    })
}

// =============================================================================
// Alternation
// =============================================================================

/// Tries each alternative in order from the same position; the first
/// success wins.
pub fn either<A: 'static>(alternatives: impl IntoIterator<Item = Parser<A>>) -> Parser<A> {
    let alternatives: Vec<Parser<A>> = alternatives.into_iter().collect();
    Parser::new(move |cursor| alternatives.iter().find_map(|p| p.parse(cursor)))
}

// =============================================================================
// Sequencing
// =============================================================================

/// Runs two parsers in sequence.
pub fn zip<A: 'static, B: 'static>(a: Parser<A>, b: Parser<B>) -> Parser<(A, B)> {
    a.followed_by(b)
}

/// Runs three parsers in sequence.
pub fn zip3<A: 'static, B: 'static, C: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
) -> Parser<(A, B, C)> {
    Parser::new(move |cursor| {
        let (va, cursor) = a.parse(cursor)?;
        let (vb, cursor) = b.parse(cursor)?;
        let (vc, cursor) = c.parse(cursor)?;
        Some(((va, vb, vc), cursor))
    })
}

/// Runs four parsers in sequence.
pub fn zip4<A: 'static, B: 'static, C: 'static, D: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
    d: Parser<D>,
) -> Parser<(A, B, C, D)> {
    Parser::new(move |cursor| {
        let (va, cursor) = a.parse(cursor)?;
        let (vb, cursor) = b.parse(cursor)?;
        let (vc, cursor) = c.parse(cursor)?;
        let (vd, cursor) = d.parse(cursor)?;
        Some(((va, vb, vc, vd), cursor))
    })
}

/// Runs five parsers in sequence.
pub fn zip5<A: 'static, B: 'static, C: 'static, D: 'static, E: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
    d: Parser<D>,
    e: Parser<E>,
) -> Parser<(A, B, C, D, E)> {
    Parser::new(move |cursor| {
        let (va, cursor) = a.parse(cursor)?;
        let (vb, cursor) = b.parse(cursor)?;
        let (vc, cursor) = c.parse(cursor)?;
        let (vd, cursor) = d.parse(cursor)?;
        let (ve, cursor) = e.parse(cursor)?;
        Some(((va, vb, vc, vd, ve), cursor))
    })
}

/// Runs six parsers in sequence.
#[allow(clippy::many_single_char_names)]
pub fn zip6<A: 'static, B: 'static, C: 'static, D: 'static, E: 'static, F: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
    d: Parser<D>,
    e: Parser<E>,
    f: Parser<F>,
) -> Parser<(A, B, C, D, E, F)> {
    Parser::new(move |cursor| {
        let (va, cursor) = a.parse(cursor)?;
        let (vb, cursor) = b.parse(cursor)?;
        let (vc, cursor) = c.parse(cursor)?;
        let (vd, cursor) = d.parse(cursor)?;
        let (ve, cursor) = e.parse(cursor)?;
        let (vf, cursor) = f.parse(cursor)?;
        Some(((va, vb, vc, vd, ve, vf), cursor))
    })
}

/// Runs seven parsers in sequence.
#[allow(clippy::many_single_char_names, clippy::too_many_arguments)]
pub fn zip7<A: 'static, B: 'static, C: 'static, D: 'static, E: 'static, F: 'static, G: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
    d: Parser<D>,
    e: Parser<E>,
    f: Parser<F>,
    g: Parser<G>,
) -> Parser<(A, B, C, D, E, F, G)> {
    Parser::new(move |cursor| {
        let (va, cursor) = a.parse(cursor)?;
        let (vb, cursor) = b.parse(cursor)?;
        let (vc, cursor) = c.parse(cursor)?;
        let (vd, cursor) = d.parse(cursor)?;
        let (ve, cursor) = e.parse(cursor)?;
        let (vf, cursor) = f.parse(cursor)?;
        let (vg, cursor) = g.parse(cursor)?;
        Some(((va, vb, vc, vd, ve, vf, vg), cursor))
    })
}

// =============================================================================
// Skipping
// =============================================================================

/// Consumes input one `char` at a time until `target` matches, yielding the
/// skipped text and the target's value.
///
/// `target` is also tried at the end of input. Fails if it never matches.
pub fn skip_until<A: 'static>(target: Parser<A>) -> Parser<(String, A)> {
    Parser::new(move |start| {
        let mut cursor = start;
        loop {
            if let Some((value, rest)) = target.parse(cursor) {
                return Some(((cursor.consumed_since(start), value), rest));
            }
            if cursor.is_at_end() {
                return None;
            }
            cursor = cursor.advance(1);
        }
    })
}
