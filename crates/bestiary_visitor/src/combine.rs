//! Building blocks for visitor hooks.
//!
//! Every helper runs all of its checks and ORs the results. A change found
//! early never skips a later field.

/// Visits every element, returning true if any visit changed something.
pub fn visit_each<T>(items: &mut [T], mut visit: impl FnMut(&mut T) -> bool) -> bool {
    items
        .iter_mut()
        .fold(false, |changed, item| visit(item) || changed)
}

/// Visits the value if present.
pub fn optional_visit<T>(value: &mut Option<T>, visit: impl FnOnce(&mut T) -> bool) -> bool {
    value.as_mut().is_some_and(visit)
}

/// Stores `value` in `slot` unless it is already equal.
///
/// Returns true if it stored the value.
pub fn visit_value<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Evaluates every check in order and ORs the results.
///
/// ```
/// use bestiary_visitor::visit_all;
///
/// let mut calls = 0;
/// let mut check = |result: bool| {
///     calls += 1;
///     result
/// };
/// assert!(visit_all!(check(true), check(false), check(false)));
/// assert_eq!(calls, 3);
/// ```
#[macro_export]
macro_rules! visit_all {
    ($($check:expr),+ $(,)?) => {{
        let mut changed = false;
        $(changed |= $check;)+
        changed
    }};
}
