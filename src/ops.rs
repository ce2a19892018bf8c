//! Free functions over the list's public interface.
//!
//! Nothing here touches `DList` internals, so any implementation with the
//! same public contract could sit underneath.

use crate::list::DList;

/// Structural equality: same length and the same value at every position.
///
/// Length is compared first, then the two lists are walked in parallel and
/// the comparison stops at the first differing value.
pub fn equals(a: &DList, b: &DList) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

/// Returns a new list holding `a`'s values followed by `b`'s values.
///
/// Values are copied; neither input is touched and no node is ever shared
/// between two lists.
pub fn concat(a: &DList, b: &DList) -> DList {
    let mut out = DList::new();
    for value in a.iter() {
        out.push_back(value);
    }
    for value in b.iter() {
        out.push_back(value);
    }
    out
}

/// Returns a new list with `list`'s values in reverse order.
///
/// Walks the input from tail to head via `prev` and appends each value.
pub fn reverse(list: &DList) -> DList {
    let mut out = DList::new();
    let mut cur = list.tail();
    while let Some(id) = cur {
        out.push_back(list.value(id));
        cur = list.prev(id);
    }
    out
}

impl PartialEq for DList {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl std::ops::Add for &DList {
    type Output = DList;

    fn add(self, rhs: &DList) -> DList {
        concat(self, rhs)
    }
}
