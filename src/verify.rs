//! Structural checks over a list's public state.
//!
//! [`verify`] walks a list through its read-only accessors and reports the
//! first shape violation it finds. It sees nothing the rest of the world
//! cannot see, so a list that passes here is sound for any caller.

use crate::list::{DList, NodeId};
use crate::Result;

use std::fmt::Display;

#[derive(Debug, PartialEq, Clone)]
pub enum Violation {
    /// One of head/tail is set while the other is not.
    AnchorMismatch,
    /// Anchors say empty but the length counter disagrees (or vice versa).
    LengthMismatch { expected: usize, found: usize },
    /// A one-element list whose node still links somewhere.
    SoloNodeLinked,
    /// The head node has a predecessor.
    HeadHasPrev,
    /// The tail node has a successor.
    TailHasNext,
    /// A non-tail node with no successor, or a non-head node with no
    /// predecessor.
    MissingLink { at: NodeId },
    /// `n.next.prev` does not point back at `n`.
    ForwardAsymmetry { at: NodeId },
    /// `n.prev.next` does not point back at `n`.
    BackwardAsymmetry { at: NodeId },
    /// A node linked to itself.
    SelfLink { at: NodeId },
    /// An interior node whose next and prev alias, a two-node cycle inside
    /// a longer list.
    ShortCycle { at: NodeId },
    /// Walking from an anchor did not reach the opposite anchor in exactly
    /// `len` steps.
    WalkMismatch { forward: bool },
}

impl std::error::Error for Violation {}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(format!("{:?}", self).as_str())
    }
}

/// Checks every structural invariant of `list` and returns the first
/// violation found, if any.
pub fn verify(list: &DList) -> Result<()> {
    let (head, tail) = match (list.head(), list.tail()) {
        (None, None) => {
            if list.len() != 0 {
                return Err(Violation::LengthMismatch {
                    expected: 0,
                    found: list.len(),
                });
            }
            return Ok(());
        }
        (Some(head), Some(tail)) => (head, tail),
        _ => return Err(Violation::AnchorMismatch),
    };

    if list.len() == 0 {
        return Err(Violation::LengthMismatch {
            expected: 1,
            found: 0,
        });
    }

    if head == tail {
        if list.len() != 1 {
            return Err(Violation::LengthMismatch {
                expected: 1,
                found: list.len(),
            });
        }
        if list.next(head).is_some() || list.prev(head).is_some() {
            return Err(Violation::SoloNodeLinked);
        }
        return Ok(());
    }

    if list.prev(head).is_some() {
        return Err(Violation::HeadHasPrev);
    }
    if list.next(tail).is_some() {
        return Err(Violation::TailHasNext);
    }

    // Forward walk, bounded by len so a corrupt cycle cannot hang us.
    let mut cur = head;
    let mut steps = 1;
    while cur != tail {
        let next = match list.next(cur) {
            Some(next) => next,
            None => return Err(Violation::MissingLink { at: cur }),
        };
        if next == cur {
            return Err(Violation::SelfLink { at: cur });
        }
        if list.prev(cur) == Some(cur) {
            return Err(Violation::SelfLink { at: cur });
        }
        if cur != head && list.prev(cur) == Some(next) {
            return Err(Violation::ShortCycle { at: cur });
        }
        if list.prev(next) != Some(cur) {
            return Err(Violation::ForwardAsymmetry { at: cur });
        }
        if cur != head {
            let prev = match list.prev(cur) {
                Some(prev) => prev,
                None => return Err(Violation::MissingLink { at: cur }),
            };
            if list.next(prev) != Some(cur) {
                return Err(Violation::BackwardAsymmetry { at: cur });
            }
        }
        steps += 1;
        if steps > list.len() {
            return Err(Violation::WalkMismatch { forward: true });
        }
        cur = next;
    }
    if steps != list.len() {
        return Err(Violation::WalkMismatch { forward: true });
    }

    // Backward walk must retrace the same count back to the head.
    let mut cur = tail;
    let mut steps = 1;
    while cur != head {
        let prev = match list.prev(cur) {
            Some(prev) => prev,
            None => return Err(Violation::MissingLink { at: cur }),
        };
        steps += 1;
        if steps > list.len() {
            return Err(Violation::WalkMismatch { forward: false });
        }
        cur = prev;
    }
    if steps != list.len() {
        return Err(Violation::WalkMismatch { forward: false });
    }

    Ok(())
}
