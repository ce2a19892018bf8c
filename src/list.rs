use log::trace;

/// Stable handle to a node in a [`DList`].
///
/// Handles stay valid until the node they name is removed. Using a handle
/// after removal, or on a different list, is out of contract and is not
/// checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    value: i64,
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

/// Doubly-linked list of `i64` values.
///
/// Nodes live in a slot arena owned by the list; `next` and `prev` are
/// relations between slots, never owners, so every node is released exactly
/// once (on remove/pop, or when the list is dropped).
pub struct DList {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl DList {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                NodeId(idx)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node {
        let node = self.slots[id.0].take().unwrap();
        self.free.push(id.0);
        node
    }

    fn node(&self, id: NodeId) -> &Node {
        self.slots[id.0].as_ref().unwrap()
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots[id.0].as_mut().unwrap()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn value(&self, id: NodeId) -> i64 {
        self.node(id).value
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev
    }

    /// Returns the node at zero-based index `n`.
    ///
    /// A negative `n` returns the head anchor as-is (so `None` only when the
    /// list is empty), while `n >= len` returns `None`. The two out-of-range
    /// branches are deliberately asymmetric; see the tests. Walks forward
    /// from the head, O(n).
    pub fn at(&self, n: i64) -> Option<NodeId> {
        if n < 0 {
            return self.head;
        }
        if n as u64 >= self.len as u64 {
            return None;
        }
        let mut cur = self.head?;
        for _ in 0..n {
            cur = self.node(cur).next.unwrap();
        }
        Some(cur)
    }

    /// Inserts `value` immediately after `previous`, in O(1).
    ///
    /// `None` and the current tail both route to [`push_back`](Self::push_back);
    /// only a strictly-interior `previous` takes the splice path.
    pub fn insert(&mut self, previous: Option<NodeId>, value: i64) {
        match previous {
            None => self.push_back(value),
            Some(prev) if Some(prev) == self.tail => self.push_back(value),
            Some(prev) => {
                trace!("insert {} after {:?}", value, prev);
                // prev is interior, so it has a successor
                let next = self.node(prev).next.unwrap();
                let id = self.alloc(Node {
                    value,
                    next: Some(next),
                    prev: Some(prev),
                });
                self.node_mut(prev).next = Some(id);
                self.node_mut(next).prev = Some(id);
                self.len += 1;
            }
        }
    }

    /// Removes `which` from the list, in O(1). No-op if `which` is `None`.
    pub fn remove(&mut self, which: Option<NodeId>) {
        let which = match which {
            Some(id) => id,
            None => return,
        };
        if Some(which) == self.head {
            self.pop_front();
            return;
        }
        if Some(which) == self.tail {
            self.pop_back();
            return;
        }
        trace!("remove {:?}", which);
        let node = self.release(which);
        // interior node, both neighbors exist
        let prev = node.prev.unwrap();
        let next = node.next.unwrap();
        self.node_mut(prev).next = Some(next);
        self.node_mut(next).prev = Some(prev);
        self.len -= 1;
    }

    /// Appends `value` at the tail, in O(1).
    pub fn push_back(&mut self, value: i64) {
        trace!("push_back {}", value);
        let id = self.alloc(Node {
            value,
            next: None,
            prev: self.tail,
        });
        match self.tail {
            Some(old_tail) => self.node_mut(old_tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Prepends `value` at the head, in O(1).
    pub fn push_front(&mut self, value: i64) {
        trace!("push_front {}", value);
        let id = self.alloc(Node {
            value,
            next: self.head,
            prev: None,
        });
        match self.head {
            Some(old_head) => self.node_mut(old_head).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    /// Removes the head node, in O(1). No-op on an empty list.
    pub fn pop_front(&mut self) {
        let head = match self.head {
            Some(id) => id,
            None => return,
        };
        trace!("pop_front {:?}", head);
        let node = self.release(head);
        match node.next {
            Some(next) => {
                self.node_mut(next).prev = None;
                self.head = Some(next);
            }
            None => {
                self.head = None;
                self.tail = None;
            }
        }
        self.len -= 1;
    }

    /// Removes the tail node, in O(1). No-op on an empty list.
    pub fn pop_back(&mut self) {
        let tail = match self.tail {
            Some(id) => id,
            None => return,
        };
        trace!("pop_back {:?}", tail);
        let node = self.release(tail);
        match node.prev {
            Some(prev) => {
                self.node_mut(prev).next = None;
                self.tail = Some(prev);
            }
            None => {
                self.head = None;
                self.tail = None;
            }
        }
        self.len -= 1;
    }

    /// Iterates the values from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cur: self.head,
        }
    }
}

impl Default for DList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a> {
    list: &'a DList,
    cur: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur?;
        self.cur = self.list.next(id);
        Some(self.list.value(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &DList) -> Vec<i64> {
        list.iter().collect()
    }

    #[test]
    fn test_new_is_empty() {
        let list = DList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
    }

    #[test]
    fn test_push_back_order() {
        let mut list = DList::new();
        for i in 0..20 {
            list.push_back(i);
            assert_eq!(list.len() as i64, i + 1);
            assert_eq!(list.value(list.tail().unwrap()), i);
        }
        assert_eq!(values(&list), (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_push_front_order() {
        let mut list = DList::new();
        for i in 0..20 {
            list.push_front(i);
            assert_eq!(list.len() as i64, i + 1);
            assert_eq!(list.value(list.head().unwrap()), i);
        }
        assert_eq!(values(&list), (0..20).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_single_element_shape() {
        let mut list = DList::new();
        list.push_back(7);
        let head = list.head().unwrap();
        assert_eq!(list.head(), list.tail());
        assert_eq!(list.next(head), None);
        assert_eq!(list.prev(head), None);
    }

    #[test]
    fn test_pop_front() {
        let mut list = DList::new();
        list.pop_front(); // no-op on empty
        assert!(list.is_empty());

        for i in 0..10 {
            list.push_back(i);
        }
        for i in 0..10 {
            list.pop_front();
            assert_eq!(list.len() as i64, 9 - i);
        }
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
    }

    #[test]
    fn test_pop_back() {
        let mut list = DList::new();
        list.pop_back(); // no-op on empty
        assert!(list.is_empty());

        for i in 0..10 {
            list.push_back(i);
        }
        for i in 0..10 {
            list.pop_back();
            assert_eq!(list.len() as i64, 9 - i);
        }
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
    }

    #[test]
    fn test_pop_single_element_clears_both_anchors() {
        let mut list = DList::new();
        list.push_back(1);
        list.pop_front();
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);

        list.push_back(2);
        list.pop_back();
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
    }

    #[test]
    fn test_insert_none_and_tail_append() {
        let mut list = DList::new();
        list.insert(None, 100);
        assert_eq!(list.len(), 1);
        assert_eq!(values(&list), vec![100]);

        // inserting after the tail handle appends, it does not splice
        for i in 0..5 {
            list.insert(list.tail(), i);
        }
        assert_eq!(values(&list), vec![100, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_after_head_prepends_in_reverse() {
        let mut list = DList::new();
        for i in 0..10 {
            list.insert(list.head(), i);
            assert_eq!(list.len() as i64, i + 1);
        }
        // first insert appends 0; each later value lands right after it
        assert_eq!(values(&list), vec![0, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_insert_middle_splice() {
        let mut list = DList::new();
        for i in 0..4 {
            list.push_back(i);
        }
        let second = list.at(1);
        list.insert(second, 42);
        assert_eq!(list.len(), 5);
        assert_eq!(values(&list), vec![0, 1, 42, 2, 3]);

        // links around the new node line up both ways
        let inserted = list.at(2).unwrap();
        assert_eq!(list.value(inserted), 42);
        assert_eq!(list.next(list.prev(inserted).unwrap()), Some(inserted));
        assert_eq!(list.prev(list.next(inserted).unwrap()), Some(inserted));
    }

    #[test]
    fn test_remove_none_is_noop() {
        let mut list = DList::new();
        list.remove(None);
        assert!(list.is_empty());

        list.push_back(1);
        list.remove(None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_head_tail_middle() {
        let mut list = DList::new();
        for i in 0..5 {
            list.push_back(i);
        }

        list.remove(list.head());
        assert_eq!(values(&list), vec![1, 2, 3, 4]);

        list.remove(list.tail());
        assert_eq!(values(&list), vec![1, 2, 3]);

        list.remove(list.at(1));
        assert_eq!(values(&list), vec![1, 3]);
        assert_eq!(list.next(list.head().unwrap()), list.tail());
        assert_eq!(list.prev(list.tail().unwrap()), list.head());
    }

    #[test]
    fn test_remove_down_to_empty() {
        let mut list = DList::new();
        for i in 0..3 {
            list.push_back(i);
        }
        while let Some(head) = list.head() {
            list.remove(Some(head));
        }
        assert!(list.is_empty());
        assert_eq!(list.tail(), None);
    }

    #[test]
    fn test_at_walks_forward() {
        let mut list = DList::new();
        for i in 0..10 {
            list.push_back(i * 10);
        }
        for n in 0..10 {
            assert_eq!(list.value(list.at(n).unwrap()), n * 10);
        }
    }

    #[test]
    fn test_at_out_of_range() {
        let mut list = DList::new();
        assert_eq!(list.at(0), None);
        assert_eq!(list.at(1000), None);

        for i in 0..5 {
            list.push_back(i);
        }
        assert_eq!(list.at(5), None);
        assert_eq!(list.at(1000), None);
    }

    // Negative indexes return the head anchor rather than None, so the two
    // out-of-range branches do not mirror each other. The behavior is
    // documented as-is; these tests pin it down rather than correct it.
    #[test]
    fn test_at_negative_returns_head() {
        let mut list = DList::new();
        assert_eq!(list.at(-1), None); // empty list: head anchor is None

        for i in 0..5 {
            list.push_back(i);
        }
        assert_eq!(list.at(-1), list.head());
        assert_eq!(list.at(-5), list.head());
        assert_eq!(list.at(i64::MIN), list.head());
    }

    #[test]
    fn test_saved_handle_survives_other_mutations() {
        let mut list = DList::new();
        for i in 0..8 {
            list.push_back(i);
        }
        let third = list.at(3).unwrap();
        list.push_front(-1);
        list.push_back(8);
        list.pop_front();
        list.pop_back();
        assert_eq!(list.value(third), 3);
    }

    #[test]
    fn test_slot_reuse_keeps_links_sound() {
        let mut list = DList::new();
        for i in 0..4 {
            list.push_back(i);
        }
        // free a middle slot, then allocate into it again
        list.remove(list.at(2));
        list.insert(list.at(0), 99);
        assert_eq!(values(&list), vec![0, 99, 1, 3]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_debug_renders_values() {
        let mut list = DList::new();
        list.push_back(1);
        list.push_back(2);
        assert_eq!(format!("{:?}", list), "[1, 2]");
    }
}
