// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::LineId;
use crate::GapBuffer;

#[derive(Debug, Clone)]
struct LineNode {
    content: GapBuffer,
    prev: LineId,
    next: LineId,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<LineNode>,
}

#[derive(Debug, Clone)]
pub struct LineList {
    slots: Vec<Slot>,
    free_slots: Vec<usize>,
    /// `next` of the sentinel.
    first: LineId,
    /// `prev` of the sentinel.
    last: LineId,
    count: usize,
}

impl Default for LineList {
    fn default() -> Self { Self::new() }
}

impl LineList {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![],
            free_slots: vec![],
            first: LineId::SENTINEL,
            last: LineId::SENTINEL,
            count: 0,
        }
    }

    #[must_use]
    pub fn count(&self) -> usize { self.count }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.count == 0 }

    #[must_use]
    pub fn is_sentinel(&self, id: LineId) -> bool { id.is_sentinel() }

    /// Whether `id` refers to a line that is currently in the list.
    #[must_use]
    pub fn contains(&self, id: LineId) -> bool { self.node(id).is_some() }

    #[must_use]
    pub fn first(&self) -> LineId { self.first }

    #[must_use]
    pub fn last(&self) -> LineId { self.last }

    /// The line after `id`. The sentinel when `id` is the last line. [None] for stale
    /// ids.
    #[must_use]
    pub fn next(&self, id: LineId) -> Option<LineId> {
        if id.is_sentinel() {
            return Some(self.first);
        }
        self.node(id).map(|it| it.next)
    }

    /// The line before `id`. The sentinel when `id` is the first line.
    #[must_use]
    pub fn prev(&self, id: LineId) -> Option<LineId> {
        if id.is_sentinel() {
            return Some(self.last);
        }
        self.node(id).map(|it| it.prev)
    }

    #[must_use]
    pub fn get(&self, id: LineId) -> Option<&GapBuffer> { self.node(id).map(|it| &it.content) }

    pub fn get_mut(&mut self, id: LineId) -> Option<&mut GapBuffer> {
        self.node_mut(id).map(|it| &mut it.content)
    }

    /// Link a new line right after `at` and return its handle. Inserting after the
    /// sentinel makes it the first line. [None] if `at` is stale.
    pub fn insert_after(&mut self, at: LineId, content: GapBuffer) -> Option<LineId> {
        let next = self.next(at)?;
        Some(self.link(at, next, content))
    }

    /// Link a new line right before `at`. Inserting before the sentinel makes it the
    /// last line. [None] if `at` is stale.
    pub fn insert_before(&mut self, at: LineId, content: GapBuffer) -> Option<LineId> {
        let prev = self.prev(at)?;
        Some(self.link(prev, at, content))
    }

    /// Append a line at the end.
    pub fn push_back(&mut self, content: GapBuffer) -> LineId {
        let last = self.last;
        self.link(last, LineId::SENTINEL, content)
    }

    /// Unlink `id` and hand back its content along with the neighbor that should take
    /// focus: the previous line if there is one, otherwise the next one (the sentinel
    /// when the list is now empty). [None] if `id` is the sentinel or stale.
    pub fn remove(&mut self, id: LineId) -> Option<(GapBuffer, LineId)> {
        let node = self.slots.get_mut(id.slot).and_then(|slot| {
            if slot.generation == id.generation {
                slot.node.take()
            } else {
                None
            }
        })?;

        self.set_next(node.prev, node.next);
        self.set_prev(node.next, node.prev);
        self.slots[id.slot].generation = self.slots[id.slot].generation.wrapping_add(1);
        self.free_slots.push(id.slot);
        self.count -= 1;

        let neighbor = if node.prev.is_sentinel() {
            node.next
        } else {
            node.prev
        };
        Some((node.content, neighbor))
    }

    /// 0 based position of `id`, found by walking from the front. [None] for the
    /// sentinel and stale ids.
    #[must_use]
    pub fn index_of(&self, id: LineId) -> Option<usize> {
        if !self.contains(id) {
            return None;
        }
        self.ids().position(|it| it == id)
    }

    /// Handle of the line at 0 based `index`.
    #[must_use]
    pub fn nth(&self, index: usize) -> Option<LineId> {
        if index >= self.count {
            return None;
        }
        self.ids().nth(index)
    }

    /// Handles in document order.
    pub fn ids(&self) -> impl Iterator<Item = LineId> {
        let mut current = self.first;
        std::iter::from_fn(move || {
            if current.is_sentinel() {
                return None;
            }
            let it = current;
            current = self.node(it).map_or(LineId::SENTINEL, |node| node.next);
            Some(it)
        })
    }

    /// Lines in document order.
    pub fn iter(&self) -> impl Iterator<Item = &GapBuffer> {
        self.ids().filter_map(|id| self.get(id))
    }

    fn node(&self, id: LineId) -> Option<&LineNode> {
        self.slots
            .get(id.slot)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: LineId) -> Option<&mut LineNode> {
        self.slots
            .get_mut(id.slot)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// `prev` and `next` must be adjacent (or sentinel).
    fn link(&mut self, prev: LineId, next: LineId, content: GapBuffer) -> LineId {
        let node = LineNode {
            content,
            prev,
            next,
        };
        let id = if let Some(slot) = self.free_slots.pop() {
            self.slots[slot].node = Some(node);
            LineId {
                slot,
                generation: self.slots[slot].generation,
            }
        } else {
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            LineId {
                slot: self.slots.len() - 1,
                generation: 0,
            }
        };

        self.set_next(prev, id);
        self.set_prev(next, id);
        self.count += 1;
        id
    }

    fn set_next(&mut self, id: LineId, next: LineId) {
        if id.is_sentinel() {
            self.first = next;
        } else if let Some(node) = self.node_mut(id) {
            node.next = next;
        }
    }

    fn set_prev(&mut self, id: LineId, prev: LineId) {
        if id.is_sentinel() {
            self.last = prev;
        } else if let Some(node) = self.node_mut(id) {
            node.prev = prev;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn line(text: &str) -> GapBuffer { GapBuffer::try_from_str(text, 16).unwrap() }

    fn contents(list: &LineList) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn contents_backwards(list: &LineList) -> Vec<String> {
        let mut acc = vec![];
        let mut id = list.last();
        while !list.is_sentinel(id) {
            acc.push(list.get(id).unwrap().to_string());
            id = list.prev(id).unwrap();
        }
        acc
    }

    #[test]
    fn test_empty_list() {
        let list = LineList::new();
        assert!(list.is_empty());
        assert_eq2!(list.count(), 0);
        assert!(list.is_sentinel(list.first()));
        assert!(list.is_sentinel(list.last()));
        assert_eq2!(list.nth(0), None);
    }

    #[test]
    fn test_insert_after_keeps_every_line_reachable() {
        let mut list = LineList::new();
        let a = list.push_back(line("a"));
        let c = list.push_back(line("c"));
        let b = list.insert_after(a, line("b")).unwrap();
        let d = list.insert_after(c, line("d")).unwrap();
        let zero = list.insert_after(LineId::SENTINEL, line("0")).unwrap();

        assert_eq2!(contents(&list), vec!["0", "a", "b", "c", "d"]);
        assert_eq2!(contents_backwards(&list), vec!["d", "c", "b", "a", "0"]);
        assert_eq2!(list.count(), 5);
        assert_eq2!(list.index_of(zero), Some(0));
        assert_eq2!(list.index_of(b), Some(2));
        assert_eq2!(list.index_of(d), Some(4));
        assert_eq2!(list.nth(3), Some(c));
    }

    #[test]
    fn test_insert_before() {
        let mut list = LineList::new();
        let b = list.push_back(line("b"));
        list.insert_before(b, line("a")).unwrap();
        list.insert_before(LineId::SENTINEL, line("c")).unwrap();
        assert_eq2!(contents(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_returns_previous_neighbor_first() {
        let mut list = LineList::new();
        let a = list.push_back(line("a"));
        let b = list.push_back(line("b"));
        let c = list.push_back(line("c"));

        let (content, neighbor) = list.remove(b).unwrap();
        assert_eq2!(content.to_string(), "b");
        assert_eq2!(neighbor, a);
        assert_eq2!(contents(&list), vec!["a", "c"]);
        assert_eq2!(list.index_of(c), Some(1));

        // First line has no previous, so the next one is returned.
        let (_, neighbor) = list.remove(a).unwrap();
        assert_eq2!(neighbor, c);

        // Last remaining line, neighbor is the sentinel.
        let (_, neighbor) = list.remove(c).unwrap();
        assert!(list.is_sentinel(neighbor));
        assert!(list.is_empty());
    }

    #[test]
    fn test_removed_line_is_unreachable_and_id_goes_stale() {
        let mut list = LineList::new();
        let a = list.push_back(line("a"));
        let b = list.push_back(line("b"));
        list.remove(a).unwrap();

        assert!(!list.contains(a));
        assert_eq2!(list.get(a), None);
        assert_eq2!(list.index_of(a), None);
        assert!(list.remove(a).is_none());
        assert!(list.insert_after(a, line("x")).is_none());

        // The freed slot is reused, the stale id must not alias the new line.
        let x = list.push_back(line("x"));
        assert!(list.get(a).is_none());
        assert_eq2!(contents(&list), vec!["b", "x"]);
        assert_eq2!(list.index_of(x), Some(1));
        assert_eq2!(list.index_of(b), Some(0));
    }

    #[test]
    fn test_sentinel_is_not_removable() {
        let mut list = LineList::new();
        list.push_back(line("a"));
        assert!(list.remove(LineId::SENTINEL).is_none());
        assert_eq2!(list.count(), 1);
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut list = LineList::new();
        let a = list.push_back(line("a"));
        list.get_mut(a).unwrap().append('b').unwrap();
        assert_eq2!(contents(&list), vec!["ab"]);
    }

    #[test]
    fn test_index_and_handle_addressing_agree() {
        let mut list = LineList::new();
        for text in ["1", "2", "3", "4", "5"] {
            list.push_back(line(text));
        }
        let third = list.nth(2).unwrap();
        list.remove(list.nth(0).unwrap()).unwrap();
        list.insert_after(third, line("3.5")).unwrap();
        for (index, id) in list.ids().enumerate() {
            assert_eq2!(list.index_of(id), Some(index));
            assert_eq2!(list.nth(index), Some(id));
        }
        assert_eq2!(contents(&list), vec!["2", "3", "3.5", "4", "5"]);
    }
}
