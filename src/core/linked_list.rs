//! A doubly-linked list stored in an arena.
//!
//! Nodes live in a `Vec` and link to each other by index, so splicing a node in or out is a
//! couple of index rewrites and never touches a pointer. Callers hold on to nodes through
//! [`NodeId`]s. A removed node's slot is reused, and its generation counter is bumped so that
//! ids handed out for the old occupant stop resolving instead of aliasing the new one.
use crate::cursor::{Cursor, CursorError};

/// A handle to a node of a [`LinkedList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u64,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    value: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
    generation: u64,
}

/// A doubly-linked list whose nodes are addressed by [`NodeId`]s.
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<T> LinkedList<T> {
    /// Makes a new, empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The id of the head node, if any.
    pub fn front(&self) -> Option<NodeId> {
        self.head.map(|index| self.id_of(index))
    }

    /// The id of the tail node, if any.
    pub fn back(&self) -> Option<NodeId> {
        self.tail.map(|index| self.id_of(index))
    }

    /// Returns the value at `id`, or `None` if the node was removed.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.resolve(id).and_then(|index| self.slots[index].value.as_ref())
    }

    /// Returns a mutable reference to the value at `id`, or `None` if the node was removed.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = self.resolve(id)?;
        self.slots[index].value.as_mut()
    }

    /// The node after `id`.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        let index = self.resolve(id)?;
        self.slots[index].next.map(|next| self.id_of(next))
    }

    /// The node before `id`.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        let index = self.resolve(id)?;
        self.slots[index].prev.map(|prev| self.id_of(prev))
    }

    /// Returns `true` if `id` still refers to a node of this list.
    pub fn contains(&self, id: NodeId) -> bool {
        self.resolve(id).is_some()
    }

    /// Appends `value` after the current tail.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let index = self.allocate(value, self.tail, None);
        match self.tail {
            Some(tail) => self.slots[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);

        self.id_of(index)
    }

    /// Prepends `value` before the current head.
    pub fn push_front(&mut self, value: T) -> NodeId {
        let index = self.allocate(value, None, self.head);
        match self.head {
            Some(head) => self.slots[head].prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);

        self.id_of(index)
    }

    /// Inserts `value` right before the node `id`. Returns `None`, and leaves the list untouched,
    /// when `id` no longer refers to a node of this list.
    pub fn insert_before(&mut self, id: NodeId, value: T) -> Option<NodeId> {
        let anchor = self.resolve(id)?;
        let prev = self.slots[anchor].prev;
        let index = self.allocate(value, prev, Some(anchor));

        match prev {
            Some(prev) => self.slots[prev].next = Some(index),
            None => self.head = Some(index),
        }
        self.slots[anchor].prev = Some(index);

        Some(self.id_of(index))
    }

    /// Inserts `value` right after the node `id`. Returns `None`, and leaves the list untouched,
    /// when `id` no longer refers to a node of this list.
    pub fn insert_after(&mut self, id: NodeId, value: T) -> Option<NodeId> {
        let anchor = self.resolve(id)?;
        let next = self.slots[anchor].next;
        let index = self.allocate(value, Some(anchor), next);

        match next {
            Some(next) => self.slots[next].prev = Some(index),
            None => self.tail = Some(index),
        }
        self.slots[anchor].next = Some(index);

        Some(self.id_of(index))
    }

    /// Unlinks the node `id` and returns its value.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let index = self.resolve(id)?;
        let (prev, next) = (self.slots[index].prev, self.slots[index].next);

        match prev {
            Some(prev) => self.slots[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.slots[next].prev = prev,
            None => self.tail = prev,
        }

        let slot = &mut self.slots[index];
        slot.prev = None;
        slot.next = None;
        slot.generation += 1;
        self.free.push(index);
        self.len -= 1;

        slot.value.take()
    }

    /// Drops every node. Slots are kept for reuse, each one retired like a removed node, so no
    /// id handed out before the call resolves afterwards.
    pub fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.value.take().is_some() {
                slot.generation += 1;
            }
            slot.prev = None;
            slot.next = None;
            self.free.push(index);
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// A cursor that walks from head to tail.
    pub fn cursor_front(&self) -> ListCursor<'_, T> {
        ListCursor {
            list: self,
            position: Position::BeforeHead,
            forward: true,
        }
    }

    /// A cursor that walks from tail to head.
    pub fn cursor_back(&self) -> ListCursor<'_, T> {
        ListCursor {
            list: self,
            position: Position::AfterTail,
            forward: false,
        }
    }

    /// Iterates over the values from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.cursor_front().steps()
    }

    fn id_of(&self, index: usize) -> NodeId {
        NodeId {
            index,
            generation: self.slots[index].generation,
        }
    }

    fn resolve(&self, id: NodeId) -> Option<usize> {
        let slot = self.slots.get(id.index)?;
        if slot.generation != id.generation || slot.value.is_none() {
            return None;
        }

        Some(id.index)
    }

    fn allocate(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.value = Some(value);
            slot.prev = prev;
            slot.next = next;
            return index;
        }

        self.slots.push(Slot {
            value: Some(value),
            prev,
            next,
            generation: 0,
        });

        self.slots.len() - 1
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        iter.into_iter().for_each(|value| {
            list.push_back(value);
        });

        list
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    BeforeHead,
    At(usize),
    AfterTail,
}

/// A reversible cursor over a [`LinkedList`].
#[derive(Debug)]
pub struct ListCursor<'a, T> {
    list: &'a LinkedList<T>,
    position: Position,
    forward: bool,
}

impl<T> ListCursor<'_, T> {
    /// Flips the direction of travel, keeping the position.
    pub fn reverse(&mut self) {
        self.forward = !self.forward;
    }

    /// The node under the cursor.
    pub fn node(&self) -> Option<NodeId> {
        match self.position {
            Position::At(index) => Some(self.list.id_of(index)),
            _ => None,
        }
    }
}

impl<T> Clone for ListCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            position: self.position,
            forward: self.forward,
        }
    }
}

impl<'a, T> Cursor for ListCursor<'a, T> {
    type Item = &'a T;

    fn advance(&mut self) -> bool {
        let slots = &self.list.slots;
        self.position = match (self.position, self.forward) {
            (Position::BeforeHead, true) => {
                self.list.head.map_or(Position::AfterTail, Position::At)
            }
            (Position::AfterTail, false) => {
                self.list.tail.map_or(Position::BeforeHead, Position::At)
            }
            (Position::At(index), true) => {
                slots[index].next.map_or(Position::AfterTail, Position::At)
            }
            (Position::At(index), false) => {
                slots[index].prev.map_or(Position::BeforeHead, Position::At)
            }
            (end, _) => end,
        };

        matches!(self.position, Position::At(_))
    }

    fn try_current(&self) -> Result<&'a T, CursorError> {
        match (self.position, self.forward) {
            (Position::At(index), _) => self.list.slots[index]
                .value
                .as_ref()
                .ok_or(CursorError::Exhausted),
            (Position::BeforeHead, true) | (Position::AfterTail, false) => {
                Err(CursorError::Unstarted)
            }
            _ => Err(CursorError::Exhausted),
        }
    }
}
