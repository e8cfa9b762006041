use crate::parsing::heading::{MAX_DEPTH, SECTION_DEPTH};

use super::model::Point;

/// Number of slots: one per heading depth from 2 to 6.
pub const STACK_SLOTS: usize = (MAX_DEPTH - SECTION_DEPTH + 1) as usize;

/// A point whose heading has been seen but whose section is still open.
#[derive(Debug)]
pub struct OpenPoint {
    pub point: Point,
    /// Whether a parent was open when the heading appeared.
    pub attached: bool,
}

/// Open points indexed by `depth - 2`.
///
/// Slots may be empty when a heading skips a level. Each slot owns its
/// point until the section closes; closed points are handed back to the
/// caller deepest first so they can be attached to the slot above.
#[derive(Debug, Default)]
pub struct ParentStack {
    slots: Vec<Option<OpenPoint>>,
}

impl ParentStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots in use, including empty ones for skipped levels.
    pub fn depth(&self) -> usize {
        self.slots.len()
    }

    /// Whether a point opened at `slot` has a parent to attach to.
    ///
    /// Slot 0 always does: main points attach to the speech itself.
    pub fn has_parent(&self, slot: usize) -> bool {
        match slot.checked_sub(1) {
            None => true,
            Some(parent) => matches!(self.slots.get(parent), Some(Some(_))),
        }
    }

    /// Removes and returns the deepest slot, or `None` when the stack is empty.
    ///
    /// The returned pair is the slot index and whatever occupied it.
    pub fn pop(&mut self) -> Option<(usize, Option<OpenPoint>)> {
        let open = self.slots.pop()?;
        Some((self.slots.len(), open))
    }

    /// Places `open` at `slot`, padding skipped levels with empty slots.
    ///
    /// Callers close everything at `slot` and deeper first, so the stack
    /// length after this call is always `slot + 1`.
    pub fn open(&mut self, slot: usize, open: OpenPoint) {
        debug_assert!(slot < STACK_SLOTS);
        debug_assert!(self.slots.len() <= slot);
        self.slots.resize_with(slot, || None);
        self.slots.push(Some(open));
    }

    /// The point at `slot`, if that slot is occupied.
    pub fn point_mut(&mut self, slot: usize) -> Option<&mut Point> {
        self.slots
            .get_mut(slot)
            .and_then(Option::as_mut)
            .map(|open| &mut open.point)
    }

    /// The deepest open point, which receives content blocks.
    pub fn current_mut(&mut self) -> Option<&mut Point> {
        self.slots
            .last_mut()
            .and_then(Option::as_mut)
            .map(|open| &mut open.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(title: &str, level: u8) -> OpenPoint {
        OpenPoint {
            point: Point::new(title, level),
            attached: true,
        }
    }

    #[test]
    fn test_new_stack_is_empty() {
        let mut stack = ParentStack::new();
        assert_eq!(stack.depth(), 0);
        assert!(stack.current_mut().is_none());
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_slot_zero_always_has_parent() {
        assert!(ParentStack::new().has_parent(0));
    }

    #[test]
    fn test_skipped_level_leaves_empty_slot() {
        let mut stack = ParentStack::new();
        stack.open(0, open("A", 2));
        assert!(!stack.has_parent(2));

        stack.open(2, open("D", 4));
        assert_eq!(stack.depth(), 3);
        assert!(stack.point_mut(1).is_none());
        assert!(stack.has_parent(3));
        assert_eq!(stack.current_mut().map(|p| p.title.clone()), Some("D".into()));
    }

    #[test]
    fn test_pop_returns_deepest_first() {
        let mut stack = ParentStack::new();
        stack.open(0, open("A", 2));
        stack.open(1, open("B", 3));

        let (slot, popped) = stack.pop().unwrap();
        assert_eq!(slot, 1);
        assert_eq!(popped.unwrap().point.title, "B");

        let (slot, popped) = stack.pop().unwrap();
        assert_eq!(slot, 0);
        assert_eq!(popped.unwrap().point.title, "A");
    }

    #[test]
    fn test_slot_count_covers_depths_two_to_six() {
        assert_eq!(STACK_SLOTS, 5);
    }
}
