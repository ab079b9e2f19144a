use crate::core::data::vec2::Vec2;

/// Fixed-capacity FIFO of trail points addressed by sequence number.
///
/// Sequence numbers grow forever; the live window is `head..tail` and a
/// sequence lives in slot `seq % capacity`. Pushing never shifts memory.
#[derive(Debug, Clone)]
pub struct PointArena {
    slots: Vec<Vec2>,
    head: u64,
    tail: u64,
}

impl PointArena {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![Vec2::ZERO; capacity],
            head: 0,
            tail: 0,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        (self.tail - self.head) as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    #[must_use]
    pub fn head(&self) -> u64 {
        self.head
    }

    #[must_use]
    pub fn tail(&self) -> u64 {
        self.tail
    }

    /// Appends a point and returns its sequence number, or `None` when full.
    pub fn push(&mut self, point: Vec2) -> Option<u64> {
        if self.len() >= self.capacity() {
            return None;
        }

        let seq = self.tail;
        let slot = self.slot(seq);
        self.slots[slot] = point;
        self.tail += 1;
        Some(seq)
    }

    pub fn pop_front(&mut self) -> Option<Vec2> {
        if self.is_empty() {
            return None;
        }

        let point = self.slots[self.slot(self.head)];
        self.head += 1;
        Some(point)
    }

    #[must_use]
    pub fn get(&self, seq: u64) -> Option<Vec2> {
        self.contains(seq).then(|| self.slots[self.slot(seq)])
    }

    /// Overwrites a live point. Returns `false` if `seq` is not live.
    pub fn set(&mut self, seq: u64, point: Vec2) -> bool {
        if !self.contains(seq) {
            return false;
        }

        let slot = self.slot(seq);
        self.slots[slot] = point;
        true
    }

    /// Points for `start..start + len`, oldest first. Stops early at the tail.
    pub fn range(&self, start: u64, len: usize) -> impl Iterator<Item = Vec2> + '_ {
        (start..start + len as u64).map_while(|seq| self.get(seq))
    }

    /// Drops every point. Sequence numbers keep counting from the old tail.
    pub fn clear(&mut self) {
        self.head = self.tail;
    }

    fn contains(&self, seq: u64) -> bool {
        (self.head..self.tail).contains(&seq)
    }

    fn slot(&self, seq: u64) -> usize {
        (seq % self.slots.len() as u64) as usize
    }
}
