//! # Draw Order
//!
//! Ring bookkeeping that keeps the star array in painter's order without
//! ever moving stars around in memory.

/// A ring over `0..len` with a movable front.
///
/// The stars are sorted farthest-first once at startup. Afterwards a recycled
/// star is always the nearest one, i.e. the last in logical order, and jumps to
/// being the farthest. Rotating the front back by one per recycle keeps the
/// logical sequence sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOrder {
    front: usize,
    len: usize,
}

impl DrawOrder {
    /// Creates an identity ordering over `len` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use starfield::DrawOrder;
    ///
    /// let order = DrawOrder::new(3);
    /// assert_eq!(order.logical_order().collect::<Vec<_>>(), vec![0, 1, 2]);
    /// ```
    pub fn new(len: usize) -> Self {
        Self { front: 0, len }
    }

    /// Physical index of the logical front.
    pub fn front(&self) -> usize {
        self.front
    }

    /// Number of slots in the ring.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the ring is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves the front one slot back, wrapping at zero.
    pub fn rotate_back(&mut self) {
        if self.len == 0 {
            return;
        }
        self.front = if self.front == 0 {
            self.len - 1
        } else {
            self.front - 1
        };
    }

    /// Physical index of the `logical`-th element.
    pub fn physical(&self, logical: usize) -> usize {
        (self.front + logical) % self.len
    }

    /// Physical indices in draw order, front first.
    pub fn logical_order(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).map(move |i| self.physical(i))
    }
}
