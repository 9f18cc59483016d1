/// Construction-time settings of a [`SplayTree`](crate::SplayTree).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplayOptions {
    /// Splay the found node to the root on `find_by_value` /
    /// `find_by_position`. Without it, lookups leave the shape untouched and
    /// only mutations rebalance, which gives up the amortized bound for
    /// read-heavy workloads.
    pub splay_on_read: bool,
    /// Number of arena slots to reserve up front.
    pub capacity: usize,
}

impl Default for SplayOptions {
    fn default() -> Self {
        Self {
            splay_on_read: true,
            capacity: 0,
        }
    }
}

impl SplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn splay_on_read(mut self, enabled: bool) -> Self {
        self.splay_on_read = enabled;
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
