use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::error::SplayError;
use crate::node::{NodeRef, SplayNode};
use crate::options::SplayOptions;
use crate::print::print;
use crate::splay::splay;
use crate::util::{self, assert_splay_tree, find_by_position, first, last, size_of};

static NEXT_ARENA_ID: AtomicU64 = AtomicU64::new(0);

fn next_arena_id() -> u64 {
    NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed)
}

fn key_of<T>(node: &SplayNode<T>) -> &T {
    &node.v
}

/// Splay tree addressable both by value and by rank.
///
/// Position `0` is the largest value and `len() - 1` the smallest; the
/// position of an element is the number of elements strictly greater than
/// it. Duplicates are allowed and a newly inserted duplicate is placed
/// above (at a lower position than) the equal values already present.
///
/// Nodes live in an arena owned by the tree. Handles returned by lookups are
/// generational, so a handle to a removed node is reported as
/// [`SplayError::StaleHandle`] rather than resolving to a recycled slot.
#[derive(Debug)]
pub struct SplayTree<T> {
    root: Option<u32>,
    arena: Vec<SplayNode<T>>,
    free: Vec<u32>,
    arena_id: u64,
    options: SplayOptions,
}

impl<T> Default for SplayTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SplayTree<T> {
    pub fn new() -> Self {
        Self::with_options(SplayOptions::default())
    }

    pub fn with_options(options: SplayOptions) -> Self {
        Self {
            root: None,
            arena: Vec::with_capacity(options.capacity),
            free: Vec::new(),
            arena_id: next_arena_id(),
            options,
        }
    }

    pub fn options(&self) -> SplayOptions {
        self.options
    }

    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        size_of(&self.arena, self.root)
    }

    /// Alias of [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every element. Handles issued before the call become stale.
    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
        self.free.clear();
        self.arena_id = next_arena_id();
    }

    fn handle(&self, idx: u32) -> NodeRef {
        NodeRef::new(self.arena_id, idx, self.arena[idx as usize].generation)
    }

    fn resolve(&self, node: NodeRef) -> Result<u32, SplayError> {
        if node.arena != self.arena_id {
            return Err(SplayError::StaleHandle);
        }
        match self.arena.get(node.index as usize) {
            Some(n) if n.generation == node.generation => Ok(node.index),
            _ => Err(SplayError::StaleHandle),
        }
    }

    fn locate(&self, pos: usize) -> Result<u32, SplayError> {
        find_by_position(&self.arena, self.root, pos).ok_or(SplayError::OutOfRange {
            pos,
            size: self.len(),
        })
    }

    fn touch(&mut self, idx: u32) {
        if self.options.splay_on_read {
            self.root = Some(splay(&mut self.arena, idx));
        }
    }

    /// Value of a live node.
    pub fn get(&self, node: NodeRef) -> Result<&T, SplayError> {
        self.resolve(node).map(|i| &self.arena[i as usize].v)
    }

    /// `true` iff `node` still denotes a member of this tree.
    pub fn contains(&self, node: NodeRef) -> bool {
        self.resolve(node).is_ok()
    }

    /// Current position of a live node.
    pub fn position_of(&self, node: NodeRef) -> Result<usize, SplayError> {
        self.resolve(node).map(|i| util::position_of(&self.arena, i))
    }

    /// Node at position `pos`, splayed to the root when
    /// [`SplayOptions::splay_on_read`] is set.
    pub fn find_by_position(&mut self, pos: usize) -> Result<NodeRef, SplayError> {
        let idx = self.locate(pos)?;
        self.touch(idx);
        Ok(self.handle(idx))
    }

    /// Node at position `pos`, leaving the shape of the tree untouched.
    pub fn peek_by_position(&self, pos: usize) -> Result<NodeRef, SplayError> {
        self.locate(pos).map(|i| self.handle(i))
    }

    /// Value at position `pos`. Splays like [`find_by_position`](Self::find_by_position).
    pub fn value_at(&mut self, pos: usize) -> Result<&T, SplayError> {
        let node = self.find_by_position(pos)?;
        Ok(&self.arena[node.index as usize].v)
    }

    /// Node holding the smallest value.
    pub fn most_left(&mut self) -> Result<NodeRef, SplayError> {
        match self.len() {
            0 => Err(SplayError::Empty),
            n => self.find_by_position(n - 1),
        }
    }

    /// Node holding the largest value.
    pub fn most_right(&mut self) -> Result<NodeRef, SplayError> {
        if self.is_empty() {
            return Err(SplayError::Empty);
        }
        self.find_by_position(0)
    }

    /// Takes a retired slot if there is one, otherwise grows the arena.
    fn alloc(&mut self, value: T) -> u32 {
        match self.free.pop() {
            Some(idx) => {
                self.arena[idx as usize].reoccupy(value);
                idx
            }
            None => {
                self.arena.push(SplayNode::new(value));
                (self.arena.len() - 1) as u32
            }
        }
    }

    /// Renders the shape of the tree, one node per line with its counter.
    pub fn to_string(&self, tab: &str) -> String
    where
        T: std::fmt::Display,
    {
        match self.root {
            Some(_) => format!("SplayTree{}", print(&self.arena, self.root, tab)),
            None => "SplayTree ∅".to_string(),
        }
    }
}

impl<T: PartialOrd + Clone> SplayTree<T> {
    /// Inserts `value` and returns its position.
    pub fn insert(&mut self, value: T) -> usize {
        let node = self.alloc(value);
        let (root, pos) = util::insert(&mut self.arena, self.root, node, key_of);
        self.root = Some(root);
        pos
    }

    /// Removes the element at position `pos` and returns its value.
    ///
    /// The node is reset in place and its slot recycled by later inserts;
    /// handles to it become stale.
    pub fn remove(&mut self, pos: usize) -> Result<T, SplayError> {
        let size = self.len();
        let (root, node) = util::remove(&mut self.arena, self.root, pos)
            .ok_or(SplayError::OutOfRange { pos, size })?;
        self.root = root;
        let n = &mut self.arena[node as usize];
        n.reset_to_fresh();
        let value = n.v.clone();
        self.free.push(node);
        trace!(pos, size = size - 1, "removed node");
        Ok(value)
    }

    /// A node holding `value`, splayed to the root when
    /// [`SplayOptions::splay_on_read`] is set. `None` when absent.
    pub fn find_by_value(&mut self, value: &T) -> Option<NodeRef> {
        let idx = util::find_by_value(&self.arena, self.root, value, key_of)?;
        self.touch(idx);
        Some(self.handle(idx))
    }

    /// A node holding `value`, leaving the shape of the tree untouched.
    pub fn peek_by_value(&self, value: &T) -> Option<NodeRef> {
        util::find_by_value(&self.arena, self.root, value, key_of).map(|i| self.handle(i))
    }

    /// Partitions the tree into values `<= boundary` and values `> boundary`.
    ///
    /// The receiver is left empty. The larger half keeps the receiver's arena
    /// (and its handles stay valid there); the smaller half is moved into a
    /// fresh arena.
    pub fn split(&mut self, boundary: &T) -> (SplayTree<T>, SplayTree<T>) {
        let (left, right) = util::split(&mut self.arena, self.root.take(), boundary, key_of);
        let mut kept = SplayTree {
            root: None,
            arena: mem::take(&mut self.arena),
            free: mem::take(&mut self.free),
            arena_id: mem::replace(&mut self.arena_id, next_arena_id()),
            options: self.options,
        };
        let l_size = size_of(&kept.arena, left);
        let r_size = size_of(&kept.arena, right);
        trace!(l_size, r_size, "split tree");

        let mut moved = SplayTree::with_options(self.options);
        if l_size >= r_size {
            let root = kept.move_subtree(right, &mut moved);
            moved.root = root;
            kept.root = left;
            (kept, moved)
        } else {
            let root = kept.move_subtree(left, &mut moved);
            moved.root = root;
            kept.root = right;
            (moved, kept)
        }
    }

    /// Appends `other` after the receiver's elements.
    ///
    /// Every value of `other` must be strictly greater than every value of
    /// the receiver; otherwise [`SplayError::MergeOrder`] is returned and
    /// neither tree changes. On success `other` is left empty.
    ///
    /// The smaller side is moved into the larger side's arena, and the
    /// receiver ends up owning that arena. Handles into the larger side stay
    /// valid on the receiver; handles into the smaller side become stale.
    pub fn merge(&mut self, other: &mut SplayTree<T>) -> Result<(), SplayError> {
        if other.is_empty() {
            return Ok(());
        }
        let ordered = match (last(&self.arena, self.root), first(&other.arena, other.root)) {
            (Some(max), Some(min)) => self.arena[max as usize].v < other.arena[min as usize].v,
            _ => true,
        };
        if !ordered {
            return Err(SplayError::MergeOrder);
        }

        if self.len() >= other.len() {
            let root = other.root.take();
            let moved = other.move_subtree(root, self);
            self.root = util::merge(&mut self.arena, self.root, moved);
        } else {
            let root = self.root.take();
            let moved = self.move_subtree(root, other);
            other.root = util::merge(&mut other.arena, moved, other.root);
            self.swap_storage(other);
        }
        trace!(size = self.len(), "merged tree");
        *other = SplayTree::with_options(other.options);
        Ok(())
    }

    /// Exchanges nodes, free list and arena id with `other`; options stay.
    fn swap_storage(&mut self, other: &mut SplayTree<T>) {
        mem::swap(&mut self.root, &mut other.root);
        mem::swap(&mut self.arena, &mut other.arena);
        mem::swap(&mut self.free, &mut other.free);
        mem::swap(&mut self.arena_id, &mut other.arena_id);
    }

    /// Copies the detached subtree at `root` into `dst`'s arena, preserving
    /// its shape, and retires the source slots. Returns the subtree root in
    /// `dst`, still detached.
    fn move_subtree(&mut self, root: Option<u32>, dst: &mut SplayTree<T>) -> Option<u32> {
        let root = root?;
        dst.arena.reserve(size_of(&self.arena, Some(root)).saturating_sub(dst.free.len()));
        let mut new_root = None;
        let mut count = 0usize;
        let mut stack: Vec<(u32, Option<(u32, bool)>)> = vec![(root, None)];
        while let Some((old, parent)) = stack.pop() {
            let src = &mut self.arena[old as usize];
            let (l, r, size) = (src.l, src.r, src.size);
            let value = src.v.clone();
            src.reset_to_fresh();
            self.free.push(old);
            count += 1;

            let idx = dst.alloc(value);
            let n = &mut dst.arena[idx as usize];
            n.size = size;
            match parent {
                None => new_root = Some(idx),
                Some((p, is_left)) => {
                    n.p = Some(p);
                    if is_left {
                        dst.arena[p as usize].l = Some(idx);
                    } else {
                        dst.arena[p as usize].r = Some(idx);
                    }
                }
            }
            if let Some(l) = l {
                stack.push((l, Some((idx, true))));
            }
            if let Some(r) = r {
                stack.push((r, Some((idx, false))));
            }
        }
        trace!(count, "relocated subtree");
        new_root
    }

    /// Checks counters, links and ordering of the whole tree.
    pub fn assert_valid(&self) -> Result<(), String> {
        assert_splay_tree(&self.arena, self.root, key_of)
    }
}

impl<T: PartialOrd + Clone> FromIterator<T> for SplayTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = SplayTree::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T: PartialOrd + Clone> Extend<T> for SplayTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
