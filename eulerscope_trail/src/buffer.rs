// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use core::iter::Chain;
use core::num::NonZeroUsize;
use core::slice;

use kurbo::Point;

use crate::point::TrailPoint;

/// How many points a [`TrailBuffer`] may hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrailCapacity {
    /// Keep at most this many points, evicting the oldest first.
    Finite(NonZeroUsize),
    /// Never evict.
    ///
    /// Memory use grows with every append until the buffer is cleared.
    Unbounded,
}

impl TrailCapacity {
    /// Returns a finite capacity, or `None` for a zero bound.
    #[must_use]
    pub const fn finite(max_len: usize) -> Option<Self> {
        match NonZeroUsize::new(max_len) {
            Some(n) => Some(Self::Finite(n)),
            None => None,
        }
    }

    /// Returns the bound, or `None` when unbounded.
    #[must_use]
    pub const fn max_len(self) -> Option<usize> {
        match self {
            Self::Finite(n) => Some(n.get()),
            Self::Unbounded => None,
        }
    }
}

/// Insertion-ordered history of generated points.
///
/// Oldest points sit at the front. With [`TrailCapacity::Finite`], an append
/// that would exceed the bound evicts exactly one point from the front, so
/// the buffer always equals the most recent `N` appends in order.
#[derive(Clone, Debug)]
pub struct TrailBuffer<M = ()> {
    points: VecDeque<TrailPoint<M>>,
    capacity: TrailCapacity,
    total_appended: u64,
}

impl<M> TrailBuffer<M> {
    /// Creates an empty buffer.
    ///
    /// Finite buffers reserve their full capacity up front so that steady-state
    /// appends never reallocate.
    #[must_use]
    pub fn new(capacity: TrailCapacity) -> Self {
        let points = match capacity {
            TrailCapacity::Finite(n) => VecDeque::with_capacity(n.get()),
            TrailCapacity::Unbounded => VecDeque::new(),
        };
        Self {
            points,
            capacity,
            total_appended: 0,
        }
    }

    /// Returns the configured capacity.
    #[must_use]
    pub fn capacity(&self) -> TrailCapacity {
        self.capacity
    }

    /// Changes the capacity, evicting the oldest points if the new bound is
    /// smaller than the current length.
    pub fn set_capacity(&mut self, capacity: TrailCapacity) {
        self.capacity = capacity;
        if let TrailCapacity::Finite(n) = capacity {
            let excess = self.points.len().saturating_sub(n.get());
            self.points.drain(..excess);
        }
    }

    /// Appends a point to the tail.
    pub fn append(&mut self, point: TrailPoint<M>) {
        self.points.push_back(point);
        self.total_appended = self.total_appended.wrapping_add(1);
        if let TrailCapacity::Finite(n) = self.capacity {
            if self.points.len() > n.get() {
                self.points.pop_front();
            }
        }
    }

    /// Removes every point. The lifetime append counter is kept.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Returns the number of points currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the buffer holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the most recently appended point.
    #[must_use]
    pub fn last(&self) -> Option<&TrailPoint<M>> {
        self.points.back()
    }

    /// Returns the number of appends over the buffer's lifetime.
    #[must_use]
    pub fn total_appended(&self) -> u64 {
        self.total_appended
    }

    /// Borrows the current contents for rendering.
    #[must_use]
    pub fn snapshot(&self) -> TrailSnapshot<'_, M> {
        let (head, tail) = self.points.as_slices();
        TrailSnapshot { head, tail }
    }

    /// Snapshot of the buffer bookkeeping for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TrailDebugInfo {
        TrailDebugInfo {
            len: self.points.len(),
            capacity: self.capacity,
            total_appended: self.total_appended,
            evicted: self.total_appended.saturating_sub(self.points.len() as u64),
        }
    }
}

impl<'a, M> IntoIterator for &'a TrailBuffer<M> {
    type Item = &'a TrailPoint<M>;
    type IntoIter = vec_deque::Iter<'a, TrailPoint<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Borrowed, ordered view of a [`TrailBuffer`], oldest point first.
#[derive(Debug)]
pub struct TrailSnapshot<'a, M = ()> {
    head: &'a [TrailPoint<M>],
    tail: &'a [TrailPoint<M>],
}

impl<M> Clone for TrailSnapshot<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for TrailSnapshot<'_, M> {}

impl<'a, M> TrailSnapshot<'a, M> {
    /// Number of points in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.head.len() + self.tail.len()
    }

    /// Returns `true` if the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.tail.is_empty()
    }

    /// Oldest point.
    #[must_use]
    pub fn first(&self) -> Option<&'a TrailPoint<M>> {
        self.head.first().or_else(|| self.tail.first())
    }

    /// Newest point.
    #[must_use]
    pub fn last(&self) -> Option<&'a TrailPoint<M>> {
        self.tail.last().or_else(|| self.head.last())
    }

    /// Iterates the points in chronological order.
    pub fn iter(&self) -> Chain<slice::Iter<'a, TrailPoint<M>>, slice::Iter<'a, TrailPoint<M>>> {
        self.head.iter().chain(self.tail.iter())
    }

    /// Iterates only the positions, in chronological order.
    pub fn positions(&self) -> impl Iterator<Item = Point> + 'a {
        self.head.iter().chain(self.tail.iter()).map(|p| p.position)
    }
}

impl<'a, M> IntoIterator for TrailSnapshot<'a, M> {
    type Item = &'a TrailPoint<M>;
    type IntoIter = Chain<slice::Iter<'a, TrailPoint<M>>, slice::Iter<'a, TrailPoint<M>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.head.iter().chain(self.tail.iter())
    }
}

/// Debug snapshot of a [`TrailBuffer`]'s bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrailDebugInfo {
    /// Points currently held.
    pub len: usize,
    /// Configured capacity.
    pub capacity: TrailCapacity,
    /// Appends over the buffer's lifetime.
    pub total_appended: u64,
    /// Points that were appended but are no longer held (evicted or cleared).
    pub evicted: u64,
}
