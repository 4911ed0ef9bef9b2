// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eulerscope Timing: "run on next display refresh" scheduling.
//!
//! Animation runs as a chain of frame callbacks: each frame asks for the next
//! one. This crate abstracts the host primitive behind [`FrameScheduler`]
//! (`requestAnimationFrame` in a browser, a redraw request in a native event
//! loop) and provides [`FrameQueue`], a plain in-memory implementation the
//! host drains once per refresh.
//!
//! The scheduler carries an opaque ticket per request and hands it back when
//! the frame is due. Callers put whatever they need to recognise their own
//! frames in the ticket; the scheduler never looks inside.
//!
//! ## Minimal example
//!
//! ```rust
//! use eulerscope_timing::{FrameQueue, FrameScheduler};
//!
//! let mut queue = FrameQueue::new();
//! let a = queue.request_frame("a");
//! queue.request_frame("b");
//! queue.cancel_frame(a);
//!
//! // One display refresh: deliver everything that was pending.
//! let due: Vec<_> = queue.take_due().collect();
//! assert_eq!(due, ["b"]);
//! assert!(queue.is_empty());
//! ```
//!
//! ## Cancellation
//!
//! [`FrameScheduler::cancel_frame`] is best effort. A host may already have
//! dequeued the callback when the cancel arrives, so recipients must still
//! check that a delivered ticket is current before acting on it.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;

/// Identifier for a requested frame, used to cancel it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Host primitive that invokes a callback on the next display refresh.
pub trait FrameScheduler<T> {
    /// Asks for one frame carrying `ticket`.
    fn request_frame(&mut self, ticket: T) -> FrameHandle;

    /// Withdraws a previously requested frame, if it has not fired yet.
    ///
    /// Unknown or already delivered handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// In-memory frame queue.
///
/// Requests accumulate until the host calls [`FrameQueue::take_due`] on a
/// display refresh. Frames requested while a batch is being delivered land in
/// the following batch, which is what keeps a self-rescheduling animation at
/// one step per refresh.
#[derive(Clone, Debug)]
pub struct FrameQueue<T> {
    pending: VecDeque<(FrameHandle, T)>,
    next_handle: u64,
}

impl<T> FrameQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            next_handle: 0,
        }
    }

    /// Number of frames waiting for the next refresh.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns `true` if `handle` is still pending.
    #[must_use]
    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.iter().any(|(h, _)| *h == handle)
    }

    /// Removes and returns every frame pending at this refresh, oldest first.
    pub fn take_due(&mut self) -> FrameBatch<T> {
        FrameBatch {
            inner: core::mem::take(&mut self.pending).into_iter(),
        }
    }

    /// Removes and returns only the oldest pending frame.
    pub fn pop_due(&mut self) -> Option<T> {
        self.pending.pop_front().map(|(_, ticket)| ticket)
    }
}

impl<T> Default for FrameQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameScheduler<T> for FrameQueue<T> {
    fn request_frame(&mut self, ticket: T) -> FrameHandle {
        let handle = FrameHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        self.pending.push_back((handle, ticket));
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|(h, _)| *h != handle);
    }
}

/// Frames delivered by one call to [`FrameQueue::take_due`].
#[derive(Debug)]
pub struct FrameBatch<T> {
    inner: vec_deque::IntoIter<(FrameHandle, T)>,
}

impl<T> Iterator for FrameBatch<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|(_, ticket)| ticket)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for FrameBatch<T> {}
