// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eulerscope Trail: bounded point history for animation trails.
//!
//! A trail is the ordered history of points a generator has produced, oldest
//! first. The renderer strokes it as one connected path every frame, so the
//! buffer has to stay cheap to append to and cheap to walk in order.
//!
//! This crate provides:
//! - [`TrailPoint`]: a logical position plus opaque, caller-defined metadata.
//! - [`TrailCapacity`]: either a finite bound or an explicit opt-in to
//!   unbounded growth.
//! - [`TrailBuffer`]: the FIFO history itself.
//! - [`TrailSnapshot`]: a borrowed, consistent view used while drawing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use eulerscope_trail::{TrailBuffer, TrailCapacity, TrailPoint};
//!
//! let capacity = TrailCapacity::finite(2).unwrap();
//! let mut trail = TrailBuffer::<()>::new(capacity);
//!
//! trail.append(TrailPoint::new(Point::new(0.0, 0.0)));
//! trail.append(TrailPoint::new(Point::new(1.0, 0.0)));
//! trail.append(TrailPoint::new(Point::new(2.0, 0.0)));
//!
//! // The oldest point was evicted.
//! let xs: Vec<f64> = trail.snapshot().positions().map(|p| p.x).collect();
//! assert_eq!(xs, [1.0, 2.0]);
//! ```
//!
//! ## Unbounded trails
//!
//! [`TrailCapacity::Unbounded`] never evicts. Memory grows by one point per
//! append for as long as the session runs, so it is only suitable for modes
//! that deliberately accumulate a picture and for sessions that are cleared
//! regularly.
//!
//! ## Consistency
//!
//! [`TrailBuffer::snapshot`] borrows the buffer immutably, and both
//! [`TrailBuffer::append`] and [`TrailBuffer::clear`] need `&mut`. A draw pass
//! holding a snapshot can therefore never observe a half-cleared buffer or a
//! point that is being evicted.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod buffer;
mod point;

pub use buffer::{TrailBuffer, TrailCapacity, TrailDebugInfo, TrailSnapshot};
pub use point::TrailPoint;
