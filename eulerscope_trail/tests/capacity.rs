// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A bounded trail always holds exactly the most recent appends, in order.

use eulerscope_trail::{TrailBuffer, TrailCapacity, TrailPoint};
use kurbo::Point;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Append,
    Clear,
    Resize(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => Just(Op::Append),
        1 => Just(Op::Clear),
        1 => (1_usize..40).prop_map(Op::Resize),
    ]
}

proptest! {
    #[test]
    fn finite_trail_keeps_newest_points(
        max_len in 1_usize..40,
        count in 0_usize..200,
    ) {
        let mut trail = TrailBuffer::new(TrailCapacity::finite(max_len).unwrap());
        for i in 0..count {
            trail.append(TrailPoint::with_meta(Point::new(i as f64, 0.0), i));
        }

        let kept: Vec<usize> = trail.snapshot().iter().map(|p| p.meta).collect();
        let expected: Vec<usize> = (count.saturating_sub(max_len)..count).collect();
        prop_assert_eq!(kept, expected);
        prop_assert_eq!(trail.total_appended(), count as u64);
    }

    #[test]
    fn length_never_exceeds_capacity(ops in prop::collection::vec(op(), 0..300)) {
        let mut trail = TrailBuffer::new(TrailCapacity::finite(16).unwrap());
        let mut model: Vec<u32> = Vec::new();
        let mut next = 0_u32;
        let mut limit = 16_usize;

        for op in ops {
            match op {
                Op::Append => {
                    trail.append(TrailPoint::with_meta(Point::ZERO, next));
                    model.push(next);
                    next += 1;
                }
                Op::Clear => {
                    trail.clear();
                    model.clear();
                }
                Op::Resize(n) => {
                    trail.set_capacity(TrailCapacity::finite(n).unwrap());
                    limit = n;
                }
            }
            if model.len() > limit {
                model.drain(..model.len() - limit);
            }

            prop_assert!(trail.len() <= limit);
            let kept: Vec<u32> = trail.snapshot().iter().map(|p| p.meta).collect();
            prop_assert_eq!(&kept, &model);
            prop_assert_eq!(trail.last().map(|p| p.meta), model.last().copied());
        }
    }

    #[test]
    fn unbounded_trail_keeps_everything(count in 0_usize..3_000) {
        let mut trail = TrailBuffer::new(TrailCapacity::Unbounded);
        for i in 0..count {
            trail.append(TrailPoint::with_meta(Point::ZERO, i));
        }
        prop_assert_eq!(trail.len(), count);
        prop_assert_eq!(trail.debug_info().evicted, 0);
    }
}
