// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use slotmap::new_key_type;

use crate::{geometry::Vector2, numeric::scalar::Scalar};

new_key_type! {
    /// Slot inside one arena. Only meaningful next to the arena's id.
    pub(crate) struct SlotKey;
}

/// Handle to a vertex in a [`VertexRing`](crate::polygon::VertexRing).
///
/// A handle names both its arena and a generation-tagged slot in it. A handle
/// to a removed vertex, to one that `split` moved into another polygon, or to
/// a vertex of a different arena is rejected with
/// [`StaleVertex`](crate::polygon::RingError::StaleVertex).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexKey {
    pub(crate) ring: u64,
    pub(crate) slot: SlotKey,
}

/// Traversal direction around a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone)]
pub struct Vertex<T: Scalar> {
    pub point: Vector2<T>,
    pub(crate) cw: SlotKey,  // next
    pub(crate) ccw: SlotKey, // prev
}

impl<T: Scalar> Vertex<T> {
    pub(crate) fn neighbor(&self, rotation: Rotation) -> SlotKey {
        match rotation {
            Rotation::Clockwise => self.cw,
            Rotation::CounterClockwise => self.ccw,
        }
    }
}
