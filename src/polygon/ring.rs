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

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use slotmap::SlotMap;

use crate::{
    geometry::Vector2,
    numeric::scalar::Scalar,
    polygon::{
        error::RingError,
        vertex::{Rotation, SlotKey, Vertex, VertexKey},
    },
};

static NEXT_RING_ID: AtomicU64 = AtomicU64::new(0);

fn next_ring_id() -> u64 {
    NEXT_RING_ID.fetch_add(1, Ordering::Relaxed)
}

/// Arena of vertices linked into circular doubly-linked rings.
///
/// The arena may transiently hold more than one ring (right after a
/// [`split`](Self::split) or [`splice`](Self::splice)); a
/// [`Polygon`](crate::polygon::Polygon) keeps exactly one.
///
/// Every arena has a process-unique id stamped into the handles it hands
/// out, so handles never resolve in an arena other than their own.
///
/// Invariant: for every live vertex `v`, `ccw(cw(v)) == v` and
/// `cw(ccw(v)) == v`. A single vertex is a ring linked to itself.
#[derive(Debug)]
pub struct VertexRing<T: Scalar> {
    id: u64,
    vertices: SlotMap<SlotKey, Vertex<T>>,
}

impl<T: Scalar> Default for VertexRing<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The clone is a separate arena: same layout, fresh id. Handles into `self`
/// do not resolve in the clone.
impl<T: Scalar> Clone for VertexRing<T> {
    fn clone(&self) -> Self {
        Self {
            id: next_ring_id(),
            vertices: self.vertices.clone(),
        }
    }
}

impl<T: Scalar> VertexRing<T> {
    pub fn new() -> Self {
        Self {
            id: next_ring_id(),
            vertices: SlotMap::with_key(),
        }
    }

    fn handle(&self, slot: SlotKey) -> VertexKey {
        VertexKey {
            ring: self.id,
            slot,
        }
    }

    /// Resolves a handle to a live slot of this arena.
    fn slot(&self, v: VertexKey) -> Result<SlotKey, RingError> {
        if self.contains(v) {
            Ok(v.slot)
        } else {
            Err(RingError::StaleVertex(v))
        }
    }

    /// Live vertices in the arena, across all rings it holds.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, v: VertexKey) -> bool {
        v.ring == self.id && self.vertices.contains_key(v.slot)
    }

    pub fn vertex(&self, v: VertexKey) -> Result<&Vertex<T>, RingError> {
        Ok(&self.vertices[self.slot(v)?])
    }

    pub fn point(&self, v: VertexKey) -> Result<Vector2<T>, RingError> {
        Ok(self.vertex(v)?.point)
    }

    pub fn cw(&self, v: VertexKey) -> Result<VertexKey, RingError> {
        self.neighbor(v, Rotation::Clockwise)
    }

    pub fn ccw(&self, v: VertexKey) -> Result<VertexKey, RingError> {
        self.neighbor(v, Rotation::CounterClockwise)
    }

    pub fn neighbor(&self, v: VertexKey, rotation: Rotation) -> Result<VertexKey, RingError> {
        Ok(self.handle(self.vertex(v)?.neighbor(rotation)))
    }

    /// Creates a new ring holding a single vertex.
    pub fn make(&mut self, point: Vector2<T>) -> VertexKey {
        let slot = self.vertices.insert_with_key(|k| Vertex {
            point,
            cw: k,
            ccw: k,
        });
        self.handle(slot)
    }

    /// Links a new vertex immediately clockwise of `v` and returns it.
    pub fn insert(&mut self, v: VertexKey, point: Vector2<T>) -> Result<VertexKey, RingError> {
        self.slot(v)?;
        Ok(self.link_after(v, point))
    }

    /// `insert` for a handle already known to be live in this arena.
    pub(crate) fn link_after(&mut self, v: VertexKey, point: Vector2<T>) -> VertexKey {
        let v = v.slot;
        let c = self.vertices[v].cw;
        let b = self.vertices.insert(Vertex { point, cw: c, ccw: v });
        self.vertices[v].cw = b;
        self.vertices[c].ccw = b;
        self.handle(b)
    }

    /// Unlinks `v` from its ring and destroys it, returning its coordinates.
    pub fn remove(&mut self, v: VertexKey) -> Result<Vector2<T>, RingError> {
        let s = self.slot(v)?;
        let (cw, ccw) = (self.vertices[s].cw, self.vertices[s].ccw);
        self.vertices[ccw].cw = cw;
        self.vertices[cw].ccw = ccw;
        self.vertices
            .remove(s)
            .map(|vx| vx.point)
            .ok_or(RingError::StaleVertex(v))
    }

    /// Exchanges the clockwise successors of `a` and `b`.
    ///
    /// Splits one ring into two when `a` and `b` share a ring, and merges two
    /// rings into one otherwise. Applying the same splice twice is a no-op.
    pub fn splice(&mut self, a: VertexKey, b: VertexKey) -> Result<(), RingError> {
        let a = self.slot(a)?;
        let b = self.slot(b)?;
        let an = self.vertices[a].cw;
        let bn = self.vertices[b].cw;
        self.vertices[a].cw = bn;
        self.vertices[b].cw = an;
        self.vertices[an].ccw = b;
        self.vertices[bn].ccw = a;
        Ok(())
    }

    /// Cuts the ring along the diagonal `a`–`b`.
    ///
    /// Both endpoints are duplicated, so every original vertex keeps its two
    /// neighbours: `a` stays in a ring running `a → b → … → a`, and the
    /// returned duplicate of `b` anchors the other ring, which contains the
    /// duplicate of `a`. `b` must lie in the same ring as `a`.
    pub fn split(&mut self, a: VertexKey, b: VertexKey) -> Result<VertexKey, RingError> {
        if a == b {
            return Err(RingError::DegenerateDiagonal);
        }
        let a_point = self.point(a)?;
        let b_point = self.point(b)?;

        let b_prev = self.ccw(b)?;
        let bp = self.insert(b_prev, b_point)?;
        self.insert(a, a_point)?;
        self.splice(a, bp)?;
        Ok(bp)
    }

    /// Visits each vertex of the ring containing `start` once, beginning at
    /// `start` and following `rotation`.
    pub fn walk(&self, start: VertexKey, rotation: Rotation) -> Result<RingWalk<'_, T>, RingError> {
        let start = self.slot(start)?;
        Ok(RingWalk {
            ring: self,
            start,
            next: Some(start),
            rotation,
            budget: self.vertices.len(),
        })
    }

    pub fn ring_len(&self, v: VertexKey) -> Result<usize, RingError> {
        Ok(self.walk(v, Rotation::Clockwise)?.count())
    }

    /// Checks the ring containing `start`: every link resolves, `cw` and `ccw`
    /// are mutual inverses, and the clockwise walk closes. Returns the ring size.
    pub fn validate(&self, start: VertexKey) -> Result<usize, RingError> {
        let start = self.slot(start)?;
        let mut v = start;
        for size in 1..=self.vertices.len() {
            let broken = RingError::BrokenLink {
                vertex: self.handle(v),
            };
            let vx = &self.vertices[v];
            let next = self.vertices.get(vx.cw).ok_or(broken)?;
            let prev = self.vertices.get(vx.ccw).ok_or(broken)?;
            if next.ccw != v || prev.cw != v {
                return Err(broken);
            }
            v = vx.cw;
            if v == start {
                return Ok(size);
            }
        }
        Err(RingError::BrokenLink {
            vertex: self.handle(start),
        })
    }

    /// Moves the ring containing `start` into a fresh arena.
    ///
    /// Returns the new arena and the handle of `start`'s copy in it. The moved
    /// vertices' old handles become stale in `self`.
    pub fn detach(&mut self, start: VertexKey) -> Result<(VertexRing<T>, VertexKey), RingError> {
        let old: Vec<SlotKey> = self
            .walk(start, Rotation::Clockwise)?
            .map(|k| k.slot)
            .collect();

        let mut ring = VertexRing::new();
        let new: Vec<SlotKey> = old
            .iter()
            .map(|&k| {
                ring.vertices.insert(Vertex {
                    point: self.vertices[k].point,
                    cw: SlotKey::default(),
                    ccw: SlotKey::default(),
                })
            })
            .collect();

        let m = new.len();
        for (i, &k) in new.iter().enumerate() {
            let vx = &mut ring.vertices[k];
            vx.cw = new[(i + 1) % m];
            vx.ccw = new[(i + m - 1) % m];
        }
        for k in old {
            self.vertices.remove(k);
        }

        log::debug!("detached ring of {} vertices", m);
        let anchor = ring.handle(new[0]);
        Ok((ring, anchor))
    }

    /// Drops every vertex that is not on the ring containing `start`.
    pub(crate) fn retain_ring(&mut self, start: VertexKey) -> Result<usize, RingError> {
        let keep: HashSet<SlotKey> = self
            .walk(start, Rotation::Clockwise)?
            .map(|k| k.slot)
            .collect();
        self.vertices.retain(|k, _| keep.contains(&k));
        Ok(keep.len())
    }
}

/// Iterator over one ring, produced by [`VertexRing::walk`].
pub struct RingWalk<'a, T: Scalar> {
    ring: &'a VertexRing<T>,
    start: SlotKey,
    next: Option<SlotKey>,
    rotation: Rotation,
    budget: usize,
}

impl<T: Scalar> Iterator for RingWalk<'_, T> {
    type Item = VertexKey;

    fn next(&mut self) -> Option<VertexKey> {
        let v = self.next?;
        if self.budget == 0 {
            self.next = None;
            return None;
        }
        self.budget -= 1;
        let n = self.ring.vertices.get(v)?.neighbor(self.rotation);
        self.next = (n != self.start).then_some(n);
        Some(self.ring.handle(v))
    }
}
