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

use crate::{
    geometry::{DirectedEdge, Vector2},
    numeric::scalar::Scalar,
    polygon::{
        error::RingError,
        ring::VertexRing,
        vertex::{Rotation, VertexKey},
    },
};

/// A polygon boundary: one vertex ring plus a cursor into it.
///
/// `size == 0` exactly when there is no cursor; otherwise `size` is the
/// number of vertices on the cursor's ring, which is the only ring the
/// polygon's arena holds.
#[derive(Debug)]
pub struct Polygon<T: Scalar> {
    ring: VertexRing<T>,
    cursor: Option<VertexKey>,
    size: usize,
}

impl<T: Scalar> Default for Polygon<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Polygon<T> {
    pub fn new() -> Self {
        Self {
            ring: VertexRing::new(),
            cursor: None,
            size: 0,
        }
    }

    /// Adopts the ring containing `v`, with `v` as the cursor. Any other ring
    /// stored in the same arena is dropped.
    pub fn from_vertex(mut ring: VertexRing<T>, v: VertexKey) -> Result<Self, RingError> {
        ring.retain_ring(v)?;
        let mut polygon = Self {
            ring,
            cursor: Some(v),
            size: 0,
        };
        polygon.resize();
        Ok(polygon)
    }

    /// Inserts `points` in order, as repeated [`insert`](Self::insert) would;
    /// the cursor ends on the last point.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector2<T>>,
    {
        let mut polygon = Self::new();
        for p in points {
            polygon.insert(p);
        }
        polygon
    }

    pub fn ring(&self) -> &VertexRing<T> {
        &self.ring
    }

    pub fn cursor(&self) -> Option<VertexKey> {
        self.cursor
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn contains(&self, v: VertexKey) -> bool {
        self.ring.contains(v)
    }

    /// Coordinates of the cursor vertex.
    pub fn point(&self) -> Option<Vector2<T>> {
        self.cursor.and_then(|v| self.ring.point(v).ok())
    }

    pub fn vertex_point(&self, v: VertexKey) -> Result<Vector2<T>, RingError> {
        self.ring.point(v)
    }

    /// Edge from the cursor to its clockwise neighbour.
    pub fn edge(&self) -> Option<DirectedEdge<T>> {
        let v = self.cursor?;
        let org = self.ring.point(v).ok()?;
        let dest = self.ring.point(self.ring.cw(v).ok()?).ok()?;
        Some(DirectedEdge::new(org, dest))
    }

    pub fn cw(&self) -> Option<VertexKey> {
        self.neighbor(Rotation::Clockwise)
    }

    pub fn ccw(&self) -> Option<VertexKey> {
        self.neighbor(Rotation::CounterClockwise)
    }

    pub fn neighbor(&self, rotation: Rotation) -> Option<VertexKey> {
        self.cursor.and_then(|v| self.ring.neighbor(v, rotation).ok())
    }

    /// Moves the cursor one step and returns the new cursor.
    pub fn advance(&mut self, rotation: Rotation) -> Option<VertexKey> {
        if let Some(n) = self.neighbor(rotation) {
            self.cursor = Some(n);
        }
        self.cursor
    }

    pub fn set_cursor(&mut self, v: VertexKey) -> Result<VertexKey, RingError> {
        self.ring.vertex(v)?;
        self.cursor = Some(v);
        Ok(v)
    }

    /// Adds a vertex clockwise of the cursor and moves the cursor onto it.
    pub fn insert(&mut self, point: Vector2<T>) -> VertexKey {
        let v = match self.cursor {
            None => self.ring.make(point),
            Some(c) => self.ring.link_after(c, point),
        };
        self.cursor = Some(v);
        self.size += 1;
        v
    }

    /// Deletes the cursor vertex and moves the cursor to its counter-clockwise
    /// neighbour. Returns the removed coordinates.
    pub fn remove(&mut self) -> Result<Vector2<T>, RingError> {
        let v = self.cursor.ok_or(RingError::EmptyPolygon)?;
        let prev = self.ring.ccw(v)?;
        let p = self.ring.remove(v)?;

        self.size -= 1;
        self.cursor = (self.size > 0).then_some(prev);
        log::trace!("removed vertex, {} left", self.size);
        Ok(p)
    }

    /// Cuts the polygon along the diagonal from the cursor to `b`.
    ///
    /// `self` keeps the cursor `a` and `b`, as the ring `a → b → … → a`: the
    /// boundary running clockwise from `b` back to the cursor, closed by the
    /// diagonal. The returned polygon holds the chain running clockwise from
    /// the cursor to `b`, between duplicates of both endpoints, with its
    /// cursor on the duplicate of `b`. The sizes sum to the old size plus two.
    ///
    /// Handles to vertices that moved into the returned polygon are stale
    /// afterwards, and handles of the returned polygon are never valid in
    /// `self`; look vertices up again through the polygon that owns them.
    pub fn split(&mut self, b: VertexKey) -> Result<Polygon<T>, RingError> {
        let a = self.cursor.ok_or(RingError::EmptyPolygon)?;
        self.ring.vertex(b)?;

        let bp = self.ring.split(a, b)?;
        let (ring, anchor) = self.ring.detach(bp)?;
        self.resize();
        let other = Polygon::from_vertex(ring, anchor)?;

        log::debug!(
            "split polygon into rings of {} and {} vertices",
            self.size,
            other.size
        );
        Ok(other)
    }

    /// Recomputes `size` by walking the ring.
    pub fn resize(&mut self) {
        self.size = match self.cursor {
            Some(v) => self.ring.ring_len(v).unwrap_or(0),
            None => 0,
        };
    }

    /// Checks the ring linkage and that the cached size matches it.
    pub fn validate(&self) -> Result<(), RingError> {
        let Some(v) = self.cursor else {
            return if self.ring.is_empty() {
                Ok(())
            } else {
                Err(RingError::EmptyPolygon)
            };
        };
        let n = self.ring.validate(v)?;
        if n != self.size || n != self.ring.len() {
            return Err(RingError::BrokenLink { vertex: v });
        }
        Ok(())
    }

    /// Vertex handles clockwise from the cursor, each once.
    pub fn keys(&self) -> impl Iterator<Item = VertexKey> + '_ {
        self.cursor
            .and_then(|v| self.ring.walk(v, Rotation::Clockwise).ok())
            .into_iter()
            .flatten()
    }

    /// Coordinates clockwise from the cursor, each once.
    pub fn points(&self) -> impl Iterator<Item = Vector2<T>> + '_ {
        self.keys().filter_map(|k| self.ring.point(k).ok())
    }
}

/// Deep copy with fresh vertex handles. The copy's cursor sits on the
/// duplicate of `self`'s cursor; `self` is only read.
impl<T: Scalar> Clone for Polygon<T> {
    fn clone(&self) -> Self {
        let mut copy = Polygon::new();
        for p in self.points() {
            copy.insert(p);
        }
        copy.advance(Rotation::Clockwise);
        log::trace!("copied polygon of {} vertices", copy.size);
        copy
    }
}

impl<T: Scalar> FromIterator<Vector2<T>> for Polygon<T> {
    fn from_iter<I: IntoIterator<Item = Vector2<T>>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_polygon_has_no_cursor() {
        let mut polygon = Polygon::<f64>::new();
        assert_eq!(polygon.size(), 0);
        assert!(polygon.cursor().is_none());
        assert!(polygon.point().is_none());
        assert_eq!(polygon.advance(Rotation::Clockwise), None);
        assert_eq!(polygon.remove(), Err(RingError::EmptyPolygon));
        assert!(polygon.validate().is_ok());
    }

    #[test]
    fn remove_last_vertex_empties_polygon() {
        let mut polygon = Polygon::new();
        polygon.insert(Vector2::new(1.0, 2.0));
        assert_eq!(polygon.remove(), Ok(Vector2::new(1.0, 2.0)));
        assert!(polygon.is_empty());
        assert!(polygon.cursor().is_none());
        assert!(polygon.ring().is_empty());
    }

    #[test]
    fn split_at_cursor_is_rejected() {
        let mut polygon: Polygon<f64> = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]
            .into_iter()
            .map(Vector2::from)
            .collect();
        let a = polygon.cursor().unwrap();
        assert_eq!(polygon.split(a).unwrap_err(), RingError::DegenerateDiagonal);
        assert_eq!(polygon.size(), 3);
    }
}
