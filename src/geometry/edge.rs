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
    geometry::Vector2,
    kernel::classify::PointClass,
    numeric::scalar::Scalar,
};

/// Relation between the infinite lines through two edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection<T: Scalar> {
    Collinear,
    Parallel,
    /// Lines cross at parameter `t` along the receiving edge.
    Skew(T),
}

/// Relation between two closed segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentCrossing<T: Scalar> {
    Collinear,
    Parallel,
    /// Segments cross at parameter `t` along the receiving edge, `t ∈ [0, 1]`.
    SkewCross(T),
    SkewNoCross,
}

impl<T: Scalar> SegmentCrossing<T> {
    pub fn crosses(&self) -> bool {
        matches!(self, SegmentCrossing::SkewCross(_))
    }
}

/// Directed segment from `org` to `dest`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge<T: Scalar> {
    pub org: Vector2<T>,
    pub dest: Vector2<T>,
}

impl<T: Scalar> DirectedEdge<T> {
    pub fn new(org: Vector2<T>, dest: Vector2<T>) -> Self {
        Self { org, dest }
    }

    pub fn direction(&self) -> Vector2<T> {
        self.dest - self.org
    }

    /// Rotates the edge 90° clockwise about its midpoint, in place.
    pub fn rot(&mut self) -> &mut Self {
        let m = (self.org + self.dest).scale(T::half());
        let v = self.dest - self.org;
        let n = Vector2::new(v.y, -v.x);
        self.org = m - n.scale(T::half());
        self.dest = m + n.scale(T::half());
        self
    }

    /// Rotates the edge 180° about its midpoint, in place.
    pub fn flip(&mut self) -> &mut Self {
        self.rot().rot()
    }

    pub fn point(&self, t: T) -> Vector2<T> {
        self.org + (self.dest - self.org).scale(t)
    }

    /// Intersects the line through `self` with the line through `other`.
    ///
    /// For skew lines the payload is the parameter along `self` where the
    /// crossing happens; `self.point(t)` is the crossing point.
    pub fn intersect(&self, other: &DirectedEdge<T>) -> LineIntersection<T> {
        let (a, b) = (self.org, self.dest);
        let (c, d) = (other.org, other.dest);
        let n = Vector2::new((d - c).y, (c - d).x);
        let denom = n.dot(&(b - a));
        if denom == T::zero() {
            return match self.org.classify_edge(other) {
                PointClass::Left | PointClass::Right => LineIntersection::Parallel,
                _ => LineIntersection::Collinear,
            };
        }
        let num = n.dot(&(a - c));
        LineIntersection::Skew(-num / denom)
    }

    /// Closed segment/segment test. Endpoints count as crossing.
    pub fn cross(&self, other: &DirectedEdge<T>) -> SegmentCrossing<T> {
        let s = match other.intersect(self) {
            LineIntersection::Collinear => return SegmentCrossing::Collinear,
            LineIntersection::Parallel => return SegmentCrossing::Parallel,
            LineIntersection::Skew(s) => s,
        };
        if s < T::zero() || s > T::one() {
            return SegmentCrossing::SkewNoCross;
        }

        match self.intersect(other) {
            LineIntersection::Skew(t) if T::zero() <= t && t <= T::one() => {
                SegmentCrossing::SkewCross(t)
            }
            _ => SegmentCrossing::SkewNoCross,
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.org.x == self.dest.x
    }

    /// `+inf` for vertical edges.
    pub fn slope(&self) -> T {
        if self.org.x != self.dest.x {
            (self.dest.y - self.org.y) / (self.dest.x - self.org.x)
        } else {
            T::infinity()
        }
    }

    /// Evaluates the supporting line at `x`. Meaningless for vertical edges.
    pub fn y(&self, x: T) -> T {
        self.slope() * (x - self.org.x) + self.org.y
    }
}

/// The unit edge `(0,0) → (1,0)`.
impl<T: Scalar> Default for DirectedEdge<T> {
    fn default() -> Self {
        Self {
            org: Vector2::zero(),
            dest: Vector2::new(T::one(), T::zero()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(ax: f64, ay: f64, bx: f64, by: f64) -> DirectedEdge<f64> {
        DirectedEdge::new(Vector2::new(ax, ay), Vector2::new(bx, by))
    }

    #[test]
    fn rot_turns_clockwise_about_midpoint() {
        let mut edge = e(0.0, 0.0, 10.0, 0.0);
        edge.rot();
        assert_eq!(edge, e(5.0, 5.0, 5.0, -5.0));
    }

    #[test]
    fn flip_swaps_endpoints() {
        let mut edge = e(1.0, 2.0, 7.0, -4.0);
        edge.flip();
        assert_eq!(edge, e(7.0, -4.0, 1.0, 2.0));
    }

    #[test]
    fn four_rotations_restore_edge() {
        let original = e(-3.0, 1.0, 5.0, 9.0);
        let mut edge = original;
        edge.rot().rot().rot().rot();
        assert_eq!(edge, original);
    }

    #[test]
    fn default_is_unit_edge() {
        assert_eq!(DirectedEdge::<f64>::default(), e(0.0, 0.0, 1.0, 0.0));
    }
}
