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

use crate::geometry::{DirectedEdge, LineIntersection, Vector2};
use crate::numeric::scalar::Scalar;

/// Position of a point relative to a directed edge `p0 → p1`.
///
/// Exactly one class applies to any point. The collinear classes follow the
/// direction of the edge: `Behind` is before `p0`, `Beyond` is past `p1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointClass {
    Left,
    Right,
    Beyond,
    Behind,
    Between,
    Origin,
    Destination,
}

impl<T: Scalar> Vector2<T> {
    pub fn classify(&self, p0: &Vector2<T>, p1: &Vector2<T>) -> PointClass {
        let a = *p1 - *p0;
        let b = *self - *p0;
        let sa = a.cross(&b);
        if sa > T::zero() {
            return PointClass::Left;
        }
        if sa < T::zero() {
            return PointClass::Right;
        }
        if a.x * b.x < T::zero() || a.y * b.y < T::zero() {
            return PointClass::Behind;
        }
        if a.length() < b.length() {
            return PointClass::Beyond;
        }
        if *p0 == *self {
            return PointClass::Origin;
        }
        if *p1 == *self {
            return PointClass::Destination;
        }
        PointClass::Between
    }

    pub fn classify_edge(&self, edge: &DirectedEdge<T>) -> PointClass {
        self.classify(&edge.org, &edge.dest)
    }

    /// Signed distance from the point to the line through `edge`.
    ///
    /// Points left of the edge are at negative distance, points right of it
    /// at positive distance. NaN for a zero-length edge.
    pub fn distance(&self, edge: &DirectedEdge<T>) -> T {
        let mut ab = *edge;
        ab.flip().rot();

        let n = ab.dest - ab.org;
        let n = n.scale(T::one() / n.length());
        let f = DirectedEdge::new(*self, *self + n);

        // `n` has unit length, so the ray parameter is the distance.
        match f.intersect(edge) {
            LineIntersection::Skew(t) => t,
            _ => T::nan(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_classify_as_origin_and_destination() {
        let p0 = Vector2::new(1.0, 1.0);
        let p1 = Vector2::new(4.0, 5.0);

        assert_eq!(p0.classify(&p0, &p1), PointClass::Origin);
        assert_eq!(p1.classify(&p0, &p1), PointClass::Destination);
    }

    #[test]
    fn vertical_edge_collinear_classes() {
        let p0 = Vector2::new(0.0, 0.0);
        let p1 = Vector2::new(0.0, 4.0);

        assert_eq!(Vector2::new(0.0, -1.0).classify(&p0, &p1), PointClass::Behind);
        assert_eq!(Vector2::new(0.0, 2.0).classify(&p0, &p1), PointClass::Between);
        assert_eq!(Vector2::new(0.0, 9.0).classify(&p0, &p1), PointClass::Beyond);
        assert_eq!(Vector2::new(-1.0, 2.0).classify(&p0, &p1), PointClass::Left);
        assert_eq!(Vector2::new(1.0, 2.0).classify(&p0, &p1), PointClass::Right);
    }
}
