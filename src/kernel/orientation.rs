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

use crate::geometry::Vector2;
use crate::numeric::scalar::Scalar;
use std::ops::Neg;

/// Turn direction of a point relative to a directed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left of the line (counter-clockwise turn).
    CounterClockwise,
    /// Right of the line (clockwise turn).
    Clockwise,
    Collinear,
}

impl Orientation {
    /// `+1`, `-1` or `0`.
    pub fn sign(self) -> i32 {
        match self {
            Orientation::CounterClockwise => 1,
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
        }
    }
}

impl Neg for Orientation {
    type Output = Orientation;
    fn neg(self) -> Orientation {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d<T: Scalar>(p0: &Vector2<T>, p1: &Vector2<T>, p2: &Vector2<T>) -> T {
    let a = *p1 - *p0;
    let b = *p2 - *p0;
    a.cross(&b)
}

/// Sign of [`orient2d`], compared against exact zero.
pub fn orientation<T: Scalar>(p0: &Vector2<T>, p1: &Vector2<T>, p2: &Vector2<T>) -> Orientation {
    let sa = orient2d(p0, p1, p2);
    if sa > T::zero() {
        Orientation::CounterClockwise
    } else if sa < T::zero() {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccw_test() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(1.0, 0.0);
        let c = Vector2::new(0.0, 1.0);

        assert!(orient2d(&a, &b, &c) > 0.0); // Counter-clockwise
        assert_eq!(orientation(&a, &b, &c).sign(), 1);
    }

    #[test]
    fn cw_test() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(1.0, 0.0);
        let c = Vector2::new(0.0, -1.0);

        assert_eq!(orientation(&a, &b, &c), Orientation::Clockwise);
    }

    #[test]
    fn collinear_test() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(1.0, 1.0);
        let c = Vector2::new(3.0, 3.0);

        assert_eq!(orientation(&a, &b, &c), Orientation::Collinear);
        assert_eq!(-Orientation::Collinear, Orientation::Collinear);
    }
}
