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

use crate::numeric::scalar::Scalar;
use std::cmp::Ordering;
use std::ops::{Add, Index, Mul, Neg, Sub};

/// A 2D point or free vector. Value semantics throughout; equality is exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2<T: Scalar> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product `self × other`.
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - other.x * self.y
    }

    pub fn length(&self) -> T {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn scale(&self, s: T) -> Self {
        Self {
            x: s * self.x,
            y: s * self.y,
        }
    }

    /// Angle in degrees in `[0, 360)` measured counter-clockwise from +x.
    ///
    /// The zero vector has no direction and returns `-1`.
    pub fn polar_angle(&self) -> T {
        let zero = T::zero();
        if self.x == zero && self.y == zero {
            return -T::one();
        }
        if self.x == zero {
            return if self.y > zero {
                T::cast(90.0)
            } else {
                T::cast(270.0)
            };
        }

        let theta = (self.y / self.x).atan().to_degrees();
        if self.x > zero {
            if self.y >= zero {
                theta
            } else {
                T::cast(360.0) + theta
            }
        } else {
            T::cast(180.0) + theta
        }
    }
}

impl<T: Scalar> Default for Vector2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Vector2<T>;
    fn add(self, rhs: Vector2<T>) -> Vector2<T> {
        Vector2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Vector2<T>;
    fn sub(self, rhs: Vector2<T>) -> Vector2<T> {
        Vector2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Vector2<T> {
        Vector2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Vector2<T>;
    fn mul(self, s: T) -> Vector2<T> {
        self.scale(s)
    }
}

impl Mul<Vector2<f64>> for f64 {
    type Output = Vector2<f64>;
    fn mul(self, v: Vector2<f64>) -> Vector2<f64> {
        v.scale(self)
    }
}

impl Mul<Vector2<f32>> for f32 {
    type Output = Vector2<f32>;
    fn mul(self, v: Vector2<f32>) -> Vector2<f32> {
        v.scale(self)
    }
}

impl<T: Scalar> Index<usize> for Vector2<T> {
    type Output = T;
    fn index(&self, axis: usize) -> &T {
        match axis {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Invalid axis"),
        }
    }
}

/// Lexicographic on `(x, y)`.
impl<T: Scalar> PartialOrd for Vector2<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.x.partial_cmp(&other.x)? {
            Ordering::Equal => self.y.partial_cmp(&other.y),
            ord => Some(ord),
        }
    }
}
