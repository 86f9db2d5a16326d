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

use planar_kernel::geometry::{Point2, Vector2};

#[test]
fn test_arithmetic() {
    let a = Point2::new(1.0, 2.0);
    let b = Point2::new(4.0, -3.0);

    assert_eq!(a + b, Point2::new(5.0, -1.0));
    assert_eq!(b - a, Point2::new(3.0, -5.0));
    assert_eq!(2.0 * a, Point2::new(2.0, 4.0));
    assert_eq!(a * 3.0, Point2::new(3.0, 6.0));
    assert_eq!(-a, Point2::new(-1.0, -2.0));
}

#[test]
fn test_index_access() {
    let p = Point2::new(7.0, -1.5);
    assert_eq!(p[0], 7.0);
    assert_eq!(p[1], -1.5);
}

#[test]
#[should_panic]
fn test_index_out_of_range() {
    let p = Point2::new(7.0, -1.5);
    let _value: f64 = p[2];
}

#[test]
fn test_equality_is_exact() {
    let a = Point2::new(0.1 + 0.2, 1.0);
    let b = Point2::new(0.3, 1.0);
    assert!(a != b);
    assert_eq!(Point2::new(0.3, 1.0), b);
}

#[test]
fn test_ordering() {
    let mut pts = vec![
        Point2::new(2.0, 1.0),
        Point2::new(1.0, 3.0),
        Point2::new(1.0, -1.0),
        Point2::new(0.0, 9.0),
    ];
    pts.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(
        pts,
        vec![
            Point2::new(0.0, 9.0),
            Point2::new(1.0, -1.0),
            Point2::new(1.0, 3.0),
            Point2::new(2.0, 1.0),
        ]
    );
}

#[test]
fn test_length_and_dot() {
    let v = Point2::new(3.0, 4.0);
    assert_eq!(v.length(), 5.0);
    assert_eq!(v.dot(&Point2::new(-4.0, 3.0)), 0.0);
    assert_eq!(v.cross(&Point2::new(1.0, 0.0)), -4.0);
}

#[test]
fn test_polar_angle() {
    assert_eq!(Point2::new(5.0, 0.0).polar_angle(), 0.0);
    assert_eq!(Point2::new(0.0, 1.0).polar_angle(), 90.0);
    assert!((Point2::new(-2.0, 0.0).polar_angle() - 180.0).abs() < 1e-9);
    assert_eq!(Point2::new(0.0, -3.0).polar_angle(), 270.0);
    assert!((Point2::new(1.0, 1.0).polar_angle() - 45.0).abs() < 1e-9);
    assert_eq!(Point2::new(0.0, 0.0).polar_angle(), -1.0);
}

#[test]
fn test_f32_points() {
    let a = Vector2::<f32>::new(1.5, 2.0);
    let b = 2.0f32 * a;
    assert_eq!(b, Vector2::new(3.0, 4.0));
    assert_eq!(Vector2::<f32>::new(0.0, 2.0).polar_angle(), 90.0);
}
