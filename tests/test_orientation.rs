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

use planar_kernel::geometry::Point2;
use planar_kernel::kernel::{Orientation, orient2d, orientation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn ccw_test() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1.0, 0.0);
    let c = Point2::new(0.0, 1.0);

    assert!(orient2d(&a, &b, &c) > 0.0); // Counter-clockwise
    assert_eq!(orientation(&a, &b, &c), Orientation::CounterClockwise);
    assert_eq!(orientation(&a, &c, &b), Orientation::Clockwise);
}

#[test]
fn collinear_points_have_zero_orientation() {
    let a = Point2::new(-2.0, -1.0);
    let b = Point2::new(0.0, 0.0);
    let c = Point2::new(4.0, 2.0);

    assert_eq!(orientation(&a, &b, &c).sign(), 0);
    assert_eq!(orientation(&c, &a, &b).sign(), 0);
}

#[test]
fn swapping_last_two_points_negates_orientation() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let mut p = || Point2::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0));
        let (a, b, c) = (p(), p(), p());

        assert_eq!(orientation(&a, &b, &c), -orientation(&a, &c, &b));
        assert_eq!(orientation(&a, &b, &c).sign(), -orientation(&a, &c, &b).sign());
    }
}

#[test]
fn orientation_is_invariant_under_cyclic_shift() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(3.0, 1.0);
    let c = Point2::new(1.0, 4.0);

    assert_eq!(orientation(&a, &b, &c), orientation(&b, &c, &a));
    assert_eq!(orientation(&b, &c, &a), orientation(&c, &a, &b));
}
