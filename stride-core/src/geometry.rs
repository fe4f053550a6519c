// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

/// Clamp a cosine into the domain of `acos`.
///
/// Rounding at the edge of the workspace can push the ratio just past
/// one. A NaN stays NaN.
#[inline]
pub fn clamp_cosine(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// Calculate the angle of a triangle using the law of cosines.
///
/// Returns the angle opposite to side `c`, enclosed by `a` and `b`.
pub fn law_of_cosines(a: f64, b: f64, c: f64) -> f64 {
    let a2 = a.powi(2);
    let b2 = b.powi(2);
    let c2 = c.powi(2);

    let numerator = a2 + b2 - c2;
    let denominator = 2.0 * a * b;

    clamp_cosine(numerator / denominator).acos()
}
