// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use nalgebra::Point2;

/// The target lies outside the reachable annulus of the leg.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnreachableTargetError {
    /// Requested target.
    pub target: Point2<f64>,
    /// Distance from the hip to the target.
    pub distance: f64,
}

impl UnreachableTargetError {
    pub(crate) fn new(target: Point2<f64>, distance: f64) -> Self {
        Self { target, distance }
    }
}

impl std::error::Error for UnreachableTargetError {}

impl std::fmt::Display for UnreachableTargetError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Target ({:.1}, {:.1}) is out of reach!",
            self.target.x, self.target.y
        )
    }
}
