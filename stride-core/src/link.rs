// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use nalgebra::Point2;

/// Link lengths of a two link planar leg.
///
/// Both lengths are strictly positive and finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkLengths {
    /// Proximal (upper leg) link.
    l1: f64,
    /// Distal (lower leg) link.
    l2: f64,
}

impl LinkLengths {
    /// Construct the link lengths.
    ///
    /// Returns `None` if either length is not a positive finite number.
    pub fn new(l1: f64, l2: f64) -> Option<Self> {
        let valid = |length: f64| length.is_finite() && length > 0.0;

        if valid(l1) && valid(l2) {
            Some(Self { l1, l2 })
        } else {
            None
        }
    }

    /// Proximal link length.
    #[inline]
    pub fn l1(&self) -> f64 {
        self.l1
    }

    /// Distal link length.
    #[inline]
    pub fn l2(&self) -> f64 {
        self.l2
    }

    /// Inner radius of the reachable workspace, fully folded.
    #[inline]
    pub fn min_reach(&self) -> f64 {
        (self.l1 - self.l2).abs()
    }

    /// Outer radius of the reachable workspace, fully extended.
    #[inline]
    pub fn max_reach(&self) -> f64 {
        self.l1 + self.l2
    }

    /// Test if the point lies within the reachable annulus, boundaries included.
    pub fn is_reachable(&self, point: &Point2<f64>) -> bool {
        let distance = point.coords.norm();
        distance >= self.min_reach() && distance <= self.max_reach()
    }
}

impl Default for LinkLengths {
    fn default() -> Self {
        Self {
            l1: crate::consts::DEFAULT_L1,
            l2: crate::consts::DEFAULT_L2,
        }
    }
}

impl std::fmt::Display for LinkLengths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L1: {:.2}; L2: {:.2}", self.l1, self.l2)
    }
}
