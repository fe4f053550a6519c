// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use nalgebra::Point2;

/// Joint positions of the leg, from the hip to the foot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicChain {
    joints: [Point2<f64>; 3],
}

impl KinematicChain {
    /// Construct the chain from the knee and foot positions. The base is
    /// always the origin.
    pub fn new(knee: Point2<f64>, foot: Point2<f64>) -> Self {
        Self {
            joints: [Point2::origin(), knee, foot],
        }
    }

    /// Base (hip) joint.
    #[inline]
    pub fn base(&self) -> &Point2<f64> {
        &self.joints[0]
    }

    /// Knee joint.
    #[inline]
    pub fn knee(&self) -> &Point2<f64> {
        &self.joints[1]
    }

    /// End effector (foot).
    #[inline]
    pub fn foot(&self) -> &Point2<f64> {
        &self.joints[2]
    }

    /// Joint positions in order.
    #[inline]
    pub fn joints(&self) -> &[Point2<f64>; 3] {
        &self.joints
    }

    /// Straight line links as (start, end) pairs.
    pub fn links(&self) -> [(Point2<f64>, Point2<f64>); 2] {
        [
            (self.joints[0], self.joints[1]),
            (self.joints[1], self.joints[2]),
        ]
    }

    /// Distance between the foot and the given point.
    pub fn error_to(&self, target: &Point2<f64>) -> f64 {
        nalgebra::distance(self.foot(), target)
    }
}

impl std::fmt::Display for KinematicChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Base: ({:.2}, {:.2}) Knee: ({:.2}, {:.2}) Foot: ({:.2}, {:.2})",
            self.base().x,
            self.base().y,
            self.knee().x,
            self.knee().y,
            self.foot().x,
            self.foot().y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain() {
        let chain = KinematicChain::new(Point2::new(3.0, 0.0), Point2::new(3.0, 4.0));

        assert_eq!(chain.base(), &Point2::origin());
        assert_eq!(chain.links()[1], (Point2::new(3.0, 0.0), Point2::new(3.0, 4.0)));
        assert_eq!(chain.error_to(&Point2::origin()), 5.0);
    }
}
