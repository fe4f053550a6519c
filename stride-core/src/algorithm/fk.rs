// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use nalgebra::{Point2, Vector2};

use crate::{JointAngles, KinematicChain, LinkLengths};

#[derive(Clone, Copy, Debug)]
pub struct ForwardKinematics {
    links: LinkLengths,
}

impl ForwardKinematics {
    pub fn new(links: LinkLengths) -> Self {
        Self { links }
    }

    /// Calculate the joint positions for the given angles.
    ///
    /// The knee angle adds to the hip angle for the lower leg orientation.
    pub fn solve(&self, angles: &JointAngles) -> KinematicChain {
        let theta_1 = angles.hip_rad();
        let theta_2 = angles.knee_rad();

        let knee = Point2::new(
            self.links.l1() * theta_1.cos(),
            self.links.l1() * theta_1.sin(),
        );

        let foot = knee
            + Vector2::new(
                self.links.l2() * (theta_1 + theta_2).cos(),
                self.links.l2() * (theta_1 + theta_2).sin(),
            );

        KinematicChain::new(knee, foot)
    }
}
