// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use nalgebra::Point2;

use crate::algorithm::{ForwardKinematics, InverseKinematics};
use crate::calibration::JointCalibration;
use crate::encoder::Encoder;
use crate::{Config, ConfigError, JointAngles, KinematicChain, LinkLengths, UnreachableTargetError};

/// Outcome of solving a single target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    /// Requested foot position.
    pub target: Point2<f64>,
    /// Solver joint angles.
    pub angles: JointAngles,
    /// Hip and knee actuator angles in degrees after calibration.
    pub offsets: (f64, f64),
    /// Hip and knee encoder positions.
    pub positions: (f64, f64),
    /// Chain reconstructed from the solver angles.
    pub chain: KinematicChain,
}

impl Solution {
    /// Distance between the reconstructed foot and the target.
    pub fn error(&self) -> f64 {
        self.chain.error_to(&self.target)
    }
}

/// Leg solver with actuator calibration.
#[derive(Clone, Copy, Debug)]
pub struct Solver {
    links: LinkLengths,
    ik: InverseKinematics,
    fk: ForwardKinematics,
    encoder: Encoder,
    hip: JointCalibration,
    knee: JointCalibration,
}

impl Solver {
    /// Construct a new solver.
    pub fn new(
        links: LinkLengths,
        encoder: Encoder,
        hip: JointCalibration,
        knee: JointCalibration,
    ) -> Self {
        Self {
            links,
            ik: InverseKinematics::new(links),
            fk: ForwardKinematics::new(links),
            encoder,
            hip,
            knee,
        }
    }

    /// Construct the solver from configuration.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.links()?,
            config.encoder()?,
            config.hip,
            config.knee,
        ))
    }

    /// Leg geometry.
    #[inline]
    pub fn links(&self) -> &LinkLengths {
        &self.links
    }

    /// Solve the target, calibrate the angles for the actuators and verify
    /// the result with forward kinematics.
    pub fn solve(&self, target: &Point2<f64>) -> Result<Solution, UnreachableTargetError> {
        let angles = self.ik.solve(target)?;

        let offsets = (self.hip.apply(angles.hip()), self.knee.apply(angles.knee()));
        let positions = (
            self.encoder.position(offsets.0),
            self.encoder.position(offsets.1),
        );

        let chain = self.fk.solve(&angles);
        log::trace!("{}", chain);

        Ok(Solution {
            target: *target,
            angles,
            offsets,
            positions,
            chain,
        })
    }

    /// Forward kinematics for the given solver angles.
    #[inline]
    pub fn forward(&self, angles: &JointAngles) -> KinematicChain {
        self.fk.solve(angles)
    }

    /// Encoder position for an actuator angle in degrees.
    #[inline]
    pub fn position(&self, angle: f64) -> f64 {
        self.encoder.position(angle)
    }
}

impl Default for Solver {
    fn default() -> Self {
        let config = Config::default();

        Self::new(
            LinkLengths::default(),
            config.encoder,
            config.hip,
            config.knee,
        )
    }
}
