// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

/// Hip and knee angles of the leg.
///
/// The hip angle is measured from the positive x-axis. The knee angle is
/// relative to the direction of the upper leg. Both are kept in degrees
/// and radians so callers never convert twice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointAngles {
    hip: f64,
    knee: f64,
    hip_rad: f64,
    knee_rad: f64,
}

impl JointAngles {
    /// Construct the joint angles from degrees.
    pub fn from_degrees(hip: f64, knee: f64) -> Self {
        Self {
            hip,
            knee,
            hip_rad: hip.to_radians(),
            knee_rad: knee.to_radians(),
        }
    }

    /// Construct the joint angles from radians.
    pub fn from_radians(hip_rad: f64, knee_rad: f64) -> Self {
        Self {
            hip: hip_rad.to_degrees(),
            knee: knee_rad.to_degrees(),
            hip_rad,
            knee_rad,
        }
    }

    /// Hip angle (theta1) in degrees.
    #[inline]
    pub fn hip(&self) -> f64 {
        self.hip
    }

    /// Knee angle (theta2) in degrees.
    #[inline]
    pub fn knee(&self) -> f64 {
        self.knee
    }

    /// Hip angle in radians.
    #[inline]
    pub fn hip_rad(&self) -> f64 {
        self.hip_rad
    }

    /// Knee angle in radians.
    #[inline]
    pub fn knee_rad(&self) -> f64 {
        self.knee_rad
    }
}

impl std::fmt::Display for JointAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Hip: {:+.3}rad ({:+.2}°) Knee: {:+.3}rad ({:+.2}°)",
            self.hip_rad, self.hip, self.knee_rad, self.knee
        )
    }
}
