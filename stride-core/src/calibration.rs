// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use serde_derive::Deserialize;

/// Maps a solver joint angle onto the zero reference of an actuator.
///
/// Offsets are rig specific and supplied by configuration.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct JointCalibration {
    /// Actuator angle in degrees at solver angle zero.
    pub offset: f64,
    /// Actuator turns against the solver frame.
    #[serde(default)]
    pub inverse: bool,
}

impl JointCalibration {
    pub fn new(offset: f64, inverse: bool) -> Self {
        Self { offset, inverse }
    }

    /// Actuator angle in degrees for the solver angle in degrees.
    pub fn apply(&self, theta: f64) -> f64 {
        if self.inverse {
            -theta + self.offset
        } else {
            theta + self.offset
        }
    }
}

impl Default for JointCalibration {
    fn default() -> Self {
        Self {
            offset: 0.0,
            inverse: false,
        }
    }
}
