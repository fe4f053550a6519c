// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! Angle to encoder position mapping.
//!
//! An encoder position is a linear rescale of one revolution onto the
//! encoder resolution. The raw mapping does not touch the range; wrapping
//! or clamping must be requested through a [`RangePolicy`].

use serde_derive::Deserialize;

use crate::consts::ENCODER_RESOLUTION;

/// Convert an angle in degrees to a raw 12-bit encoder position.
///
/// Angles outside `[0, 360)` produce positions outside `[0, 4096)`.
#[inline]
pub fn angle_to_position(angle: f64) -> f64 {
    (angle / 360.0) * ENCODER_RESOLUTION
}

/// Treatment of positions outside one revolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Leave the position as is.
    #[default]
    Raw,
    /// Wrap the position into `[0, resolution)`.
    Wrap,
    /// Clamp the position into `[0, resolution]`.
    Clamp,
}

impl std::fmt::Display for RangePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangePolicy::Raw => write!(f, "raw"),
            RangePolicy::Wrap => write!(f, "wrap"),
            RangePolicy::Clamp => write!(f, "clamp"),
        }
    }
}

/// Rotary encoder of a position controlled actuator.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Encoder {
    /// Ticks per revolution.
    #[serde(default = "Encoder::default_resolution")]
    pub resolution: f64,
    /// Out of range treatment.
    #[serde(default)]
    pub policy: RangePolicy,
}

impl Encoder {
    fn default_resolution() -> f64 {
        ENCODER_RESOLUTION
    }

    /// Construct a new encoder.
    ///
    /// Returns `None` if the resolution is not a positive finite number.
    pub fn new(resolution: f64, policy: RangePolicy) -> Option<Self> {
        let encoder = Self { resolution, policy };

        if encoder.is_valid() {
            Some(encoder)
        } else {
            None
        }
    }

    /// Test if the resolution is a positive finite number.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.resolution.is_finite() && self.resolution > 0.0
    }

    /// Convert an angle in degrees to an encoder position.
    pub fn position(&self, angle: f64) -> f64 {
        let position = (angle / 360.0) * self.resolution;

        if !(0.0..self.resolution).contains(&position) {
            log::warn!(
                "Encoder position {:.2} outside revolution [0, {}), policy: {}",
                position,
                self.resolution,
                self.policy
            );
        }

        match self.policy {
            RangePolicy::Raw => position,
            RangePolicy::Wrap => {
                let wrapped = position.rem_euclid(self.resolution);
                // Tiny negative positions round up to a full revolution.
                if wrapped >= self.resolution {
                    0.0
                } else {
                    wrapped
                }
            }
            RangePolicy::Clamp => position.clamp(0.0, self.resolution),
        }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self {
            resolution: ENCODER_RESOLUTION,
            policy: RangePolicy::Raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_to_position() {
        assert_eq!(angle_to_position(0.0), 0.0);
        assert_eq!(angle_to_position(180.0), 2048.0);
        assert_eq!(angle_to_position(360.0), 4096.0);
        assert_eq!(angle_to_position(90.0), 1024.0);
    }

    #[test]
    fn test_angle_to_position_monotonic() {
        let mut last = angle_to_position(-720.0);
        for step in -719..=720 {
            let position = angle_to_position(step as f64);
            assert!(position > last);
            last = position;
        }
    }

    #[test]
    fn test_out_of_range_raw() {
        assert_eq!(angle_to_position(-90.0), -1024.0);
        assert_eq!(Encoder::default().position(450.0), 5120.0);
    }

    #[test]
    fn test_policy_wrap() {
        let encoder = Encoder::new(4096.0, RangePolicy::Wrap).unwrap();

        assert_eq!(encoder.position(-90.0), 3072.0);
        assert_eq!(encoder.position(360.0), 0.0);
        assert_eq!(encoder.position(450.0), 1024.0);
    }

    #[test]
    fn test_policy_wrap_tiny_negative() {
        let encoder = Encoder::new(4096.0, RangePolicy::Wrap).unwrap();

        let position = encoder.position(-1e-17);
        assert!((0.0..4096.0).contains(&position));
        assert_eq!(position, 0.0);
    }

    #[test]
    fn test_new_invalid_resolution() {
        assert!(Encoder::new(0.0, RangePolicy::Wrap).is_none());
        assert!(Encoder::new(-4096.0, RangePolicy::Clamp).is_none());
        assert!(Encoder::new(f64::NAN, RangePolicy::Raw).is_none());
        assert!(Encoder::new(f64::INFINITY, RangePolicy::Raw).is_none());
        assert!(Encoder::default().is_valid());
    }

    #[test]
    fn test_policy_clamp() {
        let encoder = Encoder::new(4096.0, RangePolicy::Clamp).unwrap();

        assert_eq!(encoder.position(-90.0), 0.0);
        assert_eq!(encoder.position(450.0), 4096.0);
        assert_eq!(encoder.position(180.0), 2048.0);
    }
}
