// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::Point2;

use crate::geometry::law_of_cosines;
use crate::{JointAngles, LinkLengths, UnreachableTargetError};

/// Closed-form inverse kinematics for the two link leg.
#[derive(Clone, Copy, Debug)]
pub struct InverseKinematics {
    links: LinkLengths,
}

impl InverseKinematics {
    pub fn new(links: LinkLengths) -> Self {
        Self { links }
    }

    /// Solve the hip and knee angles which place the foot on the target.
    ///
    /// The target is relative to the hip joint. Targets on the boundary of the
    /// workspace resolve to a fully extended or fully folded leg.
    pub fn solve(&self, target: &Point2<f64>) -> Result<JointAngles, UnreachableTargetError> {
        let l1 = self.links.l1();
        let l2 = self.links.l2();

        // L is the leg between the hip and the target.
        let l = target.coords.norm();
        log::debug!("IK Vector length L: {:.2}", l);

        if !l.is_finite() || l > self.links.max_reach() || l < self.links.min_reach() {
            return Err(UnreachableTargetError::new(*target, l));
        }

        let knee_internal = law_of_cosines(l1, l2, l);
        log::debug!(
            "IK knee internal:   {:5.2}rad {:5.2}°",
            knee_internal,
            knee_internal.to_degrees()
        );

        let knee = PI - knee_internal;

        // With the foot on the hip the upper leg direction is arbitrary.
        let hip_offset = if l > 0.0 {
            law_of_cosines(l1, l, l2)
        } else {
            FRAC_PI_2
        };
        log::debug!(
            "IK hip offset:      {:5.2}rad {:5.2}°",
            hip_offset,
            hip_offset.to_degrees()
        );

        let hip = target.y.atan2(target.x) - hip_offset;

        Ok(JointAngles::from_radians(hip, knee))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::algorithm::ForwardKinematics;

    fn links() -> LinkLengths {
        LinkLengths::new(156.0, 164.0).unwrap()
    }

    #[test]
    fn test_reference_target() {
        let target = Point2::new(-1.0, -262.0);
        let angles = InverseKinematics::new(links()).solve(&target).unwrap();

        assert!(angles.hip().is_finite());
        assert!(angles.knee().is_finite());

        let chain = ForwardKinematics::new(links()).solve(&angles);
        assert!(chain.error_to(&target) < 1e-6);
    }

    #[test]
    fn test_fully_extended() {
        let angles = InverseKinematics::new(links())
            .solve(&Point2::new(320.0, 0.0))
            .unwrap();

        assert!(angles.hip().abs() < 1e-9);
        assert!(angles.knee().abs() < 1e-9);
    }

    #[test]
    fn test_fully_folded() {
        let angles = InverseKinematics::new(links())
            .solve(&Point2::new(8.0, 0.0))
            .unwrap();

        assert!((angles.knee() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_reach() {
        let ik = InverseKinematics::new(links());

        let err = ik.solve(&Point2::new(320.0 + 1e-9, 0.0)).unwrap_err();
        assert_eq!(err.target, Point2::new(320.0 + 1e-9, 0.0));

        assert!(ik.solve(&Point2::new(7.999, 0.0)).is_err());
        assert!(ik.solve(&Point2::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_non_finite_target() {
        let ik = InverseKinematics::new(links());

        assert!(ik.solve(&Point2::new(f64::NAN, -262.0)).is_err());
        assert!(ik.solve(&Point2::new(0.0, f64::NAN)).is_err());
        assert!(ik.solve(&Point2::new(f64::INFINITY, 0.0)).is_err());

        let err = ik.solve(&Point2::new(f64::NAN, 0.0)).unwrap_err();
        assert!(err.distance.is_nan());
    }

    #[test]
    fn test_origin_with_equal_links() {
        let links = LinkLengths::new(100.0, 100.0).unwrap();
        let angles = InverseKinematics::new(links)
            .solve(&Point2::origin())
            .unwrap();

        assert!((angles.knee() - 180.0).abs() < 1e-9);

        let chain = ForwardKinematics::new(links).solve(&angles);
        assert!(chain.error_to(&Point2::origin()) < 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let ik = InverseKinematics::new(links());
        let target = Point2::new(120.5, -200.25);

        let a = ik.solve(&target).unwrap();
        let b = ik.solve(&target).unwrap();

        assert_eq!(a.hip().to_bits(), b.hip().to_bits());
        assert_eq!(a.knee().to_bits(), b.knee().to_bits());
    }
}
