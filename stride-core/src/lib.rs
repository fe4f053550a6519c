// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! Closed-form kinematics for a planar leg with a hip and a knee joint.
//!
//! The [`algorithm`] module holds the inverse and forward solvers. The
//! [`encoder`] and [`calibration`] modules map solver angles onto actuator
//! positions. [`Solver`] bundles all of them from a [`Config`].

pub mod algorithm;
pub mod calibration;
pub mod encoder;
pub mod geometry;

mod chain;
mod config;
mod error;
mod joint;
mod link;
mod solver;

pub use self::chain::KinematicChain;
pub use self::config::*;
pub use self::error::UnreachableTargetError;
pub use self::joint::JointAngles;
pub use self::link::LinkLengths;
pub use self::solver::{Solution, Solver};

pub use nalgebra;

/// Stride core constants.
pub mod consts {
    /// Library version.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    /// Proximal link length of the reference leg.
    pub const DEFAULT_L1: f64 = 156.0;
    /// Distal link length of the reference leg.
    pub const DEFAULT_L2: f64 = 164.0;
    /// Encoder ticks per revolution (12 bit).
    pub const ENCODER_RESOLUTION: f64 = 4096.0;
    /// Hip actuator zero reference in degrees.
    pub const DEFAULT_HIP_OFFSET: f64 = 90.0;
    /// Knee actuator zero reference in degrees.
    pub const DEFAULT_KNEE_OFFSET: f64 = 300.0;
}
