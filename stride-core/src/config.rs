// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use std::path::Path;

use serde_derive::Deserialize;

use crate::{calibration::JointCalibration, encoder::Encoder, LinkLengths};

pub enum ConfigError {
    /// Configuration file could not be read.
    Io(std::io::Error),
    /// Configuration file is not valid TOML or does not match the schema.
    Parse(toml::de::Error),
    /// Link length is not a positive finite number.
    InvalidLinkLength(f64, f64),
    /// Encoder resolution is not a positive finite number.
    InvalidResolution(f64),
}

impl std::error::Error for ConfigError {}

impl std::fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Io({:?})", e),
            Self::Parse(e) => write!(f, "Parse({:?})", e),
            Self::InvalidLinkLength(l1, l2) => write!(f, "InvalidLinkLength({}, {})", l1, l2),
            Self::InvalidResolution(resolution) => write!(f, "InvalidResolution({})", resolution),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "parse error: {}", e),
            Self::InvalidLinkLength(l1, l2) => {
                write!(f, "invalid link lengths: L1 {} L2 {}", l1, l2)
            }
            Self::InvalidResolution(resolution) => {
                write!(f, "invalid encoder resolution: {}", resolution)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct LinkConfig {
    /// Proximal (upper leg) link length.
    pub l1: f64,
    /// Distal (lower leg) link length.
    pub l2: f64,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            l1: crate::consts::DEFAULT_L1,
            l2: crate::consts::DEFAULT_L2,
        }
    }
}

/// Stride configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Config {
    /// Leg geometry.
    #[serde(default)]
    pub links: LinkConfig,
    /// Actuator encoder.
    #[serde(default)]
    pub encoder: Encoder,
    /// Hip actuator calibration.
    #[serde(default = "Config::default_hip")]
    pub hip: JointCalibration,
    /// Knee actuator calibration.
    #[serde(default = "Config::default_knee")]
    pub knee: JointCalibration,
}

impl Config {
    fn default_hip() -> JointCalibration {
        JointCalibration::new(crate::consts::DEFAULT_HIP_OFFSET, true)
    }

    fn default_knee() -> JointCalibration {
        JointCalibration::new(crate::consts::DEFAULT_KNEE_OFFSET, true)
    }

    /// Validated link lengths.
    pub fn links(&self) -> Result<LinkLengths, ConfigError> {
        LinkLengths::new(self.links.l1, self.links.l2)
            .ok_or(ConfigError::InvalidLinkLength(self.links.l1, self.links.l2))
    }

    /// Validated encoder.
    pub fn encoder(&self) -> Result<Encoder, ConfigError> {
        Encoder::new(self.encoder.resolution, self.encoder.policy)
            .ok_or(ConfigError::InvalidResolution(self.encoder.resolution))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            links: LinkConfig::default(),
            encoder: Encoder::default(),
            hip: Self::default_hip(),
            knee: Self::default_knee(),
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "L1: {:.2}; L2: {:.2}; Encoder: {} ({}); Hip offset: {}; Knee offset: {}",
            self.links.l1,
            self.links.l2,
            self.encoder.resolution,
            self.encoder.policy,
            self.hip.offset,
            self.knee.offset
        )
    }
}

/// Parse a configuration from a TOML string.
pub fn from_str<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    toml::from_str(s).map_err(ConfigError::Parse)
}

/// Read and parse a configuration file.
pub fn from_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    from_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::encoder::RangePolicy;

    #[test]
    fn test_empty_config() {
        let config: Config = from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.hip, JointCalibration::new(90.0, true));
        assert_eq!(config.knee, JointCalibration::new(300.0, true));
        assert_eq!(config.links().unwrap(), LinkLengths::default());
    }

    #[test]
    fn test_full_config() {
        let config: Config = from_str(
            r#"
            [links]
            l1 = 100.0
            l2 = 120.0

            [encoder]
            resolution = 1024.0
            policy = "wrap"

            [hip]
            offset = 45.0

            [knee]
            offset = 180.0
            inverse = true
            "#,
        )
        .unwrap();

        assert_eq!(config.links().unwrap().max_reach(), 220.0);
        assert_eq!(config.encoder, Encoder::new(1024.0, RangePolicy::Wrap).unwrap());
        assert_eq!(config.hip, JointCalibration::new(45.0, false));
        assert_eq!(config.knee, JointCalibration::new(180.0, true));
    }

    #[test]
    fn test_invalid_links() {
        let config: Config = from_str("[links]\nl1 = 0.0\nl2 = 164.0\n").unwrap();

        assert!(matches!(
            config.links(),
            Err(ConfigError::InvalidLinkLength(_, _))
        ));
    }

    #[test]
    fn test_invalid_resolution() {
        let config: Config =
            from_str("[encoder]\nresolution = -4096.0\npolicy = \"clamp\"\n").unwrap();
        assert!(matches!(
            config.encoder(),
            Err(ConfigError::InvalidResolution(resolution)) if resolution == -4096.0
        ));

        let config: Config =
            from_str("[encoder]\nresolution = 0.0\npolicy = \"wrap\"\n").unwrap();
        assert!(matches!(
            config.encoder(),
            Err(ConfigError::InvalidResolution(_))
        ));

        assert_eq!(Config::default().encoder().unwrap(), Encoder::default());
    }

    #[test]
    fn test_invalid_policy() {
        let result: Result<Config, _> = from_str("[encoder]\npolicy = \"modulo\"\n");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result: Result<Config, _> = from_file("/nonexistent/stride.toml");

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
