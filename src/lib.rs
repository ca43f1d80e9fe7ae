//! Roamer - periodic navigation goal client
//!
//! Roamer keeps a mobile robot moving by sending it a fresh target pose on a
//! fixed schedule and following each goal through the navigation action
//! server until it is rejected, aborted, canceled or reached.
//!
//! The crate is split into:
//! - [`cli`]: command-line arguments of the `roamer` binary
//! - [`target`]: target poses and the generators that produce them
//! - [`dispatch`]: the per-goal lifecycle and the periodic scheduler
//! - [`ros_interface`]: the navigation action contract and its ROS 2 client

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod ros_interface;
pub mod target;

use std::path::Path;

// Re-export commonly used items for easier access
pub use dispatch::{
    CyclePhase, CycleReport, DispatchConfig, DispatchEvent, Dispatcher, GoalHandle, GoalOutcome,
    GoalRequest, RejectionPolicy, RunSummary, StatusCodes,
};
pub use error::{ClientError, ConfigError, DispatchError};
pub use ros_interface::{NavigationClient, RosConfig};
pub use target::{Pose, RandomTarget, TargetConfig, TargetGenerator};

/// Main configuration structure for Roamer
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RoamerConfig {
    /// Goal scheduling and lifecycle settings
    pub dispatch: DispatchConfig,
    /// Where targets are drawn from
    pub target: TargetConfig,
    /// ROS 2 node settings
    pub ros: RosConfig,
}

impl RoamerConfig {
    /// Load and validate a YAML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// Parse and validate a YAML configuration string
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: RoamerConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dispatch = &self.dispatch;
        if dispatch::seconds(dispatch.period_secs).is_none() {
            return Err(ConfigError::Invalid(format!(
                "dispatch.period_secs must be a positive duration, got {}",
                dispatch.period_secs
            )));
        }
        if dispatch::seconds(dispatch.discovery_timeout_secs).is_none() {
            return Err(ConfigError::Invalid(format!(
                "dispatch.discovery_timeout_secs must be a positive duration, got {}",
                dispatch.discovery_timeout_secs
            )));
        }
        if dispatch.frame_id.trim().is_empty() {
            return Err(ConfigError::Invalid("dispatch.frame_id is empty".into()));
        }
        if dispatch.status_codes.aborted == dispatch.status_codes.canceled {
            return Err(ConfigError::Invalid(format!(
                "dispatch.status_codes: aborted and canceled share code {}",
                dispatch.status_codes.aborted
            )));
        }

        let target = &self.target;
        let bounds = [target.x_min, target.x_max, target.y_min, target.y_max];
        let widths = [target.x_max - target.x_min, target.y_max - target.y_min];
        if !bounds.iter().chain(&widths).all(|v| v.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "target bounds must be finite with a finite width: x [{}, {}], y [{}, {}]",
                target.x_min, target.x_max, target.y_min, target.y_max
            )));
        }
        if !(target.x_min <= target.x_max && target.y_min <= target.y_max) {
            return Err(ConfigError::Invalid(format!(
                "target bounds are inverted: x [{}, {}], y [{}, {}]",
                target.x_min, target.x_max, target.y_min, target.y_max
            )));
        }

        if self.ros.action_name.is_empty() {
            return Err(ConfigError::Invalid("ros.action_name is empty".into()));
        }
        Ok(())
    }
}
