//! Error types for Roamer
//!
//! Failures are scoped to a single dispatch cycle. The only one with a
//! process-level effect is a rejected goal, and even that is surfaced as an
//! event rather than an exit (see [`crate::dispatch::DispatchEvent`]).

use std::time::Duration;

use thiserror::Error;

use crate::dispatch::GoalId;

/// Why a dispatch cycle did not end in success
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// The action server did not show up within the discovery timeout
    #[error("action server not available after waiting {} seconds", .timeout.as_secs_f64())]
    ServerUnavailable {
        /// How long discovery waited
        timeout: Duration,
    },
    /// The server declined the goal
    #[error("goal rejected")]
    GoalRejected,
    /// The server accepted the goal but aborted it during execution
    #[error("goal was aborted")]
    GoalAborted,
    /// The goal was canceled or rejected at execution time
    #[error("goal was canceled")]
    GoalCanceled,
    /// The navigation client itself failed
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Failures of a [`crate::ros_interface::NavigationClient`] implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Transport or middleware failure
    #[error("transport error: {0}")]
    Transport(String),
    /// A result was requested for a goal the client does not know about
    #[error("unknown goal {0}")]
    UnknownGoal(GoalId),
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Offending path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid YAML for [`crate::RoamerConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// A value is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}
