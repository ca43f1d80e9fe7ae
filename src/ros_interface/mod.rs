//! Navigation action interface for Roamer
//!
//! The dispatcher talks to the navigation server only through
//! [`NavigationClient`], which mirrors the three phases of a ROS 2 action:
//! - discovering the server
//! - submitting a goal and learning whether it was accepted
//! - retrieving the terminal status of an accepted goal
//!
//! With the `ros` feature, [`R2rNavigator`] implements it on top of an r2r
//! action client for `nav2_msgs/action/NavigateToPose`.

#[cfg(feature = "ros")]
mod action_client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::dispatch::{Acceptance, GoalHandle, GoalRequest, GoalResult};
use crate::error::ClientError;

#[cfg(feature = "ros")]
pub use action_client::{R2rNavigator, spin_node};

/// Client side of the navigation action
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NavigationClient: Send + Sync {
    /// Resolve once the action server is reachable. May never resolve;
    /// callers bound it with their own timeout.
    async fn wait_for_server(&self) -> Result<(), ClientError>;

    /// Send a goal and wait for the server's accept/reject decision
    async fn submit(&self, request: GoalRequest) -> Result<Acceptance, ClientError>;

    /// Wait for the terminal status of an accepted goal
    async fn request_result(&self, handle: GoalHandle) -> Result<GoalResult, ClientError>;
}

/// ROS 2 node settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RosConfig {
    /// Node name
    pub node_name: String,
    /// Node namespace
    pub namespace: String,
    /// NavigateToPose action name
    pub action_name: String,
    /// How often the node is spun on the event loop (ms)
    pub spin_interval_ms: u64,
}

impl Default for RosConfig {
    fn default() -> Self {
        RosConfig {
            node_name: "navigate_to_pose_client".to_string(),
            namespace: String::new(),
            action_name: "/navigate_to_pose".to_string(),
            spin_interval_ms: 10,
        }
    }
}

/// Numeric codes of `action_msgs/GoalStatus`
pub mod goal_status {
    /// Status has not been set
    pub const UNKNOWN: i8 = 0;
    /// Accepted, awaiting execution
    pub const ACCEPTED: i8 = 1;
    /// Currently executing
    pub const EXECUTING: i8 = 2;
    /// Cancel requested
    pub const CANCELING: i8 = 3;
    /// Reached the goal
    pub const SUCCEEDED: i8 = 4;
    /// Canceled at execution time
    pub const CANCELED: i8 = 5;
    /// Aborted by the server
    pub const ABORTED: i8 = 6;
}
