// src/dispatch/goal.rs
// Message-level types exchanged with the navigation action server.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::target::{Orientation, Pose};

/// Wall-clock timestamp in ROS `builtin_interfaces/Time` layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stamp {
    /// Seconds since the Unix epoch
    pub sec: i32,
    /// Nanoseconds within the second
    pub nanosec: u32,
}

impl Stamp {
    /// Current wall-clock time
    pub fn now() -> Self {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| Stamp {
                sec: i32::try_from(d.as_secs()).unwrap_or(i32::MAX),
                nanosec: d.subsec_nanos(),
            })
            .unwrap_or_default()
    }
}

/// One navigation goal: a pose in a named frame, stamped at creation
#[derive(Debug, Clone, PartialEq)]
pub struct GoalRequest {
    /// Target pose
    pub pose: Pose,
    /// Frame of reference (normally `map`)
    pub frame_id: String,
    /// Creation time
    pub stamp: Stamp,
}

impl GoalRequest {
    /// Build a request for `pose` stamped now
    pub fn new(pose: Pose, frame_id: impl Into<String>) -> Self {
        GoalRequest {
            pose,
            frame_id: frame_id.into(),
            stamp: Stamp::now(),
        }
    }

    /// Goal orientation as a quaternion
    pub fn orientation(&self) -> Orientation {
        self.pose.orientation()
    }
}

/// Client-side identifier of an accepted goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GoalId(pub u64);

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reference to exactly one goal the server accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GoalHandle {
    id: GoalId,
}

impl GoalHandle {
    /// Wrap a client-assigned goal id
    pub fn new(id: GoalId) -> Self {
        GoalHandle { id }
    }

    /// The goal this handle refers to
    pub fn id(&self) -> GoalId {
        self.id
    }
}

/// The server's answer to a goal submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acceptance {
    /// Whether the server took the goal
    pub accepted: bool,
    /// Present iff `accepted`
    pub handle: Option<GoalHandle>,
}

impl Acceptance {
    /// Goal accepted under `handle`
    pub fn accepted(handle: GoalHandle) -> Self {
        Acceptance {
            accepted: true,
            handle: Some(handle),
        }
    }

    /// Goal declined
    pub fn rejected() -> Self {
        Acceptance {
            accepted: false,
            handle: None,
        }
    }
}

/// Terminal status reported for a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalResult {
    /// Numeric goal status, `action_msgs/GoalStatus` numbering
    pub status_code: i8,
}
