// src/ros_interface/action_client.rs
// NavigationClient over an r2r NavigateToPose action client.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use r2r::builtin_interfaces::msg::Time;
use r2r::geometry_msgs::msg::{Point, Pose, PoseStamped, Quaternion};
use r2r::nav2_msgs::action::NavigateToPose;
use r2r::std_msgs::msg::Header;
use r2r::{ActionClient, GoalStatus, Node};

use super::{NavigationClient, RosConfig, goal_status};
use crate::dispatch::{Acceptance, GoalHandle, GoalId, GoalRequest, GoalResult};
use crate::error::ClientError;

type ResultFuture = Pin<Box<dyn Future<Output = Result<GoalResult, ClientError>> + Send>>;

/// Nav2 `NavigateToPose` client
///
/// r2r hands back the result future together with the acceptance, so each
/// accepted goal's result future is parked under a locally allocated
/// [`GoalId`] until [`NavigationClient::request_result`] claims it.
pub struct R2rNavigator {
    client: ActionClient<NavigateToPose::Action>,
    pending: Mutex<HashMap<GoalId, ResultFuture>>,
    next_id: AtomicU64,
}

impl R2rNavigator {
    /// Create the action client on `node`
    pub fn new(node: &mut Node, config: &RosConfig) -> Result<Self, ClientError> {
        let client = node
            .create_action_client::<NavigateToPose::Action>(&config.action_name)
            .map_err(transport)?;
        info!("Created action client for {}", config.action_name);

        Ok(R2rNavigator {
            client,
            pending: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        })
    }

    fn park(&self, id: GoalId, result: ResultFuture) -> Result<(), ClientError> {
        self.pending.lock().map_err(poisoned)?.insert(id, result);
        Ok(())
    }
}

#[async_trait]
impl NavigationClient for R2rNavigator {
    async fn wait_for_server(&self) -> Result<(), ClientError> {
        let available = Node::is_available(&self.client).map_err(transport)?;
        available.await.map_err(transport)
    }

    async fn submit(&self, request: GoalRequest) -> Result<Acceptance, ClientError> {
        let goal = NavigateToPose::Goal {
            pose: pose_stamped(&request),
            ..Default::default()
        };
        let sent = self.client.send_goal_request(goal).map_err(transport)?;

        match sent.await {
            // Feedback is never inspected; the stream is dropped here.
            Ok((_goal, result, _feedback)) => {
                let id = GoalId(self.next_id.fetch_add(1, Ordering::Relaxed));
                self.park(
                    id,
                    Box::pin(async move {
                        let (status, _) = result.await.map_err(transport)?;
                        Ok(GoalResult {
                            status_code: status_code(status),
                        })
                    }),
                )?;
                debug!("Goal {} accepted by server", id);
                Ok(Acceptance::accepted(GoalHandle::new(id)))
            }
            Err(r2r::Error::GoalRejected) => Ok(Acceptance::rejected()),
            Err(e) => Err(transport(e)),
        }
    }

    async fn request_result(&self, handle: GoalHandle) -> Result<GoalResult, ClientError> {
        let result = self.pending.lock().map_err(poisoned)?.remove(&handle.id());
        match result {
            Some(result) => result.await,
            None => Err(ClientError::UnknownGoal(handle.id())),
        }
    }
}

/// Spin `node` on the current event loop forever
pub async fn spin_node(mut node: Node, interval: Duration) {
    loop {
        node.spin_once(Duration::ZERO);
        tokio::time::sleep(interval).await;
    }
}

fn pose_stamped(request: &GoalRequest) -> PoseStamped {
    let q = request.orientation();
    PoseStamped {
        header: Header {
            stamp: Time {
                sec: request.stamp.sec,
                nanosec: request.stamp.nanosec,
            },
            frame_id: request.frame_id.clone(),
        },
        pose: Pose {
            position: Point {
                x: request.pose.x,
                y: request.pose.y,
                z: 0.0,
            },
            orientation: Quaternion {
                x: q.x,
                y: q.y,
                z: q.z,
                w: q.w,
            },
        },
    }
}

fn status_code(status: GoalStatus) -> i8 {
    match status {
        GoalStatus::Unknown => goal_status::UNKNOWN,
        GoalStatus::Accepted => goal_status::ACCEPTED,
        GoalStatus::Executing => goal_status::EXECUTING,
        GoalStatus::Canceling => goal_status::CANCELING,
        GoalStatus::Succeeded => goal_status::SUCCEEDED,
        GoalStatus::Canceled => goal_status::CANCELED,
        GoalStatus::Aborted => goal_status::ABORTED,
    }
}

fn transport(e: r2r::Error) -> ClientError {
    ClientError::Transport(e.to_string())
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> ClientError {
    ClientError::Transport("pending goal table poisoned".to_string())
}
