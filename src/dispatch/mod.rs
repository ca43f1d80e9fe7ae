//! Goal dispatching for Roamer
//!
//! Each dispatch cycle takes one target pose through the full action
//! lifecycle:
//! - discover the server, bounded by the discovery timeout
//! - submit the goal and wait for the accept/reject decision
//! - wait for the terminal status and map it to a [`GoalOutcome`]
//!
//! Cycles are independent. A new cycle never waits for an older goal, and an
//! older goal keeps its own continuation, so its result is still reported
//! after a newer goal has taken over the [`HandleSlot`].

mod goal;
pub mod schedule;
mod slot;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::time::Duration;

use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::error::{ClientError, DispatchError};
use crate::ros_interface::{NavigationClient, goal_status};
use crate::target::{Pose, TargetGenerator};

pub use goal::{Acceptance, GoalHandle, GoalId, GoalRequest, GoalResult, Stamp};
pub use schedule::{RunSummary, StopReason, run};
pub use slot::HandleSlot;

/// Default time between cycle starts (s)
pub const DEFAULT_PERIOD_SECS: f64 = 35.0;
/// Default bound on server discovery (s)
pub const DEFAULT_DISCOVERY_TIMEOUT_SECS: f64 = 10.0;

/// What to do when the server rejects a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionPolicy {
    /// Emit [`DispatchEvent::ShutdownRequested`]; the scheduler then stops
    Shutdown,
    /// Report the rejection and keep the schedule running
    Continue,
}

/// Outcome assigned to any status code not listed in [`StatusCodes`]
pub const UNRECOGNIZED_STATUS_OUTCOME: GoalOutcome = GoalOutcome::Succeeded;

/// The status codes that count as failures. Everything else is success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusCodes {
    /// Code reported for an aborted goal
    pub aborted: i8,
    /// Code reported for a goal canceled or rejected at execution
    pub canceled: i8,
}

/// ROS 2 `action_msgs/GoalStatus` numbering. ROS 1 actionlib servers report
/// aborted as 4 and rejected as 5; set `dispatch.status_codes` to
/// `{ aborted: 4, canceled: 5 }` to match them.
impl Default for StatusCodes {
    fn default() -> Self {
        StatusCodes {
            aborted: goal_status::ABORTED,
            canceled: goal_status::CANCELED,
        }
    }
}

impl StatusCodes {
    /// Map a terminal status code to its outcome
    pub fn outcome(&self, status_code: i8) -> GoalOutcome {
        let table = [
            (self.aborted, GoalOutcome::Aborted),
            (self.canceled, GoalOutcome::Canceled),
        ];
        table
            .iter()
            .find(|(code, _)| *code == status_code)
            .map_or(UNRECOGNIZED_STATUS_OUTCOME, |(_, outcome)| *outcome)
    }
}

/// Dispatcher settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Time between cycle starts, measured from the first cycle (s)
    pub period_secs: f64,
    /// How long a cycle waits for the action server (s)
    pub discovery_timeout_secs: f64,
    /// Frame the goal pose is expressed in
    pub frame_id: String,
    /// Reaction to a rejected goal
    pub on_rejection: RejectionPolicy,
    /// Terminal status decision table
    pub status_codes: StatusCodes,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        DispatchConfig {
            period_secs: DEFAULT_PERIOD_SECS,
            discovery_timeout_secs: DEFAULT_DISCOVERY_TIMEOUT_SECS,
            frame_id: "map".to_string(),
            on_rejection: RejectionPolicy::Shutdown,
            status_codes: StatusCodes::default(),
        }
    }
}

impl DispatchConfig {
    /// Cycle period
    pub fn period(&self) -> Duration {
        seconds(self.period_secs).unwrap_or_else(|| {
            warn!(
                "dispatch.period_secs {} is not a usable duration, using {} s",
                self.period_secs, DEFAULT_PERIOD_SECS
            );
            Duration::from_secs_f64(DEFAULT_PERIOD_SECS)
        })
    }

    /// Discovery timeout
    pub fn discovery_timeout(&self) -> Duration {
        seconds(self.discovery_timeout_secs).unwrap_or_else(|| {
            warn!(
                "dispatch.discovery_timeout_secs {} is not a usable duration, using {} s",
                self.discovery_timeout_secs, DEFAULT_DISCOVERY_TIMEOUT_SECS
            );
            Duration::from_secs_f64(DEFAULT_DISCOVERY_TIMEOUT_SECS)
        })
    }
}

/// Positive, representable duration of `secs` seconds
pub fn seconds(secs: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(secs)
        .ok()
        .filter(|duration| !duration.is_zero())
}

/// Result of one goal's lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalOutcome {
    /// Accepted, terminal status not yet known
    AcceptedPending,
    /// Declined by the server
    Rejected,
    /// Finished successfully, or with a status code outside the table
    Succeeded,
    /// Aborted during execution
    Aborted,
    /// Canceled or rejected at execution time
    Canceled,
    /// The terminal status could not be retrieved
    UnknownStatus,
}

impl GoalOutcome {
    /// Whether the goal's lifecycle is over
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GoalOutcome::AcceptedPending)
    }

    /// The error this outcome is reported as, if it is a failure
    pub fn error(&self) -> Option<DispatchError> {
        match self {
            GoalOutcome::Rejected => Some(DispatchError::GoalRejected),
            GoalOutcome::Aborted => Some(DispatchError::GoalAborted),
            GoalOutcome::Canceled => Some(DispatchError::GoalCanceled),
            _ => None,
        }
    }
}

impl fmt::Display for GoalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            GoalOutcome::AcceptedPending => "accepted, pending",
            GoalOutcome::Rejected => "rejected",
            GoalOutcome::Succeeded => "succeeded",
            GoalOutcome::Aborted => "aborted",
            GoalOutcome::Canceled => "canceled",
            GoalOutcome::UnknownStatus => "unknown status",
        };
        f.write_str(s)
    }
}

/// Where a cycle is in the goal lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    /// Not started
    Idle,
    /// Waiting for the action server
    Discovering,
    /// Goal being sent
    Submitting,
    /// Waiting for the accept/reject decision
    PendingAcceptance,
    /// Accepted, waiting for the terminal status
    PendingResult,
    /// Lifecycle over with a goal outcome
    Done(GoalOutcome),
    /// Ended without an outcome (discovery timeout or client failure)
    Failed,
}

impl CyclePhase {
    /// Legal transitions of the per-cycle state machine
    pub fn can_advance_to(&self, next: CyclePhase) -> bool {
        use CyclePhase::*;
        match (self, next) {
            (Idle, Discovering) => true,
            (Discovering, Submitting | Failed) => true,
            (Submitting, PendingAcceptance | Failed) => true,
            (PendingAcceptance, Done(GoalOutcome::Rejected) | PendingResult | Failed) => true,
            (PendingResult, Done(outcome)) => {
                outcome.is_terminal() && outcome != GoalOutcome::Rejected
            }
            _ => false,
        }
    }

    /// Goal outcome represented by this phase, if any
    pub fn outcome(&self) -> Option<GoalOutcome> {
        match self {
            CyclePhase::PendingResult => Some(GoalOutcome::AcceptedPending),
            CyclePhase::Done(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

/// Everything one cycle did
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// Cycle number, starting at 1
    pub cycle: u64,
    /// Target that was sent (or would have been)
    pub pose: Pose,
    /// Handle of the goal, if it was accepted
    pub handle: Option<GoalHandle>,
    /// Phases visited, in order, starting at `Idle`
    pub phases: Vec<CyclePhase>,
    /// How the cycle ended
    pub outcome: Result<GoalOutcome, DispatchError>,
}

/// Notifications from the dispatcher to the process composition layer
#[derive(Debug, Clone)]
pub enum DispatchEvent {
    /// A cycle reached the end of its lifecycle
    CycleFinished(CycleReport),
    /// A goal was rejected under [`RejectionPolicy::Shutdown`]. Sent at most once.
    ShutdownRequested {
        /// Cycle whose goal was rejected
        cycle: u64,
    },
}

struct PhaseTrail {
    cycle: u64,
    phases: Vec<CyclePhase>,
}

impl PhaseTrail {
    fn new(cycle: u64) -> Self {
        PhaseTrail {
            cycle,
            phases: vec![CyclePhase::Idle],
        }
    }

    fn current(&self) -> CyclePhase {
        self.phases.last().copied().unwrap_or(CyclePhase::Idle)
    }

    fn advance(&mut self, next: CyclePhase) {
        let current = self.current();
        debug_assert!(
            current.can_advance_to(next),
            "illegal transition {current:?} -> {next:?}"
        );
        debug!("[cycle {}] {:?} -> {:?}", self.cycle, current, next);
        self.phases.push(next);
    }
}

/// Drives goal cycles against a navigation client
///
/// All state lives on one thread: cycles run as local tasks on the same event
/// loop, so the handle slot and counters need no locking.
pub struct Dispatcher<C, G> {
    client: C,
    generator: RefCell<G>,
    config: DispatchConfig,
    slot: HandleSlot,
    events: UnboundedSender<DispatchEvent>,
    cycles: Cell<u64>,
    shutdown_sent: Cell<bool>,
}

impl<C, G> Dispatcher<C, G>
where
    C: NavigationClient,
    G: TargetGenerator,
{
    /// Create a dispatcher and the receiving end of its event channel
    pub fn new(
        client: C,
        generator: G,
        config: DispatchConfig,
    ) -> (Self, UnboundedReceiver<DispatchEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher {
            client,
            generator: RefCell::new(generator),
            config,
            slot: HandleSlot::new(),
            events,
            cycles: Cell::new(0),
            shutdown_sent: Cell::new(false),
        };
        (dispatcher, receiver)
    }

    /// Dispatcher settings
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// The navigation client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Most recently accepted goal that has not resolved yet
    pub fn tracked(&self) -> Option<GoalHandle> {
        self.slot.current()
    }

    /// Number of cycles started so far
    pub fn cycles_started(&self) -> u64 {
        self.cycles.get()
    }

    /// Run one full goal lifecycle for a freshly generated target
    pub async fn dispatch_cycle(&self) -> Result<GoalOutcome, DispatchError> {
        let cycle = self.cycles.get() + 1;
        self.cycles.set(cycle);

        let pose = self.generator.borrow_mut().generate();
        let request = GoalRequest::new(pose, self.config.frame_id.as_str());
        info!(
            "[cycle {}] Sending goal: x={}, y={}, theta={}",
            cycle, pose.x, pose.y, pose.theta
        );

        let mut trail = PhaseTrail::new(cycle);
        let mut handle = None;
        let outcome = self.run_goal(request, &mut trail, &mut handle).await;
        if outcome.is_err() {
            trail.advance(CyclePhase::Failed);
        }

        let report = CycleReport {
            cycle,
            pose,
            handle,
            phases: trail.phases,
            outcome: outcome.clone(),
        };
        if self.events.send(DispatchEvent::CycleFinished(report)).is_err() {
            debug!("[cycle {}] No listener for cycle report", cycle);
        }
        if outcome == Ok(GoalOutcome::Rejected) {
            self.on_rejected(cycle);
        }
        outcome
    }

    async fn run_goal(
        &self,
        request: GoalRequest,
        trail: &mut PhaseTrail,
        handle_out: &mut Option<GoalHandle>,
    ) -> Result<GoalOutcome, DispatchError> {
        let cycle = trail.cycle;

        trail.advance(CyclePhase::Discovering);
        self.discover(cycle).await?;

        trail.advance(CyclePhase::Submitting);
        let acceptance = self.client.submit(request);
        trail.advance(CyclePhase::PendingAcceptance);
        let acceptance = acceptance.await?;

        let handle = match acceptance {
            Acceptance {
                accepted: true,
                handle: Some(handle),
            } => handle,
            Acceptance { accepted: true, .. } => {
                return Err(ClientError::Transport(
                    "server accepted goal without a handle".to_string(),
                )
                .into());
            }
            Acceptance { accepted: false, .. } => {
                trail.advance(CyclePhase::Done(GoalOutcome::Rejected));
                info!("[cycle {}] Goal rejected.", cycle);
                return Ok(GoalOutcome::Rejected);
            }
        };

        *handle_out = Some(handle);
        self.slot.track(handle);
        info!("[cycle {}] Goal {} accepted.", cycle, handle.id());

        trail.advance(CyclePhase::PendingResult);
        let outcome = match self.client.request_result(handle).await {
            Ok(result) => {
                debug!(
                    "[cycle {}] Goal {} finished with status {}",
                    cycle,
                    handle.id(),
                    result.status_code
                );
                self.config.status_codes.outcome(result.status_code)
            }
            Err(e) => {
                warn!(
                    "[cycle {}] Could not get result for goal {}: {}",
                    cycle,
                    handle.id(),
                    e
                );
                GoalOutcome::UnknownStatus
            }
        };
        self.slot.release(handle);
        trail.advance(CyclePhase::Done(outcome));

        match outcome.error() {
            Some(e) => info!("[cycle {}] Goal {}: {}.", cycle, handle.id(), e),
            None if outcome == GoalOutcome::Succeeded => {
                info!("[cycle {}] Goal {} succeeded!", cycle, handle.id())
            }
            None => warn!("[cycle {}] Goal {} ended with {}", cycle, handle.id(), outcome),
        }
        Ok(outcome)
    }

    async fn discover(&self, cycle: u64) -> Result<(), DispatchError> {
        let timeout = self.config.discovery_timeout();
        match tokio::time::timeout(timeout, self.client.wait_for_server()).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                error!("[cycle {}] Action server discovery failed: {}", cycle, e);
                Err(e.into())
            }
            Err(_) => {
                let err = DispatchError::ServerUnavailable { timeout };
                error!("[cycle {}] {}", cycle, err);
                Err(err)
            }
        }
    }

    fn on_rejected(&self, cycle: u64) {
        match self.config.on_rejection {
            RejectionPolicy::Shutdown => {
                if self.shutdown_sent.replace(true) {
                    return;
                }
                info!("[cycle {}] Requesting shutdown after rejected goal", cycle);
                if self
                    .events
                    .send(DispatchEvent::ShutdownRequested { cycle })
                    .is_err()
                {
                    warn!("[cycle {}] No listener for shutdown request", cycle);
                }
            }
            RejectionPolicy::Continue => {
                debug!("[cycle {}] Rejection policy is continue", cycle);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ros_interface::MockNavigationClient;
    use rstest::rstest;

    fn fixed_pose() -> Pose {
        Pose::new(1.0, -2.0, 0.5)
    }

    fn accepting_client(status_code: i8) -> MockNavigationClient {
        let mut client = MockNavigationClient::new();
        client.expect_wait_for_server().returning(|| Ok(()));
        client
            .expect_submit()
            .times(1)
            .returning(|_| Ok(Acceptance::accepted(GoalHandle::new(GoalId(1)))));
        client
            .expect_request_result()
            .times(1)
            .returning(move |_| Ok(GoalResult { status_code }));
        client
    }

    fn drain(rx: &mut UnboundedReceiver<DispatchEvent>) -> Vec<DispatchEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[rstest]
    #[case(goal_status::ABORTED, GoalOutcome::Aborted)]
    #[case(goal_status::CANCELED, GoalOutcome::Canceled)]
    #[case(goal_status::SUCCEEDED, GoalOutcome::Succeeded)]
    #[case(goal_status::UNKNOWN, GoalOutcome::Succeeded)]
    #[case(42, GoalOutcome::Succeeded)]
    #[case(-1, GoalOutcome::Succeeded)]
    fn status_table_defaults_to_success(#[case] code: i8, #[case] expected: GoalOutcome) {
        assert_eq!(StatusCodes::default().outcome(code), expected);
    }

    #[test]
    fn status_table_is_configurable() {
        // actionlib numbering: 4 aborted, 5 rejected
        let codes = StatusCodes {
            aborted: 4,
            canceled: 5,
        };
        assert_eq!(codes.outcome(4), GoalOutcome::Aborted);
        assert_eq!(codes.outcome(5), GoalOutcome::Canceled);
        assert_eq!(codes.outcome(6), GoalOutcome::Succeeded);
    }

    #[rstest]
    #[case(goal_status::ABORTED, GoalOutcome::Aborted)]
    #[case(goal_status::CANCELED, GoalOutcome::Canceled)]
    #[case(goal_status::SUCCEEDED, GoalOutcome::Succeeded)]
    #[case(99, GoalOutcome::Succeeded)]
    #[tokio::test]
    async fn accepted_goal_maps_terminal_status(#[case] code: i8, #[case] expected: GoalOutcome) {
        let (dispatcher, mut rx) =
            Dispatcher::new(accepting_client(code), fixed_pose, DispatchConfig::default());

        let outcome = dispatcher.dispatch_cycle().await.unwrap();
        assert_eq!(outcome, expected);
        assert_eq!(dispatcher.tracked(), None);

        let events = drain(&mut rx);
        assert_eq!(events.len(), 1);
        match &events[0] {
            DispatchEvent::CycleFinished(report) => {
                assert_eq!(report.cycle, 1);
                assert_eq!(report.pose, fixed_pose());
                assert_eq!(report.handle, Some(GoalHandle::new(GoalId(1))));
                assert_eq!(
                    report.phases,
                    vec![
                        CyclePhase::Idle,
                        CyclePhase::Discovering,
                        CyclePhase::Submitting,
                        CyclePhase::PendingAcceptance,
                        CyclePhase::PendingResult,
                        CyclePhase::Done(expected),
                    ]
                );
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejected_goal_requests_shutdown_once() {
        let mut client = MockNavigationClient::new();
        client.expect_wait_for_server().returning(|| Ok(()));
        client
            .expect_submit()
            .times(2)
            .returning(|_| Ok(Acceptance::rejected()));
        client.expect_request_result().never();

        let (dispatcher, mut rx) = Dispatcher::new(client, fixed_pose, DispatchConfig::default());
        assert_eq!(dispatcher.dispatch_cycle().await.unwrap(), GoalOutcome::Rejected);
        assert_eq!(dispatcher.dispatch_cycle().await.unwrap(), GoalOutcome::Rejected);

        let shutdowns: Vec<u64> = drain(&mut rx)
            .into_iter()
            .filter_map(|event| match event {
                DispatchEvent::ShutdownRequested { cycle } => Some(cycle),
                DispatchEvent::CycleFinished(_) => None,
            })
            .collect();
        assert_eq!(shutdowns, vec![1]);
        assert_eq!(dispatcher.tracked(), None);
    }

    #[tokio::test]
    async fn rejection_can_be_scoped_to_the_cycle() {
        let mut client = MockNavigationClient::new();
        client.expect_wait_for_server().returning(|| Ok(()));
        client
            .expect_submit()
            .returning(|_| Ok(Acceptance::rejected()));

        let config = DispatchConfig {
            on_rejection: RejectionPolicy::Continue,
            ..DispatchConfig::default()
        };
        let (dispatcher, mut rx) = Dispatcher::new(client, fixed_pose, config);
        assert_eq!(dispatcher.dispatch_cycle().await.unwrap(), GoalOutcome::Rejected);
        assert!(
            drain(&mut rx)
                .iter()
                .all(|event| matches!(event, DispatchEvent::CycleFinished(_)))
        );
    }

    #[tokio::test]
    async fn discovery_failure_skips_submission() {
        let mut client = MockNavigationClient::new();
        client
            .expect_wait_for_server()
            .returning(|| Err(ClientError::Transport("no graph".into())));
        client.expect_submit().never();

        let (dispatcher, _rx) = Dispatcher::new(client, fixed_pose, DispatchConfig::default());
        let err = dispatcher.dispatch_cycle().await.unwrap_err();
        assert_eq!(
            err,
            DispatchError::Client(ClientError::Transport("no graph".into()))
        );
    }

    #[tokio::test]
    async fn result_failure_is_unknown_status() {
        let mut client = MockNavigationClient::new();
        client.expect_wait_for_server().returning(|| Ok(()));
        client
            .expect_submit()
            .returning(|_| Ok(Acceptance::accepted(GoalHandle::new(GoalId(3)))));
        client
            .expect_request_result()
            .returning(|handle| Err(ClientError::UnknownGoal(handle.id())));

        let (dispatcher, _rx) = Dispatcher::new(client, fixed_pose, DispatchConfig::default());
        assert_eq!(
            dispatcher.dispatch_cycle().await.unwrap(),
            GoalOutcome::UnknownStatus
        );
        assert_eq!(dispatcher.tracked(), None);
    }

    #[tokio::test]
    async fn acceptance_without_handle_fails_cycle() {
        let mut client = MockNavigationClient::new();
        client.expect_wait_for_server().returning(|| Ok(()));
        client.expect_submit().returning(|_| {
            Ok(Acceptance {
                accepted: true,
                handle: None,
            })
        });
        client.expect_request_result().never();

        let (dispatcher, mut rx) = Dispatcher::new(client, fixed_pose, DispatchConfig::default());
        assert!(dispatcher.dispatch_cycle().await.is_err());
        match drain(&mut rx).pop() {
            Some(DispatchEvent::CycleFinished(report)) => {
                assert_eq!(report.phases.last(), Some(&CyclePhase::Failed));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn phase_transitions_follow_lifecycle() {
        use CyclePhase::*;
        assert!(Idle.can_advance_to(Discovering));
        assert!(!Idle.can_advance_to(Submitting));
        assert!(Discovering.can_advance_to(Failed));
        assert!(PendingAcceptance.can_advance_to(Done(GoalOutcome::Rejected)));
        assert!(!PendingResult.can_advance_to(Done(GoalOutcome::Rejected)));
        assert!(!PendingResult.can_advance_to(Done(GoalOutcome::AcceptedPending)));
        assert!(PendingResult.can_advance_to(Done(GoalOutcome::Aborted)));
        assert!(!Done(GoalOutcome::Succeeded).can_advance_to(Idle));
        assert_eq!(PendingResult.outcome(), Some(GoalOutcome::AcceptedPending));
    }

    #[test]
    fn durations_fall_back_on_invalid_values() {
        let config = DispatchConfig {
            period_secs: 0.0,
            discovery_timeout_secs: f64::NAN,
            ..DispatchConfig::default()
        };
        assert_eq!(config.period(), Duration::from_secs(35));
        assert_eq!(config.discovery_timeout(), Duration::from_secs(10));

        let config = DispatchConfig {
            period_secs: 1.0e20,
            discovery_timeout_secs: 1.0e20,
            ..DispatchConfig::default()
        };
        assert_eq!(config.period(), Duration::from_secs(35));
        assert_eq!(config.discovery_timeout(), Duration::from_secs(10));
    }

    #[rstest]
    #[case(35.0, Some(Duration::from_secs(35)))]
    #[case(0.25, Some(Duration::from_millis(250)))]
    #[case(0.0, None)]
    #[case(-1.0, None)]
    #[case(f64::INFINITY, None)]
    #[case(f64::NAN, None)]
    #[case(1.0e20, None)]
    fn seconds_accepts_only_representable_durations(
        #[case] secs: f64,
        #[case] expected: Option<Duration>,
    ) {
        assert_eq!(seconds(secs), expected);
    }
}
