//! Periodic trigger for dispatch cycles
//!
//! The first cycle starts immediately, later ones on a fixed grid measured
//! from that start. Each cycle runs as its own local task, so a slow goal
//! never delays the next trigger.

use std::future::Future;
use std::rc::Rc;

use log::{debug, info};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::{self, JoinHandle};
use tokio::time::{self, MissedTickBehavior};

use super::{CycleReport, DispatchEvent, Dispatcher, GoalOutcome};
use crate::error::DispatchError;
use crate::ros_interface::NavigationClient;
use crate::target::TargetGenerator;

/// Why [`run`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopReason {
    /// A rejected goal requested shutdown
    ShutdownRequested,
    /// The external stop signal fired
    #[default]
    Stopped,
}

/// Tally of a scheduler run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Cycles triggered
    pub started: u64,
    /// Cycles that reported back before the run ended
    pub finished: u64,
    /// Goals that succeeded (including unrecognized status codes)
    pub succeeded: u64,
    /// Goals the server rejected
    pub rejected: u64,
    /// Goals aborted during execution
    pub aborted: u64,
    /// Goals canceled at execution time
    pub canceled: u64,
    /// Goals whose result could not be retrieved
    pub unknown: u64,
    /// Cycles that timed out waiting for the server
    pub unavailable: u64,
    /// Cycles that failed in the client
    pub failed: u64,
    /// Why the run ended
    pub stop_reason: StopReason,
}

impl RunSummary {
    /// Count one finished cycle
    pub fn record(&mut self, report: &CycleReport) {
        self.finished += 1;
        match &report.outcome {
            Ok(GoalOutcome::Succeeded) => self.succeeded += 1,
            Ok(GoalOutcome::Rejected) => self.rejected += 1,
            Ok(GoalOutcome::Aborted) => self.aborted += 1,
            Ok(GoalOutcome::Canceled) => self.canceled += 1,
            Ok(GoalOutcome::UnknownStatus | GoalOutcome::AcceptedPending) => self.unknown += 1,
            Err(DispatchError::ServerUnavailable { .. }) => self.unavailable += 1,
            Err(_) => self.failed += 1,
        }
    }
}

/// Trigger `dispatcher` every period until shutdown is requested or `stop` resolves
///
/// Must be polled inside a [`tokio::task::LocalSet`]. Cycles still in flight
/// when the run ends are dropped without canceling their goals.
pub async fn run<C, G, S>(
    dispatcher: Rc<Dispatcher<C, G>>,
    mut events: UnboundedReceiver<DispatchEvent>,
    stop: S,
) -> RunSummary
where
    C: NavigationClient + 'static,
    G: TargetGenerator + 'static,
    S: Future<Output = ()>,
{
    let period = dispatcher.config().period();
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(stop);

    info!("Dispatching a goal every {:.1} s", period.as_secs_f64());

    let mut summary = RunSummary::default();
    let mut in_flight: Vec<JoinHandle<()>> = Vec::new();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                in_flight.retain(|cycle| !cycle.is_finished());
                summary.started += 1;
                let dispatcher = Rc::clone(&dispatcher);
                in_flight.push(task::spawn_local(async move {
                    // Outcomes are reported through the event channel.
                    let _ = dispatcher.dispatch_cycle().await;
                }));
            }
            Some(event) = events.recv() => match event {
                DispatchEvent::CycleFinished(report) => {
                    debug!("Cycle {} finished: {:?}", report.cycle, report.outcome);
                    summary.record(&report);
                }
                DispatchEvent::ShutdownRequested { cycle } => {
                    info!("Shutting down after cycle {}", cycle);
                    summary.stop_reason = StopReason::ShutdownRequested;
                    break;
                }
            },
            _ = &mut stop => {
                info!("Stop requested");
                summary.stop_reason = StopReason::Stopped;
                break;
            }
        }
    }

    for cycle in in_flight {
        cycle.abort();
    }
    summary
}
