// tests/common/mod.rs
// Scripted in-process navigation server for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use roamer::dispatch::{Acceptance, GoalHandle, GoalId, GoalRequest, GoalResult};
use roamer::{ClientError, NavigationClient};
use tokio::sync::oneshot;

/// How accepted goals finish
#[derive(Debug, Clone, Copy)]
pub enum Completion {
    /// The test resolves each goal with [`ScriptedNavigator::complete`]
    Manual,
    /// Every goal resolves with `status` after `delay`
    After { delay: Duration, status: i8 },
}

enum PendingResult {
    Manual(oneshot::Receiver<i8>),
    After(Duration, i8),
}

struct State {
    server_up: bool,
    decisions: VecDeque<bool>,
    accept_by_default: bool,
    completion: Completion,
    next_id: u64,
    submitted: Vec<GoalRequest>,
    senders: HashMap<GoalId, oneshot::Sender<i8>>,
    pending: HashMap<GoalId, PendingResult>,
}

/// Navigation server fake with scripted availability, decisions and results
pub struct ScriptedNavigator {
    state: Mutex<State>,
}

impl ScriptedNavigator {
    /// Reachable server that accepts everything; goals resolve manually
    pub fn new() -> Self {
        ScriptedNavigator {
            state: Mutex::new(State {
                server_up: true,
                decisions: VecDeque::new(),
                accept_by_default: true,
                completion: Completion::Manual,
                next_id: 1,
                submitted: Vec::new(),
                senders: HashMap::new(),
                pending: HashMap::new(),
            }),
        }
    }

    /// Server that never becomes available
    pub fn unreachable() -> Self {
        let navigator = Self::new();
        navigator.state.lock().unwrap().server_up = false;
        navigator
    }

    /// Server that rejects every goal
    pub fn rejecting() -> Self {
        let navigator = Self::new();
        navigator.state.lock().unwrap().accept_by_default = false;
        navigator
    }

    /// Resolve accepted goals automatically
    pub fn completing(self, completion: Completion) -> Self {
        self.state.lock().unwrap().completion = completion;
        self
    }

    /// Queue accept/reject decisions for the next submissions
    pub fn deciding(self, decisions: &[bool]) -> Self {
        self.state.lock().unwrap().decisions.extend(decisions);
        self
    }

    /// Finish a manually completed goal with `status`
    pub fn complete(&self, id: GoalId, status: i8) {
        let sender = self.state.lock().unwrap().senders.remove(&id);
        sender
            .expect("goal is not pending")
            .send(status)
            .expect("result receiver dropped");
    }

    /// Drop a pending goal without ever reporting its result
    pub fn lose(&self, id: GoalId) {
        self.state.lock().unwrap().senders.remove(&id);
    }

    /// Goals submitted so far
    pub fn submitted(&self) -> Vec<GoalRequest> {
        self.state.lock().unwrap().submitted.clone()
    }

    /// Number of goals submitted so far
    pub fn submit_count(&self) -> usize {
        self.state.lock().unwrap().submitted.len()
    }
}

#[async_trait]
impl NavigationClient for ScriptedNavigator {
    async fn wait_for_server(&self) -> Result<(), ClientError> {
        let up = self.state.lock().unwrap().server_up;
        if !up {
            std::future::pending::<()>().await;
        }
        Ok(())
    }

    async fn submit(&self, request: GoalRequest) -> Result<Acceptance, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.submitted.push(request);
        let accept = state
            .decisions
            .pop_front()
            .unwrap_or(state.accept_by_default);
        if !accept {
            return Ok(Acceptance::rejected());
        }

        let id = GoalId(state.next_id);
        state.next_id += 1;
        let completion = state.completion;
        let pending = match completion {
            Completion::Manual => {
                let (tx, rx) = oneshot::channel();
                state.senders.insert(id, tx);
                PendingResult::Manual(rx)
            }
            Completion::After { delay, status } => PendingResult::After(delay, status),
        };
        state.pending.insert(id, pending);
        Ok(Acceptance::accepted(GoalHandle::new(id)))
    }

    async fn request_result(&self, handle: GoalHandle) -> Result<GoalResult, ClientError> {
        let pending = self.state.lock().unwrap().pending.remove(&handle.id());
        let status_code = match pending {
            Some(PendingResult::Manual(rx)) => rx
                .await
                .map_err(|_| ClientError::Transport("goal lost".into()))?,
            Some(PendingResult::After(delay, status)) => {
                tokio::time::sleep(delay).await;
                status
            }
            None => return Err(ClientError::UnknownGoal(handle.id())),
        };
        Ok(GoalResult { status_code })
    }
}

/// Yield to the local executor until `ready` holds
pub async fn settle(ready: impl Fn() -> bool) {
    for _ in 0..1000 {
        if ready() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition never became true");
}
