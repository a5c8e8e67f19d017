//! Background task producing companion replies.
//!
//! The UI never waits on the companion: it sends a request and keeps
//! drawing, and the reply arrives on a channel after a short typing delay.

use std::time::Duration;

use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use wellsync_core::companion::pick_reply;

/// Requests from the UI to the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerRequest {
    /// The user said something; answer it
    Reply { message: String },
    Shutdown,
}

/// Responses from the worker to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    Reply(String),
}

/// Channel endpoints held by the UI.
pub struct WorkerHandle {
    pub request_tx: mpsc::Sender<WorkerRequest>,
    pub response_rx: mpsc::Receiver<WorkerResponse>,
    pub task: JoinHandle<()>,
}

/// Spawn the companion worker on the current tokio runtime.
pub fn spawn_worker(delay: Duration, rng: StdRng) -> WorkerHandle {
    let (request_tx, request_rx) = mpsc::channel(16);
    let (response_tx, response_rx) = mpsc::channel(16);
    let task = tokio::spawn(run_worker(request_rx, response_tx, delay, rng));
    WorkerHandle {
        request_tx,
        response_rx,
        task,
    }
}

async fn run_worker(
    mut requests: mpsc::Receiver<WorkerRequest>,
    responses: mpsc::Sender<WorkerResponse>,
    delay: Duration,
    mut rng: StdRng,
) {
    while let Some(request) = requests.recv().await {
        match request {
            WorkerRequest::Reply { message } => {
                tracing::debug!(target: "wellsync::worker", len = message.len(), "Composing reply");
                tokio::time::sleep(delay).await;
                let reply = pick_reply(&mut rng).to_string();
                if responses.send(WorkerResponse::Reply(reply)).await.is_err() {
                    // UI is gone
                    break;
                }
            }
            WorkerRequest::Shutdown => break,
        }
    }
    tracing::debug!(target: "wellsync::worker", "Worker stopped");
}
