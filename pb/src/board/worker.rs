//! PushWorker: one concurrent unit of execution per task
//!
//! Drives a task through `Connecting → Pushing → {Pushed | Aborted | Failed}`.
//! Abort is cooperative: the cancellation token is read at three checkpoints
//! and nowhere else, so a run that passed its last checkpoint still lands
//! `Pushed` even if an abort arrives late. Exactly one terminal status is
//! reported per run, and an established session is closed on every exit path.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::domain::{PushStatus, TaskId, WorkerId};
use crate::pusher::{ConfigPusher, ConfigSession, Credentials, Proxy, PusherError};

use super::messages::BoardRequest;

/// Snapshot of the task a worker executes, fixed at spawn time.
#[derive(Debug, Clone)]
pub(crate) struct PushJob {
    pub task: TaskId,
    pub worker: WorkerId,
    pub target: String,
    pub config: String,
    pub save: bool,
}

/// Execute one push. Transport failures end at `Failed` and never propagate;
/// the board hears about them through the status update alone.
pub(crate) async fn run_push(
    job: PushJob,
    pusher: Arc<dyn ConfigPusher>,
    credentials: Credentials,
    proxy: Option<Proxy>,
    cancel: CancellationToken,
    board: mpsc::Sender<BoardRequest>,
) {
    // Checkpoint 1: bail before any connection attempt.
    if cancel.is_cancelled() {
        debug!("push to {} aborted before connect", job.target);
        report(&board, &job, PushStatus::Aborted).await;
        return;
    }

    report(&board, &job, PushStatus::Connecting).await;
    let mut session = match pusher.connect(&job.target, &credentials, proxy.as_ref()).await {
        Ok(session) => session,
        Err(e) => {
            warn!("push to {} failed: {e}", job.target);
            report(&board, &job, PushStatus::Failed).await;
            return;
        }
    };

    // Checkpoint 2: abort observed after connecting; release the session
    // before reporting.
    if cancel.is_cancelled() {
        session.close().await;
        debug!("push to {} aborted after connect", job.target);
        report(&board, &job, PushStatus::Aborted).await;
        return;
    }

    report(&board, &job, PushStatus::Pushing).await;
    match apply(&mut session, &job).await {
        Ok(()) => {
            // Checkpoint 3: the final abort read. A cancel landing after this
            // point no longer changes the outcome; the task completes Pushed.
            if cancel.is_cancelled() {
                info!("push to {} aborted after config was applied", job.target);
                report(&board, &job, PushStatus::Aborted).await;
            } else {
                info!("pushed configuration to {}", job.target);
                report(&board, &job, PushStatus::Pushed).await;
            }
        }
        Err(e) => {
            warn!("push to {} failed: {e}", job.target);
            report(&board, &job, PushStatus::Failed).await;
        }
    }
    session.close().await;
}

async fn apply(session: &mut Box<dyn ConfigSession>, job: &PushJob) -> Result<(), PusherError> {
    session.send_config(&job.config).await?;
    if job.save {
        session.save_config().await?;
    }
    Ok(())
}

async fn report(board: &mpsc::Sender<BoardRequest>, job: &PushJob, status: PushStatus) {
    let update = BoardRequest::StatusUpdate {
        task: job.task.clone(),
        worker: job.worker.clone(),
        status,
    };
    if board.send(update).await.is_err() {
        debug!("board gone; dropping status {} for {}", status, job.target);
    }
}
