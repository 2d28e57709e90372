//! PushBoard actor: owns the task store and the worker slot table
//!
//! All mutation runs through this single consumer loop. Workers feed status
//! updates into the same queue the handle sends commands on, so store writes
//! are serialized by construction. Status updates are routed by task id and
//! worker generation; updates for removed tasks or superseded workers are
//! dropped.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::domain::{PushStatus, Task, TaskId, WorkerId};
use crate::pusher::{ConfigPusher, Credentials, Proxy};
use crate::store::TaskStore;

use super::config::BoardConfig;
use super::handle::BoardHandle;
use super::messages::{BoardEvent, BoardRequest, BoardResponse, ImportStats};
use super::worker::{PushJob, run_push};

/// Per-position record of the most recent worker spawned there.
struct WorkerSlot {
    worker: WorkerId,
    cancel: CancellationToken,
}

/// The orchestrator actor. Constructed and consumed by [`PushBoard::spawn`].
pub struct PushBoard {
    store: TaskStore,
    pusher: Arc<dyn ConfigPusher>,
    credentials: Credentials,
    proxy: Option<Proxy>,
    /// One slot per task position, `None` until a push starts there.
    slots: Vec<Option<WorkerSlot>>,
    tx: mpsc::Sender<BoardRequest>,
    rx: mpsc::Receiver<BoardRequest>,
    event_tx: broadcast::Sender<BoardEvent>,
}

impl PushBoard {
    /// Spawn the board actor over an opened store and return its handle.
    pub fn spawn(
        config: BoardConfig,
        store: TaskStore,
        pusher: Arc<dyn ConfigPusher>,
        credentials: Credentials,
        proxy: Option<Proxy>,
    ) -> BoardHandle {
        // Both channel constructors reject a zero capacity.
        let (tx, rx) = mpsc::channel(config.channel_buffer.max(1));
        let (event_tx, _) = broadcast::channel(config.event_buffer.max(1));

        let slots = (0..store.len()).map(|_| None).collect();
        let board = Self {
            store,
            pusher,
            credentials,
            proxy,
            slots,
            tx: tx.clone(),
            rx,
            event_tx: event_tx.clone(),
        };
        tokio::spawn(board.run());

        BoardHandle::new(tx, event_tx)
    }

    async fn run(mut self) {
        info!("push board started with {} tasks", self.store.len());
        while let Some(req) = self.rx.recv().await {
            match req {
                BoardRequest::Add {
                    target,
                    config,
                    save,
                    reply,
                } => {
                    let _ = reply.send(self.handle_add(target, config, save));
                }
                BoardRequest::Import { rows, reply } => {
                    let _ = reply.send(self.handle_import(rows));
                }
                BoardRequest::Remove { position, reply } => {
                    let _ = reply.send(self.handle_remove(position));
                }
                BoardRequest::Clear { reply } => {
                    let _ = reply.send(self.handle_clear());
                }
                BoardRequest::SetSave { position, save, reply } => {
                    let _ = reply.send(self.store.set_save(position, save).map_err(Into::into));
                }
                BoardRequest::Tasks { reply } => {
                    let _ = reply.send(self.store.snapshot());
                }
                BoardRequest::PushOne { position, reply } => {
                    let _ = reply.send(self.handle_push_one(position));
                }
                BoardRequest::PushSelected { positions, reply } => {
                    let _ = reply.send(self.handle_push_positions(positions));
                }
                BoardRequest::PushAll { reply } => {
                    let positions = (0..self.store.len()).collect();
                    let _ = reply.send(self.handle_push_positions(positions));
                }
                BoardRequest::AbortOne { position, reply } => {
                    self.handle_abort(&[position]);
                    let _ = reply.send(());
                }
                BoardRequest::AbortSelected { positions, reply } => {
                    self.handle_abort(&positions);
                    let _ = reply.send(());
                }
                BoardRequest::AbortAll { reply } => {
                    let positions: Vec<usize> = (0..self.store.len()).collect();
                    self.handle_abort(&positions);
                    let _ = reply.send(());
                }
                BoardRequest::StatusUpdate { task, worker, status } => {
                    self.apply_status(task, worker, status);
                }
                BoardRequest::Shutdown => {
                    info!("push board shutting down");
                    break;
                }
            }
        }
    }

    fn handle_add(&mut self, target: String, config: String, save: bool) -> BoardResponse<TaskId> {
        let task = Task::new(target, config, save)?;
        let id = task.id.clone();
        debug!("adding task for {}", task.target);
        self.store.append(task)?;
        self.slots.push(None);
        Ok(id)
    }

    fn handle_import(&mut self, rows: Vec<(String, String)>) -> BoardResponse<ImportStats> {
        let mut stats = ImportStats::default();
        for (target, config) in rows {
            match Task::new(target, config, true) {
                Ok(task) => {
                    self.store.append(task)?;
                    self.slots.push(None);
                    stats.added += 1;
                }
                Err(e) => {
                    warn!("skipping imported row: {e}");
                    stats.skipped += 1;
                }
            }
        }
        info!("imported {} tasks ({} rows skipped)", stats.added, stats.skipped);
        Ok(stats)
    }

    fn handle_remove(&mut self, position: usize) -> BoardResponse<()> {
        let removed = self.store.remove_at(position)?;
        if let Some(slot) = self.slots.remove(position) {
            // The worker, if still running, winds down at its next checkpoint;
            // any updates it still sends carry an id that is no longer on the
            // board and fall through apply_status as orphans.
            slot.cancel.cancel();
        }
        info!("removed task for {}", removed.target);
        self.emit(BoardEvent::TaskRemoved { position });
        Ok(())
    }

    fn handle_clear(&mut self) -> BoardResponse<()> {
        self.store.clear()?;
        for slot in self.slots.drain(..).flatten() {
            slot.cancel.cancel();
        }
        info!("cleared the board");
        self.emit(BoardEvent::Cleared);
        Ok(())
    }

    /// Spawn a worker for `position` unless the task is absent or already
    /// pushed; both cases are skips, not errors.
    fn handle_push_one(&mut self, position: usize) -> Option<TaskId> {
        let Some(task) = self.store.get(position) else {
            warn!("push skipped: no task at position {position}");
            return None;
        };
        if task.status == PushStatus::Pushed {
            debug!("push skipped: {} already pushed", task.target);
            return None;
        }

        let job = PushJob {
            task: task.id.clone(),
            worker: WorkerId::fresh(),
            target: task.target.clone(),
            config: task.config.clone(),
            save: task.save,
        };
        let cancel = CancellationToken::new();
        let id = job.task.clone();

        info!("starting push worker for {} (position {position})", job.target);
        self.slots[position] = Some(WorkerSlot {
            worker: job.worker.clone(),
            cancel: cancel.clone(),
        });
        tokio::spawn(run_push(
            job,
            Arc::clone(&self.pusher),
            self.credentials.clone(),
            self.proxy.clone(),
            cancel,
            self.tx.clone(),
        ));
        Some(id)
    }

    fn handle_push_positions(&mut self, positions: Vec<usize>) -> Vec<TaskId> {
        positions.into_iter().filter_map(|p| self.handle_push_one(p)).collect()
    }

    /// Cancel tokens at positions holding a worker. Advisory only; workers
    /// observe it at their next checkpoint. The slot decides eligibility, not
    /// the stored status: a re-pushed task keeps its previous terminal status
    /// until the new worker's first update lands, and a finished worker's
    /// token is inert.
    fn handle_abort(&self, positions: &[usize]) {
        for &position in positions {
            if let Some(slot) = self.slots.get(position).and_then(Option::as_ref) {
                info!("abort requested for position {position}");
                slot.cancel.cancel();
            }
        }
    }

    fn apply_status(&mut self, task: TaskId, worker: WorkerId, status: PushStatus) {
        let Some(position) = self.store.position_of(&task) else {
            debug!("dropping status {status} for a task no longer on the board");
            return;
        };
        let current = self.slots.get(position).and_then(Option::as_ref);
        if current.map(|slot| &slot.worker) != Some(&worker) {
            debug!("dropping stale status {status} from a superseded worker at position {position}");
            return;
        }

        let mut updated = match self.store.get(position) {
            Some(task) => task.clone(),
            None => return,
        };
        updated.status = status;
        if let Err(e) = self.store.replace(position, updated) {
            // Subscribers still hear the worker-reported status; the document
            // keeps the last state that could be written.
            error!("failed to persist status {status} at position {position}: {e}");
        }
        self.emit(BoardEvent::StatusChanged { position, task, status });
    }

    fn emit(&self, event: BoardEvent) {
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardError;
    use crate::pusher::mock::MockPusher;
    use crate::pusher::{ConfigSession, PusherError};
    use async_trait::async_trait;
    use std::time::Duration;
    use tempfile::tempdir;
    use tokio::sync::Semaphore;
    use tokio::time::timeout;

    fn credentials() -> Credentials {
        Credentials {
            username: "admin".to_string(),
            password: "secret".to_string(),
        }
    }

    fn spawn_board(store: TaskStore, pusher: Arc<dyn ConfigPusher>) -> BoardHandle {
        PushBoard::spawn(BoardConfig::default(), store, pusher, credentials(), None)
    }

    async fn wait_for_status(handle: &BoardHandle, position: usize, status: PushStatus) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        loop {
            let tasks = handle.tasks().await.unwrap();
            if tasks.get(position).map(|t| t.status) == Some(status) {
                return;
            }
            if tokio::time::Instant::now() > deadline {
                panic!("timed out waiting for {status} at position {position}");
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    async fn next_status_event(rx: &mut broadcast::Receiver<BoardEvent>) -> (usize, PushStatus) {
        loop {
            let event = timeout(Duration::from_secs(2), rx.recv())
                .await
                .expect("timed out waiting for a board event")
                .expect("event channel closed");
            if let BoardEvent::StatusChanged { position, status, .. } = event {
                return (position, status);
            }
        }
    }

    /// Pusher that parks every connect to one chosen target until the test
    /// grants a permit. Permits persist, so a release can never be missed.
    struct GatedPusher {
        gate: Arc<Semaphore>,
        gated_target: String,
        inner: MockPusher,
    }

    impl GatedPusher {
        fn for_target(target: &str) -> (Self, Arc<Semaphore>) {
            let gate = Arc::new(Semaphore::new(0));
            let pusher = Self {
                gate: Arc::clone(&gate),
                gated_target: target.to_string(),
                inner: MockPusher::new(),
            };
            (pusher, gate)
        }
    }

    #[async_trait]
    impl ConfigPusher for GatedPusher {
        async fn connect(
            &self,
            target: &str,
            creds: &Credentials,
            proxy: Option<&Proxy>,
        ) -> Result<Box<dyn ConfigSession>, PusherError> {
            if target == self.gated_target {
                self.gate.acquire().await.unwrap().forget();
            }
            self.inner.connect(target, creds, proxy).await
        }
    }

    #[tokio::test]
    async fn test_add_appends_pending_and_persists() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("board.json");
        let store = TaskStore::open(&path).unwrap();
        let handle = spawn_board(store, Arc::new(MockPusher::new()));

        handle.add("r1.example.com", "interface eth0", true).await.unwrap();
        handle.add("r2.example.com", "hostname r2", false).await.unwrap();

        let tasks = handle.tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].status, PushStatus::Pending);

        let reloaded = TaskStore::open(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get(1).unwrap().target, "r2.example.com");
    }

    #[tokio::test]
    async fn test_add_rejects_blank_fields() {
        let temp = tempdir().unwrap();
        let store = TaskStore::open(temp.path().join("board.json")).unwrap();
        let handle = spawn_board(store, Arc::new(MockPusher::new()));

        let err = handle.add("  ", "config", true).await.unwrap_err();
        assert!(matches!(err, BoardError::InvalidTask(_)));
        assert!(handle.tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_push_one_runs_to_pushed_and_persists() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("board.json");
        let store = TaskStore::open(&path).unwrap();
        let pusher = Arc::new(MockPusher::new());
        let handle = spawn_board(store, Arc::clone(&pusher) as Arc<dyn ConfigPusher>);

        handle.add("r1.example.com", "interface eth0\nno shutdown", true).await.unwrap();
        let started = handle.push_one(0).await.unwrap();
        assert!(started.is_some());

        wait_for_status(&handle, 0, PushStatus::Pushed).await;
        assert_eq!(pusher.counters.saves(), 1);

        let reloaded = TaskStore::open(&path).unwrap();
        assert_eq!(reloaded.get(0).unwrap().status, PushStatus::Pushed);
    }

    #[tokio::test]
    async fn test_push_one_skips_already_pushed() {
        let temp = tempdir().unwrap();
        let store = TaskStore::open(temp.path().join("board.json")).unwrap();
        let pusher = Arc::new(MockPusher::new());
        let handle = spawn_board(store, Arc::clone(&pusher) as Arc<dyn ConfigPusher>);

        handle.add("r1", "config", false).await.unwrap();
        handle.push_one(0).await.unwrap();
        wait_for_status(&handle, 0, PushStatus::Pushed).await;

        let started = handle.push_one(0).await.unwrap();
        assert_eq!(started, None);
        assert_eq!(pusher.counters.connects(), 1);
        assert_eq!(handle.tasks().await.unwrap()[0].status, PushStatus::Pushed);
    }

    #[tokio::test]
    async fn test_push_one_skips_unknown_position() {
        let temp = tempdir().unwrap();
        let store = TaskStore::open(temp.path().join("board.json")).unwrap();
        let handle = spawn_board(store, Arc::new(MockPusher::new()));

        assert_eq!(handle.push_one(7).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_push_all_skips_pushed_rows() {
        let temp = tempdir().unwrap();
        let store = TaskStore::open(temp.path().join("board.json")).unwrap();
        let pusher = Arc::new(MockPusher::new());
        let handle = spawn_board(store, Arc::clone(&pusher) as Arc<dyn ConfigPusher>);

        for target in ["r1", "r2", "r3"] {
            handle.add(target, "config", false).await.unwrap();
        }
        handle.push_one(1).await.unwrap();
        wait_for_status(&handle, 1, PushStatus::Pushed).await;

        let started = handle.push_all().await.unwrap();
        assert_eq!(started.len(), 2);

        wait_for_status(&handle, 0, PushStatus::Pushed).await;
        wait_for_status(&handle, 2, PushStatus::Pushed).await;
        assert_eq!(pusher.counters.connects(), 3);
    }

    #[tokio::test]
    async fn test_status_events_carry_position_and_reach_subscribers() {
        let temp = tempdir().unwrap();
        let store = TaskStore::open(temp.path().join("board.json")).unwrap();
        let handle = spawn_board(store, Arc::new(MockPusher::new()));

        handle.add("r1", "config", false).await.unwrap();
        handle.add("r2", "config", false).await.unwrap();

        let mut events = handle.subscribe();
        handle.push_one(1).await.unwrap();

        assert_eq!(next_status_event(&mut events).await, (1, PushStatus::Connecting));
        assert_eq!(next_status_event(&mut events).await, (1, PushStatus::Pushing));
        assert_eq!(next_status_event(&mut events).await, (1, PushStatus::Pushed));
    }

    #[tokio::test]
    async fn test_abort_pending_task_is_noop() {
        let temp = tempdir().unwrap();
        let store = TaskStore::open(temp.path().join("board.json")).unwrap();
        let handle = spawn_board(store, Arc::new(MockPusher::new()));

        handle.add("r1", "config", false).await.unwrap();
        handle.abort_one(0).await.unwrap();

        assert_eq!(handle.tasks().await.unwrap()[0].status, PushStatus::Pending);
    }

    #[tokio::test]
    async fn test_abort_blocked_worker_lands_aborted() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("board.json");
        let store = TaskStore::open(&path).unwrap();
        let (pusher, gate) = GatedPusher::for_target("r1");
        let handle = spawn_board(store, Arc::new(pusher));

        handle.add("r1", "config", true).await.unwrap();
        handle.push_one(0).await.unwrap();
        wait_for_status(&handle, 0, PushStatus::Connecting).await;

        // The worker sits inside connect; abort only marks the token.
        handle.abort_one(0).await.unwrap();
        assert_eq!(handle.tasks().await.unwrap()[0].status, PushStatus::Connecting);

        // Once connect returns, the next checkpoint observes the abort.
        gate.add_permits(1);
        wait_for_status(&handle, 0, PushStatus::Aborted).await;

        let reloaded = TaskStore::open(&path).unwrap();
        assert_eq!(reloaded.get(0).unwrap().status, PushStatus::Aborted);
    }

    #[tokio::test]
    async fn test_abort_all_covers_every_running_worker() {
        let temp = tempdir().unwrap();
        let store = TaskStore::open(temp.path().join("board.json")).unwrap();
        let (pusher, gate) = GatedPusher::for_target("r1");
        let handle = spawn_board(store, Arc::new(pusher));

        handle.add("r1", "config", false).await.unwrap();
        handle.add("r2", "config", false).await.unwrap();
        handle.push_all().await.unwrap();
        wait_for_status(&handle, 0, PushStatus::Connecting).await;

        handle.abort_all().await.unwrap();
        gate.add_permits(1);

        // r1 was parked at the gate and aborts at its next checkpoint; r2 ran
        // unobstructed and may have beaten the abort to the last checkpoint.
        wait_for_status(&handle, 0, PushStatus::Aborted).await;
        let status = handle.tasks().await.unwrap()[1].status;
        assert!(status == PushStatus::Aborted || status == PushStatus::Pushed);
    }

    #[tokio::test]
    async fn test_remove_drops_orphan_worker_events() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("board.json");
        let store = TaskStore::open(&path).unwrap();
        let (pusher, gate) = GatedPusher::for_target("r1");
        let handle = spawn_board(store, Arc::new(pusher));

        handle.add("r1", "config", false).await.unwrap();
        handle.push_one(0).await.unwrap();
        wait_for_status(&handle, 0, PushStatus::Connecting).await;

        let mut events = handle.subscribe();
        handle.remove(0).await.unwrap();
        assert!(handle.tasks().await.unwrap().is_empty());

        // Let the orphaned worker finish; its terminal update must not
        // resurrect the row or reach subscribers.
        gate.add_permits(1);
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(handle.tasks().await.unwrap().is_empty());
        let mut saw_status_event = false;
        while let Ok(event) = events.try_recv() {
            if matches!(event, BoardEvent::StatusChanged { .. }) {
                saw_status_event = true;
            }
        }
        assert!(!saw_status_event, "orphan status leaked to subscribers");
        assert!(TaskStore::open(&path).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_emits_removal_event() {
        let temp = tempdir().unwrap();
        let store = TaskStore::open(temp.path().join("board.json")).unwrap();
        let handle = spawn_board(store, Arc::new(MockPusher::new()));

        handle.add("r1", "config", false).await.unwrap();
        let mut events = handle.subscribe();
        handle.remove(0).await.unwrap();

        let event = timeout(Duration::from_secs(2), events.recv()).await.unwrap().unwrap();
        assert!(matches!(event, BoardEvent::TaskRemoved { position: 0 }));
    }

    #[tokio::test]
    async fn test_stale_generation_events_dropped() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("board.json");
        let store = TaskStore::open(&path).unwrap();
        let (pusher, gate) = GatedPusher::for_target("r1");
        let handle = spawn_board(store, Arc::new(pusher));

        handle.add("r1", "config", false).await.unwrap();

        // The first worker cannot get past connect, so the task is still
        // unpushed when the second worker takes over the slot.
        handle.push_one(0).await.unwrap();
        handle.push_one(0).await.unwrap();

        // Release both. Only the newer generation may touch the row.
        gate.add_permits(2);
        wait_for_status(&handle, 0, PushStatus::Pushed).await;
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(handle.tasks().await.unwrap()[0].status, PushStatus::Pushed);
        assert_eq!(
            TaskStore::open(&path).unwrap().get(0).unwrap().status,
            PushStatus::Pushed
        );
    }

    #[tokio::test]
    async fn test_import_skips_invalid_rows() {
        let temp = tempdir().unwrap();
        let store = TaskStore::open(temp.path().join("board.json")).unwrap();
        let handle = spawn_board(store, Arc::new(MockPusher::new()));

        let stats = handle
            .import(vec![
                ("r1".to_string(), "config one".to_string()),
                ("r2".to_string(), "   ".to_string()),
                ("r3".to_string(), "config three".to_string()),
            ])
            .await
            .unwrap();

        assert_eq!(stats, ImportStats { added: 2, skipped: 1 });
        let tasks = handle.tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].target, "r1");
        assert_eq!(tasks[1].target, "r3");
        assert!(tasks.iter().all(|t| t.save));
    }

    #[tokio::test]
    async fn test_set_save_leaves_target_and_config() {
        let temp = tempdir().unwrap();
        let store = TaskStore::open(temp.path().join("board.json")).unwrap();
        let handle = spawn_board(store, Arc::new(MockPusher::new()));

        handle.add("r1", "config", true).await.unwrap();
        handle.set_save(0, false).await.unwrap();

        let task = handle.tasks().await.unwrap().remove(0);
        assert!(!task.save);
        assert_eq!(task.target, "r1");
        assert_eq!(task.config, "config");
    }

    #[tokio::test]
    async fn test_clear_empties_board_and_notifies() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("board.json");
        let store = TaskStore::open(&path).unwrap();
        let handle = spawn_board(store, Arc::new(MockPusher::new()));

        handle.add("r1", "config", false).await.unwrap();
        handle.add("r2", "config", false).await.unwrap();

        let mut events = handle.subscribe();
        handle.clear().await.unwrap();

        assert!(handle.tasks().await.unwrap().is_empty());
        assert!(TaskStore::open(&path).unwrap().is_empty());
        let event = timeout(Duration::from_secs(2), events.recv()).await.unwrap().unwrap();
        assert!(matches!(event, BoardEvent::Cleared));
    }

    #[tokio::test]
    async fn test_board_reopens_with_prior_state() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("board.json");

        let store = TaskStore::open(&path).unwrap();
        let handle = spawn_board(store, Arc::new(MockPusher::new()));
        handle.add("r1", "config", false).await.unwrap();
        handle.push_one(0).await.unwrap();
        wait_for_status(&handle, 0, PushStatus::Pushed).await;
        handle.shutdown().await.unwrap();

        let store = TaskStore::open(&path).unwrap();
        let handle = spawn_board(store, Arc::new(MockPusher::new()));
        let tasks = handle.tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, PushStatus::Pushed);
    }

    #[tokio::test]
    async fn test_shutdown_closes_handle() {
        let temp = tempdir().unwrap();
        let store = TaskStore::open(temp.path().join("board.json")).unwrap();
        let handle = spawn_board(store, Arc::new(MockPusher::new()));

        handle.shutdown().await.unwrap();

        let err = handle.tasks().await.unwrap_err();
        assert!(matches!(err, BoardError::ChannelClosed));
    }

    #[tokio::test]
    async fn test_zero_channel_capacities_are_clamped() {
        let temp = tempdir().unwrap();
        let store = TaskStore::open(temp.path().join("board.json")).unwrap();
        let config = BoardConfig {
            channel_buffer: 0,
            event_buffer: 0,
        };
        let handle = PushBoard::spawn(config, store, Arc::new(MockPusher::new()), credentials(), None);

        handle.add("r1", "config", false).await.unwrap();
        handle.push_one(0).await.unwrap();
        wait_for_status(&handle, 0, PushStatus::Pushed).await;
    }
}
