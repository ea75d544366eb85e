// ABOUTME: Cancellable periodic refresh of goal analytics for one user
// ABOUTME: Supersedes in-flight ticks and publishes results last-write-wins by tick sequence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Refresh Scheduler
//!
//! Re-runs [`AnalyticsService::analyze`] on an interval. Each tick gets a
//! sequence number; when a new tick starts, the previous tick's task is aborted
//! if it is still running. A finished tick only replaces the published report
//! when its sequence is newer than the one already published, so a slow old tick
//! can never overwrite a fresher result.
//!
//! The caller owns the lifecycle through [`RefreshHandle`]: call
//! [`RefreshHandle::stop`] or drop the handle to end the loop.

use crate::analytics::{AnalyticsService, GoalAnalyticsReport};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Supplies the reference date for each tick
pub type ReferenceDateFn = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// A published refresh result
#[derive(Debug, Clone)]
pub struct RefreshUpdate {
    /// Tick sequence number, starting at 1
    pub tick: u64,
    /// Reference date the tick analyzed
    pub as_of: NaiveDate,
    /// Report computed by the tick
    pub report: Arc<GoalAnalyticsReport>,
}

/// Periodic analytics refresh for one user
pub struct RefreshScheduler {
    service: AnalyticsService,
    user_id: Uuid,
    interval: Duration,
    reference_date: ReferenceDateFn,
}

impl RefreshScheduler {
    /// Scheduler using the service's configured interval and today's UTC date
    #[must_use]
    pub fn new(service: AnalyticsService, user_id: Uuid) -> Self {
        let interval = service.config().refresh_interval;
        Self {
            service,
            user_id,
            interval,
            reference_date: Arc::new(|| Utc::now().date_naive()),
        }
    }

    /// Override the refresh interval
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Override how each tick picks its reference date
    #[must_use]
    pub fn with_reference_date(
        mut self,
        reference_date: impl Fn() -> NaiveDate + Send + Sync + 'static,
    ) -> Self {
        self.reference_date = Arc::new(reference_date);
        self
    }

    /// Start the refresh loop; the first tick runs immediately
    #[must_use]
    pub fn start(self) -> RefreshHandle {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
        let (updates_tx, updates_rx) = watch::channel::<Option<RefreshUpdate>>(None);

        info!(
            user_id = %self.user_id,
            interval_ms = self.interval.as_millis(),
            "Starting analytics refresh"
        );
        let task = tokio::spawn(self.run(shutdown_rx, updates_tx));

        RefreshHandle {
            shutdown_tx,
            updates: updates_rx,
            task: Some(task),
        }
    }

    async fn run(
        self,
        mut shutdown_rx: mpsc::Receiver<()>,
        updates_tx: watch::Sender<Option<RefreshUpdate>>,
    ) {
        let updates_tx = Arc::new(updates_tx);
        let mut interval = time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut tick: u64 = 0;
        let mut in_flight: Option<JoinHandle<()>> = None;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    tick += 1;
                    if let Some(previous) = in_flight.take() {
                        if !previous.is_finished() {
                            debug!(tick, "Superseding in-flight refresh");
                            previous.abort();
                        }
                    }
                    in_flight = Some(self.spawn_tick(tick, Arc::clone(&updates_tx)));
                }
                _ = shutdown_rx.recv() => {
                    debug!(user_id = %self.user_id, "Analytics refresh received shutdown signal");
                    break;
                }
            }
        }

        if let Some(previous) = in_flight.take() {
            previous.abort();
        }
    }

    fn spawn_tick(
        &self,
        tick: u64,
        updates_tx: Arc<watch::Sender<Option<RefreshUpdate>>>,
    ) -> JoinHandle<()> {
        let service = self.service.clone();
        let user_id = self.user_id;
        let as_of = (self.reference_date)();

        tokio::spawn(async move {
            match service.analyze(user_id, as_of).await {
                Ok(report) => {
                    let update = RefreshUpdate {
                        tick,
                        as_of,
                        report: Arc::new(report),
                    };
                    if !publish_if_newer(&updates_tx, update) {
                        debug!(tick, "Discarded stale refresh result");
                    }
                }
                Err(e) => warn!(tick, %user_id, error = %e, "Analytics refresh failed"),
            }
        })
    }
}

/// Publish `update` unless a result from the same or a later tick is already published
///
/// Returns whether the update was published.
pub fn publish_if_newer(
    updates_tx: &watch::Sender<Option<RefreshUpdate>>,
    update: RefreshUpdate,
) -> bool {
    updates_tx.send_if_modified(|current| {
        let newer = current
            .as_ref()
            .is_none_or(|published| published.tick < update.tick);
        if newer {
            *current = Some(update);
        }
        newer
    })
}

/// Owner handle for a running refresh loop
pub struct RefreshHandle {
    shutdown_tx: mpsc::Sender<()>,
    updates: watch::Receiver<Option<RefreshUpdate>>,
    task: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Receiver notified whenever a newer report is published
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<RefreshUpdate>> {
        self.updates.clone()
    }

    /// Most recently published update
    #[must_use]
    pub fn latest(&self) -> Option<RefreshUpdate> {
        self.updates.borrow().clone()
    }

    /// Stop the loop and wait for it to exit
    pub async fn stop(mut self) {
        if self.shutdown_tx.send(()).await.is_err() {
            debug!("Refresh loop already stopped");
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "Refresh loop ended abnormally");
            }
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if self.task.is_some() {
            if let Err(e) = self.shutdown_tx.try_send(()) {
                debug!(error = ?e, "Refresh shutdown signal send failed (loop likely stopped)");
            }
        }
    }
}
