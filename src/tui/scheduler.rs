//! # Deferred Work
//!
//! The game has two kinds of timers: the mismatch flip-back and the
//! one-second clock. Both run as tokio tasks that report back to the event
//! loop by sending an `Action` over the same channel, tagged with the
//! session generation they were started for.
//!
//! Stale callbacks are blocked twice:
//! - the `AbortHandle` is aborted when the session is replaced or the clock
//!   should stop, so the task never sends;
//! - `update()` drops any `FlipBack`/`Tick` whose generation doesn't match,
//!   covering an action that was already in the channel when we aborted.
//!
//! The clock is level-triggered: after every action, `sync_clock` compares
//! `Session::clock_should_run()` with what is running and starts or aborts
//! the task to match.

use std::sync::mpsc::Sender;
use std::time::Duration;

use log::{debug, warn};
use tokio::task::AbortHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::core::action::{Action, Effect, update};
use crate::core::state::{App, MISMATCH_DELAY, Session};

/// One clock tick per wall-clock second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

struct ClockTask {
    generation: u64,
    handle: AbortHandle,
}

#[derive(Default)]
pub struct Scheduler {
    flip_back: Option<AbortHandle>,
    clock: Option<ClockTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `Action::FlipBack { generation }` after `delay`.
    ///
    /// Replaces any flip-back still pending.
    pub fn schedule_flip_back(&mut self, generation: u64, delay: Duration, tx: Sender<Action>) {
        if let Some(previous) = self.flip_back.take() {
            previous.abort();
        }
        debug!(
            "Scheduling flip-back in {:?} (generation={})",
            delay, generation
        );
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Action::FlipBack { generation }).is_err() {
                warn!("Failed to send flip-back (generation={}): receiver dropped", generation);
            }
        });
        self.flip_back = Some(handle.abort_handle());
    }

    /// Start or stop the clock task so it runs iff the session's clock should.
    pub fn sync_clock(&mut self, session: &Session, tx: &Sender<Action>) {
        let wanted = session.clock_should_run().then_some(session.generation);
        if wanted == self.clock_generation() {
            return;
        }

        self.stop_clock();
        if let Some(generation) = wanted {
            debug!("Starting clock (generation={})", generation);
            let tx = tx.clone();
            let handle = tokio::spawn(async move {
                let mut interval = tokio::time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    interval.tick().await;
                    if tx.send(Action::Tick { generation }).is_err() {
                        warn!("Clock stopping (generation={}): receiver dropped", generation);
                        return;
                    }
                }
            });
            self.clock = Some(ClockTask {
                generation,
                handle: handle.abort_handle(),
            });
        }
    }

    pub fn cancel_all(&mut self) {
        if let Some(handle) = self.flip_back.take() {
            debug!("Cancelling pending flip-back");
            handle.abort();
        }
        self.stop_clock();
    }

    /// Generation the running clock ticks for, if any.
    pub fn clock_generation(&self) -> Option<u64> {
        self.clock.as_ref().map(|c| c.generation)
    }

    pub fn flip_back_pending(&self) -> bool {
        self.flip_back.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn stop_clock(&mut self) {
        if let Some(clock) = self.clock.take() {
            debug!("Stopping clock (generation={})", clock.generation);
            clock.handle.abort();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Run one action through the reducer and arrange whatever it asks for.
///
/// Every action in the event loop goes through here, so the clock is
/// reconciled after each state change.
pub fn dispatch(
    app: &mut App,
    action: Action,
    scheduler: &mut Scheduler,
    tx: &Sender<Action>,
) -> Effect {
    let effect = update(app, action);
    match effect {
        Effect::ScheduleFlipBack { generation } => {
            scheduler.schedule_flip_back(generation, MISMATCH_DELAY, tx.clone());
        }
        Effect::CancelDeferred => scheduler.cancel_all(),
        Effect::None | Effect::Quit => {}
    }
    scheduler.sync_clock(&app.session, tx);
    effect
}
