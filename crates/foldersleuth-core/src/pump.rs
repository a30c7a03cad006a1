/// Event pump — the reporting thread's side of the update channel.
///
/// Each cycle drains everything queued and hands it, in order, to a
/// [`ScanReporter`], then sleeps for the poll interval. The reporter's owner
/// decides when the scan is over; the pump only stops by itself once the
/// scan thread is gone and nothing is left to deliver.
use crate::channel::UpdateReceiver;
use crate::model::ScanResult;
use crate::scanner::progress::{ProgressEvent, ScanEvent};
use std::time::Duration;
use tracing::warn;

/// Poll interval between drain cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Longest interval accepted; anything slower makes progress feel stale.
pub const MAX_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Receives dispatched scan events on the reporting thread.
///
/// Implementors own all presentation state. Events arrive in exactly the
/// order the scanner produced them.
pub trait ScanReporter {
    fn on_progress(&mut self, progress: &ProgressEvent);
    fn on_result(&mut self, result: &ScanResult);
    fn on_error(&mut self, message: &str);
}

/// Drains an [`UpdateReceiver`] on a fixed interval.
#[derive(Debug)]
pub struct EventPump {
    receiver: UpdateReceiver,
    interval: Duration,
}

impl EventPump {
    pub fn new(receiver: UpdateReceiver) -> Self {
        Self {
            receiver,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the poll interval. Clamped to [`MAX_POLL_INTERVAL`]; a zero
    /// interval is raised to 1 ms so the loop never spins.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.clamp(Duration::from_millis(1), MAX_POLL_INTERVAL);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One cycle: drain all queued events and dispatch them in order.
    ///
    /// Returns the number of events dispatched.
    pub fn pump_once<R: ScanReporter + ?Sized>(&mut self, reporter: &mut R) -> usize {
        let events = self.receiver.drain_all();
        let count = events.len();
        for event in events {
            dispatch(reporter, event);
        }
        count
    }

    /// Run cycles until `stop` returns `true` for the reporter, or until the
    /// scan thread has gone and every event it sent has been dispatched.
    ///
    /// `stop` is checked after every cycle; between cycles the thread sleeps
    /// for the poll interval. Returns whether `stop` was satisfied, so a
    /// caller can tell a finished scan from a scan thread that died early.
    pub fn run_until<R, F>(&mut self, reporter: &mut R, mut stop: F) -> bool
    where
        R: ScanReporter,
        F: FnMut(&R) -> bool,
    {
        loop {
            self.pump_once(reporter);
            if stop(reporter) {
                return true;
            }
            if self.receiver.is_disconnected() {
                warn!("Scan thread ended without a terminal event");
                return false;
            }
            std::thread::sleep(self.interval);
        }
    }

    /// `true` once the scan thread has gone and every event was delivered.
    pub fn is_disconnected(&self) -> bool {
        self.receiver.is_disconnected()
    }
}

fn dispatch<R: ScanReporter + ?Sized>(reporter: &mut R, event: ScanEvent) {
    match event {
        ScanEvent::Progress(progress) => reporter.on_progress(&progress),
        ScanEvent::Result(result) => reporter.on_result(&result),
        ScanEvent::Error { message } => reporter.on_error(&message),
    }
}
