/// Update channel — the only state shared between the scan thread and the
/// reporting thread.
///
/// Backed by an unbounded crossbeam channel. Event volume is bounded by the
/// number of files in the tree and each event is small, so the scanner never
/// waits on the reporting side. Every event is received exactly once: a push
/// racing a drain lands either in that drain or the next one.
use crate::scanner::progress::ScanEvent;
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::cell::Cell;

/// Create a connected sender/receiver pair.
pub fn update_channel() -> (UpdateSender, UpdateReceiver) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (
        UpdateSender { tx },
        UpdateReceiver {
            rx,
            disconnected: Cell::new(false),
        },
    )
}

/// Producer half, held by the scan thread.
#[derive(Debug, Clone)]
pub struct UpdateSender {
    tx: Sender<ScanEvent>,
}

impl UpdateSender {
    /// Enqueue an event. Never blocks.
    ///
    /// If the reporting side has gone away the event is discarded and the
    /// scan carries on to completion.
    pub fn push(&self, event: ScanEvent) {
        let _ = self.tx.send(event);
    }
}

/// Consumer half, held by the reporting thread.
#[derive(Debug)]
pub struct UpdateReceiver {
    rx: Receiver<ScanEvent>,
    /// Set by the first drain that finds the queue empty with no senders left.
    disconnected: Cell<bool>,
}

impl UpdateReceiver {
    /// Remove and return every event currently queued, oldest first.
    pub fn drain_all(&self) -> Vec<ScanEvent> {
        let mut events = Vec::with_capacity(self.pending());
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.disconnected.set(true);
                    break;
                }
            }
        }
        events
    }

    /// Number of events waiting to be drained.
    fn pending(&self) -> usize {
        self.rx.len()
    }

    /// `true` once a drain has found every sender dropped and nothing left
    /// to deliver. A scan thread that panicked shows up this way without
    /// ever sending a terminal event.
    pub fn is_disconnected(&self) -> bool {
        self.disconnected.get()
    }
}

/// Blocking iteration over the event stream.
///
/// Ends when the scan thread drops its sender, which it does right after the
/// scan's terminal event, so the stream is finite and cannot be restarted.
impl IntoIterator for UpdateReceiver {
    type Item = ScanEvent;
    type IntoIter = crossbeam_channel::IntoIter<ScanEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.rx.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::progress::ProgressEvent;

    fn progress(n: u64) -> ScanEvent {
        ScanEvent::Progress(ProgressEvent::new(n as f64, n, "t"))
    }

    #[test]
    fn test_drain_preserves_fifo_order() {
        let (tx, rx) = update_channel();
        for n in 0..5 {
            tx.push(progress(n));
        }
        assert_eq!(rx.pending(), 5);
        let drained = rx.drain_all();
        assert_eq!(drained, (0..5).map(progress).collect::<Vec<_>>());
        assert!(rx.drain_all().is_empty());
    }

    #[test]
    fn test_push_after_receiver_dropped_is_silent() {
        let (tx, rx) = update_channel();
        drop(rx);
        tx.push(progress(1));
    }

    #[test]
    fn test_disconnect_observed_by_drain() {
        let (tx, rx) = update_channel();
        tx.push(progress(1));
        assert_eq!(rx.drain_all().len(), 1);
        assert!(!rx.is_disconnected());
        drop(tx);
        assert!(!rx.is_disconnected());
        assert!(rx.drain_all().is_empty());
        assert!(rx.is_disconnected());
    }

    #[test]
    fn test_concurrent_pushes_are_neither_lost_nor_duplicated() {
        let (tx, rx) = update_channel();
        let producer = std::thread::spawn(move || {
            for n in 0..10_000 {
                tx.push(progress(n));
            }
        });

        let mut seen = Vec::new();
        loop {
            let finished = producer.is_finished();
            seen.extend(rx.drain_all());
            if finished && rx.pending() == 0 {
                break;
            }
            std::thread::yield_now();
        }
        producer.join().unwrap();
        seen.extend(rx.drain_all());

        assert_eq!(seen.len(), 10_000);
        for (i, ev) in seen.iter().enumerate() {
            assert_eq!(ev, &progress(i as u64));
        }
    }

    #[test]
    fn test_into_iter_ends_when_sender_dropped() {
        let (tx, rx) = update_channel();
        tx.push(progress(1));
        tx.push(progress(2));
        drop(tx);
        assert_eq!(rx.into_iter().count(), 2);
    }
}
