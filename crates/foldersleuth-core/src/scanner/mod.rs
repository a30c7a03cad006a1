/// Scanner module — runs a scan on a background thread.
///
/// The scan thread runs the whole pipeline sequentially:
/// - [`counter`] counts files once to fix the progress denominator.
/// - [`accumulator`] sizes each immediate subdirectory in turn.
/// - [`orchestrator`] ties the two together and emits the result.
///
/// All output travels through the update channel; the thread never waits on
/// the reporting side.
pub mod accumulator;
pub mod counter;
pub mod orchestrator;
pub mod progress;

use crate::channel::{update_channel, UpdateReceiver};
use crate::error::ScanError;
use crate::model::ScanRequest;
use crate::pump::EventPump;
use std::path::{Path, PathBuf};
use std::thread;

/// Handle to a running or completed scan.
///
/// There is no cancellation: once started, a scan runs to its terminal
/// event. Dropping the handle simply discards whatever is still to come.
pub struct ScanHandle {
    /// Receiver for events from the scan thread.
    pub events: UpdateReceiver,
    root: PathBuf,
    /// Join handle for the scan thread.
    _thread: Option<thread::JoinHandle<()>>,
}

impl ScanHandle {
    /// The root being scanned.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Consume the handle as a blocking, finite event stream.
    pub fn into_events(self) -> crossbeam_channel::IntoIter<crate::ScanEvent> {
        self.events.into_iter()
    }

    /// Consume the handle into a pump for fixed-interval draining.
    pub fn into_pump(self) -> EventPump {
        EventPump::new(self.events)
    }
}

/// Start a new scan on a background thread.
///
/// Returns immediately. The only synchronous failure is being unable to
/// spawn the thread; problems with the root itself arrive later as an
/// `Error` event.
pub fn start_scan(request: ScanRequest) -> Result<ScanHandle, ScanError> {
    let (sender, events) = update_channel();
    let root = request.root().to_path_buf();

    let thread = thread::Builder::new()
        .name("foldersleuth-scanner".into())
        .spawn(move || {
            orchestrator::run_scan(&request, &sender);
        })
        .map_err(ScanError::Spawn)?;

    Ok(ScanHandle {
        events,
        root,
        _thread: Some(thread),
    })
}
