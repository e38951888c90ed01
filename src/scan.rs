//! Keeping stale scan results from being applied.
//!
//! OCR completes off the main thread and reports back whenever it's
//! done.  Only one scan's results may be live at a time: a newer capture
//! supersedes everything before it, and a capture the user has discarded
//! supersedes itself.  Rather than threading a cancellation token
//! through the pipeline, we stamp each scan when it starts and check the
//! stamp when it completes: last writer wins, and anything stale is
//! dropped on arrival.

use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

/// A stamp identifying one in-flight scan.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanTicket {
    id: u64,
}

/// The liveness guard for scan results.
///
/// Call [`ScanGate::begin`] when a capture starts a scan, and
/// [`ScanGate::is_live`] with the scan's ticket when its results arrive;
/// apply the results only on `true`.  Lock-free and usable from any
/// thread.
#[derive(Debug, Default)]
pub struct ScanGate {
    current: AtomicU64,
}

impl ScanGate {
    /// Create a gate with no scans started.
    pub fn new() -> ScanGate {
        ScanGate::default()
    }

    /// Stamp a new scan.  Every earlier ticket becomes stale.
    pub fn begin(&self) -> ScanTicket {
        let id = self.current.fetch_add(1, Ordering::AcqRel) + 1;
        ScanTicket { id }
    }

    /// Mark every in-flight scan stale without starting a new one:
    /// the user discarded the capture and went back to live preview.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::AcqRel);
    }

    /// May this scan's results still be applied?  Logs and returns
    /// `false` for a scan that has been superseded or invalidated.
    pub fn is_live(&self, ticket: &ScanTicket) -> bool {
        let live = self.current.load(Ordering::Acquire) == ticket.id;
        if !live {
            debug!("dropping stale scan {}", ticket.id);
        }
        live
    }
}
