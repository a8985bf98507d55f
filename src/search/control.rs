//! Cooperative cancellation and progress reporting.
//!
//! Wide skip ranges over long texts, and chain scans across many starts,
//! can run long enough that an interactive caller wants to abort or show
//! progress. Both hooks are checked at coarse granularity only, once per
//! skip value or start position, so the hot matching loop stays branch-free
//! of them. A cancelled scan returns the partial summary accumulated so
//! far; all scan state is call-local, so nothing is left corrupted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Progress snapshot delivered once per coarse scan unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    /// Coarse units completed so far.
    pub completed: usize,
    /// Total coarse units in this scan.
    pub total: usize,
}

/// Caller-supplied scan control.
#[derive(Default)]
pub struct ScanControl<'a> {
    /// Set from another thread (or a callback) to stop the scan after the
    /// current coarse unit.
    pub cancel: Option<Arc<AtomicBool>>,
    /// Invoked after each coarse unit completes.
    pub progress: Option<&'a mut dyn FnMut(ScanProgress)>,
}

impl<'a> ScanControl<'a> {
    /// A control that neither cancels nor reports.
    pub fn none() -> Self {
        Self::default()
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }

    pub(crate) fn report(&mut self, completed: usize, total: usize) {
        if let Some(progress) = self.progress.as_mut() {
            progress(ScanProgress { completed, total });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_never_cancels() {
        let control = ScanControl::none();
        assert!(!control.is_cancelled());
    }

    #[test]
    fn test_cancel_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let control = ScanControl {
            cancel: Some(Arc::clone(&flag)),
            progress: None,
        };
        assert!(!control.is_cancelled());
        flag.store(true, Ordering::Relaxed);
        assert!(control.is_cancelled());
    }

    #[test]
    fn test_progress_reports() {
        let mut seen = Vec::new();
        let mut record = |p: ScanProgress| seen.push((p.completed, p.total));
        let mut control = ScanControl {
            cancel: None,
            progress: Some(&mut record),
        };
        control.report(1, 3);
        control.report(2, 3);
        drop(control);
        assert_eq!(seen, vec![(1, 3), (2, 3)]);
    }
}
