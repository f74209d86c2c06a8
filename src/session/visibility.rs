/// Lifecycle of the chat window.
///
/// `Closed` and `Open` are the resting states; `Closing` is the window still
/// mounted but playing its exit animation, waiting for the controller's
/// deferred finish. The split between "mounted" and "visible" exists so the
/// presentation layer can animate out before the window is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPhase {
    #[default]
    Closed,
    Open,
    Closing,
}

impl WindowPhase {
    /// Whether the window exists in the UI at all (mounted)
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Whether the window is shown (false while the exit animation plays)
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether the exit animation is in flight
    pub fn is_closing(&self) -> bool {
        matches!(self, Self::Closing)
    }

    /// Move to `Open`. Idempotent when already open; from `Closing` the
    /// caller must also cancel the pending deferred close.
    pub fn open(&mut self) {
        *self = Self::Open;
    }

    /// Start closing. Returns true when a deferred `finish_close` must be
    /// scheduled; re-entrant closes and closes while closed are no-ops.
    pub fn begin_close(&mut self) -> bool {
        match self {
            Self::Open => {
                *self = Self::Closing;
                true
            }
            Self::Closing | Self::Closed => false,
        }
    }

    /// Complete a close once the exit animation has had its time
    pub fn finish_close(&mut self) {
        if matches!(self, Self::Closing) {
            *self = Self::Closed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase_is_closed() {
        let phase = WindowPhase::default();
        assert!(!phase.is_open());
        assert!(!phase.is_visible());
        assert!(!phase.is_closing());
    }

    #[test]
    fn test_open_close_cycle() {
        let mut phase = WindowPhase::default();

        phase.open();
        assert!(phase.is_open());
        assert!(phase.is_visible());

        // Visibility drops immediately, the window stays mounted
        assert!(phase.begin_close());
        assert!(phase.is_open());
        assert!(!phase.is_visible());
        assert!(phase.is_closing());

        phase.finish_close();
        assert!(!phase.is_open());
        assert!(!phase.is_visible());
    }

    #[test]
    fn test_reopen_is_idempotent() {
        let mut phase = WindowPhase::default();
        phase.open();
        phase.open();
        assert!(phase.is_open());
        assert!(phase.is_visible());
    }

    #[test]
    fn test_close_while_closing_schedules_nothing() {
        let mut phase = WindowPhase::default();
        phase.open();
        assert!(phase.begin_close());
        assert!(!phase.begin_close());
        assert!(phase.is_closing());
    }

    #[test]
    fn test_close_while_closed_is_noop() {
        let mut phase = WindowPhase::default();
        assert!(!phase.begin_close());
        assert!(!phase.is_open());
    }

    #[test]
    fn test_reopen_during_closing_recovers() {
        let mut phase = WindowPhase::default();
        phase.open();
        phase.begin_close();

        phase.open();
        assert!(phase.is_open());
        assert!(phase.is_visible());

        // A stale finish after the reopen must not close the window
        phase.finish_close();
        assert!(phase.is_open());
    }
}
