/// Handle of a running autoplay timer
pub trait TimerHandle {
    fn cancel(self);
}

/// Why autoplay is currently held back
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseReason {
    ModalOpen,
    PageHidden,
}

/// Owner of the single autoplay timer.
///
/// At most one handle is held at any time: every start cancels the previous
/// handle first. While any pause reason holds, starts are refused.
#[derive(Debug)]
pub struct AutoplayTimer<H: TimerHandle> {
    handle: Option<H>,
    modal_open: bool,
    page_hidden: bool,
}

impl<H: TimerHandle> Default for AutoplayTimer<H> {
    fn default() -> Self {
        Self {
            handle: None,
            modal_open: false,
            page_hidden: false,
        }
    }
}

impl<H: TimerHandle> AutoplayTimer<H> {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.modal_open || self.page_hidden
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }

    /// Cancels the current timer and starts a new one unless paused.
    /// Returns whether a timer is running afterwards.
    pub fn restart(&mut self, start: impl FnOnce() -> H) -> bool {
        self.stop();
        if self.is_paused() {
            log::debug!(
                "Autoplay held back (modal: {}, hidden: {})",
                self.modal_open,
                self.page_hidden
            );
            return false;
        }
        self.handle = Some(start());
        true
    }

    pub fn pause(&mut self, reason: PauseReason) {
        match reason {
            PauseReason::ModalOpen => self.modal_open = true,
            PauseReason::PageHidden => self.page_hidden = true,
        }
        self.stop();
    }

    /// Lifts `reason` and restarts the timer if nothing else holds it back
    pub fn resume(&mut self, reason: PauseReason, start: impl FnOnce() -> H) -> bool {
        match reason {
            PauseReason::ModalOpen => self.modal_open = false,
            PauseReason::PageHidden => self.page_hidden = false,
        }
        self.restart(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts live timers
    struct FakeTimer(Rc<Cell<i32>>);

    impl TimerHandle for FakeTimer {
        fn cancel(self) {
            self.0.set(self.0.get() - 1);
        }
    }

    fn starter(live: &Rc<Cell<i32>>) -> impl FnOnce() -> FakeTimer {
        let live = live.clone();
        move || {
            live.set(live.get() + 1);
            FakeTimer(live)
        }
    }

    #[test]
    fn test_restart_keeps_a_single_timer() {
        let live = Rc::new(Cell::new(0));
        let mut autoplay = AutoplayTimer::new();
        for _ in 0..5 {
            assert!(autoplay.restart(starter(&live)));
        }
        assert_eq!(live.get(), 1);
        autoplay.stop();
        assert_eq!(live.get(), 0);
        assert!(!autoplay.is_running());
    }

    #[test]
    fn test_modal_close_resumes_exactly_once() {
        let live = Rc::new(Cell::new(0));
        let mut autoplay = AutoplayTimer::new();
        autoplay.restart(starter(&live));

        autoplay.pause(PauseReason::ModalOpen);
        assert_eq!(live.get(), 0);
        // Manual navigation while the modal is open does not sneak a timer in
        assert!(!autoplay.restart(starter(&live)));
        assert_eq!(live.get(), 0);

        assert!(autoplay.resume(PauseReason::ModalOpen, starter(&live)));
        assert_eq!(live.get(), 1);
        assert!(autoplay.is_running());
    }

    #[test]
    fn test_visible_page_does_not_resume_under_open_modal() {
        let live = Rc::new(Cell::new(0));
        let mut autoplay = AutoplayTimer::new();
        autoplay.restart(starter(&live));

        autoplay.pause(PauseReason::ModalOpen);
        autoplay.pause(PauseReason::PageHidden);
        assert!(!autoplay.resume(PauseReason::PageHidden, starter(&live)));
        assert_eq!(live.get(), 0);

        assert!(autoplay.resume(PauseReason::ModalOpen, starter(&live)));
        assert_eq!(live.get(), 1);
    }
}
