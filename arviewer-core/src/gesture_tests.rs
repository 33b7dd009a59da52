#[cfg(test)]
mod tests {
    use crate::assets::{AssetCatalog, AssetVariant};
    use crate::gesture::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    const IDLE: &str = "/base_basic_shaded_idle.glb";
    const ACTIVE: &str = "/base_basic_shaded_run.glb";
    const RESULT: &str = "/base_basic_shaded.glb";

    // Virtual clock standing in for setTimeout
    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: i32,
        pending: Vec<(TimerId, Duration)>,
        cancelled: Vec<TimerId>,
    }

    #[derive(Clone, Default)]
    struct ManualTimer(Rc<RefCell<Clock>>);

    impl ManualTimer {
        /// Move time forward and return the timers that came due
        fn advance(&self, by: Duration) -> Vec<TimerId> {
            let mut clock = self.0.borrow_mut();
            clock.now += by;
            let now = clock.now;
            let (due, rest): (Vec<_>, Vec<_>) =
                clock.pending.drain(..).partition(|(_, deadline)| *deadline <= now);
            clock.pending = rest;
            due.into_iter().map(|(id, _)| id).collect()
        }

        fn pending(&self) -> usize {
            self.0.borrow().pending.len()
        }

        fn cancelled(&self) -> Vec<TimerId> {
            self.0.borrow().cancelled.clone()
        }
    }

    impl PressTimer for ManualTimer {
        fn start(&mut self, delay: Duration) -> TimerId {
            let mut clock = self.0.borrow_mut();
            clock.next_id += 1;
            let id = TimerId(clock.next_id);
            let deadline = clock.now + delay;
            clock.pending.push((id, deadline));
            id
        }

        fn cancel(&mut self, id: TimerId) {
            let mut clock = self.0.borrow_mut();
            clock.pending.retain(|(pending, _)| *pending != id);
            clock.cancelled.push(id);
        }
    }

    #[derive(Clone, Default)]
    struct RecordingDisplay(Rc<RefCell<Vec<String>>>);

    impl RecordingDisplay {
        fn history(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    impl ModelDisplaySurface for RecordingDisplay {
        fn set_displayed_asset(&mut self, src: &str) {
            self.0.borrow_mut().push(src.to_string());
        }
    }

    type Controller = ModelGestureController<RecordingDisplay, ManualTimer>;

    fn controller() -> (Controller, RecordingDisplay, ManualTimer) {
        let display = RecordingDisplay::default();
        let timer = ManualTimer::default();
        let controller = ModelGestureController::new(
            display.clone(),
            timer.clone(),
            AssetCatalog::default(),
            Duration::from_millis(500),
        );
        (controller, display, timer)
    }

    fn advance(controller: &mut Controller, timer: &ManualTimer, ms: u64) {
        for id in timer.advance(Duration::from_millis(ms)) {
            controller.on_timer(id);
        }
    }

    // ===== Tap Tests =====

    #[test]
    fn test_short_press_shows_idle() {
        let (mut ctrl, display, timer) = controller();

        assert!(ctrl.press_start());
        assert_eq!(ctrl.state(), PressState::Pressing);
        advance(&mut ctrl, &timer, 200);
        assert_eq!(ctrl.press_end(), Some(AssetVariant::Idle));

        assert_eq!(display.history(), vec![IDLE]);
        assert_eq!(ctrl.state(), PressState::Idle);
        assert_eq!(timer.pending(), 0);
        assert_eq!(timer.cancelled().len(), 1);
    }

    #[test]
    fn test_tap_just_below_threshold() {
        let (mut ctrl, display, timer) = controller();

        ctrl.press_start();
        advance(&mut ctrl, &timer, 499);
        ctrl.press_end();
        advance(&mut ctrl, &timer, 1000);

        assert_eq!(display.history(), vec![IDLE]);
    }

    // ===== Long Press Tests =====

    #[test]
    fn test_long_press_switches_at_threshold_then_on_release() {
        let (mut ctrl, display, timer) = controller();

        ctrl.press_start();
        advance(&mut ctrl, &timer, 499);
        assert!(display.history().is_empty());

        advance(&mut ctrl, &timer, 1);
        assert_eq!(display.history(), vec![ACTIVE]);
        assert_eq!(ctrl.state(), PressState::LongPressConfirmed);
        assert!(ctrl.gesture().is_long_press);

        advance(&mut ctrl, &timer, 2000);
        assert_eq!(ctrl.press_end(), Some(AssetVariant::LongPressResult));
        assert_eq!(display.history(), vec![ACTIVE, RESULT]);
        // Timer already fired, nothing to cancel
        assert!(timer.cancelled().is_empty());
    }

    #[test]
    fn test_cycles_repeat() {
        let (mut ctrl, display, timer) = controller();

        ctrl.press_start();
        advance(&mut ctrl, &timer, 600);
        ctrl.press_end();

        ctrl.press_start();
        advance(&mut ctrl, &timer, 100);
        ctrl.press_end();

        assert_eq!(display.history(), vec![ACTIVE, RESULT, IDLE]);
        assert_eq!(ctrl.gesture(), GestureState::default());
    }

    // ===== Guard Tests =====

    #[test]
    fn test_repress_while_pressing_is_rejected() {
        let (mut ctrl, display, timer) = controller();

        assert!(ctrl.press_start());
        assert!(!ctrl.press_start());
        assert_eq!(ctrl.state(), PressState::Pressing);

        advance(&mut ctrl, &timer, 500);
        ctrl.press_end();
        assert_eq!(display.history(), vec![IDLE]);
    }

    #[test]
    fn test_repress_cancels_unfinished_cycle_timer() {
        let (mut ctrl, display, timer) = controller();

        ctrl.press_start();
        let first = ctrl.gesture().timer.unwrap();
        assert!(!ctrl.press_start());

        assert_eq!(timer.cancelled(), vec![first]);
        assert_eq!(timer.pending(), 0);
        assert_eq!(ctrl.gesture().timer, None);
        assert_eq!(ctrl.on_timer(first), None);
        advance(&mut ctrl, &timer, 100);
        assert!(display.history().is_empty());
    }

    #[test]
    fn test_repress_after_long_press_confirmed_is_rejected() {
        let (mut ctrl, display, timer) = controller();

        ctrl.press_start();
        advance(&mut ctrl, &timer, 500);
        assert!(!ctrl.press_start());
        assert!(timer.cancelled().is_empty());

        ctrl.press_end();
        assert_eq!(display.history(), vec![ACTIVE, RESULT]);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let (mut ctrl, display, _timer) = controller();
        assert_eq!(ctrl.press_end(), None);
        assert!(display.history().is_empty());
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let (mut ctrl, display, _timer) = controller();

        ctrl.press_start();
        let id = ctrl.gesture().timer.unwrap();
        ctrl.press_end();

        assert_eq!(ctrl.on_timer(id), None);
        assert_eq!(ctrl.on_timer(TimerId(999)), None);
        assert_eq!(display.history(), vec![IDLE]);
    }

    // ===== Teardown Tests =====

    #[test]
    fn test_detach_mid_press_cancels_timer() {
        let (mut ctrl, display, timer) = controller();

        ctrl.press_start();
        ctrl.detach();

        assert_eq!(timer.pending(), 0);
        assert_eq!(timer.cancelled().len(), 1);
        assert!(!ctrl.is_attached());
        advance(&mut ctrl, &timer, 1000);
        assert!(display.history().is_empty());
    }

    #[test]
    fn test_no_asset_change_after_detach() {
        let (mut ctrl, display, timer) = controller();
        ctrl.detach();

        assert!(!ctrl.press_start());
        advance(&mut ctrl, &timer, 1000);
        assert_eq!(ctrl.press_end(), None);
        assert!(display.history().is_empty());
    }

    #[test]
    fn test_threshold_from_config() {
        let mut config = crate::ViewerConfig::default();
        config.long_press_ms = 1000;
        let display = RecordingDisplay::default();
        let timer = ManualTimer::default();
        let mut ctrl = ModelGestureController::from_config(display.clone(), timer.clone(), &config);

        ctrl.press_start();
        advance(&mut ctrl, &timer, 600);
        ctrl.press_end();

        assert_eq!(display.history(), vec![IDLE]);
    }
}
