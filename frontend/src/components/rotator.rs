use leptos::*;

use crate::state::rotation::Rotation;

#[cfg(target_arch = "wasm32")]
struct RotationTimer(#[allow(dead_code)] gloo_timers::callback::Interval);

#[cfg(target_arch = "wasm32")]
impl RotationTimer {
    fn start(interval_ms: u32, on_tick: impl FnMut() + 'static) -> Self {
        Self(gloo_timers::callback::Interval::new(interval_ms, on_tick))
    }
}

/// Host builds have no event loop to drive an interval; tests call
/// `RotatingSelector::tick` instead.
#[cfg(not(target_arch = "wasm32"))]
struct RotationTimer;

#[cfg(not(target_arch = "wasm32"))]
impl RotationTimer {
    fn start(_interval_ms: u32, _on_tick: impl FnMut() + 'static) -> Self {
        Self
    }
}

#[derive(Default)]
struct TimerSlot {
    timer: Option<RotationTimer>,
    disposed: bool,
}

/// Reactive handle over a [`Rotation`] plus the interval that advances it.
/// Dropping the interval cancels it, so `dispose` only has to take it out
/// of the slot.
pub struct RotatingSelector<T: 'static> {
    rotation: RwSignal<Rotation<T>>,
    slot: StoredValue<TimerSlot>,
    interval_ms: u32,
}

impl<T: 'static> Clone for RotatingSelector<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RotatingSelector<T> {}

impl<T: Clone + 'static> RotatingSelector<T> {
    pub fn initialize(items: Vec<T>, interval_ms: u32) -> Self {
        let selector = Self {
            rotation: create_rw_signal(Rotation::new(items)),
            slot: store_value(TimerSlot::default()),
            interval_ms,
        };
        selector.ensure_timer();
        selector
    }

    fn ensure_timer(&self) {
        if self.interval_ms == 0 {
            return;
        }
        let needs_timer = self
            .rotation
            .try_with_untracked(Rotation::needs_timer)
            .unwrap_or(false);
        let rotation = self.rotation;
        let interval_ms = self.interval_ms;
        self.slot.try_update_value(|slot| {
            if slot.disposed || slot.timer.is_some() || !needs_timer {
                return;
            }
            slot.timer = Some(RotationTimer::start(interval_ms, move || {
                rotation.try_update(Rotation::advance);
            }));
        });
    }

    pub fn advance(&self) {
        self.rotation.try_update(Rotation::advance);
    }

    pub fn retreat(&self) {
        self.rotation.try_update(Rotation::retreat);
    }

    pub fn jump_to(&self, index: usize) {
        self.rotation.try_update(|rotation| rotation.jump_to(index));
    }

    /// Replaces the collection. A running timer keeps its cadence; a
    /// selector that had nothing to rotate starts one once it does.
    pub fn update_items(&self, items: Vec<T>) {
        self.rotation
            .try_update(|rotation| rotation.update_items(items));
        self.ensure_timer();
    }

    /// Stops the timer for good. Safe to call any number of times, also
    /// after the owning scope is gone.
    pub fn dispose(&self) {
        let timer = self
            .slot
            .try_update_value(|slot| {
                slot.disposed = true;
                slot.timer.take()
            })
            .flatten();
        drop(timer);
    }

    /// One interval firing. No-op unless a timer is running.
    #[cfg(test)]
    pub(crate) fn tick(&self) {
        if self.is_running() {
            self.advance();
        }
    }

    #[cfg(test)]
    pub(crate) fn is_running(&self) -> bool {
        self.slot
            .try_with_value(|slot| slot.timer.is_some())
            .unwrap_or(false)
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn current_index(&self) -> Option<usize> {
        self.rotation
            .try_with(Rotation::current_index)
            .flatten()
    }

    pub fn current_item(&self) -> Option<T> {
        self.rotation
            .try_with(|rotation| rotation.current().cloned())
            .flatten()
    }

    pub fn len(&self) -> usize {
        self.rotation.try_with(Rotation::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Selector tied to the current owner: its timer stops when the owning view
/// unmounts.
pub fn use_rotating_selector<T: Clone + 'static>(
    items: Vec<T>,
    interval_ms: u32,
) -> RotatingSelector<T> {
    let selector = RotatingSelector::initialize(items, interval_ms);
    on_cleanup(move || selector.dispose());
    selector
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn three_ticks_return_to_start() {
        with_runtime(|| {
            let selector = RotatingSelector::initialize(vec!["A", "B", "C"], 1000);
            assert!(selector.is_running());
            assert_eq!(selector.current_item(), Some("A"));
            selector.tick();
            assert_eq!(selector.current_item(), Some("B"));
            selector.tick();
            selector.tick();
            assert_eq!(selector.current_index(), Some(0));
        });
    }

    #[test]
    fn short_collections_get_no_timer() {
        with_runtime(|| {
            let empty: RotatingSelector<&str> = RotatingSelector::initialize(Vec::new(), 3000);
            assert!(!empty.is_running());
            empty.advance();
            empty.retreat();
            empty.tick();
            assert_eq!(empty.current_index(), None);
            assert!(empty.is_empty());

            let single = RotatingSelector::initialize(vec!["only"], 3000);
            assert!(!single.is_running());
            single.tick();
            assert_eq!(single.current_index(), Some(0));
        });
    }

    #[test]
    fn manual_navigation_and_out_of_range_jump() {
        with_runtime(|| {
            let selector = RotatingSelector::initialize(vec![10, 20, 30], 4000);
            selector.retreat();
            assert_eq!(selector.current_item(), Some(30));
            selector.jump_to(5);
            assert_eq!(selector.current_index(), Some(2));
            selector.jump_to(1);
            assert_eq!(selector.current_item(), Some(20));
        });
    }

    #[test]
    fn update_items_keeps_running_timer_and_clamps_index() {
        with_runtime(|| {
            let selector = RotatingSelector::initialize(vec!["A", "B", "C"], 1000);
            selector.jump_to(2);
            selector.update_items(Vec::new());
            assert_eq!(selector.current_index(), None);
            assert!(selector.is_running());
            selector.tick();
            assert_eq!(selector.current_index(), None);
        });
    }

    #[test]
    fn update_items_starts_timer_once_there_is_something_to_rotate() {
        with_runtime(|| {
            let selector = RotatingSelector::initialize(Vec::new(), 5000);
            assert!(!selector.is_running());
            selector.update_items(vec!["A", "B"]);
            assert!(selector.is_running());
            assert_eq!(selector.current_index(), Some(0));
        });
    }

    #[test]
    fn dispose_is_idempotent_and_final() {
        with_runtime(|| {
            let selector = RotatingSelector::initialize(vec!["A", "B", "C"], 1000);
            selector.dispose();
            selector.dispose();
            assert!(!selector.is_running());
            selector.tick();
            assert_eq!(selector.current_index(), Some(0));

            selector.update_items(vec!["X", "Y"]);
            assert!(!selector.is_running());
        });
    }

    #[test]
    fn selectors_are_independent() {
        with_runtime(|| {
            let news = RotatingSelector::initialize(vec![1, 2, 3], 4000);
            let ads = RotatingSelector::initialize(vec![1, 2], 5000);
            news.tick();
            news.tick();
            assert_eq!(news.current_index(), Some(2));
            assert_eq!(ads.current_index(), Some(0));
            assert_eq!(ads.interval_ms(), 5000);
        });
    }

    #[test]
    fn dispose_after_runtime_teardown_does_not_panic() {
        let runtime = create_runtime();
        let selector = use_rotating_selector(vec!["A", "B"], 1000);
        runtime.dispose();
        selector.dispose();
        assert!(!selector.is_running());
        assert_eq!(selector.current_index(), None);
    }
}
