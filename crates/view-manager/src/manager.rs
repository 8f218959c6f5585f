//! Navigation controller — one live screen, bounded back history.
//!
//! Switching never keeps the outgoing screen around: the new page is created
//! and handed to the toolkit's transition, which destroys the old one once the
//! animation finishes. History stores descriptors only, so going back rebuilds
//! the previous page from scratch.
//!
//! Every failure is a silent no-op for [`ViewManager::switch_to`] and
//! [`ViewManager::back`]: the UI stays on the current screen rather than
//! showing a blank or half-built one. Use the `try_` variants to learn why a
//! request was ignored.

use crate::config::{ManagerConfig, MAX_HISTORY_DEPTH};
use crate::error::NavError;
use crate::history::History;
use crate::page::{same_page, Page};
use crate::toolkit::{DeleteHook, Toolkit};

/// Navigation controller owning the toolkit handle.
///
/// `N` is the history capacity.
pub struct ViewManager<'p, T: Toolkit<'p>, const N: usize = { MAX_HISTORY_DEPTH }> {
    toolkit: T,
    config: ManagerConfig,
    current: Option<&'p dyn Page<T::Handle>>,
    history: History<'p, T::Handle, N>,
}

impl<'p, T: Toolkit<'p>, const N: usize> ViewManager<'p, T, N> {
    /// Create a manager with the default configuration.
    ///
    /// The manager starts with no active page and an empty history.
    pub fn new(toolkit: T) -> Self {
        Self::with_config(toolkit, ManagerConfig::default())
    }

    /// Create a manager with a custom configuration.
    pub fn with_config(toolkit: T, config: ManagerConfig) -> Self {
        ViewManager {
            toolkit,
            config,
            current: None,
            history: History::new(),
        }
    }

    /// Forget the active page and clear the history.
    ///
    /// The toolkit is not touched; whatever is on screen stays there until the
    /// next switch replaces it.
    pub fn init(&mut self) {
        self.current = None;
        self.history.clear();
        nav_debug!("view manager reset");
    }

    /// Switch to `page`, recording it in the history.
    ///
    /// Ignored when `page` cannot create objects, is already active, or fails
    /// to create its object.
    pub fn switch_to(&mut self, page: &'p dyn Page<T::Handle>) {
        if let Err(err) = self.try_switch_to(page) {
            nav_debug!("switch to {} ignored: {}", page.name(), err.as_str());
        }
    }

    /// Return to the previous page in the history.
    ///
    /// Ignored when fewer than two pages are recorded or the previous page
    /// fails to create its object.
    pub fn back(&mut self) {
        if let Err(err) = self.try_back() {
            nav_debug!("back ignored: {}", err.as_str());
        }
    }

    /// Fallible form of [`switch_to`](Self::switch_to).
    ///
    /// On error no state has changed.
    pub fn try_switch_to(&mut self, page: &'p dyn Page<T::Handle>) -> Result<(), NavError> {
        if !page.can_create() {
            return Err(NavError::NotCreatable);
        }
        if self.is_current(page) {
            return Err(NavError::AlreadyActive);
        }

        self.show(page)?;

        if let Some(evicted) = self.history.push(page) {
            nav_trace!("history full, evicted {}", evicted.name());
        }
        nav_debug!("switched to {} (depth {})", page.name(), self.history.len());
        Ok(())
    }

    /// Fallible form of [`back`](Self::back).
    ///
    /// On error no state has changed: a page popped before a failed creation
    /// is pushed back.
    pub fn try_back(&mut self) -> Result<(), NavError> {
        if self.history.len() < 2 {
            return Err(NavError::NoHistory);
        }
        let (Some(leaving), Some(target)) = (self.history.pop(), self.history.top()) else {
            return Err(NavError::NoHistory);
        };

        if let Err(err) = self.show(target) {
            self.history.push(leaving);
            return Err(err);
        }
        nav_debug!("back to {} (depth {})", target.name(), self.history.len());
        Ok(())
    }

    /// Create `page`'s object, hook its cleanup and transition to it.
    fn show(&mut self, page: &'p dyn Page<T::Handle>) -> Result<(), NavError> {
        let Some(obj) = page.create() else {
            nav_warn!("{} failed to create its screen", page.name());
            return Err(NavError::CreateFailed);
        };
        self.toolkit.on_delete(&obj, DeleteHook::new(page));
        self.toolkit.load_screen(obj, self.config.transition);
        self.current = Some(page);
        Ok(())
    }

    /// The active page, if any.
    #[must_use]
    pub fn current(&self) -> Option<&'p dyn Page<T::Handle>> {
        self.current
    }

    /// `true` if `page` is the active page.
    #[must_use]
    pub fn is_current(&self, page: &dyn Page<T::Handle>) -> bool {
        self.current.is_some_and(|current| same_page(current, page))
    }

    /// Recorded history, oldest first.
    #[must_use]
    pub fn history(&self) -> &History<'p, T::Handle, N> {
        &self.history
    }

    /// Number of recorded history entries.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// `true` if [`back`](Self::back) has a page to return to.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.history.len() >= 2
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Change the transition used from the next navigation on.
    pub fn set_config(&mut self, config: ManagerConfig) {
        self.config = config;
    }

    /// Shared access to the toolkit.
    #[must_use]
    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    /// Exclusive access to the toolkit, e.g. to drive its event loop.
    pub fn toolkit_mut(&mut self) -> &mut T {
        &mut self.toolkit
    }
}

#[cfg(test)]
mod tests {
    use super::ViewManager;
    use crate::config::{LoadAnim, ManagerConfig, Transition};
    use crate::error::NavError;
    use crate::page::{same_page, Page};
    use crate::toolkit::{DeleteHook, Toolkit};
    use std::cell::Cell;

    /// Toolkit that records loads and keeps hooks without ever firing them.
    #[derive(Default)]
    struct Recording<'p> {
        loads: Vec<(u32, Transition)>,
        hooks: Vec<(u32, DeleteHook<'p, u32>)>,
    }

    impl<'p> Toolkit<'p> for Recording<'p> {
        type Handle = u32;

        fn on_delete(&mut self, obj: &u32, hook: DeleteHook<'p, u32>) {
            self.hooks.push((*obj, hook));
        }

        fn load_screen(&mut self, obj: u32, transition: Transition) {
            self.loads.push((obj, transition));
        }
    }

    struct Counter {
        id: u32,
        creates: Cell<u32>,
        fail: Cell<bool>,
    }

    impl Counter {
        fn new(id: u32) -> Self {
            Counter {
                id,
                creates: Cell::new(0),
                fail: Cell::new(false),
            }
        }
    }

    impl Page<u32> for Counter {
        fn create(&self) -> Option<u32> {
            if self.fail.get() {
                return None;
            }
            self.creates.set(self.creates.get() + 1);
            Some(self.id)
        }
    }

    #[test]
    fn test_manager_starts_without_page() {
        let nav: ViewManager<'_, Recording<'_>> = ViewManager::new(Recording::default());
        assert!(nav.current().is_none());
        assert_eq!(nav.depth(), 0);
        assert!(!nav.can_go_back());
        assert_eq!(nav.history().capacity(), 5);
    }

    #[test]
    fn test_switch_loads_and_registers_hook() {
        let a = Counter::new(1);
        let mut nav: ViewManager<'_, Recording<'_>> = ViewManager::new(Recording::default());
        nav.switch_to(&a);

        assert!(nav.is_current(&a));
        assert_eq!(nav.toolkit().loads, vec![(1, Transition::default())]);
        assert_eq!(nav.toolkit().hooks.len(), 1);
        assert!(same_page(nav.toolkit().hooks[0].1.page(), &a));
    }

    #[test]
    fn test_try_switch_reports_reason() {
        let a = Counter::new(1);
        let mut nav: ViewManager<'_, Recording<'_>> = ViewManager::new(Recording::default());
        assert_eq!(nav.try_switch_to(&a), Ok(()));
        assert_eq!(nav.try_switch_to(&a), Err(NavError::AlreadyActive));
        assert_eq!(nav.try_back(), Err(NavError::NoHistory));
    }

    #[test]
    fn test_back_uses_configured_transition() {
        let a = Counter::new(1);
        let b = Counter::new(2);
        let slide = Transition::new(LoadAnim::MoveRight, 200);
        let mut nav: ViewManager<'_, Recording<'_>> =
            ViewManager::with_config(Recording::default(), ManagerConfig::with_transition(slide));
        nav.switch_to(&a);
        nav.switch_to(&b);
        nav.back();

        assert!(nav.is_current(&a));
        assert_eq!(nav.toolkit().loads.last(), Some(&(1, slide)));
        assert_eq!(a.creates.get(), 2);
    }

    #[test]
    fn test_failed_back_rolls_back_pop() {
        let a = Counter::new(1);
        let b = Counter::new(2);
        let mut nav: ViewManager<'_, Recording<'_>> = ViewManager::new(Recording::default());
        nav.switch_to(&a);
        nav.switch_to(&b);
        a.fail.set(true);

        assert_eq!(nav.try_back(), Err(NavError::CreateFailed));
        assert!(nav.is_current(&b));
        assert_eq!(nav.depth(), 2);
        assert!(same_page(nav.history().top().unwrap(), &b));
    }

    #[test]
    fn test_init_clears_state_but_not_screen() {
        let a = Counter::new(1);
        let b = Counter::new(2);
        let mut nav: ViewManager<'_, Recording<'_>> = ViewManager::new(Recording::default());
        nav.switch_to(&a);
        nav.switch_to(&b);
        nav.init();

        assert!(nav.current().is_none());
        assert_eq!(nav.depth(), 0);
        assert_eq!(nav.toolkit().loads.len(), 2);
    }

    #[test]
    fn test_custom_capacity() {
        let pages = [Counter::new(1), Counter::new(2), Counter::new(3)];
        let mut nav: ViewManager<'_, Recording<'_>, 2> = ViewManager::new(Recording::default());
        for page in &pages {
            nav.switch_to(page);
        }
        assert_eq!(nav.depth(), 2);
        assert!(same_page(nav.history().previous().unwrap(), &pages[1]));
    }
}
