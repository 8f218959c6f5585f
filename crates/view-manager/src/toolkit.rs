//! Toolkit seam — the UI library the manager drives.
//!
//! The manager never creates or destroys objects itself. It asks the toolkit
//! to display a freshly created page with a transition, and leaves the
//! destruction of the outgoing page to the toolkit, which may defer it until
//! the animation completes.

use crate::config::Transition;
use crate::page::Page;

/// One-shot cleanup token for a created page object.
///
/// Carries the descriptor that built the object. Firing consumes the hook, so
/// `deinit` can run at most once per registration.
pub struct DeleteHook<'p, H> {
    page: &'p dyn Page<H>,
}

impl<'p, H> DeleteHook<'p, H> {
    /// Hook that releases objects built by `page`.
    pub fn new(page: &'p dyn Page<H>) -> Self {
        Self { page }
    }

    /// The descriptor this hook belongs to.
    pub fn page(&self) -> &'p dyn Page<H> {
        self.page
    }

    /// Run the descriptor's cleanup for `obj`. Call when the toolkit destroys
    /// the object the hook was registered on.
    pub fn fire(self, obj: H) {
        self.page.deinit(obj);
    }
}

/// UI toolkit capabilities consumed by [`ViewManager`](crate::ViewManager).
///
/// All calls happen on the toolkit's single UI thread.
pub trait Toolkit<'p> {
    /// Opaque handle to a toolkit object.
    type Handle;

    /// Register `hook` to be fired exactly once, with `obj`, when the toolkit
    /// destroys `obj`.
    fn on_delete(&mut self, obj: &Self::Handle, hook: DeleteHook<'p, Self::Handle>);

    /// Display `obj` as the active screen using `transition`.
    ///
    /// The previously displayed screen must be destroyed automatically once
    /// the transition completes.
    fn load_screen(&mut self, obj: Self::Handle, transition: Transition);
}
