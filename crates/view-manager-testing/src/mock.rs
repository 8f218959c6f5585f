//! Mock implementations of the toolkit and page traits.

use std::cell::{Cell, RefCell};
use std::sync::atomic::{AtomicU32, Ordering};

use view_manager::{DeleteHook, Page, Toolkit, Transition};

static NEXT_OBJ: AtomicU32 = AtomicU32::new(1);

/// Handle to a mock toolkit object. Unique for the whole test process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjId(pub u32);

impl ObjId {
    /// Allocate a fresh handle.
    pub fn next() -> Self {
        ObjId(NEXT_OBJ.fetch_add(1, Ordering::Relaxed))
    }
}

/// One `load_screen` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRecord {
    /// Object that became the active screen.
    pub obj: ObjId,
    /// Transition it was loaded with.
    pub transition: Transition,
}

/// Mock UI toolkit.
///
/// Loading a screen makes it active immediately; the previous screen stays
/// alive until [`finish_transitions`](Self::finish_transitions) runs, unless
/// the toolkit was built with [`immediate`](Self::immediate).
#[derive(Default)]
pub struct MockToolkit<'p> {
    screen: Option<ObjId>,
    outgoing: Vec<ObjId>,
    hooks: Vec<(ObjId, DeleteHook<'p, ObjId>)>,
    loads: Vec<LoadRecord>,
    deleted: Vec<ObjId>,
    immediate: bool,
}

impl<'p> MockToolkit<'p> {
    /// Toolkit that defers destruction of outgoing screens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toolkit whose transitions complete as soon as they start.
    pub fn immediate() -> Self {
        Self {
            immediate: true,
            ..Self::default()
        }
    }

    /// Currently displayed object.
    pub fn screen(&self) -> Option<ObjId> {
        self.screen
    }

    /// Every `load_screen` call, oldest first.
    pub fn loads(&self) -> &[LoadRecord] {
        &self.loads
    }

    /// Objects waiting for their transition to finish before destruction.
    pub fn pending_deletions(&self) -> &[ObjId] {
        &self.outgoing
    }

    /// Destroyed objects, in destruction order.
    pub fn deleted(&self) -> &[ObjId] {
        &self.deleted
    }

    /// Objects that have been loaded and not yet destroyed.
    pub fn live_objects(&self) -> Vec<ObjId> {
        self.outgoing.iter().copied().chain(self.screen).collect()
    }

    /// Number of registered delete hooks that have not fired.
    pub fn armed_hooks(&self) -> usize {
        self.hooks.len()
    }

    /// Complete every running transition, destroying the outgoing screens.
    pub fn finish_transitions(&mut self) {
        for obj in std::mem::take(&mut self.outgoing) {
            self.destroy(obj);
        }
    }

    /// Destroy `obj`, firing its delete hooks.
    pub fn destroy(&mut self, obj: ObjId) {
        self.outgoing.retain(|o| *o != obj);
        if self.screen == Some(obj) {
            self.screen = None;
        }
        while let Some(pos) = self.hooks.iter().position(|(id, _)| *id == obj) {
            let (_, hook) = self.hooks.swap_remove(pos);
            tracing::trace!(obj = obj.0, page = hook.page().name(), "firing delete hook");
            hook.fire(obj);
        }
        self.deleted.push(obj);
    }
}

impl<'p> Toolkit<'p> for MockToolkit<'p> {
    type Handle = ObjId;

    fn on_delete(&mut self, obj: &ObjId, hook: DeleteHook<'p, ObjId>) {
        self.hooks.push((*obj, hook));
    }

    fn load_screen(&mut self, obj: ObjId, transition: Transition) {
        self.loads.push(LoadRecord { obj, transition });
        if let Some(old) = self.screen.replace(obj) {
            self.outgoing.push(old);
        }
        if self.immediate {
            self.finish_transitions();
        }
    }
}

/// Mock page descriptor.
pub struct MockPage {
    name: &'static str,
    creates: Cell<u32>,
    failing: Cell<bool>,
    created: RefCell<Vec<ObjId>>,
    released: RefCell<Vec<ObjId>>,
}

impl MockPage {
    /// Page whose creation always succeeds.
    pub fn new(name: &'static str) -> Self {
        MockPage {
            name,
            creates: Cell::new(0),
            failing: Cell::new(false),
            created: RefCell::new(Vec::new()),
            released: RefCell::new(Vec::new()),
        }
    }

    /// Page whose creation fails until [`set_failing(false)`](Self::set_failing).
    pub fn failing(name: &'static str) -> Self {
        let page = Self::new(name);
        page.failing.set(true);
        page
    }

    /// Make future `create` calls fail or succeed.
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Number of `create` calls, including failed ones.
    pub fn create_calls(&self) -> u32 {
        self.creates.get()
    }

    /// Objects successfully created, oldest first.
    pub fn created(&self) -> Vec<ObjId> {
        self.created.borrow().clone()
    }

    /// Objects passed to `deinit`, in call order.
    pub fn released(&self) -> Vec<ObjId> {
        self.released.borrow().clone()
    }
}

impl Page<ObjId> for MockPage {
    fn create(&self) -> Option<ObjId> {
        self.creates.set(self.creates.get().saturating_add(1));
        if self.failing.get() {
            return None;
        }
        let obj = ObjId::next();
        self.created.borrow_mut().push(obj);
        Some(obj)
    }

    fn deinit(&self, page: ObjId) {
        self.released.borrow_mut().push(page);
    }

    fn name(&self) -> &str {
        self.name
    }
}
