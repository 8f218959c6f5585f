//! Page descriptors — the unit of navigation history.
//!
//! A descriptor knows how to build one full-screen object and how to release
//! page-specific resources once the toolkit destroys that object. The manager
//! only ever borrows descriptors; history stores references, never objects.

/// A page type the [`ViewManager`](crate::ViewManager) can navigate to.
///
/// `H` is the toolkit's object handle type.
///
/// Descriptors are compared by reference, see [`same_page`].
pub trait Page<H> {
    /// Build a new page object, or `None` if creation failed.
    fn create(&self) -> Option<H>;

    /// Release page-specific resources tied to `page`.
    ///
    /// Called exactly once per created object, when the toolkit destroys it.
    fn deinit(&self, page: H) {
        let _ = page;
    }

    /// Whether this descriptor is able to create pages at all.
    ///
    /// The manager ignores descriptors that report `false`.
    fn can_create(&self) -> bool {
        true
    }

    /// Short label used in log output.
    fn name(&self) -> &str {
        "page"
    }
}

/// Returns `true` when `a` and `b` are the same descriptor.
///
/// Sized descriptors are identified by address alone. Zero-sized descriptors
/// may all share one address, so for them the vtable must match as well: two
/// unit-struct pages of different types are never the same page.
#[must_use]
#[allow(ambiguous_wide_pointer_comparisons)]
pub fn same_page<H>(a: &dyn Page<H>, b: &dyn Page<H>) -> bool {
    if !core::ptr::eq(addr(a), addr(b)) {
        return false;
    }
    // Vtables for one type may be duplicated across codegen units, so they
    // are only consulted when the address carries no information.
    core::mem::size_of_val(a) != 0 || core::ptr::eq(a, b)
}

fn addr<T: ?Sized>(r: &T) -> *const u8 {
    (r as *const T).cast()
}

/// Page descriptor built from plain function pointers.
///
/// Suited to `static` page tables on firmware targets:
///
/// ```
/// use view_manager::PageInfo;
///
/// fn build_home() -> Option<u32> {
///     Some(1)
/// }
///
/// static HOME: PageInfo<u32> = PageInfo::new("home", build_home);
/// ```
pub struct PageInfo<H> {
    name: &'static str,
    create: Option<fn() -> Option<H>>,
    deinit: Option<fn(H)>,
}

impl<H> PageInfo<H> {
    /// Descriptor with a creation function and no cleanup.
    pub const fn new(name: &'static str, create: fn() -> Option<H>) -> Self {
        Self {
            name,
            create: Some(create),
            deinit: None,
        }
    }

    /// Descriptor from optional parts. A descriptor without `create` is
    /// ignored by the manager.
    pub const fn from_parts(
        name: &'static str,
        create: Option<fn() -> Option<H>>,
        deinit: Option<fn(H)>,
    ) -> Self {
        Self {
            name,
            create,
            deinit,
        }
    }

    /// Attach a cleanup function.
    #[must_use]
    pub const fn with_deinit(mut self, deinit: fn(H)) -> Self {
        self.deinit = Some(deinit);
        self
    }
}

impl<H> Page<H> for PageInfo<H> {
    fn create(&self) -> Option<H> {
        self.create.and_then(|create| create())
    }

    fn deinit(&self, page: H) {
        if let Some(deinit) = self.deinit {
            deinit(page);
        }
    }

    fn can_create(&self) -> bool {
        self.create.is_some()
    }

    fn name(&self) -> &str {
        self.name
    }
}
