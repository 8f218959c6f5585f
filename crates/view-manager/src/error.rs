//! Reasons a navigation request left the screen unchanged.

/// Navigation errors.
///
/// [`ViewManager::switch_to`](crate::ViewManager::switch_to) and
/// [`ViewManager::back`](crate::ViewManager::back) swallow these; the `try_`
/// variants return them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavError {
    /// Descriptor has no creation capability
    NotCreatable,
    /// Descriptor is already the active page
    AlreadyActive,
    /// Descriptor failed to create its page object
    CreateFailed,
    /// Fewer than two pages recorded
    NoHistory,
}

impl NavError {
    /// Short static description, usable in `defmt` and `tracing` output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotCreatable => "page cannot be created",
            Self::AlreadyActive => "page is already active",
            Self::CreateFailed => "page creation failed",
            Self::NoHistory => "no previous page",
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NavError {}

impl core::fmt::Display for NavError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
