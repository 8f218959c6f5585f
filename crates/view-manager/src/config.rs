//! Navigation configuration and defaults
//!
//! Central values for history depth and screen transitions. Firmware builds
//! usually keep the defaults; host builds can load a [`ManagerConfig`] from a
//! settings file with the `serde` feature.

/// Default number of pages remembered for back navigation.
pub const MAX_HISTORY_DEPTH: usize = 5;

/// Default transition duration in milliseconds.
pub const DEFAULT_ANIMATION_MS: u32 = 150;

/// Default transition animation.
pub const DEFAULT_LOAD_ANIM: LoadAnim = LoadAnim::FadeIn;

/// Screen load animation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadAnim {
    /// Swap immediately
    None,
    /// New screen slides over the old one from the right, moving left
    OverLeft,
    /// New screen slides over the old one moving right
    OverRight,
    /// New screen slides over the old one moving up
    OverTop,
    /// New screen slides over the old one moving down
    OverBottom,
    /// Both screens move left
    MoveLeft,
    /// Both screens move right
    MoveRight,
    /// Both screens move up
    MoveTop,
    /// Both screens move down
    MoveBottom,
    /// New screen fades in over the old one
    #[default]
    FadeIn,
    /// Old screen fades out revealing the new one
    FadeOut,
    /// Old screen slides out to the left
    OutLeft,
    /// Old screen slides out to the right
    OutRight,
    /// Old screen slides out upwards
    OutTop,
    /// Old screen slides out downwards
    OutBottom,
}

/// How the toolkit animates a screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Transition {
    /// Animation style.
    pub anim: LoadAnim,
    /// Animation length in milliseconds.
    pub duration_ms: u32,
    /// Delay before the animation starts, in milliseconds.
    pub delay_ms: u32,
}

impl Transition {
    /// Transition with the given style and duration and no delay.
    pub const fn new(anim: LoadAnim, duration_ms: u32) -> Self {
        Self {
            anim,
            duration_ms,
            delay_ms: 0,
        }
    }

    /// Swap screens without animation.
    pub const fn instant() -> Self {
        Self::new(LoadAnim::None, 0)
    }

    /// Same transition, started after `delay_ms`.
    #[must_use]
    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(DEFAULT_LOAD_ANIM, DEFAULT_ANIMATION_MS)
    }
}

/// Runtime settings of a [`ViewManager`](crate::ViewManager).
///
/// History capacity is a const generic on the manager, not part of this
/// struct, so it stays allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ManagerConfig {
    /// Transition used for every switch and back navigation.
    pub transition: Transition,
}

impl ManagerConfig {
    /// Config with a custom transition.
    pub const fn with_transition(transition: Transition) -> Self {
        Self { transition }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transition_is_fade_150ms() {
        let t = Transition::default();
        assert_eq!(t.anim, LoadAnim::FadeIn);
        assert_eq!(t.duration_ms, 150);
        assert_eq!(t.delay_ms, 0);
    }

    #[test]
    fn test_default_history_depth() {
        assert_eq!(MAX_HISTORY_DEPTH, 5);
    }

    #[test]
    fn test_instant_transition_has_no_duration() {
        let t = Transition::instant();
        assert_eq!(t.anim, LoadAnim::None);
        assert_eq!(t.duration_ms, 0);
    }

    #[test]
    fn test_with_delay_keeps_style() {
        let t = Transition::new(LoadAnim::MoveLeft, 300).with_delay(50);
        assert_eq!(t.anim, LoadAnim::MoveLeft);
        assert_eq!(t.duration_ms, 300);
        assert_eq!(t.delay_ms, 50);
    }

    #[test]
    fn test_manager_config_default_uses_default_transition() {
        assert_eq!(ManagerConfig::default().transition, Transition::default());
    }
}
