//! Logging shims.
//!
//! Firmware builds log through `defmt`, host and emulator builds through
//! `tracing`. Format strings must stay within the subset both understand:
//! plain `{}` placeholders with `&str` or integer arguments.

macro_rules! nav_log {
    ($level:ident, $($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::$level!($($arg)*);
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)*);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

macro_rules! nav_trace {
    ($($arg:tt)*) => { nav_log!(trace, $($arg)*) };
}

macro_rules! nav_debug {
    ($($arg:tt)*) => { nav_log!(debug, $($arg)*) };
}

macro_rules! nav_warn {
    ($($arg:tt)*) => { nav_log!(warn, $($arg)*) };
}
