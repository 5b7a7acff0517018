//! Crate-internal logging macros.
//!
//! On ARM these forward to `defmt` (RTT transport is chosen by the binary).
//! On the host they compile to nothing so the library stays testable without a
//! defmt global logger.

#[allow(unused_macros)]
macro_rules! log_debug {
    ($fmt:tt $(, $arg:expr)* $(,)?) => {{
        #[cfg(target_arch = "arm")]
        defmt::debug!($fmt $(, $arg)*);
        #[cfg(not(target_arch = "arm"))]
        {
            $(let _ = &$arg;)*
        }
    }};
}

#[allow(unused_macros)]
macro_rules! log_warn {
    ($fmt:tt $(, $arg:expr)* $(,)?) => {{
        #[cfg(target_arch = "arm")]
        defmt::warn!($fmt $(, $arg)*);
        #[cfg(not(target_arch = "arm"))]
        {
            $(let _ = &$arg;)*
        }
    }};
}
