//! Logging shims over the `log` facade.
//!
//! With the `logging` feature the macros forward to `log`; without it they
//! compile to nothing while still type-checking their arguments.

#[cfg(feature = "logging")]
macro_rules! board_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "chess_match", $($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! board_debug {
    ($($arg:tt)+) => {{
        if false {
            let _ = ::std::format!($($arg)+);
        }
    }};
}

#[cfg(feature = "logging")]
macro_rules! board_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "chess_match", $($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! board_warn {
    ($($arg:tt)+) => {{
        if false {
            let _ = ::std::format!($($arg)+);
        }
    }};
}

pub(crate) use board_debug;
pub(crate) use board_warn;
