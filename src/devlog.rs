//! Logging shims over the `log` facade.
//!
//! With the `log` feature disabled every macro expands to nothing, so the hot
//! paths of the buffer carry no logging cost in default builds.

#[cfg(feature = "log")]
macro_rules! rb_debug {
    ($($arg:tt)*) => {
        ::log::debug!(target: "ring_buffer", $($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! rb_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! rb_trace {
    ($($arg:tt)*) => {
        ::log::trace!(target: "ring_buffer", $($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! rb_trace {
    ($($arg:tt)*) => {};
}
