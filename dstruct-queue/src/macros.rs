// Forwards to `tracing::trace!` when the `tracing` feature is enabled and
// expands to nothing otherwise.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
