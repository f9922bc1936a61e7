pub mod panic;
pub mod result;
#[cfg(test)]
pub mod testing;

/// Emits a `trace` record for an allocation event when the `alloc-trace` feature is enabled. The
/// arguments are not evaluated otherwise.
macro_rules! trace_alloc {
    ($($arg:tt)+) => {
        #[cfg(feature = "alloc-trace")]
        log::trace!(target: "simple_vector::alloc", $($arg)+);
    };
}

pub(crate) use trace_alloc;
