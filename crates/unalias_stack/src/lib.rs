//! Stack growth for deeply nested alias expansion.
//!
//! Alias tables are supplied by the embedding application, so a chain like
//! `a0 -> [a1]`, `a1 -> [a2]`, ... can be arbitrarily long. Each link is one
//! level of recursion in the resolver; this crate keeps that recursion from
//! exhausting the native stack.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` allocates a fresh segment when the
//!   remaining stack drops below the red zone.
//! - **WASM targets**: passthrough.

/// Remaining stack below which a new segment is allocated (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// Wrap every recursive expansion step with this:
///
/// ```text
/// fn expand(&mut self, tokens: &[String]) {
///     with_stack_headroom(|| {
///         for token in tokens {
///             // ... may call self.expand(...) ...
///         }
///     });
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack_headroom<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_stack_headroom<R>(f: impl FnOnce() -> R) -> R {
    f()
}
