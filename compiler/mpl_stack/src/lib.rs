//! Stack growth guard for recursive passes.
//!
//! Parenthesized expressions and nested `for`/`if` blocks recurse once per
//! level in the parser, the type checker and the interpreter. Each recursive
//! entry point runs under [`ensure_sufficient_stack`], so a pathologically
//! nested program fails (or succeeds) on its merits instead of overflowing
//! the native stack.
//!
//! On native targets the stack is grown with `stacker`; on `wasm32` the
//! guard is a passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
