const RED_ZONE: usize = 64 * 1024;
const GROWTH_SIZE: usize = 1024 * 1024;

/// Runs `f`, switching to a freshly allocated stack segment first if fewer than `RED_ZONE` bytes
/// of the current one remain. Every recursive walk over a term goes through here, so nesting
/// depth is bounded by memory rather than by the thread's stack.
pub fn guarded<R, F: FnOnce() -> R>(f: F) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH_SIZE, f)
}
