use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared position in a credential pool.
///
/// Owned explicitly and handed around as an `Arc` so separate pools (and
/// tests) never share hidden global state. Concurrent callers may race; the
/// cursor only ever holds a whole index.
#[derive(Debug, Default)]
pub struct RotationCursor(AtomicUsize);

impl RotationCursor {
    pub fn new() -> Self {
        Self(AtomicUsize::new(0))
    }

    pub fn current(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0.load(Ordering::Acquire) % len
    }

    /// Moves the cursor past `observed` unless another caller already moved
    /// it. Returns whether this call advanced it.
    pub fn advance(&self, observed: usize, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        self.0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |raw| {
                (raw % len == observed).then_some((observed + 1) % len)
            })
            .is_ok()
    }
}
