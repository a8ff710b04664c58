//! Bump allocator owning every AST node for one compile.

use bumpalo::Bump;

/// Default initial capacity, matching the reference implementation.
const DEFAULT_CAPACITY: usize = 4 * 1024 * 1024;

/// A single-lifetime bump region. All AST nodes produced by a parse live
/// here and are released together when the `Arena` is dropped; nothing is
/// freed individually.
pub struct Arena {
    bump: Bump,
}

impl Arena {
    pub fn new() -> Self {
        Arena::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocates `value` in the arena and returns a reference valid for the
    /// arena's lifetime.
    pub fn alloc<T>(&self, value: T) -> &T {
        self.bump.alloc(value)
    }

    /// Allocates a slice built from an iterator, for `Program`/`Scope`
    /// statement lists.
    pub fn alloc_slice<T, I>(&self, iter: I) -> &[T]
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.bump.alloc_slice_fill_iter(iter)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Arena::new()
    }
}
