use once_cell::unsync::OnceCell;

/// A compute-once slot backing a single accessor of a single extractor.
///
/// The slot is filled on first access and never recomputed. Wrap absent-able values as
/// `Memo<Option<T>>`; an empty slot and a slot holding `None` are different states.
///
/// Slots are not `Sync`. Extractors built on them must stay on one thread, or be put
/// behind a lock by the caller, for the compute-once guarantee to hold.
#[derive(Debug)]
pub struct Memo<T> {
    slot: OnceCell<T>,
}

impl<T> Memo<T> {
    pub const fn new() -> Self {
        Memo {
            slot: OnceCell::new(),
        }
    }

    /// Return the cached value, running `compute` only if the slot is still empty.
    pub fn get_or_compute<F>(&self, compute: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.slot.get_or_init(compute)
    }

    pub fn is_computed(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Memo::new()
    }
}
