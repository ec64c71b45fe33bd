use alloc::vec::Vec;

use super::handle::Handle;

/// Append-only node store.
///
/// The tree never frees a node individually (there is no removal), so the
/// arena carries no free list: every slot is live, handles are dense
/// indices, and cloning the backing vector duplicates the whole structure
/// under the same handles. The only way out is [`Arena::clear`], which
/// tears every slot down at once.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<T>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity) }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        // Strict less-than keeps the slot count within Handle::MAX after the push.
        assert!(
            self.slots.len() < Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX
        );
        self.slots.push(element);
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        &self.slots[handle.to_index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        &mut self.slots[handle.to_index()]
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn with_capacity_preallocates() {
        let arena: Arena<u32> = Arena::with_capacity(10);
        assert_eq!(arena.capacity(), 10);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn clear_resets_handle_assignment() {
        let mut arena: Arena<u32> = Arena::new();
        let first = arena.alloc(7);
        arena.clear();
        assert_eq!(arena.len(), 0);
        let second = arena.alloc(9);
        assert_eq!(first, second);
        assert_eq!(*arena.get(second), 9);
    }

    proptest! {
        #[test]
        fn arena_behaves_like_vec(values in prop::collection::vec(any::<u32>(), 0..256)) {
            let mut model: Vec<(Handle, u32)> = Vec::new();
            let mut arena: Arena<u32> = Arena::new();

            for value in values {
                let handle = arena.alloc(value);
                model.push((handle, value));

                prop_assert_eq!(arena.len(), model.len());
                for &(handle, value) in &model {
                    prop_assert_eq!(*arena.get(handle), value);
                }
            }

            for (index, &(handle, _)) in model.iter().enumerate() {
                *arena.get_mut(handle) = index as u32;
            }
            for (index, &(handle, _)) in model.iter().enumerate() {
                prop_assert_eq!(*arena.get(handle), index as u32);
            }
        }
    }
}
