//! Thread-shared cart handle.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::cart::CartStore;

/// A cart shared between threads, guarded by one lock per cart.
#[derive(Debug, Clone, Default)]
pub struct SharedCartStore {
    inner: Arc<Mutex<CartStore>>,
}

impl SharedCartStore {
    /// Wrap a cart for sharing.
    pub fn new(cart: CartStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cart)),
        }
    }

    /// Run `f` with exclusive access to the cart.
    ///
    /// A poisoned lock is recovered: cart mutations are all-or-nothing, so
    /// the state behind it is still valid.
    pub fn with<R>(&self, f: impl FnOnce(&mut CartStore) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    /// Clone the current state.
    pub fn snapshot(&self) -> CartStore {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, CartStore> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductListing;
    use std::thread;

    #[test]
    fn test_concurrent_increments() {
        let shared = SharedCartStore::new(CartStore::new());
        shared
            .with(|cart| cart.add_listing(&ProductListing::new("Fern", "", "$5.00"), 1))
            .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..10 {
                        shared.with(|cart| cart.increment_quantity("Fern")).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let cart = shared.snapshot();
        assert_eq!(cart.quantity_of("Fern"), Some(81));
        assert_eq!(cart.cart_total().unwrap().display_amount(), "405.00");
    }
}
