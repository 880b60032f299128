use crate::manager::{AddOutcome, OrderError, OrderManager};
use crate::models::Order;
use rxflow_core::{Day, OrderId, Priority};
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle that serializes all access to one [`OrderManager`].
///
/// `add_or_update` observes and mutates under the same lock, so concurrent
/// adds of one id still produce a single record.
#[derive(Debug, Clone, Default)]
pub struct SharedOrderManager {
    inner: Arc<Mutex<OrderManager>>,
}

impl SharedOrderManager {
    pub fn new(manager: OrderManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    // Mutations are all-or-nothing, so a poisoned lock still guards a consistent manager.
    fn lock(&self) -> MutexGuard<'_, OrderManager> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add_or_update(
        &self,
        order_id: OrderId,
        priority: Priority,
        notes: &str,
        current_day: Day,
    ) -> AddOutcome {
        self.lock().add_or_update(order_id, priority, notes, current_day)
    }

    pub fn update_existing(
        &self,
        order_id: &str,
        priority: Priority,
        notes: &str,
        current_day: Day,
    ) -> Result<Order, OrderError> {
        self.lock()
            .update_existing(order_id, priority, notes, current_day)
            .cloned()
    }

    /// Snapshot of a single order
    pub fn find_order(&self, order_id: &str) -> Option<Order> {
        self.lock().find_order(order_id).cloned()
    }

    /// Snapshot of [`OrderManager::all_sorted`]
    pub fn all_sorted(&self) -> Vec<Order> {
        self.lock().all_sorted().into_iter().cloned().collect()
    }

    /// Run a read-only query while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&OrderManager) -> R) -> R {
        f(&self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
