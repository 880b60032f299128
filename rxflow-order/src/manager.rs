use crate::models::Order;
use rxflow_core::{Day, OrderId, OrderStatus, Priority};
use rxflow_shared::Masked;
use std::cmp::Ordering;
use std::fmt;

/// Result of [`OrderManager::add_or_update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Updated,
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOutcome::Added => f.write_str("ADDED"),
            AddOutcome::Updated => f.write_str("UPDATED"),
        }
    }
}

/// Status-partitioned view of all orders for one day.
#[derive(Debug, Default)]
pub struct WorkQueue<'a> {
    pub due_today: Vec<&'a Order>,
    pub on_track: Vec<&'a Order>,
    pub overdue: Vec<&'a Order>,
}

impl WorkQueue<'_> {
    pub fn is_empty(&self) -> bool {
        self.due_today.is_empty() && self.on_track.is_empty() && self.overdue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.due_today.len() + self.on_track.len() + self.overdue.len()
    }
}

/// Owns every active order. At most one order exists per case-insensitive id.
///
/// Orders are kept in insertion order and looked up by linear scan; every
/// listing applies an explicit sort, so insertion order never leaks into output
/// except as the stable tiebreak of the due-today/overdue views.
#[derive(Debug, Default)]
pub struct OrderManager {
    orders: Vec<Order>,
}

impl OrderManager {
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Orders in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Case-insensitive exact match on the trimmed id.
    pub fn find_order(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.order_id().matches(order_id))
    }

    pub fn find_order_mut(&mut self, order_id: &str) -> Option<&mut Order> {
        self.orders.iter_mut().find(|o| o.order_id().matches(order_id))
    }

    /// Add if new, otherwise re-triage the existing record.
    pub fn add_or_update(
        &mut self,
        order_id: OrderId,
        priority: Priority,
        notes: &str,
        current_day: Day,
    ) -> AddOutcome {
        if let Some(existing) = self.find_order_mut(order_id.as_str()) {
            existing.update(priority, notes, current_day);
            tracing::info!(
                order_id = %existing.order_id(),
                %priority,
                due_day = existing.due_day(),
                notes = %Masked::new(notes),
                "order updated"
            );
            return AddOutcome::Updated;
        }

        let order = Order::new(order_id, priority, current_day, notes);
        tracing::info!(
            order_id = %order.order_id(),
            %priority,
            due_day = order.due_day(),
            notes = %Masked::new(notes),
            "order added"
        );
        self.orders.push(order);
        AddOutcome::Added
    }

    /// Re-triage an order that must already exist.
    pub fn update_existing(
        &mut self,
        order_id: &str,
        priority: Priority,
        notes: &str,
        current_day: Day,
    ) -> Result<&Order, OrderError> {
        let order = self
            .find_order_mut(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.trim().to_string()))?;

        order.update(priority, notes, current_day);
        tracing::info!(
            order_id = %order.order_id(),
            %priority,
            due_day = order.due_day(),
            "explicit update applied"
        );
        Ok(&*order)
    }

    /// Every order by `(due day, rank, lower-cased id)`.
    pub fn all_sorted(&self) -> Vec<&Order> {
        let mut sorted: Vec<&Order> = self.orders.iter().collect();
        sorted.sort_by(|a, b| {
            by_due_then_rank(a, b)
                .then_with(|| a.order_id().sort_key().cmp(&b.order_id().sort_key()))
        });
        sorted
    }

    pub fn due_today(&self, current_day: Day) -> Vec<&Order> {
        self.filtered(|o| o.due_day() == current_day)
    }

    pub fn overdue(&self, current_day: Day) -> Vec<&Order> {
        self.filtered(|o| current_day > o.due_day())
    }

    /// Partition [`Self::all_sorted`] by status. Due-today entries are
    /// additionally ordered by rank alone so STAT stays ahead of URGENT.
    pub fn work_queue(&self, current_day: Day) -> WorkQueue<'_> {
        let mut queue = WorkQueue::default();
        for order in self.all_sorted() {
            match order.status(current_day) {
                OrderStatus::DueToday => queue.due_today.push(order),
                OrderStatus::OnTrack => queue.on_track.push(order),
                OrderStatus::Overdue => queue.overdue.push(order),
            }
        }
        queue.due_today.sort_by_key(|o| o.priority().rank());
        tracing::debug!(
            day = current_day,
            due_today = queue.due_today.len(),
            on_track = queue.on_track.len(),
            overdue = queue.overdue.len(),
            "work queue built"
        );
        queue
    }

    fn filtered(&self, keep: impl Fn(&Order) -> bool) -> Vec<&Order> {
        let mut result: Vec<&Order> = self.orders.iter().filter(|o| keep(*o)).collect();
        result.sort_by(|a, b| by_due_then_rank(a, b));
        result
    }
}

fn by_due_then_rank(a: &Order, b: &Order) -> Ordering {
    a.due_day()
        .cmp(&b.due_day())
        .then_with(|| a.priority().rank().cmp(&b.priority().rank()))
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> OrderId {
        OrderId::parse(raw).unwrap()
    }

    fn ids(orders: &[&Order]) -> Vec<String> {
        orders.iter().map(|o| o.order_id().to_string()).collect()
    }

    #[test]
    fn test_add_then_update_keeps_one_record() {
        let mut manager = OrderManager::new();

        assert_eq!(manager.add_or_update(id("A1"), Priority::Stat, "", 0), AddOutcome::Added);
        assert_eq!(manager.add_or_update(id("a1"), Priority::Urgent, "", 0), AddOutcome::Updated);
        assert_eq!(manager.add_or_update(id(" A1 "), Priority::Routine, "", 1), AddOutcome::Updated);

        assert_eq!(manager.len(), 1);
        let order = manager.find_order("a1").unwrap();
        assert_eq!(order.order_id().as_str(), "A1");
        assert_eq!(order.priority(), Priority::Routine);
    }

    #[test]
    fn test_find_order_is_case_insensitive() {
        let mut manager = OrderManager::new();
        manager.add_or_update(id("Rx-55"), Priority::Urgent, "", 0);

        assert!(manager.find_order("rx-55").is_some());
        assert!(manager.find_order("  RX-55 ").is_some());
        assert!(manager.find_order("rx-5").is_none());
    }

    #[test]
    fn test_retriage_scenario() {
        let mut manager = OrderManager::new();
        manager.add_or_update(id("C3"), Priority::Urgent, "needs PA", 0);
        assert_eq!(manager.find_order("C3").unwrap().due_day(), 0);

        let outcome = manager.add_or_update(id("C3"), Priority::Routine, "", 1);

        assert_eq!(outcome, AddOutcome::Updated);
        let order = manager.find_order("C3").unwrap();
        assert_eq!(order.received_day(), 1);
        assert_eq!(order.due_day(), 3);
        assert_eq!(order.priority(), Priority::Routine);
        assert_eq!(order.notes(), "needs PA");
    }

    #[test]
    fn test_update_existing_unknown_id() {
        let mut manager = OrderManager::new();
        manager.add_or_update(id("A1"), Priority::Stat, "x", 0);

        let result = manager.update_existing("B9", Priority::Routine, "y", 1);

        assert!(matches!(result, Err(OrderError::NotFound(ref missing)) if missing == "B9"));
        assert_eq!(manager.len(), 1);
        let order = manager.find_order("A1").unwrap();
        assert_eq!(order.priority(), Priority::Stat);
        assert_eq!(order.notes(), "x");
    }

    #[test]
    fn test_update_existing_applies_notes_rule() {
        let mut manager = OrderManager::new();
        manager.add_or_update(id("A1"), Priority::Routine, "X", 0);

        let order = manager.update_existing("a1", Priority::Urgent, "", 2).unwrap();

        assert_eq!(order.notes(), "X");
        assert_eq!(order.due_day(), 2);
    }

    #[test]
    fn test_all_sorted_total_order() {
        let mut manager = OrderManager::new();
        manager.add_or_update(id("z9"), Priority::Routine, "", 0); // due 2
        manager.add_or_update(id("b2"), Priority::Urgent, "", 1); // due 1
        manager.add_or_update(id("A2"), Priority::Urgent, "", 1); // due 1
        manager.add_or_update(id("m1"), Priority::Stat, "", 1); // due 1
        manager.add_or_update(id("c1"), Priority::Stat, "", 0); // due 0

        let sorted = manager.all_sorted();

        assert_eq!(ids(&sorted), vec!["c1", "m1", "A2", "b2", "z9"]);
    }

    #[test]
    fn test_stat_order_due_same_day() {
        let mut manager = OrderManager::new();
        manager.add_or_update(id("A1"), Priority::Stat, "", 0);

        let order = manager.find_order("A1").unwrap();
        assert_eq!(order.due_day(), 0);
        assert_eq!(order.status(0), OrderStatus::DueToday);
    }

    #[test]
    fn test_all_sorted_unicode_ids_ignore_insertion_order() {
        let mut forward = OrderManager::new();
        let mut backward = OrderManager::new();

        for raw in ["AΣ", "Aς"] {
            forward.add_or_update(id(raw), Priority::Stat, "", 0);
        }
        for raw in ["Aς", "AΣ"] {
            backward.add_or_update(id(raw), Priority::Stat, "", 0);
        }

        assert_eq!(forward.len(), 2);
        assert_eq!(ids(&forward.all_sorted()), ids(&backward.all_sorted()));
    }

    #[test]
    fn test_all_sorted_ignores_insertion_order() {
        let mut forward = OrderManager::new();
        let mut backward = OrderManager::new();
        let entries = [
            ("d", Priority::Routine),
            ("B", Priority::Stat),
            ("a", Priority::Stat),
            ("C", Priority::Urgent),
        ];

        for (raw, p) in entries {
            forward.add_or_update(id(raw), p, "", 0);
        }
        for (raw, p) in entries.iter().rev() {
            backward.add_or_update(id(raw), *p, "", 0);
        }

        assert_eq!(ids(&forward.all_sorted()), ids(&backward.all_sorted()));
        assert_eq!(ids(&forward.all_sorted()), vec!["a", "B", "C", "d"]);
    }

    #[test]
    fn test_due_today_and_overdue_filters() {
        let mut manager = OrderManager::new();
        manager.add_or_update(id("A1"), Priority::Stat, "", 0); // due 0
        manager.add_or_update(id("B2"), Priority::Routine, "", 0); // due 2
        manager.add_or_update(id("U1"), Priority::Urgent, "", 2); // due 2
        manager.add_or_update(id("S1"), Priority::Stat, "", 2); // due 2

        assert_eq!(ids(&manager.due_today(2)), vec!["S1", "U1", "B2"]);
        assert_eq!(ids(&manager.overdue(2)), vec!["A1"]);
        assert!(manager.due_today(1).is_empty());
        assert_eq!(ids(&manager.overdue(3)), vec!["A1", "S1", "U1", "B2"]);
    }

    #[test]
    fn test_work_queue_partitions() {
        let mut manager = OrderManager::new();
        manager.add_or_update(id("old"), Priority::Stat, "", 0); // due 0
        manager.add_or_update(id("r1"), Priority::Routine, "", 1); // due 3
        manager.add_or_update(id("u1"), Priority::Urgent, "", 1); // due 1
        manager.add_or_update(id("s1"), Priority::Stat, "", 1); // due 1

        let queue = manager.work_queue(1);

        assert_eq!(ids(&queue.due_today), vec!["s1", "u1"]);
        assert_eq!(ids(&queue.on_track), vec!["r1"]);
        assert_eq!(ids(&queue.overdue), vec!["old"]);
        assert_eq!(queue.len(), manager.len());
    }

    #[test]
    fn test_empty_manager_views() {
        let manager = OrderManager::new();
        assert!(manager.is_empty());
        assert!(manager.all_sorted().is_empty());
        assert!(manager.work_queue(0).is_empty());
    }
}
