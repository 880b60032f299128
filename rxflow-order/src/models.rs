use rxflow_core::{Day, OrderId, OrderStatus, Priority};
use serde::Serialize;

/// One active fulfillment request.
///
/// `due_day` is never stored independently of `(priority, received_day)`:
/// every mutation goes through [`Order::update`], which recomputes it.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    order_id: OrderId,
    priority: Priority,
    received_day: Day,
    due_day: Day,
    notes: String,
}

impl Order {
    pub fn new(order_id: OrderId, priority: Priority, received_day: Day, notes: &str) -> Self {
        Self {
            order_id,
            priority,
            received_day,
            due_day: priority.due_day(received_day),
            notes: notes.trim().to_string(),
        }
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn received_day(&self) -> Day {
        self.received_day
    }

    pub fn due_day(&self) -> Day {
        self.due_day
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Re-triage the order as of `current_day`.
    ///
    /// Blank `new_notes` keep the previous notes.
    pub fn update(&mut self, new_priority: Priority, new_notes: &str, current_day: Day) {
        self.received_day = current_day;
        self.priority = new_priority;
        self.due_day = new_priority.due_day(current_day);

        let trimmed = new_notes.trim();
        if !trimmed.is_empty() {
            self.notes = trimmed.to_string();
        }
    }

    pub fn status(&self, current_day: Day) -> OrderStatus {
        OrderStatus::classify(self.due_day, current_day)
    }

    /// Single-line summary used by every listing and by report files.
    pub fn render(&self, current_day: Day) -> String {
        format!(
            "{} | {} | received Day {} | due Day {} | {} | notes: {}",
            self.order_id,
            self.priority,
            self.received_day,
            self.due_day,
            self.status(current_day),
            if self.notes.is_empty() { "-" } else { &self.notes },
        )
    }
}
