use crate::models::Order;
use rxflow_core::Priority;

/// Renders staff-facing instruction text for a single order.
///
/// Stateless; every script is a deterministic function of the order's
/// current fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptGenerator;

impl ScriptGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Shift-handoff line framed by urgency
    pub fn handoff_script(&self, order: &Order) -> String {
        let id = order.order_id();
        let body = match order.priority() {
            Priority::Stat => format!("STAT — DO FIRST: {} | Due: TODAY", id),
            Priority::Urgent => format!("URGENT — EOD SHIP: {} | Due: TODAY (overnight)", id),
            Priority::Routine => format!("ROUTINE: {} | Due: Day {}", id, order.due_day()),
        };
        with_notes(body, order)
    }

    pub fn compounding_script(&self, order: &Order) -> String {
        let body = format!(
            "COMPOUND: {} | Priority: {} | Due Day: {}",
            order.order_id(),
            order.priority(),
            order.due_day()
        );
        with_notes(body, order)
    }

    pub fn delivery_script(&self, order: &Order) -> String {
        let body = format!(
            "DELIVERY: {} | Due Day: {} | Type: {}",
            order.order_id(),
            order.due_day(),
            Self::ship_type(order.priority())
        );
        with_notes(body, order)
    }

    /// Handoff, compounding and delivery scripts, in that order.
    pub fn all_scripts(&self, order: &Order) -> [String; 3] {
        [
            self.handoff_script(order),
            self.compounding_script(order),
            self.delivery_script(order),
        ]
    }

    pub fn ship_type(priority: Priority) -> &'static str {
        match priority {
            Priority::Stat => "Same-day",
            Priority::Urgent => "Overnight",
            Priority::Routine => "Standard",
        }
    }
}

fn with_notes(mut body: String, order: &Order) -> String {
    if !order.notes().is_empty() {
        body.push_str(" | Notes: ");
        body.push_str(order.notes());
    }
    body
}
