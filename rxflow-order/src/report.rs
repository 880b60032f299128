use crate::manager::OrderManager;
use rxflow_core::Day;
use serde::Serialize;
use std::fmt;

/// Point-in-time summary of the queue, rendered as the text of a report file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub day: Day,
    pub total: usize,
    pub due_today: usize,
    pub overdue: usize,
    pub lines: Vec<String>,
}

impl Report {
    pub fn build(manager: &OrderManager, day: Day) -> Self {
        let all = manager.all_sorted();
        Self {
            day,
            total: all.len(),
            due_today: manager.due_today(day).len(),
            overdue: manager.overdue(day).len(),
            lines: all.iter().map(|o| o.render(day)).collect(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("report_day{}.txt", self.day)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Pharmacy Workflow Helper Report ===")?;
        writeln!(f, "Day: {}", self.day)?;
        writeln!(f)?;
        writeln!(f, "Totals:")?;
        writeln!(f, "  All orders: {}", self.total)?;
        writeln!(f, "  Due today:  {}", self.due_today)?;
        writeln!(f, "  Overdue:    {}", self.overdue)?;
        writeln!(f)?;
        writeln!(f, "--- Work Queue (sorted) ---")?;
        if self.lines.is_empty() {
            writeln!(f, "No orders.")?;
        }
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rxflow_core::{OrderId, Priority};

    fn seeded() -> OrderManager {
        let mut manager = OrderManager::new();
        manager.add_or_update(OrderId::parse("A1").unwrap(), Priority::Stat, "", 0);
        manager.add_or_update(OrderId::parse("B2").unwrap(), Priority::Routine, "refill", 0);
        manager.add_or_update(OrderId::parse("C3").unwrap(), Priority::Urgent, "", 1);
        manager
    }

    #[test]
    fn test_report_text() {
        let report = Report::build(&seeded(), 1);

        let expected = "\
=== Pharmacy Workflow Helper Report ===
Day: 1

Totals:
  All orders: 3
  Due today:  1
  Overdue:    1

--- Work Queue (sorted) ---
A1 | STAT | received Day 0 | due Day 0 | OVERDUE | notes: -
C3 | URGENT | received Day 1 | due Day 1 | DUE_TODAY | notes: -
B2 | ROUTINE | received Day 0 | due Day 2 | ON_TRACK | notes: refill
";
        assert_eq!(report.to_string(), expected);
        assert_eq!(report.file_name(), "report_day1.txt");
    }

    #[test]
    fn test_report_is_stable_for_unchanged_state() {
        let manager = seeded();
        assert_eq!(
            Report::build(&manager, 2).to_string(),
            Report::build(&manager, 2).to_string()
        );
    }

    #[test]
    fn test_empty_report() {
        let report = Report::build(&OrderManager::new(), 0);
        assert_eq!(report.total, 0);
        assert!(report.to_string().ends_with("--- Work Queue (sorted) ---\nNo orders.\n"));
    }
}
