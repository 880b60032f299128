use crate::error::AppError;
use crate::state::Session;
use rxflow_core::{OrderId, Priority};
use rxflow_order::{AddOutcome, Order, Report};
use std::io::{self, BufRead, Write};

const MENU: &[&str] = &[
    "1) Add order (or update if ID exists)",
    "2) Update existing order",
    "3) View all orders (sorted)",
    "4) View work queue",
    "5) View DUE TODAY",
    "6) View OVERDUE",
    "7) Generate scripts for an order",
    "8) Advance day (+1)",
    "9) Save report",
    "0) Exit",
];

/// Line-oriented front end over a [`Session`].
///
/// Generic over its streams so a whole session can be driven from a byte
/// buffer in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
    session: Session,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, session: Session) -> Self {
        Self { input, output, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Pharmacy Workflow Helper ready. Add an order to begin.")?;
        writeln!(
            self.output,
            "Rules: STAT due today & first; URGENT due today (overnight); ROUTINE due in 2 days."
        )?;

        loop {
            self.print_menu()?;
            let choice = match self.prompt("Choose: ")? {
                Some(choice) => choice,
                None => break,
            };

            let result = match choice.as_str() {
                "1" => self.add_or_update_flow(),
                "2" => self.explicit_update_flow(),
                "3" => self.view_all_flow(),
                "4" => self.work_queue_flow(),
                "5" => self.due_today_flow(),
                "6" => self.overdue_flow(),
                "7" => self.scripts_flow(),
                "8" => self.advance_day_flow(),
                "9" => self.save_report_flow(),
                "0" => {
                    writeln!(self.output, "Goodbye.")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid option. Try again.")?;
                    Ok(())
                }
            };

            match result {
                Ok(()) => {}
                Err(err) if err.is_recoverable() => {
                    tracing::warn!(error = %err, "action rejected");
                    writeln!(self.output, "{}", err.user_message())?;
                }
                Err(AppError::Io(err)) => return Err(err),
                Err(_) => break,
            }
        }

        writeln!(self.output, "Goodbye.")?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Pharmacy Workflow Helper ===")?;
        writeln!(self.output, "Current Day: {}", self.session.current_day())?;
        for line in MENU {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    /// Prompt and read one trimmed line; `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn require(&mut self, text: &str) -> Result<String, AppError> {
        self.prompt(text)?.ok_or(AppError::InputClosed)
    }

    fn read_priority(&mut self) -> Result<Priority, AppError> {
        let raw = self.require("Enter priority (STAT / URGENT / ROUTINE): ")?;
        Ok(Priority::parse(&raw)?)
    }

    fn add_or_update_flow(&mut self) -> Result<(), AppError> {
        let order_id = OrderId::parse(&self.require("Enter order ID (non-PHI): ")?)?;
        let priority = self.read_priority()?;
        let notes = self.require("Notes (optional): ")?;

        let day = self.session.current_day();
        let outcome = self.session.manager.add_or_update(order_id.clone(), priority, &notes, day);
        match outcome {
            AddOutcome::Added => writeln!(self.output, "New order ADDED.")?,
            AddOutcome::Updated => writeln!(
                self.output,
                "Order existed — UPDATED (priority/notes/due day refreshed)."
            )?,
        }

        if let Some(order) = self.session.manager.find_order(order_id.as_str()) {
            writeln!(self.output, "{}", order.render(day))?;
        }
        Ok(())
    }

    fn explicit_update_flow(&mut self) -> Result<(), AppError> {
        let order_id = OrderId::parse(&self.require("Enter order ID to update: ")?)?;
        if self.session.manager.find_order(order_id.as_str()).is_none() {
            return Err(rxflow_order::OrderError::NotFound(order_id.to_string()).into());
        }
        let priority = self.read_priority()?;
        let notes = self.require("Notes (blank keeps current): ")?;

        let day = self.session.current_day();
        let order = self
            .session
            .manager
            .update_existing(order_id.as_str(), priority, &notes, day)?;
        let line = order.render(day);

        writeln!(self.output, "EXPLICIT UPDATE applied to: {}", order_id)?;
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn view_all_flow(&mut self) -> Result<(), AppError> {
        let day = self.session.current_day();
        let lines = render_all(&self.session.manager.all_sorted(), day);
        if lines.is_empty() {
            writeln!(self.output, "No orders found.")?;
            return Ok(());
        }
        writeln!(self.output)?;
        writeln!(self.output, "--- ALL ORDERS (sorted by due day, then priority) ---")?;
        self.write_lines(&lines)
    }

    fn work_queue_flow(&mut self) -> Result<(), AppError> {
        let day = self.session.current_day();
        let queue = self.session.manager.work_queue(day);
        let buckets = [
            ("[DUE TODAY]", render_all(&queue.due_today, day)),
            ("[ON TRACK]", render_all(&queue.on_track, day)),
            ("[OVERDUE]", render_all(&queue.overdue, day)),
        ];
        let empty = queue.is_empty();

        writeln!(self.output)?;
        writeln!(self.output, "--- WORK QUEUE ---")?;
        if empty {
            writeln!(self.output, "No orders.")?;
            return Ok(());
        }
        for (title, lines) in buckets {
            writeln!(self.output, "{}", title)?;
            if lines.is_empty() {
                writeln!(self.output, "None.")?;
            }
            self.write_lines(&lines)?;
        }
        Ok(())
    }

    fn due_today_flow(&mut self) -> Result<(), AppError> {
        let day = self.session.current_day();
        let lines = render_all(&self.session.manager.due_today(day), day);
        if lines.is_empty() {
            writeln!(self.output, "No orders due today.")?;
            return Ok(());
        }
        writeln!(self.output)?;
        writeln!(self.output, "--- DUE TODAY ---")?;
        self.write_lines(&lines)
    }

    fn overdue_flow(&mut self) -> Result<(), AppError> {
        let day = self.session.current_day();
        let lines = render_all(&self.session.manager.overdue(day), day);
        if lines.is_empty() {
            writeln!(self.output, "No overdue orders.")?;
            return Ok(());
        }
        writeln!(self.output)?;
        writeln!(self.output, "--- OVERDUE ---")?;
        self.write_lines(&lines)
    }

    fn scripts_flow(&mut self) -> Result<(), AppError> {
        let raw = self.require("Enter order ID to generate scripts: ")?;
        let order_id = OrderId::parse(&raw)?;
        let order = self
            .session
            .manager
            .find_order(order_id.as_str())
            .ok_or_else(|| rxflow_order::OrderError::NotFound(order_id.to_string()))?;

        let title = format!("--- SCRIPTS for {} ---", order.order_id());
        let scripts = self.session.scripts.all_scripts(order);

        writeln!(self.output)?;
        writeln!(self.output, "{}", title)?;
        self.write_lines(&scripts)
    }

    fn advance_day_flow(&mut self) -> Result<(), AppError> {
        let day = self.session.advance_day();
        writeln!(self.output, "Day advanced. Current Day = {}", day)?;
        Ok(())
    }

    fn save_report_flow(&mut self) -> Result<(), AppError> {
        let report = Report::build(&self.session.manager, self.session.current_day());
        let path = self.session.reports.write(&report)?;
        writeln!(self.output, "Report saved to: {}", path.display())?;
        Ok(())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<(), AppError> {
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }
}

fn render_all(orders: &[&Order], day: rxflow_core::Day) -> Vec<String> {
    orders.iter().map(|o| o.render(day)).collect()
}
