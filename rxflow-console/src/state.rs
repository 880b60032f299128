use rxflow_core::Day;
use rxflow_order::{OrderManager, ScriptGenerator};
use rxflow_store::ReportWriter;

/// Everything one console run owns. The current day lives here and is passed
/// explicitly into every manager call; it only moves via [`Session::advance_day`].
pub struct Session {
    pub manager: OrderManager,
    pub scripts: ScriptGenerator,
    pub reports: ReportWriter,
    current_day: Day,
}

impl Session {
    pub fn new(start_day: Day, reports: ReportWriter) -> Self {
        Self {
            manager: OrderManager::new(),
            scripts: ScriptGenerator::new(),
            reports,
            current_day: start_day,
        }
    }

    pub fn current_day(&self) -> Day {
        self.current_day
    }

    pub fn advance_day(&mut self) -> Day {
        self.current_day = self.current_day.saturating_add(1);
        tracing::info!(day = self.current_day, "day advanced");
        self.current_day
    }
}
