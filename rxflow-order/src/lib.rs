pub mod models;
pub mod manager;
pub mod scripts;
pub mod shared;
pub mod report;

pub use models::Order;
pub use manager::{AddOutcome, OrderError, OrderManager, WorkQueue};
pub use scripts::ScriptGenerator;
pub use shared::SharedOrderManager;
pub use report::Report;
