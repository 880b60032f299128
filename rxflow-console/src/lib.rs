pub mod console;
pub mod error;
pub mod logging;
pub mod state;

pub use console::Console;
pub use error::AppError;
pub use state::Session;
