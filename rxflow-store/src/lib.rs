pub mod app_config;
pub mod report_writer;

pub use app_config::Config;
pub use report_writer::{ReportError, ReportWriter};
