//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::CashcastPaths;
pub use settings::Settings;
