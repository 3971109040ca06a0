//! Modal dialogs

pub mod balance;
pub mod help;
pub mod transaction;
