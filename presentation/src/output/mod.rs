//! Output formatting for gate reports

pub mod console;
pub mod formatter;
