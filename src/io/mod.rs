pub mod panel;
pub mod report;
