pub mod args;
pub mod command;
pub mod overhead_panel;
pub mod timing_panel;
