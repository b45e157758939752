pub mod error;
pub mod fields;
pub mod format;
pub mod overheads;
pub mod row;
pub mod timer;
pub mod settings;
pub mod plan;
