pub mod calculate;
pub mod export;
pub mod grades;
pub mod history;
pub mod targets;
