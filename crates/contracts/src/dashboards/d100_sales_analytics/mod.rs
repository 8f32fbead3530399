pub mod builder;
pub mod dto;

pub use builder::build_dashboard;
pub use dto::*;
