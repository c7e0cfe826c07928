mod display_mode;
mod error;
mod event;
mod known_result;
mod power_of_two;
mod report;

pub use display_mode::*;
pub use error::*;
pub use event::*;
pub use known_result::*;
pub use power_of_two::*;
pub use report::*;
