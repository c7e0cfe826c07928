mod app_state;
mod bounds;
pub mod events;
mod knowledge_table;
mod query_engine;
mod session;

pub use app_state::*;
pub use bounds::*;
pub use knowledge_table::*;
pub use query_engine::*;
pub use session::*;
