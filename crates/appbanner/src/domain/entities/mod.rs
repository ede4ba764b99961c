//! Domain Entities

mod app_id;
mod search_query;
mod search_result;

pub use app_id::*;
pub use search_query::*;
pub use search_result::*;
