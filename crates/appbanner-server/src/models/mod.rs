//! API request/response models

pub mod page;
pub mod search;

pub use page::*;
pub use search::*;
