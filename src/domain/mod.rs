pub mod search_params;
pub mod search_result;

pub use search_params::*;
pub use search_result::*;
