pub mod finder;
pub mod gemini_client;
pub mod prompts;
pub mod response_normalizer;

pub use finder::*;
pub use gemini_client::*;
pub use prompts::*;
pub use response_normalizer::*;
