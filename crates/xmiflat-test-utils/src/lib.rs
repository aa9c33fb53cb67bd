pub mod corpus;
pub mod helpers;

pub use corpus::Corpus;
pub use helpers::*;
