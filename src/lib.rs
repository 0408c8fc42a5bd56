pub mod model;
pub mod processor;
pub mod utils;
