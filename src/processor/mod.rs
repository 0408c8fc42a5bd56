pub mod batch;
pub mod snapshot;
