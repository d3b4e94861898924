//! Production implementations of the crate's trait seams

mod iris;
mod tokio_clock;

pub use iris::{IrisApi, IRIS_API, IRIS_API_SANDBOX};
pub use tokio_clock::TokioClock;
