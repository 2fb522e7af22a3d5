//! Task dispatcher adapters.

mod tokio_dispatcher;

pub use tokio_dispatcher::TokioTaskDispatcher;
