pub mod blob;
pub mod queue;

mod error;

pub use blob::S3BlobStore;
pub use error::Error;
pub use queue::SqsWorkQueue;

pub type Result<T, E = Error> = std::result::Result<T, E>;
