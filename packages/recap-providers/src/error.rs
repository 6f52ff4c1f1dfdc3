#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Blob store error: {message}")]
	Blob { message: String },
	#[error("Work queue error: {message}")]
	Queue { message: String },
}
