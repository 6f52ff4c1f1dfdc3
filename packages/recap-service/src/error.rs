pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("No current subscription for member {member_id}.")]
	SubscriptionNotFound { member_id: String },
	#[error("Free plan upload limit reached for the current period.")]
	FreePlanLimitExceeded,
	#[error("Pro plan upload limit reached for the current period.")]
	ProPlanLimitExceeded,
	#[error("Document has {chars} characters; the limit is {max}.")]
	DocumentTooLarge { chars: u32, max: u32 },
	#[error("Failed to decode document content: {message}")]
	DocumentDecode { message: String },
	#[error("Category {category_id} not found.")]
	CategoryNotFound { category_id: i64 },
	#[error("Document {document_id} not found.")]
	DocumentNotFound { document_id: i64 },
	#[error("Invalid plan type {value:?} on subscription record.")]
	InvalidPlanType { value: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
	#[error("Blob store error: {message}")]
	Blob { message: String },
	#[error("Work queue error: {message}")]
	Queue { message: String },
}
impl From<sqlx::Error> for Error {
	fn from(err: sqlx::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<recap_storage::Error> for Error {
	fn from(err: recap_storage::Error) -> Self {
		match err {
			recap_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			recap_storage::Error::InvalidArgument(message) => Self::Storage { message },
		}
	}
}

impl From<recap_providers::Error> for Error {
	fn from(err: recap_providers::Error) -> Self {
		match err {
			recap_providers::Error::Blob { message } => Self::Blob { message },
			recap_providers::Error::Queue { message } => Self::Queue { message },
		}
	}
}

impl From<recap_domain::format::DecodeError> for Error {
	fn from(err: recap_domain::format::DecodeError) -> Self {
		Self::DocumentDecode { message: err.to_string() }
	}
}
