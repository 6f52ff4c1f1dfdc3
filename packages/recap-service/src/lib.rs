pub mod get_document;
pub mod list_documents;
pub mod quota;
pub mod upload;

mod error;

pub use error::{Error, Result};
pub use get_document::{CategorySummary, GetDocumentRequest, GetDocumentResponse, QuestionView};
pub use list_documents::{DocumentListItem, ListDocumentsRequest, ListDocumentsResponse};
pub use upload::{UploadDocumentRequest, UploadDocumentResponse};

use std::{collections::HashMap, future::Future, pin::Pin, sync::Arc};

use recap_config::Config;
use recap_storage::db::Db;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait BlobStore
where
	Self: Send + Sync,
{
	fn put<'a>(
		&'a self,
		key: &'a str,
		bytes: &'a [u8],
		metadata: &'a HashMap<String, String>,
	) -> BoxFuture<'a, Result<()>>;

	fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Vec<u8>>>;
}

pub trait WorkQueue
where
	Self: Send + Sync,
{
	fn enqueue<'a>(&'a self, message: &'a WorkMessage) -> BoxFuture<'a, Result<()>>;
}

/// Payload consumed by the downstream summarization worker. The field
/// names are a wire contract; do not rename.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkMessage {
	pub storage_key: String,
	pub document_id: i64,
	pub subscription_plan: String,
}

pub struct RecapService {
	pub cfg: Config,
	pub db: Db,
	pub blob: Arc<dyn BlobStore>,
	pub queue: Arc<dyn WorkQueue>,
}
impl RecapService {
	pub fn new(cfg: Config, db: Db, blob: Arc<dyn BlobStore>, queue: Arc<dyn WorkQueue>) -> Self {
		Self { cfg, db, blob, queue }
	}
}

impl BlobStore for recap_providers::S3BlobStore {
	fn put<'a>(
		&'a self,
		key: &'a str,
		bytes: &'a [u8],
		metadata: &'a HashMap<String, String>,
	) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move {
			Ok(recap_providers::S3BlobStore::put(self, key, bytes, metadata).await?)
		})
	}

	fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Vec<u8>>> {
		Box::pin(async move { Ok(recap_providers::S3BlobStore::get(self, key).await?) })
	}
}

impl WorkQueue for recap_providers::SqsWorkQueue {
	fn enqueue<'a>(&'a self, message: &'a WorkMessage) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move {
			let body = serde_json::to_string(message)
				.map_err(|err| Error::Queue { message: err.to_string() })?;

			Ok(self.send(&body).await?)
		})
	}
}
