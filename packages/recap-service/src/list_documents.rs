use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use recap_storage::{categories, documents};

use crate::{Error, RecapService, Result};

#[derive(Clone, Debug, Deserialize)]
pub struct ListDocumentsRequest {
	pub member_id: String,
	pub category_id: i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct DocumentListItem {
	pub id: i64,
	pub name: String,
	pub summary: Option<String>,
	pub created_at: OffsetDateTime,
}

#[derive(Clone, Debug, Serialize)]
pub struct ListDocumentsResponse {
	pub documents: Vec<DocumentListItem>,
}

impl RecapService {
	/// Lists the documents of one category, oldest first. Content and
	/// questions are not hydrated here; fetch a single document for
	/// those.
	pub async fn list_documents(
		&self,
		request: ListDocumentsRequest,
	) -> Result<ListDocumentsResponse> {
		if categories::find_category(&self.db.pool, &request.member_id, request.category_id)
			.await?
			.is_none()
		{
			return Err(Error::CategoryNotFound { category_id: request.category_id });
		}

		let rows = documents::list_documents_by_category(
			&self.db.pool,
			&request.member_id,
			request.category_id,
		)
		.await?;

		Ok(ListDocumentsResponse {
			documents: rows
				.into_iter()
				.map(|d| DocumentListItem {
					id: d.document_id,
					name: d.name,
					summary: d.summary,
					created_at: d.created_at,
				})
				.collect(),
		})
	}
}
