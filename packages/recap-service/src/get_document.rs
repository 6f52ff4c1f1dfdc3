use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use recap_domain::{format::DocumentFormat, status::DocumentStatus};
use recap_storage::{documents, questions};

use crate::{Error, RecapService, Result};

#[derive(Clone, Debug, Deserialize)]
pub struct GetDocumentRequest {
	pub member_id: String,
	pub document_id: i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct CategorySummary {
	pub id: i64,
	pub name: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct QuestionView {
	pub id: i64,
	pub question: String,
	pub answer: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct GetDocumentResponse {
	pub id: i64,
	pub status: DocumentStatus,
	pub category: CategorySummary,
	pub name: String,
	pub summary: Option<String>,
	pub format: DocumentFormat,
	pub created_at: OffsetDateTime,
	pub content: String,
	pub questions: Vec<QuestionView>,
}

impl RecapService {
	/// Hydrates one document: metadata from the database, content from
	/// the blob store, plus the questions already delivered to the
	/// member. Undelivered questions stay hidden until the worker
	/// releases them.
	pub async fn get_document(
		&self,
		request: GetDocumentRequest,
	) -> Result<GetDocumentResponse> {
		let Some(detail) =
			documents::find_document(&self.db.pool, &request.member_id, request.document_id)
				.await?
		else {
			return Err(Error::DocumentNotFound { document_id: request.document_id });
		};
		let format = DocumentFormat::parse(&detail.format).ok_or_else(|| Error::Storage {
			message: format!("Unknown document format {:?} on row {}.", detail.format, detail.document_id),
		})?;
		let status = DocumentStatus::parse(&detail.status).ok_or_else(|| Error::Storage {
			message: format!("Unknown document status {:?} on row {}.", detail.status, detail.document_id),
		})?;
		let bytes = self.blob.get(&detail.storage_key).await?;
		let content = format.decode_text(&bytes)?;
		let questions =
			questions::list_delivered_questions(&self.db.pool, detail.document_id).await?;

		Ok(GetDocumentResponse {
			id: detail.document_id,
			status,
			category: CategorySummary { id: detail.category_id, name: detail.category_name },
			name: detail.name,
			summary: detail.summary,
			format,
			created_at: detail.created_at,
			content,
			questions: questions
				.into_iter()
				.map(|q| QuestionView { id: q.question_id, question: q.question, answer: q.answer })
				.collect(),
		})
	}
}
