use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use recap_config::Limits;
use recap_domain::{format::DocumentFormat, status::DocumentStatus};
use recap_storage::{categories, documents, models::NewDocument, uploads};

use crate::{Error, RecapService, Result, WorkMessage, quota};

#[derive(Clone, Debug, Deserialize)]
pub struct UploadDocumentRequest {
	pub member_id: String,
	pub category_id: i64,
	pub name: String,
	pub format: DocumentFormat,
	pub content: Vec<u8>,
}

#[derive(Clone, Debug, Serialize)]
pub struct UploadDocumentResponse {
	pub document_id: i64,
}

impl RecapService {
	/// Ingests one document: quota and size gates, blob write, metadata
	/// and upload-record writes, then the work-queue notification.
	/// Checks run strictly before any side effect; a failure after the
	/// blob write leaves the blob orphaned (see DESIGN.md).
	pub async fn upload_document(
		&self,
		request: UploadDocumentRequest,
	) -> Result<UploadDocumentResponse> {
		let now = OffsetDateTime::now_utc();
		let subscription = quota::current_subscription(&self.db, &request.member_id, now).await?;
		let uploaded =
			quota::uploads_in_period(&self.db, &request.member_id, subscription.period).await?;

		quota::ensure_within_plan_limit(subscription.plan, uploaded, &self.cfg.limits)?;

		let text = request.format.decode_text(&request.content)?;

		ensure_within_length_limit(&text, &self.cfg.limits)?;

		let Some(category) =
			categories::find_category(&self.db.pool, &request.member_id, request.category_id)
				.await?
		else {
			return Err(Error::CategoryNotFound { category_id: request.category_id });
		};

		// Assigned exactly once, before any metadata is persisted.
		let storage_key = Uuid::new_v4().simple().to_string();
		let metadata =
			HashMap::from([("format".to_string(), request.format.as_str().to_string())]);

		self.blob.put(&storage_key, &request.content, &metadata).await?;

		let mut tx = self.db.pool.begin().await?;
		let document_id = documents::insert_document(
			&mut *tx,
			&NewDocument {
				category_id: category.category_id,
				name: request.name.clone(),
				storage_key: storage_key.clone(),
				format: request.format.as_str().to_string(),
				status: DocumentStatus::Unprocessed.as_str().to_string(),
				created_at: now,
			},
		)
		.await?;

		uploads::insert_document_upload(&mut *tx, &request.member_id, document_id, now).await?;

		tx.commit().await?;

		let message = WorkMessage {
			storage_key,
			document_id,
			subscription_plan: subscription.plan.as_str().to_string(),
		};

		self.queue.enqueue(&message).await?;

		tracing::info!(document_id, member_id = %request.member_id, "Document accepted for processing.");

		Ok(UploadDocumentResponse { document_id })
	}
}

fn ensure_within_length_limit(text: &str, limits: &Limits) -> Result<()> {
	let chars = text.chars().count() as u32;

	if chars >= limits.max_document_chars {
		return Err(Error::DocumentTooLarge { chars, max: limits.max_document_chars });
	}

	Ok(())
}
