use time::OffsetDateTime;

#[derive(Debug, sqlx::FromRow)]
pub struct Category {
	pub category_id: i64,
	pub member_id: String,
	pub name: String,
}

#[derive(Debug, sqlx::FromRow)]
pub struct Subscription {
	pub subscription_id: i64,
	pub member_id: String,
	pub plan_type: String,
	pub purchased_at: OffsetDateTime,
	pub expires_at: OffsetDateTime,
}

#[derive(Debug, sqlx::FromRow)]
pub struct Document {
	pub document_id: i64,
	pub category_id: i64,
	pub name: String,
	pub summary: Option<String>,
	pub storage_key: String,
	pub format: String,
	pub status: String,
	pub created_at: OffsetDateTime,
}

/// A document joined with its owning category, as needed by the
/// single-document view.
#[derive(Debug, sqlx::FromRow)]
pub struct DocumentDetail {
	pub document_id: i64,
	pub category_id: i64,
	pub category_name: String,
	pub name: String,
	pub summary: Option<String>,
	pub storage_key: String,
	pub format: String,
	pub status: String,
	pub created_at: OffsetDateTime,
}

#[derive(Debug)]
pub struct NewDocument {
	pub category_id: i64,
	pub name: String,
	pub storage_key: String,
	pub format: String,
	pub status: String,
	pub created_at: OffsetDateTime,
}

#[derive(Debug, sqlx::FromRow)]
pub struct DocumentUpload {
	pub upload_id: i64,
	pub member_id: String,
	pub document_id: i64,
	pub uploaded_at: OffsetDateTime,
}

#[derive(Debug, sqlx::FromRow)]
pub struct Question {
	pub question_id: i64,
	pub document_id: i64,
	pub question: String,
	pub answer: String,
	pub delivered_count: i32,
}
