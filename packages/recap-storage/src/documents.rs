use sqlx::PgExecutor;

use recap_domain::status::DocumentStatus;

use crate::{
	Error, Result,
	models::{Document, DocumentDetail, NewDocument},
};

pub async fn insert_document<'e, E>(executor: E, doc: &NewDocument) -> Result<i64>
where
	E: PgExecutor<'e>,
{
	let document_id = sqlx::query_scalar::<_, i64>(
		"\
INSERT INTO documents (category_id, name, storage_key, format, status, created_at)
VALUES ($1,$2,$3,$4,$5,$6)
RETURNING document_id",
	)
	.bind(doc.category_id)
	.bind(doc.name.as_str())
	.bind(doc.storage_key.as_str())
	.bind(doc.format.as_str())
	.bind(doc.status.as_str())
	.bind(doc.created_at)
	.fetch_one(executor)
	.await?;

	Ok(document_id)
}

pub async fn find_document<'e, E>(
	executor: E,
	member_id: &str,
	document_id: i64,
) -> Result<Option<DocumentDetail>>
where
	E: PgExecutor<'e>,
{
	let row = sqlx::query_as::<_, DocumentDetail>(
		"\
SELECT
\td.document_id,
\td.category_id,
\tc.name AS category_name,
\td.name,
\td.summary,
\td.storage_key,
\td.format,
\td.status,
\td.created_at
FROM documents d
JOIN categories c ON c.category_id = d.category_id
WHERE c.member_id = $1 AND d.document_id = $2
LIMIT 1",
	)
	.bind(member_id)
	.bind(document_id)
	.fetch_optional(executor)
	.await?;

	Ok(row)
}

pub async fn list_documents_by_category<'e, E>(
	executor: E,
	member_id: &str,
	category_id: i64,
) -> Result<Vec<Document>>
where
	E: PgExecutor<'e>,
{
	let rows = sqlx::query_as::<_, Document>(
		"\
SELECT
\td.document_id,
\td.category_id,
\td.name,
\td.summary,
\td.storage_key,
\td.format,
\td.status,
\td.created_at
FROM documents d
JOIN categories c ON c.category_id = d.category_id
WHERE c.member_id = $1 AND d.category_id = $2
ORDER BY d.created_at ASC, d.document_id ASC",
	)
	.bind(member_id)
	.bind(category_id)
	.fetch_all(executor)
	.await?;

	Ok(rows)
}

pub async fn update_document_summary<'e, E>(
	executor: E,
	document_id: i64,
	summary: &str,
) -> Result<()>
where
	E: PgExecutor<'e>,
{
	sqlx::query("UPDATE documents SET summary = $1 WHERE document_id = $2")
		.bind(summary)
		.bind(document_id)
		.execute(executor)
		.await?;

	Ok(())
}

/// Moves a document to `next`. The predicate only matches rows in an
/// earlier state, so a regression is a no-op even under concurrent
/// writers.
pub async fn update_document_status<'e, E>(
	executor: E,
	document_id: i64,
	next: DocumentStatus,
) -> Result<()>
where
	E: PgExecutor<'e>,
{
	let allowed_from = DocumentStatus::ALL
		.iter()
		.copied()
		.filter(|status| status.allows_transition_to(next))
		.map(DocumentStatus::as_str)
		.collect::<Vec<_>>();

	if allowed_from.is_empty() {
		return Err(Error::InvalidArgument(format!(
			"No state may transition to {}.",
			next.as_str()
		)));
	}

	sqlx::query("UPDATE documents SET status = $1 WHERE document_id = $2 AND status = ANY($3)")
		.bind(next.as_str())
		.bind(document_id)
		.bind(&allowed_from)
		.execute(executor)
		.await?;

	Ok(())
}
