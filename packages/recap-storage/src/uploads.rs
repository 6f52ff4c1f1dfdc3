use sqlx::PgExecutor;
use time::OffsetDateTime;

use crate::Result;

pub async fn insert_document_upload<'e, E>(
	executor: E,
	member_id: &str,
	document_id: i64,
	uploaded_at: OffsetDateTime,
) -> Result<i64>
where
	E: PgExecutor<'e>,
{
	let upload_id = sqlx::query_scalar::<_, i64>(
		"\
INSERT INTO document_uploads (member_id, document_id, uploaded_at)
VALUES ($1,$2,$3)
RETURNING upload_id",
	)
	.bind(member_id)
	.bind(document_id)
	.bind(uploaded_at)
	.fetch_one(executor)
	.await?;

	Ok(upload_id)
}

/// Uploads inside the half-open window `[start, end)`: a record exactly
/// at `start` counts, one exactly at `end` does not. Served by the
/// `(member_id, uploaded_at)` index.
pub async fn count_uploads_in_period<'e, E>(
	executor: E,
	member_id: &str,
	start: OffsetDateTime,
	end: OffsetDateTime,
) -> Result<i64>
where
	E: PgExecutor<'e>,
{
	let count = sqlx::query_scalar::<_, i64>(
		"\
SELECT COUNT(*)
FROM document_uploads
WHERE member_id = $1 AND uploaded_at >= $2 AND uploaded_at < $3",
	)
	.bind(member_id)
	.bind(start)
	.bind(end)
	.fetch_one(executor)
	.await?;

	Ok(count)
}
