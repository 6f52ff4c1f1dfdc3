use sqlx::PgExecutor;

use crate::{Result, models::Question};

pub async fn insert_question<'e, E>(
	executor: E,
	document_id: i64,
	question: &str,
	answer: &str,
) -> Result<i64>
where
	E: PgExecutor<'e>,
{
	let question_id = sqlx::query_scalar::<_, i64>(
		"\
INSERT INTO questions (document_id, question, answer)
VALUES ($1,$2,$3)
RETURNING question_id",
	)
	.bind(document_id)
	.bind(question)
	.bind(answer)
	.fetch_one(executor)
	.await?;

	Ok(question_id)
}

/// Records one delivery of a question to the member. Questions with a
/// zero delivered count stay invisible to retrieval.
pub async fn mark_question_delivered<'e, E>(executor: E, question_id: i64) -> Result<()>
where
	E: PgExecutor<'e>,
{
	sqlx::query(
		"UPDATE questions SET delivered_count = delivered_count + 1 WHERE question_id = $1",
	)
	.bind(question_id)
	.execute(executor)
	.await?;

	Ok(())
}

pub async fn list_delivered_questions<'e, E>(executor: E, document_id: i64) -> Result<Vec<Question>>
where
	E: PgExecutor<'e>,
{
	let rows = sqlx::query_as::<_, Question>(
		"\
SELECT
\tquestion_id,
\tdocument_id,
\tquestion,
\tanswer,
\tdelivered_count
FROM questions
WHERE document_id = $1 AND delivered_count > 0
ORDER BY question_id ASC",
	)
	.bind(document_id)
	.fetch_all(executor)
	.await?;

	Ok(rows)
}
