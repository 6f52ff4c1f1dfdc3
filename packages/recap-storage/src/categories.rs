use sqlx::PgExecutor;

use crate::{Result, models::Category};

pub async fn find_category<'e, E>(
	executor: E,
	member_id: &str,
	category_id: i64,
) -> Result<Option<Category>>
where
	E: PgExecutor<'e>,
{
	let row = sqlx::query_as::<_, Category>(
		"\
SELECT category_id, member_id, name
FROM categories
WHERE member_id = $1 AND category_id = $2
LIMIT 1",
	)
	.bind(member_id)
	.bind(category_id)
	.fetch_optional(executor)
	.await?;

	Ok(row)
}
