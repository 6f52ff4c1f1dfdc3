use sqlx::PgExecutor;

use crate::{Result, models::Subscription};

/// The member's most recent subscription, if any. Whether it covers the
/// current instant is a domain decision left to the caller.
pub async fn latest_subscription<'e, E>(
	executor: E,
	member_id: &str,
) -> Result<Option<Subscription>>
where
	E: PgExecutor<'e>,
{
	let row = sqlx::query_as::<_, Subscription>(
		"\
SELECT subscription_id, member_id, plan_type, purchased_at, expires_at
FROM subscriptions
WHERE member_id = $1
ORDER BY purchased_at DESC
LIMIT 1",
	)
	.bind(member_id)
	.fetch_optional(executor)
	.await?;

	Ok(row)
}
