use time::OffsetDateTime;

use recap_config::Limits;
use recap_domain::{period::SubscriptionPeriod, plan::PlanType};
use recap_storage::{db::Db, subscriptions, uploads};

use crate::{Error, Result};

pub struct CurrentSubscription {
	pub plan: PlanType,
	pub period: SubscriptionPeriod,
}

/// Resolves the member's subscription covering `now`. The latest
/// purchase wins; an expired or not-yet-started one does not count.
pub async fn current_subscription(
	db: &Db,
	member_id: &str,
	now: OffsetDateTime,
) -> Result<CurrentSubscription> {
	let Some(subscription) = subscriptions::latest_subscription(&db.pool, member_id).await? else {
		return Err(Error::SubscriptionNotFound { member_id: member_id.to_string() });
	};
	let period = SubscriptionPeriod {
		purchased_at: subscription.purchased_at,
		expires_at: subscription.expires_at,
	};

	if !period.contains(now) {
		return Err(Error::SubscriptionNotFound { member_id: member_id.to_string() });
	}

	let plan = PlanType::parse(&subscription.plan_type)
		.ok_or(Error::InvalidPlanType { value: subscription.plan_type })?;

	Ok(CurrentSubscription { plan, period })
}

pub async fn uploads_in_period(
	db: &Db,
	member_id: &str,
	period: SubscriptionPeriod,
) -> Result<i64> {
	Ok(uploads::count_uploads_in_period(
		&db.pool,
		member_id,
		period.purchased_at,
		period.expires_at,
	)
	.await?)
}

pub fn ensure_within_plan_limit(plan: PlanType, uploaded: i64, limits: &Limits) -> Result<()> {
	if uploaded < i64::from(plan.max_documents(limits)) {
		return Ok(());
	}

	Err(match plan {
		PlanType::Free => Error::FreePlanLimitExceeded,
		PlanType::Pro => Error::ProPlanLimitExceeded,
	})
}
