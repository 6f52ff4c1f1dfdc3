use time::OffsetDateTime;

/// Half-open subscription window `[purchased_at, expires_at)` used for
/// quota accounting.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SubscriptionPeriod {
	pub purchased_at: OffsetDateTime,
	pub expires_at: OffsetDateTime,
}
impl SubscriptionPeriod {
	pub fn contains(&self, ts: OffsetDateTime) -> bool {
		ts >= self.purchased_at && ts < self.expires_at
	}
}
