use recap_config::Limits;

/// Subscription plan. Adding a variant is a compile error at every
/// `match` until the new plan's limits are wired through.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanType {
	Free,
	Pro,
}
impl PlanType {
	pub fn as_str(self) -> &'static str {
		match self {
			PlanType::Free => "FREE",
			PlanType::Pro => "PRO",
		}
	}

	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"FREE" => Some(PlanType::Free),
			"PRO" => Some(PlanType::Pro),
			_ => None,
		}
	}

	pub fn max_documents(self, limits: &Limits) -> u32 {
		match self {
			PlanType::Free => limits.free_plan_max_documents,
			PlanType::Pro => limits.pro_plan_max_documents,
		}
	}
}
