/// Processing state of a document. Transitions only move forward; a
/// document never regresses to an earlier state.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
	Unprocessed,
	Processing,
	Processed,
}
impl DocumentStatus {
	pub const ALL: [DocumentStatus; 3] =
		[DocumentStatus::Unprocessed, DocumentStatus::Processing, DocumentStatus::Processed];

	pub fn as_str(self) -> &'static str {
		match self {
			DocumentStatus::Unprocessed => "unprocessed",
			DocumentStatus::Processing => "processing",
			DocumentStatus::Processed => "processed",
		}
	}

	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"unprocessed" => Some(DocumentStatus::Unprocessed),
			"processing" => Some(DocumentStatus::Processing),
			"processed" => Some(DocumentStatus::Processed),
			_ => None,
		}
	}

	pub fn allows_transition_to(self, next: DocumentStatus) -> bool {
		next.rank() > self.rank()
	}

	fn rank(self) -> u8 {
		match self {
			DocumentStatus::Unprocessed => 0,
			DocumentStatus::Processing => 1,
			DocumentStatus::Processed => 2,
		}
	}
}
