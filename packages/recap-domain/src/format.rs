/// Declared content format of an uploaded document. Only UTF-8 text
/// formats are accepted: the ingest-time size check is defined over
/// decoded text, which a binary container cannot provide at this layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
	Txt,
	Markdown,
}
impl DocumentFormat {
	pub fn as_str(self) -> &'static str {
		match self {
			DocumentFormat::Txt => "txt",
			DocumentFormat::Markdown => "markdown",
		}
	}

	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"txt" => Some(DocumentFormat::Txt),
			"markdown" => Some(DocumentFormat::Markdown),
			_ => None,
		}
	}

	pub fn decode_text(self, bytes: &[u8]) -> Result<String, DecodeError> {
		match self {
			DocumentFormat::Txt | DocumentFormat::Markdown => String::from_utf8(bytes.to_vec())
				.map_err(|_| DecodeError::InvalidUtf8 { format: self }),
		}
	}
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum DecodeError {
	#[error("Content declared as {} is not valid UTF-8.", format.as_str())]
	InvalidUtf8 { format: DocumentFormat },
}
