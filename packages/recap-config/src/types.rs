use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub limits: Limits,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
	pub blob: Blob,
	pub queue: Queue,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Blob {
	pub bucket: String,
	/// Optional override for S3-compatible stores; empty means the default
	/// AWS endpoint.
	pub endpoint: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Queue {
	pub queue_url: String,
}

/// Per-plan upload quotas and the ingest-time document size cap.
#[derive(Clone, Debug, Deserialize)]
pub struct Limits {
	pub free_plan_max_documents: u32,
	pub pro_plan_max_documents: u32,
	pub max_document_chars: u32,
}
