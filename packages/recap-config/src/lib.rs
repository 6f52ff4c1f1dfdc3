mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Blob, Config, Limits, Postgres, Queue, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.storage.blob.bucket.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.blob.bucket must be non-empty.".to_string(),
		});
	}
	if cfg.storage.queue.queue_url.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.queue.queue_url must be non-empty.".to_string(),
		});
	}
	if cfg.limits.max_document_chars == 0 {
		return Err(Error::Validation {
			message: "limits.max_document_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.limits.free_plan_max_documents == 0 {
		return Err(Error::Validation {
			message: "limits.free_plan_max_documents must be greater than zero.".to_string(),
		});
	}
	if cfg.limits.pro_plan_max_documents == 0 {
		return Err(Error::Validation {
			message: "limits.pro_plan_max_documents must be greater than zero.".to_string(),
		});
	}
	if cfg.limits.free_plan_max_documents > cfg.limits.pro_plan_max_documents {
		return Err(Error::Validation {
			message: "limits.free_plan_max_documents must not exceed limits.pro_plan_max_documents."
				.to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg
		.storage
		.blob
		.endpoint
		.as_deref()
		.map(|endpoint| endpoint.trim().is_empty())
		.unwrap_or(false)
	{
		cfg.storage.blob.endpoint = None;
	}
}
