use std::collections::HashMap;

use aws_sdk_s3::primitives::ByteStream;

use crate::{Error, Result};

/// S3-backed content store. Objects are keyed by an opaque storage key;
/// the declared document format travels as object metadata.
#[derive(Clone, Debug)]
pub struct S3BlobStore {
	client: aws_sdk_s3::Client,
	bucket: String,
}
impl S3BlobStore {
	pub async fn connect(cfg: &recap_config::Blob) -> Self {
		let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
		let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);

		if let Some(endpoint) = cfg.endpoint.as_deref() {
			builder = builder.endpoint_url(endpoint).force_path_style(true);
		}

		Self { client: aws_sdk_s3::Client::from_conf(builder.build()), bucket: cfg.bucket.clone() }
	}

	#[tracing::instrument(skip(self, bytes, metadata))]
	pub async fn put(
		&self,
		key: &str,
		bytes: &[u8],
		metadata: &HashMap<String, String>,
	) -> Result<()> {
		let mut request = self
			.client
			.put_object()
			.bucket(&self.bucket)
			.key(key)
			.body(ByteStream::from(bytes.to_vec()));

		for (name, value) in metadata {
			request = request.metadata(name, value);
		}

		request.send().await.map_err(|err| Error::Blob { message: err.to_string() })?;

		Ok(())
	}

	#[tracing::instrument(skip(self))]
	pub async fn get(&self, key: &str) -> Result<Vec<u8>> {
		let response = self
			.client
			.get_object()
			.bucket(&self.bucket)
			.key(key)
			.send()
			.await
			.map_err(|err| Error::Blob { message: err.to_string() })?;
		let body = response
			.body
			.collect()
			.await
			.map_err(|err| Error::Blob { message: err.to_string() })?;

		Ok(body.into_bytes().to_vec())
	}
}
