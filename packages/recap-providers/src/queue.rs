use crate::{Error, Result};

/// SQS-backed work queue toward the summarization worker. Delivery is
/// at-least-once; the consumer must tolerate duplicates.
#[derive(Clone, Debug)]
pub struct SqsWorkQueue {
	client: aws_sdk_sqs::Client,
	queue_url: String,
}
impl SqsWorkQueue {
	pub async fn connect(cfg: &recap_config::Queue) -> Self {
		let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

		Self { client: aws_sdk_sqs::Client::new(&sdk_config), queue_url: cfg.queue_url.clone() }
	}

	#[tracing::instrument(skip(self, body))]
	pub async fn send(&self, body: &str) -> Result<()> {
		self.client
			.send_message()
			.queue_url(&self.queue_url)
			.message_body(body)
			.send()
			.await
			.map_err(|err| Error::Queue { message: err.to_string() })?;

		Ok(())
	}
}
