use std::sync::Arc;

use time::{Duration, OffsetDateTime};

use recap_domain::{format::DocumentFormat, status::DocumentStatus};
use recap_service::{Error, GetDocumentRequest, UploadDocumentRequest};
use recap_storage::{documents, questions};

use super::{MemoryBlobStore, MemoryWorkQueue};

#[tokio::test]
#[ignore = "Requires external Postgres. Set RECAP_PG_DSN to run."]
async fn uploaded_document_round_trips_with_delivered_questions() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping uploaded_document_round_trips_with_delivered_questions; set RECAP_PG_DSN to run this test.");

		return;
	};
	let cfg = super::test_config(test_db.dsn().to_string(), 3, 10, 15_000);
	let blob = Arc::new(MemoryBlobStore::new());
	let queue = Arc::new(MemoryWorkQueue::new());
	let service = super::build_service(cfg, blob.clone(), queue.clone())
		.await
		.expect("Failed to build service.");
	let now = OffsetDateTime::now_utc();

	super::seed_member(&service.db.pool, "m-get").await;
	super::seed_subscription(
		&service.db.pool,
		"m-get",
		"PRO",
		now - Duration::days(1),
		now + Duration::days(29),
	)
	.await;

	let category_id = super::seed_category(&service.db.pool, "m-get", "Research").await;
	let content = "# Heading\n\nBody text.";
	let uploaded = service
		.upload_document(UploadDocumentRequest {
			member_id: "m-get".to_string(),
			category_id,
			name: "notes.md".to_string(),
			format: DocumentFormat::Markdown,
			content: content.as_bytes().to_vec(),
		})
		.await
		.expect("Upload failed.");

	// The worker writes back a summary and releases two of three
	// questions.
	documents::update_document_summary(&service.db.pool, uploaded.document_id, "A summary.")
		.await
		.expect("Failed to write summary.");
	documents::update_document_status(
		&service.db.pool,
		uploaded.document_id,
		DocumentStatus::Processed,
	)
	.await
	.expect("Failed to update status.");

	let q1 = questions::insert_question(&service.db.pool, uploaded.document_id, "Q1?", "A1.")
		.await
		.expect("Failed to insert question.");
	let q2 = questions::insert_question(&service.db.pool, uploaded.document_id, "Q2?", "A2.")
		.await
		.expect("Failed to insert question.");
	let _undelivered =
		questions::insert_question(&service.db.pool, uploaded.document_id, "Q3?", "A3.")
			.await
			.expect("Failed to insert question.");

	questions::mark_question_delivered(&service.db.pool, q1)
		.await
		.expect("Failed to mark question delivered.");
	questions::mark_question_delivered(&service.db.pool, q2)
		.await
		.expect("Failed to mark question delivered.");

	let view = service
		.get_document(GetDocumentRequest {
			member_id: "m-get".to_string(),
			document_id: uploaded.document_id,
		})
		.await
		.expect("Failed to fetch document.");

	assert_eq!(view.id, uploaded.document_id);
	assert_eq!(view.status, DocumentStatus::Processed);
	assert_eq!(view.category.id, category_id);
	assert_eq!(view.category.name, "Research");
	assert_eq!(view.name, "notes.md");
	assert_eq!(view.summary.as_deref(), Some("A summary."));
	assert_eq!(view.format, DocumentFormat::Markdown);
	assert_eq!(view.content, content);
	assert_eq!(view.questions.len(), 2);
	assert_eq!(view.questions[0].question, "Q1?");
	assert_eq!(view.questions[1].answer, "A2.");

	// The worker notification carried the plan and the blob key.
	let messages = queue.messages.lock().unwrap();

	assert_eq!(messages.len(), 1);
	assert_eq!(messages[0].document_id, uploaded.document_id);
	assert_eq!(messages[0].subscription_plan, "PRO");
	assert!(blob.objects.lock().unwrap().contains_key(&messages[0].storage_key));

	drop(messages);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set RECAP_PG_DSN to run."]
async fn unknown_or_foreign_document_is_not_found() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping unknown_or_foreign_document_is_not_found; set RECAP_PG_DSN to run this test.");

		return;
	};
	let cfg = super::test_config(test_db.dsn().to_string(), 3, 10, 15_000);
	let service = super::build_service(cfg, Arc::new(MemoryBlobStore::new()), Arc::new(MemoryWorkQueue::new()))
		.await
		.expect("Failed to build service.");
	let now = OffsetDateTime::now_utc();

	super::seed_member(&service.db.pool, "m-owner").await;
	super::seed_member(&service.db.pool, "m-intruder").await;
	super::seed_subscription(
		&service.db.pool,
		"m-owner",
		"FREE",
		now - Duration::days(1),
		now + Duration::days(29),
	)
	.await;

	let category_id = super::seed_category(&service.db.pool, "m-owner", "Notes").await;
	let uploaded = service
		.upload_document(UploadDocumentRequest {
			member_id: "m-owner".to_string(),
			category_id,
			name: "doc".to_string(),
			format: DocumentFormat::Txt,
			content: b"A short note.".to_vec(),
		})
		.await
		.expect("Upload failed.");

	let missing = service
		.get_document(GetDocumentRequest { member_id: "m-owner".to_string(), document_id: 404 })
		.await;

	assert!(matches!(missing, Err(Error::DocumentNotFound { document_id: 404 })));

	// Another member cannot see the document at all.
	let foreign = service
		.get_document(GetDocumentRequest {
			member_id: "m-intruder".to_string(),
			document_id: uploaded.document_id,
		})
		.await;

	assert!(matches!(foreign, Err(Error::DocumentNotFound { .. })));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
