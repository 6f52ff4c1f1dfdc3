use std::sync::{Arc, atomic::Ordering};

use time::{Duration, OffsetDateTime};

use recap_domain::format::DocumentFormat;
use recap_service::{Error, UploadDocumentRequest};

use super::{MemoryBlobStore, MemoryWorkQueue};

#[tokio::test]
#[ignore = "Requires external Postgres. Set RECAP_PG_DSN to run."]
async fn validation_failure_leaves_no_side_effects() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping validation_failure_leaves_no_side_effects; set RECAP_PG_DSN to run this test.");

		return;
	};
	let cfg = super::test_config(test_db.dsn().to_string(), 3, 10, 15_000);
	let blob = Arc::new(MemoryBlobStore::new());
	let queue = Arc::new(MemoryWorkQueue::new());
	let service = super::build_service(cfg, blob.clone(), queue.clone())
		.await
		.expect("Failed to build service.");
	let now = OffsetDateTime::now_utc();

	super::seed_member(&service.db.pool, "m-ordering").await;
	super::seed_subscription(
		&service.db.pool,
		"m-ordering",
		"FREE",
		now - Duration::days(1),
		now + Duration::days(29),
	)
	.await;

	// No category seeded; the lookup fails after the quota gates pass.
	let result = service
		.upload_document(UploadDocumentRequest {
			member_id: "m-ordering".to_string(),
			category_id: 404,
			name: "doc".to_string(),
			format: DocumentFormat::Txt,
			content: b"A short note.".to_vec(),
		})
		.await;

	assert!(matches!(result, Err(Error::CategoryNotFound { category_id: 404 })));
	assert_eq!(blob.put_calls.load(Ordering::SeqCst), 0);
	assert!(queue.messages.lock().unwrap().is_empty());

	let documents = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM documents")
		.fetch_one(&service.db.pool)
		.await
		.expect("Failed to count documents.");

	assert_eq!(documents, 0);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set RECAP_PG_DSN to run."]
async fn blob_failure_persists_no_rows_and_enqueues_nothing() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping blob_failure_persists_no_rows_and_enqueues_nothing; set RECAP_PG_DSN to run this test.");

		return;
	};
	let cfg = super::test_config(test_db.dsn().to_string(), 3, 10, 15_000);
	let blob = Arc::new(MemoryBlobStore::failing());
	let queue = Arc::new(MemoryWorkQueue::new());
	let service = super::build_service(cfg, blob.clone(), queue.clone())
		.await
		.expect("Failed to build service.");
	let now = OffsetDateTime::now_utc();

	super::seed_member(&service.db.pool, "m-blobfail").await;
	super::seed_subscription(
		&service.db.pool,
		"m-blobfail",
		"FREE",
		now - Duration::days(1),
		now + Duration::days(29),
	)
	.await;

	let category_id = super::seed_category(&service.db.pool, "m-blobfail", "Notes").await;
	let result = service
		.upload_document(UploadDocumentRequest {
			member_id: "m-blobfail".to_string(),
			category_id,
			name: "doc".to_string(),
			format: DocumentFormat::Txt,
			content: b"A short note.".to_vec(),
		})
		.await;

	assert!(matches!(result, Err(Error::Blob { .. })));
	assert_eq!(blob.put_calls.load(Ordering::SeqCst), 1);
	assert!(queue.messages.lock().unwrap().is_empty());

	let documents = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM documents")
		.fetch_one(&service.db.pool)
		.await
		.expect("Failed to count documents.");
	let uploads = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM document_uploads")
		.fetch_one(&service.db.pool)
		.await
		.expect("Failed to count upload records.");

	assert_eq!(documents, 0);
	assert_eq!(uploads, 0);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set RECAP_PG_DSN to run."]
async fn oversized_document_is_rejected_before_any_write() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping oversized_document_is_rejected_before_any_write; set RECAP_PG_DSN to run this test.");

		return;
	};
	let cfg = super::test_config(test_db.dsn().to_string(), 3, 10, 100);
	let blob = Arc::new(MemoryBlobStore::new());
	let queue = Arc::new(MemoryWorkQueue::new());
	let service = super::build_service(cfg, blob.clone(), queue.clone())
		.await
		.expect("Failed to build service.");
	let now = OffsetDateTime::now_utc();

	super::seed_member(&service.db.pool, "m-oversize").await;
	super::seed_subscription(
		&service.db.pool,
		"m-oversize",
		"FREE",
		now - Duration::days(1),
		now + Duration::days(29),
	)
	.await;

	let category_id = super::seed_category(&service.db.pool, "m-oversize", "Notes").await;
	let result = service
		.upload_document(UploadDocumentRequest {
			member_id: "m-oversize".to_string(),
			category_id,
			name: "doc".to_string(),
			format: DocumentFormat::Txt,
			content: vec![b'a'; 100],
		})
		.await;

	assert!(matches!(result, Err(Error::DocumentTooLarge { chars: 100, max: 100 })));
	assert_eq!(blob.put_calls.load(Ordering::SeqCst), 0);
	assert!(queue.messages.lock().unwrap().is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
