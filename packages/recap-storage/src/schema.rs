/// Statements are separated by `;`; none of them may contain an inline
/// semicolon (see `Db::ensure_schema`).
pub const SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS members (
\tmember_id TEXT PRIMARY KEY,
\tname TEXT NOT NULL,
\temail TEXT NOT NULL,
\tcreated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE TABLE IF NOT EXISTS categories (
\tcategory_id BIGSERIAL PRIMARY KEY,
\tmember_id TEXT NOT NULL REFERENCES members (member_id) ON DELETE CASCADE,
\tname TEXT NOT NULL,
\tcreated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX IF NOT EXISTS idx_categories_member ON categories (member_id);
CREATE TABLE IF NOT EXISTS subscriptions (
\tsubscription_id BIGSERIAL PRIMARY KEY,
\tmember_id TEXT NOT NULL REFERENCES members (member_id) ON DELETE CASCADE,
\tplan_type TEXT NOT NULL,
\tpurchased_at TIMESTAMPTZ NOT NULL,
\texpires_at TIMESTAMPTZ NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_subscriptions_member_purchased ON subscriptions (member_id, purchased_at DESC);
CREATE TABLE IF NOT EXISTS documents (
\tdocument_id BIGSERIAL PRIMARY KEY,
\tcategory_id BIGINT NOT NULL REFERENCES categories (category_id) ON DELETE CASCADE,
\tname TEXT NOT NULL,
\tsummary TEXT,
\tstorage_key TEXT NOT NULL UNIQUE,
\tformat TEXT NOT NULL,
\tstatus TEXT NOT NULL,
\tcreated_at TIMESTAMPTZ NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_documents_category ON documents (category_id);
CREATE TABLE IF NOT EXISTS document_uploads (
\tupload_id BIGSERIAL PRIMARY KEY,
\tmember_id TEXT NOT NULL,
\tdocument_id BIGINT NOT NULL,
\tuploaded_at TIMESTAMPTZ NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_document_uploads_member_time ON document_uploads (member_id, uploaded_at);
CREATE TABLE IF NOT EXISTS questions (
\tquestion_id BIGSERIAL PRIMARY KEY,
\tdocument_id BIGINT NOT NULL REFERENCES documents (document_id) ON DELETE CASCADE,
\tquestion TEXT NOT NULL,
\tanswer TEXT NOT NULL,
\tdelivered_count INTEGER NOT NULL DEFAULT 0,
\tcreated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX IF NOT EXISTS idx_questions_document ON questions (document_id)";
