/// Article primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Publication and update timestamps are stored and served in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
