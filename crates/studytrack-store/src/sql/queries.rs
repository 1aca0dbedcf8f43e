//! SQL queries for different databases.
//!
//! The `seq` column provides storage order; `id` is the opaque identifier
//! handed out to clients. The marks mapping is stored as a JSON text column.

/// Schema bootstrap (PostgreSQL).
pub const CREATE_MARKS_TABLE_PG: &str = r#"
CREATE TABLE IF NOT EXISTS marks (
    seq BIGSERIAL PRIMARY KEY,
    id VARCHAR(64) NOT NULL UNIQUE,
    username VARCHAR(255) NOT NULL,
    marks TEXT NOT NULL
)
"#;

/// Schema bootstrap (MySQL).
pub const CREATE_MARKS_TABLE_MYSQL: &str = r#"
CREATE TABLE IF NOT EXISTS marks (
    seq BIGINT AUTO_INCREMENT PRIMARY KEY,
    id VARCHAR(64) NOT NULL UNIQUE,
    username VARCHAR(255) NOT NULL,
    marks TEXT NOT NULL
)
"#;

/// Schema bootstrap (SQLite).
pub const CREATE_MARKS_TABLE_SQLITE: &str = r#"
CREATE TABLE IF NOT EXISTS marks (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    username TEXT NOT NULL,
    marks TEXT NOT NULL
)
"#;

/// Insert a submission event (PostgreSQL).
pub const INSERT_MARKS_PG: &str = r#"
INSERT INTO marks (id, username, marks)
VALUES ($1, $2, $3)
"#;

/// Insert a submission event (MySQL/SQLite).
pub const INSERT_MARKS_MYSQL: &str = r#"
INSERT INTO marks (id, username, marks)
VALUES (?, ?, ?)
"#;

/// Replace the marks mapping of an owned record (PostgreSQL).
pub const UPDATE_MARKS_PG: &str = r#"
UPDATE marks
SET marks = $1
WHERE id = $2 AND username = $3
"#;

/// Replace the marks mapping of an owned record (MySQL/SQLite).
pub const UPDATE_MARKS_MYSQL: &str = r#"
UPDATE marks
SET marks = ?
WHERE id = ? AND username = ?
"#;

/// Delete an owned record (PostgreSQL).
pub const DELETE_MARKS_PG: &str = r#"
DELETE FROM marks
WHERE id = $1 AND username = $2
"#;

/// Delete an owned record (MySQL/SQLite).
pub const DELETE_MARKS_MYSQL: &str = r#"
DELETE FROM marks
WHERE id = ? AND username = ?
"#;

/// All records for a user in storage order (PostgreSQL).
pub const LIST_MARKS_PG: &str = r#"
SELECT id, username, marks
FROM marks
WHERE username = $1
ORDER BY seq
"#;

/// All records for a user in storage order (MySQL/SQLite).
pub const LIST_MARKS_MYSQL: &str = r#"
SELECT id, username, marks
FROM marks
WHERE username = ?
ORDER BY seq
"#;

/// Most recently inserted record for a user (PostgreSQL).
pub const LATEST_MARKS_PG: &str = r#"
SELECT id, username, marks
FROM marks
WHERE username = $1
ORDER BY seq DESC
LIMIT 1
"#;

/// Most recently inserted record for a user (MySQL/SQLite).
pub const LATEST_MARKS_MYSQL: &str = r#"
SELECT id, username, marks
FROM marks
WHERE username = ?
ORDER BY seq DESC
LIMIT 1
"#;
