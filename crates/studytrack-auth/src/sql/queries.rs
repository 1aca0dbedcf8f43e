//! SQL queries for different databases.

/// Schema bootstrap, portable across PostgreSQL, MySQL and SQLite.
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id VARCHAR(64) PRIMARY KEY,
    username VARCHAR(255) NOT NULL UNIQUE,
    email VARCHAR(255) NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
)
"#;

/// Insert a new user (PostgreSQL).
pub const INSERT_USER_PG: &str = r#"
INSERT INTO users (id, username, email, password_hash)
VALUES ($1, $2, $3, $4)
"#;

/// Insert a new user (MySQL/SQLite).
pub const INSERT_USER_MYSQL: &str = r#"
INSERT INTO users (id, username, email, password_hash)
VALUES (?, ?, ?, ?)
"#;

/// Find a user by username (PostgreSQL).
pub const FIND_BY_USERNAME_PG: &str = r#"
SELECT id, username, email, password_hash
FROM users
WHERE username = $1
"#;

/// Find a user by username (MySQL/SQLite).
pub const FIND_BY_USERNAME_MYSQL: &str = r#"
SELECT id, username, email, password_hash
FROM users
WHERE username = ?
"#;

/// Find a user by email (PostgreSQL).
pub const FIND_BY_EMAIL_PG: &str = r#"
SELECT id, username, email, password_hash
FROM users
WHERE email = $1
"#;

/// Find a user by email (MySQL/SQLite).
pub const FIND_BY_EMAIL_MYSQL: &str = r#"
SELECT id, username, email, password_hash
FROM users
WHERE email = ?
"#;

/// Single existence check on either username or email (PostgreSQL).
pub const EXISTS_PG: &str = r#"
SELECT 1
FROM users
WHERE username = $1 OR email = $2
LIMIT 1
"#;

/// Single existence check on either username or email (MySQL/SQLite).
pub const EXISTS_MYSQL: &str = r#"
SELECT 1
FROM users
WHERE username = ? OR email = ?
LIMIT 1
"#;
