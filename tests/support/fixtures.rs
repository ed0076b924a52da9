//! Test fixtures and constants.

/// Standard test secrets used across multiple tests.
pub const STANDARD_SECRETS: &[(&str, &str)] = &[
    ("db_password", "postgres://localhost/mydb"),
    ("api_key", "sk-test-12345"),
    ("jwt_secret", "super-secret-jwt-token"),
    ("redis_url", "redis://localhost:6379"),
    ("s3_bucket", "my-app-bucket"),
];

/// A plaintext with the characters most likely to upset an encoding.
pub const AWKWARD_PLAINTEXT: &str = "p@ssw0rd!#$% with spaces\nand a newline, plus 日本語";
