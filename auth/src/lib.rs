//! Authentication primitives
//!
//! Reusable building blocks for credential handling:
//! - Password hashing (Argon2id)
//! - JWT signing and verification (HS256)
//!
//! This crate carries no domain knowledge. Services define their own claims
//! types and decide which secrets sign which token kind; access and refresh
//! tokens are expected to use two distinct `JwtHandler` instances so a leaked
//! secret for one kind cannot forge the other.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## JWT tokens
//! ```
//! use auth::JwtHandler;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Claims {
//!     sub: String,
//!     exp: i64,
//! }
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims { sub: "user123".into(), exp: i64::MAX };
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```

pub mod jwt;
pub mod password;

pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
