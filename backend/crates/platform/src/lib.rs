//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (secure randomness, base64url, constant-time compare)
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Cookie management
//! - Anti-forgery (CSRF) token support

pub mod cookie;
pub mod crypto;
pub mod csrf;
pub mod password;
