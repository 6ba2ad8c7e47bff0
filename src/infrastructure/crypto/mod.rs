//! Cryptographic helpers: password hashing, JWT, OAuth token verification

pub mod google;
pub mod jwt;
pub mod password;
