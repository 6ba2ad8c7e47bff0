//! Authentication and account self-service use-cases

pub mod service;

pub use service::{AuthSession, GoogleProfile, IdTokenVerifier, IdentityService};
