//! Bearer credential issuing and verification.
//!
//! This crate provides:
//! - HS256 JWT issuance with a fixed one-hour validity window
//! - Stateless verification (signature + expiry only, no revocation)

pub mod error;
pub mod token;

pub use error::{AuthError, AuthResult};
pub use token::{Claims, TokenService};
