//! Lodestar Session
//!
//! A session ties together the navigation cursor, the visit log, and the
//! bookmark index for one browsing run. Session state lives in memory only
//! and is dropped with the session.

mod error;
mod session;

pub use error::SessionError;
pub use session::Session;

pub type Result<T> = std::result::Result<T, SessionError>;
