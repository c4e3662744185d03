//! Types stored per visitor.

pub mod session;

pub use session::keys as session_keys;
