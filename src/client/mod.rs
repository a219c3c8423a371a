//! # Request Clients
//!
//! Checked and unchecked request modes over one shared HTTP transport.
//! Checked calls assert success and deserialize; unchecked calls hand back
//! the raw outcome for external assertion.

mod transport;

pub mod checked;
pub mod unchecked;

pub use checked::CheckedClient;
pub use unchecked::UncheckedClient;
