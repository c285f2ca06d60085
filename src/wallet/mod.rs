//! Browser wallet boundary.
//!
//! Talks to an injected EIP-1193 provider (`window.ethereum`). Addresses are
//! treated as opaque display strings; chain id, signatures and balances are
//! never checked.

mod error;
mod provider;

pub use error::WalletError;
pub use provider::{request_accounts, watch_accounts};
