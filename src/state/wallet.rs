/// Balance shown before the placeholder lookup completes.
pub const EMPTY_BALANCE: &str = "0.00";
/// Placeholder balance; no chain is queried.
pub const PLACEHOLDER_BALANCE: &str = "1.234";

/// Connect-button state for one wallet widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletState {
	pub address: String,
	pub connecting: bool,
	pub balance: String,
}

impl Default for WalletState {
	fn default() -> Self {
		Self {
			address: String::new(),
			connecting: false,
			balance: EMPTY_BALANCE.to_owned(),
		}
	}
}

impl WalletState {
	pub fn is_connected(&self) -> bool {
		!self.address.is_empty()
	}

	pub fn begin_connect(&mut self) {
		self.connecting = true;
	}

	pub fn connected(&mut self, address: impl Into<String>) {
		self.address = address.into();
		self.connecting = false;
	}

	/// A failed or rejected request leaves the widget as it was before.
	pub fn failed(&mut self) {
		self.connecting = false;
	}

	pub fn balance_loaded(&mut self) {
		if self.is_connected() {
			self.balance = PLACEHOLDER_BALANCE.to_owned();
		}
	}

	pub fn disconnect(&mut self) {
		*self = Self::default();
	}

	/// Applies an `accountsChanged` notification and returns the new address.
	pub fn accounts_changed(&mut self, accounts: &[String]) -> String {
		let address = accounts.first().cloned().unwrap_or_default();
		if address.is_empty() {
			self.disconnect();
		} else {
			self.address = address.clone();
		}
		address
	}
}

/// Shortens an address to `0x1234...abcd` for display.
pub fn truncate_address(address: &str) -> String {
	let chars: Vec<char> = address.chars().collect();
	if chars.len() <= 10 {
		return address.to_owned();
	}
	let head: String = chars[..6].iter().collect();
	let tail: String = chars[chars.len() - 4..].iter().collect();
	format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn truncates_long_addresses() {
		assert_eq!(
			truncate_address("0x1234567890abcdef1234567890abcdef1234abcd"),
			"0x1234...abcd"
		);
	}

	#[test]
	fn short_addresses_are_untouched() {
		assert_eq!(truncate_address(""), "");
		assert_eq!(truncate_address("0xabc"), "0xabc");
	}

	#[test]
	fn connect_flow() {
		let mut w = WalletState::default();
		w.begin_connect();
		assert!(w.connecting);
		w.connected("0xfeed");
		assert!(!w.connecting);
		assert!(w.is_connected());
		assert_eq!(w.balance, EMPTY_BALANCE);
		w.balance_loaded();
		assert_eq!(w.balance, PLACEHOLDER_BALANCE);
	}

	#[test]
	fn failure_resets_connecting_without_address() {
		let mut w = WalletState::default();
		w.begin_connect();
		w.failed();
		assert_eq!(w, WalletState::default());
	}

	#[test]
	fn balance_ignored_after_disconnect() {
		let mut w = WalletState::default();
		w.connected("0xfeed");
		w.disconnect();
		w.balance_loaded();
		assert_eq!(w.balance, EMPTY_BALANCE);
	}

	#[test]
	fn accounts_changed_to_empty_disconnects() {
		let mut w = WalletState::default();
		w.connected("0xfeed");
		w.balance_loaded();
		assert_eq!(w.accounts_changed(&[]), "");
		assert_eq!(w, WalletState::default());

		assert_eq!(w.accounts_changed(&["0xbeef".into(), "0xcafe".into()]), "0xbeef");
		assert_eq!(w.address, "0xbeef");
	}
}
