/// Top-level views the page can switch between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
	#[default]
	Home,
	Dashboard,
	Admin,
	Product,
	About,
	Documentation,
	Community,
}

impl View {
	/// Title used on navigation cards.
	pub fn label(self) -> &'static str {
		match self {
			View::Home => "NERO Quests",
			View::Dashboard => "Dashboard",
			View::Admin => "Admin",
			View::Product => "Product",
			View::About => "About",
			View::Documentation => "Documentation",
			View::Community => "Community",
		}
	}

	/// Blurb shown in the footer's "Explore Our Platform" grid.
	pub fn blurb(self) -> &'static str {
		match self {
			View::Home => {
				"The ultimate plug-and-play quest engine for Web3 gaming. Create engaging quests, reward players with NFTs, and boost retention with AI-powered experiences."
			}
			View::Product => {
				"Explore our comprehensive suite of tools including Quest Engine, Developer SDK, AI Quest Generator, Analytics Dashboard, NFT Rewards system, and high-performance infrastructure built on NERO Chain."
			}
			View::About => {
				"Learn about our mission to solve Web3's biggest challenge: user retention. Meet our team of gaming veterans, blockchain experts, and AI specialists building the future of Web3 gaming."
			}
			View::Documentation => {
				"Get started with detailed technical documentation for integrating NERO Quests. Explore quest schemas, wallet setups, event listeners, smart contract APIs, and comprehensive guides."
			}
			View::Community => {
				"Join our thriving community of developers and gamers. Connect on Discord, follow us on Twitter, contribute on GitHub, and participate in hackathons and workshops."
			}
			View::Dashboard => {
				"Monitor your quest performance with real-time analytics, track user engagement, manage rewards, and optimize your Web3 gaming experience."
			}
			View::Admin => {
				"Comprehensive admin panel for quest management, user analytics, reward configuration, and system settings with AI-powered quest generation capabilities."
			}
		}
	}

	/// Footer card order.
	pub const EXPLORE: [View; 7] = [
		View::Home,
		View::Product,
		View::About,
		View::Documentation,
		View::Community,
		View::Dashboard,
		View::Admin,
	];
}

/// View selector and connected wallet, owned by the root page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
	pub view: View,
	pub wallet_address: String,
}

impl AppState {
	pub fn select_view(&mut self, view: View) {
		self.view = view;
	}

	/// Records the wallet address; a non-empty address jumps to the dashboard.
	pub fn connect_wallet(&mut self, address: impl Into<String>) {
		self.wallet_address = address.into();
		if !self.wallet_address.is_empty() {
			self.view = View::Dashboard;
		}
	}

	pub fn is_connected(&self) -> bool {
		!self.wallet_address.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_on_home_without_wallet() {
		let s = AppState::default();
		assert_eq!(s.view, View::Home);
		assert!(!s.is_connected());
	}

	#[test]
	fn connecting_switches_to_dashboard() {
		let mut s = AppState::default();
		s.select_view(View::About);
		s.connect_wallet("0x1234567890abcdef1234567890abcdef12345678");
		assert_eq!(s.view, View::Dashboard);
		assert!(s.is_connected());
	}

	#[test]
	fn empty_address_keeps_current_view() {
		let mut s = AppState::default();
		s.select_view(View::Community);
		s.connect_wallet("");
		assert_eq!(s.view, View::Community);
		assert!(!s.is_connected());
	}

	#[test]
	fn disconnect_clears_address_but_not_view() {
		let mut s = AppState::default();
		s.connect_wallet("0xabc");
		s.connect_wallet(String::new());
		assert_eq!(s.view, View::Dashboard);
		assert_eq!(s.wallet_address, "");
	}

	#[test]
	fn select_view_sets_view() {
		let mut s = AppState::default();
		for v in View::EXPLORE {
			s.select_view(v);
			assert_eq!(s.view, v);
		}
	}
}
