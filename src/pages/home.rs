use leptos::prelude::*;
use log::{debug, info};

use super::about::About;
use super::admin::AdminPanel;
use super::community::Community;
use super::dashboard::Dashboard;
use super::documentation::Documentation;
use super::hero::Hero;
use super::product::Product;
use super::quest_panel::QuestPanel;
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::web3_background::{FloatingElements, Web3Background};
use crate::state::app::{AppState, View};
use crate::state::wallet::{WalletState, truncate_address};
use crate::wallet::watch_accounts;

/// Root view switcher. Owns the app and wallet signals shared below it.
#[component]
pub fn Home() -> impl IntoView {
	let app = RwSignal::new(AppState::default());
	let wallet = RwSignal::new(WalletState::default());
	provide_context(app);
	provide_context(wallet);

	let subscribed = watch_accounts(move |accounts| {
		let address = wallet.try_update(|w| w.accounts_changed(&accounts)).unwrap_or_default();
		info!("accounts changed: {}", truncate_address(&address));
		app.update(|s| s.connect_wallet(address));
	});
	if let Err(err) = subscribed {
		debug!("not watching accounts: {err}");
	}

	let current = move || match app.with(|s| s.view) {
		View::Home => view! { <Hero /> }.into_any(),
		View::Dashboard => view! {
			<div class="stack stack--wide">
				<Dashboard />
				<QuestPanel />
			</div>
		}
		.into_any(),
		View::Admin => view! { <AdminPanel /> }.into_any(),
		View::Product => view! { <Product /> }.into_any(),
		View::About => view! { <About /> }.into_any(),
		View::Documentation => view! { <Documentation /> }.into_any(),
		View::Community => view! { <Community /> }.into_any(),
	};

	view! {
		<div class="app">
			<Web3Background />
			<FloatingElements />
			<Nav />
			<main class="app__main">{current}</main>
			<Show when=move || app.with(|s| shows_footer(s.view))>
				<Footer />
			</Show>
		</div>
	}
}

/// Only the landing view carries the site footer.
fn shows_footer(view: View) -> bool {
	view == View::Home
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn footer_only_on_landing_view() {
		assert!(shows_footer(View::Home));
		for view in View::EXPLORE.into_iter().filter(|v| *v != View::Home) {
			assert!(!shows_footer(view), "{view:?} should not show the footer");
		}
	}
}
