use leptos::prelude::*;

use super::brand::Logo;
use super::wallet_connect::WalletConnect;
use crate::state::app::{AppState, View};

/// Sticky top bar: logo, wallet-gated view buttons and the wallet chip.
#[component]
pub fn Nav() -> impl IntoView {
	let app = expect_context::<RwSignal<AppState>>();
	let go = move |view: View| app.update(|s| s.select_view(view));
	let nav_class = move |view: View| {
		if app.with(|s| s.view == view) { "btn btn--nav btn--active" } else { "btn btn--nav" }
	};

	view! {
		<nav class="nav">
			<button class="nav__logo" on:click=move |_| go(View::Home)>
				<Logo />
			</button>
			<div class="nav__actions">
				<Show when=move || app.with(|s| s.is_connected())>
					<button class=move || nav_class(View::Dashboard) on:click=move |_| go(View::Dashboard)>
						"Dashboard"
					</button>
					<button class=move || nav_class(View::Admin) on:click=move |_| go(View::Admin)>
						"Admin"
					</button>
				</Show>
				<WalletConnect />
			</div>
		</nav>
	}
}
