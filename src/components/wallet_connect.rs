use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info, warn};

use crate::state::app::AppState;
use crate::state::wallet::{WalletState, truncate_address};
use crate::wallet::{WalletError, request_accounts};

/// Delay before the placeholder balance appears.
const BALANCE_DELAY_MS: u32 = 1000;
const INSTALL_WALLET: &str = "Please install MetaMask or another Web3 wallet!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WalletVariant {
	#[default]
	Compact,
	Hero,
}

impl WalletVariant {
	fn class(self) -> &'static str {
		match self {
			WalletVariant::Compact => "wallet",
			WalletVariant::Hero => "wallet wallet--hero",
		}
	}
}

fn alert_missing_provider() {
	warn!("no injected wallet provider");
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(INSTALL_WALLET);
	}
}

/// Small card-shaped wallet icon; lit once a wallet is connected.
#[component]
fn WalletIcon(#[prop(into)] connected: Signal<bool>) -> impl IntoView {
	view! {
		<div class=move || {
			if connected.get() { "wallet-icon wallet-icon--connected" } else { "wallet-icon" }
		}>
			<div class="wallet-icon__slot" />
			<div class="wallet-icon__clasp" />
		</div>
	}
}

/// Connect button that turns into an address/balance chip once connected.
///
/// Every instance shares the `WalletState` signal provided by the root page.
#[component]
pub fn WalletConnect(#[prop(optional)] variant: WalletVariant) -> impl IntoView {
	let app = expect_context::<RwSignal<AppState>>();
	let wallet = expect_context::<RwSignal<WalletState>>();
	let connected = Signal::derive(move || wallet.with(|w| w.is_connected()));

	let connect = move |_| {
		if wallet.with_untracked(|w| w.connecting) {
			return;
		}
		wallet.update(|w| w.begin_connect());
		spawn_local(async move {
			match request_accounts().await {
				Ok(address) => {
					info!("wallet connected: {}", truncate_address(&address));
					wallet.update(|w| w.connected(address.clone()));
					app.update(|s| s.connect_wallet(address));
					TimeoutFuture::new(BALANCE_DELAY_MS).await;
					wallet.update(|w| w.balance_loaded());
				}
				Err(WalletError::ProviderMissing) => {
					wallet.update(|w| w.failed());
					alert_missing_provider();
				}
				Err(err) => {
					error!("Connection error: {err}");
					wallet.update(|w| w.failed());
				}
			}
		});
	};

	let disconnect = move |_| {
		info!("wallet disconnected");
		wallet.update(|w| w.disconnect());
		app.update(|s| s.connect_wallet(""));
	};

	view! {
		<div class=variant.class()>
			{move || {
				if connected.get() {
					view! {
						<div class="wallet__connected">
							<div class="card wallet__chip">
								<WalletIcon connected=connected />
								<span class="wallet__dot" />
								<div>
									<div class="wallet__address">
										{move || wallet.with(|w| truncate_address(&w.address))}
									</div>
									<div class="wallet__balance">
										{move || wallet.with(|w| w.balance.clone())}
										" NERO"
									</div>
								</div>
							</div>
							<button class="btn btn--ghost btn--danger" title="Disconnect" on:click=disconnect>
								"⏻"
							</button>
						</div>
					}
						.into_any()
				} else {
					view! {
						<button
							class="btn btn--primary wallet__connect"
							disabled=move || wallet.with(|w| w.connecting)
							on:click=connect
						>
							<WalletIcon connected=connected />
							{move || {
								if wallet.with(|w| w.connecting) { "Connecting..." } else { "Connect Wallet" }
							}}
						</button>
					}
						.into_any()
				}
			}}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hero_variant_adds_modifier() {
		assert_eq!(WalletVariant::default().class(), "wallet");
		assert_eq!(WalletVariant::Hero.class(), "wallet wallet--hero");
	}
}
