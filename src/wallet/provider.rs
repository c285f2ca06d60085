use js_sys::{Array, Function, Object, Promise, Reflect};
use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::WalletError;

#[wasm_bindgen]
extern "C" {
	/// EIP-1193 provider injected by browser wallets.
	#[wasm_bindgen(extends = Object)]
	#[derive(Clone, Debug)]
	type Eip1193Provider;

	#[wasm_bindgen(method, catch)]
	fn request(this: &Eip1193Provider, args: &JsValue) -> Result<Promise, JsValue>;

	#[wasm_bindgen(method)]
	fn on(this: &Eip1193Provider, event: &str, listener: &Function);
}

fn injected_provider() -> Option<Eip1193Provider> {
	let window = web_sys::window()?;
	let value = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
	if value.is_undefined() || value.is_null() {
		return None;
	}
	Some(value.unchecked_into())
}

fn account_list(value: &JsValue) -> Vec<String> {
	if !Array::is_array(value) {
		return Vec::new();
	}
	Array::from(value)
		.iter()
		.filter_map(|account| account.as_string())
		.collect()
}

/// Asks the wallet for account access and returns the first account.
pub async fn request_accounts() -> Result<String, WalletError> {
	let provider = injected_provider().ok_or(WalletError::ProviderMissing)?;
	let args = Object::new();
	Reflect::set(
		&args,
		&JsValue::from_str("method"),
		&JsValue::from_str("eth_requestAccounts"),
	)?;

	let accounts = JsFuture::from(provider.request(&args)?).await?;
	let accounts = account_list(&accounts);
	debug!("wallet returned {} account(s)", accounts.len());
	accounts.into_iter().next().ok_or(WalletError::NoAccounts)
}

/// Subscribes to `accountsChanged`. The listener lives as long as the page.
pub fn watch_accounts(mut on_change: impl FnMut(Vec<String>) + 'static) -> Result<(), WalletError> {
	let provider = injected_provider().ok_or(WalletError::ProviderMissing)?;
	let listener = Closure::<dyn FnMut(JsValue)>::new(move |accounts: JsValue| {
		on_change(account_list(&accounts));
	});
	provider.on("accountsChanged", listener.as_ref().unchecked_ref());
	listener.forget();
	Ok(())
}
