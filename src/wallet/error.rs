use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
	#[error("no injected wallet provider found")]
	ProviderMissing,
	#[error("wallet request failed: {0}")]
	Request(String),
	#[error("wallet returned no accounts")]
	NoAccounts,
}

impl From<JsValue> for WalletError {
	fn from(value: JsValue) -> Self {
		let message = value
			.as_string()
			.or_else(|| {
				js_sys::Reflect::get(&value, &JsValue::from_str("message"))
					.ok()
					.and_then(|m| m.as_string())
			})
			.unwrap_or_else(|| format!("{value:?}"));
		WalletError::Request(message)
	}
}
