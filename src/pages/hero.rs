use std::time::Duration;

use leptos::prelude::*;

use crate::components::brand::HeroImage;
use crate::components::cards::FeatureCard;
use crate::components::wallet_connect::{WalletConnect, WalletVariant};
use crate::state::app::{AppState, View};

const TYPE_INTERVAL: Duration = Duration::from_millis(100);

const FEATURES: [(&str, &str, &str, &str); 6] = [
	(
		"✨",
		"AI-Powered Quests",
		"Generate personalized quests that adapt to player behavior and create unique gaming experiences.",
		"green",
	),
	(
		"🎮",
		"Seamless Integration",
		"Integrate with any Web3 game engine in minutes using our comprehensive SDK and documentation.",
		"blue",
	),
	(
		"🏆",
		"NFT Rewards",
		"Reward players with unique NFTs for completing quests and achieving milestones.",
		"purple",
	),
	(
		"⚡",
		"High Performance",
		"Built on NERO Chain for lightning-fast transactions and minimal gas fees.",
		"yellow",
	),
	(
		"🛡️",
		"Secure & Reliable",
		"Enterprise-grade security with 99.9% uptime and comprehensive audit trails.",
		"green",
	),
	(
		"👥",
		"Community Driven",
		"Join a thriving community of developers and gamers building the future of Web3 gaming.",
		"blue",
	),
];

const HERO_STATS: [(&str, &str); 3] = [
	("50+", "Games Integrated"),
	("1M+", "Quests Completed"),
	("24/7", "Support"),
];

/// First `n` characters of `text`.
fn typed_prefix(text: &str, n: usize) -> String {
	text.chars().take(n).collect()
}

/// Reveals `text` one character per tick, followed by a blinking caret.
#[component]
fn Typewriter(text: &'static str) -> impl IntoView {
	let shown = RwSignal::new(0usize);
	let total = text.chars().count();

	let tick = set_interval_with_handle(
		move || {
			if shown.get_untracked() < total {
				shown.update(|n| *n += 1);
			}
		},
		TYPE_INTERVAL,
	);
	if let Ok(handle) = tick {
		on_cleanup(move || handle.clear());
	}

	view! {
		<span class="typewriter">
			{move || typed_prefix(text, shown.get())}
			<span class="typewriter__caret" />
		</span>
	}
}

/// Landing view: headline, calls to action and feature grid.
#[component]
pub fn Hero() -> impl IntoView {
	let app = expect_context::<RwSignal<AppState>>();

	view! {
		<section class="hero">
			<div class="hero__grid">
				<div class="hero__copy">
					<h1 class="hero__title">
						<span class="gradient-text">"Unleash the Power of"</span>
						<br />
						<Typewriter text="Web3 Quests" />
					</h1>
					<p class="hero__subtitle">
						"The ultimate plug-and-play quest engine for Web3 gaming. Create engaging quests, reward players with NFTs, and boost retention with AI-powered experiences."
					</p>
					<div class="hero__actions">
						<WalletConnect variant=WalletVariant::Hero />
						<button
							class="btn btn--ghost btn--large"
							on:click=move |_| app.update(|s| s.select_view(View::Product))
						>
							"Explore Features"
						</button>
					</div>
					<div class="hero__stats">
						{HERO_STATS
							.into_iter()
							.map(|(value, label)| {
								view! {
									<div class="hero__stat">
										<div class="hero__stat-value">{value}</div>
										<div class="muted">{label}</div>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>

				<div class="hero__art">
					<HeroImage />
					<div class="hero__orb hero__orb--green" />
					<div class="hero__orb hero__orb--blue" />
					<div class="hero__orb hero__orb--purple" />
					<svg class="hero__lines" viewBox="0 0 100 100">
						<line x1="25" y1="25" x2="50" y2="50" stroke="rgba(0, 255, 163, 0.3)" stroke-width="0.5" />
						<line x1="75" y1="25" x2="50" y2="50" stroke="rgba(0, 212, 255, 0.3)" stroke-width="0.5" />
						<line x1="75" y1="75" x2="50" y2="50" stroke="rgba(157, 78, 221, 0.3)" stroke-width="0.5" />
						<line x1="25" y1="75" x2="50" y2="50" stroke="rgba(247, 37, 133, 0.3)" stroke-width="0.5" />
					</svg>
				</div>
			</div>

			<div class="grid grid--3 hero__features">
				{FEATURES
					.into_iter()
					.map(|(icon, title, description, tone)| {
						view! { <FeatureCard icon=icon title=title description=description tone=tone /> }
					})
					.collect_view()}
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn typed_prefix_counts_characters() {
		assert_eq!(typed_prefix("Web3 Quests", 0), "");
		assert_eq!(typed_prefix("Web3 Quests", 4), "Web3");
		assert_eq!(typed_prefix("Web3 Quests", 99), "Web3 Quests");
		assert_eq!(typed_prefix("∞∞", 1), "∞");
	}
}
