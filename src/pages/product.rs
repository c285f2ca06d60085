use leptos::prelude::*;

use crate::components::cards::Badge;
use crate::components::page_layout::PageLayout;
use crate::state::app::View;

const FEATURES: [(&str, &str, &str, &str); 6] = [
	(
		"🛠️",
		"Quest Engine",
		"Create dynamic on-chain and off-chain quests with real-time validation and customizable triggers.",
		"green",
	),
	(
		"🧑‍💻",
		"Developer SDK",
		"Lightweight integration for JavaScript, Unity, and Web3 frameworks with full documentation.",
		"blue",
	),
	(
		"🤖",
		"AI Quest Generator",
		"Personalized quests powered by AI that analyzes player behavior and wallet activity.",
		"purple",
	),
	(
		"📊",
		"Analytics Dashboard",
		"Real-time insights on user engagement, quest performance, and reward distribution.",
		"yellow",
	),
	(
		"🎁",
		"NFT Rewards",
		"Instant NFT minting and distribution with customizable rarity and utility features.",
		"pink",
	),
	("⚡", "High Performance", "Built on NERO Chain for lightning-fast transactions and minimal gas fees.", "orange"),
];

const SDK_SNIPPET: &str = r#"// Initialize NERO Quests SDK
const quests = new NeroQuests({
  apiKey: 'your-api-key',
  chainId: 'nero-mainnet'
})

// Create a quest
await quests.createQuest({
  title: 'Daily Login Streak',
  type: 'daily',
  reward: { xp: 100, nft: 'streak-badge' },
  conditions: [{ type: 'login', count: 7 }]
})

// Listen for quest completion
quests.on('questCompleted', (data) => {
  console.log('Quest completed!', data)
})"#;

#[component]
pub fn Product() -> impl IntoView {
	view! {
		<PageLayout title="Product Suite" description=View::Product.blurb()>
			<div class="grid grid--3">
				{FEATURES
					.into_iter()
					.map(|(icon, title, description, tone)| {
						view! {
							<div class=format!("card feature-card feature-card--{tone}")>
								<div class="feature-card__icon">{icon}</div>
								<h3>{title}</h3>
								<p>{description}</p>
								<Badge text="Available Now" tone=tone />
							</div>
						}
					})
					.collect_view()}
			</div>
			<div class="card code-card">
				<h2>"Quick Integration"</h2>
				<pre>
					<code>{SDK_SNIPPET}</code>
				</pre>
			</div>
		</PageLayout>
	}
}
