use leptos::prelude::*;

use crate::components::page_layout::PageLayout;
use crate::state::app::View;

struct DocSection {
	icon: &'static str,
	title: &'static str,
	description: &'static str,
	items: [&'static str; 4],
	tone: &'static str,
}

const SECTIONS: [DocSection; 6] = [
	DocSection {
		icon: "🚀",
		title: "Quick Start",
		description: "Get up and running with NERO Quests in under 5 minutes",
		items: ["Installation", "Basic Setup", "First Quest", "Testing"],
		tone: "green",
	},
	DocSection {
		icon: "📦",
		title: "SDK Reference",
		description: "Complete API documentation for all supported platforms",
		items: ["JavaScript SDK", "Unity Plugin", "React Hooks", "Vue Components"],
		tone: "blue",
	},
	DocSection {
		icon: "🗂️",
		title: "Quest Schemas",
		description: "Learn how to structure and configure different quest types",
		items: ["Daily Quests", "Achievement Quests", "Social Quests", "Custom Logic"],
		tone: "purple",
	},
	DocSection {
		icon: "📜",
		title: "Smart Contracts",
		description: "Interact with NERO Chain smart contracts for quest validation",
		items: ["Contract ABIs", "Event Listeners", "Transaction Handling", "Gas Optimization"],
		tone: "yellow",
	},
	DocSection {
		icon: "⚙️",
		title: "Advanced Features",
		description: "Unlock the full potential of NERO Quests with advanced configurations",
		items: ["AI Quest Generation", "Custom Rewards", "Analytics Integration", "Webhooks"],
		tone: "pink",
	},
	DocSection {
		icon: "✅",
		title: "Best Practices",
		description: "Learn from successful implementations and common patterns",
		items: ["Quest Design", "User Experience", "Performance Tips", "Security Guidelines"],
		tone: "orange",
	},
];

#[component]
pub fn Documentation() -> impl IntoView {
	view! {
		<PageLayout title="Documentation" description=View::Documentation.blurb()>
			<div class="grid grid--3">
				{SECTIONS
					.iter()
					.map(|section| {
						view! {
							<div class=format!("card doc-section feature-card--{}", section.tone)>
								<div class="feature-card__icon">{section.icon}</div>
								<h3>{section.title}</h3>
								<p class="muted">{section.description}</p>
								<ul class="doc-section__items">
									{section
										.items
										.into_iter()
										.map(|item| {
											view! {
												<li class="row row--between">
													<span>{item}</span>
													<span class="muted small">"Guide"</span>
												</li>
											}
										})
										.collect_view()}
								</ul>
							</div>
						}
					})
					.collect_view()}
			</div>
		</PageLayout>
	}
}
