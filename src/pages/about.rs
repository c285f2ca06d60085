use leptos::prelude::*;

use crate::components::page_layout::PageLayout;
use crate::state::app::View;

const VALUES: [(&str, &str, &str, &str); 4] = [
	(
		"🎯",
		"Mission-Driven",
		"Solving Web3's biggest challenge: user retention through meaningful quests.",
		"green",
	),
	(
		"👥",
		"Community-First",
		"Built by gamers, for gamers. Every feature is designed with the community in mind.",
		"blue",
	),
	(
		"💡",
		"Innovation",
		"Pushing the boundaries of what's possible in Web3 gaming and quest systems.",
		"purple",
	),
	(
		"❤️",
		"Passion",
		"We believe in the transformative power of blockchain gaming and decentralized experiences.",
		"pink",
	),
];

struct Member {
	name: &'static str,
	role: &'static str,
	background: &'static str,
}

const TEAM: [Member; 4] = [
	Member {
		name: "Alex Chen",
		role: "CEO & Co-Founder",
		background: "Former Riot Games, Web3 Gaming Pioneer",
	},
	Member {
		name: "Sarah Kim",
		role: "CTO & Co-Founder",
		background: "Ex-Ethereum Foundation, Blockchain Architect",
	},
	Member {
		name: "Marcus Rodriguez",
		role: "Head of Product",
		background: "Former Unity Technologies, Game Design Expert",
	},
	Member {
		name: "Emily Zhang",
		role: "Lead AI Engineer",
		background: "Ex-OpenAI, Machine Learning Specialist",
	},
];

const COMPANY_STATS: [(&str, &str); 4] = [
	("2024", "Founded"),
	("50+", "Games Integrated"),
	("1M+", "Quests Completed"),
	("24/7", "Support"),
];

/// Avatar text: first letter of each word.
fn initials(name: &str) -> String {
	name.split_whitespace().filter_map(|word| word.chars().next()).collect()
}

#[component]
pub fn About() -> impl IntoView {
	view! {
		<PageLayout title="About NERO Quests" description=View::About.blurb()>
			<div class="card mission">
				<h2>"Our Mission"</h2>
				<p>
					"We believe that Web3 gaming has the potential to revolutionize how players interact with digital worlds. However, the current ecosystem struggles with user retention and meaningful engagement. NERO Quests bridges this gap by providing developers with powerful, AI-driven tools to create compelling quest experiences that keep players coming back for more."
				</p>
			</div>

			<div class="grid grid--4">
				{VALUES
					.into_iter()
					.map(|(icon, title, description, tone)| {
						view! {
							<div class=format!("card feature-card feature-card--{tone}")>
								<div class="feature-card__icon">{icon}</div>
								<h3>{title}</h3>
								<p>{description}</p>
							</div>
						}
					})
					.collect_view()}
			</div>

			<h2 class="section-title">"Meet the Team"</h2>
			<div class="grid grid--2">
				{TEAM
					.iter()
					.map(|member| {
						view! {
							<div class="card member">
								<div class="member__avatar">{initials(member.name)}</div>
								<div>
									<h3>{member.name}</h3>
									<p class="member__role">{member.role}</p>
									<p class="muted small">{member.background}</p>
								</div>
							</div>
						}
					})
					.collect_view()}
			</div>

			<div class="card stats-strip">
				{COMPANY_STATS
					.into_iter()
					.map(|(value, label)| {
						view! {
							<div>
								<div class="stats-strip__value">{value}</div>
								<div class="muted">{label}</div>
							</div>
						}
					})
					.collect_view()}
			</div>
		</PageLayout>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn initials_take_each_word() {
		assert_eq!(initials("Marcus Rodriguez"), "MR");
		assert_eq!(initials("  Emily   Zhang "), "EZ");
		assert_eq!(initials(""), "");
	}
}
