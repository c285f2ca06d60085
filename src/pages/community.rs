use leptos::prelude::*;

use crate::components::cards::Badge;
use crate::components::page_layout::PageLayout;
use crate::state::app::View;

const PLATFORMS: [(&str, &str, &str, &str, &str); 4] = [
	(
		"💬",
		"Discord",
		"Join our active community for real-time discussions, support, and updates",
		"12,500+",
		"purple",
	),
	(
		"🐦",
		"Twitter",
		"Follow us for the latest news, announcements, and Web3 gaming insights",
		"8,200+",
		"blue",
	),
	("🐙", "GitHub", "Contribute to our open-source projects and explore our codebase", "1,800+", "gray"),
	("🗣️", "Forum", "In-depth discussions, feature requests, and technical deep-dives", "5,600+", "green"),
];

#[component]
pub fn Community() -> impl IntoView {
	view! {
		<PageLayout title="Community" description=View::Community.blurb()>
			<div class="grid grid--2">
				{PLATFORMS
					.into_iter()
					.map(|(icon, name, description, members, tone)| {
						view! {
							<div class=format!("card platform feature-card--{tone}")>
								<div class="row row--between">
									<div class="row">
										<span class="feature-card__icon">{icon}</span>
										<h3>{name}</h3>
									</div>
									<Badge text=members tone=tone />
								</div>
								<p class="muted">{description}</p>
								<button class="btn btn--outline btn--block">{format!("Join {name}")}</button>
							</div>
						}
					})
					.collect_view()}
			</div>
		</PageLayout>
	}
}
