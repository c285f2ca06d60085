use leptos::prelude::*;
use log::info;

use super::brand::Logo;
use crate::state::app::{AppState, View};

struct LinkColumn {
	heading: &'static str,
	links: [(&'static str, View); 5],
}

const COLUMNS: [LinkColumn; 3] = [
	LinkColumn {
		heading: "Product",
		links: [
			("🛠️ Quest Engine", View::Product),
			("🧑‍💻 Developer SDK", View::Product),
			("🤖 AI Quest Generator", View::Product),
			("📊 Analytics Dashboard", View::Product),
			("🎁 NFT Rewards", View::Product),
		],
	},
	LinkColumn {
		heading: "Resources",
		links: [
			("📚 Documentation", View::Documentation),
			("🔌 API Reference", View::Documentation),
			("🧑‍🏫 Tutorials", View::Documentation),
			("🌐 Community", View::Community),
			("🙋‍♂️ Support", View::Community),
		],
	},
	LinkColumn {
		heading: "Company",
		links: [
			("🏢 About Us", View::About),
			("🧑‍💼 Careers", View::About),
			("✍️ Blog", View::About),
			("🧳 Press Kit", View::About),
			("📩 Contact", View::About),
		],
	},
];

const LEGAL: [&str; 3] = ["🛡️ Privacy Policy", "📄 Terms of Service", "🍪 Cookie Policy"];

/// Footer rendered under the home view.
#[component]
pub fn Footer() -> impl IntoView {
	let app = expect_context::<RwSignal<AppState>>();
	let go = move |view: View| app.update(|s| s.select_view(view));
	let email = RwSignal::new(String::new());

	let explore = View::EXPLORE
		.into_iter()
		.map(|view| {
			view! {
				<div class="card explore-card">
					<h3>{view.label()}</h3>
					<p>{view.blurb()}</p>
					{(view != View::Home)
						.then(|| {
							view! {
								<button class="link" on:click=move |_| go(view)>
									"Learn More →"
								</button>
							}
						})}
				</div>
			}
		})
		.collect_view();

	let columns = COLUMNS
		.iter()
		.map(|column| {
			view! {
				<div class="footer__column">
					<h3>{column.heading}</h3>
					<ul>
						{column
							.links
							.into_iter()
							.map(|(label, view)| {
								view! {
									<li>
										<button class="link link--muted" on:click=move |_| go(view)>
											{label}
										</button>
									</li>
								}
							})
							.collect_view()}
					</ul>
				</div>
			}
		})
		.collect_view();

	let subscribe = move |_| {
		let address = email.get_untracked();
		if !address.trim().is_empty() {
			info!("newsletter signup for {}", address.trim());
			email.set(String::new());
		}
	};

	view! {
		<footer class="footer">
			<section class="footer__explore">
				<h2>"Explore Our Platform"</h2>
				<div class="grid grid--3">{explore}</div>
			</section>

			<div class="footer__columns">
				<div class="footer__column">
					<div class="nav__logo">
						<Logo />
					</div>
					<p class="muted">
						"NERO Quests is revolutionizing Web3 gaming with AI-powered quest systems, seamless integrations, and comprehensive reward mechanisms."
					</p>
				</div>
				{columns}
			</div>

			<div class="card footer__newsletter">
				<h3>"Stay Updated with NERO Quests"</h3>
				<p class="muted">
					"Get the latest updates on new features, partnerships, and Web3 gaming insights"
				</p>
				<div class="footer__signup">
					<input
						type="email"
						placeholder="Enter your email address"
						prop:value=move || email.get()
						on:input=move |ev| email.set(event_target_value(&ev))
					/>
					<button class="btn btn--primary" on:click=subscribe>
						"Subscribe"
					</button>
				</div>
			</div>

			<div class="footer__bottom">
				<span>"© 2024 NERO Quests. All rights reserved. Powered by NERO Chain."</span>
				<div class="footer__legal">
					{LEGAL
						.into_iter()
						.map(|label| {
							view! {
								<button class="link link--muted" on:click=move |_| go(View::About)>
									{label}
								</button>
							}
						})
						.collect_view()}
				</div>
			</div>
		</footer>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn footer_links_never_point_at_gated_views() {
		for column in &COLUMNS {
			for (_, view) in column.links {
				assert!(!matches!(view, View::Dashboard | View::Admin | View::Home));
			}
		}
	}
}
