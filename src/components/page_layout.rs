use leptos::prelude::*;

use crate::state::app::{AppState, View};

/// Frame for the static pages: back button, heading and body.
#[component]
pub fn PageLayout(
	#[prop(into)] title: String,
	#[prop(into)] description: String,
	children: Children,
) -> impl IntoView {
	let app = expect_context::<RwSignal<AppState>>();

	view! {
		<section class="page">
			<button class="btn btn--ghost page__back" on:click=move |_| app.update(|s| s.select_view(View::Home))>
				"← Back to Home"
			</button>
			<header class="page__header">
				<h1 class="gradient-text">{title}</h1>
				<p class="page__description">{description}</p>
			</header>
			<div class="page__body">{children()}</div>
		</section>
	}
}
