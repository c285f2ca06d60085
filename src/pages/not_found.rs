use leptos::prelude::*;

/// 404 page for any path other than the root.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="page not-found">
			<h1 class="gradient-text">"404"</h1>
			<p class="muted">"This page wandered off the quest map."</p>
			<a class="btn btn--primary" href="/">
				"Back to Home"
			</a>
		</section>
	}
}
