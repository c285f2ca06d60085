use leptos::prelude::*;

/// Headline figure with an icon, e.g. "Quests Completed 47".
#[component]
pub fn StatCard(
	#[prop(into)] title: String,
	#[prop(into)] value: Signal<String>,
	icon: &'static str,
	/// Accent colour class suffix.
	#[prop(default = "green")]
	tone: &'static str,
) -> impl IntoView {
	view! {
		<div class=format!("card stat-card stat-card--{tone}")>
			<div>
				<p class="stat-card__title">{title}</p>
				<p class="stat-card__value">{move || value.get()}</p>
			</div>
			<span class="stat-card__icon">{icon}</span>
		</div>
	}
}

#[component]
pub fn FeatureCard(
	icon: &'static str,
	title: &'static str,
	description: &'static str,
	#[prop(default = "green")] tone: &'static str,
) -> impl IntoView {
	view! {
		<div class=format!("card feature-card feature-card--{tone}")>
			<div class="feature-card__icon">{icon}</div>
			<h3>{title}</h3>
			<p>{description}</p>
		</div>
	}
}

/// Horizontal bar filled to `percent` (0..=100).
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<f64>) -> impl IntoView {
	view! {
		<div class="progress">
			<div
				class="progress__fill"
				style:width=move || format!("{:.1}%", percent.get().clamp(0.0, 100.0))
			/>
		</div>
	}
}

#[component]
pub fn Badge(#[prop(into)] text: Signal<String>, #[prop(default = "gray")] tone: &'static str) -> impl IntoView {
	view! { <span class=format!("badge badge--{tone}")>{move || text.get()}</span> }
}
