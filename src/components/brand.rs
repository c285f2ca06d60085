use leptos::prelude::*;

/// Logo served next to the bundle by the static host.
pub const LOGO_SRC: &str = "/images/nero-logo-final.png";
/// Landing illustration, served the same way.
pub const HERO_IMAGE_SRC: &str = "/images/hero-image.png";

/// Logo image plus wordmark. Falls back to a CSS mark when the image fails to load.
#[component]
pub fn Logo() -> impl IntoView {
	let broken = RwSignal::new(false);

	view! {
		<Show
			when=move || !broken.get()
			fallback=|| view! { <span class="nav__mark">"N"</span> }
		>
			<img class="nav__logo-img" src=LOGO_SRC alt="NERO Logo" on:error=move |_| broken.set(true) />
		</Show>
		<span class="gradient-text">"NERO Quests"</span>
	}
}

/// Hero illustration. Hides itself if the asset is missing so the orbs carry the art.
#[component]
pub fn HeroImage() -> impl IntoView {
	let broken = RwSignal::new(false);

	view! {
		<Show when=move || !broken.get()>
			<img
				class="hero__image"
				src=HERO_IMAGE_SRC
				alt="NERO Quests Platform"
				on:error=move |_| broken.set(true)
			/>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn image_assets_live_under_images_dir() {
		for src in [LOGO_SRC, HERO_IMAGE_SRC] {
			assert!(src.starts_with("/images/"), "{src}");
			assert!(src.ends_with(".png"), "{src}");
		}
		assert_ne!(LOGO_SRC, HERO_IMAGE_SRC);
	}
}
