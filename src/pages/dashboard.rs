use std::time::Duration;

use leptos::prelude::*;
use log::debug;

use crate::components::cards::{Badge, ProgressBar, StatCard};
use crate::state::app::AppState;
use crate::state::dashboard::{Achievement, RECENT_ACHIEVEMENTS, UserStats, format_count};
use crate::state::wallet::truncate_address;

const STATS_LOAD_DELAY: Duration = Duration::from_millis(1000);

#[component]
fn AchievementItem(achievement: Achievement) -> impl IntoView {
	let rarity = achievement.rarity;
	view! {
		<div class="achievement">
			<div class="achievement__body">
				<span class="achievement__icon">"🏅"</span>
				<div>
					<h4>{achievement.title}</h4>
					<p class="muted">{achievement.description}</p>
				</div>
			</div>
			<div class="achievement__meta">
				<Badge text=rarity.label() tone=rarity.tone() />
				<p class="muted small">{achievement.time}</p>
			</div>
		</div>
	}
}

/// Player overview: level progress, headline stats and recent achievements.
#[component]
pub fn Dashboard() -> impl IntoView {
	let app = expect_context::<RwSignal<AppState>>();
	let stats = RwSignal::new(UserStats::default());

	let load = set_timeout_with_handle(
		move || {
			stats.set(UserStats::sample());
			debug!("dashboard stats loaded");
		},
		STATS_LOAD_DELAY,
	);
	if let Ok(handle) = load {
		on_cleanup(move || handle.clear());
	}

	let stat = move |pick: fn(&UserStats) -> u32| {
		Signal::derive(move || format_count(u64::from(stats.with(pick))))
	};

	view! {
		<section class="panel dashboard">
			<header class="panel__header">
				<h1 class="gradient-text">"Quest Dashboard"</h1>
				<p class="muted">
					"Welcome back, Quester! "
					{move || app.with(|s| truncate_address(&s.wallet_address))}
				</p>
			</header>

			<div class="card level-card">
				<div class="level-card__top">
					<div class="level-card__title">
						<span class="level-card__icon">"⭐"</span>
						<div>
							<h3>{move || format!("Level {}", stats.with(|s| s.current_level))}</h3>
							<p class="muted">"Quest Master"</p>
						</div>
					</div>
					<Badge text=Signal::derive(move || format!("Rank #{}", stats.with(|s| s.rank))) tone="yellow" />
				</div>
				<div class="level-card__progress">
					<div class="row row--between small">
						<span class="muted">
							{move || format!("Progress to Level {}", stats.with(|s| s.current_level + 1))}
						</span>
						<span>
							{move || {
								stats.with(|s| format!("{}/{} XP", s.xp_to_next_level, s.total_xp_for_next_level))
							}}
						</span>
					</div>
					<ProgressBar percent=Signal::derive(move || stats.with(|s| s.level_progress_percent())) />
				</div>
			</div>

			<div class="grid grid--4">
				<StatCard title="Quests Completed" value=stat(|s| s.quests_completed) icon="🎯" tone="blue" />
				<StatCard title="XP Earned" value=stat(|s| s.xp_earned) icon="⚡" tone="green" />
				<StatCard title="NFTs Claimed" value=stat(|s| s.nfts_claimed) icon="🎁" tone="purple" />
				<StatCard title="Day Streak" value=stat(|s| s.streak) icon="📈" tone="orange" />
			</div>

			<div class="card">
				<h3 class="card__title">"🏆 Recent Achievements"</h3>
				<div class="stack">
					{RECENT_ACHIEVEMENTS
						.into_iter()
						.map(|achievement| view! { <AchievementItem achievement=achievement /> })
						.collect_view()}
				</div>
			</div>
		</section>
	}
}
