use std::time::Duration;

use leptos::prelude::*;
use log::{debug, info};

use crate::components::cards::{Badge, ProgressBar, StatCard};
use crate::state::admin::{
	AI_MODELS, AdminQuest, AdminQuests, AdminSettings, AdminStats, GenerationFrequency, QuestDraft,
	sample_admin_quests,
};
use crate::state::dashboard::format_count;
use crate::state::quests::{Category, Difficulty, QuestKind};

const CATALOGUE_LOAD_DELAY: Duration = Duration::from_millis(300);

const RECENT_ACTIVITY: [(&str, &str, &str); 3] = [
	("🏆", "Daily Login Streak completed", "User 0x1234...5678 • 2 minutes ago"),
	("➕", "New quest created: Trading Master", "Admin • 1 hour ago"),
	("🪙", "DeFi Explorer quest completed", "User 0x9876...4321 • 3 hours ago"),
];

const ENGAGEMENT: [(&str, &str, &str); 4] = [
	("Daily Active Users", "2,847", "purple"),
	("Weekly Active Users", "12,394", "blue"),
	("Average Session Time", "24m", "green"),
	("Quest Completion Rate", "73%", "yellow"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AdminTab {
	#[default]
	Overview,
	Quests,
	Analytics,
	Settings,
}

impl AdminTab {
	const ALL: [AdminTab; 4] = [AdminTab::Overview, AdminTab::Quests, AdminTab::Analytics, AdminTab::Settings];

	fn label(self) -> &'static str {
		match self {
			AdminTab::Overview => "📊 Overview",
			AdminTab::Quests => "🎯 Quest Management",
			AdminTab::Analytics => "📈 Analytics",
			AdminTab::Settings => "⚙️ Settings",
		}
	}
}

#[component]
fn Overview(catalogue: RwSignal<AdminQuests>) -> impl IntoView {
	let stat = move |pick: fn(&AdminStats) -> u64| {
		Signal::derive(move || format_count(catalogue.with(|c| pick(&c.stats()))))
	};

	view! {
		<div class="grid grid--4">
			<StatCard title="Total Quests" value=stat(|s| s.total_quests as u64) icon="🎯" tone="blue" />
			<StatCard title="Active Quests" value=stat(|s| s.active_quests as u64) icon="⚡" tone="green" />
			<StatCard title="Total Completions" value=stat(|s| s.total_completions) icon="👥" tone="purple" />
			<StatCard title="Avg Completion Rate" value=stat(|s| s.avg_completions) icon="📈" tone="yellow" />
		</div>
		<div class="card">
			<h3 class="card__title">"Recent Activity"</h3>
			<div class="stack">
				{RECENT_ACTIVITY
					.into_iter()
					.map(|(icon, title, meta)| {
						view! {
							<div class="activity">
								<span class="activity__icon">{icon}</span>
								<div>
									<p>{title}</p>
									<p class="muted small">{meta}</p>
								</div>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}

#[component]
fn CreateQuestForm(catalogue: RwSignal<AdminQuests>, creating: RwSignal<bool>) -> impl IntoView {
	let draft = RwSignal::new(QuestDraft::default());

	let submit = move |_| {
		let created = draft.with_untracked(|d| catalogue.try_update(|c| c.create(d)).flatten());
		if let Some(id) = created {
			info!("quest {id} created");
			draft.set(QuestDraft::default());
			creating.set(false);
		}
	};

	view! {
		<div class="card form">
			<h3 class="card__title">"Create New Quest"</h3>
			<div class="grid grid--2">
				<label>
					"Title"
					<input
						placeholder="Enter quest title"
						prop:value=move || draft.with(|d| d.title.clone())
						on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
					/>
				</label>
				<label>
					"Category"
					<select on:change=move |ev| {
						if let Some(c) = Category::parse(&event_target_value(&ev)) {
							draft.update(|d| d.category = c);
						}
					}>
						{Category::ALL
							.into_iter()
							.map(|c| {
								view! {
									<option value=c.as_str() selected=move || draft.with(|d| d.category == c)>
										{c.label()}
									</option>
								}
							})
							.collect_view()}
					</select>
				</label>
			</div>
			<label>
				"Description"
				<textarea
					placeholder="Describe the quest objectives"
					prop:value=move || draft.with(|d| d.description.clone())
					on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
				/>
			</label>
			<div class="grid grid--3">
				<label>
					"Type"
					<select on:change=move |ev| {
						if let Some(k) = QuestKind::parse(&event_target_value(&ev)) {
							draft.update(|d| d.kind = k);
						}
					}>
						{QuestKind::ALL
							.into_iter()
							.map(|k| {
								view! {
									<option value=k.as_str() selected=move || draft.with(|d| d.kind == k)>
										{k.as_str()}
									</option>
								}
							})
							.collect_view()}
					</select>
				</label>
				<label>
					"Difficulty"
					<select on:change=move |ev| {
						if let Some(level) = Difficulty::parse(&event_target_value(&ev)) {
							draft.update(|d| d.difficulty = level);
						}
					}>
						{Difficulty::ALL
							.into_iter()
							.map(|level| {
								view! {
									<option value=level.as_str() selected=move || draft.with(|d| d.difficulty == level)>
										{level.as_str()}
									</option>
								}
							})
							.collect_view()}
					</select>
				</label>
				<label>
					"XP Reward"
					<input
						type="number"
						prop:value=move || draft.with(|d| d.xp_reward.clone())
						on:input=move |ev| draft.update(|d| d.xp_reward = event_target_value(&ev))
					/>
				</label>
			</div>
			<div class="grid grid--2">
				<label>
					"NFT Reward (Optional)"
					<input
						placeholder="NFT name"
						prop:value=move || draft.with(|d| d.nft_reward.clone())
						on:input=move |ev| draft.update(|d| d.nft_reward = event_target_value(&ev))
					/>
				</label>
				<label>
					"Token Reward (Optional)"
					<input
						type="number"
						placeholder="Token amount"
						prop:value=move || draft.with(|d| d.token_reward.clone())
						on:input=move |ev| draft.update(|d| d.token_reward = event_target_value(&ev))
					/>
				</label>
			</div>
			<label class="switch">
				<input
					type="checkbox"
					prop:checked=move || draft.with(|d| d.is_active)
					on:change=move |ev| draft.update(|d| d.is_active = event_target_checked(&ev))
				/>
				"Active"
			</label>
			<div class="row">
				<button
					class="btn btn--primary"
					disabled=move || !draft.with(|d| d.is_submittable())
					on:click=submit
				>
					"Create Quest"
				</button>
				<button class="btn btn--outline" on:click=move |_| creating.set(false)>
					"Cancel"
				</button>
			</div>
		</div>
	}
}

#[component]
fn AdminQuestRow(quest: AdminQuest, catalogue: RwSignal<AdminQuests>) -> impl IntoView {
	let (toggle_id, delete_id) = (quest.id.clone(), quest.id.clone());
	let toggle = move |_| {
		if catalogue.try_update(|c| c.toggle_active(&toggle_id)).unwrap_or(false) {
			debug!("quest {toggle_id} toggled");
		}
	};
	let delete = move |_| {
		if catalogue.try_update(|c| c.delete(&delete_id)).unwrap_or(false) {
			info!("quest {delete_id} deleted");
		}
	};
	let (status, tone) = if quest.is_active { ("Active", "green") } else { ("Inactive", "gray") };

	view! {
		<div class="card admin-quest">
			<div class="admin-quest__body">
				<div class="row">
					<h3>{quest.title.clone()}</h3>
					<Badge text=status tone=tone />
					<Badge text=quest.kind.as_str() tone="blue" />
					<Badge text=quest.difficulty.as_str() tone=quest.difficulty.tone() />
					<Badge text=quest.category.label() tone="purple" />
				</div>
				<p class="muted">{quest.description.clone()}</p>
				<div class="row small">
					<span class="reward--xp">{format!("{} XP", quest.xp_reward)}</span>
					{quest.nft_reward.clone().map(|nft| view! { <span class="reward--nft">{format!("NFT: {nft}")}</span> })}
					{quest
						.token_reward
						.map(|amount| view! { <span class="reward--token">{format!("{amount} Tokens")}</span> })}
					<span class="muted">{format!("{} completions", format_count(u64::from(quest.completions)))}</span>
				</div>
			</div>
			<div class="row">
				<label class="switch" title="Toggle active">
					<input type="checkbox" prop:checked=quest.is_active on:change=toggle />
				</label>
				<button class="btn btn--ghost btn--danger" title="Delete" on:click=delete>
					"🗑"
				</button>
			</div>
		</div>
	}
}

#[component]
fn QuestManagement(catalogue: RwSignal<AdminQuests>) -> impl IntoView {
	let creating = RwSignal::new(false);

	view! {
		<div class="row row--between">
			<h2>"Quest Management"</h2>
			<button class="btn btn--primary" on:click=move |_| creating.set(true)>
				"+ Create Quest"
			</button>
		</div>
		<Show when=move || creating.get()>
			<CreateQuestForm catalogue=catalogue creating=creating />
		</Show>
		<div class="stack">
			{move || {
				catalogue
					.get()
					.quests
					.into_iter()
					.map(|quest| view! { <AdminQuestRow quest=quest catalogue=catalogue /> })
					.collect_view()
			}}
		</div>
	}
}

#[component]
fn Analytics(catalogue: RwSignal<AdminQuests>) -> impl IntoView {
	view! {
		<h2>"Analytics Dashboard"</h2>
		<div class="grid grid--2">
			<div class="card">
				<h3 class="card__title">"Quest Completion Rates"</h3>
				<div class="stack">
					{move || {
						catalogue
							.get()
							.quests
							.into_iter()
							.map(|quest| {
								view! {
									<div>
										<div class="row row--between small">
											<span>{quest.title.clone()}</span>
											<span>{format_count(u64::from(quest.completions))}</span>
										</div>
										<ProgressBar percent=quest.completion_bar_percent() />
									</div>
								}
							})
							.collect_view()
					}}
				</div>
			</div>
			<div class="card">
				<h3 class="card__title">"User Engagement"</h3>
				<div class="stack">
					{ENGAGEMENT
						.into_iter()
						.map(|(label, value, tone)| {
							view! {
								<div class="row row--between">
									<span class="muted">{label}</span>
									<span class=format!("metric metric--{tone}")>{value}</span>
								</div>
							}
						})
						.collect_view()}
				</div>
			</div>
		</div>
	}
}

/// Reward and AI knobs. Values stay in the page.
#[component]
fn Settings(settings: RwSignal<AdminSettings>) -> impl IntoView {
	view! {
		<h2>"System Settings"</h2>
		<div class="grid grid--2">
			<div class="card form">
				<h3 class="card__title">"Reward Configuration"</h3>
				<div class="grid grid--2">
					<label>
						"Base XP Multiplier"
						<input
							type="number"
							step="0.1"
							prop:value=move || settings.with(|s| s.base_xp_multiplier.clone())
							on:input=move |ev| settings.update(|s| s.base_xp_multiplier = event_target_value(&ev))
						/>
					</label>
					<label>
						"Token Reward Rate"
						<input
							type="number"
							step="0.01"
							prop:value=move || settings.with(|s| s.token_reward_rate.clone())
							on:input=move |ev| settings.update(|s| s.token_reward_rate = event_target_value(&ev))
						/>
					</label>
				</div>
				<label class="switch">
					<input
						type="checkbox"
						prop:checked=move || settings.with(|s| s.auto_distribute)
						on:change=move |ev| settings.update(|s| s.auto_distribute = event_target_checked(&ev))
					/>
					"Auto-distribute rewards"
				</label>
				<label class="switch">
					<input
						type="checkbox"
						prop:checked=move || settings.with(|s| s.nft_minting)
						on:change=move |ev| settings.update(|s| s.nft_minting = event_target_checked(&ev))
					/>
					"Enable NFT minting"
				</label>
			</div>
			<div class="card form">
				<h3 class="card__title">"AI Quest Generation"</h3>
				<label class="switch">
					<input
						type="checkbox"
						prop:checked=move || settings.with(|s| s.ai_quests)
						on:change=move |ev| settings.update(|s| s.ai_quests = event_target_checked(&ev))
					/>
					"Enable AI-generated quests"
				</label>
				<label>
					"Generation Frequency"
					<select on:change=move |ev| {
						if let Some(f) = GenerationFrequency::parse(&event_target_value(&ev)) {
							settings.update(|s| s.ai_frequency = f);
						}
					}>
						{GenerationFrequency::ALL
							.into_iter()
							.map(|f| {
								view! {
									<option value=f.as_str() selected=move || settings.with(|s| s.ai_frequency == f)>
										{f.label()}
									</option>
								}
							})
							.collect_view()}
					</select>
				</label>
				<label>
					"AI Model"
					<select on:change=move |ev| {
						let value = event_target_value(&ev);
						if let Some((id, _)) = AI_MODELS.into_iter().find(|(id, _)| *id == value) {
							settings.update(|s| s.ai_model = id);
						}
					}>
						{AI_MODELS
							.into_iter()
							.map(|(id, label)| {
								view! {
									<option value=id selected=move || settings.with(|s| s.ai_model == id)>
										{label}
									</option>
								}
							})
							.collect_view()}
					</select>
				</label>
			</div>
		</div>
	}
}

/// Operator view over the quest catalogue. Nothing leaves the page.
#[component]
pub fn AdminPanel() -> impl IntoView {
	let catalogue = RwSignal::new(AdminQuests::default());
	let tab = RwSignal::new(AdminTab::default());
	let settings = RwSignal::new(AdminSettings::default());

	let load = set_timeout_with_handle(
		move || {
			catalogue.set(AdminQuests::new(sample_admin_quests()));
			debug!("admin catalogue seeded");
		},
		CATALOGUE_LOAD_DELAY,
	);
	if let Ok(handle) = load {
		on_cleanup(move || handle.clear());
	}

	view! {
		<section class="panel admin">
			<header class="panel__header">
				<h1 class="gradient-text gradient-text--gold">"Admin Dashboard"</h1>
				<p class="muted">"Manage quests, monitor performance, and configure rewards"</p>
			</header>
			<div class="tabs tabs--gold">
				{AdminTab::ALL
					.into_iter()
					.map(|t| {
						view! {
							<button
								class=move || if tab.get() == t { "tab tab--active" } else { "tab" }
								on:click=move |_| tab.set(t)
							>
								{t.label()}
							</button>
						}
					})
					.collect_view()}
			</div>
			{move || match tab.get() {
				AdminTab::Overview => view! { <Overview catalogue=catalogue /> }.into_any(),
				AdminTab::Quests => view! { <QuestManagement catalogue=catalogue /> }.into_any(),
				AdminTab::Analytics => view! { <Analytics catalogue=catalogue /> }.into_any(),
				AdminTab::Settings => view! { <Settings settings=settings /> }.into_any(),
			}}
		</section>
	}
}
