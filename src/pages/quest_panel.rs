use std::time::Duration;

use leptos::prelude::*;
use log::{debug, info};

use crate::components::cards::{Badge, ProgressBar};
use crate::state::quests::{Quest, QuestBoard, QuestStatus, QuestTab, sample_quests};

const QUEST_LOAD_DELAY: Duration = Duration::from_millis(300);

fn start(board: RwSignal<QuestBoard>, id: &str) {
	if board.try_update(|b| b.start(id)).unwrap_or(false) {
		info!("quest {id} started");
	}
}

fn claim(board: RwSignal<QuestBoard>, id: &str) {
	if board.try_update(|b| b.claim(id)).unwrap_or(false) {
		info!("quest {id} reward claimed");
	}
}

fn rewards(quest: &Quest) -> impl IntoView + use<> {
	let nft = quest.nft_reward.is_some().then(|| view! { <span class="reward reward--nft">"🎁 NFT"</span> });
	let token = quest
		.token_reward
		.map(|amount| view! { <span class="reward reward--token">{format!("🪙 {amount}")}</span> });
	view! {
		<div class="rewards">
			<span class="reward reward--xp">{format!("⚡ {} XP", quest.xp_reward)}</span>
			{nft}
			{token}
		</div>
	}
}

#[component]
fn QuestCard(quest: Quest, board: RwSignal<QuestBoard>, selected: RwSignal<Option<String>>) -> impl IntoView {
	let id = quest.id.clone();
	let action = match quest.status {
		QuestStatus::Available => view! {
			<button class="btn btn--primary btn--block" on:click=move |_| start(board, &id)>
				"Start Quest"
			</button>
		}
		.into_any(),
		QuestStatus::Active if quest.can_claim() => view! {
			<button class="btn btn--gold btn--block" on:click=move |_| claim(board, &id)>
				"Claim Reward"
			</button>
		}
		.into_any(),
		QuestStatus::Active => view! {
			<button class="btn btn--outline btn--block" on:click=move |_| selected.set(Some(id.clone()))>
				"View Progress"
			</button>
		}
		.into_any(),
		QuestStatus::Completed => view! {
			<button class="btn btn--block" disabled=true>
				"Completed"
			</button>
		}
		.into_any(),
	};

	let progress = (quest.status == QuestStatus::Active).then(|| {
		let percent = quest.progress_percent();
		view! {
			<div class="quest-card__progress">
				<div class="row row--between small">
					<span class="muted">"Progress"</span>
					<span>{format!("{}/{}", quest.progress, quest.max_progress)}</span>
				</div>
				<ProgressBar percent=percent />
			</div>
		}
	});

	view! {
		<div class="card quest-card">
			<div class="quest-card__head">
				<div>
					<h3>{quest.title.clone()}</h3>
					<div class="row">
						<Badge text=quest.difficulty.as_str() tone=quest.difficulty.tone() />
						<Badge text=quest.kind.as_str() tone="blue" />
					</div>
				</div>
				<span class="quest-card__icon" title=quest.category.label()>
					{quest.category.icon()}
				</span>
			</div>
			<p class="muted">{quest.description.clone()}</p>
			{progress}
			<div class="row row--between">
				{rewards(&quest)}
				<span class="muted small">{format!("⏱ {}", quest.time_limit)}</span>
			</div>
			{action}
		</div>
	}
}

#[component]
fn QuestDetail(quest: Quest, board: RwSignal<QuestBoard>, selected: RwSignal<Option<String>>) -> impl IntoView {
	let close = move |_| selected.set(None);
	let id = quest.id.clone();
	let action = match quest.status {
		QuestStatus::Available => Some(
			view! {
				<button
					class="btn btn--primary btn--block"
					on:click=move |_| {
						start(board, &id);
						selected.set(None);
					}
				>
					"Start Quest"
				</button>
			}
			.into_any(),
		),
		QuestStatus::Active if quest.can_claim() => Some(
			view! {
				<button
					class="btn btn--gold btn--block"
					on:click=move |_| {
						claim(board, &id);
						selected.set(None);
					}
				>
					"Claim Reward"
				</button>
			}
			.into_any(),
		),
		_ => None,
	};

	view! {
		<div class="card modal__body" on:click=|ev| ev.stop_propagation()>
			<div class="row row--between">
				<h2>{quest.title.clone()}</h2>
				<button class="btn btn--ghost" on:click=close>
					"×"
				</button>
			</div>
			<p>{quest.description.clone()}</p>
			<div class="grid grid--2">
				<div class="card card--inset">
					<p class="muted small">"XP Reward"</p>
					<p class="reward--xp">{quest.xp_reward}</p>
				</div>
				{quest
					.token_reward
					.map(|amount| {
						view! {
							<div class="card card--inset">
								<p class="muted small">"Token Reward"</p>
								<p class="reward--token">{amount}</p>
							</div>
						}
					})}
			</div>
			{quest
				.nft_reward
				.clone()
				.map(|nft| {
					view! {
						<div class="card card--inset">
							<p class="muted small">"NFT Reward"</p>
							<p class="reward--nft">{nft}</p>
						</div>
					}
				})}
			<div class="quest-card__progress">
				<div class="row row--between small">
					<span class="muted">"Progress"</span>
					<span>{format!("{}/{}", quest.progress, quest.max_progress)}</span>
				</div>
				<ProgressBar percent=quest.progress_percent() />
			</div>
			{action}
		</div>
	}
}

/// Tabbed quest board with a detail modal.
#[component]
pub fn QuestPanel() -> impl IntoView {
	let board = RwSignal::new(QuestBoard::default());
	let tab = RwSignal::new(QuestTab::default());
	let selected = RwSignal::new(None::<String>);

	let load = set_timeout_with_handle(
		move || {
			board.set(QuestBoard::new(sample_quests()));
			debug!("quest board seeded");
		},
		QUEST_LOAD_DELAY,
	);
	if let Ok(handle) = load {
		on_cleanup(move || handle.clear());
	}

	let tabs = QuestTab::ALL
		.into_iter()
		.map(|t| {
			view! {
				<button
					class=move || if tab.get() == t { "tab tab--active" } else { "tab" }
					on:click=move |_| tab.set(t)
				>
					{move || format!("{t} ({})", board.with(|b| b.count(t.status())))}
				</button>
			}
		})
		.collect_view();

	let cards = move || {
		let shown = board.with(|b| b.filtered(tab.get()));
		if shown.is_empty() {
			return view! { <p class="muted empty">"No quests here yet."</p> }.into_any();
		}
		shown
			.into_iter()
			.map(|quest| view! { <QuestCard quest=quest board=board selected=selected /> })
			.collect_view()
			.into_any()
	};

	let modal = move || {
		let quest = selected.get().and_then(|id| board.with(|b| b.get(&id).cloned()))?;
		Some(view! {
			<div class="modal" on:click=move |_| selected.set(None)>
				<QuestDetail quest=quest board=board selected=selected />
			</div>
		})
	};

	view! {
		<section class="panel quest-panel">
			<header class="panel__header">
				<h2>"Available Quests"</h2>
				<p class="muted">"Complete quests to earn XP, NFTs, and tokens"</p>
			</header>
			<div class="tabs">{tabs}</div>
			<div class="grid grid--2">{cards}</div>
			{modal}
		</section>
	}
}
