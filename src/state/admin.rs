//! Admin quest catalogue, creation form and overview aggregates.

use super::quests::{Category, Difficulty, QuestKind};

pub const DEFAULT_XP_REWARD: u32 = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct AdminQuest {
	pub id: String,
	pub title: String,
	pub description: String,
	pub kind: QuestKind,
	pub difficulty: Difficulty,
	pub xp_reward: u32,
	pub nft_reward: Option<String>,
	pub token_reward: Option<u32>,
	pub is_active: bool,
	pub completions: u32,
	pub category: Category,
}

impl AdminQuest {
	/// Width of the analytics bar; 100 completions fills it.
	pub fn completion_bar_percent(&self) -> f64 {
		f64::from(self.completions).min(100.0)
	}
}

/// Raw contents of the "Create New Quest" form.
///
/// Numeric fields hold whatever was typed; they are interpreted leniently
/// when the quest is created.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestDraft {
	pub title: String,
	pub description: String,
	pub kind: QuestKind,
	pub difficulty: Difficulty,
	pub xp_reward: String,
	pub nft_reward: String,
	pub token_reward: String,
	pub is_active: bool,
	pub category: Category,
}

impl Default for QuestDraft {
	fn default() -> Self {
		Self {
			title: String::new(),
			description: String::new(),
			kind: QuestKind::Daily,
			difficulty: Difficulty::Easy,
			xp_reward: DEFAULT_XP_REWARD.to_string(),
			nft_reward: String::new(),
			token_reward: String::new(),
			is_active: true,
			category: Category::Gaming,
		}
	}
}

impl QuestDraft {
	pub fn is_submittable(&self) -> bool {
		!self.title.trim().is_empty() && !self.description.trim().is_empty()
	}

	/// Unparseable or zero input falls back to the default reward.
	pub fn xp_reward(&self) -> u32 {
		match self.xp_reward.trim().parse::<u32>() {
			Ok(0) | Err(_) => DEFAULT_XP_REWARD,
			Ok(v) => v,
		}
	}

	pub fn token_reward(&self) -> Option<u32> {
		self.token_reward
			.trim()
			.parse::<u32>()
			.ok()
			.filter(|&v| v > 0)
	}

	pub fn nft_reward(&self) -> Option<String> {
		let nft = self.nft_reward.trim();
		(!nft.is_empty()).then(|| nft.to_owned())
	}
}

/// Values shown on the admin overview cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdminStats {
	pub total_quests: usize,
	pub active_quests: usize,
	pub total_completions: u64,
	pub avg_completions: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminQuests {
	pub quests: Vec<AdminQuest>,
}

impl AdminQuests {
	pub fn new(quests: Vec<AdminQuest>) -> Self {
		Self { quests }
	}

	pub fn toggle_active(&mut self, id: &str) -> bool {
		match self.quests.iter_mut().find(|q| q.id == id) {
			Some(q) => {
				q.is_active = !q.is_active;
				true
			}
			None => false,
		}
	}

	pub fn delete(&mut self, id: &str) -> bool {
		let before = self.quests.len();
		self.quests.retain(|q| q.id != id);
		self.quests.len() != before
	}

	fn next_id(&self) -> String {
		let max = self
			.quests
			.iter()
			.filter_map(|q| q.id.parse::<u64>().ok())
			.max()
			.unwrap_or(0);
		(max + 1).to_string()
	}

	/// Appends a quest built from `draft` and returns its id, or `None`
	/// when the title or description is blank.
	pub fn create(&mut self, draft: &QuestDraft) -> Option<String> {
		if !draft.is_submittable() {
			return None;
		}
		let id = self.next_id();
		self.quests.push(AdminQuest {
			id: id.clone(),
			title: draft.title.trim().to_owned(),
			description: draft.description.trim().to_owned(),
			kind: draft.kind,
			difficulty: draft.difficulty,
			xp_reward: draft.xp_reward(),
			nft_reward: draft.nft_reward(),
			token_reward: draft.token_reward(),
			is_active: draft.is_active,
			completions: 0,
			category: draft.category,
		});
		Some(id)
	}

	pub fn stats(&self) -> AdminStats {
		let total_quests = self.quests.len();
		let total_completions: u64 = self.quests.iter().map(|q| u64::from(q.completions)).sum();
		let avg_completions = if total_quests == 0 {
			0
		} else {
			(total_completions as f64 / total_quests as f64).round() as u64
		};
		AdminStats {
			total_quests,
			active_quests: self.quests.iter().filter(|q| q.is_active).count(),
			total_completions,
			avg_completions,
		}
	}
}

/// Reward and AI-generation settings on the admin Settings tab.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminSettings {
	pub base_xp_multiplier: String,
	pub token_reward_rate: String,
	pub auto_distribute: bool,
	pub nft_minting: bool,
	pub ai_quests: bool,
	pub ai_frequency: GenerationFrequency,
	pub ai_model: &'static str,
}

pub const AI_MODELS: [(&str, &str); 3] = [("gpt-4", "GPT-4"), ("gpt-3.5", "GPT-3.5"), ("claude", "Claude")];

impl Default for AdminSettings {
	fn default() -> Self {
		Self {
			base_xp_multiplier: "1.0".into(),
			token_reward_rate: "0.1".into(),
			auto_distribute: true,
			nft_minting: true,
			ai_quests: true,
			ai_frequency: GenerationFrequency::Daily,
			ai_model: AI_MODELS[0].0,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationFrequency {
	Hourly,
	Daily,
	Weekly,
}

impl GenerationFrequency {
	pub const ALL: [GenerationFrequency; 3] = [
		GenerationFrequency::Hourly,
		GenerationFrequency::Daily,
		GenerationFrequency::Weekly,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			GenerationFrequency::Hourly => "hourly",
			GenerationFrequency::Daily => "daily",
			GenerationFrequency::Weekly => "weekly",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			GenerationFrequency::Hourly => "Hourly",
			GenerationFrequency::Daily => "Daily",
			GenerationFrequency::Weekly => "Weekly",
		}
	}

	pub fn parse(s: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|f| f.as_str() == s)
	}
}

/// Catalogue loaded into the admin panel.
pub fn sample_admin_quests() -> Vec<AdminQuest> {
	vec![
		AdminQuest {
			id: "1".into(),
			title: "Daily Login Streak".into(),
			description: "Log in to the platform for 7 consecutive days".into(),
			kind: QuestKind::Daily,
			difficulty: Difficulty::Easy,
			xp_reward: 100,
			nft_reward: Some("Streak Badge".into()),
			token_reward: None,
			is_active: true,
			completions: 1247,
			category: Category::Gaming,
		},
		AdminQuest {
			id: "2".into(),
			title: "DeFi Explorer".into(),
			description: "Stake 100 NERO tokens in the liquidity pool".into(),
			kind: QuestKind::Weekly,
			difficulty: Difficulty::Medium,
			xp_reward: 500,
			nft_reward: None,
			token_reward: Some(10),
			is_active: true,
			completions: 89,
			category: Category::Defi,
		},
		AdminQuest {
			id: "3".into(),
			title: "Social Butterfly".into(),
			description: "Follow NERO on Twitter and retweet our latest post".into(),
			kind: QuestKind::Special,
			difficulty: Difficulty::Easy,
			xp_reward: 50,
			nft_reward: Some("Social NFT".into()),
			token_reward: None,
			is_active: false,
			completions: 2341,
			category: Category::Social,
		},
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn catalogue() -> AdminQuests {
		AdminQuests::new(sample_admin_quests())
	}

	#[test]
	fn toggle_twice_restores_flag() {
		let mut a = catalogue();
		let original = a.quests[2].is_active;
		assert!(a.toggle_active("3"));
		assert_eq!(a.quests[2].is_active, !original);
		assert!(a.toggle_active("3"));
		assert_eq!(a.quests[2].is_active, original);
	}

	#[test]
	fn delete_removes_exactly_one() {
		let mut a = catalogue();
		assert!(a.delete("2"));
		let ids: Vec<_> = a.quests.iter().map(|q| q.id.as_str()).collect();
		assert_eq!(ids, ["1", "3"]);
		assert!(!a.delete("2"));
		assert_eq!(a.quests.len(), 2);
	}

	#[test]
	fn stats_aggregate_by_linear_scan() {
		let stats = catalogue().stats();
		assert_eq!(stats.total_quests, 3);
		assert_eq!(stats.active_quests, 2);
		assert_eq!(stats.total_completions, 1247 + 89 + 2341);
		assert_eq!(stats.avg_completions, 1226);
	}

	#[test]
	fn stats_of_empty_catalogue_are_zero() {
		assert_eq!(AdminQuests::default().stats(), AdminStats::default());
	}

	#[test]
	fn blank_draft_is_not_created() {
		let mut a = catalogue();
		let draft = QuestDraft {
			title: "   ".into(),
			description: "something".into(),
			..QuestDraft::default()
		};
		assert_eq!(a.create(&draft), None);
		assert_eq!(a.quests.len(), 3);
	}

	#[test]
	fn create_appends_with_lenient_numbers() {
		let mut a = catalogue();
		let draft = QuestDraft {
			title: "Bridge Runner".into(),
			description: "Bridge assets to NERO Chain".into(),
			xp_reward: "lots".into(),
			token_reward: "0".into(),
			nft_reward: " Bridge Pass ".into(),
			category: Category::Defi,
			is_active: false,
			..QuestDraft::default()
		};
		let id = a.create(&draft).unwrap();
		assert_eq!(id, "4");
		let q = a.quests.last().unwrap();
		assert_eq!(q.xp_reward, DEFAULT_XP_REWARD);
		assert_eq!(q.token_reward, None);
		assert_eq!(q.nft_reward.as_deref(), Some("Bridge Pass"));
		assert_eq!(q.completions, 0);
		assert!(!q.is_active);
	}

	#[test]
	fn created_ids_stay_unique_after_delete() {
		let mut a = catalogue();
		a.delete("3");
		let draft = QuestDraft {
			title: "A".into(),
			description: "B".into(),
			token_reward: "25".into(),
			..QuestDraft::default()
		};
		let id = a.create(&draft).unwrap();
		assert_eq!(id, "3");
		assert_eq!(a.quests.last().unwrap().token_reward, Some(25));
		assert_eq!(a.quests.iter().filter(|q| q.id == "3").count(), 1);
	}

	#[test]
	fn completion_bar_caps_at_full() {
		let a = catalogue();
		assert_eq!(a.quests[0].completion_bar_percent(), 100.0);
		assert_eq!(a.quests[1].completion_bar_percent(), 89.0);
	}
}
