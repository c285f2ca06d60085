//! Quest fixtures and the player's quest board.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestKind {
	Daily,
	Weekly,
	Special,
}

impl QuestKind {
	pub const ALL: [QuestKind; 3] = [QuestKind::Daily, QuestKind::Weekly, QuestKind::Special];

	pub fn as_str(self) -> &'static str {
		match self {
			QuestKind::Daily => "daily",
			QuestKind::Weekly => "weekly",
			QuestKind::Special => "special",
		}
	}

	pub fn parse(s: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|k| k.as_str() == s)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
	Easy,
	Medium,
	Hard,
}

impl Difficulty {
	pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

	pub fn as_str(self) -> &'static str {
		match self {
			Difficulty::Easy => "easy",
			Difficulty::Medium => "medium",
			Difficulty::Hard => "hard",
		}
	}

	pub fn parse(s: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|d| d.as_str() == s)
	}

	/// Badge modifier class.
	pub fn tone(self) -> &'static str {
		match self {
			Difficulty::Easy => "green",
			Difficulty::Medium => "yellow",
			Difficulty::Hard => "red",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
	Defi,
	Gaming,
	Social,
	Trading,
}

impl Category {
	pub const ALL: [Category; 4] = [
		Category::Gaming,
		Category::Defi,
		Category::Social,
		Category::Trading,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Category::Defi => "defi",
			Category::Gaming => "gaming",
			Category::Social => "social",
			Category::Trading => "trading",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Category::Defi => "DeFi",
			Category::Gaming => "Gaming",
			Category::Social => "Social",
			Category::Trading => "Trading",
		}
	}

	pub fn parse(s: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|c| c.as_str() == s)
	}

	pub fn icon(self) -> &'static str {
		match self {
			Category::Defi => "🪙",
			Category::Gaming => "🏆",
			Category::Social => "⭐",
			Category::Trading => "⚡",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestStatus {
	Available,
	Active,
	Completed,
}

/// Tabs on the quest panel; each shows quests in one status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuestTab {
	#[default]
	Available,
	Active,
	Completed,
}

impl QuestTab {
	pub const ALL: [QuestTab; 3] = [QuestTab::Available, QuestTab::Active, QuestTab::Completed];

	pub fn status(self) -> QuestStatus {
		match self {
			QuestTab::Available => QuestStatus::Available,
			QuestTab::Active => QuestStatus::Active,
			QuestTab::Completed => QuestStatus::Completed,
		}
	}
}

impl fmt::Display for QuestTab {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			QuestTab::Available => "Available",
			QuestTab::Active => "Active",
			QuestTab::Completed => "Completed",
		})
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Quest {
	pub id: String,
	pub title: String,
	pub description: String,
	pub kind: QuestKind,
	pub difficulty: Difficulty,
	pub xp_reward: u32,
	pub nft_reward: Option<String>,
	pub token_reward: Option<u32>,
	pub time_limit: String,
	pub progress: u32,
	pub max_progress: u32,
	pub status: QuestStatus,
	pub category: Category,
}

impl Quest {
	/// Claim is only offered once an active quest reaches its target.
	pub fn can_claim(&self) -> bool {
		self.status == QuestStatus::Active && self.progress >= self.max_progress
	}

	pub fn progress_percent(&self) -> f64 {
		if self.max_progress == 0 {
			return 0.0;
		}
		(f64::from(self.progress) / f64::from(self.max_progress) * 100.0).min(100.0)
	}
}

/// In-memory list of the player's quests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuestBoard {
	pub quests: Vec<Quest>,
}

impl QuestBoard {
	pub fn new(quests: Vec<Quest>) -> Self {
		Self { quests }
	}

	pub fn get(&self, id: &str) -> Option<&Quest> {
		self.quests.iter().find(|q| q.id == id)
	}

	fn set_status(&mut self, id: &str, status: QuestStatus) -> bool {
		match self.quests.iter_mut().find(|q| q.id == id) {
			Some(q) => {
				q.status = status;
				true
			}
			None => false,
		}
	}

	pub fn start(&mut self, id: &str) -> bool {
		self.set_status(id, QuestStatus::Active)
	}

	/// Marks the quest completed; callers gate this on [`Quest::can_claim`].
	pub fn claim(&mut self, id: &str) -> bool {
		self.set_status(id, QuestStatus::Completed)
	}

	pub fn filtered(&self, tab: QuestTab) -> Vec<Quest> {
		let status = tab.status();
		self.quests
			.iter()
			.filter(|q| q.status == status)
			.cloned()
			.collect()
	}

	pub fn count(&self, status: QuestStatus) -> usize {
		self.quests.iter().filter(|q| q.status == status).count()
	}
}

fn quest(
	id: &str,
	title: &str,
	description: &str,
	kind: QuestKind,
	difficulty: Difficulty,
	category: Category,
) -> Quest {
	Quest {
		id: id.to_owned(),
		title: title.to_owned(),
		description: description.to_owned(),
		kind,
		difficulty,
		xp_reward: 0,
		nft_reward: None,
		token_reward: None,
		time_limit: String::new(),
		progress: 0,
		max_progress: 1,
		status: QuestStatus::Available,
		category,
	}
}

/// Quests shown to a freshly connected player.
pub fn sample_quests() -> Vec<Quest> {
	vec![
		Quest {
			xp_reward: 100,
			nft_reward: Some("Streak Badge".into()),
			time_limit: "24h".into(),
			progress: 5,
			max_progress: 7,
			status: QuestStatus::Active,
			..quest(
				"1",
				"Daily Login Streak",
				"Log in to the platform for 7 consecutive days",
				QuestKind::Daily,
				Difficulty::Easy,
				Category::Gaming,
			)
		},
		Quest {
			xp_reward: 500,
			token_reward: Some(10),
			time_limit: "7d".into(),
			progress: 0,
			max_progress: 100,
			..quest(
				"2",
				"DeFi Explorer",
				"Stake 100 NERO tokens in the liquidity pool",
				QuestKind::Weekly,
				Difficulty::Medium,
				Category::Defi,
			)
		},
		Quest {
			xp_reward: 50,
			nft_reward: Some("Social NFT".into()),
			time_limit: "∞".into(),
			progress: 1,
			max_progress: 2,
			status: QuestStatus::Active,
			..quest(
				"3",
				"Social Butterfly",
				"Follow NERO on Twitter and retweet our latest post",
				QuestKind::Special,
				Difficulty::Easy,
				Category::Social,
			)
		},
		Quest {
			xp_reward: 1000,
			token_reward: Some(50),
			time_limit: "7d".into(),
			progress: 0,
			max_progress: 5,
			..quest(
				"4",
				"Trading Master",
				"Complete 5 successful trades on NERO DEX",
				QuestKind::Weekly,
				Difficulty::Hard,
				Category::Trading,
			)
		},
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn board() -> QuestBoard {
		QuestBoard::new(sample_quests())
	}

	#[test]
	fn tabs_filter_by_status() {
		let b = board();
		for tab in QuestTab::ALL {
			let shown = b.filtered(tab);
			assert!(shown.iter().all(|q| q.status == tab.status()));
			assert_eq!(shown.len(), b.count(tab.status()));
		}
		assert_eq!(b.count(QuestStatus::Available), 2);
		assert_eq!(b.count(QuestStatus::Active), 2);
		assert_eq!(b.count(QuestStatus::Completed), 0);
	}

	#[test]
	fn streak_quest_cannot_be_claimed_until_complete() {
		let mut b = board();
		let q = b.get("1").unwrap();
		assert_eq!((q.progress, q.max_progress), (5, 7));
		assert!(!q.can_claim());

		assert!(b.claim("1"));
		assert_eq!(b.get("1").unwrap().status, QuestStatus::Completed);
		assert!(!b.get("1").unwrap().can_claim());
	}

	#[test]
	fn claim_is_offered_once_progress_reaches_max() {
		let mut b = board();
		b.quests[0].progress = 7;
		assert!(b.get("1").unwrap().can_claim());
	}

	#[test]
	fn starting_moves_quest_to_active_tab() {
		let mut b = board();
		assert!(b.start("4"));
		assert_eq!(b.get("4").unwrap().status, QuestStatus::Active);
		assert!(b.filtered(QuestTab::Active).iter().any(|q| q.id == "4"));
		assert!(!b.filtered(QuestTab::Available).iter().any(|q| q.id == "4"));
	}

	#[test]
	fn unknown_id_is_ignored() {
		let mut b = board();
		let before = b.clone();
		assert!(!b.start("nope"));
		assert!(!b.claim("nope"));
		assert_eq!(b, before);
	}

	#[test]
	fn progress_percent_is_bounded() {
		let mut q = sample_quests().remove(0);
		assert!((q.progress_percent() - 500.0 / 7.0).abs() < 1e-9);
		q.progress = 99;
		assert_eq!(q.progress_percent(), 100.0);
		q.max_progress = 0;
		assert_eq!(q.progress_percent(), 0.0);
	}

	#[test]
	fn enum_strings_round_trip() {
		for k in QuestKind::ALL {
			assert_eq!(QuestKind::parse(k.as_str()), Some(k));
		}
		for d in Difficulty::ALL {
			assert_eq!(Difficulty::parse(d.as_str()), Some(d));
		}
		for c in Category::ALL {
			assert_eq!(Category::parse(c.as_str()), Some(c));
		}
		assert_eq!(Category::parse("poker"), None);
	}
}
