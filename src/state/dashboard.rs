//! Player stats for the quest dashboard.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserStats {
	pub quests_completed: u32,
	pub xp_earned: u32,
	pub nfts_claimed: u32,
	pub current_level: u32,
	pub xp_to_next_level: u32,
	pub total_xp_for_next_level: u32,
	pub streak: u32,
	pub rank: u32,
}

impl Default for UserStats {
	fn default() -> Self {
		Self {
			quests_completed: 0,
			xp_earned: 0,
			nfts_claimed: 0,
			current_level: 0,
			xp_to_next_level: 0,
			total_xp_for_next_level: 1000,
			streak: 0,
			rank: 0,
		}
	}
}

impl UserStats {
	/// Stats shown once the simulated load finishes.
	pub fn sample() -> Self {
		Self {
			quests_completed: 47,
			xp_earned: 3420,
			nfts_claimed: 12,
			current_level: 8,
			xp_to_next_level: 580,
			total_xp_for_next_level: 1000,
			streak: 7,
			rank: 156,
		}
	}

	pub fn level_progress_percent(&self) -> f64 {
		if self.total_xp_for_next_level == 0 {
			return 0.0;
		}
		f64::from(self.xp_to_next_level) / f64::from(self.total_xp_for_next_level) * 100.0
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rarity {
	Common,
	Rare,
	Epic,
	Legendary,
}

impl Rarity {
	pub fn label(self) -> &'static str {
		match self {
			Rarity::Common => "Common",
			Rarity::Rare => "Rare",
			Rarity::Epic => "Epic",
			Rarity::Legendary => "Legendary",
		}
	}

	pub fn tone(self) -> &'static str {
		match self {
			Rarity::Common => "gray",
			Rarity::Rare => "blue",
			Rarity::Epic => "purple",
			Rarity::Legendary => "yellow",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
	pub title: &'static str,
	pub description: &'static str,
	pub time: &'static str,
	pub rarity: Rarity,
}

pub const RECENT_ACHIEVEMENTS: [Achievement; 3] = [
	Achievement {
		title: "First Quest Master",
		description: "Completed your first quest",
		time: "2 hours ago",
		rarity: Rarity::Common,
	},
	Achievement {
		title: "NFT Collector",
		description: "Claimed 10 unique NFTs",
		time: "1 day ago",
		rarity: Rarity::Rare,
	},
	Achievement {
		title: "Streak Warrior",
		description: "Maintained a 7-day quest streak",
		time: "3 days ago",
		rarity: Rarity::Epic,
	},
];

/// Groups digits with commas, e.g. `12394` -> `"12,394"`.
pub fn format_count(n: u64) -> String {
	let digits = n.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(c);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_stats_are_empty() {
		let s = UserStats::default();
		assert_eq!(s.current_level, 0);
		assert_eq!(s.total_xp_for_next_level, 1000);
		assert_eq!(s.level_progress_percent(), 0.0);
	}

	#[test]
	fn sample_progress() {
		let s = UserStats::sample();
		assert!((s.level_progress_percent() - 58.0).abs() < 1e-9);
	}

	#[test]
	fn counts_are_grouped_in_thousands() {
		assert_eq!(format_count(0), "0");
		assert_eq!(format_count(999), "999");
		assert_eq!(format_count(1000), "1,000");
		assert_eq!(format_count(3420), "3,420");
		assert_eq!(format_count(1234567), "1,234,567");
	}
}
