use std::collections::VecDeque;
use std::f64::consts::PI;

use rand::Rng;

use super::types::{
	DataStream, Link, Node, NodeKind, PALETTE, Particle, Rgb, SceneConfig, TrailPoint,
};

pub const GLYPHS: [&str; 8] = ["⬢", "◆", "▲", "●", "■", "⬟", "⚡", "🔗"];

const PARTICLE_BOUNCE: f64 = 0.8;
const ENERGY_LOSS: f64 = 0.9;
const ENERGY_GAIN: f64 = 0.5;
const PULSE_STEP: f64 = 0.1;

/// Rotating hexagon outline at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hexagon {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub rotation: f64,
	pub alpha: f64,
	pub color: Rgb,
}

/// Floating symbol at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
	pub symbol: &'static str,
	pub x: f64,
	pub y: f64,
	pub font_size: f64,
	pub alpha: f64,
	pub color: Rgb,
}

pub struct BackgroundState {
	pub nodes: Vec<Node>,
	pub particles: Vec<Particle>,
	pub streams: Vec<DataStream>,
	pub width: f64,
	pub height: f64,
	pub time: f64,
	pub config: SceneConfig,
}

fn pick_color(rng: &mut impl Rng) -> Rgb {
	PALETTE[rng.random_range(0..PALETTE.len())]
}

fn spread(rng: &mut impl Rng, magnitude: f64) -> f64 {
	(rng.random::<f64>() - 0.5) * magnitude
}

/// Keeps `pos` inside `[0, max]`, pointing `vel` back inward on contact.
/// Returns true when the edge was touched.
fn bounce(pos: &mut f64, vel: &mut f64, max: f64, restitution: f64) -> bool {
	if *pos < 0.0 {
		*pos = 0.0;
		*vel = vel.abs() * restitution;
		true
	} else if *pos > max {
		*pos = max.max(0.0);
		*vel = -vel.abs() * restitution;
		true
	} else {
		false
	}
}

impl BackgroundState {
	pub fn new(config: SceneConfig, width: f64, height: f64, rng: &mut impl Rng) -> Self {
		let nodes = (0..config.node_count)
			.map(|_| {
				Node::new(
					rng.random::<f64>() * width,
					rng.random::<f64>() * height,
					spread(rng, 0.5),
					spread(rng, 0.5),
					rng.random::<f64>() * 6.0 + 3.0,
					rng.random::<f64>() * 0.8 + 0.2,
					pick_color(rng),
					rng.random::<f64>() * PI * 2.0,
					NodeKind::ALL[rng.random_range(0..NodeKind::ALL.len())],
				)
			})
			.collect();

		let particles = (0..config.particle_count)
			.map(|_| Particle {
				x: rng.random::<f64>() * width,
				y: rng.random::<f64>() * height,
				vx: spread(rng, 2.0),
				vy: spread(rng, 2.0),
				size: rng.random::<f64>() * 3.0 + 1.0,
				opacity: rng.random::<f64>() * 0.8 + 0.2,
				color: pick_color(rng),
				energy: rng.random::<f64>() * 100.0,
				trail: VecDeque::with_capacity(config.trail_capacity + 1),
			})
			.collect();

		let streams = (0..config.stream_count)
			.map(|_| DataStream {
				x: rng.random::<f64>() * width,
				y: rng.random::<f64>() * height,
				vx: spread(rng, 3.0),
				vy: spread(rng, 3.0),
				length: rng.random::<f64>() * 50.0 + 20.0,
				color: pick_color(rng),
				opacity: rng.random::<f64>() * 0.6 + 0.2,
			})
			.collect();

		Self {
			nodes,
			particles,
			streams,
			width,
			height,
			time: 0.0,
			config,
		}
	}

	pub fn tick(&mut self) {
		self.time += self.config.time_step;
		let (w, h) = (self.width, self.height);

		for s in &mut self.streams {
			s.x += s.vx;
			s.y += s.vy;
			bounce(&mut s.x, &mut s.vx, w, 1.0);
			bounce(&mut s.y, &mut s.vy, h, 1.0);
		}

		let cap = self.config.trail_capacity;
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;
			p.energy += ENERGY_GAIN;

			p.trail.push_back(TrailPoint {
				x: p.x,
				y: p.y,
				opacity: p.opacity,
			});
			while p.trail.len() > cap {
				p.trail.pop_front();
			}

			if bounce(&mut p.x, &mut p.vx, w, PARTICLE_BOUNCE) {
				p.energy *= ENERGY_LOSS;
			}
			if bounce(&mut p.y, &mut p.vy, h, PARTICLE_BOUNCE) {
				p.energy *= ENERGY_LOSS;
			}
		}

		for n in &mut self.nodes {
			n.x += n.vx;
			n.y += n.vy;
			n.phase += PULSE_STEP;
			bounce(&mut n.x, &mut n.vx, w, 1.0);
			bounce(&mut n.y, &mut n.vy, h, 1.0);
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Ordered node pairs within link distance; each pair appears both ways.
	pub fn links(&self) -> Vec<Link> {
		let max = self.config.link_distance;
		let mut links = Vec::new();
		for (i, a) in self.nodes.iter().enumerate() {
			for (j, b) in self.nodes.iter().enumerate() {
				if i == j {
					continue;
				}
				let (dx, dy) = (a.x - b.x, a.y - b.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if distance < max {
					links.push(Link {
						from: i,
						to: j,
						distance,
					});
				}
			}
		}
		links
	}

	pub fn link_opacity(&self, link: &Link) -> f64 {
		let max = self.config.link_distance;
		((max - link.distance) / max) * 0.4
	}

	pub fn link_width(&self, link: &Link) -> f64 {
		2.0 + (self.time * 2.0 + (link.from + link.to) as f64).sin()
	}

	/// Fraction along the link where the data packet sits, in `[0, 1]`.
	pub fn packet_progress(&self, link: &Link) -> f64 {
		(self.time * 3.0 + link.from as f64).sin() * 0.5 + 0.5
	}

	pub fn grid_alpha(&self) -> f64 {
		0.03 + self.time.sin() * 0.02
	}

	pub fn particle_alpha(&self, index: usize) -> f64 {
		let p = &self.particles[index];
		p.opacity + (self.time * 3.0 + index as f64).sin() * 0.3
	}

	pub fn hexagons(&self) -> Vec<Hexagon> {
		let t = self.time;
		let n = self.config.hexagon_count;
		(0..n)
			.map(|i| {
				let fi = i as f64;
				Hexagon {
					x: (self.width / (n as f64 + 1.0)) * (fi + 1.0) + (t + fi).sin() * 80.0,
					y: self.height / 2.0 + (t * 0.7 + fi).cos() * 120.0,
					size: 25.0 + (t * 2.0 + fi).sin() * 8.0,
					rotation: t * 0.5 + fi,
					alpha: 0.4 + (t + fi).sin() * 0.2,
					color: PALETTE[i % PALETTE.len()],
				}
			})
			.collect()
	}

	pub fn glyphs(&self) -> Vec<Glyph> {
		let t = self.time;
		let count = GLYPHS.len() as f64;
		GLYPHS
			.iter()
			.enumerate()
			.map(|(i, &symbol)| {
				let fi = i as f64;
				Glyph {
					symbol,
					x: (self.width / count) * fi + (t * 0.5 + fi).sin() * 100.0,
					y: 100.0 + (t * 0.3 + fi).cos() * 50.0,
					font_size: 30.0 + (t + fi).sin() * 10.0,
					alpha: 0.1 + (t + fi).sin() * 0.05,
					color: PALETTE[i % PALETTE.len()],
				}
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn scene(seed: u64, w: f64, h: f64) -> BackgroundState {
		let mut rng = SmallRng::seed_from_u64(seed);
		BackgroundState::new(SceneConfig::default(), w, h, &mut rng)
	}

	fn in_bounds(state: &BackgroundState) -> bool {
		let inside = |x: f64, y: f64| x >= 0.0 && x <= state.width && y >= 0.0 && y <= state.height;
		state.nodes.iter().all(|n| inside(n.x, n.y))
			&& state.particles.iter().all(|p| inside(p.x, p.y))
			&& state.streams.iter().all(|s| inside(s.x, s.y))
	}

	#[test]
	fn creates_fixed_entity_counts() {
		let s = scene(1, 800.0, 600.0);
		assert_eq!(s.nodes.len(), 20);
		assert_eq!(s.particles.len(), 120);
		assert_eq!(s.streams.len(), 15);
		assert!(in_bounds(&s));
	}

	#[test]
	fn trails_never_exceed_capacity() {
		let mut s = scene(2, 640.0, 480.0);
		for frame in 0..200 {
			s.tick();
			for p in &s.particles {
				assert!(p.trail.len() <= s.config.trail_capacity, "frame {frame}");
			}
		}
		assert!(s.particles.iter().all(|p| p.trail.len() == 15));
	}

	#[test]
	fn trail_evicts_oldest_point_first() {
		let mut s = scene(3, 1000.0, 1000.0);
		let p = &mut s.particles[0];
		(p.x, p.y, p.vx, p.vy) = (500.0, 500.0, 1.0, 0.0);
		p.trail.clear();
		for _ in 0..20 {
			s.tick();
		}
		let trail = &s.particles[0].trail;
		assert_eq!(trail.len(), 15);
		assert_eq!(trail.front().map(|t| t.x), Some(506.0));
		assert_eq!(trail.back().map(|t| t.x), Some(520.0));
	}

	#[test]
	fn entities_stay_in_bounds() {
		let mut s = scene(4, 300.0, 200.0);
		for _ in 0..2000 {
			s.tick();
			assert!(in_bounds(&s));
		}
	}

	#[test]
	fn shrinking_viewport_pulls_entities_back() {
		let mut s = scene(5, 1920.0, 1080.0);
		s.resize(320.0, 240.0);
		s.tick();
		assert!(in_bounds(&s));
		assert_eq!(s.nodes.len(), 20);
	}

	#[test]
	fn particle_edge_contact_damps_velocity_and_energy() {
		let mut s = scene(6, 100.0, 100.0);
		let p = &mut s.particles[0];
		p.x = 99.5;
		p.y = 50.0;
		p.vx = 1.0;
		p.vy = 0.0;
		p.energy = 10.0;
		s.tick();
		let p = &s.particles[0];
		assert_eq!(p.x, 100.0);
		assert!((p.vx + 0.8).abs() < 1e-12);
		assert!((p.energy - 10.5 * 0.9).abs() < 1e-12);
	}

	#[test]
	fn node_kind_is_fixed_for_lifetime() {
		let mut s = scene(7, 800.0, 600.0);
		let kinds: Vec<_> = s.nodes.iter().map(|n| n.kind()).collect();
		for _ in 0..500 {
			s.tick();
		}
		let after: Vec<_> = s.nodes.iter().map(|n| n.kind()).collect();
		assert_eq!(kinds, after);
		for n in &s.nodes {
			assert_eq!(n.shape(), n.kind().shape());
			assert_eq!(n.fill(), n.kind().fill(n.color));
		}
	}

	#[test]
	fn links_are_symmetric_and_below_threshold() {
		let s = scene(8, 400.0, 400.0);
		let links = s.links();
		assert!(!links.is_empty());
		for l in &links {
			assert_ne!(l.from, l.to);
			assert!(l.distance < s.config.link_distance);
			assert!(links.iter().any(|o| o.from == l.to && o.to == l.from));
			let a = s.link_opacity(l);
			assert!(a > 0.0 && a <= 0.4);
			let t = s.packet_progress(l);
			assert!((0.0..=1.0).contains(&t));
		}
	}

	#[test]
	fn time_advances_by_fixed_step() {
		let mut s = scene(9, 800.0, 600.0);
		for _ in 0..50 {
			s.tick();
		}
		assert!((s.time - 1.0).abs() < 1e-9);
	}

	#[test]
	fn decorations_have_fixed_counts() {
		let s = scene(10, 900.0, 600.0);
		assert_eq!(s.hexagons().len(), 8);
		assert_eq!(s.glyphs().len(), GLYPHS.len());
		assert_eq!(s.hexagons()[0].x, 100.0 + (0.0f64).sin() * 80.0);
	}
}
