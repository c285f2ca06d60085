use std::collections::VecDeque;

/// An sRGB color parsed from the palette's hex strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Rgb {
	pub const GOLD: Rgb = Rgb::new(0xFF, 0xD7, 0x00);
	pub const CYAN: Rgb = Rgb::new(0x00, 0xD4, 0xFF);
	pub const MINT: Rgb = Rgb::new(0x00, 0xFF, 0xA3);

	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// CSS `rgba(...)` string with the given alpha.
	pub fn rgba(&self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha.clamp(0.0, 1.0))
	}

	/// CSS `rgb(...)` string.
	pub fn css(&self) -> String {
		format!("rgb({}, {}, {})", self.r, self.g, self.b)
	}
}

pub const PALETTE: [Rgb; 6] = [
	Rgb::MINT,
	Rgb::CYAN,
	Rgb::new(0x9D, 0x4E, 0xDD),
	Rgb::new(0xF7, 0x25, 0x85),
	Rgb::GOLD,
	Rgb::new(0xFF, 0x6B, 0x6B),
];

/// Role of a network node in the visualization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Plain,
	Data,
	Validator,
}

impl NodeKind {
	pub const ALL: [NodeKind; 3] = [NodeKind::Plain, NodeKind::Data, NodeKind::Validator];

	pub fn shape(self) -> NodeShape {
		match self {
			NodeKind::Plain => NodeShape::Circle,
			NodeKind::Data => NodeShape::Square,
			NodeKind::Validator => NodeShape::Diamond,
		}
	}

	/// Fill color for a node of this kind; plain nodes keep their own.
	pub fn fill(self, base: Rgb) -> Rgb {
		match self {
			NodeKind::Plain => base,
			NodeKind::Data => Rgb::CYAN,
			NodeKind::Validator => Rgb::GOLD,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeShape {
	Circle,
	Square,
	Diamond,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
	pub x: f64,
	pub y: f64,
	pub opacity: f64,
}

#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub opacity: f64,
	pub color: Rgb,
	pub energy: f64,
	pub trail: VecDeque<TrailPoint>,
}

impl Particle {
	/// Radius of the core disc, modulated by energy.
	pub fn glow_size(&self) -> f64 {
		(self.size + (self.energy * 0.1).sin() * 2.0).max(1.0)
	}
}

#[derive(Clone, Debug)]
pub struct Node {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub opacity: f64,
	pub color: Rgb,
	pub phase: f64,
	#[cfg(test)]
	kind: NodeKind,
	fill: Rgb,
	shape: NodeShape,
}

impl Node {
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		x: f64,
		y: f64,
		vx: f64,
		vy: f64,
		size: f64,
		opacity: f64,
		color: Rgb,
		phase: f64,
		kind: NodeKind,
	) -> Self {
		Self {
			x,
			y,
			vx,
			vy,
			size,
			opacity,
			color,
			phase,
			#[cfg(test)]
			kind,
			fill: kind.fill(color),
			shape: kind.shape(),
		}
	}

	#[cfg(test)]
	pub fn kind(&self) -> NodeKind {
		self.kind
	}

	pub fn fill(&self) -> Rgb {
		self.fill
	}

	pub fn shape(&self) -> NodeShape {
		self.shape
	}

	pub fn pulse_radius(&self) -> f64 {
		(self.size + self.phase.sin() * 3.0).max(1.0)
	}
}

#[derive(Clone, Debug)]
pub struct DataStream {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub length: f64,
	pub color: Rgb,
	pub opacity: f64,
}

impl DataStream {
	/// Far end of the trail, back along the velocity vector.
	pub fn tail(&self) -> (f64, f64) {
		(self.x - self.vx * self.length, self.y - self.vy * self.length)
	}
}

/// A connection between two nodes closer than the link distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub from: usize,
	pub to: usize,
	pub distance: f64,
}

/// Tunables for the background scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
	pub node_count: usize,
	pub particle_count: usize,
	pub stream_count: usize,
	pub trail_capacity: usize,
	pub link_distance: f64,
	pub time_step: f64,
	pub grid_spacing: f64,
	pub hexagon_count: usize,
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			node_count: 20,
			particle_count: 120,
			stream_count: 15,
			trail_capacity: 15,
			link_distance: 200.0,
			time_step: 0.02,
			grid_spacing: 60.0,
			hexagon_count: 8,
		}
	}
}
