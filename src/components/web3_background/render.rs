use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::BackgroundState;
use super::types::{NodeShape, Rgb};

const PACKET_RADIUS: f64 = 3.0;

pub fn render(state: &BackgroundState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_grid(state, ctx);
	draw_streams(state, ctx);
	draw_particles(state, ctx);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	draw_hexagons(state, ctx);
	draw_glyphs(state, ctx);
	ctx.set_global_alpha(1.0);
}

fn draw_grid(state: &BackgroundState, ctx: &CanvasRenderingContext2d) {
	let step = state.config.grid_spacing;
	ctx.set_stroke_style_str(&Rgb::MINT.rgba(state.grid_alpha()));
	ctx.set_line_width(1.0);

	let mut x = 0.0;
	while x < state.width {
		ctx.begin_path();
		ctx.move_to(x, 0.0);
		ctx.line_to(x, state.height);
		ctx.stroke();
		x += step;
	}
	let mut y = 0.0;
	while y < state.height {
		ctx.begin_path();
		ctx.move_to(0.0, y);
		ctx.line_to(state.width, y);
		ctx.stroke();
		y += step;
	}
}

fn draw_streams(state: &BackgroundState, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(3.0);
	for stream in &state.streams {
		let (tx, ty) = stream.tail();
		let gradient = ctx.create_linear_gradient(stream.x, stream.y, tx, ty);
		let _ = gradient.add_color_stop(0.0, &stream.color.css());
		let _ = gradient.add_color_stop(1.0, &stream.color.rgba(0.0));

		#[allow(deprecated)]
		ctx.set_stroke_style(&gradient);
		ctx.set_global_alpha(stream.opacity);
		ctx.begin_path();
		ctx.move_to(stream.x, stream.y);
		ctx.line_to(tx, ty);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_particles(state: &BackgroundState, ctx: &CanvasRenderingContext2d) {
	for (index, particle) in state.particles.iter().enumerate() {
		let len = particle.trail.len() as f64;
		for (i, point) in particle.trail.iter().enumerate() {
			let f = i as f64 / len;
			let radius = particle.size * f * 0.8;
			if radius <= 0.0 {
				continue;
			}
			ctx.begin_path();
			let _ = ctx.arc(point.x, point.y, radius, 0.0, 2.0 * PI);
			ctx.set_fill_style_str(&particle.color.rgba(point.opacity * f * 0.5));
			ctx.fill();
		}

		let (x, y) = (particle.x, particle.y);
		let glow = particle.glow_size();

		if let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, (glow * 2.0).max(1.0)) {
			let _ = gradient.add_color_stop(0.0, &particle.color.css());
			let _ = gradient.add_color_stop(1.0, &particle.color.rgba(0.0));
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.set_global_alpha(particle.opacity * 0.3);
			ctx.begin_path();
			let _ = ctx.arc(x, y, glow * 2.0, 0.0, 2.0 * PI);
			ctx.fill();
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, glow, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&particle.color.css());
		ctx.set_global_alpha(state.particle_alpha(index).clamp(0.0, 1.0));
		ctx.fill();
		ctx.set_global_alpha(1.0);
	}
}

fn draw_links(state: &BackgroundState, ctx: &CanvasRenderingContext2d) {
	for link in state.links() {
		let (a, b) = (&state.nodes[link.from], &state.nodes[link.to]);

		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.set_stroke_style_str(&a.color.css());
		ctx.set_global_alpha(state.link_opacity(&link));
		ctx.set_line_width(state.link_width(&link));
		ctx.stroke();

		let t = state.packet_progress(&link);
		let (px, py) = (a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
		ctx.begin_path();
		let _ = ctx.arc(px, py, PACKET_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&Rgb::GOLD.css());
		ctx.set_global_alpha(0.8);
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &BackgroundState, ctx: &CanvasRenderingContext2d) {
	for node in &state.nodes {
		let (x, y) = (node.x, node.y);
		let r = node.pulse_radius();
		let fill = node.fill();

		if let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, (r * 3.0).max(1.0)) {
			let _ = gradient.add_color_stop(0.0, &fill.css());
			let _ = gradient.add_color_stop(1.0, &fill.rgba(0.0));
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.set_global_alpha(node.opacity * 0.4);
			ctx.begin_path();
			let _ = ctx.arc(x, y, r * 3.0, 0.0, 2.0 * PI);
			ctx.fill();
		}

		ctx.set_global_alpha(node.opacity);
		ctx.set_fill_style_str(&fill.css());
		ctx.begin_path();
		match node.shape() {
			NodeShape::Circle => {
				let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
			}
			NodeShape::Square => ctx.rect(x - r, y - r, r * 2.0, r * 2.0),
			NodeShape::Diamond => {
				ctx.move_to(x, y - r);
				ctx.line_to(x + r, y);
				ctx.line_to(x, y + r);
				ctx.line_to(x - r, y);
				ctx.close_path();
			}
		}
		ctx.fill();

		ctx.set_stroke_style_str(&fill.css());
		ctx.set_line_width(2.0);
		ctx.set_global_alpha(node.opacity * 0.8);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_hexagons(state: &BackgroundState, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(3.0);
	for hex in state.hexagons() {
		ctx.save();
		let _ = ctx.translate(hex.x, hex.y);
		let _ = ctx.rotate(hex.rotation);

		ctx.begin_path();
		for j in 0..6 {
			let angle = j as f64 * PI / 3.0;
			let (hx, hy) = (angle.cos() * hex.size, angle.sin() * hex.size);
			if j == 0 {
				ctx.move_to(hx, hy);
			} else {
				ctx.line_to(hx, hy);
			}
		}
		ctx.close_path();

		ctx.set_stroke_style_str(&hex.color.css());
		ctx.set_global_alpha(hex.alpha);
		ctx.stroke();
		ctx.restore();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_glyphs(state: &BackgroundState, ctx: &CanvasRenderingContext2d) {
	for glyph in state.glyphs() {
		ctx.set_font(&format!("{}px Arial", glyph.font_size));
		ctx.set_fill_style_str(&glyph.color.css());
		ctx.set_global_alpha(glyph.alpha);
		let _ = ctx.fill_text(glyph.symbol, glyph.x, glyph.y);
	}
	ctx.set_global_alpha(1.0);
}
