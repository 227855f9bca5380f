//! Frame drawing
//!
//! Back to front: player (bullet first), bubbles, then the ground and roof
//! bands on top so bubbles pass behind them.

use std::f64::consts::TAU;

use super::Surface;
use super::color::bubble_stroke;
use crate::sim::{Bubble, Bullet, Game, Player, World};
use crate::tuning::Tuning;

/// Draw a full frame of `game`
pub fn draw_game<S: Surface>(game: &Game, surface: &mut S) {
    let tuning = game.tuning();
    clear(surface);
    draw_player(surface, &game.player, tuning);
    for bubble in &game.bubbles {
        draw_bubble(surface, bubble);
    }
    draw_ground(surface, &game.world, tuning);
    draw_roof(surface, &game.world, tuning);
}

pub fn clear<S: Surface>(surface: &mut S) {
    let (w, h) = (surface.width(), surface.height());
    surface.clear_rect(0.0, 0.0, w, h);
}

fn draw_player<S: Surface>(surface: &mut S, player: &Player, tuning: &Tuning) {
    if let Some(bullet) = &player.bullet {
        draw_bullet(surface, bullet, tuning);
    }

    let p = player.position;
    surface.begin_path();
    surface.move_to(p.x, p.y);
    surface.line_to(p.x + player.base_width, p.y);
    surface.line_to(p.x + player.base_width / 2.0, p.y - player.height);
    surface.close_path();

    surface.set_stroke_style(&tuning.player_stroke_color);
    surface.set_fill_style(&tuning.player_fill_color);
    surface.set_line_width(player.stroke_width);
    surface.fill();
    surface.stroke();
}

/// Trail from the muzzle plus an arrow head at the tip
fn draw_bullet<S: Surface>(surface: &mut S, bullet: &Bullet, tuning: &Tuning) {
    let tip = bullet.position;
    let (hw, hh) = (tuning.bullet_head_width, tuning.bullet_head_height);

    surface.begin_path();
    surface.move_to(bullet.origin.x, bullet.origin.y);
    surface.line_to(tip.x, tip.y);
    surface.move_to(tip.x + hw, tip.y + hh);
    surface.line_to(tip.x, tip.y);
    surface.line_to(tip.x - hw, tip.y + hh);

    surface.set_line_width(bullet.width);
    surface.set_stroke_style(&tuning.bullet_color);
    surface.stroke();
}

fn draw_bubble<S: Surface>(surface: &mut S, bubble: &Bubble) {
    surface.begin_path();
    surface.arc(
        bubble.position.x,
        bubble.position.y,
        bubble.actual_radius(),
        0.0,
        TAU,
    );
    surface.set_line_width(bubble.stroke_width);
    surface.set_stroke_style(&bubble_stroke(bubble.size_modifier));
    surface.set_fill_style(&bubble.fill_color);
    surface.stroke();
    surface.fill();
}

fn draw_ground<S: Surface>(surface: &mut S, world: &World, tuning: &Tuning) {
    surface.set_fill_style(&tuning.ground_color);
    surface.fill_rect(0.0, world.ground_y(), world.width, world.ground_level);
}

/// Roof band with a row of spikes hanging from its underside
fn draw_roof<S: Surface>(surface: &mut S, world: &World, tuning: &Tuning) {
    let base = world.roof_y();
    let tip = world.spike_tip_y();
    let w = world.spike_width;

    surface.set_fill_style(&tuning.roof_color);
    surface.fill_rect(0.0, 0.0, world.width, base);

    surface.begin_path();
    surface.move_to(0.0, base);
    // One extra spike so the row always reaches the right edge
    let spikes = (world.width / w).floor() as usize + 1;
    for i in 0..spikes {
        let left = i as f64 * w;
        surface.line_to(left + w / 2.0, tip);
        surface.line_to(left + w, base);
    }
    surface.close_path();
    surface.fill();
    surface.set_stroke_style(&tuning.roof_color);
    surface.set_line_width(1.0);
    surface.stroke();
}
