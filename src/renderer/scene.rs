//! Gameplay scene, HUD and overlays

use glam::Vec2;

use super::colors;
use super::shapes::{BAR_HEIGHT, bar, hitbox_outline};
use super::surface::{ImageId, Rect, SpriteDraw, SpriteSheet, Surface};
use crate::consts::{PLAYER_CONTACT_RADIUS, PLAYER_MAX_STAMINA, SPRITE_SIZE};
use crate::sim::{GameSession, Side};
use crate::wrapped_delta;

/// Base width of every health bar
const BAR_WIDTH: f32 = 50.0;
const HUD_TEXT_SIZE: f32 = 20.0;

/// Draw the session as seen through its camera.
///
/// Pause and GameOver call this too, so the frozen frame looks exactly like
/// the last Play frame.
pub fn draw_gameplay(session: &GameSession, debug: bool, surface: &mut dyn Surface) {
    surface.clear(colors::BACKGROUND);

    // Arena plus one copy on each side so the horizontal wrap is seamless
    let origin = session.camera.apply(Vec2::ZERO);
    for copy in [-1.0, 0.0, 1.0] {
        surface.image(ImageId::Arena, origin + Vec2::new(copy * session.arena.x, 0.0));
    }

    for proj in &session.player.projectiles {
        surface.circle(
            session.camera.apply(proj.pos),
            proj.radius,
            colors::PROJECTILE,
        );
    }

    let player = &session.player;
    let player_screen = session.camera.apply(player.pos);

    // Mobs are placed at their nearest wrapped image relative to the player
    for mob in &session.mobs {
        let screen = player_screen + wrapped_delta(player.pos, mob.pos, session.arena.x);
        surface.sprite(SpriteDraw {
            sheet: SpriteSheet::Mob(mob.anim),
            frame: mob.frame_index(),
            center: screen,
            size: SPRITE_SIZE,
            rotation_deg: mob.rotation_deg,
            mirrored: mob.side == Side::Left,
            flip_horizontal: mob.flip_horizontal,
            flip_vertical: mob.flip_vertical,
        });
        let (back, front) = bar(
            screen - Vec2::new(0.0, SPRITE_SIZE / 2.0),
            BAR_WIDTH,
            mob.health_fraction(),
        );
        surface.fill_rect(back, colors::HEALTH_BACK);
        surface.fill_rect(front, colors::HEALTH);
    }

    let size = player.render_size();
    surface.sprite(SpriteDraw {
        sheet: SpriteSheet::Player(player.anim),
        frame: player.frame_index(),
        center: player_screen,
        size,
        rotation_deg: player.rotation_deg,
        mirrored: player.side == Side::Left,
        flip_horizontal: player.flip_horizontal,
        flip_vertical: player.flip_vertical,
    });
    let bar_anchor = player_screen - Vec2::new(0.0, size / 2.0);
    let (back, front) = bar(bar_anchor, BAR_WIDTH, player.hp / player.max_hp);
    surface.fill_rect(back, colors::HEALTH_BACK);
    surface.fill_rect(front, colors::HEALTH);
    let (back, front) = bar(
        bar_anchor + Vec2::new(0.0, BAR_HEIGHT + 2.0),
        BAR_WIDTH,
        player.stamina / PLAYER_MAX_STAMINA,
    );
    surface.fill_rect(back, colors::STAMINA_BACK);
    surface.fill_rect(front, colors::STAMINA);

    if debug {
        surface.polygon(
            hitbox_outline(player_screen, player.rotation_deg, player.scale),
            colors::DEBUG,
        );
        surface.stroke_rect(
            Rect::centered(player_screen, Vec2::splat(PLAYER_CONTACT_RADIUS * 2.0)),
            colors::DEBUG,
        );
    }

    draw_hud(session, surface);
}

fn draw_hud(session: &GameSession, surface: &mut dyn Surface) {
    let lines = [
        format!("Score: {:.0}", session.score),
        format!("High Score: {:.0}", session.high_score.max(session.score)),
        format!("Difficulty: {:.1}x", session.difficulty),
        format!("Wave: {}", session.wave + 1),
    ];
    for (i, line) in lines.iter().enumerate() {
        surface.text(
            Vec2::new(10.0, 10.0 + i as f32 * (HUD_TEXT_SIZE + 4.0)),
            line,
            HUD_TEXT_SIZE,
            colors::HUD_TEXT,
        );
    }
}

/// Dim the screen and print a centered title with lines beneath it
pub fn draw_overlay(surface: &mut dyn Surface, title: &str, lines: &[String]) {
    let size = surface.size();
    surface.fill_rect(Rect::new(0.0, 0.0, size.x, size.y), colors::OVERLAY);
    let center = size / 2.0;
    surface.text_centered(center - Vec2::new(0.0, 60.0), title, 48.0, colors::HIGHLIGHT);
    for (i, line) in lines.iter().enumerate() {
        surface.text_centered(
            center + Vec2::new(0.0, i as f32 * 32.0),
            line,
            24.0,
            colors::HUD_TEXT,
        );
    }
}
