//! Default hook behaviour shared by every scene.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::info;

use super::{SceneContext, SceneSignal};

/// Quit keys and terminal resizes.
pub fn handle_input(ctx: &mut SceneContext<'_>, event: &Event) -> SceneSignal {
    match event {
        Event::Key(key) if is_quit_key(key) => {
            info!("quit requested");
            SceneSignal::QuitRequested
        }
        Event::Resize(cols, rows) => {
            ctx.drawer.resize(*cols, *rows);
            SceneSignal::Continue
        }
        _ => SceneSignal::Continue,
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// The pressed key, ignoring repeats and releases.
pub fn key_press(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => Some(*code),
        _ => None,
    }
}

/// World point of a left click.  Each terminal row holds two pixel rows.
pub fn left_click(ctx: &SceneContext<'_>, event: &Event) -> Option<(i32, i32)> {
    match event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(
            ctx.drawer
                .screen_point_to_world_point(*column as i32, *row as i32 * 2),
        ),
        _ => None,
    }
}

pub fn render_background(ctx: &mut SceneContext<'_>) {
    ctx.drawer.blit(&ctx.textures.background, 0, 0);
}

pub fn render_foreground(ctx: &mut SceneContext<'_>) {
    ctx.drawer.blit(&ctx.textures.foreground, 0, 0);
}

/// The in-game HUD for the shared player stats.
pub fn render_ui(ctx: &mut SceneContext<'_>, delta_time: f64) {
    ctx.drawer.render_ui(delta_time, ctx.textures, &*ctx.stats);
}
