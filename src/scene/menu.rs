use crossterm::event::{Event, KeyCode};
use tracing::info;

use super::{base, Scene, SceneContext, SceneSignal};
use crate::display::GLYPH_STRIDE;
use crate::entities::{GameType, Rect};
use crate::error::Result;

/// Clickable areas, in world pixels.
pub const SINGLE_BUTTON: Rect = Rect::new(106, 127, 76, 69);
pub const DOUBLE_BUTTON: Rect = Rect::new(237, 127, 76, 69);

const HIGH_SCORE_POS: (i32, i32) = (238, 209);

fn inside(button: Rect, (x, y): (i32, i32)) -> bool {
    x > button.x && x < button.x + button.w && y > button.y && y < button.y + button.h
}

/// Title screen: pick one or two ducks at a time.
pub struct MainMenu {
    high_score: String,
    game_type: Option<GameType>,
}

impl MainMenu {
    pub fn new(high_score: u32) -> Self {
        Self {
            high_score: high_score.to_string(),
            game_type: None,
        }
    }

    /// The player's choice; `None` if the menu was left by quitting.
    pub fn result_game_type(&self) -> Option<GameType> {
        self.game_type
    }

    fn choose(&mut self, game_type: GameType) -> SceneSignal {
        info!(?game_type, "game selected");
        self.game_type = Some(game_type);
        SceneSignal::Finished
    }
}

impl Scene for MainMenu {
    fn name(&self) -> &'static str {
        "main menu"
    }

    fn handle_input(&mut self, ctx: &mut SceneContext<'_>, event: &Event) -> Result<SceneSignal> {
        let signal = base::handle_input(ctx, event);
        if !signal.is_continue() {
            return Ok(signal);
        }
        match base::key_press(event) {
            Some(KeyCode::Char('1')) => return Ok(self.choose(GameType::Single)),
            Some(KeyCode::Char('2')) => return Ok(self.choose(GameType::Double)),
            _ => {}
        }
        if let Some(point) = base::left_click(ctx, event) {
            if inside(SINGLE_BUTTON, point) {
                return Ok(self.choose(GameType::Single));
            }
            if inside(DOUBLE_BUTTON, point) {
                return Ok(self.choose(GameType::Double));
            }
        }
        Ok(SceneSignal::Continue)
    }

    fn render_background(&mut self, ctx: &mut SceneContext<'_>, _delta_time: f64) -> SceneSignal {
        let textures = ctx.textures;
        ctx.drawer.blit(&textures.main_menu_background, 0, 0);
        let title_x = (textures.main_menu_background.width() - textures.menu_title.width()) / 2;
        ctx.drawer.blit(&textures.menu_title, title_x, 40);
        ctx.drawer.blit(&textures.menu_single, SINGLE_BUTTON.x, SINGLE_BUTTON.y);
        ctx.drawer.blit(&textures.menu_double, DOUBLE_BUTTON.x, DOUBLE_BUTTON.y);
        SceneSignal::Continue
    }

    fn render_foreground(&mut self, _ctx: &mut SceneContext<'_>, _delta_time: f64) -> SceneSignal {
        SceneSignal::Continue
    }

    fn render_ui(&mut self, ctx: &mut SceneContext<'_>, _delta_time: f64) {
        let (x, y) = HIGH_SCORE_POS;
        ctx.drawer
            .blit(&ctx.textures.menu_top_score, x - ctx.textures.menu_top_score.width() - GLYPH_STRIDE, y);
        ctx.drawer.render_number(&ctx.textures.ui_numbers_green, &self.high_score, x, y);
    }
}
