use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::{mpsc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    terminal, ExecutableCommand,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use duck_hunt::compute::{new_game, single_duck_game};
use duck_hunt::config::{self, Config};
use duck_hunt::display::Drawer;
use duck_hunt::scene::{
    run_scene, Completion, EventSource, IntroCutScene, MainMenu, MonotonicClock, SceneContext,
    SinglePlayerGame,
};
use duck_hunt::textures::Textures;

const LOG_FILE: &str = "duck_hunt.log";

// ── Logging ───────────────────────────────────────────────────────────────────

/// Logs go to a file: the terminal belongs to the game.
fn init_tracing() {
    let path = std::env::temp_dir().join(LOG_FILE);
    let Ok(file) = File::create(&path) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Blocking reads happen on their own thread so the frame loop never waits
    // on input.
    let (tx, mut rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&mut out, &mut rx);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        error!(error = %format!("{e:#}"), "duck hunt stopped");
    }
    result
}

fn save_config(config: &Config, path: &Path) {
    if let Err(e) = config.save(path) {
        warn!(error = %e, "could not save high score");
    }
}

fn run(out: &mut dyn Write, events: &mut dyn EventSource) -> Result<()> {
    let config_path = config::default_path();
    let mut config = Config::load(&config_path);

    let textures = Textures::generate(config.texture_style());
    textures.validate().context("generating textures")?;

    let (cols, rows) = terminal::size().context("reading terminal size")?;
    let mut drawer = Drawer::new(&textures.background, cols, rows);
    let mut clock = MonotonicClock::default();
    info!(cols, rows, high_score = config.high_score, "starting");

    loop {
        let mut menu = MainMenu::new(config.high_score);
        let mut menu_stats = single_duck_game();
        let mut ctx =
            SceneContext::new(&mut drawer, &mut menu_stats, &textures, events, out, &mut clock);
        if run_scene(&mut menu, &mut ctx)? == Completion::Quit {
            break;
        }
        let Some(game_type) = menu.result_game_type() else {
            break;
        };

        let mut stats = new_game(game_type);
        let mut ctx = SceneContext::new(&mut drawer, &mut stats, &textures, events, out, &mut clock);
        let completion = play_game(&mut ctx)?;

        if config.record_score(stats.score) {
            info!(high_score = config.high_score, "new high score");
            save_config(&config, &config_path);
        }
        if completion == Completion::Quit {
            break;
        }
    }

    save_config(&config, &config_path);
    Ok(())
}

/// Intro, then the game itself until game over or quit.
fn play_game(ctx: &mut SceneContext<'_>) -> Result<Completion> {
    let mut intro = IntroCutScene::new(ctx.textures, ctx.stats.round);
    if run_scene(&mut intro, ctx)? == Completion::Quit {
        return Ok(Completion::Quit);
    }
    let mut game = SinglePlayerGame::new(ctx);
    Ok(run_scene(&mut game, ctx)?)
}
