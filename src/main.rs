//! Brick Breaker entry point
//!
//! Native builds have no window backend; this runs a headless attract-mode
//! session against the scripted platform and logs the outcome.

use brick_breaker::game::{Game, run};
use brick_breaker::platform::HeadlessPlatform;
use brick_breaker::settings::Settings;

/// One minute at 60 Hz
const DEMO_FRAMES: u64 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Brick Breaker (native) starting...");

    let settings = Settings::load();
    let mut game = Game::new(&settings);
    let mut platform = HeadlessPlatform::new().with_frame_limit(DEMO_FRAMES);

    if let Err(e) = run(&mut game, &mut platform) {
        log::error!("{}", e);
        std::process::exit(1);
    }

    println!(
        "{} | {} | {} bricks left",
        game.hud.score_text,
        game.hud.lives_text,
        game.state.bricks_remaining()
    );
}
