//! Command-line entry point for the algoviz animation engine.

use std::path::Path;

use algoviz::engine::VisualizationEngine;
use algoviz::options::Options;
use algoviz::player::Player;
use algoviz::step::StepFile;
use algoviz::util::frame_timing::FrameTiming;

fn show_current(engine: &mut VisualizationEngine, player: &Player) {
    let Some(step) = player.current() else {
        return;
    };
    engine.show_step(step);
    log::info!(
        "[{}/{}] {} ({} entities, {} live resources)",
        player.current_step() + 1,
        player.total_steps(),
        engine.description().unwrap_or("-"),
        engine.entity_count(),
        engine.scene().resources().live_count(),
    );
}

fn load_options(path: Option<String>) -> Options {
    let Some(path) = path else {
        return Options::default();
    };
    match Options::load(Path::new(&path)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(steps_path) = args.next() else {
        log::error!("Usage: algoviz <steps.json> [options.toml]");
        std::process::exit(1);
    };
    let options = load_options(args.next());

    let file = match StepFile::load(Path::new(&steps_path)) {
        Ok(file) => file,
        Err(e) => {
            log::error!("{steps_path}: {e}");
            std::process::exit(1);
        }
    };
    if file.is_empty() {
        log::warn!("{steps_path} contains no steps");
        return;
    }
    log::info!(
        "{}: {} steps",
        file.title().unwrap_or(&steps_path),
        file.len()
    );
    if options.playback.looping {
        log::info!("looping enabled; interrupt to stop");
    }

    let mut player = Player::new(file, &options.playback);
    let mut timing = FrameTiming::new(options.playback.target_fps);
    let mut engine = VisualizationEngine::new(options);

    show_current(&mut engine, &player);
    player.play();
    loop {
        std::thread::sleep(timing.until_next_frame());
        let dt_ms = timing.end_frame();

        if player.tick(dt_ms).is_some() {
            show_current(&mut engine, &player);
        }
        engine.advance(dt_ms);
        engine.scene_mut().mark_rendered();

        if !player.is_playing() && !engine.is_animating() {
            break;
        }
    }

    engine.teardown();
    log::debug!("average frame rate {:.1} fps", timing.fps());
    log::info!(
        "finished; {} resources still live",
        engine.scene().resources().live_count()
    );
}
