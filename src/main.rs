// src/main.rs
use nannou::event::{TouchEvent, TouchPhase};
use nannou::prelude::*;
use std::time::Instant;

use liftvis::{config::Config, views::LiftingBallsView};

struct Model {
    lifting_balls: LiftingBallsView,

    // frame pacing
    last_update: Instant,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config, falling back to built-in defaults when no file is found
    let config = Config::load().expect("Failed to load config file");

    let lifting_balls =
        LiftingBallsView::new(&config).expect("Failed to build the lifting balls view");

    // Create window
    let mut builder = app
        .new_window()
        .title("liftvis 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch)
        .key_pressed(key_pressed);
    if config.window.fullscreen {
        builder = builder.fullscreen();
    }
    builder.build().unwrap();

    Model {
        lifting_balls,
        last_update: Instant::now(),
    }
}

fn mouse_pressed(_app: &App, model: &mut Model, _button: MouseButton) {
    model.lifting_balls.handle_tap();
}

fn touch(_app: &App, model: &mut Model, event: TouchEvent) {
    if event.phase == TouchPhase::Started {
        model.lifting_balls.handle_tap();
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        // Space doubles as a tap for keyboard-only setups
        Key::Space => model.lifting_balls.handle_tap(),
        Key::Q => app.quit(),
        _ => (),
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let dt = (now - model.last_update).as_secs_f32();
    model.last_update = now;

    model.lifting_balls.update(dt);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model.lifting_balls.draw(&draw, app.window_rect());
    draw.to_frame(app, &frame).unwrap();
}
