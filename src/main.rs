// src/main.rs
use nannou::prelude::*;
use tracing_subscriber::EnvFilter;

use springbox::{
    animation::AnimatedBox,
    config::{Config, LoggingConfig, CONFIG_FILE},
    render::{Renderer, Theme},
    store::Store,
    views::{keyboard, Buttons, Layout, SettingsPanel},
};

struct Model {
    // State container
    store: Store,

    // Animated output
    animated_box: AnimatedBox,
    max_frame_delta: f32,

    // Controls
    layout: Layout,
    settings: SettingsPanel,
    buttons: Buttons,

    // Rendering
    renderer: Renderer,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn model(app: &App) -> Model {
    // Load config
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            init_logging(&LoggingConfig::default());
            tracing::error!("{}", err);
            std::process::exit(1);
        }
    };
    init_logging(&config.logging);
    match Config::locate() {
        Some(path) => tracing::info!("loaded config from {}", path.display()),
        None => tracing::warn!("{} not found, using defaults", CONFIG_FILE),
    }

    // Create window
    let window = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_moved(mouse_moved)
        .key_pressed(key_pressed)
        .received_character(received_character)
        .resized(resized)
        .build();
    if let Err(err) = window {
        tracing::error!("failed to create window: {:?}", err);
        std::process::exit(1);
    }

    if config.animation.checked_frame_delta().is_none() {
        tracing::warn!(
            "animation.max_frame_delta = {} is unusable, using {}",
            config.animation.max_frame_delta,
            config.animation.frame_delta_cap()
        );
    }

    let store = Store::new();
    let state = store.state();
    let animated_box = AnimatedBox::new(state.box_props, state.spring_props);

    let layout = Layout::new(app.window_rect());
    let settings = SettingsPanel::new(&layout);
    let buttons = Buttons::new(&layout);

    Model {
        store,
        animated_box,
        max_frame_delta: config.animation.frame_delta_cap(),
        layout,
        settings,
        buttons,
        renderer: Renderer::new(Theme::from(&config.style)),
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    // Follow the latest commit; unchanged snapshots are a no-op
    let state = model.store.state();
    model
        .animated_box
        .retarget(&state.box_props, &state.spring_props);

    let dt = update.since_last.as_secs_f32().min(model.max_frame_delta);
    model.animated_box.update(dt);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model.renderer.draw(
        &draw,
        &model.layout,
        model.store.state(),
        &model.settings,
        &model.buttons,
        &model.animated_box,
    );
    if let Err(err) = draw.to_frame(app, &frame) {
        tracing::error!("failed to draw frame: {:?}", err);
    }
}

// ******************************* Input *******************************

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let pos = app.mouse.position();
    let Model {
        store,
        settings,
        buttons,
        ..
    } = model;

    if buttons.mouse_pressed(pos) {
        settings.cancel_entry();
        return;
    }
    let state = store.state().clone();
    settings.mouse_pressed(pos, &state, &mut |action| store.dispatch(action));
}

fn mouse_released(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let pos = app.mouse.position();
    let Model {
        store,
        settings,
        buttons,
        ..
    } = model;

    settings.mouse_released();
    buttons.mouse_released(pos, &mut |action| store.dispatch(action));
}

fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let Model {
        store, settings, ..
    } = model;
    settings.mouse_moved(pos, &mut |action| store.dispatch(action));
}

fn received_character(_app: &App, model: &mut Model, ch: char) {
    model.settings.received_character(ch);
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    let Model {
        store, settings, ..
    } = model;
    keyboard::key_pressed(key, settings, &mut |action| store.dispatch(action));
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.layout = Layout::new(Rect::from_x_y_w_h(0.0, 0.0, size.x, size.y));
    model.settings.relayout(&model.layout);
    model.buttons.relayout(&model.layout);
}
