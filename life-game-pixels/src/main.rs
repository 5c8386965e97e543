#![deny(clippy::all)]
#![forbid(unsafe_code)]

use life_pixels_support::{AnimateError, DisplayConfig, HELP_CAPTION, animate};

const SCREEN_WIDTH: u32 = 800;
const SCREEN_HEIGHT: u32 = 600;
const CELL_SIZE: u32 = 10;
const MAX_FPS: u32 = 10;

fn main() -> Result<(), AnimateError> {
    env_logger::init();
    log::info!("{HELP_CAPTION}");
    animate(DisplayConfig {
        screen_width: SCREEN_WIDTH,
        screen_height: SCREEN_HEIGHT,
        cell_size: CELL_SIZE,
        max_fps: MAX_FPS,
        ..DisplayConfig::default()
    })
}
