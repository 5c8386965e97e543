#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod render;

pub use config::{DisplayConfig, Rgb};
pub use input::command_for_key;
pub use render::draw_grid;

use error_iter::ErrorIter as _;
use life_grid::{Command, LifeError, Random, SimulationLoop, SystemClock};
use log::error;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

pub const WINDOW_TITLE: &str = "LifeGame";
pub const HELP_CAPTION: &str = "\"s\" to Pause - \"r\" to Randomize - \"q\" to Quit";

#[derive(Debug, Error)]
pub enum AnimateError {
    #[error(transparent)]
    Life(#[from] LifeError),
    #[error("event loop failed")]
    EventLoop(#[from] EventLoopError),
    #[error("window creation failed")]
    Window(#[from] OsError),
    #[error("pixels failed")]
    Pixels(#[from] pixels::Error),
}

/// Opens a window sized per `config` and runs the simulation in it until the
/// player quits or closes the window.
pub fn animate(config: DisplayConfig) -> Result<(), AnimateError> {
    let sim = config.build_simulation(Random::new())?;
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut handler = AppEventHandler::new(config, sim);
    event_loop.run_app(&mut handler)?;
    handler.into_result()
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: &E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

struct App {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl App {
    fn new(event_loop: &ActiveEventLoop, config: &DisplayConfig) -> Result<Self, AnimateError> {
        let window = Arc::new(Self::build_window(event_loop, config)?);
        let pixels = Self::build_pixels(&window, config)?;
        Ok(Self { window, pixels })
    }

    fn build_window(
        event_loop: &ActiveEventLoop,
        config: &DisplayConfig,
    ) -> Result<Window, OsError> {
        let window_attributes = Window::default_attributes()
            .with_title(format!("{WINDOW_TITLE} - {HELP_CAPTION}"))
            .with_inner_size(PhysicalSize::new(config.screen_width, config.screen_height))
            .with_resizable(false)
            .with_visible(false);
        event_loop.create_window(window_attributes)
    }

    fn build_pixels(
        window: &Arc<Window>,
        config: &DisplayConfig,
    ) -> Result<Pixels<'static>, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        PixelsBuilder::new(config.screen_width, config.screen_height, surface_texture)
            .clear_color(config.clear_color())
            .build()
    }

    fn on_create(&mut self) {
        self.window.request_redraw();
        self.window.set_visible(true);
    }
}

struct AppEventHandler {
    config: DisplayConfig,
    sim: SimulationLoop,
    clock: SystemClock,
    pending: Vec<Command>,
    app: Option<App>,
    error: Option<AnimateError>,
}

impl AppEventHandler {
    fn new(config: DisplayConfig, sim: SimulationLoop) -> Self {
        Self {
            config,
            sim,
            clock: SystemClock::new(),
            pending: vec![],
            app: None,
            error: None,
        }
    }

    fn into_result(self) -> Result<(), AnimateError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, method_name: &str, err: AnimateError) {
        log_error(method_name, &err);
        self.error = Some(err);
        event_loop.exit();
    }

    /// One pass of the simulation loop over the commands gathered since the
    /// last pass. Returns true once the loop should stop.
    fn on_iteration(&mut self) -> Result<bool, AnimateError> {
        let Some(app) = self.app.as_mut() else {
            return Ok(false);
        };
        let config = &self.config;
        let mut render_result = Ok(());
        let stop = self.sim.step(
            self.pending.drain(..),
            |grid| {
                if render_result.is_ok() {
                    draw_grid(
                        app.pixels.frame_mut(),
                        config.screen_width,
                        config.screen_height,
                        grid,
                        config,
                    );
                    render_result = app.pixels.render();
                }
            },
            &mut self.clock,
        );
        render_result?;
        Ok(stop)
    }

    fn on_redraw(&mut self) -> Result<(), pixels::Error> {
        let Some(app) = self.app.as_mut() else {
            return Ok(());
        };
        draw_grid(
            app.pixels.frame_mut(),
            self.config.screen_width,
            self.config.screen_height,
            self.sim.grid(),
            &self.config,
        );
        app.pixels.render()
    }
}

impl ApplicationHandler for AppEventHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_none() {
            match App::new(event_loop, &self.config) {
                Ok(mut app) => {
                    app.on_create();
                    self.app = Some(app);
                }
                Err(err) => self.fail(event_loop, "App::new", err),
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(command) = command_for_key(code) {
                    self.pending.push(command);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.on_redraw() {
                    self.fail(event_loop, "pixels.render", err.into());
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if event_loop.exiting() {
            return;
        }
        match self.on_iteration() {
            Ok(true) => event_loop.exit(),
            Ok(false) => {
                // Paused: sleep until input arrives instead of spinning.
                let control_flow = if self.sim.state().is_paused() {
                    ControlFlow::Wait
                } else {
                    ControlFlow::Poll
                };
                event_loop.set_control_flow(control_flow);
            }
            Err(err) => self.fail(event_loop, "pixels.render", err),
        }
    }
}
