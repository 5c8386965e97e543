use life_grid::{DEFAULT_MAX_FPS, FramePacer, GridState, LifeError, Random, SimulationLoop};
use pixels::wgpu::Color;

pub type Rgb = [u8; 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Side of the square each cell occupies; its circle's diameter.
    pub cell_size: u32,
    pub alive_color: Rgb,
    pub dead_color: Rgb,
    pub max_fps: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            cell_size: 10,
            alive_color: [0x00, 0xff, 0xff],
            dead_color: [0x00, 0x00, 0x00],
            max_fps: DEFAULT_MAX_FPS,
        }
    }
}

impl DisplayConfig {
    /// A randomly seeded grid sized to the screen, paced to `max_fps`.
    pub fn build_simulation(&self, mut rand: Random) -> Result<SimulationLoop, LifeError> {
        let mut grid =
            GridState::from_display(self.screen_width, self.screen_height, self.cell_size)?;
        grid.reset_random(&mut rand);
        let pacer = FramePacer::new(self.max_fps)?;
        Ok(SimulationLoop::new(grid, rand, pacer))
    }

    pub fn alive_rgba(&self) -> [u8; 4] {
        rgba(self.alive_color)
    }

    pub fn dead_rgba(&self) -> [u8; 4] {
        rgba(self.dead_color)
    }

    pub fn clear_color(&self) -> Color {
        let [r, g, b] = self.dead_color.map(|channel| channel as f64 / 0xff as f64);
        Color { r, g, b, a: 1.0 }
    }
}

fn rgba([r, g, b]: Rgb) -> [u8; 4] {
    [r, g, b, 0xff]
}
