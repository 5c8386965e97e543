use crate::config::DisplayConfig;
use life_grid::GridState;

/// Paints `grid` into an RGBA `frame` of `width` x `height` pixels: a dead
/// background with one filled circle per cell, inscribed in the cell's square.
pub fn draw_grid(
    frame: &mut [u8],
    width: u32,
    height: u32,
    grid: &GridState,
    config: &DisplayConfig,
) {
    debug_assert_eq!(frame.len(), 4 * width as usize * height as usize);
    let alive = config.alive_rgba();
    let dead = config.dead_rgba();

    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&dead);
    }

    let mut canvas = Canvas { frame, width, height };
    let cols = grid.cols() as usize;
    for (index, cell) in grid.cells_iter().enumerate() {
        let row = (index / cols) as u32;
        let col = (index % cols) as u32;
        let color = if cell.is_alive() { alive } else { dead };
        let size = config.cell_size;
        canvas.fill_circle_in_square(col * size, row * size, size, color);
    }
}

struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl Canvas<'_> {
    fn fill_circle_in_square(&mut self, left: u32, top: u32, size: u32, color: [u8; 4]) {
        let radius = size as f32 / 2.0;
        let center_x = left as f32 + radius;
        let center_y = top as f32 + radius;
        for y in top..(top + size).min(self.height) {
            for x in left..(left + size).min(self.width) {
                let dx = x as f32 + 0.5 - center_x;
                let dy = y as f32 + 0.5 - center_y;
                if dx * dx + dy * dy <= radius * radius {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        let index = 4 * (y as usize * self.width as usize + x as usize);
        self.frame[index..index + 4].copy_from_slice(&color);
    }
}
