use crate::error::LifeError;
use crate::random::Random;
use std::ops::{Index, IndexMut};

pub const NUM_BUFFERS: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Two generation buffers of equal size, one of which is active at any time.
/// The active buffer is read for rendering and as the input of a transition;
/// the inactive one is the write target of the next generation.
#[derive(Clone, Debug)]
pub struct GridState {
    rows: u32,
    cols: u32,
    buffers: [GridCells; NUM_BUFFERS],
    active: usize,
}

impl GridState {
    pub fn new(rows: u32, cols: u32) -> Result<Self, LifeError> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            buffers: [GridCells::new(rows, cols), GridCells::new(rows, cols)],
            active: 0,
        })
    }

    /// Sizes the grid so that square cells of `cell_size` pixels fit a
    /// `width` x `height` display. Partial cells at the edges are dropped.
    pub fn from_display(width: u32, height: u32, cell_size: u32) -> Result<Self, LifeError> {
        if cell_size == 0 {
            return Err(LifeError::InvalidDimension { rows: 0, cols: 0 });
        }
        let rows = height / cell_size;
        let cols = width / cell_size;
        log::info!("Columns: {cols}, rows: {rows}");
        Self::new(rows, cols)
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn num_cells(&self) -> usize {
        self.active_cells().num_cells()
    }

    pub fn active_buffer_index(&self) -> usize {
        self.active
    }

    pub fn inactive_buffer_index(&self) -> usize {
        NUM_BUFFERS - 1 - self.active
    }

    pub fn active_cells(&self) -> &GridCells {
        &self.buffers[self.active]
    }

    /// Active buffer cells in row-major order.
    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &Cell> + Clone {
        self.active_cells().cells_iter()
    }

    pub fn population(&self) -> usize {
        self.cells_iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn fill(&mut self, buffer: usize, cell: Cell) -> Result<(), LifeError> {
        self.buffer_mut(buffer)?.fill(cell);
        Ok(())
    }

    pub fn randomize(&mut self, buffer: usize, rand: &mut Random) -> Result<(), LifeError> {
        self.buffer_mut(buffer)?.fill_random(rand);
        Ok(())
    }

    /// Fresh random generation in buffer 0, which becomes active again, and
    /// an all-dead buffer 1.
    pub fn reset_random(&mut self, rand: &mut Random) {
        self.active = 0;
        self.buffers[0].fill_random(rand);
        self.buffers[1].fill(Cell::Dead);
    }

    /// Dead outside the grid.
    pub fn get_cell(&self, row: i64, col: i64) -> Cell {
        self.active_cells().get(Loc::new(row, col))
    }

    pub fn set_cell(&mut self, row: i64, col: i64, cell: Cell) -> Result<(), LifeError> {
        let loc = Loc::new(row, col);
        let cells = &mut self.buffers[self.active];
        match cells.cell_mut(loc) {
            Some(target) => {
                *target = cell;
                Ok(())
            }
            None => Err(LifeError::OutOfBounds { row, col }),
        }
    }

    pub fn count_alive_neighbors(&self, row: i64, col: i64) -> u32 {
        Neighborhood::new(self.active_cells(), Loc::new(row, col)).num_alive()
    }

    pub fn next_cell_state(&self, row: i64, col: i64) -> Cell {
        let cell = self.get_cell(row, col);
        let neighbors = self.count_alive_neighbors(row, col);
        match (cell, neighbors) {
            (Cell::Alive, 2..=3) => Cell::Alive,
            (Cell::Alive, _) => Cell::Dead,
            (Cell::Dead, 3) => Cell::Alive,
            (cell, _) => cell,
        }
    }

    pub fn advance_generation(&mut self) {
        let next = self.inactive_buffer_index();
        self.buffers[next].fill(Cell::Dead);
        for row in 0..self.rows as i64 {
            for col in 0..self.cols as i64 {
                let next_cell = self.next_cell_state(row, col);
                self.buffers[next][Loc::new(row, col)] = next_cell;
            }
        }
        self.active = next;
        log::debug!("Population: {}", self.population());
    }

    fn buffer_mut(&mut self, buffer: usize) -> Result<&mut GridCells, LifeError> {
        self.buffers
            .get_mut(buffer)
            .ok_or(LifeError::InvalidBuffer(buffer))
    }
}

#[derive(Clone, Debug)]
pub struct GridCells {
    cells: Vec<Cell>,
    width: u32,
    height: u32,
}

impl GridCells {
    fn new(rows: u32, cols: u32) -> Self {
        Self {
            cells: vec![Cell::Dead; rows as usize * cols as usize],
            width: cols,
            height: rows,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &Cell> + Clone {
        self.cells.iter()
    }

    pub fn get(&self, loc: Loc) -> Cell {
        self.cell(loc).copied().unwrap_or_default()
    }

    fn cell(&self, loc: Loc) -> Option<&Cell> {
        loc.grid_index(self.width, self.height)
            .map(|index| &self.cells[index])
    }

    fn cell_mut(&mut self, loc: Loc) -> Option<&mut Cell> {
        loc.grid_index(self.width, self.height)
            .map(|index| &mut self.cells[index])
    }

    fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    fn fill_random(&mut self, rand: &mut Random) {
        for cell in self.cells.iter_mut() {
            *cell = rand.next_bool(0.5).into();
        }
    }
}

impl Index<Loc> for GridCells {
    type Output = Cell;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl IndexMut<Loc> for GridCells {
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        self.cell_mut(loc)
            .unwrap_or_else(|| panic!("Index_mut indices {}, {} out of bounds", loc.row, loc.col))
    }
}

/// The eight cells surrounding `center`. Cells past the grid edge read as dead;
/// there is no wraparound.
pub struct Neighborhood<'a> {
    cells: &'a GridCells,
    center: Loc,
}

impl<'a> Neighborhood<'a> {
    pub fn new(cells: &'a GridCells, center: Loc) -> Self {
        Self { cells, center }
    }

    pub fn num_alive(&self) -> u32 {
        let mut result = 0;
        self.for_neighbor_cells(|neighbor| {
            if neighbor.is_alive() {
                result += 1;
            }
        });
        result
    }

    pub fn for_neighbor_cells<F>(&self, mut f: F)
    where
        F: FnMut(Cell),
    {
        self.for_cell(-1, -1, &mut f);
        self.for_cell(-1, 0, &mut f);
        self.for_cell(-1, 1, &mut f);

        self.for_cell(0, -1, &mut f);
        self.for_cell(0, 1, &mut f);

        self.for_cell(1, -1, &mut f);
        self.for_cell(1, 0, &mut f);
        self.for_cell(1, 1, &mut f);
    }

    fn for_cell<F>(&self, row_offset: i64, col_offset: i64, f: &mut F)
    where
        F: FnMut(Cell),
    {
        f(self.cells.get(self.center.offset(row_offset, col_offset)));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Loc {
    pub row: i64,
    pub col: i64,
}

impl Loc {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    pub fn offset(&self, row_offset: i64, col_offset: i64) -> Self {
        Self::new(
            self.row.saturating_add(row_offset),
            self.col.saturating_add(col_offset),
        )
    }

    pub fn grid_index(&self, width: u32, height: u32) -> Option<usize> {
        if (0..height as i64).contains(&self.row) && (0..width as i64).contains(&self.col) {
            Some(self.row as usize * width as usize + self.col as usize)
        } else {
            None
        }
    }
}
