use crate::grid::GridState;
use crate::pacer::{Clock, FramePacer};
use crate::random::Random;

/// Logical commands, translated from whatever raw input the front end sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Pause,
    Randomize,
    Quit,
}

/// A batch of commands with repeats collapsed: each kind acts at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommandSet {
    pub pause: bool,
    pub randomize: bool,
    pub quit: bool,
}

impl CommandSet {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl FromIterator<Command> for CommandSet {
    fn from_iter<I: IntoIterator<Item = Command>>(commands: I) -> Self {
        let mut result = Self::default();
        for command in commands {
            match command {
                Command::Pause => result.pause = true,
                Command::Randomize => result.randomize = true,
                Command::Quit => result.quit = true,
            }
        }
        result
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
    Stopped,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimState {
    paused: bool,
    stopped: bool,
}

impl SimState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Randomize does not touch the run state; it only reinitializes the grid.
    pub fn apply(self, commands: &CommandSet) -> Self {
        if self.stopped {
            return self;
        }
        Self {
            paused: self.paused != commands.pause,
            stopped: commands.quit,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn run_state(&self) -> RunState {
        if self.stopped {
            RunState::Stopped
        } else if self.paused {
            RunState::Paused
        } else {
            RunState::Running
        }
    }
}

#[derive(Debug)]
pub struct SimulationLoop {
    grid: GridState,
    state: SimState,
    rand: Random,
    pacer: FramePacer,
}

impl SimulationLoop {
    pub fn new(grid: GridState, rand: Random, pacer: FramePacer) -> Self {
        Self {
            grid,
            state: SimState::new(),
            rand,
            pacer,
        }
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// One loop iteration: apply the commands, then, unless paused, advance a
    /// generation, render it and wait out the frame interval. A quit lets the
    /// current iteration finish. Returns true once the loop should stop.
    pub fn step<I, R, C>(&mut self, commands: I, mut render: R, clock: &mut C) -> bool
    where
        I: IntoIterator<Item = Command>,
        R: FnMut(&GridState),
        C: Clock,
    {
        if self.state.is_stopped() {
            return true;
        }

        let commands: CommandSet = commands.into_iter().collect();
        self.handle_commands(&commands, &mut render);

        if !self.state.is_paused() {
            self.grid.advance_generation();
            render(&self.grid);
            self.pacer.pace(clock);
        }
        self.state.is_stopped()
    }

    pub fn run<P, I, R, C>(&mut self, mut poll: P, mut render: R, clock: &mut C)
    where
        P: FnMut() -> I,
        I: IntoIterator<Item = Command>,
        R: FnMut(&GridState),
        C: Clock,
    {
        while !self.step(poll(), &mut render, clock) {}
    }

    fn handle_commands<R>(&mut self, commands: &CommandSet, render: &mut R)
    where
        R: FnMut(&GridState),
    {
        if commands.is_empty() {
            return;
        }
        if commands.pause {
            log::info!("Toggling pause.");
        }
        if commands.randomize {
            log::info!("Randomizing grid.");
            self.grid.reset_random(&mut self.rand);
            render(&self.grid);
        }
        if commands.quit {
            log::info!("Exiting.");
        }
        self.state = self.state.apply(commands);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::pacer::tests::FakeClock;
    use std::collections::VecDeque;
    use std::time::Duration;

    fn sim_with(alive: &[(i64, i64)]) -> SimulationLoop {
        let mut grid = GridState::new(5, 5).unwrap();
        for &(row, col) in alive {
            grid.set_cell(row, col, Cell::Alive).unwrap();
        }
        SimulationLoop::new(grid, Random::from_seed(5), FramePacer::new(10).unwrap())
    }

    fn snapshot(grid: &GridState) -> Vec<Cell> {
        grid.cells_iter().copied().collect()
    }

    #[test]
    fn starts_running() {
        assert_eq!(SimState::new().run_state(), RunState::Running);
    }

    #[test]
    fn pause_toggles() {
        let pause: CommandSet = [Command::Pause].into_iter().collect();
        let state = SimState::new().apply(&pause);
        assert_eq!(state.run_state(), RunState::Paused);
        assert_eq!(state.apply(&pause).run_state(), RunState::Running);
    }

    #[test]
    fn repeated_commands_act_once() {
        let commands: CommandSet = [Command::Pause, Command::Pause, Command::Pause]
            .into_iter()
            .collect();
        assert_eq!(
            SimState::new().apply(&commands).run_state(),
            RunState::Paused
        );
    }

    #[test]
    fn randomize_keeps_run_state() {
        let randomize: CommandSet = [Command::Randomize].into_iter().collect();
        assert_eq!(SimState::new().apply(&randomize), SimState::new());
    }

    #[test]
    fn quit_is_terminal() {
        let quit: CommandSet = [Command::Quit].into_iter().collect();
        let pause: CommandSet = [Command::Pause].into_iter().collect();
        let paused = SimState::new().apply(&pause);
        let stopped = paused.apply(&quit);
        assert_eq!(stopped.run_state(), RunState::Stopped);
        assert_eq!(stopped.apply(&pause).run_state(), RunState::Stopped);
    }

    #[test]
    fn running_step_advances_renders_and_paces() {
        let mut sim = sim_with(&[(2, 1), (2, 2), (2, 3)]);
        let mut clock = FakeClock::default();
        let mut renders = vec![];

        assert!(!sim.step([], |grid| renders.push(snapshot(grid)), &mut clock));
        clock.advance_millis(20);
        assert!(!sim.step([], |grid| renders.push(snapshot(grid)), &mut clock));

        assert_eq!(renders.len(), 2);
        assert_eq!(sim.grid().get_cell(2, 1), Cell::Alive);
        assert_eq!(sim.grid().get_cell(2, 3), Cell::Alive);
        assert_eq!(sim.grid().get_cell(1, 2), Cell::Dead);
        assert_eq!(clock.sleeps, vec![Duration::from_millis(80)]);
    }

    #[test]
    fn blinker_round_trips_through_loop() {
        let mut sim = sim_with(&[(2, 1), (2, 2), (2, 3)]);
        let before = snapshot(sim.grid());
        let mut clock = FakeClock::default();
        sim.step([], |_| {}, &mut clock);
        assert_ne!(snapshot(sim.grid()), before);
        sim.step([], |_| {}, &mut clock);
        assert_eq!(snapshot(sim.grid()), before);
    }

    #[test]
    fn paused_step_does_nothing() {
        let mut sim = sim_with(&[(2, 2)]);
        let mut clock = FakeClock::default();
        let mut renders = 0;

        assert!(!sim.step([Command::Pause], |_| renders += 1, &mut clock));
        assert!(!sim.step([], |_| renders += 1, &mut clock));

        assert_eq!(sim.state().run_state(), RunState::Paused);
        assert_eq!(renders, 0);
        assert_eq!(sim.grid().get_cell(2, 2), Cell::Alive);
        assert!(clock.sleeps.is_empty());
    }

    #[test]
    fn randomize_while_paused_keeps_pause() {
        let mut sim = sim_with(&[]);
        let mut clock = FakeClock::default();
        let mut renders = vec![];

        sim.step([Command::Pause], |_| {}, &mut clock);
        sim.step(
            [Command::Randomize],
            |grid| renders.push(snapshot(grid)),
            &mut clock,
        );

        assert!(sim.state().is_paused());
        assert!(sim.grid().population() > 0);
        assert_eq!(sim.grid().active_buffer_index(), 0);
        assert_eq!(renders, vec![snapshot(sim.grid())]);
    }

    #[test]
    fn randomize_while_running_renders_before_advancing() {
        let mut sim = sim_with(&[]);
        let mut clock = FakeClock::default();
        let mut renders = vec![];

        sim.step(
            [Command::Randomize],
            |grid| renders.push(grid.active_buffer_index()),
            &mut clock,
        );

        assert_eq!(renders, vec![0, 1]);
        assert_eq!(sim.state().run_state(), RunState::Running);
    }

    #[test]
    fn quit_finishes_current_iteration() {
        let mut sim = sim_with(&[(2, 2)]);
        let mut clock = FakeClock::default();
        let mut renders = 0;

        assert!(sim.step([Command::Quit], |_| renders += 1, &mut clock));
        assert_eq!(renders, 1);
        assert_eq!(sim.grid().population(), 0);

        assert!(sim.step([], |_| renders += 1, &mut clock));
        assert_eq!(renders, 1);
        assert_eq!(sim.state().run_state(), RunState::Stopped);
    }

    #[test]
    fn run_stops_on_quit() {
        let mut sim = sim_with(&[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let mut clock = FakeClock::default();
        let mut script = VecDeque::from([
            vec![],
            vec![Command::Pause],
            vec![Command::Pause],
            vec![],
            vec![Command::Quit],
        ]);
        let mut renders = 0;

        sim.run(
            || script.pop_front().unwrap_or_default(),
            |_| renders += 1,
            &mut clock,
        );

        assert!(script.is_empty());
        assert_eq!(renders, 4);
        assert_eq!(sim.grid().population(), 4);
        assert_eq!(clock.sleeps.len(), 3);
    }
}
