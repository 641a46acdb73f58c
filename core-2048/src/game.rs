use log::{debug, info};
use rand::Rng;

use crate::{
    direction::Direction,
    grid::{Grid, SIZE},
    moves, spawn, terminal,
};

/// Snapshot of a game: the board and whether it is finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState<const N: usize = SIZE> {
    grid: Grid<N>,
    is_over: bool,
}

impl<const N: usize> GameState<N> {
    /// A board with a single spawned tile.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self::from_grid(spawn::spawn_tile(rng, &Grid::EMPTY))
    }

    /// Resumes play from an arbitrary board.
    pub fn from_grid(grid: Grid<N>) -> Self {
        Self {
            grid,
            is_over: terminal::is_terminal(&grid),
        }
    }

    pub const fn grid(&self) -> Grid<N> {
        self.grid
    }

    pub const fn is_over(&self) -> bool {
        self.is_over
    }

    /// Moves, then spawns and re-checks for game over if the move changed the
    /// board. Finished games and moves that change nothing return `self`
    /// without drawing from `rng`.
    #[must_use]
    pub fn apply_direction(self, direction: Direction, rng: &mut impl Rng) -> Self {
        if self.is_over {
            return self;
        }

        let result = moves::apply(&self.grid, direction);

        if !result.changed {
            debug!("move {direction} left the grid unchanged");

            return self;
        }

        let next = Self::from_grid(spawn::spawn_tile(rng, &result.grid));

        if next.is_over {
            info!("game over, highest tile {}", next.grid.max_tile());
        }

        next
    }
}

/// Owns the current [`GameState`] together with its random source.
pub struct GameController<R, const N: usize = SIZE> {
    rng: R,
    state: GameState<N>,
}

impl<R, const N: usize> GameController<R, N>
where
    R: Rng,
{
    pub fn new(mut rng: R) -> Self {
        let state = GameState::new(&mut rng);

        Self { rng, state }
    }

    pub const fn state(&self) -> GameState<N> {
        self.state
    }

    pub const fn grid(&self) -> Grid<N> {
        self.state.grid
    }

    pub const fn is_over(&self) -> bool {
        self.state.is_over
    }

    pub fn apply_direction(&mut self, direction: Direction) -> GameState<N> {
        self.state = self.state.apply_direction(direction, &mut self.rng);

        self.state
    }

    /// Discards the current game and starts a new one from the same generator.
    pub fn reset(&mut self) -> GameState<N> {
        debug!("resetting game");

        self.state = GameState::new(&mut self.rng);

        self.state
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::mock::StepRng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn new_game_has_one_tile() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..50 {
            let state: GameState = GameState::new(&mut rng);

            assert!(!state.is_over());
            assert_eq!(state.grid().empty_count(), SIZE * SIZE - 1);
            assert!(matches!(state.grid().max_tile(), 2 | 4));
        }
    }

    #[test]
    fn no_op_move_does_not_consume_randomness() {
        // A zero draw selects the first empty cell and a 4.
        let mut rng = StepRng::new(0, 1);
        let state: GameState = GameState::new(&mut rng);
        assert_eq!(state.grid().get(0, 0), 4);

        let after = state.apply_direction(Direction::Left, &mut rng);
        assert_eq!(after, state);

        let after = state.apply_direction(Direction::Up, &mut rng);
        assert_eq!(after, state);

        assert_eq!(rand::RngCore::next_u64(&mut rng), 1);
    }

    #[test]
    fn game_over_absorbs_moves() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
            .unwrap();
        let state = GameState::from_grid(grid);
        assert!(state.is_over());

        for direction in Direction::iter() {
            assert_eq!(state.apply_direction(direction, &mut rng), state);
        }
    }

    #[test]
    fn last_move_can_end_the_game() {
        let grid = Grid::from_rows([[0, 2, 4, 8], [4, 8, 16, 32], [2, 4, 8, 16], [4, 8, 16, 32]])
            .unwrap();
        let state = GameState::from_grid(grid);
        assert!(!state.is_over());

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let after = state.apply_direction(Direction::Left, &mut rng);

        assert_eq!(after.grid().empty_count(), 0);
        assert!(after.is_over());
        assert_eq!(after.apply_direction(Direction::Right, &mut rng), after);
    }

    #[test]
    fn spawned_value_decides_game_over() {
        let grid = Grid::from_rows([[0, 2, 4, 8], [4, 8, 16, 4], [2, 4, 8, 16], [4, 8, 16, 32]])
            .unwrap();
        let state = GameState::from_grid(grid);

        let mut rng = ChaCha8Rng::seed_from_u64(5);

        for _ in 0..20 {
            let after = state.apply_direction(Direction::Left, &mut rng);

            assert_eq!(after.is_over(), after.grid().get(0, 3) == 2);
        }
    }

    #[test]
    fn controller_reset_starts_over() {
        let mut controller: GameController<_> =
            GameController::new(ChaCha8Rng::seed_from_u64(11));

        for direction in Direction::iter().cycle().take(40) {
            controller.apply_direction(direction);
        }
        assert!(controller.grid().empty_count() < SIZE * SIZE - 1);

        let state = controller.reset();

        assert_eq!(state, controller.state());
        assert!(!controller.is_over());
        assert_eq!(controller.grid().empty_count(), SIZE * SIZE - 1);
    }
}
