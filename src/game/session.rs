use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::info;

use super::{Cell, Direction, GridSpec, INITIAL_DIRECTION, Key, translate_input};
use crate::food::place_food;
use crate::snake::{Collision, Snake};

/// What ended a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// The head ran into the body
    SelfBite,
    /// The head left the arena
    OutOfBounds,
    /// No free cell was left for food; the player filled the board
    BoardFull,
}

impl GameOverCause {
    pub fn is_win(&self) -> bool {
        matches!(self, GameOverCause::BoardFull)
    }
}

impl From<Collision> for GameOverCause {
    fn from(collision: Collision) -> Self {
        match collision {
            Collision::SelfBite => GameOverCause::SelfBite,
            Collision::OutOfBounds => GameOverCause::OutOfBounds,
        }
    }
}

/// Session lifecycle; `GameOver` is terminal and sticky.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver(GameOverCause),
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Food the head reached this tick, if any
    pub ate: Option<Cell>,
    /// Whether the body gained a segment this tick
    pub grew: bool,
    /// Whether the session is in its terminal state after this tick
    pub terminal: bool,
}

/// One game from start to game over: snake, food on the board, score and heading.
///
/// All mutation goes through [`Session::tick`], [`Session::steer`] and
/// [`Session::restart`].
#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    grid: GridSpec,
    snake: Snake,
    food: Option<Cell>,
    score: u32,
    direction: Direction,
    phase: Phase,
    ticks: u64,
    rng: R,
}

impl Session<StdRng> {
    /// Start a session on `grid` with an entropy-seeded generator.
    pub fn new(grid: GridSpec) -> Self {
        Session::with_rng(grid, StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> Session<R> {
    /// Start a session drawing food positions from `rng`.
    ///
    /// The snake is a single head cell at the grid center heading right. On a
    /// grid with no room for food the session is over before it starts.
    pub fn with_rng(grid: GridSpec, rng: R) -> Self {
        let mut session = Self {
            grid,
            snake: Snake::new(grid.center()),
            food: None,
            score: 0,
            direction: INITIAL_DIRECTION,
            phase: Phase::Running,
            ticks: 0,
            rng,
        };
        session.restart();
        session
    }

    /// Reset snake, food, score and heading for a new game on the same grid.
    pub fn restart(&mut self) {
        self.snake = Snake::new(self.grid.center());
        self.score = 0;
        self.direction = INITIAL_DIRECTION;
        self.ticks = 0;
        self.phase = Phase::Running;
        self.food = None;

        match place_food(self.snake.body(), &self.grid, &mut self.rng) {
            Ok(food) => self.food = Some(food),
            Err(_) => self.finish(GameOverCause::BoardFull),
        }

        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            cell_size = self.grid.cell_size(),
            "new session"
        );
    }

    /// Executes one simulation step heading in `direction`.
    ///
    /// Moves the snake, checks the terminal conditions, then handles eating
    /// and growth scheduling. Once the session is over this is a no-op that
    /// keeps reporting `terminal`.
    pub fn tick(&mut self, direction: Direction) -> TickReport {
        if self.is_terminal() {
            return TickReport {
                ate: None,
                grew: false,
                terminal: true,
            };
        }

        self.direction = direction;
        let len_before = self.snake.len();
        self.snake.move_towards(direction, self.grid.cell_size());
        self.ticks += 1;
        let grew = self.snake.len() > len_before;

        if let Some(collision) = self.snake.collision(&self.grid) {
            self.finish(collision.into());
            return TickReport {
                ate: None,
                grew,
                terminal: true,
            };
        }

        let ate = self.food.filter(|&food| self.snake.is_eating(food));
        if let Some(food) = ate {
            self.snake.eat(food);
            self.score += 1;
            match place_food(self.snake.body(), &self.grid, &mut self.rng) {
                Ok(next) => self.food = Some(next),
                Err(_) => {
                    self.food = None;
                    self.finish(GameOverCause::BoardFull);
                }
            }
        }

        self.snake.check_growth();

        TickReport {
            ate,
            grew,
            terminal: self.is_terminal(),
        }
    }

    fn finish(&mut self, cause: GameOverCause) {
        self.phase = Phase::GameOver(cause);
        info!(?cause, score = self.score, ticks = self.ticks, "game over");
    }
}

impl<R> Session<R> {
    /// Applies a raw key to the current heading, refusing direct reversals.
    pub fn steer(&mut self, key: Key) -> Direction {
        if !self.is_terminal() {
            self.direction = translate_input(self.direction, key);
        }
        self.direction
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Snake segments, head first.
    pub fn body(&self) -> &[Cell] {
        self.snake.body()
    }

    /// The food currently waiting on the board.
    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Number of steps executed since the session started.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Replace the food on the board, e.g. to script a scenario.
    pub fn set_food(&mut self, food: Cell) {
        self.food = Some(food);
    }
}
