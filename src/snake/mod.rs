//! Snake state machine - body movement, collision checks and deferred growth.
//!
//! Eating and growing are decoupled: a food eaten by the head is queued and
//! only turns into a new segment once the tail reaches the cell where it was
//! eaten, so the meal visibly travels down the body first.

use std::collections::VecDeque;

use tracing::debug;

use crate::game::{Cell, Direction, GridSpec};

/// Why a move ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The head ran into the body
    SelfBite,
    /// The head left the arena
    OutOfBounds,
}

/// The snake: a non-empty, head-first body plus its digestion state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Cell>,
    active_food: Option<Cell>,
    pending_foods: VecDeque<Cell>,
    grow_at_next_move: bool,
}

impl Snake {
    /// A snake made of a single head cell.
    pub fn new(head: Cell) -> Self {
        Self {
            body: vec![head],
            active_food: None,
            pending_foods: VecDeque::new(),
            grow_at_next_move: false,
        }
    }

    /// Builds a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty body.
    pub fn from_body(body: Vec<Cell>) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Self {
            body,
            active_food: None,
            pending_foods: VecDeque::new(),
            grow_at_next_move: false,
        })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// All segments, head first.
    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// The eaten food the tail is currently heading for.
    pub fn active_food(&self) -> Option<Cell> {
        self.active_food
    }

    /// Eaten foods queued behind the active one.
    pub fn pending_foods(&self) -> impl ExactSizeIterator<Item = &Cell> {
        self.pending_foods.iter()
    }

    /// Whether the next move appends a segment.
    pub fn will_grow(&self) -> bool {
        self.grow_at_next_move
    }

    /// Advances the snake one cell of `step` pixels in `direction`.
    ///
    /// When growth is scheduled, a segment is first appended on the active
    /// food cell; the pre-existing segments then follow the leader and the head
    /// moves. The appended segment is not shifted in the same move.
    pub fn move_towards(&mut self, direction: Direction, step: i32) {
        let len_before = self.body.len();

        if self.grow_at_next_move {
            if let Some(food) = self.active_food.take() {
                self.body.push(food);
                self.active_food = self.pending_foods.pop_front();
                debug!(at = %food, len = self.body.len(), "snake grew");
            }
            self.grow_at_next_move = false;
        }

        for i in (1..len_before).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = self.body[0].translated(direction, step);
    }

    /// True iff the head shares a cell with any other segment.
    pub fn is_colliding(&self) -> bool {
        let head = self.head();
        self.body[1..].contains(&head)
    }

    pub fn is_out_of_bounds(&self, grid: &GridSpec) -> bool {
        !grid.contains(self.head())
    }

    /// The terminal condition for the current position, if any.
    pub fn collision(&self, grid: &GridSpec) -> Option<Collision> {
        if self.is_out_of_bounds(grid) {
            Some(Collision::OutOfBounds)
        } else if self.is_colliding() {
            Some(Collision::SelfBite)
        } else {
            None
        }
    }

    pub fn is_game_over(&self, grid: &GridSpec) -> bool {
        self.collision(grid).is_some()
    }

    pub fn is_eating(&self, food: Cell) -> bool {
        self.head() == food
    }

    /// Queues an eaten food; it becomes active right away if nothing else is.
    pub fn eat(&mut self, food: Cell) {
        self.pending_foods.push_back(food);
        if self.active_food.is_none() {
            self.active_food = self.pending_foods.pop_front();
        }
        debug!(at = %food, backlog = self.pending_foods.len(), "food swallowed");
    }

    /// Schedules growth once the tail sits on the active food.
    pub fn check_growth(&mut self) {
        if self.active_food == Some(self.tail()) {
            self.grow_at_next_move = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: i32 = 30;

    fn cells(points: &[(i32, i32)]) -> Vec<Cell> {
        points.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_single_cell_snake() {
        let snake = Snake::new(Cell::new(450, 450));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), snake.tail());
        assert!(!snake.is_colliding());
        assert!(!snake.will_grow());
        assert!(Snake::from_body(Vec::new()).is_none());
    }

    #[test]
    fn test_follow_the_leader() {
        let mut snake = Snake::from_body(cells(&[(90, 0), (60, 0), (30, 0)])).unwrap();
        let before = snake.body().to_vec();

        snake.move_towards(Direction::Down, STEP);

        assert_eq!(snake.head(), Cell::new(90, 30));
        assert_eq!(snake.len(), 3);
        for i in 1..snake.len() {
            assert_eq!(snake.body()[i], before[i - 1]);
        }
    }

    #[test]
    fn test_self_collision() {
        // Head folded back onto the third segment
        let snake =
            Snake::from_body(cells(&[(30, 30), (60, 30), (60, 0), (30, 0), (30, 30)])).unwrap();
        assert!(snake.is_colliding());

        let straight = Snake::from_body(cells(&[(90, 0), (60, 0), (30, 0)])).unwrap();
        assert!(!straight.is_colliding());
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = GridSpec::new(300, 300, STEP).unwrap();

        let mut snake = Snake::new(Cell::new(270, 120));
        assert!(!snake.is_out_of_bounds(&grid));
        snake.move_towards(Direction::Right, STEP);
        assert!(snake.is_out_of_bounds(&grid));
        assert_eq!(snake.collision(&grid), Some(Collision::OutOfBounds));

        for direction in [Direction::Up, Direction::Left] {
            let mut corner = Snake::new(Cell::new(0, 0));
            corner.move_towards(direction, STEP);
            assert!(corner.is_game_over(&grid));
        }
    }

    #[test]
    fn test_eat_promotes_first_food_only() {
        let mut snake = Snake::new(Cell::new(0, 0));
        snake.eat(Cell::new(30, 0));
        snake.eat(Cell::new(60, 0));

        assert_eq!(snake.active_food(), Some(Cell::new(30, 0)));
        assert_eq!(
            snake.pending_foods().copied().collect::<Vec<_>>(),
            vec![Cell::new(60, 0)]
        );
    }

    #[test]
    fn test_growth_waits_for_tail() {
        let mut snake = Snake::from_body(cells(&[(60, 0), (30, 0)])).unwrap();
        snake.eat(Cell::new(60, 0));

        snake.check_growth();
        assert!(!snake.will_grow());

        snake.move_towards(Direction::Right, STEP);
        assert_eq!(snake.tail(), Cell::new(60, 0));
        snake.check_growth();
        assert!(snake.will_grow());
    }

    #[test]
    fn test_growth_appends_on_food_cell() {
        let mut snake = Snake::from_body(cells(&[(90, 0), (60, 0)])).unwrap();
        snake.eat(Cell::new(60, 0));
        snake.check_growth();

        snake.move_towards(Direction::Right, STEP);

        assert_eq!(snake.body(), cells(&[(120, 0), (90, 0), (60, 0)]).as_slice());
        assert!(!snake.will_grow());
        assert_eq!(snake.active_food(), None);
    }

    #[test]
    fn test_growth_promotes_backlog() {
        let mut snake = Snake::new(Cell::new(0, 0));
        snake.eat(Cell::new(0, 0));
        snake.eat(Cell::new(30, 0));
        snake.check_growth();

        snake.move_towards(Direction::Right, STEP);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.active_food(), Some(Cell::new(30, 0)));
        assert_eq!(snake.pending_foods().len(), 0);
    }
}
