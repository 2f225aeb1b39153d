//! Snake core
//!
//! The snake moves one cell per step in its current direction. Food is eaten
//! on the step *after* the head reaches it, and the snake grows at the end of
//! that same step. Leaving the play field or running into the body ends the
//! round; the high score survives resets for the rest of the session.

use std::collections::VecDeque;

use quickplay_types::{
    Direction, Point, SnakeInput, SNAKE_CELL_SIZE, SNAKE_COLUMNS, SNAKE_ROWS, SNAKE_START,
    SNAKE_STEP_MS,
};

use crate::game::GameCore;
use crate::rng::SimpleRng;
use crate::schedule::{Epoch, StepClock};
use crate::snapshot::SnakeSnapshot;

/// Tunables for a snake round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeConfig {
    pub cell_size: i32,
    /// Play field width in cells
    pub columns: i32,
    /// Play field height in cells
    pub rows: i32,
    pub start: Point,
    pub start_direction: Direction,
    /// Movement period in milliseconds
    pub step_ms: u32,
}

impl SnakeConfig {
    /// Width of the play field in play-field units
    pub fn field_width(&self) -> i32 {
        self.columns * self.cell_size
    }

    /// Height of the play field in play-field units
    pub fn field_height(&self) -> i32 {
        self.rows * self.cell_size
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.field_width() && p.y < self.field_height()
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            cell_size: SNAKE_CELL_SIZE,
            columns: SNAKE_COLUMNS,
            rows: SNAKE_ROWS,
            start: SNAKE_START,
            start_direction: Direction::Right,
            step_ms: SNAKE_STEP_MS,
        }
    }
}

/// Complete snake state
#[derive(Debug, Clone)]
pub struct SnakeGame {
    config: SnakeConfig,
    rng: SimpleRng,
    clock: StepClock,
    head: Point,
    direction: Direction,
    /// Direction of the last executed step; reversal is judged against it.
    last_moved: Direction,
    /// Previous head positions, most recent first.
    body: VecDeque<Point>,
    length: usize,
    food: Option<Point>,
    eating: bool,
    score: u32,
    high_score: u32,
    game_over: bool,
    epoch: Epoch,
}

impl SnakeGame {
    pub fn new(seed: u32) -> Self {
        Self::with_config(SnakeConfig::default(), seed)
    }

    /// Build a game from `config`. A `cell_size` below 1 is raised to 1.
    pub fn with_config(mut config: SnakeConfig, seed: u32) -> Self {
        config.cell_size = config.cell_size.max(1);
        let mut game = Self {
            config,
            rng: SimpleRng::new(seed),
            clock: StepClock::new(config.step_ms),
            head: config.start,
            direction: config.start_direction,
            last_moved: config.start_direction,
            body: VecDeque::new(),
            length: 1,
            food: None,
            eating: false,
            score: 0,
            high_score: 0,
            game_over: false,
            epoch: Epoch::default(),
        };
        game.spawn_food();
        game
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Start a new round. The high score is kept.
    pub fn reset(&mut self) {
        self.head = self.config.start;
        self.direction = self.config.start_direction;
        self.last_moved = self.config.start_direction;
        self.body.clear();
        self.length = 1;
        self.score = 0;
        self.eating = false;
        self.game_over = false;
        self.clock.rewind();
        self.epoch = self.epoch.next();
        self.spawn_food();
        log::debug!("snake round started (epoch {})", self.epoch.value());
    }

    /// Change heading.
    ///
    /// Ignored after game over, and when it would turn the head straight back
    /// onto the cell it just left. That cell is part of the collision set as
    /// soon as the snake has taken a step, even at length one.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.game_over || direction == self.direction {
            return false;
        }
        if !self.body.is_empty() && direction == self.last_moved.opposite() {
            log::debug!("ignoring reversal {:?} -> {:?}", self.last_moved, direction);
            return false;
        }
        self.direction = direction;
        true
    }

    /// Change heading from a drag displacement (dominant axis wins).
    pub fn steer_by_drag(&mut self, dx: i32, dy: i32) -> bool {
        match Direction::from_drag(dx, dy) {
            Some(direction) => self.set_direction(direction),
            None => false,
        }
    }

    /// One movement step.
    ///
    /// Returns true if the state changed.
    pub fn step(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        if self.food == Some(self.head) {
            self.score += 1;
            if self.score > self.high_score {
                self.high_score = self.score;
            }
            self.eating = true;
            self.spawn_food();
        } else if self.body.len() > self.length {
            self.body.pop_back();
        }

        self.body.push_front(self.head);
        self.head = self.head.offset(self.direction, self.config.cell_size);
        self.last_moved = self.direction;

        if !self.config.contains(self.head) {
            self.end_round("left the play field");
            return true;
        }

        if self.body.iter().skip(1).any(|&p| p == self.head) {
            self.end_round("ran into itself");
            return true;
        }

        if self.eating {
            self.length += 1;
            self.eating = false;
        }
        true
    }

    /// Advance time by `elapsed_ms`, stepping once per elapsed period.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        let mut changed = false;
        for _ in 0..self.clock.advance(elapsed_ms) {
            changed |= self.step();
            if self.game_over {
                break;
            }
        }
        changed
    }

    pub fn apply_input(&mut self, input: SnakeInput) -> bool {
        match input {
            SnakeInput::Turn(direction) => self.set_direction(direction),
            SnakeInput::Restart => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            head: self.head,
            body: self.body.iter().copied().collect(),
            length: self.length,
            direction: self.direction,
            food: self.food,
            score: self.score,
            high_score: self.high_score,
            game_over: self.game_over,
            cell_size: self.config.cell_size,
            columns: self.config.columns,
            rows: self.config.rows,
            epoch: self.epoch,
        }
    }

    fn end_round(&mut self, reason: &str) {
        self.game_over = true;
        log::info!(
            "snake {} at ({}, {}); score {}, high score {}",
            reason,
            self.head.x,
            self.head.y,
            self.score,
            self.high_score
        );
    }

    /// Place food on a cell chosen uniformly among the cells not covered by
    /// the snake. With no free cell left the food disappears.
    fn spawn_food(&mut self) {
        let columns = self.config.columns.max(0) as usize;
        let rows = self.config.rows.max(0) as usize;
        let size = self.config.cell_size;

        let mut taken = vec![false; columns * rows];
        for p in std::iter::once(self.head).chain(self.body.iter().copied()) {
            if self.config.contains(p) {
                taken[(p.y / size) as usize * columns + (p.x / size) as usize] = true;
            }
        }

        let free = taken.iter().filter(|&&t| !t).count();
        if free == 0 {
            self.food = None;
            return;
        }

        let pick = self.rng.next_range(free as u32) as usize;
        self.food = taken
            .iter()
            .enumerate()
            .filter(|(_, &t)| !t)
            .nth(pick)
            .map(|(i, _)| Point::new((i % columns) as i32 * size, (i / columns) as i32 * size));
    }
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GameCore for SnakeGame {
    type Input = SnakeInput;
    type Snapshot = SnakeSnapshot;

    fn start(&mut self) {
        SnakeGame::reset(self);
    }

    fn reset(&mut self) {
        SnakeGame::reset(self);
    }

    fn tick(&mut self, elapsed_ms: u32) -> bool {
        SnakeGame::tick(self, elapsed_ms)
    }

    fn apply_input(&mut self, input: SnakeInput) -> bool {
        SnakeGame::apply_input(self, input)
    }

    fn snapshot(&self) -> SnakeSnapshot {
        SnakeGame::snapshot(self)
    }

    fn epoch(&self) -> Epoch {
        self.epoch
    }

    fn is_terminal(&self) -> bool {
        self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A game whose food sits out of the way in the bottom-left corner.
    fn quiet_game() -> SnakeGame {
        let mut game = SnakeGame::new(42);
        game.food = Some(Point::new(0, 190));
        game
    }

    #[test]
    fn test_new_game() {
        let game = SnakeGame::new(1);
        assert_eq!(game.head, SNAKE_START);
        assert_eq!(game.direction, Direction::Right);
        assert_eq!(game.length, 1);
        assert!(game.body.is_empty());
        assert!(!game.game_over);
        let food = game.food.unwrap();
        assert!(game.config.contains(food));
        assert_eq!(food.x % SNAKE_CELL_SIZE, 0);
        assert_eq!(food.y % SNAKE_CELL_SIZE, 0);
        assert_ne!(food, game.head);
    }

    #[test]
    fn test_step_moves_head_and_records_body() {
        let mut game = quiet_game();
        assert!(game.step());
        assert_eq!(game.head, Point::new(110, 100));
        assert_eq!(game.body, VecDeque::from(vec![Point::new(100, 100)]));

        game.step();
        game.step();
        // body is trimmed to length + 1 at most
        assert_eq!(game.body.len(), 2);
        assert_eq!(game.body[0], Point::new(120, 100));
    }

    #[test]
    fn test_tick_uses_step_period() {
        let mut game = quiet_game();
        assert!(!game.tick(SNAKE_STEP_MS - 1));
        assert_eq!(game.head, SNAKE_START);
        assert!(game.tick(1));
        assert_eq!(game.head, Point::new(110, 100));
        assert!(game.tick(SNAKE_STEP_MS * 2));
        assert_eq!(game.head, Point::new(130, 100));
    }

    #[test]
    fn test_eating_is_counted_one_step_later() {
        let mut game = quiet_game();
        game.food = Some(Point::new(110, 100));

        // Step n: the head arrives on the food.
        game.step();
        assert_eq!(game.head, Point::new(110, 100));
        assert_eq!(game.score, 0);
        assert_eq!(game.length, 1);

        // Step n+1: eaten, and the snake grows.
        game.step();
        assert_eq!(game.score, 1);
        assert_eq!(game.high_score, 1);
        assert_eq!(game.length, 2);
        assert_ne!(game.food, Some(Point::new(110, 100)));
        assert!(!game.eating);
    }

    #[test]
    fn test_wall_collision_is_terminal() {
        let mut game = quiet_game();
        // From x = 100 the right wall (x = 300) is 20 steps away.
        for _ in 0..19 {
            game.step();
            assert!(!game.game_over);
        }
        game.step();
        assert!(game.game_over);
        assert_eq!(game.head, Point::new(300, 100));

        let head = game.head;
        assert!(!game.step());
        assert!(!game.tick(10_000));
        assert_eq!(game.head, head);
    }

    #[test]
    fn test_self_collision() {
        let mut game = quiet_game();
        game.length = 5;
        game.body = VecDeque::from(vec![
            Point::new(90, 100),
            Point::new(90, 110),
            Point::new(100, 110),
            Point::new(110, 110),
        ]);
        game.last_moved = Direction::Right;
        game.direction = Direction::Down;

        game.step();
        assert!(game.game_over);
        assert_eq!(game.head, Point::new(100, 110));
    }

    #[test]
    fn test_reversal_rejected_with_neck() {
        let mut game = quiet_game();
        game.length = 3;
        game.step();
        assert!(!game.set_direction(Direction::Left));
        assert_eq!(game.direction, Direction::Right);

        // Turning twice between steps cannot sneak a reversal in.
        assert!(game.set_direction(Direction::Up));
        assert!(!game.set_direction(Direction::Left));
        assert_eq!(game.direction, Direction::Up);
    }

    #[test]
    fn test_reversal_allowed_before_first_step() {
        let mut game = quiet_game();
        assert!(game.set_direction(Direction::Left));
        game.step();
        assert_eq!(game.head, Point::new(90, 100));
        assert!(!game.game_over);
    }

    #[test]
    fn test_reversal_rejected_at_length_one_after_moving() {
        let mut game = quiet_game();
        game.step();
        game.step();
        assert_eq!(game.length, 1);
        assert_eq!(game.head, Point::new(120, 100));

        // (110, 100) was just left and still counts for collisions.
        assert!(!game.set_direction(Direction::Left));
        assert!(game.step());
        assert_eq!(game.head, Point::new(130, 100));
        assert!(!game.game_over);

        // Turning aside is still fine.
        assert!(game.set_direction(Direction::Down));
        game.step();
        assert_eq!(game.head, Point::new(130, 110));
        assert!(!game.game_over);
    }

    #[test]
    fn test_zero_cell_size_is_clamped() {
        let config = SnakeConfig {
            cell_size: 0,
            start: Point::new(5, 5),
            ..SnakeConfig::default()
        };
        let mut game = SnakeGame::with_config(config, 3);
        assert_eq!(game.config().cell_size, 1);
        assert!(game.food().is_some());

        game.food = Some(Point::new(0, 0));
        assert!(game.tick(SNAKE_STEP_MS));
        assert_eq!(game.head(), Point::new(6, 5));
        assert!(!game.game_over());
    }

    #[test]
    fn test_direction_ignored_after_game_over() {
        let mut game = quiet_game();
        game.game_over = true;
        assert!(!game.set_direction(Direction::Up));
        assert!(!game.apply_input(SnakeInput::Turn(Direction::Down)));
        assert_eq!(game.direction, Direction::Right);
    }

    #[test]
    fn test_drag_steering() {
        let mut game = quiet_game();
        assert!(game.steer_by_drag(2, -9));
        assert_eq!(game.direction, Direction::Up);
        assert!(!game.steer_by_drag(0, 0));
        assert!(game.steer_by_drag(-4, 1));
        assert_eq!(game.direction, Direction::Left);
    }

    #[test]
    fn test_reset_keeps_high_score() {
        let mut game = quiet_game();
        game.score = 4;
        game.high_score = 6;
        game.length = 5;
        game.game_over = true;
        let epoch = game.epoch;

        assert!(game.apply_input(SnakeInput::Restart));
        assert_eq!(game.score, 0);
        assert_eq!(game.high_score, 6);
        assert_eq!(game.length, 1);
        assert!(game.body.is_empty());
        assert!(!game.game_over);
        assert_eq!(game.head, SNAKE_START);
        assert_eq!(game.epoch, epoch.next());
    }

    #[test]
    fn test_reset_discards_partial_step() {
        let mut game = quiet_game();
        game.tick(SNAKE_STEP_MS - 10);
        game.reset();
        game.food = Some(Point::new(0, 190));
        assert!(!game.tick(10));
        assert_eq!(game.head, SNAKE_START);
    }

    #[test]
    fn test_food_avoids_snake() {
        let config = SnakeConfig {
            columns: 3,
            rows: 1,
            start: Point::new(0, 0),
            ..SnakeConfig::default()
        };
        let mut game = SnakeGame::with_config(config, 9);
        game.body = VecDeque::from(vec![Point::new(10, 0)]);
        for _ in 0..20 {
            game.spawn_food();
            assert_eq!(game.food, Some(Point::new(20, 0)));
        }

        game.body.push_front(Point::new(20, 0));
        game.spawn_food();
        assert_eq!(game.food, None);
    }

    #[test]
    fn test_snapshot_segments() {
        let mut game = quiet_game();
        game.length = 2;
        game.step();
        game.step();
        let snap = game.snapshot();
        let segments: Vec<Point> = snap.segments().collect();
        assert_eq!(segments, vec![Point::new(120, 100), Point::new(110, 100)]);
        assert_eq!(snap.cell_of(snap.head), (12, 10));
    }
}
