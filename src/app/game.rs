use std::collections::VecDeque;
use std::time::Duration;

use log::info;
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

use crate::app::control::{self, Control};
use crate::app::keyboard_control::Input;
use crate::app::prefs::Prefs;
use crate::basic::{Dir, GridDim};
use crate::food::{Food, SpawnPolicy};
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfBite,
}

/// What happened during one call to [`Game::update`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TickOutcome {
    /// The snake didn't move
    Idle,
    Moved,
    Ate,
    Crashed(Collision),
}

pub struct Game<R: Rng = ThreadRng> {
    control: Control,
    grid: GridDim,
    score_per_food: u32,
    food_spawn: SpawnPolicy,

    snake: Snake,
    food: Food,
    score: u32,

    /// Latest accepted turn, applied at the next step
    pending_dir: Option<Dir>,
    /// Inputs received since the last update, oldest first
    inputs: VecDeque<Input>,
    quit_requested: bool,

    rng: R,
}

impl Game {
    pub fn new(prefs: &Prefs) -> Self {
        Self::with_rng(prefs, thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(prefs: &Prefs, mut rng: R) -> Self {
        let grid = prefs.grid();
        let snake = Snake::initial(grid.cell);
        let food = Food::spawn(prefs.food_spawn, grid, &snake, &mut rng);

        Self {
            control: Control::new(prefs.move_interval),
            grid,
            score_per_food: prefs.score_per_food,
            food_spawn: prefs.food_spawn,

            snake,
            food,
            score: 0,

            pending_dir: None,
            inputs: VecDeque::new(),
            quit_requested: false,

            rng,
        }
    }

    pub fn push_input(&mut self, input: Input) {
        self.inputs.push_back(input);
    }

    /// Advance the session by `dt` of wall-clock time, all inputs pushed
    /// since the previous call are handled first
    pub fn update(&mut self, dt: Duration) -> TickOutcome {
        while let Some(input) = self.inputs.pop_front() {
            self.handle_input(input);
        }

        if !self.control.can_move(dt) {
            return TickOutcome::Idle;
        }

        if let Some(dir) = self.pending_dir.take() {
            self.snake.set_dir(dir);
        }
        self.snake.advance();

        self.handle_collisions()
    }

    fn handle_input(&mut self, input: Input) {
        match input {
            Input::Quit => {
                info!("quit requested");
                self.quit_requested = true;
            }
            Input::Restart => {
                if self.control.state() == control::State::GameOver {
                    self.restart();
                }
            }
            Input::Turn(dir) => {
                // checked against the latest accepted turn, not the last step
                if self.control.state() == control::State::Playing
                    && !dir.is_opposite(self.heading())
                {
                    self.pending_dir = Some(dir);
                }
            }
        }
    }

    fn handle_collisions(&mut self) -> TickOutcome {
        let head = self.snake.head();

        let collision = if !self.grid.contains(head) {
            Some(Collision::Wall)
        } else if self.snake.collides_with_self() {
            Some(Collision::SelfBite)
        } else {
            None
        };

        if let Some(collision) = collision {
            info!("game over ({:?}) with score {}", collision, self.score);
            self.control.game_over();
            return TickOutcome::Crashed(collision);
        }

        if head == self.food.pos() {
            self.snake.grow();
            self.food
                .respawn(self.food_spawn, self.grid, &self.snake, &mut self.rng);
            self.score += self.score_per_food;
            info!("Score: {}", self.score);
            return TickOutcome::Ate;
        }

        TickOutcome::Moved
    }

    fn restart(&mut self) {
        self.snake = Snake::initial(self.grid.cell);
        self.food = Food::spawn(self.food_spawn, self.grid, &self.snake, &mut self.rng);
        self.score = 0;
        self.pending_dir = None;
        self.control.play();
        info!("restarted");
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> control::State {
        self.control.state()
    }

    pub fn time_in_state(&self) -> Duration {
        self.control.time_in_state()
    }

    pub fn grid(&self) -> GridDim {
        self.grid
    }

    /// The direction the next step will take
    pub fn heading(&self) -> Dir {
        self.pending_dir.unwrap_or_else(|| self.snake.dir())
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Point;
    use crate::app::control::State;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const STEP: Duration = Duration::from_millis(120);

    const OUT_OF_THE_WAY: Point = Point::new(780, 580);

    fn game() -> Game<StdRng> {
        let prefs = Prefs::default().food_spawn(SpawnPolicy::FreeCell);
        let mut game = Game::with_rng(&prefs, StdRng::seed_from_u64(42));
        // keep the food out of the way unless a test places it
        game.food = Food::at(OUT_OF_THE_WAY);
        game
    }

    /// Place food right in front of the snake and step onto it
    fn eat(game: &mut Game<StdRng>) {
        game.food = Food::at(game.snake().head() + game.heading().offset(20));
        assert_eq!(step(game), TickOutcome::Ate);
        game.food = Food::at(OUT_OF_THE_WAY);
    }

    fn step(game: &mut Game<StdRng>) -> TickOutcome {
        game.update(STEP)
    }

    fn turn(game: &mut Game<StdRng>, dir: Dir) {
        game.push_input(Input::Turn(dir));
    }

    #[test]
    fn test_three_steps_from_start() {
        let mut game = game();
        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.snake().head(), Point::ORIGIN);
        assert_eq!(game.heading(), Dir::R);

        for _ in 0..3 {
            assert_eq!(step(&mut game), TickOutcome::Moved);
        }

        assert_eq!(game.snake().head(), Point::new(60, 0));
        assert_eq!(game.state(), State::Playing);
    }

    #[test]
    fn test_no_step_before_interval() {
        let mut game = game();
        assert_eq!(game.update(Duration::from_millis(100)), TickOutcome::Idle);
        assert_eq!(game.snake().head(), Point::ORIGIN);
        assert_eq!(game.update(Duration::from_millis(20)), TickOutcome::Moved);
        assert_eq!(game.snake().head(), Point::new(20, 0));
    }

    #[test]
    fn test_right_wall() {
        let mut game = game();
        // 39 steps reach x = 780, the last column
        for _ in 0..39 {
            assert_eq!(step(&mut game), TickOutcome::Moved);
        }
        assert_eq!(game.snake().head(), Point::new(780, 0));
        assert_eq!(game.state(), State::Playing);

        assert_eq!(step(&mut game), TickOutcome::Crashed(Collision::Wall));
        assert_eq!(game.snake().head(), Point::new(800, 0));
        assert_eq!(game.state(), State::GameOver);
    }

    #[test]
    fn test_top_wall() {
        let mut game = game();
        turn(&mut game, Dir::U);
        assert_eq!(step(&mut game), TickOutcome::Crashed(Collision::Wall));
        assert_eq!(game.snake().head(), Point::new(0, -20));
    }

    #[test]
    fn test_turns_apply_before_next_step() {
        for dir in [Dir::U, Dir::D, Dir::R] {
            let mut game = game();
            turn(&mut game, dir);
            game.update(Duration::ZERO);
            assert_eq!(game.heading(), dir);
        }

        let mut game = game();
        turn(&mut game, Dir::D);
        step(&mut game);
        assert_eq!(game.snake().head(), Point::new(0, 20));
        assert_eq!(game.snake().dir(), Dir::D);
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut game = game();
        step(&mut game);
        turn(&mut game, Dir::L);
        step(&mut game);
        assert_eq!(game.snake().dir(), Dir::R);
        assert_eq!(game.snake().head(), Point::new(40, 0));

        turn(&mut game, Dir::D);
        step(&mut game);
        turn(&mut game, Dir::U);
        game.update(Duration::ZERO);
        assert_eq!(game.heading(), Dir::D);
    }

    #[test]
    fn test_reversal_of_pending_turn_is_ignored() {
        let mut game = game();
        step(&mut game);
        // heading right, down then up before the next step
        turn(&mut game, Dir::D);
        game.update(Duration::ZERO);
        assert_eq!(game.heading(), Dir::D);
        turn(&mut game, Dir::U);
        game.update(Duration::ZERO);
        assert_eq!(game.heading(), Dir::D);

        assert_eq!(step(&mut game), TickOutcome::Moved);
        assert_eq!(game.snake().dir(), Dir::D);
        assert_eq!(game.snake().head(), Point::new(20, 20));
    }

    #[test]
    fn test_latest_accepted_turn_wins() {
        let mut game = game();
        step(&mut game);
        // down is accepted, left is not a reversal of down
        turn(&mut game, Dir::D);
        turn(&mut game, Dir::L);
        assert_eq!(game.update(Duration::ZERO), TickOutcome::Idle);
        assert_eq!(game.heading(), Dir::L);

        step(&mut game);
        assert_eq!(game.snake().head(), Point::ORIGIN);
    }

    #[test]
    fn test_eating() {
        let mut game = game();
        game.food = Food::at(Point::new(20, 0));

        assert_eq!(step(&mut game), TickOutcome::Ate);
        assert_eq!(game.score(), 10);
        let food = game.food();
        assert_ne!(food.pos(), Point::new(20, 0));
        assert!(game.grid().contains(food.pos()));
        // growth shows on the following step
        assert_eq!(game.snake().len(), 1);

        game.food = Food::at(OUT_OF_THE_WAY);
        assert_eq!(step(&mut game), TickOutcome::Moved);
        assert_eq!(game.snake().len(), 2);
        assert_eq!(game.score(), 10);
        assert_eq!(game.food().pos(), OUT_OF_THE_WAY);
    }

    #[test]
    fn test_self_bite_stops_the_snake() {
        let mut game = game();
        // a body of length 5 along the top row
        for _ in 0..4 {
            eat(&mut game);
        }
        step(&mut game);
        assert_eq!(game.snake().len(), 5);
        assert_eq!(game.score(), 40);

        turn(&mut game, Dir::D);
        step(&mut game);
        turn(&mut game, Dir::L);
        step(&mut game);
        turn(&mut game, Dir::U);
        assert_eq!(step(&mut game), TickOutcome::Crashed(Collision::SelfBite));
        assert_eq!(game.state(), State::GameOver);

        let head = game.snake().head();
        for _ in 0..5 {
            turn(&mut game, Dir::R);
            assert_eq!(step(&mut game), TickOutcome::Idle);
        }
        assert_eq!(game.snake().head(), head);
    }

    #[test]
    fn test_restart_while_playing_is_ignored() {
        let mut game = game();
        eat(&mut game);
        step(&mut game);

        game.push_input(Input::Restart);
        game.update(Duration::ZERO);
        assert_eq!(game.state(), State::Playing);
        assert_eq!(game.score(), 10);
        assert_eq!(game.snake().len(), 2);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut game = game();
        eat(&mut game);
        step(&mut game);
        turn(&mut game, Dir::U);
        assert_eq!(step(&mut game), TickOutcome::Crashed(Collision::Wall));

        game.push_input(Input::Restart);
        assert_eq!(game.update(Duration::ZERO), TickOutcome::Idle);
        assert_eq!(game.state(), State::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.snake().head(), Point::ORIGIN);
        assert_eq!(game.heading(), Dir::R);
        assert!(game.grid().contains(game.food().pos()));
    }

    #[test]
    fn test_turns_ignored_while_game_over() {
        let mut game = game();
        turn(&mut game, Dir::U);
        step(&mut game);
        turn(&mut game, Dir::R);
        game.update(Duration::ZERO);
        game.push_input(Input::Restart);
        game.update(Duration::ZERO);
        // the turn from before the restart was dropped
        assert_eq!(game.heading(), Dir::R);
        step(&mut game);
        assert_eq!(game.snake().head(), Point::new(20, 0));
    }

    #[test]
    fn test_quit() {
        let mut game = game();
        assert!(!game.quit_requested());
        game.push_input(Input::Quit);
        game.update(Duration::ZERO);
        assert!(game.quit_requested());
    }
}
