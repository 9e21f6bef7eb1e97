use std::time::Duration;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    GameOver,
}

/// Accumulates frame time and tells when the snake is due for its next
/// step. Leftover time is dropped after every step so the snake never
/// makes two steps in the same frame
struct MoveClock {
    interval: Duration,
    elapsed: Duration,
}

impl MoveClock {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    fn tick(&mut self, dt: Duration) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }

    fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

// combines move timing with game state management
pub struct Control {
    move_clock: MoveClock,
    game_state: State,
    /// Time spent in the current state, drives the game over fade
    in_state: Duration,
}

impl Control {
    pub fn new(move_interval: Duration) -> Self {
        Self {
            move_clock: MoveClock::new(move_interval),
            game_state: State::Playing,
            in_state: Duration::ZERO,
        }
    }

    /// Called once per frame, true when the snake should step, never
    /// true outside of `State::Playing`
    pub fn can_move(&mut self, dt: Duration) -> bool {
        self.in_state += dt;
        match self.game_state {
            State::Playing => self.move_clock.tick(dt),
            State::GameOver => false,
        }
    }

    pub fn state(&self) -> State {
        self.game_state
    }

    pub fn time_in_state(&self) -> Duration {
        self.in_state
    }

    pub fn play(&mut self) {
        self.game_state = State::Playing;
        self.in_state = Duration::ZERO;
        self.move_clock.restart();
    }

    pub fn game_over(&mut self) {
        self.game_state = State::GameOver;
        self.in_state = Duration::ZERO;
    }
}
