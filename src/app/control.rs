#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    GameOver,
    /// No free cell was left for an apple
    Won,
}

/// Fixed-step movement timing combined with game state management,
/// the snake moves once every `move_period` seconds regardless of
/// the graphics framerate
pub struct Control {
    /// Seconds accumulated since the last step
    timer: f32,
    move_period: f32,
    move_period_step: f32,
    min_move_period: f32,

    game_state: State,
}

impl Control {
    pub fn new(move_period: f32, move_period_step: f32, min_move_period: f32) -> Self {
        Self {
            timer: 0.,
            move_period,
            move_period_step,
            min_move_period,
            game_state: State::Playing,
        }
    }

    pub fn state(&self) -> State {
        self.game_state
    }

    pub fn move_period(&self) -> f32 {
        self.move_period
    }

    /// Called once per graphics frame with the time it took, returns
    /// whether the snake should take a step. At most one step is
    /// taken per frame and leftover time is dropped.
    pub fn can_update(&mut self, dt: f32) -> bool {
        if self.game_state != State::Playing {
            return false;
        }

        self.timer += dt;
        if self.timer >= self.move_period {
            self.timer = 0.;
            true
        } else {
            false
        }
    }

    pub fn speed_up(&mut self) {
        self.move_period = (self.move_period - self.move_period_step).max(self.min_move_period);
    }

    pub fn game_over(&mut self) {
        self.game_state = State::GameOver;
    }

    pub fn won(&mut self) {
        self.game_state = State::Won;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_on_period() {
        let mut control = Control::new(0.24, 0.01, 0.08);
        assert!(!control.can_update(0.1));
        assert!(!control.can_update(0.1));
        assert!(control.can_update(0.1));
        // timer was reset, not carried over
        assert!(!control.can_update(0.2));
        assert!(control.can_update(0.05));
    }

    #[test]
    fn test_one_step_per_frame_after_stall() {
        let mut control = Control::new(0.24, 0.01, 0.08);
        assert!(control.can_update(5.));
        assert!(!control.can_update(0.));
    }

    #[test]
    fn test_speed_up_floors() {
        let mut control = Control::new(0.24, 0.01, 0.08);
        let mut last = control.move_period();
        for _ in 0..16 {
            control.speed_up();
            assert!(control.move_period() < last);
            last = control.move_period();
        }
        assert!((control.move_period() - 0.08).abs() < 1e-4);
        for _ in 0..10 {
            control.speed_up();
            assert!(control.move_period() >= 0.08);
        }
        assert_eq!(control.move_period(), 0.08);
    }

    #[test]
    fn test_no_steps_after_game_over() {
        let mut control = Control::new(0.24, 0.01, 0.08);
        control.game_over();
        assert_eq!(control.state(), State::GameOver);
        assert!(!control.can_update(10.));
    }
}
