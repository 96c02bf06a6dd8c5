use crate::basic::Dir;
use ggez::input::keyboard::KeyCode::{self, *};
use std::collections::VecDeque;

/// Everything the player can ask of the game
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Input {
    Steer(Dir),
    Restart,
    Quit,
}

#[derive(Copy, Clone)]
pub struct Controls {
    pub u: KeyCode,
    pub d: KeyCode,
    pub l: KeyCode,
    pub r: KeyCode,
    pub restart: KeyCode,
    pub quit: KeyCode,
}

impl Default for Controls {
    fn default() -> Self {
        Self { u: Up, d: Down, l: Left, r: Right, restart: Space, quit: Escape }
    }
}

impl Controls {
    pub fn input_for(&self, key: KeyCode) -> Option<Input> {
        let input = match key {
            k if k == self.u => Input::Steer(Dir::U),
            k if k == self.d => Input::Steer(Dir::D),
            k if k == self.l => Input::Steer(Dir::L),
            k if k == self.r => Input::Steer(Dir::R),
            k if k == self.restart => Input::Restart,
            k if k == self.quit => Input::Quit,
            _ => return None,
        };
        Some(input)
    }
}

/// Inputs collected by the event callbacks, drained once per frame
#[derive(Default)]
pub struct InputQueue(VecDeque<Input>);

impl InputQueue {
    pub fn push(&mut self, input: Input) {
        self.0.push_back(input);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Input> + '_ {
        self.0.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[test]
fn test_default_controls() {
    let controls = Controls::default();
    assert_eq!(controls.input_for(Up), Some(Input::Steer(Dir::U)));
    assert_eq!(controls.input_for(Right), Some(Input::Steer(Dir::R)));
    assert_eq!(controls.input_for(Space), Some(Input::Restart));
    assert_eq!(controls.input_for(Escape), Some(Input::Quit));
    assert_eq!(controls.input_for(Q), None);
}
