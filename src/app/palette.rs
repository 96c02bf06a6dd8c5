use ggez::graphics::Color;

lazy_static! {
    static ref DEFAULT_GRID_COLOR: Color = Color::from_rgb_u32(0x717171);
    static ref DEFAULT_SNAKE_COLOR: Color = Color::from_rgb_u32(0x3df407);
    static ref DEFAULT_APPLE_COLOR: Color = Color::from_rgb_u32(0xf42b07);
    static ref DEFAULT_CRASHED_COLOR: Color = Color::from_rgb(255, 0, 128);
}

#[derive(Copy, Clone, Debug)]
pub struct Palette {
    pub background_color: Color,
    pub grid_color: Color,
    pub snake_color: Color,
    pub apple_color: Color,
    /// Head color once the snake has run into itself
    pub crashed_color: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background_color: Color::BLACK,
            grid_color: *DEFAULT_GRID_COLOR,
            snake_color: *DEFAULT_SNAKE_COLOR,
            apple_color: *DEFAULT_APPLE_COLOR,
            crashed_color: *DEFAULT_CRASHED_COLOR,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

#[test]
fn test_packed_colors() {
    let palette = Palette::dark();
    assert_eq!(palette.snake_color, Color::from_rgb(0x3d, 0xf4, 0x07));
    assert_eq!(palette.apple_color, Color::from_rgb(0xf4, 0x2b, 0x07));
    assert_eq!(palette.grid_color, Color::from_rgb(0x71, 0x71, 0x71));
}
