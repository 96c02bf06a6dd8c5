/// Pixel position on the canvas
#[derive(Copy, Clone, Debug, PartialEq, Add, AddAssign, Sub, SubAssign)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Equal x and y
    pub fn square(side: f32) -> Self {
        Self { x: side, y: side }
    }
}
