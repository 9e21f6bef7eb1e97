use ggez::graphics;

pub mod to_color;

#[derive(Deref, DerefMut, Copy, Clone, Debug, PartialEq)]
pub struct Color(pub graphics::Color);

impl Color {
    pub const WHITE: Self = Self(graphics::Color::WHITE);
    pub const BLACK: Self = Self(graphics::Color::BLACK);
    pub const RED: Self = Self(graphics::Color::RED);

    /// Same color with alpha scaled by `factor`, used for fades
    #[must_use]
    pub fn faded(self, factor: f32) -> Self {
        let mut color = self;
        color.a = self.a * factor.clamp(0., 1.);
        color
    }
}

impl From<Color> for graphics::Color {
    fn from(Color(color): Color) -> Self {
        color
    }
}

#[test]
fn test_faded() {
    let half = Color::WHITE.faded(0.5);
    assert!((half.a - 0.5).abs() < f32::EPSILON);
    assert!((half.r - 1.).abs() < f32::EPSILON);

    assert_eq!(Color::WHITE.faded(2.), Color::WHITE);
    assert!(Color::WHITE.faded(-1.).a.abs() < f32::EPSILON);
}
