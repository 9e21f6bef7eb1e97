use hsl::HSL;

use crate::color::to_color::ToColor;
use crate::color::Color;

macro_rules! gray {
    ($lightness:expr) => {
        Color(ggez::graphics::Color {
            r: $lightness,
            g: $lightness,
            b: $lightness,
            a: 1.,
        })
    };
}

lazy_static! {
    static ref DEFAULT_HEAD_COLOR: Color = HSL { h: 120., s: 0.85, l: 0.6 }.to_color();
    static ref DEFAULT_BODY_COLOR: Color = HSL { h: 120., s: 1., l: 0.4 }.to_color();
    static ref DEFAULT_SCORE_COLOR: Color = HSL { h: 60., s: 1., l: 0.5 }.to_color();
}

pub struct Palette {
    pub line_thickness: f32,

    pub background_color: Color,
    pub grid_color: Color,

    pub snake_head_color: Color,
    pub snake_body_color: Color,
    pub food_color: Color,

    pub score_color: Color,
    pub overlay_color: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            line_thickness: 1.,

            background_color: Color::BLACK,
            grid_color: gray!(0.15),

            snake_head_color: *DEFAULT_HEAD_COLOR,
            snake_body_color: *DEFAULT_BODY_COLOR,
            food_color: Color::RED,

            score_color: *DEFAULT_SCORE_COLOR,
            overlay_color: Color::WHITE,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}
