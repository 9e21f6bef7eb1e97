use ggez::mint::Point2;

/// A pixel position on the board, always kept on whole pixels so that
/// positions can be compared exactly
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Add, AddAssign, Sub, SubAssign, Neg, Mul)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Point2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2 { x: x as f32, y: y as f32 }
    }
}

#[test]
fn test_point_math() {
    let a = Point::new(20, 0);
    let b = Point::new(-20, 40);

    assert_eq!(a + b, Point::new(0, 40));
    assert_eq!(a - b, Point::new(40, -40));
    assert_eq!(-a, Point::new(-20, 0));
    assert_eq!(b * 2, Point::new(-40, 80));

    let mut c = Point::ORIGIN;
    c += a;
    c += a;
    assert_eq!(c, Point::new(40, 0));
}
