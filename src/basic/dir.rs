use std::ops::Neg;

use crate::basic::Point;
use Dir::*;

// defined in clockwise order starting at U
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U,
    R,
    D,
    L,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            U => D,
            R => L,
            D => U,
            L => R,
        }
    }
}

impl Dir {
    // clockwise order starting from U
    #[cfg(test)]
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    /// True when turning from `self` to `other` would be a 180° turn
    pub fn is_opposite(self, other: Self) -> bool {
        -self == other
    }

    /// One cell worth of movement in this direction, screen
    /// coordinates (y grows downwards)
    pub fn offset(self, cell_side: i32) -> Point {
        match self {
            U => Point::new(0, -cell_side),
            R => Point::new(cell_side, 0),
            D => Point::new(0, cell_side),
            L => Point::new(-cell_side, 0),
        }
    }
}

#[test]
fn test_dir_negation() {
    for (dir, opposite) in [(U, D), (R, L), (D, U), (L, R)] {
        assert_eq!(-dir, opposite);
        assert_eq!(-(-dir), dir);
    }
}

#[test]
fn test_is_opposite() {
    for a in Dir::iter() {
        for b in Dir::iter() {
            assert_eq!(
                a.is_opposite(b),
                a.offset(20) == -b.offset(20),
                "{:?} => {:?}",
                a,
                b
            );
        }
    }

    assert!(R.is_opposite(L));
    assert!(!R.is_opposite(R));
    assert!(!R.is_opposite(U));
}

#[test]
fn test_offset() {
    assert_eq!(U.offset(20), Point::new(0, -20));
    assert_eq!(R.offset(20), Point::new(20, 0));
    assert_eq!(D.offset(20), Point::new(0, 20));
    assert_eq!(L.offset(20), Point::new(-20, 0));
}
