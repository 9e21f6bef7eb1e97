use std::collections::VecDeque;

use crate::basic::{Dir, Point};

pub struct Body {
    /// Head first, never empty
    pub segments: VecDeque<Point>,

    /// Direction the snake is currently going
    pub dir: Dir,

    /// Set by `Snake::grow`, consumed by the next `Snake::advance`
    /// which then keeps the tail instead of dropping it
    pub grow: bool,
}

impl Body {
    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

pub struct Snake {
    pub body: Body,
    /// Distance covered by one step
    pub cell_side: i32,
}

impl Snake {
    /// A single-segment snake
    pub fn new(head: Point, dir: Dir, cell_side: i32) -> Self {
        Self {
            body: Body {
                segments: VecDeque::from(vec![head]),
                dir,
                grow: false,
            },
            cell_side,
        }
    }

    /// The snake every session starts with, at the top-left corner
    /// heading right
    pub fn initial(cell_side: i32) -> Self {
        Self::new(Point::ORIGIN, Dir::R, cell_side)
    }

    pub fn head(&self) -> Point {
        self.body.segments[0]
    }

    pub fn segments(&self) -> &VecDeque<Point> {
        &self.body.segments
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn dir(&self) -> Dir {
        self.body.dir
    }

    /// No reversal check, that is left to whoever decides on the turn
    pub fn set_dir(&mut self, dir: Dir) {
        self.body.dir = dir;
    }

    /// Repeated calls before the next advance still add a single segment
    pub fn grow(&mut self) {
        self.body.grow = true;
    }

    /// Step one cell in the current direction, bounds are not checked
    pub fn advance(&mut self) {
        let new_head = self.head() + self.body.dir.offset(self.cell_side);
        self.body.segments.push_front(new_head);

        if self.body.grow {
            self.body.grow = false;
        } else {
            self.body.segments.pop_back();
        }
    }

    /// Whether the head sits on any other segment
    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.segments.iter().skip(1).any(|&segment| segment == head)
    }

    pub fn occupies(&self, pos: Point) -> bool {
        self.body.segments.contains(&pos)
    }
}
