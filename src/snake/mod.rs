use crate::basic::{Dir, GridDim, GridPoint, Wrap};

/// The segments of a snake, head first. The buffer is allocated once
/// with room for every cell on the board and only `len` of it is live.
pub struct Body {
    segments: Box<[GridPoint]>,
    len: usize,
}

impl Body {
    pub fn new(capacity: usize, head: GridPoint) -> Self {
        assert!(capacity > 0, "snake needs room for its head");
        Self {
            segments: vec![head; capacity].into_boxed_slice(),
            len: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.segments.len()
    }

    pub fn head(&self) -> GridPoint {
        self.segments[0]
    }

    /// Live segments only
    pub fn segments(&self) -> &[GridPoint] {
        &self.segments[..self.len]
    }
}

pub struct Snake {
    pub body: Body,
}

impl Snake {
    pub fn new(board_dim: GridDim, head: GridPoint) -> Self {
        Self { body: Body::new(board_dim.area(), head) }
    }

    pub fn head(&self) -> GridPoint {
        self.body.head()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn segments(&self) -> &[GridPoint] {
        self.body.segments()
    }

    /// Every segment takes the place of the one in front of it,
    /// then the head steps once in `dir`
    pub fn advance(&mut self, dir: Dir, board_dim: GridDim, wrap: Wrap) {
        let Body { segments, len } = &mut self.body;
        segments.copy_within(0..*len - 1, 1);
        segments[0] = segments[0].wrapping_translate(dir, board_dim, wrap);
    }

    /// Duplicate the tail in place, the copy separates on the next advance.
    /// Returns false if the buffer is already full.
    pub fn grow(&mut self) -> bool {
        let Body { segments, len } = &mut self.body;
        if *len == segments.len() {
            return false;
        }
        segments[*len] = segments[*len - 1];
        *len += 1;
        true
    }

    pub fn crashed_into_self(&self) -> bool {
        let head = self.head();
        self.segments()[1..].contains(&head)
    }

    pub fn occupies(&self, pos: GridPoint) -> bool {
        self.segments().contains(&pos)
    }
}
