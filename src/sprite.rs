/// Axis-aligned rectangles and group overlap queries.
///
/// Every entity exposes a [`Rect`]; collision resolution asks "which members
/// of this group overlap that sprite" through [`colliding`].  Queries always
/// look at the group as it is right now, nothing is cached between calls.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// Rectangle of size `w`×`h` centred on `(cx, cy)`.
    pub fn from_center(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Rect::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    /// Rectangle of size `w`×`h` whose bottom edge is centred on `(cx, bottom)`.
    pub fn from_midbottom(cx: f32, bottom: f32, w: f32, h: f32) -> Self {
        Rect::new(cx - w / 2.0, bottom - h, w, h)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Interiors intersect.  Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Anything with a position on screen.
pub trait Sprite {
    fn rect(&self) -> Rect;
}

impl Sprite for Rect {
    fn rect(&self) -> Rect {
        *self
    }
}

/// Indices of the `group` members overlapping `sprite`, in group order.
pub fn colliding<S: Sprite + ?Sized, G: Sprite>(sprite: &S, group: &[G]) -> Vec<usize> {
    let rect = sprite.rect();
    group
        .iter()
        .enumerate()
        .filter(|(_, member)| member.rect().overlaps(&rect))
        .map(|(i, _)| i)
        .collect()
}

pub fn any_colliding<S: Sprite + ?Sized, G: Sprite>(sprite: &S, group: &[G]) -> bool {
    let rect = sprite.rect();
    group.iter().any(|member| member.rect().overlaps(&rect))
}

/// Drop every element whose index is listed in `hits` (indices ascending).
pub fn remove_indices<T>(group: &mut Vec<T>, hits: &[usize]) {
    let mut pending = hits.iter().copied().peekable();
    let mut index = 0;
    group.retain(|_| {
        while pending.next_if(|&hit| hit < index).is_some() {}
        let keep = pending.next_if_eq(&index).is_none();
        index += 1;
        keep
    });
}
