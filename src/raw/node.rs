use super::handle::Handle;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Side of a parent a child sits on.
///
/// Rotations and insert fix-up are written once over a direction and
/// mirrored through [`Direction::opposite`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// One stored key together with its color and structural links.
///
/// Child links own their subtrees; the parent link is a non-owning
/// back-reference, absent only at the root.
#[derive(Clone)]
pub(crate) struct RbNode<T> {
    key: T,
    color: Color,
    parent: Option<Handle>,
    children: [Option<Handle>; 2],
}

impl<T> RbNode<T> {
    pub(crate) fn new(key: T, color: Color, parent: Option<Handle>) -> Self {
        Self { key, color, parent, children: [None, None] }
    }

    #[inline]
    pub(crate) fn key(&self) -> &T {
        &self.key
    }

    #[inline]
    pub(crate) fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<Handle> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) fn child(&self, dir: Direction) -> Option<Handle> {
        self.children[dir.index()]
    }

    pub(crate) fn set_child(&mut self, dir: Direction, child: Option<Handle>) {
        self.children[dir.index()] = child;
    }
}
