use std::ops::Range;

use crate::paint::Color;
use crate::shapes::Primitive;

/// Primitive topology after fan expansion; maps 1:1 onto a GPU pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    TriangleList,
    LineStrip,
}

impl Topology {
    pub const ALL: [Topology; 2] = [Topology::TriangleList, Topology::LineStrip];

    /// Fewest vertices that produce any output.
    #[inline]
    pub fn min_vertices(self) -> usize {
        match self {
            Topology::TriangleList => 3,
            Topology::LineStrip => 2,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Topology::TriangleList => 0,
            Topology::LineStrip => 1,
        }
    }
}

impl From<Primitive> for Topology {
    fn from(p: Primitive) -> Self {
        match p {
            Primitive::Triangles | Primitive::TriangleFan => Topology::TriangleList,
            Primitive::LineStrip => Topology::LineStrip,
        }
    }
}

/// One recorded shape: a contiguous vertex range drawn with a single color.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    pub topology: Topology,
    pub color: Color,
    /// Range into [`DrawList::vertices`](super::DrawList::vertices).
    pub vertices: Range<u32>,
}

impl DrawCmd {
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertices.end - self.vertices.start
    }
}
