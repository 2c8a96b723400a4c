use crate::shapes::{fan_to_list, Primitive, Shape};

use super::{DrawCmd, Topology};

/// Recorded draw stream for a frame.
///
/// All shapes share one vertex array; each command points at its own range.
/// Clearing keeps the allocations for the next frame.
#[derive(Debug, Default)]
pub struct DrawList {
    vertices: Vec<[f32; 2]>,
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.cmds.clear();
    }

    #[inline]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn vertices(&self) -> &[[f32; 2]] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Resolves `shape` and appends it to the stream.
    ///
    /// Returns `false` when the shape produces nothing drawable (too few
    /// vertices for its primitive); such shapes are skipped.
    pub fn push_shape<S: Shape + ?Sized>(&mut self, shape: &S) -> bool {
        let primitive = shape.primitive();
        let mut flat = shape.vertices();

        debug_assert!(flat.len() % 2 == 0, "shape produced an odd coordinate count");
        if flat.len() % 2 != 0 {
            log::warn!("dropping trailing coordinate of an odd-length vertex sequence");
            flat.pop();
        }

        if primitive == Primitive::TriangleFan {
            flat = fan_to_list(&flat);
        }

        let topology = Topology::from(primitive);
        let count = flat.len() / 2;
        if count < topology.min_vertices() {
            log::trace!("skipping {primitive:?} with {count} vertices");
            return false;
        }

        let start = self.vertices.len() as u32;
        self.vertices
            .extend(flat.chunks_exact(2).map(|xy| [xy[0], xy[1]]));
        let end = self.vertices.len() as u32;

        self.cmds.push(DrawCmd {
            topology,
            color: shape.color(),
            vertices: start..end,
        });
        true
    }
}
