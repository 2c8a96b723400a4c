use bytemuck::{Pod, Zeroable};

use crate::scene::{DrawList, Topology};

use super::program::{ShaderProgram, FRAGMENT_ENTRY, VERTEX_ENTRY};
use super::{RenderCtx, RenderTarget};

/// Size of one `u_color` value (`vec4<f32>`).
const COLOR_SIZE: u64 = std::mem::size_of::<[f32; 4]>() as u64;

/// GPU side of the canvas: one pipeline per topology, a shared vertex buffer,
/// and a color buffer addressed with dynamic offsets (one slot per draw).
///
/// Pipelines are created lazily and rebuilt when the surface format changes.
/// Buffers grow to the next power of two and are reused across frames.
pub struct ShapeRenderer {
    program: ShaderProgram,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipelines: Vec<wgpu::RenderPipeline>,

    resolution_bgl: Option<wgpu::BindGroupLayout>,
    color_bgl: Option<wgpu::BindGroupLayout>,

    resolution_ubo: Option<wgpu::Buffer>,
    resolution_bind_group: Option<wgpu::BindGroup>,

    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,

    color_ubo: Option<wgpu::Buffer>,
    color_bind_group: Option<wgpu::BindGroup>,
    color_capacity: usize,
    color_stride: u64,
}

impl ShapeRenderer {
    pub fn new(program: ShaderProgram) -> Self {
        Self {
            program,
            pipeline_format: None,
            pipelines: Vec::new(),
            resolution_bgl: None,
            color_bgl: None,
            resolution_ubo: None,
            resolution_bind_group: None,
            vertex_vbo: None,
            vertex_capacity: 0,
            color_ubo: None,
            color_bind_group: None,
            color_capacity: 0,
            color_stride: COLOR_SIZE,
        }
    }

    #[inline]
    pub fn program(&self) -> &ShaderProgram {
        &self.program
    }

    /// Draws every command of `draw_list` into `target`, in recording order.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &DrawList) {
        if draw_list.is_empty() {
            return;
        }

        self.ensure_pipelines(ctx);
        self.ensure_resolution_binding(ctx);
        self.ensure_vertex_capacity(ctx, draw_list.vertices().len());
        self.ensure_color_capacity(ctx, draw_list.len());

        // Mutating methods must happen before borrowing pipeline/buffers immutably.
        self.write_resolution_uniform(ctx);

        let Some(vertex_vbo) = self.vertex_vbo.as_ref() else { return };
        let Some(color_ubo) = self.color_ubo.as_ref() else { return };
        let Some(resolution_bind_group) = self.resolution_bind_group.as_ref() else { return };
        let Some(color_bind_group) = self.color_bind_group.as_ref() else { return };
        if self.pipelines.len() != Topology::ALL.len() {
            return;
        }

        ctx.queue
            .write_buffer(vertex_vbo, 0, bytemuck::cast_slice(draw_list.vertices()));

        let stride = self.color_stride as usize;
        let mut colors = vec![0u8; stride * draw_list.len()];
        for (i, cmd) in draw_list.cmds().iter().enumerate() {
            let color = ColorUniform { color: cmd.color.to_array() };
            colors[i * stride..i * stride + COLOR_SIZE as usize]
                .copy_from_slice(bytemuck::bytes_of(&color));
        }
        ctx.queue.write_buffer(color_ubo, 0, &colors);

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("shapekit shape pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_bind_group(0, resolution_bind_group, &[]);
        rpass.set_vertex_buffer(0, vertex_vbo.slice(..));

        let mut bound: Option<Topology> = None;
        for (i, cmd) in draw_list.cmds().iter().enumerate() {
            if bound != Some(cmd.topology) {
                rpass.set_pipeline(&self.pipelines[cmd.topology.index()]);
                bound = Some(cmd.topology);
            }
            let offset = (i as u64 * self.color_stride) as u32;
            rpass.set_bind_group(1, color_bind_group, &[offset]);
            rpass.draw(cmd.vertices.clone(), 0..1);
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && !self.pipelines.is_empty() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(self.program.label()),
            source: wgpu::ShaderSource::Wgsl(self.program.wgsl().into()),
        });

        let resolution_bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("shapekit resolution bgl"),
            entries: &[uniform_entry(wgpu::ShaderStages::VERTEX, false, RESOLUTION_SIZE)],
        });

        let color_bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("shapekit color bgl"),
            entries: &[uniform_entry(wgpu::ShaderStages::FRAGMENT, true, COLOR_SIZE)],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shapekit pipeline layout"),
            bind_group_layouts: &[&resolution_bgl, &color_bgl],
            immediate_size: 0,
        });

        let pipelines = Topology::ALL
            .iter()
            .map(|&topology| {
                ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                    label: Some(pipeline_label(topology)),
                    layout: Some(&pipeline_layout),
                    vertex: wgpu::VertexState {
                        module: &shader,
                        entry_point: Some(VERTEX_ENTRY),
                        compilation_options: Default::default(),
                        buffers: &[ShapeVertex::layout()],
                    },
                    fragment: Some(wgpu::FragmentState {
                        module: &shader,
                        entry_point: Some(FRAGMENT_ENTRY),
                        compilation_options: Default::default(),
                        targets: &[Some(wgpu::ColorTargetState {
                            format: ctx.surface_format,
                            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                            write_mask: wgpu::ColorWrites::ALL,
                        })],
                    }),
                    primitive: wgpu::PrimitiveState {
                        topology: to_wgpu_topology(topology),
                        strip_index_format: None,
                        front_face: wgpu::FrontFace::Ccw,
                        cull_mode: None,
                        polygon_mode: wgpu::PolygonMode::Fill,
                        unclipped_depth: false,
                        conservative: false,
                    },
                    depth_stencil: None,
                    multisample: wgpu::MultisampleState::default(),
                    multiview_mask: None,
                    cache: None,
                })
            })
            .collect();

        log::debug!("built shape pipelines for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipelines = pipelines;
        self.resolution_bgl = Some(resolution_bgl);
        self.color_bgl = Some(color_bgl);

        // Bind groups reference the old layouts.
        self.resolution_ubo = None;
        self.resolution_bind_group = None;
        self.color_ubo = None;
        self.color_bind_group = None;
        self.color_capacity = 0;
    }

    fn ensure_resolution_binding(&mut self, ctx: &RenderCtx<'_>) {
        if self.resolution_bind_group.is_some() && self.resolution_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.resolution_bgl.as_ref() else { return };

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("shapekit resolution ubo"),
            size: RESOLUTION_SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shapekit resolution bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.resolution_ubo = Some(ubo);
        self.resolution_bind_group = Some(bind_group);
    }

    fn write_resolution_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.resolution_ubo.as_ref() else { return };
        let u = ResolutionUniform {
            size: ctx.resolution(),
            _pad: [0.0; 2],
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vertex_capacity && self.vertex_vbo.is_some() {
            return;
        }

        let new_cap = required.next_power_of_two().max(1024);
        self.vertex_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("shapekit vertex vbo"),
            size: (new_cap * std::mem::size_of::<ShapeVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }

    fn ensure_color_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.color_capacity && self.color_bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.color_bgl.as_ref() else { return };

        let alignment = ctx.device.limits().min_uniform_buffer_offset_alignment as u64;
        self.color_stride = color_stride(alignment);

        let new_cap = required.next_power_of_two().max(64);
        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("shapekit color ubo"),
            size: new_cap as u64 * self.color_stride,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shapekit color bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &ubo,
                    offset: 0,
                    size: std::num::NonZeroU64::new(COLOR_SIZE),
                }),
            }],
        });

        self.color_ubo = Some(ubo);
        self.color_bind_group = Some(bind_group);
        self.color_capacity = new_cap;
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

const RESOLUTION_SIZE: u64 = std::mem::size_of::<ResolutionUniform>() as u64;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ResolutionUniform {
    size: [f32; 2],
    _pad: [f32; 2], // 16-byte alignment
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ColorUniform {
    color: [f32; 4],
}

/// Layout of one element of `DrawList::vertices`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ShapeVertex {
    position: [f32; 2], // a_position
}

impl ShapeVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

fn uniform_entry(
    visibility: wgpu::ShaderStages,
    has_dynamic_offset: bool,
    size: u64,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset,
            min_binding_size: std::num::NonZeroU64::new(size),
        },
        count: None,
    }
}

/// Distance between consecutive `u_color` slots: one color rounded up to the
/// device's dynamic-offset alignment.
fn color_stride(alignment: u64) -> u64 {
    let alignment = alignment.max(1);
    COLOR_SIZE.div_ceil(alignment) * alignment
}

fn to_wgpu_topology(topology: Topology) -> wgpu::PrimitiveTopology {
    match topology {
        Topology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
        Topology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
    }
}

fn pipeline_label(topology: Topology) -> &'static str {
    match topology {
        Topology::TriangleList => "shapekit triangle-list pipeline",
        Topology::LineStrip => "shapekit line-strip pipeline",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_stride_rounds_up_to_alignment() {
        assert_eq!(color_stride(256), 256);
        assert_eq!(color_stride(16), 16);
        assert_eq!(color_stride(1), 16);
        assert_eq!(color_stride(0), 16);
    }

    #[test]
    fn vertex_layout_matches_draw_list() {
        assert_eq!(std::mem::size_of::<ShapeVertex>(), std::mem::size_of::<[f32; 2]>());
        assert_eq!(ShapeVertex::layout().array_stride, 8);
    }

    #[test]
    fn topology_indices_follow_pipeline_order() {
        for (i, topology) in Topology::ALL.iter().enumerate() {
            assert_eq!(topology.index(), i);
        }
    }
}
