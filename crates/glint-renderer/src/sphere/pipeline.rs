//! wgpu pipelines and per-node buffers for drawing the scene's meshes.
//!
//! Bind group 0 is a camera block; one slot per camera (main camera plus
//! the six capture faces) so every render in a frame keeps its own
//! matrices. Bind group 1 is the node's material block, plus the
//! environment cubemap for the reflective program.

use std::collections::HashMap;

use glint_common::SceneError;

use crate::capture::{CubeFace, CubeRenderTarget};
use crate::gpu::{DEPTH_FORMAT, SCENE_COLOR_FORMAT};
use crate::material::{
    BigSphereBlock, CameraBlock, ShaderProgram, SmallSphereBlock, BIG_SPHERE, SMALL_SPHERE,
};
use crate::scene::{NodeId, Scene};
use crate::sphere::GeometryId;
use crate::uniforms::TextureHandle;

use super::types::SphereVertex;

/// Which camera block a render reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraSlot {
    Main,
    Face(CubeFace),
}

impl CameraSlot {
    pub const COUNT: usize = 7;

    pub fn index(&self) -> usize {
        match self {
            CameraSlot::Main => 0,
            CameraSlot::Face(face) => 1 + face.layer() as usize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MeshProgram {
    Big,
    Small,
}

impl MeshProgram {
    fn of(program: &ShaderProgram) -> Option<Self> {
        if *program == BIG_SPHERE {
            Some(MeshProgram::Big)
        } else if *program == SMALL_SPHERE {
            Some(MeshProgram::Small)
        } else {
            None
        }
    }
}

struct GeometryBuffers {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

struct GpuMesh {
    program: MeshProgram,
    geometry: GeometryId,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    /// Cleared when the material points at a cubemap this renderer does not own.
    drawable: bool,
}

struct CameraBinding {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Draws the visible meshes of a [`Scene`] into an sRGB color target.
pub struct SceneRenderer {
    big_pipeline: wgpu::RenderPipeline,
    small_pipeline: wgpu::RenderPipeline,
    cameras: Vec<CameraBinding>,
    geometries: HashMap<GeometryId, GeometryBuffers>,
    meshes: HashMap<NodeId, GpuMesh>,
    environment: TextureHandle,
    pub clear_color: wgpu::Color,
}

impl SceneRenderer {
    /// Upload every mesh of `scene`. The reflective material samples
    /// `environment`.
    pub fn new(device: &wgpu::Device, scene: &Scene, environment: &CubeRenderTarget) -> Self {
        use wgpu::util::DeviceExt;

        let uniform_entry = |binding: u32, size: usize| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: std::num::NonZeroU64::new(size as u64),
            },
            count: None,
        };

        let camera_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("camera bind group layout"),
            entries: &[uniform_entry(0, std::mem::size_of::<CameraBlock>())],
        });

        let big_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("big sphere bind group layout"),
            entries: &[uniform_entry(0, std::mem::size_of::<BigSphereBlock>())],
        });

        let small_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("small sphere bind group layout"),
            entries: &[
                uniform_entry(0, std::mem::size_of::<SmallSphereBlock>()),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::Cube,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let big_pipeline = create_mesh_pipeline(device, &BIG_SPHERE, &camera_layout, &big_layout);
        let small_pipeline =
            create_mesh_pipeline(device, &SMALL_SPHERE, &camera_layout, &small_layout);

        let cameras = (0..CameraSlot::COUNT)
            .map(|_| {
                let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("camera uniforms"),
                    size: std::mem::size_of::<CameraBlock>() as u64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("camera bind group"),
                    layout: &camera_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                });
                CameraBinding { buffer, bind_group }
            })
            .collect();

        let mut geometries = HashMap::new();
        let mut meshes = HashMap::new();
        for mesh in scene.meshes() {
            let Some(geometry) = scene.geometry(mesh.geometry) else {
                tracing::warn!("mesh {:?} has no geometry", mesh.node.name);
                continue;
            };
            let Some(material) = scene.material(mesh.material) else {
                tracing::warn!("mesh {:?} has no material", mesh.node.name);
                continue;
            };
            let Some(program) = MeshProgram::of(material.program()) else {
                tracing::warn!(
                    "mesh {:?} uses unsupported program {}",
                    mesh.node.name,
                    material.program().name
                );
                continue;
            };

            geometries.entry(mesh.geometry).or_insert_with(|| GeometryBuffers {
                vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("sphere vertex buffer"),
                    contents: bytemuck::cast_slice(&geometry.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                index_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("sphere index buffer"),
                    contents: bytemuck::cast_slice(&geometry.indices),
                    usage: wgpu::BufferUsages::INDEX,
                }),
                index_count: geometry.indices.len() as u32,
            });

            let block_size = match program {
                MeshProgram::Big => std::mem::size_of::<BigSphereBlock>(),
                MeshProgram::Small => std::mem::size_of::<SmallSphereBlock>(),
            };
            let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("material uniforms"),
                size: block_size as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });

            let bind_group = match program {
                MeshProgram::Big => device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("big sphere bind group"),
                    layout: &big_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                }),
                MeshProgram::Small => device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("small sphere bind group"),
                    layout: &small_layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: uniform_buffer.as_entire_binding(),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::TextureView(&environment.cube_view),
                        },
                        wgpu::BindGroupEntry {
                            binding: 2,
                            resource: wgpu::BindingResource::Sampler(&environment.sampler),
                        },
                    ],
                }),
            };

            meshes.insert(
                mesh.id,
                GpuMesh {
                    program,
                    geometry: mesh.geometry,
                    uniform_buffer,
                    bind_group,
                    drawable: true,
                },
            );
        }

        tracing::debug!(
            "scene renderer: {} meshes, {} geometries",
            meshes.len(),
            geometries.len()
        );

        Self {
            big_pipeline,
            small_pipeline,
            cameras,
            geometries,
            meshes,
            environment: environment.handle,
            clear_color: wgpu::Color::BLACK,
        }
    }

    /// Write every node's transform and material uniforms for this frame.
    pub fn upload(&mut self, queue: &wgpu::Queue, scene: &Scene) -> Result<(), SceneError> {
        let light = scene.light();
        for (id, mesh) in &mut self.meshes {
            let node = scene.node(*id)?;
            let uniforms = scene.material_of(*id)?.uniforms();
            let model = node.model_matrix();
            match mesh.program {
                MeshProgram::Big => {
                    let block = BigSphereBlock::pack(model, uniforms, &light)?;
                    queue.write_buffer(&mesh.uniform_buffer, 0, bytemuck::bytes_of(&block));
                }
                MeshProgram::Small => {
                    let block = SmallSphereBlock::pack(model, uniforms)?;
                    queue.write_buffer(&mesh.uniform_buffer, 0, bytemuck::bytes_of(&block));
                    let bound = uniforms.cubemap("tCube")? == self.environment;
                    if mesh.drawable && !bound {
                        tracing::warn!("{:?} samples a cubemap with no GPU target", node.name);
                    }
                    mesh.drawable = bound;
                }
            }
        }
        Ok(())
    }

    pub fn write_camera(&self, queue: &wgpu::Queue, slot: CameraSlot, block: &CameraBlock) {
        queue.write_buffer(
            &self.cameras[slot.index()].buffer,
            0,
            bytemuck::bytes_of(block),
        );
    }

    /// Record a pass drawing every visible mesh, clearing color and depth.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        scene: &Scene,
        slot: CameraSlot,
        color: &wgpu::TextureView,
        depth: &wgpu::TextureView,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_bind_group(0, &self.cameras[slot.index()].bind_group, &[]);
        for visible in scene.visible_meshes() {
            let Some(mesh) = self.meshes.get(&visible.id) else {
                continue;
            };
            let Some(geometry) = self.geometries.get(&mesh.geometry) else {
                continue;
            };
            if !mesh.drawable {
                continue;
            }
            pass.set_pipeline(match mesh.program {
                MeshProgram::Big => &self.big_pipeline,
                MeshProgram::Small => &self.small_pipeline,
            });
            pass.set_bind_group(1, &mesh.bind_group, &[]);
            pass.set_vertex_buffer(0, geometry.vertex_buffer.slice(..));
            pass.set_index_buffer(geometry.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..geometry.index_count, 0, 0..1);
        }
    }
}

fn create_mesh_pipeline(
    device: &wgpu::Device,
    program: &ShaderProgram,
    camera_layout: &wgpu::BindGroupLayout,
    material_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(program.name),
        source: wgpu::ShaderSource::Wgsl(program.source.into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(program.name),
        bind_group_layouts: &[camera_layout, material_layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(program.name),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[SphereVertex::LAYOUT],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: SCENE_COLOR_FORMAT,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: program.cull_mode(),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
