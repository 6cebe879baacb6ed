//! Full-screen shader passes: the dot-screen effect and the plain copy.

use std::collections::HashMap;

use glint_common::SceneError;
use glint_config::schema::PostConfig;

use crate::material::{DotScreenBlock, ShaderProgram, COPY, DOT_SCREEN};
use crate::uniforms::{UniformSet, UniformValue};

use super::chain::{Pass, PassContext, PassKind, PassTarget};

/// Setup-time parameters of the dot-screen effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotScreenParams {
    pub center: [f32; 2],
    pub angle: f32,
    pub scale: f32,
    /// Pattern period reference size in pixels.
    pub t_size: [f32; 2],
}

impl Default for DotScreenParams {
    fn default() -> Self {
        Self {
            center: [0.5, 0.5],
            angle: 1.57,
            scale: 4.0,
            t_size: [256.0, 256.0],
        }
    }
}

impl DotScreenParams {
    pub fn from_config(config: &PostConfig) -> Self {
        Self {
            center: config.dot_screen_center,
            angle: config.dot_screen_angle,
            scale: config.dot_screen_scale,
            t_size: config.dot_screen_size,
        }
    }

    /// The program's uniforms, checked against its schema.
    pub fn uniforms(&self) -> Result<UniformSet, SceneError> {
        UniformSet::new(DOT_SCREEN.schema, [("scale", UniformValue::Float(self.scale))])
    }

    pub fn block(&self) -> Result<DotScreenBlock, SceneError> {
        let uniforms = self.uniforms()?;
        Ok(DotScreenBlock {
            center: self.center,
            t_size: self.t_size,
            angle: self.angle,
            scale: uniforms.float("scale")?,
            _padding: [0.0; 2],
        })
    }
}

/// Samples its input through a program and writes the output target.
///
/// Pipelines are built per output format on first use, since the last
/// pass writes the surface and the others write sRGB buffers.
pub struct ShaderPass {
    program: &'static ShaderProgram,
    kind: PassKind,
    shader: wgpu::ShaderModule,
    bind_group_layout: wgpu::BindGroupLayout,
    pipeline_layout: wgpu::PipelineLayout,
    pipelines: HashMap<wgpu::TextureFormat, wgpu::RenderPipeline>,
    sampler: wgpu::Sampler,
    uniform_buffer: wgpu::Buffer,
}

impl ShaderPass {
    pub fn new(device: &wgpu::Device, program: &'static ShaderProgram, uniforms: &[u8]) -> Self {
        use wgpu::util::DeviceExt;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(program.name),
            source: wgpu::ShaderSource::Wgsl(program.source.into()),
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("post sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        // Uniform buffers must be non-empty and 16-byte sized
        let mut contents = uniforms.to_vec();
        contents.resize(contents.len().max(16).next_multiple_of(16), 0);
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("post pass uniforms"),
            contents: &contents,
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post pass bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("post pass pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        Self {
            program,
            kind: PassKind::Effect,
            shader,
            bind_group_layout,
            pipeline_layout,
            pipelines: HashMap::new(),
            sampler,
            uniform_buffer,
        }
    }

    /// The halftone effect with `scale` and friends fixed at setup.
    pub fn dot_screen(device: &wgpu::Device, params: &DotScreenParams) -> Result<Self, SceneError> {
        let block = params.block()?;
        Ok(Self::new(device, &DOT_SCREEN, bytemuck::bytes_of(&block)))
    }

    pub fn copy(device: &wgpu::Device) -> Self {
        Self::new(device, &COPY, &[])
    }

    fn pipeline(
        &mut self,
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
    ) -> &wgpu::RenderPipeline {
        let program = self.program;
        let shader = &self.shader;
        let pipeline_layout = &self.pipeline_layout;
        self.pipelines.entry(format).or_insert_with(|| {
            tracing::debug!("building {} pipeline for {format:?}", program.name);
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(program.name),
                layout: Some(pipeline_layout),
                vertex: wgpu::VertexState {
                    module: shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
        })
    }
}

impl Pass for ShaderPass {
    fn kind(&self) -> PassKind {
        self.kind
    }

    fn label(&self) -> &str {
        self.program.name
    }

    fn set_size(&mut self, _device: &wgpu::Device, _width: u32, _height: u32) {}

    fn render(
        &mut self,
        ctx: &mut PassContext<'_>,
        input: Option<&wgpu::TextureView>,
        output: PassTarget<'_>,
    ) {
        let Some(input) = input else {
            tracing::warn!("{} pass has no input, skipping", self.program.name);
            return;
        };

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("post pass bind group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(input),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: self.uniform_buffer.as_entire_binding(),
                },
            ],
        });

        let label = self.program.name;
        let pipeline = self.pipeline(ctx.device, output.format);
        let mut pass = ctx.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        pass.set_pipeline(pipeline);
        pass.set_bind_group(0, &bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_config_defaults() {
        assert_eq!(
            DotScreenParams::from_config(&PostConfig::default()),
            DotScreenParams::default()
        );
    }

    #[test]
    fn block_carries_scale() {
        let params = DotScreenParams {
            scale: 4.0,
            ..Default::default()
        };
        let block = params.block().unwrap();
        assert_eq!(block.scale, 4.0);
        assert_eq!(block.center, [0.5, 0.5]);
        assert_eq!(block.t_size, [256.0, 256.0]);
        assert!((block.angle - 1.57).abs() < 1e-6);
    }

    #[test]
    fn dot_screen_uniforms_satisfy_schema() {
        let set = DotScreenParams::default().uniforms().unwrap();
        assert_eq!(set.float("scale").unwrap(), 4.0);
    }
}
