//! GPU side of the environment capture: the cube texture, its per-face
//! views, a shared depth buffer, and mip chain generation.

use crate::gpu::{DEPTH_FORMAT, SCENE_COLOR_FORMAT};
use crate::uniforms::TextureHandle;

use super::face::CubeFace;

/// Six-face render target overwritten every frame.
pub struct CubeRenderTarget {
    pub handle: TextureHandle,
    pub texture: wgpu::Texture,
    /// `TextureViewDimension::Cube` view over all mips, for sampling.
    pub cube_view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    /// `[level][layer]` single-face views.
    level_views: Vec<Vec<wgpu::TextureView>>,
    depth_view: wgpu::TextureView,
    mipmaps: MipmapGenerator,
    resolution: u32,
}

impl CubeRenderTarget {
    pub fn new(
        device: &wgpu::Device,
        handle: TextureHandle,
        resolution: u32,
        mip_level_count: u32,
    ) -> Self {
        let resolution = resolution.max(1);
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("environment cubemap"),
            size: wgpu::Extent3d {
                width: resolution,
                height: resolution,
                depth_or_array_layers: 6,
            },
            mip_level_count,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: SCENE_COLOR_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let cube_view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("environment cube view"),
            dimension: Some(wgpu::TextureViewDimension::Cube),
            ..Default::default()
        });

        let level_views: Vec<Vec<wgpu::TextureView>> = (0..mip_level_count)
            .map(|level| {
                CubeFace::ALL
                    .iter()
                    .map(|face| texture.create_view(&face_view_descriptor(level, *face)))
                    .collect()
            })
            .collect();

        let depth = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("environment depth"),
            size: wgpu::Extent3d {
                width: resolution,
                height: resolution,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let depth_view = depth.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("environment sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let mipmaps = MipmapGenerator::new(device, &level_views);

        tracing::debug!(
            "environment cubemap: {resolution}x{resolution}x6, {mip_level_count} mip levels"
        );

        Self {
            handle,
            texture,
            cube_view,
            sampler,
            level_views,
            depth_view,
            mipmaps,
            resolution,
        }
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Level 0 view of `face`, the render attachment for a capture.
    pub fn face_view(&self, face: CubeFace) -> &wgpu::TextureView {
        &self.level_views[0][face.layer() as usize]
    }

    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth_view
    }

    /// Downsample every level from the one above it, for all six faces.
    pub fn generate_mipmaps(&self, encoder: &mut wgpu::CommandEncoder) {
        self.mipmaps.record(encoder, &self.level_views);
    }
}

/// A single face at a single mip level, usable as a render attachment.
fn face_view_descriptor(level: u32, face: CubeFace) -> wgpu::TextureViewDescriptor<'static> {
    wgpu::TextureViewDescriptor {
        label: Some("environment face view"),
        dimension: Some(wgpu::TextureViewDimension::D2),
        base_mip_level: level,
        mip_level_count: Some(1),
        base_array_layer: face.layer(),
        array_layer_count: Some(1),
        ..Default::default()
    }
}

/// Box-filter blit from level `n - 1` into level `n`.
struct MipmapGenerator {
    pipeline: wgpu::RenderPipeline,
    /// `[level - 1][layer]`: bind group sampling the level above.
    bind_groups: Vec<Vec<wgpu::BindGroup>>,
}

impl MipmapGenerator {
    fn new(device: &wgpu::Device, level_views: &[Vec<wgpu::TextureView>]) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mipmap shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/mipmap.wgsl").into()),
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("mipmap sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mipmap bind group layout"),
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
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mipmap pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mipmap pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
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
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let bind_groups = level_views
            .iter()
            .take(level_views.len().saturating_sub(1))
            .map(|sources| {
                sources
                    .iter()
                    .map(|source| {
                        device.create_bind_group(&wgpu::BindGroupDescriptor {
                            label: Some("mipmap bind group"),
                            layout: &bind_group_layout,
                            entries: &[
                                wgpu::BindGroupEntry {
                                    binding: 0,
                                    resource: wgpu::BindingResource::TextureView(source),
                                },
                                wgpu::BindGroupEntry {
                                    binding: 1,
                                    resource: wgpu::BindingResource::Sampler(&sampler),
                                },
                            ],
                        })
                    })
                    .collect()
            })
            .collect();

        Self {
            pipeline,
            bind_groups,
        }
    }

    fn record(&self, encoder: &mut wgpu::CommandEncoder, level_views: &[Vec<wgpu::TextureView>]) {
        for (source_level, groups) in self.bind_groups.iter().enumerate() {
            let targets = &level_views[source_level + 1];
            for (bind_group, target) in groups.iter().zip(targets) {
                let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("mipmap pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: target,
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
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, bind_group, &[]);
                pass.draw(0..3, 0..1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_views_cover_one_layer_and_one_level() {
        for level in 0..3 {
            for face in CubeFace::ALL {
                let desc = face_view_descriptor(level, face);
                assert_eq!(desc.dimension, Some(wgpu::TextureViewDimension::D2));
                assert_eq!(desc.base_mip_level, level);
                assert_eq!(desc.mip_level_count, Some(1));
                assert_eq!(desc.base_array_layer, face.layer());
                assert_eq!(desc.array_layer_count, Some(1));
            }
        }
    }
}
