//! Ordered post-processing passes and the buffer plan that links them.
//!
//! Pass 0 renders the scene; each later pass samples its predecessor's
//! output. Intermediate results alternate between two offscreen buffers
//! and the final step writes the surface.

use glint_common::SceneError;

use crate::gpu::SCENE_COLOR_FORMAT;
use crate::scene::Scene;
use crate::sphere::SceneRenderer;

use super::shader_pass::ShaderPass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// Renders the scene graph; reads no input.
    Scene,
    /// Full-screen effect over the previous output.
    Effect,
}

/// Everything a pass may touch while recording.
pub struct PassContext<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub scene: &'a Scene,
    pub renderer: &'a SceneRenderer,
}

#[derive(Clone, Copy)]
pub struct PassTarget<'a> {
    pub view: &'a wgpu::TextureView,
    pub format: wgpu::TextureFormat,
}

pub trait Pass {
    fn kind(&self) -> PassKind;

    fn label(&self) -> &str;

    /// Called with the drawing buffer size before the next render.
    fn set_size(&mut self, device: &wgpu::Device, width: u32, height: u32);

    fn render(
        &mut self,
        ctx: &mut PassContext<'_>,
        input: Option<&wgpu::TextureView>,
        output: PassTarget<'_>,
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingPong {
    A,
    B,
}

impl PingPong {
    fn index(self) -> usize {
        match self {
            PingPong::A => 0,
            PingPong::B => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPass {
    /// Index into the chain's passes.
    User(usize),
    /// Blit appended when the last pass renders the scene.
    Copy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutput {
    Buffer(PingPong),
    Surface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanStep {
    pub pass: StepPass,
    pub input: Option<PingPong>,
    pub output: StepOutput,
}

/// Work out which buffer each pass reads and writes.
pub fn plan(kinds: &[PassKind]) -> Result<Vec<PlanStep>, SceneError> {
    match kinds.first() {
        None => return Err(SceneError::EmptyChain),
        Some(PassKind::Effect) => {
            return Err(SceneError::ChainOrder(
                "the first pass must render the scene".into(),
            ))
        }
        Some(PassKind::Scene) => {}
    }

    let needs_copy = kinds.last() == Some(&PassKind::Scene);
    let total = kinds.len() + usize::from(needs_copy);

    let mut steps = Vec::with_capacity(total);
    let mut last_written: Option<PingPong> = None;
    for i in 0..total {
        let pass = if i < kinds.len() {
            StepPass::User(i)
        } else {
            StepPass::Copy
        };
        let output = if i + 1 == total {
            StepOutput::Surface
        } else {
            let next = match last_written {
                Some(PingPong::A) => PingPong::B,
                None | Some(PingPong::B) => PingPong::A,
            };
            StepOutput::Buffer(next)
        };
        steps.push(PlanStep {
            pass,
            input: last_written,
            output,
        });
        if let StepOutput::Buffer(buffer) = output {
            last_written = Some(buffer);
        }
    }
    Ok(steps)
}

/// Ping-pong buffer extent for a drawing buffer size; never zero.
fn buffer_extent(width: u32, height: u32) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: width.max(1),
        height: height.max(1),
        depth_or_array_layers: 1,
    }
}

struct RenderBuffer {
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl RenderBuffer {
    fn new(device: &wgpu::Device, width: u32, height: u32, label: &str) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: buffer_extent(width, height),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: SCENE_COLOR_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            _texture: texture,
            view,
        }
    }
}

/// The post-processing chain: passes in insertion order plus the two
/// ping-pong buffers they share.
#[derive(Default)]
pub struct PostChain {
    passes: Vec<Box<dyn Pass>>,
    buffers: Option<[RenderBuffer; 2]>,
    copy: Option<ShaderPass>,
    size: Option<(u32, u32)>,
}

impl PostChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pass. The first pass must be a scene pass.
    pub fn add_pass(&mut self, pass: Box<dyn Pass>) -> Result<(), SceneError> {
        if self.passes.is_empty() && pass.kind() != PassKind::Scene {
            return Err(SceneError::ChainOrder(format!(
                "'{}' cannot be the first pass; the chain must start with a scene render",
                pass.label()
            )));
        }
        tracing::debug!("post chain: added pass '{}'", pass.label());
        self.passes.push(pass);
        Ok(())
    }

    pub fn kinds(&self) -> Vec<PassKind> {
        self.passes.iter().map(|p| p.kind()).collect()
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    /// Reallocate both buffers and resize every pass.
    pub fn set_size(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let (width, height) = self.apply_size(width, height, |pass, w, h| {
            pass.set_size(device, w, h);
        });
        self.buffers = Some([
            RenderBuffer::new(device, width, height, "post buffer a"),
            RenderBuffer::new(device, width, height, "post buffer b"),
        ]);
        tracing::debug!("post chain resized to {width}x{height}");
    }

    /// Clamp the size, hand it to every pass (the copy blit included) and
    /// record it as the size the buffers are allocated at.
    fn apply_size(
        &mut self,
        width: u32,
        height: u32,
        mut resize: impl FnMut(&mut dyn Pass, u32, u32),
    ) -> (u32, u32) {
        let (width, height) = (width.max(1), height.max(1));
        for pass in &mut self.passes {
            resize(pass.as_mut(), width, height);
        }
        if let Some(copy) = &mut self.copy {
            resize(copy, width, height);
        }
        self.size = Some((width, height));
        (width, height)
    }

    /// Record every pass, ending on `surface`.
    pub fn render(
        &mut self,
        ctx: &mut PassContext<'_>,
        surface: PassTarget<'_>,
    ) -> Result<(), SceneError> {
        let steps = plan(&self.kinds())?;
        let buffers = self.buffers.as_ref().ok_or_else(|| {
            SceneError::ChainOrder("post chain rendered before set_size".into())
        })?;
        let copy = self.copy.get_or_insert_with(|| ShaderPass::copy(ctx.device));

        for step in steps {
            let input = step.input.map(|b| &buffers[b.index()].view);
            let output = match step.output {
                StepOutput::Buffer(b) => PassTarget {
                    view: &buffers[b.index()].view,
                    format: SCENE_COLOR_FORMAT,
                },
                StepOutput::Surface => surface,
            };
            match step.pass {
                StepPass::User(i) => self.passes[i].render(ctx, input, output),
                StepPass::Copy => copy.render(ctx, input, output),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(pass: StepPass, input: Option<PingPong>, output: StepOutput) -> PlanStep {
        PlanStep {
            pass,
            input,
            output,
        }
    }

    #[test]
    fn empty_chain_has_no_plan() {
        assert_eq!(plan(&[]), Err(SceneError::EmptyChain));
    }

    #[test]
    fn effect_first_is_rejected() {
        assert!(matches!(
            plan(&[PassKind::Effect, PassKind::Scene]),
            Err(SceneError::ChainOrder(_))
        ));
    }

    #[test]
    fn scene_then_effect_writes_surface_from_scene_output() {
        let steps = plan(&[PassKind::Scene, PassKind::Effect]).unwrap();
        assert_eq!(
            steps,
            [
                step(StepPass::User(0), None, StepOutput::Buffer(PingPong::A)),
                step(StepPass::User(1), Some(PingPong::A), StepOutput::Surface),
            ]
        );
    }

    #[test]
    fn lone_scene_pass_is_copied_to_surface() {
        let steps = plan(&[PassKind::Scene]).unwrap();
        assert_eq!(
            steps,
            [
                step(StepPass::User(0), None, StepOutput::Buffer(PingPong::A)),
                step(StepPass::Copy, Some(PingPong::A), StepOutput::Surface),
            ]
        );
    }

    #[test]
    fn intermediate_outputs_alternate_buffers() {
        let steps = plan(&[
            PassKind::Scene,
            PassKind::Effect,
            PassKind::Effect,
            PassKind::Effect,
        ])
        .unwrap();
        let outputs: Vec<StepOutput> = steps.iter().map(|s| s.output).collect();
        assert_eq!(
            outputs,
            [
                StepOutput::Buffer(PingPong::A),
                StepOutput::Buffer(PingPong::B),
                StepOutput::Buffer(PingPong::A),
                StepOutput::Surface,
            ]
        );
        // Every pass after the first reads what its predecessor wrote
        for pair in steps.windows(2) {
            assert_eq!(StepOutput::Buffer(pair[1].input.unwrap()), pair[0].output);
        }
    }

    #[test]
    fn only_the_last_step_writes_the_surface() {
        for n in 1..6 {
            let mut kinds = vec![PassKind::Scene];
            kinds.extend(std::iter::repeat(PassKind::Effect).take(n));
            let steps = plan(&kinds).unwrap();
            let surfaces = steps
                .iter()
                .filter(|s| s.output == StepOutput::Surface)
                .count();
            assert_eq!(surfaces, 1);
            assert_eq!(steps.last().unwrap().output, StepOutput::Surface);
            assert_eq!(steps[0].input, None);
        }
    }

    struct FakePass(PassKind, &'static str);

    impl FakePass {
        fn boxed(kind: PassKind, label: &'static str) -> Box<Self> {
            Box::new(Self(kind, label))
        }
    }

    impl Pass for FakePass {
        fn kind(&self) -> PassKind {
            self.0
        }

        fn label(&self) -> &str {
            self.1
        }

        fn set_size(&mut self, _device: &wgpu::Device, _width: u32, _height: u32) {}

        fn render(
            &mut self,
            _ctx: &mut PassContext<'_>,
            _input: Option<&wgpu::TextureView>,
            _output: PassTarget<'_>,
        ) {
        }
    }

    #[test]
    fn add_pass_enforces_scene_first() {
        let mut chain = PostChain::new();
        let err = chain
            .add_pass(FakePass::boxed(PassKind::Effect, "dots"))
            .unwrap_err();
        assert!(err.to_string().contains("dots"));
        assert!(chain.is_empty());

        chain
            .add_pass(FakePass::boxed(PassKind::Scene, "scene"))
            .unwrap();
        chain
            .add_pass(FakePass::boxed(PassKind::Effect, "dots"))
            .unwrap();
        assert_eq!(chain.kinds(), [PassKind::Scene, PassKind::Effect]);
        assert_eq!(chain.size(), None);
    }

    #[test]
    fn resize_reaches_every_pass() {
        let mut chain = PostChain::new();
        chain
            .add_pass(FakePass::boxed(PassKind::Scene, "scene"))
            .unwrap();
        chain
            .add_pass(FakePass::boxed(PassKind::Effect, "dots"))
            .unwrap();

        let mut seen = Vec::new();
        let applied = chain.apply_size(1280, 720, |pass, w, h| {
            seen.push((pass.label().to_string(), w, h));
        });
        assert_eq!(applied, (1280, 720));
        assert_eq!(chain.size(), Some((1280, 720)));
        assert_eq!(
            seen,
            [("scene".to_string(), 1280, 720), ("dots".to_string(), 1280, 720)]
        );

        seen.clear();
        chain.apply_size(640, 480, |pass, w, h| {
            seen.push((pass.label().to_string(), w, h));
        });
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|(_, w, h)| (*w, *h) == (640, 480)));
        assert_eq!(chain.size(), Some((640, 480)));
    }

    #[test]
    fn zero_size_is_clamped_for_passes_and_buffers() {
        let mut chain = PostChain::new();
        chain
            .add_pass(FakePass::boxed(PassKind::Scene, "scene"))
            .unwrap();
        let mut seen = Vec::new();
        let applied = chain.apply_size(0, 300, |_, w, h| seen.push((w, h)));
        assert_eq!(applied, (1, 300));
        assert_eq!(seen, [(1, 300)]);

        let extent = buffer_extent(applied.0, applied.1);
        assert_eq!((extent.width, extent.height), (1, 300));
        assert_eq!(extent.depth_or_array_layers, 1);
        assert_eq!(buffer_extent(0, 0).width, 1);
    }
}
