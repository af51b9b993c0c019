//! GPU context bound to a window
//!
//! Owns the wgpu surface, device and queue, and keeps the surface configuration
//! in sync with the window size.

use std::fmt;
use std::sync::Arc;

use winit::dpi::PhysicalSize;
use winit::window::Window;

/// Options for creating a [`RenderContext`]
#[derive(Debug, Clone, Copy)]
pub struct ContextOptions {
    /// Wait for vertical blank before presenting
    pub vsync: bool,
    /// Adapter selection preference
    pub power_preference: wgpu::PowerPreference,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            vsync: true,
            power_preference: wgpu::PowerPreference::HighPerformance,
        }
    }
}

/// Errors raised while creating the GPU context
#[derive(Debug)]
pub enum ContextError {
    /// The window could not back a surface
    SurfaceCreation(String),
    /// No adapter can present to the surface
    NoAdapter,
    /// The adapter refused the device request
    DeviceRequest(String),
    /// The surface reports no usable texture format
    UnsupportedSurface,
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextError::SurfaceCreation(msg) => write!(f, "Failed to create surface: {}", msg),
            ContextError::NoAdapter => write!(f, "No suitable GPU adapter found"),
            ContextError::DeviceRequest(msg) => write!(f, "Failed to create device: {}", msg),
            ContextError::UnsupportedSurface => write!(f, "Surface has no supported formats"),
        }
    }
}

impl std::error::Error for ContextError {}

/// Window-bound wgpu state
pub struct RenderContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize<u32>,
    adapter_info: wgpu::AdapterInfo,
}

impl RenderContext {
    /// Create a context presenting to `window`
    pub async fn new(window: Arc<Window>, options: ContextOptions) -> Result<Self, ContextError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(|e| ContextError::SurfaceCreation(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: options.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(ContextError::NoAdapter)?;

        let adapter_info = adapter.get_info();

        // Line rasterization is optional; request it only where the adapter has it
        let required_features = adapter.features() & wgpu::Features::POLYGON_MODE_LINE;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Glitter Device"),
                    required_features,
                    required_limits: wgpu::Limits::downlevel_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await
            .map_err(|e| ContextError::DeviceRequest(e.to_string()))?;

        let caps = surface.get_capabilities(&adapter);
        let format = choose_surface_format(&caps.formats).ok_or(ContextError::UnsupportedSurface)?;
        let present_mode = choose_present_mode(options.vsync, &caps.present_modes);
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            desired_maximum_frame_latency: 2,
            alpha_mode,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        log::debug!("Surface configured: {:?} {:?} {}x{}", format, present_mode, config.width, config.height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            adapter_info,
        })
    }

    /// Reconfigure the surface for a new window size
    ///
    /// A zero-sized window (minimized) is recorded but the surface is left alone.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if !is_drawable_size(new_size) {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Reconfigure the surface with the current size (after a lost surface)
    pub fn reconfigure(&mut self) {
        self.resize(self.size);
    }

    /// Whether the window currently has a drawable area
    pub fn is_drawable(&self) -> bool {
        is_drawable_size(self.size)
    }

    /// Surface texture format
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Information about the adapter backing this context
    pub fn adapter_info(&self) -> &wgpu::AdapterInfo {
        &self.adapter_info
    }

    /// Whether programs can be linked with line rasterization
    pub fn supports_wireframe(&self) -> bool {
        self.device.features().contains(wgpu::Features::POLYGON_MODE_LINE)
    }
}

/// Whether a surface of `size` can be configured and drawn to
pub fn is_drawable_size(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}

/// One-line description of the adapter and its driver
pub fn describe_adapter(info: &wgpu::AdapterInfo) -> String {
    let driver = match (info.driver.is_empty(), info.driver_info.is_empty()) {
        (true, true) => "unknown driver".to_string(),
        (false, true) => info.driver.clone(),
        (true, false) => info.driver_info.clone(),
        (false, false) => format!("{} {}", info.driver, info.driver_info),
    };
    format!("{:?} {} ({}) on {:?}", info.backend, info.name, driver, info.device_type)
}

/// Pick the surface format
///
/// Linear formats are preferred so fragment colors reach the screen as written.
pub fn choose_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
}

/// Pick the present mode for the vsync setting
pub fn choose_present_mode(vsync: bool, supported: &[wgpu::PresentMode]) -> wgpu::PresentMode {
    if vsync {
        return wgpu::PresentMode::Fifo;
    }
    [wgpu::PresentMode::Immediate, wgpu::PresentMode::Mailbox]
        .into_iter()
        .find(|mode| supported.contains(mode))
        .unwrap_or(wgpu::PresentMode::AutoNoVsync)
}
