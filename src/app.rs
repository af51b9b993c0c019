//! Application event handling
//!
//! Owns the window and render systems and drives them from winit events.

use std::process::ExitCode;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use glitter_render::RenderError;

use crate::config::AppConfig;
use crate::input::{InputAction, InputMapper};
use crate::logging;
use crate::scene::{Scene, SceneKind};
use crate::systems::{RenderSystem, WindowSystem};

/// Main application state
pub struct App {
    config: AppConfig,
    scene: Scene,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    failed: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let scene = Scene::for_kind(config.scene.kind);
        Self {
            config,
            scene,
            window: None,
            render: None,
            failed: false,
        }
    }

    /// Whether a fatal error stopped the application
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Exit code for the finished event loop
    pub fn exit_code(&self) -> ExitCode {
        if self.failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    /// Log a fatal error and mark the run as failed
    fn record_failure(&mut self, error: &dyn std::error::Error) {
        log::error!("{}", error);
        self.failed = true;
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: &dyn std::error::Error) {
        self.record_failure(error);
        event_loop.exit();
    }

    /// Whether another frame should be scheduled
    ///
    /// False while minimized; the next non-zero resize schedules one.
    fn wants_redraw(&self) -> bool {
        self.render.as_ref().is_some_and(|render| render.is_drawable())
    }

    fn request_redraw(&self) {
        if let (true, Some(window)) = (self.wants_redraw(), &self.window) {
            window.request_redraw();
        }
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::ToggleWireframe => {
                if let (Some(render), Some(window)) = (&mut self.render, &self.window) {
                    let wireframe = render.toggle_wireframe();
                    window.update_title(wireframe);
                }
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, &e),
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            self.config.window.vsync,
            &self.scene,
        ) {
            Ok(render) => render,
            Err(e) => return self.fail(event_loop, &e),
        };

        log::info!(
            "Scene '{}' ready: {} draw(s), {} vertices",
            self.scene.kind(),
            self.scene.draws().len(),
            self.scene.vertex_count()
        );

        window.update_title(render.wireframe());
        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(event_loop, action);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let result = match &self.render {
                    Some(render) => render.render_frame(),
                    None => return,
                };

                match result {
                    Ok(()) => {}
                    Err(RenderError::SurfaceLost) => {
                        if let Some(render) = &mut self.render {
                            render.recover_surface();
                        }
                    }
                    Err(e @ RenderError::OutOfMemory) => {
                        return self.fail(event_loop, &e);
                    }
                    Err(e) => {
                        log::warn!("Skipping frame: {}", e);
                    }
                }

                self.request_redraw();
            }

            _ => {}
        }
    }
}

/// Load configuration, open the window and render until it closes
///
/// `scene` overrides the configured scene kind. Returns failure when the window,
/// GPU context, shaders, programs or meshes cannot be created.
pub fn run(scene: Option<SceneKind>) -> ExitCode {
    let (mut config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    logging::init(&config.debug);
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    if let Some(kind) = scene {
        config.scene.kind = kind;
    }
    log::info!("Starting Glitter ({})", config.scene.kind);

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        return ExitCode::FAILURE;
    }

    app.exit_code()
}
