//! Shader compilation and program linking against a real device
//!
//! These tests need a GPU adapter (any backend, including software). When none
//! is available they return early.

use glitter_render::geometry::HELLO_TRIANGLE;
use glitter_render::pipeline::ShaderProgram;
use glitter_render::shader::TRIANGLE_VERTEX_SOURCE;
use glitter_render::{
    compile_shader, FragmentStage, LinkedProgram, MeshError, ShaderError, ShaderStage, TriangleMesh,
};

fn headless_device() -> Option<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::LowPower,
        compatible_surface: None,
        force_fallback_adapter: false,
    }))?;
    pollster::block_on(adapter.request_device(
        &wgpu::DeviceDescriptor {
            label: Some("Test Device"),
            required_features: adapter.features() & wgpu::Features::POLYGON_MODE_LINE,
            required_limits: wgpu::Limits::downlevel_defaults(),
            memory_hints: wgpu::MemoryHints::default(),
        },
        None,
    ))
    .ok()
}

#[test]
fn test_bundled_shaders_compile_and_link() {
    let Some((device, _queue)) = headless_device() else {
        println!("No GPU adapter available, skipping");
        return;
    };

    let vertex = compile_shader(&device, ShaderStage::Vertex, "Vertex", TRIANGLE_VERTEX_SOURCE)
        .expect("vertex shader should compile");

    for stage in [FragmentStage::Orange, FragmentStage::Yellow] {
        let fragment = compile_shader(&device, ShaderStage::Fragment, stage.label(), stage.source())
            .expect("fragment shader should compile");
        let program = LinkedProgram::link(
            &device,
            wgpu::TextureFormat::Rgba8Unorm,
            &vertex,
            &fragment,
            false,
            stage.label(),
        )
        .expect("program should link");
        assert!(!program.has_wireframe());
        assert_eq!(program.select(true).polygon_mode(), wgpu::PolygonMode::Fill);
    }
}

#[test]
fn test_wireframe_program_selected_when_supported() {
    let Some((device, _queue)) = headless_device() else {
        println!("No GPU adapter available, skipping");
        return;
    };
    if !device.features().contains(wgpu::Features::POLYGON_MODE_LINE) {
        println!("Adapter lacks line rasterization, skipping");
        return;
    }

    let vertex = compile_shader(&device, ShaderStage::Vertex, "Vertex", TRIANGLE_VERTEX_SOURCE)
        .expect("vertex shader should compile");
    let stage = FragmentStage::Orange;
    let fragment = compile_shader(&device, ShaderStage::Fragment, stage.label(), stage.source())
        .expect("fragment shader should compile");

    let program = LinkedProgram::link(
        &device,
        wgpu::TextureFormat::Rgba8Unorm,
        &vertex,
        &fragment,
        true,
        "First Triangle",
    )
    .expect("program should link");

    assert!(program.has_wireframe());
    let line = program.select(true);
    assert_eq!(line.polygon_mode(), wgpu::PolygonMode::Line);
    assert_eq!(line.label(), "First Triangle (wireframe)");
    let fill = program.select(false);
    assert_eq!(fill.polygon_mode(), wgpu::PolygonMode::Fill);
    assert_eq!(fill.label(), "First Triangle");
}

#[test]
fn test_broken_shader_reports_error() {
    let Some((device, _queue)) = headless_device() else {
        println!("No GPU adapter available, skipping");
        return;
    };

    let source = "@fragment\nfn fs_main() -> @location(0) vec4<f32> {\n    return undefined_color;\n}\n";
    let result = compile_shader(&device, ShaderStage::Fragment, "Broken Fragment", source);

    match result {
        Err(ShaderError::Compile { stage, label, log }) => {
            assert_eq!(stage, ShaderStage::Fragment);
            assert_eq!(label, "Broken Fragment");
            assert!(log.contains("undefined_color"), "log lacks the compiler message: {}", log);
        }
        Ok(_) => panic!("broken shader compiled"),
    }
}

#[test]
fn test_mismatched_stages_fail_to_link() {
    let Some((device, _queue)) = headless_device() else {
        println!("No GPU adapter available, skipping");
        return;
    };

    // The fragment stage reads an input the vertex stage never writes
    let vertex = compile_shader(&device, ShaderStage::Vertex, "Vertex", TRIANGLE_VERTEX_SOURCE)
        .expect("vertex shader should compile");
    let fragment_source = "@fragment\nfn fs_main(@location(3) tint: vec4<f32>) -> @location(0) vec4<f32> {\n    return tint;\n}\n";
    let fragment = compile_shader(&device, ShaderStage::Fragment, "Tinted", fragment_source)
        .expect("fragment shader should compile on its own");

    let result = ShaderProgram::link(
        &device,
        wgpu::TextureFormat::Rgba8Unorm,
        &vertex,
        &fragment,
        wgpu::PolygonMode::Fill,
        "Mismatched",
    );
    assert!(result.is_err());
}

#[test]
fn test_mesh_upload() {
    let Some((device, _queue)) = headless_device() else {
        println!("No GPU adapter available, skipping");
        return;
    };

    let mesh = TriangleMesh::upload(&device, "Hello Triangle", &HELLO_TRIANGLE).expect("upload");
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.buffer().size(), 36);

    let err = TriangleMesh::upload(&device, "Empty", &[]).err();
    assert_eq!(err, Some(MeshError::Empty));
}
