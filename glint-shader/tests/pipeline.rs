use glint_shader::{
    build_interface, compute_layout, emit, generate, scan, BuildOptions, EmitOptions, Error,
    UniformKind, UniformMapping, BANNER,
};

const VERTEX: &str = r#"#version 330 core
layout(location=0) in vec3 position;
layout(location=1) in vec2 uv;

uniform mat4 model;

out vec2 fragUv;

void main() {
    fragUv = uv;
    gl_Position = model * vec4(position, 1.0);
}
"#;

const FRAGMENT: &str = r#"#version 330 core
in vec2 fragUv;
out vec4 color;

uniform vec4 tints[];
uniform float time;

void main() {
    color = tints[0] * time;
}
"#;

#[test]
fn test_end_to_end_basic() {
    let source = "uniform mat4 model;\nlayout(location=0) in vec3 position;\nlayout(location=1) in vec2 uv;";
    let found = scan(source);
    let interface = build_interface("basic", found.uniforms, found.attributes).unwrap();

    assert_eq!(interface.class_name, "BasicShader");
    assert_eq!(interface.uniforms.len(), 1);
    assert!(!interface.uniforms[0].is_array);
    assert_eq!(
        interface.uniforms[0].mapping(),
        UniformMapping::Known(UniformKind::Matrix4)
    );

    let layout = compute_layout(&interface.attributes);
    assert_eq!(layout.stride, 20);
    assert_eq!(layout.offsets(), vec![0, 12]);

    let output = emit(&interface).unwrap();
    assert_eq!(output.matches("vertex_attrib_pointer(").count(), 2);
    assert_eq!(output.matches("fn set_vertex_attributes").count(), 1);
    assert_eq!(output.matches("self.shader.set_matrix4(").count(), 1);

    let position = output.find("fn set_position_attribute").unwrap();
    let uv = output.find("fn set_uv_attribute").unwrap();
    let aggregate = output.find("fn set_vertex_attributes").unwrap();
    let model = output.find("fn set_model").unwrap();
    assert!(position < uv && uv < aggregate && aggregate < model);
}

#[test]
fn test_generate_shader_pair() {
    let combined = format!("{VERTEX}{FRAGMENT}");
    let generated = generate(
        "sprite",
        &combined,
        &BuildOptions::default(),
        &EmitOptions::default(),
    )
    .unwrap();

    assert_eq!(generated.file_name, "SpriteShader.rs");
    assert_eq!(generated.stride, 20);
    assert_eq!(generated.offsets, vec![0, 12]);

    let names: Vec<_> = generated
        .interface
        .uniforms
        .iter()
        .map(|uniform| uniform.name.as_str())
        .collect();
    assert_eq!(names, ["model", "tints", "time"]);
    assert!(generated.interface.uniforms[1].is_array);

    assert!(generated.source.starts_with(BANNER));
    assert!(generated.source.contains("pub fn set_tints(&self, values: &[Color])"));
    assert!(generated.source.contains("pub fn set_time(&self, value: f32)"));
}

#[test]
fn test_pair_order_only_changes_relative_order() {
    let vertex_first = scan(&format!("{VERTEX}{FRAGMENT}"));
    let fragment_first = scan(&format!("{FRAGMENT}{VERTEX}"));

    let mut a: Vec<_> = vertex_first.uniforms.iter().map(|u| u.name.clone()).collect();
    let mut b: Vec<_> = fragment_first.uniforms.iter().map(|u| u.name.clone()).collect();
    assert_ne!(a, b);
    a.sort();
    b.sort();
    assert_eq!(a, b);
    assert_eq!(vertex_first.attributes, fragment_first.attributes);
}

#[test]
fn test_missing_half_is_not_an_error() {
    let generated = generate(
        "frag_only",
        FRAGMENT,
        &BuildOptions::default(),
        &EmitOptions::default(),
    )
    .unwrap();
    assert!(generated.interface.attributes.is_empty());
    assert_eq!(generated.stride, 0);
    assert!(!generated.source.contains("set_vertex_attributes"));
}

#[test]
fn test_generate_is_deterministic() {
    let combined = format!("{VERTEX}{FRAGMENT}");
    let run = || {
        generate(
            "sprite",
            &combined,
            &BuildOptions::default(),
            &EmitOptions::default(),
        )
        .unwrap()
        .source
    };
    assert_eq!(run(), run());
}

#[test]
fn test_generate_errors_are_per_call() {
    let strict = BuildOptions { strict: true };
    let result = generate("", VERTEX, &strict, &EmitOptions::default());
    assert!(matches!(result, Err(Error::InvalidName(_))));

    let result = generate(
        "dup",
        "uniform float t;\nuniform float t;",
        &strict,
        &EmitOptions::default(),
    );
    assert!(matches!(result, Err(Error::DuplicateUniform(_))));

    let ok = generate("fine", VERTEX, &strict, &EmitOptions::default());
    assert!(ok.is_ok());
}

#[test]
fn test_runtime_fixture_matches_emitter() {
    let source = "layout(location=0) in vec3 position;\nlayout(location=1) in vec2 uv;\nuniform mat4 model;\nuniform vec4 colors[];\nuniform float weights[];\n";
    let generated = generate(
        "palette",
        source,
        &BuildOptions::default(),
        &EmitOptions::default(),
    )
    .unwrap();
    assert_eq!(generated.file_name, "PaletteShader.rs");
    assert_eq!(
        generated.source,
        include_str!("../../glint-lib/tests/fixtures/PaletteShader.rs")
    );
}

#[test]
fn test_strict_rejects_colliding_methods() {
    let strict = BuildOptions { strict: true };
    let result = generate(
        "lit",
        "uniform vec3 lightPos;\nuniform vec3 light_pos;",
        &strict,
        &EmitOptions::default(),
    );
    assert!(matches!(
        result,
        Err(Error::DuplicateMethod { method, .. }) if method == "set_light_pos"
    ));

    let result = generate(
        "mesh",
        "layout(location=0) in vec3 position;\nuniform float positionAttribute;",
        &strict,
        &EmitOptions::default(),
    );
    assert!(matches!(
        result,
        Err(Error::DuplicateMethod { method, .. }) if method == "set_position_attribute"
    ));

    let generated = generate(
        "lit",
        "uniform vec3 lightPos;\nuniform vec3 light_pos;",
        &BuildOptions::default(),
        &EmitOptions::default(),
    )
    .unwrap();
    assert_eq!(generated.source.matches("pub fn set_light_pos(").count(), 2);
}

#[test]
fn test_generate_without_declarations() {
    let generated = generate(
        "blank",
        "void main() {}\n",
        &BuildOptions { strict: true },
        &EmitOptions::default(),
    )
    .unwrap();
    assert!(generated.interface.uniforms.is_empty());
    assert!(generated.interface.attributes.is_empty());
    assert_eq!(generated.stride, 0);
    assert!(generated.source.contains("pub struct BlankShader"));
    assert!(!generated.source.contains("fn set_"));
}
