use std::cell::Cell;
use std::rc::Rc;

use webgl_bridge::mock::{MockArg, MockEnvironment, MockValue};
use webgl_bridge::{Context, GLenum};

type Gl = Context<MockValue>;

fn context(env: &MockEnvironment) -> Gl {
    Context::new(&env.global, &env.canvas, None).unwrap()
}

#[test]
fn buffer_size_round_trip() {
    let env = MockEnvironment::new();
    let buffer_size = env.constant("BUFFER_SIZE").unwrap();
    let stored = Rc::new(Cell::new(0usize));

    env.gl.respond("createBuffer", MockValue::object());

    let store = stored.clone();

    env.gl.on_call("bufferData", move |args| {
        if let Some(MockArg::Array(data)) = args.get(1) {
            store.set(data.byte_len());
        }

        MockValue::undefined()
    });

    let read = stored.clone();

    env.gl.on_call("getBufferParameter", move |args| match args {
        [_, MockArg::UInt(pname)] if *pname == buffer_size.0 => {
            MockValue::number(read.get() as f64)
        }
        _ => MockValue::null(),
    });

    let gl = context(&env);
    let buffer = gl.create_buffer().unwrap();
    let vertices: Vec<f32> = vec![0.0, 0.5, -0.5, -0.5, 0.5, -0.5];

    gl.bind_buffer(gl.ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data(gl.ARRAY_BUFFER, &vertices, gl.STATIC_DRAW);

    assert_eq!(
        gl.get_buffer_parameter_i32(gl.ARRAY_BUFFER, gl.BUFFER_SIZE),
        24
    );
}

#[test]
fn program_setup() {
    let env = MockEnvironment::new();
    let vertex_shader = MockValue::object();
    let fragment_shader = MockValue::object();
    let program = MockValue::object();
    let location = MockValue::object();
    let vertex_type = env.constant("VERTEX_SHADER").unwrap();

    {
        let vertex_shader = vertex_shader.clone();
        let fragment_shader = fragment_shader.clone();

        env.gl.on_call("createShader", move |args| match args {
            [MockArg::UInt(type_)] if *type_ == vertex_type.0 => vertex_shader.clone(),
            _ => fragment_shader.clone(),
        });
    }

    env.gl.respond("createProgram", program.clone());
    env.gl.respond("getShaderParameter", MockValue::bool(true));
    env.gl.respond("getProgramParameter", MockValue::bool(true));
    env.gl.respond(
        "getAttachedShaders",
        MockValue::array(vec![vertex_shader.clone(), fragment_shader.clone()]),
    );
    env.gl.respond("getAttribLocation", MockValue::number(0.0));
    env.gl.respond("getUniformLocation", location.clone());

    let gl = context(&env);

    let vs = gl.create_shader(gl.VERTEX_SHADER).unwrap();
    let fs = gl.create_shader(gl.FRAGMENT_SHADER).unwrap();

    gl.shader_source(
        &vs,
        "attribute vec2 position; void main() { gl_Position = vec4(position, 0.0, 1.0); }",
    );
    gl.compile_shader(&vs);
    gl.shader_source(
        &fs,
        "precision mediump float; uniform vec4 color; void main() { gl_FragColor = color; }",
    );
    gl.compile_shader(&fs);

    assert!(gl.get_shader_parameter_bool(&vs, gl.COMPILE_STATUS));
    assert!(gl.get_shader_parameter_bool(&fs, gl.COMPILE_STATUS));

    let p = gl.create_program().unwrap();

    gl.attach_shader(&p, &vs);
    gl.attach_shader(&p, &fs);
    gl.link_program(&p);

    assert!(gl.get_program_parameter_bool(&p, gl.LINK_STATUS));

    let attached = gl.get_attached_shaders(&p);

    assert_eq!(attached, vec![vs.clone(), fs.clone()]);

    gl.use_program(Some(&p));

    let position = gl.get_attrib_location(&p, "position");
    let color = gl.get_uniform_location(&p, "color");

    assert_eq!(position, 0);
    assert!(color.is_some());

    gl.enable_vertex_attrib_array(position as u32);
    gl.vertex_attrib_pointer(position as u32, 2, gl.FLOAT, false, 0, 0);
    gl.uniform4f(color.as_ref(), 1.0, 0.0, 0.0, 1.0);
    gl.draw_arrays(gl.TRIANGLES, 0, 3);

    let attach_calls = env.gl.calls_to("attachShader");

    assert_eq!(
        attach_calls[0].args,
        vec![MockArg::Value(program.clone()), MockArg::Value(vertex_shader)]
    );
    assert_eq!(
        attach_calls[1].args,
        vec![MockArg::Value(program.clone()), MockArg::Value(fragment_shader)]
    );
    assert_eq!(
        env.gl.calls_to("uniform4f")[0].args[0],
        MockArg::Value(location)
    );
    assert_eq!(
        env.gl.calls_to("useProgram")[0].args,
        vec![MockArg::Value(program)]
    );
}

#[test]
fn constants_match_host_values() {
    let env = MockEnvironment::new();

    env.gl.set("DEPTH_TEST", MockValue::number(2929.0));

    let gl = context(&env);

    assert_eq!(gl.DEPTH_TEST, GLenum(2929));
    assert_eq!(gl.constants().get("DEPTH_TEST"), Some(GLenum(2929)));
    assert_eq!(gl.ARRAY_BUFFER, env.constant("ARRAY_BUFFER").unwrap());
}

#[test]
fn wrapping_an_existing_context() {
    let env = MockEnvironment::new();
    let gl = Context::from_foreign(env.gl.clone());

    gl.viewport(0, 0, 1, 1);

    assert!(env.canvas.calls().is_empty());
    assert_eq!(env.gl.calls_to("viewport").len(), 1);
    assert!(gl.into_foreign().ptr_eq(&env.gl));
}
