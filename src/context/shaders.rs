use crate::constants::GLenum;
use crate::foreign::{Arg, ForeignValue};
use crate::handle::{Program, Shader, UniformLocation};
use crate::info::{ActiveInfo, ShaderPrecisionFormat};

use super::Context;

/// Shader and program lifecycle.
///
/// Compilation and linking failures are not reported by [Context::compile_shader] or
/// [Context::link_program]; check `COMPILE_STATUS` and `LINK_STATUS` and read the info logs.
impl<V> Context<V>
where
    V: ForeignValue,
{
    /// Creates a shader of the given type (`VERTEX_SHADER` or `FRAGMENT_SHADER`).
    pub fn create_shader(&self, type_: GLenum) -> Option<Shader<V>> {
        Shader::from_foreign(self.call("createShader", &[Arg::UInt(type_.0)]))
    }

    pub fn delete_shader(&self, shader: Option<&Shader<V>>) {
        self.call(
            "deleteShader",
            &[Arg::nullable(shader.map(|s| s.as_foreign()))],
        );
    }

    pub fn is_shader(&self, shader: Option<&Shader<V>>) -> bool {
        self.call("isShader", &[Arg::nullable(shader.map(|s| s.as_foreign()))])
            .as_bool()
    }

    pub fn shader_source(&self, shader: &Shader<V>, source: &str) {
        self.call(
            "shaderSource",
            &[Arg::Value(shader.as_foreign()), Arg::Str(source)],
        );
    }

    pub fn get_shader_source(&self, shader: &Shader<V>) -> String {
        self.call("getShaderSource", &[Arg::Value(shader.as_foreign())])
            .as_string()
    }

    pub fn compile_shader(&self, shader: &Shader<V>) {
        self.call("compileShader", &[Arg::Value(shader.as_foreign())]);
    }

    /// Returns the shader parameter `pname` (`SHADER_TYPE`, `DELETE_STATUS` or
    /// `COMPILE_STATUS`) as the host reported it.
    pub fn get_shader_parameter(&self, shader: &Shader<V>, pname: GLenum) -> V {
        self.call(
            "getShaderParameter",
            &[Arg::Value(shader.as_foreign()), Arg::UInt(pname.0)],
        )
    }

    pub fn get_shader_parameter_bool(&self, shader: &Shader<V>, pname: GLenum) -> bool {
        self.get_shader_parameter(shader, pname).as_bool()
    }

    pub fn get_shader_parameter_i32(&self, shader: &Shader<V>, pname: GLenum) -> i32 {
        self.get_shader_parameter(shader, pname).as_i32()
    }

    /// Returns the compiler output of the last compilation of `shader`.
    pub fn get_shader_info_log(&self, shader: &Shader<V>) -> String {
        self.call("getShaderInfoLog", &[Arg::Value(shader.as_foreign())])
            .as_string()
    }

    /// Returns the range and precision of a numeric format (e.g. `HIGH_FLOAT`) in a shader type.
    pub fn get_shader_precision_format(
        &self,
        shader_type: GLenum,
        precision_type: GLenum,
    ) -> Option<ShaderPrecisionFormat> {
        let format = self.call(
            "getShaderPrecisionFormat",
            &[Arg::UInt(shader_type.0), Arg::UInt(precision_type.0)],
        );

        ShaderPrecisionFormat::from_foreign(&format)
    }

    pub fn create_program(&self) -> Option<Program<V>> {
        Program::from_foreign(self.call("createProgram", &[]))
    }

    /// Flags `program` for deletion. It is deleted once it is no longer the current program.
    pub fn delete_program(&self, program: Option<&Program<V>>) {
        self.call(
            "deleteProgram",
            &[Arg::nullable(program.map(|p| p.as_foreign()))],
        );
    }

    pub fn is_program(&self, program: Option<&Program<V>>) -> bool {
        self.call(
            "isProgram",
            &[Arg::nullable(program.map(|p| p.as_foreign()))],
        )
        .as_bool()
    }

    pub fn attach_shader(&self, program: &Program<V>, shader: &Shader<V>) {
        self.call(
            "attachShader",
            &[
                Arg::Value(program.as_foreign()),
                Arg::Value(shader.as_foreign()),
            ],
        );
    }

    pub fn detach_shader(&self, program: &Program<V>, shader: &Shader<V>) {
        self.call(
            "detachShader",
            &[
                Arg::Value(program.as_foreign()),
                Arg::Value(shader.as_foreign()),
            ],
        );
    }

    /// Returns the shaders attached to `program`, in the order the host lists them.
    pub fn get_attached_shaders(&self, program: &Program<V>) -> Vec<Shader<V>> {
        let shaders = self.call("getAttachedShaders", &[Arg::Value(program.as_foreign())]);

        if shaders.is_nullish() {
            return Vec::new();
        }

        (0..shaders.length())
            .map(|i| Shader::wrap(shaders.index(i)))
            .collect()
    }

    /// Binds the attribute `name` to the vertex attribute `index`. Takes effect on the next
    /// [Context::link_program].
    pub fn bind_attrib_location(&self, program: &Program<V>, index: u32, name: &str) {
        self.call(
            "bindAttribLocation",
            &[
                Arg::Value(program.as_foreign()),
                Arg::UInt(index),
                Arg::Str(name),
            ],
        );
    }

    pub fn link_program(&self, program: &Program<V>) {
        self.call("linkProgram", &[Arg::Value(program.as_foreign())]);
    }

    /// Checks whether `program` can execute in the current state. The result is reported through
    /// `VALIDATE_STATUS` and the program info log.
    pub fn validate_program(&self, program: &Program<V>) {
        self.call("validateProgram", &[Arg::Value(program.as_foreign())]);
    }

    /// Makes `program` part of the current rendering state. Passing `None` leaves no program in
    /// use.
    pub fn use_program(&self, program: Option<&Program<V>>) {
        self.call(
            "useProgram",
            &[Arg::nullable(program.map(|p| p.as_foreign()))],
        );
    }

    pub fn get_program_parameter(&self, program: &Program<V>, pname: GLenum) -> V {
        self.call(
            "getProgramParameter",
            &[Arg::Value(program.as_foreign()), Arg::UInt(pname.0)],
        )
    }

    /// Returns a boolean program parameter such as `LINK_STATUS` or `VALIDATE_STATUS`.
    pub fn get_program_parameter_bool(&self, program: &Program<V>, pname: GLenum) -> bool {
        self.get_program_parameter(program, pname).as_bool()
    }

    /// Returns an integer program parameter such as `ACTIVE_UNIFORMS` or `ATTACHED_SHADERS`.
    pub fn get_program_parameter_i32(&self, program: &Program<V>, pname: GLenum) -> i32 {
        self.get_program_parameter(program, pname).as_i32()
    }

    pub fn get_program_info_log(&self, program: &Program<V>) -> String {
        self.call("getProgramInfoLog", &[Arg::Value(program.as_foreign())])
            .as_string()
    }

    /// Returns the location of the attribute `name`, or `-1` if there is no such active
    /// attribute.
    pub fn get_attrib_location(&self, program: &Program<V>, name: &str) -> i32 {
        self.call(
            "getAttribLocation",
            &[Arg::Value(program.as_foreign()), Arg::Str(name)],
        )
        .as_i32()
    }

    /// Returns the location of the uniform `name`, or `None` if there is no such active uniform.
    pub fn get_uniform_location(
        &self,
        program: &Program<V>,
        name: &str,
    ) -> Option<UniformLocation<V>> {
        let location = self.call(
            "getUniformLocation",
            &[Arg::Value(program.as_foreign()), Arg::Str(name)],
        );

        UniformLocation::from_foreign(location)
    }

    /// Describes the active attribute at `index`, an index below `ACTIVE_ATTRIBUTES`.
    pub fn get_active_attrib(&self, program: &Program<V>, index: u32) -> Option<ActiveInfo> {
        let info = self.call(
            "getActiveAttrib",
            &[Arg::Value(program.as_foreign()), Arg::UInt(index)],
        );

        ActiveInfo::from_foreign(&info)
    }

    /// Describes the active uniform at `index`, an index below `ACTIVE_UNIFORMS`.
    pub fn get_active_uniform(&self, program: &Program<V>, index: u32) -> Option<ActiveInfo> {
        let info = self.call(
            "getActiveUniform",
            &[Arg::Value(program.as_foreign()), Arg::UInt(index)],
        );

        ActiveInfo::from_foreign(&info)
    }
}
