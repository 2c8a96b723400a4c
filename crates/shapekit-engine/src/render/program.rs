use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// Vertex entry point every shape shader must export.
pub const VERTEX_ENTRY: &str = "vs_main";
/// Fragment entry point every shape shader must export.
pub const FRAGMENT_ENTRY: &str = "fs_main";
/// Name of the vertex position input (`@location(0)`).
pub const POSITION_ATTRIBUTE: &str = "a_position";
/// Per-draw color uniform, `@group(1) @binding(0)`.
pub const COLOR_UNIFORM: &str = "u_color";
/// Viewport size uniform, `@group(0) @binding(0)`.
pub const RESOLUTION_UNIFORM: &str = "u_resolution";

const BUILTIN_WGSL: &str = include_str!("shaders/shape.wgsl");

/// Where the shape shader comes from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ShaderSource {
    /// The shader bundled with the engine.
    #[default]
    Builtin,
    /// WGSL held in memory.
    Wgsl(String),
    /// WGSL read from disk at initialization.
    File(PathBuf),
}

impl ShaderSource {
    /// Reads the WGSL text.
    pub fn load(&self) -> Result<Cow<'_, str>, ShaderError> {
        match self {
            ShaderSource::Builtin => Ok(Cow::Borrowed(BUILTIN_WGSL)),
            ShaderSource::Wgsl(src) => Ok(Cow::Borrowed(src.as_str())),
            ShaderSource::File(path) => std::fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|source| ShaderError::Load { path: path.clone(), source }),
        }
    }

    fn describe(&self) -> String {
        match self {
            ShaderSource::Builtin => "builtin shape shader".to_string(),
            ShaderSource::Wgsl(_) => "inline WGSL".to_string(),
            ShaderSource::File(path) => path.display().to_string(),
        }
    }
}

/// Reasons a shader program cannot be built.
#[derive(Debug)]
pub enum ShaderError {
    /// The source could not be read.
    Load { path: PathBuf, source: std::io::Error },
    /// WGSL syntax or type errors.
    Compile(String),
    /// The module parsed but failed semantic validation.
    Validate(String),
    /// The module is valid but does not expose the names the renderer binds to.
    Link(String),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Load { path, source } => {
                write!(f, "failed to read shader {}: {}", path.display(), source)
            }
            ShaderError::Compile(msg) => write!(f, "shader compilation failed:\n{msg}"),
            ShaderError::Validate(msg) => write!(f, "shader validation failed: {msg}"),
            ShaderError::Link(msg) => write!(f, "shader link failed: {msg}"),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::Load { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A compiled and link-checked shape shader.
///
/// Compilation happens on the CPU with naga, so a broken shader is reported
/// before any GPU object exists.
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    wgsl: String,
    label: String,
}

impl ShaderProgram {
    /// Loads, compiles, validates, and checks the binding contract.
    pub fn compile(source: &ShaderSource) -> Result<Self, ShaderError> {
        let label = source.describe();
        let wgsl = source.load()?;

        let module = naga::front::wgsl::parse_str(&wgsl)
            .map_err(|e| ShaderError::Compile(e.emit_to_string(&wgsl)))?;

        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        )
        .validate(&module)
        .map_err(|e| ShaderError::Validate(e.as_inner().to_string()))?;

        check_link(&module)?;

        log::debug!("compiled {label}");
        Ok(Self { wgsl: wgsl.into_owned(), label })
    }

    #[inline]
    pub fn wgsl(&self) -> &str {
        &self.wgsl
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

fn check_link(module: &naga::Module) -> Result<(), ShaderError> {
    let entry = |name: &str, stage: naga::ShaderStage| {
        module
            .entry_points
            .iter()
            .find(|ep| ep.name == name && ep.stage == stage)
            .ok_or_else(|| ShaderError::Link(format!("missing {stage:?} entry point `{name}`")))
    };

    let vertex = entry(VERTEX_ENTRY, naga::ShaderStage::Vertex)?;
    entry(FRAGMENT_ENTRY, naga::ShaderStage::Fragment)?;

    let has_position = vertex
        .function
        .arguments
        .iter()
        .any(|arg| arg.name.as_deref() == Some(POSITION_ATTRIBUTE));
    if !has_position {
        return Err(ShaderError::Link(format!(
            "`{VERTEX_ENTRY}` has no `{POSITION_ATTRIBUTE}` input"
        )));
    }

    for (name, group) in [(RESOLUTION_UNIFORM, 0), (COLOR_UNIFORM, 1)] {
        let bound = module.global_variables.iter().any(|(_, var)| {
            var.name.as_deref() == Some(name)
                && var.space == naga::AddressSpace::Uniform
                && var
                    .binding
                    .as_ref()
                    .is_some_and(|b| b.group == group && b.binding == 0)
        });
        if !bound {
            return Err(ShaderError::Link(format!(
                "uniform `{name}` not found at @group({group}) @binding(0)"
            )));
        }
    }

    Ok(())
}
