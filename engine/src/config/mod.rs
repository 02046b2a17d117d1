//! Configuration Module
//!
//! Runtime capability record plus a string-keyed value dictionary loaded
//! from JSON config files. Capability values describe what the host device
//! can do (texture limits, compressed-format support); the dictionary holds
//! free-form tuning values the rest of the runtime reads through typed
//! getters with caller-supplied defaults.
//!
//! Dictionary lookups never fail - a missing key yields the caller's
//! default. Only the file-loading boundary reports errors.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

/// Config file format revision this runtime understands.
pub const SUPPORTED_FORMAT: i64 = 1;

/// Device capability snapshot fed to [`Configuration::load_capabilities`].
///
/// `Default` is all-zero / unsupported, matching a configuration that has
/// not probed the device yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeviceCaps {
    /// Largest supported texture edge, in pixels
    pub max_texture_size: i32,
    /// Modelview matrix stack depth
    pub max_modelview_stack_depth: i32,
    /// Number of texture units
    pub max_texture_units: i32,
    /// MSAA sample count ceiling
    pub max_samples_allowed: i32,
    /// PVRTC compressed texture support
    pub supports_pvrtc: bool,
    /// Non-power-of-two texture support
    pub supports_npot: bool,
    /// BGRA8888 texture format support
    pub supports_bgra8888: bool,
    /// Framebuffer discard support
    pub supports_discard_framebuffer: bool,
    /// Shareable vertex array object support
    pub supports_shareable_vao: bool,
    /// Raw extension string reported by the driver
    pub gl_extensions: String,
}

/// Errors from loading a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON parse error.
    Json(serde_json::Error),
    /// File has no `metadata` object.
    MissingMetadata,
    /// `metadata.format` is not a revision this runtime understands.
    UnsupportedFormat(i64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::MissingMetadata => write!(f, "config file has no metadata object"),
            ConfigError::UnsupportedFormat(v) => {
                write!(f, "unsupported config format: {v}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// Runtime configuration: device capabilities and the value dictionary.
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    caps: DeviceCaps,
    values: HashMap<String, Value>,
}

impl Configuration {
    /// Create an empty configuration (all capabilities zero/unsupported,
    /// empty dictionary).
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a device capability snapshot.
    pub fn load_capabilities(&mut self, caps: DeviceCaps) {
        self.caps = caps;
    }

    pub fn max_texture_size(&self) -> i32 {
        self.caps.max_texture_size
    }

    pub fn max_modelview_stack_depth(&self) -> i32 {
        self.caps.max_modelview_stack_depth
    }

    pub fn max_texture_units(&self) -> i32 {
        self.caps.max_texture_units
    }

    pub fn max_samples_allowed(&self) -> i32 {
        self.caps.max_samples_allowed
    }

    pub fn supports_pvrtc(&self) -> bool {
        self.caps.supports_pvrtc
    }

    pub fn supports_npot(&self) -> bool {
        self.caps.supports_npot
    }

    pub fn supports_bgra8888(&self) -> bool {
        self.caps.supports_bgra8888
    }

    pub fn supports_discard_framebuffer(&self) -> bool {
        self.caps.supports_discard_framebuffer
    }

    pub fn supports_shareable_vao(&self) -> bool {
        self.caps.supports_shareable_vao
    }

    /// Whether the driver extension string mentions the given extension.
    pub fn has_gl_extension(&self, name: &str) -> bool {
        self.caps.gl_extensions.split_whitespace().any(|e| e == name)
    }

    /// Raw dictionary lookup.
    pub fn object(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Insert or replace a dictionary value.
    pub fn set_object(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_owned(), value);
    }

    /// Boolean dictionary value, or `default` when absent or not a bool.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Numeric dictionary value, or `default` when absent or not a number.
    pub fn get_number(&self, key: &str, default: f64) -> f64 {
        self.values.get(key).and_then(Value::as_f64).unwrap_or(default)
    }

    /// Integer dictionary value, or `default` when absent or not an integer.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.values.get(key).and_then(Value::as_i64).unwrap_or(default)
    }

    /// String dictionary value, or `default` when absent or not a string.
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.values.get(key).and_then(Value::as_str).unwrap_or(default)
    }

    /// Load a config file and merge its data into the dictionary.
    ///
    /// See [`Configuration::load_str`] for the file shape and merge rules.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        self.load_str(&text)
    }

    /// Merge a config document into the dictionary.
    ///
    /// The document shape is:
    ///
    /// ```json
    /// {
    ///     "metadata": { "format": 1 },
    ///     "data": { "runtime.fps": 60 }
    /// }
    /// ```
    ///
    /// The metadata format gate must pass before anything is merged. Data
    /// keys are only inserted where the dictionary has no value yet, so
    /// values set earlier (or by an earlier file) win.
    pub fn load_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let root: Value = serde_json::from_str(text)?;

        let format = root
            .get("metadata")
            .and_then(|m| m.get("format"))
            .and_then(Value::as_i64)
            .ok_or(ConfigError::MissingMetadata)?;
        if format != SUPPORTED_FORMAT {
            return Err(ConfigError::UnsupportedFormat(format));
        }

        let Some(data) = root.get("data").and_then(Value::as_object) else {
            log::warn!("config file has no data object, nothing to merge");
            return Ok(());
        };

        for (key, value) in data {
            if !self.values.contains_key(key) {
                self.values.insert(key.clone(), value.clone());
            }
        }
        Ok(())
    }
}
