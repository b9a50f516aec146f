//! The fixed import header for generated declaration files.

use super::Node;

/// One-line import of the runtime's default export and the `connectGen`
/// connection factory. The module path is a constructor parameter so
/// generated files can target different distributions of the runtime.
#[derive(Debug, Clone)]
pub struct ImportStatement {
    default_export: String,
    module: String,
}

impl ImportStatement {
    pub const DEFAULT_EXPORT: &'static str = "Device";
    pub const DEFAULT_MODULE: &'static str = "device-api";

    pub fn new(default_export: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            default_export: default_export.into(),
            module: module.into(),
        }
    }
}

impl Default for ImportStatement {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXPORT, Self::DEFAULT_MODULE)
    }
}

impl Node for ImportStatement {
    fn serialize(&self) -> String {
        format!(
            "import {}, {{ connectGen }} from \"{}\";",
            self.default_export, self.module
        )
    }
}
