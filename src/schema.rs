//! Schema types for inputs, blocks, and prompt packages.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_TARGET_FRAMEWORK: &str = "none";
pub const DEFAULT_OUTPUT_TARGET: &str = "both";
pub const DEFAULT_AUDIENCE: &str = "engineer";

fn default_target_framework() -> String {
    DEFAULT_TARGET_FRAMEWORK.to_string()
}

fn default_output_target() -> String {
    DEFAULT_OUTPUT_TARGET.to_string()
}

fn default_audience() -> String {
    DEFAULT_AUDIENCE.to_string()
}

/// User-supplied fields a package is synthesized from.
///
/// `project_name` and `end_goals` are required by the CLI and the form, but
/// deserialize to empty strings when absent so the synthesizer stays total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    #[serde(default)]
    pub project_name: String,
    #[serde(default = "default_target_framework")]
    pub target_framework: String,
    #[serde(default = "default_output_target")]
    pub output_target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_choices: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspirations: Option<Vec<Value>>,
    #[serde(default = "default_audience")]
    pub audience: String,
    #[serde(default)]
    pub end_goals: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reusable_blocks: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly_order: Option<Vec<String>>,
}

impl Inputs {
    /// Inputs with the two required fields set and every other field defaulted.
    pub fn new(project_name: impl Into<String>, end_goals: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            target_framework: default_target_framework(),
            output_target: default_output_target(),
            audience: default_audience(),
            end_goals: end_goals.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub content: String,
}

impl Block {
    pub fn new(id: &str, role: &str, content: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            role: Some(role.to_string()),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub version: String,
    pub status: String,
    pub created: String,
    pub updated: String,
}

/// The structured document written to `prompt_package.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptPackage {
    #[serde(rename = "HEADER")]
    pub header: Header,
    #[serde(rename = "INTERFACES", default)]
    pub interfaces: Map<String, Value>,
    #[serde(rename = "BLOCKS")]
    pub blocks: Vec<Block>,
    #[serde(rename = "ASSEMBLY")]
    pub assembly: Vec<String>,
    #[serde(rename = "VARIABLES", default)]
    pub variables: Vec<Value>,
    #[serde(rename = "STYLE_GUIDE", default)]
    pub style_guide: Map<String, Value>,
    #[serde(rename = "TESTS", default)]
    pub tests: Vec<String>,
    #[serde(rename = "CHANGELOG", default)]
    pub changelog: Vec<String>,
}
