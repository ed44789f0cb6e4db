//! Package synthesis and prompt flattening.
//!
//! Both functions are total: every input has a default, and unknown assembly
//! ids flatten to empty segments.
use crate::blocks::compact_json;
use crate::clock::{format_timestamp, Clock};
use crate::schema::{Block, Header, Inputs, PromptPackage};
use serde_json::Map;

pub const PACKAGE_VERSION: &str = "0.1.0";
pub const PACKAGE_STATUS: &str = "draft";
pub const MISSION_PREFIX: &str = "You are Codex. ";
pub const SYSTEM_MISSION_ID: &str = "system-mission";
pub const STYLE_TONE_ID: &str = "style-tone";

const SEGMENT_SEPARATOR: &str = "\n\n";

/// Build a [`PromptPackage`] from user inputs.
///
/// Deterministic apart from `clock`, which stamps both `created` and `updated`.
pub fn synthesize_package(inputs: &Inputs, clock: &dyn Clock) -> PromptPackage {
    let timestamp = format_timestamp(clock.now());
    let header = Header {
        name: inputs.project_name.clone(),
        version: PACKAGE_VERSION.to_string(),
        status: PACKAGE_STATUS.to_string(),
        created: timestamp.clone(),
        updated: timestamp,
    };

    let style_choices = inputs.style_choices.clone().unwrap_or_default();
    let blocks = vec![
        Block::new(
            SYSTEM_MISSION_ID,
            "system",
            format!("{MISSION_PREFIX}{}", inputs.end_goals),
        ),
        Block::new(STYLE_TONE_ID, "developer", compact_json(&style_choices)),
    ];

    let assembly = match &inputs.assembly_order {
        Some(order) => order.clone(),
        None => blocks.iter().map(|block| block.id.clone()).collect(),
    };

    PromptPackage {
        header,
        interfaces: Map::new(),
        blocks,
        assembly,
        variables: inputs.variables.clone().unwrap_or_default(),
        style_guide: style_choices,
        tests: vec!["Happy path".to_string()],
        changelog: vec![format!("{PACKAGE_VERSION} Initial")],
    }
}

/// Flatten a package into one prompt string following its assembly order.
pub fn render_single_prompt(pkg: &PromptPackage) -> String {
    pkg.assembly
        .iter()
        .map(|id| {
            pkg.blocks
                .iter()
                .find(|block| &block.id == id)
                .map(|block| block.content.as_str())
                .unwrap_or("")
        })
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

#[cfg(test)]
#[path = "synthesize_tests.rs"]
mod tests;
