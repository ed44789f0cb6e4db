//! Catalog of reusable prompt blocks.
//!
//! Each renderer is a pure function from [`BlockParams`] to a [`Block`]. The
//! synthesizer does not pull from this catalog; callers compose catalog
//! blocks themselves.
use crate::schema::Block;
use serde_json::Value;

const DEVELOPER_ROLE: &str = "developer";

pub const DEFAULT_TONE: &str = "direct, technical, concise";
pub const DEFAULT_OUTPUT_CONTRACT: &str = "Define output format.";

/// Optional parameters shared by the catalog renderers. Each renderer reads
/// only the field it needs.
#[derive(Debug, Clone, Default)]
pub struct BlockParams {
    pub tone: Option<String>,
    pub goals: Option<String>,
    pub variables: Option<Vec<Value>>,
}

pub fn error_handling(_params: &BlockParams) -> Block {
    Block::new(
        "error-handling",
        DEVELOPER_ROLE,
        "Show clear errors and recovery steps.",
    )
}

pub fn evaluation_checklist(_params: &BlockParams) -> Block {
    Block::new(
        "evaluation-checklist",
        DEVELOPER_ROLE,
        "Review mission, variables, assembly, tests, and style.",
    )
}

pub fn io_variables(params: &BlockParams) -> Block {
    let variables = params.variables.as_deref().unwrap_or_default();
    Block::new("io-variables", DEVELOPER_ROLE, compact_json(variables))
}

pub fn output_contract(params: &BlockParams) -> Block {
    let content = params.goals.as_deref().unwrap_or(DEFAULT_OUTPUT_CONTRACT);
    Block::new("output-contract", DEVELOPER_ROLE, content)
}

pub fn reasoning_discipline(_params: &BlockParams) -> Block {
    Block::new(
        "reasoning-discipline",
        DEVELOPER_ROLE,
        "Think step by step with clear reasoning.",
    )
}

pub fn safety_guardrails(_params: &BlockParams) -> Block {
    Block::new(
        "safety-guardrails",
        DEVELOPER_ROLE,
        "Follow safety best practices.",
    )
}

pub fn style_tone(params: &BlockParams) -> Block {
    let content = params.tone.as_deref().unwrap_or(DEFAULT_TONE);
    Block::new("style-tone", DEVELOPER_ROLE, content)
}

/// Compact JSON, matching what the package stores for maps and lists.
pub(crate) fn compact_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    // Serializing `serde_json::Value` trees into a String cannot fail.
    serde_json::to_string(value).unwrap_or_default()
}

/// Named entry in the renderer catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogBlock {
    ErrorHandling,
    EvaluationChecklist,
    IoVariables,
    OutputContract,
    ReasoningDiscipline,
    SafetyGuardrails,
    StyleTone,
}

impl CatalogBlock {
    pub const ALL: [CatalogBlock; 7] = [
        CatalogBlock::ErrorHandling,
        CatalogBlock::EvaluationChecklist,
        CatalogBlock::IoVariables,
        CatalogBlock::OutputContract,
        CatalogBlock::ReasoningDiscipline,
        CatalogBlock::SafetyGuardrails,
        CatalogBlock::StyleTone,
    ];

    pub fn id(self) -> &'static str {
        match self {
            CatalogBlock::ErrorHandling => "error-handling",
            CatalogBlock::EvaluationChecklist => "evaluation-checklist",
            CatalogBlock::IoVariables => "io-variables",
            CatalogBlock::OutputContract => "output-contract",
            CatalogBlock::ReasoningDiscipline => "reasoning-discipline",
            CatalogBlock::SafetyGuardrails => "safety-guardrails",
            CatalogBlock::StyleTone => "style-tone",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|block| block.id() == id)
    }

    pub fn render(self, params: &BlockParams) -> Block {
        match self {
            CatalogBlock::ErrorHandling => error_handling(params),
            CatalogBlock::EvaluationChecklist => evaluation_checklist(params),
            CatalogBlock::IoVariables => io_variables(params),
            CatalogBlock::OutputContract => output_contract(params),
            CatalogBlock::ReasoningDiscipline => reasoning_discipline(params),
            CatalogBlock::SafetyGuardrails => safety_guardrails(params),
            CatalogBlock::StyleTone => style_tone(params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn catalog_ids_match_rendered_ids() {
        let params = BlockParams::default();
        for entry in CatalogBlock::ALL {
            let block = entry.render(&params);
            assert_eq!(block.id, entry.id());
            assert_eq!(block.role.as_deref(), Some("developer"));
            assert_eq!(CatalogBlock::from_id(entry.id()), Some(entry));
        }
    }

    #[test]
    fn unknown_catalog_id_is_none() {
        assert_eq!(CatalogBlock::from_id("system-mission"), None);
    }

    #[test]
    fn parameterized_blocks_fall_back_to_defaults() {
        let params = BlockParams::default();
        assert_eq!(style_tone(&params).content, DEFAULT_TONE);
        assert_eq!(output_contract(&params).content, DEFAULT_OUTPUT_CONTRACT);
        assert_eq!(io_variables(&params).content, "[]");
    }

    #[test]
    fn parameterized_blocks_use_caller_values() {
        let params = BlockParams {
            tone: Some("formal".to_string()),
            goals: Some("Return a JSON object.".to_string()),
            variables: Some(vec![json!({"name": "user", "type": "string"})]),
        };
        assert_eq!(style_tone(&params).content, "formal");
        assert_eq!(output_contract(&params).content, "Return a JSON object.");
        assert_eq!(
            io_variables(&params).content,
            r#"[{"name":"user","type":"string"}]"#
        );
    }

    #[test]
    fn fixed_blocks_ignore_params() {
        let params = BlockParams {
            tone: Some("ignored".to_string()),
            ..BlockParams::default()
        };
        assert_eq!(
            error_handling(&params).content,
            "Show clear errors and recovery steps."
        );
        assert_eq!(
            evaluation_checklist(&params).content,
            "Review mission, variables, assembly, tests, and style."
        );
        assert_eq!(
            reasoning_discipline(&params).content,
            "Think step by step with clear reasoning."
        );
        assert_eq!(
            safety_guardrails(&params).content,
            "Follow safety best practices."
        );
    }
}
