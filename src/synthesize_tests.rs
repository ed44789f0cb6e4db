use super::{render_single_prompt, synthesize_package};
use crate::clock::{FixedClock, SystemClock};
use crate::schema::{Block, Inputs};
use chrono::{TimeZone, Utc};
use serde_json::json;

fn fixed_clock() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0)
            .single()
            .expect("valid instant"),
    )
}

fn demo_inputs() -> Inputs {
    Inputs::new("Demo", "Do things")
}

#[test]
fn builds_package_and_renders_prompt() {
    let pkg = synthesize_package(&demo_inputs(), &fixed_clock());

    assert_eq!(pkg.header.name, "Demo");
    assert_eq!(pkg.header.version, "0.1.0");
    assert_eq!(pkg.header.status, "draft");
    assert_eq!(pkg.header.created, "2026-10-18T09:30:00.000Z");
    assert_eq!(pkg.header.created, pkg.header.updated);

    let ids: Vec<&str> = pkg.blocks.iter().map(|block| block.id.as_str()).collect();
    assert_eq!(ids, ["system-mission", "style-tone"]);
    assert_eq!(pkg.blocks[0].role.as_deref(), Some("system"));
    assert_eq!(pkg.blocks[1].role.as_deref(), Some("developer"));
    assert_eq!(pkg.assembly, ["system-mission", "style-tone"]);

    assert!(pkg.interfaces.is_empty());
    assert!(pkg.variables.is_empty());
    assert!(pkg.style_guide.is_empty());
    assert_eq!(pkg.tests, ["Happy path"]);
    assert_eq!(pkg.changelog, ["0.1.0 Initial"]);

    assert_eq!(render_single_prompt(&pkg), "You are Codex. Do things\n\n{}");
}

#[test]
fn prompt_always_contains_end_goals() {
    for goals in ["", "Ship it", "multi\nline goals", "{\"json\": true}"] {
        let pkg = synthesize_package(&Inputs::new("P", goals), &fixed_clock());
        assert!(render_single_prompt(&pkg).contains(goals));
    }
}

#[test]
fn style_choices_change_only_style_content() {
    let base = synthesize_package(&demo_inputs(), &fixed_clock());

    let mut inputs = demo_inputs();
    inputs.style_choices = json!({"tone": "formal"}).as_object().cloned();
    let styled = synthesize_package(&inputs, &fixed_clock());

    assert_eq!(styled.blocks[1].content, r#"{"tone":"formal"}"#);
    assert_eq!(styled.blocks[0], base.blocks[0]);
    assert_eq!(styled.header, base.header);
    assert_eq!(styled.assembly, base.assembly);
    assert_eq!(styled.style_guide.get("tone"), Some(&json!("formal")));
}

#[test]
fn style_choices_keep_insertion_order() {
    let mut inputs = demo_inputs();
    inputs.style_choices = json!({"tone": "formal", "length": "short", "audience": "ops"})
        .as_object()
        .cloned();
    let pkg = synthesize_package(&inputs, &fixed_clock());
    assert_eq!(
        pkg.blocks[1].content,
        r#"{"tone":"formal","length":"short","audience":"ops"}"#
    );
}

#[test]
fn variables_are_copied_verbatim() {
    let mut inputs = demo_inputs();
    let variables = vec![json!({"name": "user"}), json!(42), json!(null)];
    inputs.variables = Some(variables.clone());
    let pkg = synthesize_package(&inputs, &fixed_clock());
    assert_eq!(pkg.variables, variables);
}

#[test]
fn explicit_assembly_order_is_used_verbatim() {
    let mut inputs = demo_inputs();
    inputs.assembly_order = Some(vec!["style-tone".to_string(), "system-mission".to_string()]);
    let pkg = synthesize_package(&inputs, &fixed_clock());
    assert_eq!(pkg.assembly, ["style-tone", "system-mission"]);
    assert_eq!(render_single_prompt(&pkg), "{}\n\nYou are Codex. Do things");
}

#[test]
fn unknown_assembly_id_renders_empty_segment() {
    let mut inputs = demo_inputs();
    inputs.assembly_order = Some(vec![
        "system-mission".to_string(),
        "missing".to_string(),
        "style-tone".to_string(),
    ]);
    let pkg = synthesize_package(&inputs, &fixed_clock());
    assert_eq!(
        render_single_prompt(&pkg),
        "You are Codex. Do things\n\n\n\n{}"
    );
}

#[test]
fn empty_assembly_renders_empty_prompt() {
    let mut inputs = demo_inputs();
    inputs.assembly_order = Some(Vec::new());
    let pkg = synthesize_package(&inputs, &fixed_clock());
    assert_eq!(render_single_prompt(&pkg), "");
}

#[test]
fn duplicate_block_ids_resolve_to_first_declared() {
    let mut pkg = synthesize_package(&demo_inputs(), &fixed_clock());
    pkg.blocks.push(Block::new("system-mission", "system", "shadowed"));
    let prompt = render_single_prompt(&pkg);
    assert!(prompt.starts_with("You are Codex. Do things"));
    assert!(!prompt.contains("shadowed"));
}

#[test]
fn flattening_is_idempotent() {
    let pkg = synthesize_package(&demo_inputs(), &SystemClock);
    assert_eq!(render_single_prompt(&pkg), render_single_prompt(&pkg));
}

#[test]
fn fixed_clock_gives_identical_json() {
    let first = synthesize_package(&demo_inputs(), &fixed_clock());
    let second = synthesize_package(&demo_inputs(), &fixed_clock());
    assert_eq!(
        serde_json::to_string_pretty(&first).expect("serialize first"),
        serde_json::to_string_pretty(&second).expect("serialize second")
    );
}

#[test]
fn missing_required_fields_propagate_as_empty() {
    let pkg = synthesize_package(&Inputs::default(), &fixed_clock());
    assert_eq!(pkg.header.name, "");
    assert_eq!(render_single_prompt(&pkg), "You are Codex. \n\n{}");
}

#[test]
fn unconsumed_inputs_do_not_leak_into_package() {
    let mut inputs = demo_inputs();
    inputs.reusable_blocks = Some(vec!["safety-guardrails".to_string()]);
    inputs.constraints = json!({"max_tokens": 100}).as_object().cloned();
    inputs.inspirations = Some(vec![json!("some site")]);
    let pkg = synthesize_package(&inputs, &fixed_clock());
    assert_eq!(pkg, synthesize_package(&demo_inputs(), &fixed_clock()));
}

#[test]
fn package_json_uses_uppercase_top_level_keys_in_order() {
    let pkg = synthesize_package(&demo_inputs(), &fixed_clock());
    let value = serde_json::to_value(&pkg).expect("serialize package");
    let keys: Vec<&str> = value
        .as_object()
        .expect("package object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        [
            "HEADER",
            "INTERFACES",
            "BLOCKS",
            "ASSEMBLY",
            "VARIABLES",
            "STYLE_GUIDE",
            "TESTS",
            "CHANGELOG"
        ]
    );
}
