use crate::blocks::{BlockParams, CatalogBlock};
use crate::cli::{BlocksArgs, GenerateArgs, InitArgs, RenderArgs, ServeArgs};
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::{self, ConfigSource, GeneratorConfig};
use crate::interactive::{fill_required, LinePrompter, Prompter};
use crate::output::{read_package, write_artifacts};
use crate::schema::{Block, Inputs};
use crate::synthesize::{render_single_prompt, synthesize_package};
use crate::web;
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub fn run_generate(args: GenerateArgs) -> Result<()> {
    let source = config::resolve_config_source(args.config.as_deref());
    tracing::debug!(?source, "resolved config source");
    let config = config::load_effective_config(&source)?;

    let mut inputs = build_inputs(&args, &config)?;
    let mut line_prompter = LinePrompter::default();
    let prompter: Option<&mut dyn Prompter> = if args.no_input {
        None
    } else {
        Some(&mut line_prompter)
    };
    fill_required(&mut inputs, prompter)?;

    let clock = clock_for(args.timestamp.as_deref())?;
    let pkg = synthesize_package(&inputs, clock.as_ref());
    let prompt = render_single_prompt(&pkg);

    let out_dir = resolve_out_dir(&args, &config);
    write_artifacts(&out_dir, &pkg, &prompt)?;
    tracing::info!(
        project = %pkg.header.name,
        blocks = pkg.blocks.len(),
        out_dir = %out_dir.display(),
        "generated prompt package"
    );
    println!("Generated prompt_package.json, prompt_package.md, and single_prompt.txt");
    Ok(())
}

pub fn run_render(args: RenderArgs) -> Result<()> {
    let pkg = read_package(&args.package)?;
    let missing: Vec<&str> = pkg
        .assembly
        .iter()
        .filter(|id| !pkg.blocks.iter().any(|block| &block.id == *id))
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        tracing::warn!(?missing, "assembly references unknown blocks; rendering empty segments");
    }
    println!("{}", render_single_prompt(&pkg));
    Ok(())
}

pub fn run_blocks(args: BlocksArgs) -> Result<()> {
    let params = BlockParams {
        tone: args.tone.clone(),
        goals: args.goals.clone(),
        variables: args.variables.as_deref().map(read_variables).transpose()?,
    };
    let blocks = catalog_blocks(args.id.as_deref(), &params)?;
    if args.json {
        let json = serde_json::to_string_pretty(&blocks).context("serialize blocks")?;
        println!("{json}");
        return Ok(());
    }
    for block in &blocks {
        println!(
            "{}\t{}\t{}",
            block.id,
            block.role.as_deref().unwrap_or("-"),
            block.content
        );
    }
    Ok(())
}

pub fn run_init(args: InitArgs) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => config::user_config_path()
            .ok_or_else(|| anyhow!("no user config directory; pass --path"))?,
    };
    if path.is_file() && !args.force {
        return Err(anyhow!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    config::write_config(&path, &config::default_config())?;
    println!("wrote {}", path.display());
    Ok(())
}

pub fn run_serve(args: ServeArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("start async runtime")?;
    let state = web::AppState::new(Arc::new(SystemClock));
    runtime.block_on(web::serve(args.addr, state))
}

/// Merge flags over config defaults. Required fields stay blank when absent
/// so the caller can decide whether to prompt.
pub(crate) fn build_inputs(args: &GenerateArgs, config: &GeneratorConfig) -> Result<Inputs> {
    let mut style_choices = config.style_choices.clone();
    if !args.style.is_empty() {
        let map = style_choices.get_or_insert_with(Map::new);
        for pair in &args.style {
            let (key, value) = parse_style_pair(pair)?;
            map.insert(key, value);
        }
    }

    let variables = match &args.variables {
        Some(path) => Some(read_variables(path)?),
        None => config.variables.clone(),
    };

    Ok(Inputs {
        project_name: args.project_name.clone().unwrap_or_default(),
        target_framework: args
            .target_framework
            .clone()
            .unwrap_or_else(|| config.target_framework.clone()),
        output_target: args
            .output_target
            .clone()
            .unwrap_or_else(|| config.output_target.clone()),
        style_choices,
        inspirations: None,
        audience: args
            .audience
            .clone()
            .unwrap_or_else(|| config.audience.clone()),
        end_goals: args.end_goals.clone().unwrap_or_default(),
        constraints: None,
        variables,
        reusable_blocks: None,
        assembly_order: args
            .assembly_order
            .clone()
            .or_else(|| config.assembly_order.clone()),
    })
}

fn parse_style_pair(raw: &str) -> Result<(String, Value)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid style choice {raw:?} (expected KEY=VALUE)"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("invalid style choice {raw:?} (empty key)"));
    }
    Ok((key.to_string(), Value::String(value.trim().to_string())))
}

fn read_variables(path: &Path) -> Result<Vec<Value>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read variables {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("parse variables JSON {}", path.display()))?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(anyhow!(
            "variables file {} must contain a JSON array",
            path.display()
        )),
    }
}

fn clock_for(timestamp: Option<&str>) -> Result<Box<dyn Clock>> {
    let Some(raw) = timestamp else {
        return Ok(Box::new(SystemClock));
    };
    let at = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("parse --timestamp {raw:?}"))?
        .with_timezone(&Utc);
    Ok(Box::new(FixedClock(at)))
}

fn resolve_out_dir(args: &GenerateArgs, config: &GeneratorConfig) -> PathBuf {
    args.out_dir
        .clone()
        .or_else(|| config.out_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn catalog_blocks(id: Option<&str>, params: &BlockParams) -> Result<Vec<Block>> {
    let Some(id) = id else {
        return Ok(CatalogBlock::ALL
            .into_iter()
            .map(|entry| entry.render(params))
            .collect());
    };
    let entry = CatalogBlock::from_id(id).ok_or_else(|| {
        let known: Vec<&str> = CatalogBlock::ALL.iter().map(|entry| entry.id()).collect();
        anyhow!("unknown block id {id:?} (known: {})", known.join(", "))
    })?;
    Ok(vec![entry.render(params)])
}
