#![deny(missing_docs)]

//! # Generate Command
//!
//! Reads an OpenAPI/Swagger document and writes the Basic and Complex
//! pydantic modules.
//!
//! 1. **Load**: parse `components.schemas` (or Swagger 2 `definitions`).
//! 2. **Generate**: extract and classify every schema.
//! 3. **Render**: build both module texts in memory.
//! 4. **Write**: stage and persist both files (skipped with `--dry-run`).

use crate::error::{CliError, CliResult};
use crate::writer::{write_modules, PendingFile};
use std::fs;
use std::path::{Component, Path, PathBuf};
use swagger_models_core::{
    generate_from_document, EmitterConfig, GenerationOutput, GeneratorConfig, ModelRepresentation,
    TypeTable,
};

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the OpenAPI/Swagger document (JSON or YAML).
    #[clap(long, env = "SWAGGER_MODELS_INPUT", default_value = "Files/known_swagger2.json")]
    pub input: PathBuf,

    /// Directory receiving the generated modules.
    #[clap(long, env = "SWAGGER_MODELS_OUTPUT_DIR", default_value = "Files")]
    pub output_dir: PathBuf,

    /// Module name (without extension) for models without references.
    #[clap(long, default_value = "BasicModels")]
    pub basic_module: String,

    /// Module name (without extension) for models referencing other models.
    #[clap(long, default_value = "ComplexModels")]
    pub complex_module: String,

    /// Dotted import path of the basic module used by the complex module.
    /// Derived from `--output-dir` when omitted (e.g. `Files.BasicModels`).
    #[clap(long)]
    pub basic_import_path: Option<String>,

    /// Target type for OpenAPI `number` (defaults to `int`).
    #[clap(long, env = "SWAGGER_MODELS_NUMBER_TYPE")]
    pub number_type: Option<String>,

    /// Print a JSON summary of the classification instead of writing files.
    #[clap(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        if let Some(number_type) = &self.number_type {
            config.types = TypeTable::default().with_mapping("number", number_type);
        }
        config
    }

    fn emitter_config(&self) -> EmitterConfig {
        let basic_module_path = self.basic_import_path.clone().unwrap_or_else(|| {
            if !is_package_relative(&self.output_dir) {
                tracing::warn!(
                    output_dir = %self.output_dir.display(),
                    "output directory is not relative to the working directory; \
                     the derived import path is unlikely to be importable, \
                     pass --basic-import-path"
                );
            }
            module_path(&self.output_dir, &self.basic_module)
        });
        EmitterConfig {
            basic_module_path,
            ..EmitterConfig::default()
        }
    }
}

/// Builds a dotted module path from a directory and a module name.
///
/// e.g. `Files/Models` + `BasicModels` -> `Files.Models.BasicModels`
fn module_path(dir: &Path, module: &str) -> String {
    let mut parts: Vec<String> = dir
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    parts.push(module.to_string());
    parts.join(".")
}

/// Whether every component of `dir` can appear in a dotted import path.
///
/// Roots, prefixes and `..` are dropped by [`module_path`], so a path
/// containing them does not name the package it points to.
fn is_package_relative(dir: &Path) -> bool {
    dir.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Executes the generation.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    if !args.input.exists() {
        return Err(CliError::General(format!(
            "Input document not found: {:?}",
            args.input
        )));
    }

    let content = fs::read_to_string(&args.input)?;
    tracing::info!(input = %args.input.display(), "generating models");

    let (output, rendered) =
        generate_from_document(&content, &args.generator_config(), &args.emitter_config())?;

    if args.dry_run {
        println!("{}", summary(&output));
        return Ok(());
    }

    let files = [
        PendingFile {
            file_name: format!("{}.py", args.basic_module),
            content: &rendered.basic,
        },
        PendingFile {
            file_name: format!("{}.py", args.complex_module),
            content: &rendered.complex,
        },
    ];
    for path in write_modules(&args.output_dir, &files)? {
        println!("Generated {:?}", path);
    }

    Ok(())
}

/// Category summary printed by `--dry-run`.
fn summary(output: &GenerationOutput) -> String {
    let value = serde_json::json!({
        "basic": model_names(&output.catalog.basic),
        "complex": model_names(&output.catalog.complex),
        "imports": {
            "enum": output.imports.enum_support,
            "datetime": output.imports.datetime_support,
        },
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

fn model_names(models: &[ModelRepresentation]) -> Vec<String> {
    models.iter().map(|m| m.name.clone()).collect()
}
