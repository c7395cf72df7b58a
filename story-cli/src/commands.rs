//! Subcommand handlers. Each returns a user-facing error message on failure.

use std::path::PathBuf;

use story_babel::publish::{publish, PublishArtifact, PublishSpec};
use story_config::StoryConfig;
use story_parser::story::loader::DocumentLoader;
use story_parser::{Document, ParseOptions, StoryType};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Html,
    Json,
}

impl Target {
    fn format(self) -> &'static str {
        match self {
            Target::Html => "html",
            Target::Json => "json",
        }
    }
}

fn load(input: &str, config: &StoryConfig) -> Result<(Document, String), String> {
    let loader = DocumentLoader::from_path(input)
        .map_err(|e| e.to_string())?
        .with_options(ParseOptions::from(config.parsing));
    let doc = loader.parse().map_err(|e| e.to_string())?;
    let stem = doc
        .file_stem()
        .or_else(|| loader.source_stem())
        .unwrap_or_else(|| "story".to_string());
    Ok((doc, stem))
}

/// Where the output lands when `-o` is not given.
fn default_output(target: Target, doc: &Document, stem: &str, config: &StoryConfig) -> PathBuf {
    match target {
        Target::Html => {
            let name = doc.output_file_name();
            let name = if name.is_empty() {
                format!("{stem}.html")
            } else {
                name
            };
            config.output.html_dir.join(name)
        }
        Target::Json => config.output.json_dir.join(format!("{stem}.json")),
    }
}

pub fn handle_publish_command(
    target: Target,
    input: &str,
    output: Option<&str>,
    to_stdout: bool,
    config: &StoryConfig,
) -> Result<(), String> {
    let (doc, stem) = load(input, config)?;
    for diagnostic in &doc.diagnostics {
        debug!(%diagnostic, "lint");
    }

    let html = &config.html;
    let mut spec = PublishSpec::new(&doc, target.format())
        .with_option("site-name", html.site_name.as_str())
        .with_option("site-url", html.site_url.as_str())
        .with_option("asset-prefix", html.asset_prefix.as_str())
        .with_option("story-json-dir", html.story_json_dir.as_str())
        .with_option("story-stem", stem.as_str())
        .with_overwrite(config.output.overwrite);

    if !to_stdout {
        let path = output
            .map(PathBuf::from)
            .unwrap_or_else(|| default_output(target, &doc, &stem, config));
        spec = spec.with_output_path(path);
    }

    match publish(spec).map_err(|e| e.to_string())?.artifact {
        PublishArtifact::InMemory(text) => print!("{}", text),
        PublishArtifact::File(path) => {
            info!(path = %path.display(), "published");
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

pub fn handle_check_command(input: &str, config: &StoryConfig) -> Result<(), String> {
    let (doc, _) = load(input, config)?;

    for diagnostic in &doc.diagnostics {
        println!("{}", diagnostic);
    }

    let body = match doc.story_type {
        StoryType::Simple => format!("{} entries", doc.entries().len()),
        StoryType::Dice => format!("{} scenes", doc.scenes().len()),
    };
    println!(
        "{}: {} story, {} characters, {}, {} diagnostics",
        input,
        doc.story_type,
        doc.characters.len(),
        body,
        doc.diagnostics.len()
    );
    Ok(())
}
