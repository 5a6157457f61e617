use std::path::{Path, PathBuf};
use std::{fs, io};

use anyhow::{anyhow, bail, Context, Result};
use chrono::{TimeZone, Utc};
use serde::Deserialize;
use spdlog::{debug, info};

use crate::author;
use crate::block::{BlockBody, BoxKind, ContentBlock, ImageSizing, Language};
use crate::collection::PostCollection;
use crate::post::{BlogPost, PostId};

/// The shape of a post file before validation: every tag is still a
/// free-form string. Validation turns these into the closed enums and is
/// where bad data stops.
#[derive(Deserialize)]
struct RawPostFile {
    post: RawHeader,
    #[serde(default, rename = "block")]
    blocks: Vec<RawBlock>,
}

#[derive(Deserialize)]
struct RawHeader {
    id: u32,
    title: String,
    blurb: String,
    author: String,
    published_at: i64,
    cover_image: Option<String>,
    #[serde(default)]
    draft: bool,
}

#[derive(Deserialize)]
struct RawBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
    language: Option<String>,
    source: Option<String>,
    sizing: Option<String>,
    kind: Option<String>,
    timecode: Option<u32>,
}

pub fn parse_post(document: &str) -> Result<BlogPost> {
    let raw: RawPostFile = toml::from_str(document)?;

    let author = author::resolve(&raw.post.author)?;
    let published_at = Utc
        .timestamp_opt(raw.post.published_at, 0)
        .single()
        .ok_or_else(|| anyhow!("Invalid published_at timestamp {}", raw.post.published_at))?;

    let mut blocks = Vec::with_capacity(raw.blocks.len());
    for (index, block) in raw.blocks.iter().enumerate() {
        let block = validate_block(block)
            .with_context(|| format!("In block {} of post {}", index + 1, raw.post.id))?;
        blocks.push(block);
    }

    // An unfinished blurb marks the whole post as a draft
    let draft = raw.post.draft || raw.post.blurb == "TODO";

    Ok(BlogPost {
        id: PostId(raw.post.id),
        title: raw.post.title,
        blurb: raw.post.blurb,
        author,
        published_at,
        cover_image: raw.post.cover_image,
        draft,
        blocks,
    })
}

fn validate_block(raw: &RawBlock) -> Result<ContentBlock> {
    let text = || -> Result<&str> {
        raw.text.as_deref().ok_or_else(|| missing_field(&raw.block_type, "text"))
    };

    let body = match raw.block_type.as_str() {
        "paragraph" => BlockBody::Paragraph { text: text()?.to_string() },
        "code" => {
            let tag = raw.language.as_deref().ok_or_else(|| missing_field("code", "language"))?;
            BlockBody::Code {
                text: text()?.to_string(),
                language: Language::from_tag(tag)?,
            }
        }
        "image" => {
            let source = raw.source.as_deref().ok_or_else(|| missing_field("image", "source"))?;
            let tag = raw.sizing.as_deref().ok_or_else(|| missing_field("image", "sizing"))?;
            return Ok(apply_timecode(
                ContentBlock::image(source, ImageSizing::from_tag(tag)?)?,
                raw.timecode,
            ));
        }
        "box" => {
            let tag = raw.kind.as_deref().ok_or_else(|| missing_field("box", "kind"))?;
            BlockBody::Box {
                text: text()?.to_string(),
                kind: BoxKind::from_tag(tag)?,
            }
        }
        other => bail!("Unknown block type '{}'", other),
    };

    Ok(apply_timecode(ContentBlock { body, timecode: None }, raw.timecode))
}

fn apply_timecode(block: ContentBlock, timecode: Option<u32>) -> ContentBlock {
    match timecode {
        Some(seconds) => block.with_timecode(seconds),
        None => block,
    }
}

fn missing_field(block_type: &str, field: &str) -> anyhow::Error {
    anyhow!("A '{}' block requires a '{}' field", block_type, field)
}

fn list_post_files(posts_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = vec![];
    let entries = fs::read_dir(posts_dir)?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(file_name) = entry.file_name().to_str() {
            if file_name.ends_with(".toml") {
                files.push(entry.path());
            }
        }
    }
    // Deterministic load order, so duplicate-id reports are reproducible
    files.sort();
    Ok(files)
}

/// Reads every post file under `posts_dir` into a frozen collection. Any
/// invalid file or id collision fails the whole load; there is no partial
/// success.
pub fn load_dir(posts_dir: &Path) -> Result<PostCollection> {
    let files = list_post_files(posts_dir)
        .with_context(|| format!("Error listing posts in {}", posts_dir.display()))?;

    let mut collection = PostCollection::new();
    for file in &files {
        let document = fs::read_to_string(file)
            .with_context(|| format!("Error reading post file {}", file.display()))?;
        let post = parse_post(&document)
            .with_context(|| format!("Error parsing post file {}", file.display()))?;

        debug!("Loaded post id={} from {}", post.id, file.display());
        collection.insert(post)
            .with_context(|| format!("Error adding post from {}", file.display()))?;
    }

    info!("Loaded {} posts from {}", collection.len(), posts_dir.display());
    Ok(collection)
}
