use std::fmt;
use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ContentError;

/// Languages we know how to highlight. Anything else fails at construction
/// instead of silently rendering as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Swift,
    Diff,
    Text,
    Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSizing {
    FullWidth,
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxKind {
    Tip,
    Warning,
    Preamble,
    Correction,
}

impl Language {
    pub fn from_tag(tag: &str) -> Result<Language, ContentError> {
        match tag {
            "swift" => Ok(Language::Swift),
            "diff" => Ok(Language::Diff),
            "text" => Ok(Language::Text),
            "shell" => Ok(Language::Shell),
            _ => Err(ContentError::UnsupportedLanguage(tag.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Swift => "swift",
            Language::Diff => "diff",
            Language::Text => "text",
            Language::Shell => "shell",
        }
    }
}

impl ImageSizing {
    pub fn from_tag(tag: &str) -> Result<ImageSizing, ContentError> {
        match tag {
            "full_width" | "full-width" => Ok(ImageSizing::FullWidth),
            "inline" => Ok(ImageSizing::Inline),
            _ => Err(ContentError::UnknownSizing(tag.to_string())),
        }
    }
}

impl BoxKind {
    pub fn from_tag(tag: &str) -> Result<BoxKind, ContentError> {
        match tag {
            "tip" => Ok(BoxKind::Tip),
            "warning" => Ok(BoxKind::Warning),
            "preamble" => Ok(BoxKind::Preamble),
            "correction" => Ok(BoxKind::Correction),
            _ => Err(ContentError::UnknownBoxKind(tag.to_string())),
        }
    }
}

/// One renderable unit of a post body. Exactly one variant is active; a
/// block cannot be both code and image, and a renderer that forgets a
/// variant does not compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockBody {
    Paragraph { text: String },
    Code { text: String, language: Language },
    Image { source: String, sizing: ImageSizing },
    Box { text: String, kind: BoxKind },
}

/// A body plus the optional timecode used to tie transcript blocks to a
/// point in an associated video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(flatten)]
    pub body: BlockBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timecode: Option<u32>,
}

impl ContentBlock {
    pub fn paragraph(text: &str) -> ContentBlock {
        ContentBlock {
            body: BlockBody::Paragraph { text: text.to_string() },
            timecode: None,
        }
    }

    pub fn code(text: &str, language: Language) -> ContentBlock {
        ContentBlock {
            body: BlockBody::Code { text: text.to_string(), language },
            timecode: None,
        }
    }

    /// Fails if the source is neither an http(s) URL nor a path.
    pub fn image(source: &str, sizing: ImageSizing) -> Result<ContentBlock, ContentError> {
        if !is_valid_image_source(source) {
            return Err(ContentError::InvalidImageSource(source.to_string()));
        }
        Ok(ContentBlock {
            body: BlockBody::Image { source: source.to_string(), sizing },
            timecode: None,
        })
    }

    // `box` is a reserved word
    pub fn boxed(text: &str, kind: BoxKind) -> ContentBlock {
        ContentBlock {
            body: BlockBody::Box { text: text.to_string(), kind },
            timecode: None,
        }
    }

    pub fn with_timecode(mut self, seconds: u32) -> ContentBlock {
        self.timecode = Some(seconds);
        self
    }

    /// Exhaustive case analysis. Adding a variant to `BlockBody` breaks
    /// every caller, which is the point.
    pub fn fold<R>(
        &self,
        paragraph: impl FnOnce(&str) -> R,
        code: impl FnOnce(&str, Language) -> R,
        image: impl FnOnce(&str, ImageSizing) -> R,
        boxed: impl FnOnce(&str, BoxKind) -> R,
    ) -> R {
        match &self.body {
            BlockBody::Paragraph { text } => paragraph(text),
            BlockBody::Code { text, language } => code(text, *language),
            BlockBody::Image { source, sizing } => image(source, *sizing),
            BlockBody::Box { text, kind } => boxed(text, *kind),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn is_valid_image_source(source: &str) -> bool {
    lazy_static! {
        static ref IMAGE_SRC_REGEX: Regex = Regex::new(
            r"^(https?://\S+|[A-Za-z0-9._~%/-]+)$"
        ).unwrap();
    }
    IMAGE_SRC_REGEX.is_match(source)
}
