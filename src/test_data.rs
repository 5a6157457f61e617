#![cfg(test)]

use chrono::{TimeZone, Utc};

use crate::author::AuthorTag;
use crate::block::{ContentBlock, Language};
use crate::post::{BlogPost, PostId};

pub fn sample_post(id: u32, epoch_secs: i64, title: &str) -> BlogPost {
    BlogPost {
        id: PostId(id),
        title: title.to_string(),
        blurb: "A short summary".to_string(),
        author: AuthorTag::Chris,
        published_at: Utc.timestamp_opt(epoch_secs, 0).unwrap(),
        cover_image: None,
        draft: false,
        blocks: vec![
            ContentBlock::paragraph("Intro"),
            ContentBlock::code("let x = 1", Language::Swift),
        ],
    }
}

pub const POST_DATA: &str = r##"[post]
id = 43
title = "Changes to String in Swift 5"
blurb = "What the new release means for your code"
author = "florian"
published_at = 1589950800
cover_image = "/images/string-5.png"

[[block]]
type = "paragraph"
text = "Swift 5 changes the internal encoding of `String` to UTF-8."

[[block]]
type = "code"
language = "swift"
text = "let greeting = \"Hello\""
timecode = 95

[[block]]
type = "image"
source = "/images/memory-layout.png"
sizing = "full_width"

[[block]]
type = "box"
kind = "correction"
text = "An earlier version of this post showed the Swift 4 layout."
"##;

pub const DRAFT_POST_DATA: &str = r##"[post]
id = 44
title = "Untitled"
blurb = "TODO"
author = "team"
published_at = 1589950800

[[block]]
type = "paragraph"
text = "Notes to self."
"##;

pub const BAD_AUTHOR_POST_DATA: &str = r##"[post]
id = 45
title = "Guest post"
blurb = "A guest writes in"
author = "guest"
published_at = 1589950800
"##;

pub const BAD_LANGUAGE_POST_DATA: &str = r##"[post]
id = 46
title = "Obfuscation tricks"
blurb = "Some code"
author = "chris"
published_at = 1589950800

[[block]]
type = "code"
language = "brainfuck"
text = "++++"
"##;
