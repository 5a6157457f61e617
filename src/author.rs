use std::fmt;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::errors::ContentError;

/// The set of people allowed to sign a post. Closed on purpose: a post file
/// referencing a tag outside this list is rejected at load time instead of
/// rendering with a made-up byline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorTag {
    /// Shared house pseudonym for unsigned announcements.
    Team,
    Chris,
    Florian,
    Juul,
}

pub struct Author {
    pub tag: AuthorTag,
    pub name: &'static str,
    pub profile_url: Option<&'static str>,
}

impl AuthorTag {
    pub const ALL: [AuthorTag; 4] = [
        AuthorTag::Team,
        AuthorTag::Chris,
        AuthorTag::Florian,
        AuthorTag::Juul,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorTag::Team => "team",
            AuthorTag::Chris => "chris",
            AuthorTag::Florian => "florian",
            AuthorTag::Juul => "juul",
        }
    }
}

impl Display for AuthorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Looks an author up by the tag string used in post files.
pub fn resolve(tag: &str) -> Result<AuthorTag, ContentError> {
    match tag {
        "team" => Ok(AuthorTag::Team),
        "chris" => Ok(AuthorTag::Chris),
        "florian" => Ok(AuthorTag::Florian),
        "juul" => Ok(AuthorTag::Juul),
        _ => Err(ContentError::UnknownAuthor(tag.to_string())),
    }
}

pub fn profile(tag: AuthorTag) -> Author {
    match tag {
        AuthorTag::Team => Author {
            tag,
            name: "The Team",
            profile_url: None,
        },
        AuthorTag::Chris => Author {
            tag,
            name: "Chris",
            profile_url: Some("/about#chris"),
        },
        AuthorTag::Florian => Author {
            tag,
            name: "Florian",
            profile_url: Some("/about#florian"),
        },
        AuthorTag::Juul => Author {
            tag,
            name: "Juul",
            profile_url: Some("/about#juul"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_tags() {
        for tag in AuthorTag::ALL {
            assert_eq!(resolve(tag.as_str()), Ok(tag));
        }
    }

    #[test]
    fn test_resolve_unknown_tag() {
        let res = resolve("someone-else");
        assert_eq!(res, Err(ContentError::UnknownAuthor("someone-else".to_string())));
    }

    #[test]
    fn test_profile_round_trip() {
        for tag in AuthorTag::ALL {
            assert_eq!(profile(tag).tag, tag);
        }
    }
}
