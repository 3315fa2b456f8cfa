//=========================================================================
// Site Content
//=========================================================================
//
// The static structured document feeding every text-bearing surface:
// one copy block per supported language, consumed read-only at render
// time. Projects are immutable once loaded; which one is open in the
// modal is surface state, not content state.
//
// Optional narrative fields (challenges / learnings / impact) may be
// absent; the corresponding modal block is simply omitted. A missing
// locale or malformed document is a `ContentError`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::core::store::Language;

//=== Copy Blocks =========================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroCopy {
    pub name: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutCopy {
    pub bio: String,
    pub location: String,
    pub availability: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillsCopy {
    pub technical: Vec<String>,
    pub design: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactCopy {
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

//=== Project =============================================================

/// One gallery entry. `challenges`, `learnings` and `impact` are
/// optional narrative blocks shown in the modal when present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub year: String,
    pub description: String,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(default)]
    pub learnings: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
    pub image: String,
    pub tech: Vec<String>,
}

//=== LocaleContent =======================================================

/// Full copy set for one language.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocaleContent {
    pub hero: HeroCopy,
    pub about: AboutCopy,
    pub projects: Vec<Project>,
    pub skills: SkillsCopy,
    pub contact: ContactCopy,
}

//=== SiteContent =========================================================

/// The whole content document, keyed by language.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub fr: LocaleContent,
    pub en: LocaleContent,
}

impl SiteContent {
    /// Parses the document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        serde_json::from_str(json).map_err(ContentError::Parse)
    }

    /// Reads and parses the document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let json = fs::read_to_string(path).map_err(ContentError::Io)?;
        Self::from_json_str(&json)
    }

    /// Copy block for the given language.
    pub fn locale(&self, language: Language) -> &LocaleContent {
        match language {
            Language::Fr => &self.fr,
            Language::En => &self.en,
        }
    }

    /// Looks up a project by id in the given language.
    pub fn project(&self, language: Language, id: u32) -> Option<&Project> {
        self.locale(language).projects.iter().find(|p| p.id == id)
    }
}

//=== ContentError ========================================================

/// Failure to load the content document.
#[derive(Debug)]
pub enum ContentError {
    /// Document could not be read from disk.
    Io(std::io::Error),

    /// Document is not valid content JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "content document unreadable: {}", e),
            Self::Parse(e) => write!(f, "content document malformed: {}", e),
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

//=========================================================================
// Test Fixtures
//=========================================================================
//
// Shared by this module's tests and the end-to-end scenarios elsewhere
// in the crate.
//


//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::fixtures::{sample_content, sample_json};
    use super::*;

    #[test]
    fn sample_fixture_round_trips() {
        let content = SiteContent::from_json_str(&sample_json()).unwrap();
        assert_eq!(content, sample_content());
    }

    #[test]
    fn document_parses_per_language() {
        let content = sample_content();
        assert_eq!(content.locale(Language::Fr).hero.name, "Nfr");
        assert_eq!(content.locale(Language::En).hero.name, "Nen");
    }

    #[test]
    fn optional_narrative_fields_default_to_none() {
        let content = sample_content();
        let first = content.project(Language::Fr, 1).unwrap();
        assert_eq!(first.challenges, None);
        assert_eq!(first.impact, None);

        let third = content.project(Language::Fr, 3).unwrap();
        assert_eq!(third.challenges.as_deref(), Some("C3 fr"));
        assert_eq!(third.learnings.as_deref(), Some("L3 fr"));
        assert_eq!(third.impact, None);
    }

    #[test]
    fn project_lookup_by_id() {
        let content = sample_content();
        assert_eq!(content.project(Language::En, 3).unwrap().title, "Three en");
        assert!(content.project(Language::En, 99).is_none());
    }

    #[test]
    fn tech_tags_preserve_order() {
        let content = sample_content();
        let tags = &content.project(Language::Fr, 1).unwrap().tech;
        assert_eq!(tags.as_slice(), ["Rust", "WebGL"]);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let result = SiteContent::from_json_str("{ \"fr\": {} }");
        match result {
            Err(ContentError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = SiteContent::from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(ContentError::Io(_))));
    }
}
