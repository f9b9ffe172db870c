//! Records persisted by the storage gateway

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier shared by posts and resources
pub type RecordId = u64;

/// A published blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    /// Cover image path or URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Display-formatted creation date
    pub date: String,
}

/// Fields supplied when creating a post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

/// Partial update of a post; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    /// `Some(None)` clears the image
    pub image: Option<Option<String>>,
}

impl PostPatch {
    /// Patch that only changes the title
    #[allow(dead_code)]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Merge the present fields over `post`
    pub fn apply(self, post: &mut BlogPost) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(image) = self.image {
            post.image = image;
        }
    }
}

impl From<PostDraft> for PostPatch {
    fn from(draft: PostDraft) -> Self {
        Self {
            title: Some(draft.title),
            content: Some(draft.content),
            image: Some(draft.image),
        }
    }
}

/// Category tag of a downloadable resource
///
/// The set is open: unknown tags are kept as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceKind {
    Pdf,
    Audio,
    Video,
    Other(String),
}

impl ResourceKind {
    /// Tags offered by the resource form
    pub const KNOWN: [ResourceKind; 3] = [ResourceKind::Pdf, ResourceKind::Audio, ResourceKind::Video];

    pub fn as_str(&self) -> &str {
        match self {
            ResourceKind::Pdf => "pdf",
            ResourceKind::Audio => "audio",
            ResourceKind::Video => "video",
            ResourceKind::Other(tag) => tag.as_str(),
        }
    }

    /// Icon shown on resource cards
    pub fn icon(&self) -> &'static str {
        match self {
            ResourceKind::Audio => "\u{1F3B5}",
            ResourceKind::Video => "\u{1F3AC}",
            ResourceKind::Pdf | ResourceKind::Other(_) => "\u{1F4C4}",
        }
    }
}

impl Default for ResourceKind {
    fn default() -> Self {
        ResourceKind::Pdf
    }
}

impl From<String> for ResourceKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "pdf" => ResourceKind::Pdf,
            "audio" => ResourceKind::Audio,
            "video" => ResourceKind::Video,
            _ => ResourceKind::Other(tag),
        }
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A downloadable resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// Path or URL of the downloadable file
    pub file: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

/// Fields supplied when creating a resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDraft {
    pub title: String,
    pub description: String,
    pub file: String,
    pub kind: ResourceKind,
}

/// Partial update of a resource
#[allow(dead_code)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub file: Option<String>,
    pub kind: Option<ResourceKind>,
}

#[allow(dead_code)]
impl ResourcePatch {
    pub fn apply(self, resource: &mut Resource) {
        if let Some(title) = self.title {
            resource.title = title;
        }
        if let Some(description) = self.description {
            resource.description = description;
        }
        if let Some(file) = self.file {
            resource.file = file;
        }
        if let Some(kind) = self.kind {
            resource.kind = kind;
        }
    }
}

/// Site-wide contact configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Display name of the professional
    pub name: String,
    pub email: String,
    /// Messaging handle, international number without `+`
    pub whatsapp: String,
    /// Scheduling page URL
    pub calendly: String,
    /// Professional registration number
    pub colegiacion: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Dra. [Nombre Apellido]".to_string(),
            email: "contacto@ejemplo.com".to_string(),
            whatsapp: "34XXXXXXXXX".to_string(),
            calendly: "https://calendly.com/tu-usuario".to_string(),
            colegiacion: "XXXXX".to_string(),
        }
    }
}
