//! Page model the controller renders into
//!
//! Holds rendered output and form buffers only. Records themselves always
//! come from the storage gateway.

use std::collections::HashMap;
use std::fmt;

use crate::core::model::{PostDraft, PostPatch, RecordId, ResourceDraft, ResourceKind, SiteConfig};

use super::render::AdminRow;

/// Named containers whose inner markup is regenerated on every render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    BlogGrid,
    ResourcesGrid,
    AdminBlogList,
    AdminResourceList,
}

impl Target {
    /// Element id in the page markup
    pub fn element_id(self) -> &'static str {
        match self {
            Target::BlogGrid => "blog-grid",
            Target::ResourcesGrid => "resources-grid",
            Target::AdminBlogList => "blog-list",
            Target::AdminResourceList => "resource-list",
        }
    }
}

/// Admin panel sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Blog,
    Resources,
    Config,
}

impl AdminTab {
    pub const ALL: [AdminTab; 3] = [AdminTab::Blog, AdminTab::Resources, AdminTab::Config];

    /// Value of the tab button's `data-tab` attribute
    pub fn name(self) -> &'static str {
        match self {
            AdminTab::Blog => "blog",
            AdminTab::Resources => "resources",
            AdminTab::Config => "config",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Blog => "Blog",
            AdminTab::Resources => "Recursos",
            AdminTab::Config => "Configuración",
        }
    }

    #[cfg(test)]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.name() == name)
    }
}

impl fmt::Display for AdminTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Visibility of the admin modal and its sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdminPanel {
    pub open: bool,
    pub active: AdminTab,
}

impl AdminPanel {
    pub fn switch_to(&mut self, tab: AdminTab) {
        self.active = tab;
    }

    /// Class list of the button and content element of `tab`
    #[cfg(test)]
    pub fn class_for(&self, base: &str, tab: AdminTab) -> String {
        if tab == self.active {
            format!("{} active", base)
        } else {
            base.to_string()
        }
    }
}

/// Page elements bound to the site configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBindings {
    pub nav_logo: String,
    pub footer_heading: String,
    pub email_href: String,
    pub email_text: String,
    pub whatsapp_href: String,
    pub whatsapp_float_href: String,
    /// `data-url` of the scheduling widget
    pub calendly_url: String,
    pub registration: String,
}

impl ContactBindings {
    pub fn apply(&mut self, config: &SiteConfig) {
        let whatsapp = format!("https://wa.me/{}", config.whatsapp);
        self.nav_logo = config.name.clone();
        self.footer_heading = config.name.clone();
        self.email_href = format!("mailto:{}", config.email);
        self.email_text = config.email.clone();
        self.whatsapp_float_href = whatsapp.clone();
        self.whatsapp_href = whatsapp;
        self.calendly_url = config.calendly.clone();
        self.registration = format!("Nº Colegiación: {}", config.colegiacion);
    }
}

/// Post form fields, including the hidden id used when editing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub id: String,
    pub title: String,
    pub image: String,
    pub content: String,
}

impl PostForm {
    /// Parsed hidden id; blank means a new post
    pub fn editing_id(&self) -> Option<RecordId> {
        self.id.trim().parse().ok()
    }

    /// Fields the form itself insists on
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    fn image(&self) -> Option<String> {
        let image = self.image.trim();
        (!image.is_empty()).then(|| image.to_string())
    }

    pub fn draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            image: self.image(),
        }
    }

    pub fn patch(&self) -> PostPatch {
        PostPatch::from(self.draft())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Resource form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceForm {
    pub title: String,
    pub description: String,
    pub file: String,
    pub kind: ResourceKind,
}

impl ResourceForm {
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.file.trim().is_empty()
    }

    pub fn draft(&self) -> ResourceDraft {
        ResourceDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            file: self.file.clone(),
            kind: self.kind.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Config form fields, one per site configuration field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigForm {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub calendly: String,
    pub colegiacion: String,
}

impl ConfigForm {
    pub fn load(&mut self, config: &SiteConfig) {
        *self = Self {
            name: config.name.clone(),
            email: config.email.clone(),
            whatsapp: config.whatsapp.clone(),
            calendly: config.calendly.clone(),
            colegiacion: config.colegiacion.clone(),
        };
    }

    pub fn to_config(&self) -> SiteConfig {
        SiteConfig {
            name: self.name.clone(),
            email: self.email.clone(),
            whatsapp: self.whatsapp.clone(),
            calendly: self.calendly.clone(),
            colegiacion: self.colegiacion.clone(),
        }
    }
}

/// Everything the controller renders into
#[derive(Debug, Clone, Default)]
pub struct Page {
    containers: HashMap<Target, String>,
    pub admin_posts: Vec<AdminRow>,
    pub admin_resources: Vec<AdminRow>,
    pub contact: ContactBindings,
    pub post_form: PostForm,
    pub resource_form: ResourceForm,
    pub config_form: ConfigForm,
    pub admin: AdminPanel,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the inner markup of `target`
    pub fn set_inner_html(&mut self, target: Target, html: String) {
        tracing::debug!("Rendered #{} ({} bytes)", target.element_id(), html.len());
        self.containers.insert(target, html);
    }

    /// Current inner markup of `target`, empty before the first render
    pub fn inner_html(&self, target: Target) -> &str {
        self.containers.get(&target).map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_names_round_trip() {
        for tab in AdminTab::ALL {
            assert_eq!(AdminTab::from_name(tab.name()), Some(tab));
        }
        assert_eq!(AdminTab::from_name("stats"), None);
    }

    #[test]
    fn test_active_class_toggles() {
        let mut panel = AdminPanel::default();
        assert_eq!(panel.class_for("tab-btn", AdminTab::Blog), "tab-btn active");
        panel.switch_to(AdminTab::Config);
        assert_eq!(panel.class_for("tab-btn", AdminTab::Blog), "tab-btn");
        assert_eq!(panel.class_for("tab-content", AdminTab::Config), "tab-content active");
    }

    #[test]
    fn test_post_form_fields() {
        let mut form = PostForm {
            id: " 1772668800000 ".to_string(),
            title: "T".to_string(),
            image: "  ".to_string(),
            content: "C".to_string(),
        };
        assert_eq!(form.editing_id(), Some(1_772_668_800_000));
        assert_eq!(form.draft().image, None);
        assert!(form.is_complete());

        form.reset();
        assert_eq!(form.editing_id(), None);
        assert!(!form.is_complete());
    }

    #[test]
    fn test_contact_bindings() {
        let mut contact = ContactBindings::default();
        contact.apply(&SiteConfig::default());
        assert_eq!(contact.nav_logo, "Dra. [Nombre Apellido]");
        assert_eq!(contact.email_href, "mailto:contacto@ejemplo.com");
        assert_eq!(contact.whatsapp_href, "https://wa.me/34XXXXXXXXX");
        assert_eq!(contact.whatsapp_float_href, contact.whatsapp_href);
        assert_eq!(contact.calendly_url, "https://calendly.com/tu-usuario");
    }

    #[test]
    fn test_config_form_round_trip() {
        let mut form = ConfigForm::default();
        form.load(&SiteConfig::default());
        assert_eq!(form.to_config(), SiteConfig::default());
    }
}
