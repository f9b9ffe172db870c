//! Static export of the public page

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use super::page::{Page, Target};
use super::render::safe_url;

const STYLE: &str = r#"
:root { --primary: #6b8e7f; --text: #2d3748; --text-light: #718096; --bg-alt: #f7faf9; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: var(--text); line-height: 1.6; }
nav { display: flex; justify-content: space-between; align-items: center; padding: 16px 5%; }
.nav-logo { font-weight: 700; font-size: 1.2rem; }
section { padding: 64px 5%; }
section:nth-of-type(even) { background: var(--bg-alt); }
.blog-grid, .resources-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 24px; }
.blog-card, .resource-card { background: #fff; border-radius: 12px; box-shadow: 0 2px 12px rgba(0,0,0,.06); overflow: hidden; }
.blog-content, .resource-card { padding: 20px; }
.blog-image-placeholder { height: 240px; background: var(--bg-alt); }
.blog-date, .grid-empty { color: var(--text-light); }
.resource-icon { font-size: 2rem; }
.resource-download { color: var(--primary); font-weight: 600; }
.whatsapp-float { position: fixed; right: 24px; bottom: 24px; background: #25d366; color: #fff; border-radius: 50%; width: 56px; height: 56px; display: flex; align-items: center; justify-content: center; text-decoration: none; }
footer { padding: 32px 5%; background: var(--text); color: #fff; }
footer a { color: #fff; }
"#;

/// Full public HTML document for the current page state
pub fn render_document(page: &Page) -> String {
    let contact = &page.contact;
    format!(
        r##"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{name}</title>
<style>{style}</style>
</head>
<body>
<nav><span class="nav-logo">{name}</span>
<div class="nav-links"><a href="#blog">Blog</a> <a href="#recursos">Recursos</a> <a href="#contacto">Contacto</a></div></nav>
<section id="blog"><h2>Blog</h2><div class="blog-grid" id="{blog_id}">{blog}</div></section>
<section id="recursos"><h2>Recursos</h2><div class="resources-grid" id="{resources_id}">{resources}</div></section>
<section id="contacto"><h2>Contacto</h2>
<div class="contact-method"><a href="{email_href}">{email_text}</a></div>
<div class="contact-method"><a href="{whatsapp_href}">WhatsApp</a></div>
<div class="calendly-inline-widget" data-url="{calendly}" style="min-width:320px;height:630px;"></div>
</section>
<footer><div class="footer-section"><h4>{footer}</h4><p>{registration}</p></div></footer>
<a class="whatsapp-float" href="{whatsapp_float}" aria-label="WhatsApp">&#128172;</a>
<script src="https://assets.calendly.com/assets/external/widget.js" async></script>
</body>
</html>
"##,
        name = text(&contact.nav_logo),
        style = STYLE,
        blog_id = Target::BlogGrid.element_id(),
        blog = page.inner_html(Target::BlogGrid),
        resources_id = Target::ResourcesGrid.element_id(),
        resources = page.inner_html(Target::ResourcesGrid),
        email_href = attr(&contact.email_href),
        email_text = text(&contact.email_text),
        whatsapp_href = attr(&contact.whatsapp_href),
        calendly = attr(safe_url(&contact.calendly_url)),
        footer = text(&contact.footer_heading),
        registration = text(&contact.registration),
        whatsapp_float = attr(&contact.whatsapp_float_href),
    )
}

/// Write `index.html` into `dir`, returning its path
pub fn export_site(page: &Page, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

    let path = dir.join("index.html");
    fs::write(&path, render_document(page))
        .with_context(|| format!("Failed to write site: {}", path.display()))?;

    tracing::info!("Exported site to: {}", path.display());
    Ok(path)
}

/// Export and open the result in the system browser
pub fn preview_site(page: &Page, dir: &Path) -> Result<PathBuf> {
    let path = export_site(page, dir)?;
    open::that(&path).with_context(|| format!("Failed to open browser for {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::SiteConfig;

    #[test]
    fn test_document_contains_bindings_and_grids() {
        let mut page = Page::new();
        page.contact.apply(&SiteConfig {
            name: "Dra. <Ana>".to_string(),
            ..SiteConfig::default()
        });
        page.set_inner_html(Target::BlogGrid, "<article>uno</article>".to_string());

        let html = render_document(&page);
        assert!(html.contains("Dra. &lt;Ana&gt;"));
        assert!(html.contains(r#"<div class="blog-grid" id="blog-grid"><article>uno</article></div>"#));
        assert!(html.contains(r#"data-url="https://calendly.com/tu-usuario""#));
        assert!(html.contains(r#"href="mailto:contacto@ejemplo.com""#));
    }

    #[test]
    fn test_export_writes_index() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("site");
        let path = export_site(&Page::new(), &out).unwrap();
        assert_eq!(path, out.join("index.html"));
        assert!(fs::read_to_string(path).unwrap().starts_with("<!DOCTYPE html>"));
    }
}
