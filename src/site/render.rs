//! HTML fragments for the public grids and the admin lists
//!
//! Record fields are untrusted: text goes through `encode_text`, attribute
//! values through `encode_double_quoted_attribute`.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::core::model::{BlogPost, Resource};

pub const EMPTY_BLOG: &str =
    "No hay artículos publicados todavía. Usa el panel de administración para agregar contenido.";
pub const EMPTY_RESOURCES: &str =
    "No hay recursos disponibles todavía. Usa el panel de administración para agregar material.";
pub const EMPTY_ADMIN_BLOG: &str = "No hay artículos publicados.";
pub const EMPTY_ADMIN_RESOURCES: &str = "No hay recursos publicados.";

/// First `max_chars` characters of `content`
pub fn excerpt(content: &str, max_chars: usize) -> &str {
    match content.char_indices().nth(max_chars) {
        Some((end, _)) => &content[..end],
        None => content,
    }
}

/// `url` when it is a relative path or an http, https or mailto URL, `#` otherwise
pub fn safe_url(url: &str) -> &str {
    const ALLOWED: [&str; 3] = ["http", "https", "mailto"];

    let url = url.trim();
    let head = url.split(['/', '?', '#']).next().unwrap_or_default();
    match head.split_once(':') {
        None => url,
        Some((scheme, _)) if ALLOWED.iter().any(|s| s.eq_ignore_ascii_case(scheme)) => url,
        Some(_) => "#",
    }
}

fn grid_placeholder(message: &str) -> String {
    format!(
        r#"<div class="grid-empty" style="grid-column: 1/-1; text-align: center; padding: 40px;"><p>{}</p></div>"#,
        text(message)
    )
}

fn list_placeholder(message: &str) -> String {
    format!(r#"<p class="admin-empty" style="padding: 20px;">{}</p>"#, text(message))
}

/// Public blog grid
pub fn blog_grid(posts: &[BlogPost], excerpt_chars: usize) -> String {
    if posts.is_empty() {
        return grid_placeholder(EMPTY_BLOG);
    }
    posts
        .iter()
        .map(|post| blog_card(post, excerpt_chars))
        .collect()
}

fn blog_card(post: &BlogPost, excerpt_chars: usize) -> String {
    let image = match post.image.as_deref().filter(|s| !s.is_empty()) {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" style="width: 100%; height: 240px; object-fit: cover;">"#,
            attr(safe_url(src)),
            attr(&post.title)
        ),
        None => r#"<div class="blog-image-placeholder"></div>"#.to_string(),
    };

    format!(
        concat!(
            r#"<article class="blog-card" id="post-{id}">"#,
            "{image}",
            r#"<div class="blog-content">"#,
            r#"<span class="blog-date">{date}</span>"#,
            "<h3>{title}</h3>",
            "<p>{excerpt}...</p>",
            r#"<details class="blog-link"><summary>Leer más →</summary><div class="blog-full">{content}</div></details>"#,
            "</div></article>"
        ),
        id = post.id,
        image = image,
        date = text(&post.date),
        title = text(&post.title),
        excerpt = text(excerpt(&post.content, excerpt_chars)),
        content = text(&post.content),
    )
}

/// Public resource grid
pub fn resource_grid(resources: &[Resource]) -> String {
    if resources.is_empty() {
        return grid_placeholder(EMPTY_RESOURCES);
    }
    resources.iter().map(resource_card).collect()
}

fn resource_card(resource: &Resource) -> String {
    format!(
        concat!(
            r#"<div class="resource-card">"#,
            r#"<div class="resource-icon">{icon}</div>"#,
            "<h3>{title}</h3>",
            "<p>{description}</p>",
            r#"<a href="{file}" class="resource-download" download>Descargar {kind}</a>"#,
            "</div>"
        ),
        icon = resource.kind.icon(),
        title = text(&resource.title),
        description = text(&resource.description),
        file = attr(safe_url(&resource.file)),
        kind = text(&resource.kind.as_str().to_uppercase()),
    )
}

/// One row of an admin list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRow {
    pub id: u64,
    pub title: String,
    /// Date for posts, uppercased type for resources
    pub detail: String,
    pub editable: bool,
}

impl AdminRow {
    pub fn for_post(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            detail: post.date.clone(),
            editable: true,
        }
    }

    pub fn for_resource(resource: &Resource) -> Self {
        Self {
            id: resource.id,
            title: resource.title.clone(),
            detail: resource.kind.as_str().to_uppercase(),
            editable: false,
        }
    }
}

/// Admin list markup for posts
pub fn admin_blog_list(rows: &[AdminRow]) -> String {
    admin_list(rows, EMPTY_ADMIN_BLOG)
}

/// Admin list markup for resources
pub fn admin_resource_list(rows: &[AdminRow]) -> String {
    admin_list(rows, EMPTY_ADMIN_RESOURCES)
}

fn admin_list(rows: &[AdminRow], empty: &str) -> String {
    if rows.is_empty() {
        return list_placeholder(empty);
    }
    rows.iter()
        .map(|row| {
            let edit = if row.editable {
                format!(r#"<button class="edit-btn" data-id="{}">Editar</button>"#, row.id)
            } else {
                String::new()
            };
            format!(
                concat!(
                    r#"<div class="admin-item">"#,
                    r#"<div class="admin-item-info"><h4>{title}</h4><p>{detail}</p></div>"#,
                    r#"<div class="admin-item-actions">{edit}<button class="delete-btn" data-id="{id}">Eliminar</button></div>"#,
                    "</div>"
                ),
                title = text(&row.title),
                detail = text(&row.detail),
                edit = edit,
                id = row.id,
            )
        })
        .collect()
}
