//! Presentation controller
//!
//! Turns operator actions into gateway calls and re-renders every view the
//! call affects. Renders are full regenerations from the gateway's current
//! state.

use crate::core::gateway::{GatewayResult, StorageGateway};
use crate::core::model::{BlogPost, RecordId, Resource, SiteConfig};
use crate::core::store::KeyValueStore;

use super::page::{AdminTab, Page, Target};
use super::prompt::Prompt;
use super::render::{self, AdminRow};

pub const POST_SAVED: &str = "Artículo publicado exitosamente";
pub const RESOURCE_SAVED: &str = "Recurso agregado exitosamente";
pub const CONFIG_SAVED: &str =
    "Configuración guardada exitosamente. Recarga la página para ver todos los cambios.";
pub const POST_MISSING: &str = "El artículo ya no existe.";
pub const CONFIRM_DELETE_POST: &str = "¿Estás segura de que quieres eliminar este artículo?";
pub const CONFIRM_DELETE_RESOURCE: &str = "¿Estás segura de que quieres eliminar este recurso?";

/// Binds the page model to a storage gateway
pub struct SiteController<S> {
    gateway: StorageGateway<S>,
    page: Page,
    excerpt_chars: usize,
}

impl<S: KeyValueStore> SiteController<S> {
    pub fn new(gateway: StorageGateway<S>, excerpt_chars: usize) -> Self {
        Self {
            gateway,
            page: Page::new(),
            excerpt_chars,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Mutable access for form input
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    #[allow(dead_code)]
    pub fn gateway(&self) -> &StorageGateway<S> {
        &self.gateway
    }

    /// Initialize storage and render the public page
    ///
    /// Rendering runs even when seeding fails; the seeding error is
    /// returned afterwards.
    pub fn load(&mut self) -> GatewayResult<()> {
        let seeded = self.gateway.initialize();
        if let Err(ref e) = seeded {
            tracing::warn!("Could not initialize storage: {}", e);
        }
        self.render_blog_posts()?;
        self.render_resources()?;
        self.apply_configuration()?;
        seeded
    }

    // Rendering

    fn render_blog_posts(&mut self) -> GatewayResult<()> {
        let posts = self.gateway.list_posts()?;
        let html = render::blog_grid(&posts, self.excerpt_chars);
        self.page.set_inner_html(Target::BlogGrid, html);
        Ok(())
    }

    fn render_resources(&mut self) -> GatewayResult<()> {
        let resources = self.gateway.list_resources()?;
        self.page
            .set_inner_html(Target::ResourcesGrid, render::resource_grid(&resources));
        Ok(())
    }

    fn render_admin_blog_list(&mut self) -> GatewayResult<()> {
        let rows: Vec<AdminRow> = self.gateway.list_posts()?.iter().map(AdminRow::for_post).collect();
        self.page
            .set_inner_html(Target::AdminBlogList, render::admin_blog_list(&rows));
        self.page.admin_posts = rows;
        Ok(())
    }

    fn render_admin_resource_list(&mut self) -> GatewayResult<()> {
        let rows: Vec<AdminRow> = self
            .gateway
            .list_resources()?
            .iter()
            .map(AdminRow::for_resource)
            .collect();
        self.page
            .set_inner_html(Target::AdminResourceList, render::admin_resource_list(&rows));
        self.page.admin_resources = rows;
        Ok(())
    }

    fn refresh_posts(&mut self) -> GatewayResult<()> {
        self.render_blog_posts()?;
        self.render_admin_blog_list()
    }

    fn refresh_resources(&mut self) -> GatewayResult<()> {
        self.render_resources()?;
        self.render_admin_resource_list()
    }

    /// Push the stored configuration into every bound element
    pub fn apply_configuration(&mut self) -> GatewayResult<()> {
        let config = self.gateway.get_config()?;
        self.page.contact.apply(&config);
        Ok(())
    }

    // Admin panel

    /// Show the admin panel with fresh lists and config form
    pub fn open_admin(&mut self) -> GatewayResult<()> {
        self.page.admin.open = true;
        self.render_admin_blog_list()?;
        self.render_admin_resource_list()?;
        let config = self.gateway.get_config()?;
        self.page.config_form.load(&config);
        Ok(())
    }

    pub fn close_admin(&mut self) {
        self.page.admin.open = false;
    }

    pub fn switch_tab(&mut self, tab: AdminTab) {
        self.page.admin.switch_to(tab);
    }

    // Posts

    /// Save the post form: update when it carries an id, add otherwise
    pub fn submit_post(&mut self, prompt: &mut dyn Prompt) -> GatewayResult<BlogPost> {
        let form = self.page.post_form.clone();
        let result = match form.editing_id() {
            Some(id) => self.gateway.update_post(id, form.patch()),
            None => self.gateway.add_post(form.draft()),
        };
        let post = report(prompt, "guardar el artículo", result)?;

        self.page.post_form.reset();
        report(prompt, "actualizar la vista", self.refresh_posts())?;
        prompt.notify(POST_SAVED);
        Ok(post)
    }

    /// Load the post with `id` into the form; `false` when it is gone
    pub fn edit_post(&mut self, id: RecordId, prompt: &mut dyn Prompt) -> GatewayResult<bool> {
        let Some(post) = report(prompt, "cargar el artículo", self.gateway.find_post(id))? else {
            prompt.notify(POST_MISSING);
            return Ok(false);
        };
        let form = &mut self.page.post_form;
        form.id = post.id.to_string();
        form.title = post.title;
        form.image = post.image.unwrap_or_default();
        form.content = post.content;
        self.page.admin.switch_to(AdminTab::Blog);
        Ok(true)
    }

    /// Delete a post once the operator confirms; returns whether it ran
    pub fn delete_post(&mut self, id: RecordId, prompt: &mut dyn Prompt) -> GatewayResult<bool> {
        if !prompt.confirm(CONFIRM_DELETE_POST) {
            return Ok(false);
        }
        report(prompt, "eliminar el artículo", self.gateway.delete_post(id))?;
        report(prompt, "actualizar la vista", self.refresh_posts())?;
        Ok(true)
    }

    // Resources

    pub fn submit_resource(&mut self, prompt: &mut dyn Prompt) -> GatewayResult<Resource> {
        let draft = self.page.resource_form.draft();
        let resource = report(prompt, "guardar el recurso", self.gateway.add_resource(draft))?;

        self.page.resource_form.reset();
        report(prompt, "actualizar la vista", self.refresh_resources())?;
        prompt.notify(RESOURCE_SAVED);
        Ok(resource)
    }

    pub fn delete_resource(&mut self, id: RecordId, prompt: &mut dyn Prompt) -> GatewayResult<bool> {
        if !prompt.confirm(CONFIRM_DELETE_RESOURCE) {
            return Ok(false);
        }
        report(prompt, "eliminar el recurso", self.gateway.delete_resource(id))?;
        report(prompt, "actualizar la vista", self.refresh_resources())?;
        Ok(true)
    }

    // Configuration

    /// Store the config form and re-bind the contact elements
    pub fn submit_config(&mut self, prompt: &mut dyn Prompt) -> GatewayResult<SiteConfig> {
        let config = self.page.config_form.to_config();
        let config = report(prompt, "guardar la configuración", self.gateway.update_config(config))?;
        self.page.contact.apply(&config);
        prompt.notify(CONFIG_SAVED);
        Ok(config)
    }
}

/// Log and surface a failed action, passing the result through
fn report<T>(prompt: &mut dyn Prompt, action: &str, result: GatewayResult<T>) -> GatewayResult<T> {
    if let Err(ref e) = result {
        tracing::error!("Failed to {}: {}", action, e);
        prompt.notify(&format!("No se pudo {}: {}", action, e));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gateway::GatewayError;
    use crate::core::ids::FixedClock;
    use crate::core::model::ResourceKind;
    use crate::core::store::MemoryStore;
    use crate::site::prompt::ScriptedPrompt;
    use crate::site::render::{EMPTY_ADMIN_BLOG, EMPTY_BLOG, EMPTY_RESOURCES};

    fn controller_with(store: MemoryStore) -> SiteController<MemoryStore> {
        let clock = FixedClock::on(2026, 3, 5).unwrap();
        let gateway = StorageGateway::with_clock(store, Box::new(clock));
        let mut controller = SiteController::new(gateway, 150);
        controller.load().unwrap();
        controller
    }

    fn controller() -> SiteController<MemoryStore> {
        controller_with(MemoryStore::new())
    }

    fn fill_post(controller: &mut SiteController<MemoryStore>, title: &str, content: &str) {
        let form = &mut controller.page_mut().post_form;
        form.title = title.to_string();
        form.content = content.to_string();
    }

    #[test]
    fn test_initial_load_renders_placeholders_and_config() {
        let controller = controller();
        let page = controller.page();
        assert!(page.inner_html(Target::BlogGrid).contains(EMPTY_BLOG));
        assert!(page.inner_html(Target::ResourcesGrid).contains(EMPTY_RESOURCES));
        assert_eq!(page.contact.nav_logo, "Dra. [Nombre Apellido]");
        assert!(!page.admin.open);
    }

    #[test]
    fn test_load_renders_even_when_seeding_fails() {
        let clock = FixedClock::on(2026, 3, 5).unwrap();
        let gateway = StorageGateway::with_clock(MemoryStore::with_quota(20), Box::new(clock));
        let mut controller = SiteController::new(gateway, 150);

        assert!(matches!(controller.load(), Err(GatewayError::Store(_))));
        let page = controller.page();
        assert!(page.inner_html(Target::BlogGrid).contains(EMPTY_BLOG));
        assert!(page.inner_html(Target::ResourcesGrid).contains(EMPTY_RESOURCES));
        assert_eq!(page.contact.nav_logo, "Dra. [Nombre Apellido]");
    }

    #[test]
    fn test_submit_new_post_updates_both_views() {
        let mut controller = controller();
        controller.open_admin().unwrap();
        assert!(controller.page().inner_html(Target::AdminBlogList).contains(EMPTY_ADMIN_BLOG));

        let mut prompt = ScriptedPrompt::default();
        fill_post(&mut controller, "Autoestima", "Claves para cuidarla");
        let post = controller.submit_post(&mut prompt).unwrap();

        let page = controller.page();
        assert!(page.inner_html(Target::BlogGrid).contains("Autoestima"));
        assert!(page.inner_html(Target::AdminBlogList).contains("Autoestima"));
        assert_eq!(page.admin_posts, vec![AdminRow::for_post(&post)]);
        assert_eq!(page.post_form, Default::default());
        assert_eq!(prompt.notices, vec![POST_SAVED.to_string()]);
    }

    #[test]
    fn test_empty_fields_pass_through() {
        let mut controller = controller();
        let mut prompt = ScriptedPrompt::default();
        let post = controller.submit_post(&mut prompt).unwrap();
        assert_eq!(post.title, "");
        assert_eq!(controller.gateway().list_posts().unwrap().len(), 1);
    }

    #[test]
    fn test_edit_then_submit_updates_in_place() {
        let mut controller = controller();
        let mut prompt = ScriptedPrompt::default();
        fill_post(&mut controller, "Borrador", "Texto");
        let post = controller.submit_post(&mut prompt).unwrap();

        controller.switch_tab(AdminTab::Config);
        assert!(controller.edit_post(post.id, &mut prompt).unwrap());
        assert_eq!(controller.page().post_form.id, post.id.to_string());
        assert_eq!(controller.page().post_form.title, "Borrador");
        assert_eq!(controller.page().admin.active, AdminTab::Blog);

        controller.page_mut().post_form.title = "Definitivo".to_string();
        let updated = controller.submit_post(&mut prompt).unwrap();

        let posts = controller.gateway().list_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(updated.id, post.id);
        assert_eq!(posts[0].title, "Definitivo");
        assert_eq!(posts[0].date, post.date);
    }

    #[test]
    fn test_edit_unknown_post() {
        let mut controller = controller();
        let mut prompt = ScriptedPrompt::default();
        assert!(!controller.edit_post(99, &mut prompt).unwrap());
        assert_eq!(controller.page().post_form, Default::default());
        assert_eq!(prompt.notices, vec![POST_MISSING.to_string()]);
    }

    #[test]
    fn test_update_of_vanished_post_reports_failure() {
        let mut controller = controller();
        let mut prompt = ScriptedPrompt::default();
        fill_post(&mut controller, "T", "C");
        controller.page_mut().post_form.id = "12345".to_string();

        let err = controller.submit_post(&mut prompt).unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(12345)));
        assert_eq!(prompt.notices.len(), 1);
        assert!(prompt.notices[0].starts_with("No se pudo guardar el artículo"));
        // Form is kept so the operator can retry
        assert_eq!(controller.page().post_form.title, "T");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut controller = controller();
        let mut prompt = ScriptedPrompt::answering([false, true]);
        fill_post(&mut controller, "T", "C");
        let post = controller.submit_post(&mut prompt).unwrap();

        assert!(!controller.delete_post(post.id, &mut prompt).unwrap());
        assert_eq!(controller.gateway().list_posts().unwrap().len(), 1);

        assert!(controller.delete_post(post.id, &mut prompt).unwrap());
        assert!(controller.gateway().list_posts().unwrap().is_empty());
        assert!(controller.page().inner_html(Target::BlogGrid).contains(EMPTY_BLOG));
        assert_eq!(prompt.questions, vec![CONFIRM_DELETE_POST; 2]);
    }

    #[test]
    fn test_resource_submit_and_delete() {
        let mut controller = controller();
        let mut prompt = ScriptedPrompt::answering([true]);
        {
            let form = &mut controller.page_mut().resource_form;
            form.title = "Guía de respiración".to_string();
            form.description = "Ejercicios".to_string();
            form.file = "docs/respiracion.mp3".to_string();
            form.kind = ResourceKind::Audio;
        }
        let resource = controller.submit_resource(&mut prompt).unwrap();
        assert!(controller.page().inner_html(Target::ResourcesGrid).contains("Descargar AUDIO"));
        assert_eq!(controller.page().resource_form, Default::default());
        assert_eq!(prompt.notices, vec![RESOURCE_SAVED.to_string()]);

        assert!(controller.delete_resource(resource.id, &mut prompt).unwrap());
        assert!(controller.gateway().list_resources().unwrap().is_empty());
        assert!(controller.page().admin_resources.is_empty());
    }

    #[test]
    fn test_declined_resource_delete_keeps_it() {
        let mut controller = controller();
        let mut prompt = ScriptedPrompt::answering([false]);
        {
            let form = &mut controller.page_mut().resource_form;
            form.title = "Cuaderno".to_string();
            form.file = "docs/cuaderno.pdf".to_string();
        }
        let resource = controller.submit_resource(&mut prompt).unwrap();
        controller.open_admin().unwrap();

        assert!(!controller.delete_resource(resource.id, &mut prompt).unwrap());
        assert_eq!(prompt.questions, vec![CONFIRM_DELETE_RESOURCE]);
        assert_eq!(controller.gateway().list_resources().unwrap(), vec![resource.clone()]);
        assert_eq!(controller.page().admin_resources, vec![AdminRow::for_resource(&resource)]);
        assert!(controller.page().inner_html(Target::ResourcesGrid).contains("Cuaderno"));
    }

    #[test]
    fn test_submit_config_rebinds_contact() {
        let mut controller = controller();
        controller.open_admin().unwrap();
        assert_eq!(controller.page().config_form.to_config(), SiteConfig::default());

        let mut prompt = ScriptedPrompt::default();
        controller.page_mut().config_form.email = "hola@consulta.es".to_string();
        controller.page_mut().config_form.whatsapp = "34600111222".to_string();
        let saved = controller.submit_config(&mut prompt).unwrap();

        assert_eq!(controller.gateway().get_config().unwrap(), saved);
        assert_eq!(controller.page().contact.email_href, "mailto:hola@consulta.es");
        assert_eq!(controller.page().contact.whatsapp_href, "https://wa.me/34600111222");
        assert_eq!(prompt.notices, vec![CONFIG_SAVED.to_string()]);
    }

    #[test]
    fn test_quota_failure_keeps_rendered_state() {
        let mut controller = controller_with(MemoryStore::with_quota(300));
        let mut prompt = ScriptedPrompt::default();
        fill_post(&mut controller, "T", &"x".repeat(400));
        let before = controller.page().inner_html(Target::BlogGrid).to_string();

        assert!(controller.submit_post(&mut prompt).is_err());
        assert_eq!(controller.page().inner_html(Target::BlogGrid), before);
        assert!(prompt.notices[0].contains("quota"));
    }

    #[test]
    fn test_admin_open_close() {
        let mut controller = controller();
        controller.open_admin().unwrap();
        assert!(controller.page().admin.open);
        controller.close_admin();
        assert!(!controller.page().admin.open);
    }
}
