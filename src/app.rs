//! Main application state and UI coordination

use eframe::egui;

use crate::core::config::AppConfig;
use crate::core::store::FileStore;
use crate::site::controller::SiteController;
use crate::site::export;
use crate::site::prompt::Prompt;
use crate::ui::admin::{AdminAction, AdminWindow};
use crate::ui::dialogs::NativePrompt;
use crate::ui::site_view::SitePanel;

/// Main application state
pub struct SiteDeskApp {
    /// Controller owning the gateway and the page model
    pub controller: SiteController<FileStore>,
    /// Native confirmation and notice dialogs
    pub prompt: NativePrompt,
    /// Application configuration
    pub config: AppConfig,
}

impl SiteDeskApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, mut controller: SiteController<FileStore>) -> Self {
        let mut prompt = NativePrompt;

        if let Err(e) = controller.load() {
            tracing::error!("Failed to load site content: {}", e);
            prompt.notify(&format!("No se pudo cargar el contenido: {}", e));
        }

        let mut app = Self {
            controller,
            prompt,
            config,
        };
        if app.config.ui.open_admin_on_start {
            app.open_admin();
        }
        app
    }

    /// Show the admin panel
    pub fn open_admin(&mut self) {
        if let Err(e) = self.controller.open_admin() {
            tracing::error!("Failed to open admin panel: {}", e);
            self.prompt.notify(&format!("No se pudo abrir el panel: {}", e));
        }
    }

    fn toggle_admin(&mut self) {
        if self.controller.page().admin.open {
            self.controller.close_admin();
        } else {
            self.open_admin();
        }
    }

    /// Export the public page and open it in the browser
    pub fn preview_site(&mut self) {
        if let Err(e) = export::preview_site(self.controller.page(), &self.config.export_dir()) {
            tracing::error!("Failed to preview site: {:#}", e);
            self.prompt.notify(&format!("No se pudo abrir la vista previa: {:#}", e));
        }
    }

    /// Export the public page without opening it
    pub fn export_site(&mut self) {
        match export::export_site(self.controller.page(), &self.config.export_dir()) {
            Ok(path) => self
                .prompt
                .notify(&format!("Sitio exportado en {}", path.display())),
            Err(e) => {
                tracing::error!("Failed to export site: {:#}", e);
                self.prompt.notify(&format!("No se pudo exportar el sitio: {:#}", e));
            }
        }
    }

    /// Apply an action collected from the admin window
    fn handle_admin_action(&mut self, action: AdminAction) {
        let prompt = &mut self.prompt;
        let controller = &mut self.controller;
        // Failures were already reported to the operator by the controller
        let _ = match action {
            AdminAction::Close => {
                controller.close_admin();
                Ok(())
            }
            AdminAction::SwitchTab(tab) => {
                controller.switch_tab(tab);
                Ok(())
            }
            AdminAction::SubmitPost => controller.submit_post(prompt).map(drop),
            AdminAction::EditPost(id) => controller.edit_post(id, prompt).map(drop),
            AdminAction::CancelEdit => {
                controller.page_mut().post_form.reset();
                Ok(())
            }
            AdminAction::DeletePost(id) => controller.delete_post(id, prompt).map(drop),
            AdminAction::SubmitResource => controller.submit_resource(prompt).map(drop),
            AdminAction::DeleteResource(id) => controller.delete_resource(id, prompt).map(drop),
            AdminAction::SubmitConfig => controller.submit_config(prompt).map(drop),
        };
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Archivo", |ui| {
                    if ui.button("Vista previa en navegador").clicked() {
                        self.preview_site();
                        ui.close();
                    }
                    if ui.button("Exportar sitio").clicked() {
                        self.export_site();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Salir").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Ver", |ui| {
                    let open = self.controller.page().admin.open;
                    if ui.selectable_label(open, "Panel de administración").clicked() {
                        self.toggle_admin();
                        ui.close();
                    }
                });
            });
        });
    }
}

impl eframe::App for SiteDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (toggle_admin, preview) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::E),
                i.modifiers.ctrl && i.key_pressed(egui::Key::P),
            )
        });
        if toggle_admin {
            self.toggle_admin();
        }
        if preview {
            self.preview_site();
        }

        self.render_menu_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            if SitePanel::show(ui, self.controller.page()) {
                self.open_admin();
            }
        });

        if self.controller.page().admin.open {
            let actions = AdminWindow::show(ctx, self.controller.page_mut());
            for action in actions {
                self.handle_admin_action(action);
            }
        }
    }
}
