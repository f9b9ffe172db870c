//! Blog section of the admin window

use eframe::egui;

use crate::site::page::Page;
use crate::site::render::EMPTY_ADMIN_BLOG;

use super::admin::{admin_rows, AdminAction};

/// Post form and list
pub struct PostsTab;

impl PostsTab {
    pub fn show(ui: &mut egui::Ui, page: &mut Page, actions: &mut Vec<AdminAction>) {
        let form = &mut page.post_form;
        let editing = form.editing_id().is_some();

        ui.heading(if editing { "Editar artículo" } else { "Nuevo artículo" });
        ui.add_space(4.0);

        egui::Grid::new("post_form")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Título");
                ui.add(egui::TextEdit::singleline(&mut form.title).desired_width(f32::INFINITY));
                ui.end_row();

                ui.label("Imagen (URL)");
                ui.add(
                    egui::TextEdit::singleline(&mut form.image)
                        .hint_text("opcional")
                        .desired_width(f32::INFINITY),
                );
                ui.end_row();
            });

        ui.label("Contenido");
        ui.add(
            egui::TextEdit::multiline(&mut form.content)
                .desired_rows(8)
                .desired_width(f32::INFINITY),
        );

        ui.horizontal(|ui| {
            let label = if editing { "Guardar cambios" } else { "Publicar" };
            if ui
                .add_enabled(form.is_complete(), egui::Button::new(label))
                .on_disabled_hover_text("Título y contenido son obligatorios")
                .clicked()
            {
                actions.push(AdminAction::SubmitPost);
            }
            if editing && ui.button("Cancelar edición").clicked() {
                actions.push(AdminAction::CancelEdit);
            }
        });

        ui.separator();
        ui.heading("Artículos publicados");
        admin_rows(
            ui,
            &page.admin_posts,
            EMPTY_ADMIN_BLOG,
            Some(AdminAction::EditPost as fn(_) -> _),
            AdminAction::DeletePost,
            actions,
        );
    }
}
