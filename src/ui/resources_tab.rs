//! Resources section of the admin window

use eframe::egui;

use crate::core::model::ResourceKind;
use crate::site::page::Page;
use crate::site::render::EMPTY_ADMIN_RESOURCES;

use super::admin::{admin_rows, AdminAction};

/// Resource form and list
pub struct ResourcesTab;

impl ResourcesTab {
    pub fn show(ui: &mut egui::Ui, page: &mut Page, actions: &mut Vec<AdminAction>) {
        let form = &mut page.resource_form;

        ui.heading("Nuevo recurso");
        ui.add_space(4.0);

        egui::Grid::new("resource_form")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Título");
                ui.add(egui::TextEdit::singleline(&mut form.title).desired_width(f32::INFINITY));
                ui.end_row();

                ui.label("Descripción");
                ui.add(
                    egui::TextEdit::multiline(&mut form.description)
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );
                ui.end_row();

                ui.label("Archivo (URL)");
                ui.add(egui::TextEdit::singleline(&mut form.file).desired_width(f32::INFINITY));
                ui.end_row();

                ui.label("Tipo");
                egui::ComboBox::from_id_salt("resource_kind")
                    .selected_text(form.kind.as_str().to_uppercase())
                    .show_ui(ui, |ui| {
                        for kind in ResourceKind::KNOWN {
                            let label = kind.as_str().to_uppercase();
                            ui.selectable_value(&mut form.kind, kind, label);
                        }
                    });
                ui.end_row();
            });

        if ui
            .add_enabled(form.is_complete(), egui::Button::new("Agregar recurso"))
            .on_disabled_hover_text("Título y archivo son obligatorios")
            .clicked()
        {
            actions.push(AdminAction::SubmitResource);
        }

        ui.separator();
        ui.heading("Recursos publicados");
        admin_rows(
            ui,
            &page.admin_resources,
            EMPTY_ADMIN_RESOURCES,
            None,
            AdminAction::DeleteResource,
            actions,
        );
    }
}
