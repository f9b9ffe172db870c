//! Site configuration section of the admin window

use eframe::egui;

use crate::site::page::Page;

use super::admin::AdminAction;

pub struct ConfigTab;

impl ConfigTab {
    pub fn show(ui: &mut egui::Ui, page: &mut Page, actions: &mut Vec<AdminAction>) {
        let form = &mut page.config_form;

        ui.heading("Configuración del sitio");
        ui.add_space(4.0);

        egui::Grid::new("config_form")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                let fields = [
                    ("Nombre", &mut form.name),
                    ("Email", &mut form.email),
                    ("WhatsApp", &mut form.whatsapp),
                    ("Calendly (URL)", &mut form.calendly),
                    ("Nº Colegiación", &mut form.colegiacion),
                ];
                for (label, value) in fields {
                    ui.label(label);
                    ui.add(egui::TextEdit::singleline(value).desired_width(f32::INFINITY));
                    ui.end_row();
                }
            });

        ui.add_space(4.0);
        if ui.button("Guardar configuración").clicked() {
            actions.push(AdminAction::SubmitConfig);
        }
    }
}
