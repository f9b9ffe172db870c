//! Live view of the public page model

use eframe::egui;

use crate::site::page::{Page, Target};

/// Central panel showing the bound contact data and the rendered grids
pub struct SitePanel;

impl SitePanel {
    /// Show the panel; returns `true` when the admin button was clicked
    pub fn show(ui: &mut egui::Ui, page: &Page) -> bool {
        let mut open_admin = false;
        let contact = &page.contact;

        ui.horizontal(|ui| {
            ui.heading(&contact.nav_logo);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Admin").on_hover_text("Ctrl+E").clicked() {
                    open_admin = true;
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("site_scroll")
            .show(ui, |ui| {
                ui.collapsing("Contacto", |ui| {
                    egui::Grid::new("contact_bindings").num_columns(2).show(ui, |ui| {
                        ui.label("Email");
                        ui.hyperlink_to(&contact.email_text, &contact.email_href);
                        ui.end_row();

                        ui.label("WhatsApp");
                        ui.hyperlink_to(&contact.whatsapp_href, &contact.whatsapp_href);
                        ui.end_row();

                        ui.label("Calendly");
                        ui.hyperlink_to(&contact.calendly_url, &contact.calendly_url);
                        ui.end_row();

                        ui.label("Pie de página");
                        ui.label(format!("{} · {}", contact.footer_heading, contact.registration));
                        ui.end_row();
                    });
                });

                for (title, target) in [("Blog", Target::BlogGrid), ("Recursos", Target::ResourcesGrid)] {
                    egui::CollapsingHeader::new(format!("{} (#{})", title, target.element_id()))
                        .default_open(true)
                        .show(ui, |ui| {
                            let mut markup = page.inner_html(target);
                            ui.add(
                                egui::TextEdit::multiline(&mut markup)
                                    .code_editor()
                                    .desired_width(f32::INFINITY),
                            );
                        });
                }
            });

        open_admin
    }
}
