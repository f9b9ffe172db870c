//! Admin window with its three sections

use eframe::egui;

use crate::core::model::RecordId;
use crate::site::page::{AdminTab, Page};
use crate::site::render::AdminRow;

use super::config_tab::ConfigTab;
use super::posts_tab::PostsTab;
use super::resources_tab::ResourcesTab;

/// Operator intent collected while drawing, applied after the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Close,
    SwitchTab(AdminTab),
    SubmitPost,
    EditPost(RecordId),
    CancelEdit,
    DeletePost(RecordId),
    SubmitResource,
    DeleteResource(RecordId),
    SubmitConfig,
}

/// Admin modal
pub struct AdminWindow;

impl AdminWindow {
    /// Show the window; form fields are edited in place
    pub fn show(ctx: &egui::Context, page: &mut Page) -> Vec<AdminAction> {
        let mut actions = Vec::new();

        egui::Window::new("Panel de administración")
            .collapsible(false)
            .resizable(true)
            .default_width(560.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for tab in AdminTab::ALL {
                        if ui.selectable_label(page.admin.active == tab, tab.label()).clicked() {
                            actions.push(AdminAction::SwitchTab(tab));
                        }
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("\u{2715}").on_hover_text("Cerrar").clicked() {
                            actions.push(AdminAction::Close);
                        }
                    });
                });

                ui.separator();

                egui::ScrollArea::vertical()
                    .id_salt("admin_scroll")
                    .show(ui, |ui| match page.admin.active {
                        AdminTab::Blog => PostsTab::show(ui, page, &mut actions),
                        AdminTab::Resources => ResourcesTab::show(ui, page, &mut actions),
                        AdminTab::Config => ConfigTab::show(ui, page, &mut actions),
                    });
            });

        actions
    }
}

/// Rows of an admin list with edit/delete buttons
pub(super) fn admin_rows(
    ui: &mut egui::Ui,
    rows: &[AdminRow],
    empty: &str,
    edit: Option<fn(RecordId) -> AdminAction>,
    delete: fn(RecordId) -> AdminAction,
    actions: &mut Vec<AdminAction>,
) {
    if rows.is_empty() {
        ui.weak(empty);
        return;
    }

    for row in rows {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.strong(&row.title);
                ui.weak(&row.detail);
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Eliminar").clicked() {
                    actions.push(delete(row.id));
                }
                if let Some(edit) = edit.filter(|_| row.editable) {
                    if ui.button("Editar").clicked() {
                        actions.push(edit(row.id));
                    }
                }
            });
        });
        ui.separator();
    }
}
