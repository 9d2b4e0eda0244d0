// src/viewer/ui.rs
use crate::viewer::resources::{
    AtlasResource, CameraDirector, CatalogResource, DisplayOptions, Selection,
};
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, ScrollArea, Window},
};

pub fn location_selector_ui_system(
    mut contexts: EguiContexts,
    catalog: Res<CatalogResource>,
    atlas: Res<AtlasResource>,
    mut selection: ResMut<Selection>,
    mut options: ResMut<DisplayOptions>,
    mut director: ResMut<CameraDirector>,
) {
    Window::new("Standorte")
        .default_width(320.0)
        .show(contexts.ctx_mut(), |ui| {
            // Nur bei Klick mutieren, sonst würde jede Frame als Änderung gelten
            let mut next: Option<Selection> = None;

            for group in &catalog.0.groups {
                ui.heading(&group.label);
                for company in &group.companies {
                    let selected = selection.company.as_deref() == Some(company.name.as_str());
                    ui.horizontal(|ui| {
                        if ui.selectable_label(selected, &company.name).clicked() && !selected {
                            next = Some(Selection::for_company(company));
                        }
                        if let Some(website) = &company.website {
                            ui.hyperlink_to("↗", website);
                        }
                    });
                }
                ui.separator();
            }

            if ui
                .add_enabled(selection.company.is_some(), egui::Button::new("Alle Standorte"))
                .clicked()
            {
                next = Some(Selection::all(&catalog.0));
            }

            if let Some(next) = next {
                info!(
                    "Selected {}",
                    next.company.as_deref().unwrap_or("all locations")
                );
                *selection = next;
            }

            ui.collapsing("Länder", |ui| {
                let focused = director
                    .tour
                    .focused_stop()
                    .map(|stop| stop.location.id.clone());
                ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                    for location in &selection.locations {
                        let label = if atlas.0.contains(&location.id) {
                            location.name.clone()
                        } else {
                            format!("{} (keine Geometrie)", location.name)
                        };
                        let text = egui::RichText::new(label);
                        if focused.as_deref() == Some(location.id.as_str()) {
                            ui.label(text.strong());
                        } else {
                            ui.label(text);
                        }
                    }
                });
            });

            ui.collapsing("Anzeige", |ui| {
                ui.checkbox(&mut options.show_borders, "Ländergrenzen");
                ui.checkbox(&mut options.show_markers, "Standort-Marker");

                let mut auto_tour = director.tour.auto_advance();
                if ui.checkbox(&mut auto_tour, "Automatische Tour").changed() {
                    director.tour.set_auto_advance(auto_tour);
                }
                if director.tour.is_holding() {
                    ui.label("Tour pausiert (Benutzereingabe)");
                }
                ui.label(format!("Länder im Atlas: {}", atlas.0.len()));
            });

            ui.collapsing("Kamerasteuerung Info", |ui| {
                ui.label("Linke Maustaste + Ziehen: Orbit (pausiert die Tour)");
                ui.label("Mausrad: Zoom");
            });
        });
}
