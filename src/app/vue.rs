// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran unique : affichage, pavé 4×5, historique repliable
// - Gros boutons (tactile), aucun champ texte éditable : tout passe par des touches

use eframe::egui;

use super::etat::AppCalc;

const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

/// Pavé, ligne par ligne : le libellé EST le jeton envoyé à la session.
const PAVE: [[&str; 4]; 5] = [
    ["C", "←", "±", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "−"],
    ["1", "2", "3", "+"],
    ["%", "0", ".", "="],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_affichage(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(self.affichage()).monospace().size(32.0));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for label in ligne {
                        self.bouton(ui, label);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str) {
        let texte = egui::RichText::new(label).size(20.0);
        if ui.add_sized(TAILLE_BOUTON, egui::Button::new(texte)).clicked() {
            self.session.handle_input(label);
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let historique = self.session.entrees_historique();

        egui::CollapsingHeader::new(format!("Historique ({})", historique.len()))
            .default_open(true)
            .show(ui, |ui| {
                if historique.is_empty() {
                    ui.weak("aucun calcul");
                    return;
                }
                for entree in historique.iter() {
                    ui.monospace(entree.to_string());
                }
            });
    }
}
