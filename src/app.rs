// src/app.rs
//
// Calculatrice gauche-droite — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier global : chiffres/opérateurs tapés, Enter = "=", Backspace = ←, Esc = C
//   (Enter ignoré quand un bouton a le focus : egui le clique déjà)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Raccourcis;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pas de champ texte : le clavier est lu ici, une seule fois par frame.
        let (texte, raccourcis) = ctx.input(|i| {
            let texte: String = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect();
            (
                texte,
                Raccourcis {
                    enter: i.key_pressed(egui::Key::Enter),
                    backspace: i.key_pressed(egui::Key::Backspace),
                    esc: i.key_pressed(egui::Key::Escape),
                },
            )
        });
        let widget_focus = ctx.memory(|m| m.focused().is_some());

        self.saisie_clavier(&texte);
        self.raccourcis(raccourcis, widget_focus);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
