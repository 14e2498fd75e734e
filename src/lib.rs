//! Calculatrice gauche-droite : noyau sans UI.
//!
//! L’UI (eframe) vit dans le binaire et ne parle qu’à `noyau::Session`.

pub mod noyau;
