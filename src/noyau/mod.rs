//! Noyau gauche-droite
//!
//! Organisation interne :
//! - saisie.rs     : expression en cours + drapeau "vient d’évaluer" (ajout, C, ←, ±)
//! - jetons.rs     : sanitize + tokenisation (nombres / opérateurs)
//! - eval.rs       : réduction gauche-à-droite, sans priorité
//! - format.rs     : affichage d’un résultat (entier sans décimales)
//! - historique.rs : "expr = résultat", le plus récent en tête
//! - session.rs    : touche -> saisie / "=" -> évaluation + historique
//! - erreur.rs     : échecs d’évaluation (tous absorbés en "Error")

pub mod erreur;
pub mod eval;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod saisie;
pub mod session;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use session::{Session, Touche};
