//! src/noyau/saisie.rs
//!
//! Accumulateur de saisie : l’expression en cours + le drapeau "vient d’évaluer".
//!
//! Contrats :
//! - Aucune évaluation ici (pas de jetons, pas de calcul).
//! - Ajout = simple concaténation : deux opérateurs de suite sont acceptés,
//!   c’est l’évaluation qui les refusera.
//! - Après "=", un opérateur enchaîne sur le résultat, un chiffre repart de zéro.

use tracing::trace;

use super::format::format_resultat;

/// Ce qui peut être ajouté au bout de l’expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ajout {
    /// Chiffre 0-9 ou point décimal.
    Chiffre(char),
    /// Opérateur, sous sa forme affichée (+ − × ÷ %).
    Operateur(char),
}

#[derive(Clone, Debug, Default)]
pub struct Saisie {
    expression: String,
    vient_d_evaluer: bool,
}

impl Saisie {
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn vient_d_evaluer(&self) -> bool {
        self.vient_d_evaluer
    }

    /// Texte à l’écran : "0" si rien n’est saisi.
    pub fn affichage(&self) -> &str {
        if self.expression.is_empty() {
            "0"
        } else {
            &self.expression
        }
    }

    pub fn append_token(&mut self, ajout: Ajout) {
        let c = match ajout {
            Ajout::Chiffre(c) => {
                if self.vient_d_evaluer {
                    // chiffre après "=" : nouveau calcul
                    self.expression.clear();
                }
                c
            }
            // opérateur après "=" : on garde le résultat affiché
            Ajout::Operateur(c) => c,
        };

        self.expression.push(c);
        self.vient_d_evaluer = false;
        trace!(expression = %self.expression, "ajout");
    }

    /// C : tout effacer (idempotent).
    pub fn clear(&mut self) {
        self.expression.clear();
        self.vient_d_evaluer = false;
    }

    /// ← : retire le dernier caractère (un glyphe × ÷ − part en entier).
    pub fn backspace(&mut self) {
        if self.expression.pop().is_some() {
            self.vient_d_evaluer = false;
        }
    }

    /// ± : change le signe du dernier nombre.
    ///
    /// Sans effet si l’expression est vide, si elle vient d’être évaluée,
    /// ou si elle ne se termine pas par un nombre lisible.
    pub fn toggle_signe(&mut self) {
        if self.expression.is_empty() || self.vient_d_evaluer {
            return;
        }

        let debut = debut_nombre_final(&self.expression);
        let Ok(v) = self.expression[debut..].parse::<f64>() else {
            return;
        };

        self.expression.truncate(debut);
        self.expression.push_str(&format_resultat(-v));
        trace!(expression = %self.expression, "signe");
    }

    /// Remplace toute l’expression (résultat ou "Error") et lève le drapeau.
    pub(crate) fn fixer_resultat(&mut self, texte: impl Into<String>) {
        self.expression = texte.into();
        self.vient_d_evaluer = true;
    }
}

/// Indice (octets) du début du nombre final : chiffres + au plus un point,
/// en remontant depuis la fin. Égal à `s.len()` s’il n’y en a pas.
fn debut_nombre_final(s: &str) -> usize {
    let mut debut = s.len();
    let mut point_vu = false;

    for (i, c) in s.char_indices().rev() {
        if c == '.' {
            if point_vu {
                break;
            }
            point_vu = true;
        } else if !c.is_ascii_digit() {
            break;
        }
        debut = i;
    }

    debut
}
