//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la session de calcul et traduire les entrées (boutons,
//! clavier) en touches du noyau.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Session`.
//! - Une seule session, possédée par l’app (pas d’état global).

use calculatrice_gd::noyau::jetons::Operateur;
use calculatrice_gd::noyau::{Session, Touche};

/// Touches spéciales lues sur une frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct Raccourcis {
    pub enter: bool,
    pub backspace: bool,
    pub esc: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub session: Session,
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn touche(&mut self, touche: Touche) {
        self.session.handle_touche(touche);
    }

    /// C : tout effacer (expression + drapeau, l’historique reste).
    pub fn clear_entree(&mut self) {
        self.session.handle_touche(Touche::Clear);
    }

    /// Texte tapé au clavier : chaque caractère reconnu devient une touche,
    /// le reste est ignoré (lettres, espaces…).
    pub fn saisie_clavier(&mut self, texte: &str) {
        for c in texte.chars() {
            if let Some(t) = touche_clavier(c) {
                self.session.handle_touche(t);
            }
        }
    }

    /// Enter = "=", Backspace = ←, Esc = C.
    ///
    /// `widget_focus` : un bouton a le focus clavier ; egui l’active déjà sur
    /// Enter, on ne rejoue donc pas "=" (sinon double action).
    pub fn raccourcis(&mut self, r: Raccourcis, widget_focus: bool) {
        if r.enter && !widget_focus {
            self.touche(Touche::Egal);
        }
        if r.backspace {
            self.touche(Touche::Backspace);
        }
        if r.esc {
            self.clear_entree();
        }
    }

    pub fn affichage(&self) -> &str {
        self.session.texte_affiche()
    }
}

/// Caractère clavier -> touche. La virgule vaut le point (pavé numérique FR).
pub fn touche_clavier(c: char) -> Option<Touche> {
    match c {
        '0'..='9' | '.' => Some(Touche::Chiffre(c)),
        ',' => Some(Touche::Chiffre('.')),
        '=' => Some(Touche::Egal),
        _ => Operateur::from_saisie(c).map(Touche::Operateur),
    }
}
