//! Session de calcul : saisie + historique, pilotée touche par touche.
//!
//! C’est la seule porte d’entrée de l’UI. Aucune erreur n’en sort :
//! une évaluation ratée affiche "Error" et la prochaine saisie repart de zéro.

use std::str::FromStr;

use tracing::{debug, info, warn};

use super::erreur::ToucheInconnue;
use super::eval::eval_expression;
use super::format::format_resultat;
use super::historique::Historique;
use super::jetons::Operateur;
use super::saisie::{Ajout, Saisie};

/// Texte affiché après un échec d’évaluation.
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0-9 ou '.'
    Chiffre(char),
    Operateur(Operateur),
    Egal,
    Clear,
    Backspace,
    ToggleSigne,
}

impl FromStr for Touche {
    type Err = ToucheInconnue;

    /// Accepte les glyphes des boutons (× ÷ − ← ±), l’ASCII clavier
    /// (* / -) et les noms d’actions (equals, clear, backspace, toggleSign).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equals" | "=" => return Ok(Self::Egal),
            "clear" | "C" => return Ok(Self::Clear),
            "backspace" | "←" => return Ok(Self::Backspace),
            "toggleSign" | "±" => return Ok(Self::ToggleSigne),
            _ => {}
        }

        let mut chars = s.chars();
        let inconnue = || ToucheInconnue(s.to_string());
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(inconnue());
        };

        if c.is_ascii_digit() || c == '.' {
            return Ok(Self::Chiffre(c));
        }
        Operateur::from_saisie(c)
            .map(Self::Operateur)
            .ok_or_else(inconnue)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    saisie: Saisie,
    historique: Historique,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entrée texte (nom d’action, chiffre ou glyphe). Inconnu => ignoré.
    pub fn handle_input(&mut self, token: &str) {
        match token.parse::<Touche>() {
            Ok(t) => self.handle_touche(t),
            Err(e) => warn!(erreur = %e, "ignorée"),
        }
    }

    pub fn handle_touche(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.saisie.append_token(Ajout::Chiffre(c)),
            Touche::Operateur(op) => self.saisie.append_token(Ajout::Operateur(op.glyphe())),
            Touche::Egal => self.egal(),
            Touche::Clear => self.saisie.clear(),
            Touche::Backspace => self.saisie.backspace(),
            Touche::ToggleSigne => self.saisie.toggle_signe(),
        }
    }

    /// "=" : évalue, historise (succès seulement) puis remplace l’expression
    /// par le résultat pour enchaîner.
    ///
    /// Sans effet sur une expression vide ou déjà évaluée.
    pub fn egal(&mut self) {
        if self.saisie.expression().is_empty() || self.saisie.vient_d_evaluer() {
            return;
        }

        let expression = self.saisie.expression().to_string();
        match eval_expression(&expression) {
            Ok(v) => {
                let resultat = format_resultat(v);
                debug!(%expression, %resultat, "évaluation");
                self.historique.ajouter(expression, resultat.clone());
                self.saisie.fixer_resultat(resultat);
            }
            Err(e) => {
                info!(%expression, erreur = %e, "évaluation impossible");
                self.saisie.fixer_resultat(TEXTE_ERREUR);
            }
        }
    }

    pub fn texte_affiche(&self) -> &str {
        self.saisie.affichage()
    }

    pub fn expression(&self) -> &str {
        self.saisie.expression()
    }

    pub fn vient_d_evaluer(&self) -> bool {
        self.saisie.vient_d_evaluer()
    }

    /// "expr = résultat", le plus récent d’abord.
    pub fn historique(&self) -> Vec<String> {
        self.historique.lignes()
    }

    pub fn entrees_historique(&self) -> &Historique {
        &self.historique
    }
}
