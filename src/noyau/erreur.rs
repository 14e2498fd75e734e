// src/noyau/erreur.rs

use thiserror::Error;

/// Échecs possibles d’une évaluation.
///
/// Aucun de ces cas ne sort du noyau : `Session::egal` les absorbe tous
/// dans l’affichage "Error".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEval {
    #[error("division par zéro")]
    DivisionParZero,

    /// Jetons désynchronisés (ex: opérateur final "5+", opérateur initial "×5").
    #[error("expression malformée ({nombres} nombres, {operateurs} opérateurs)")]
    ExpressionMalformee { nombres: usize, operateurs: usize },

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    /// NaN ou ±∞ : impossible à afficher puis à enchaîner.
    #[error("résultat non fini")]
    ResultatNonFini,
}

/// Jeton d’entrée qui ne correspond à aucune touche (ignoré par la session).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("touche inconnue: {0:?}")]
pub struct ToucheInconnue(pub String);
