//! Noyau — évaluation (pipeline réel)
//!
//! sanitize -> jetons -> réduction gauche-à-droite
//!
//! AUCUNE priorité d’opérateurs : chaque opérateur s’applique tout de suite
//! au résultat courant et au nombre suivant. "2+3×5" vaut 25, pas 17.

use tracing::trace;

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, sanitize, tokenize, Jetons, Operateur};

/// API publique : évalue une expression telle qu’affichée (glyphes × ÷ − acceptés).
///
/// Un résultat NaN / ±∞ est refusé (`ResultatNonFini`) : il ne pourrait pas
/// être réaffiché puis enchaîné.
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurEval> {
    let jetons = tokenize(&sanitize(expr_str))?;
    trace!(jetons = %format_tokens(&jetons), "jetons");

    let v = evaluer_gauche_droite(&jetons)?;
    if !v.is_finite() {
        return Err(ErreurEval::ResultatNonFini);
    }
    Ok(v)
}

/// Réduction gauche-à-droite.
///
/// - aucun nombre => 0 (ex: expression faite seulement d’opérateurs)
/// - sinon il faut exactement nombres-1 opérateurs, vérifié AVANT tout calcul
pub fn evaluer_gauche_droite(jetons: &Jetons) -> Result<f64, ErreurEval> {
    let Jetons {
        nombres,
        operateurs,
    } = jetons;

    let Some((&premier, suite)) = nombres.split_first() else {
        return Ok(0.0);
    };

    if operateurs.len() != suite.len() {
        return Err(ErreurEval::ExpressionMalformee {
            nombres: nombres.len(),
            operateurs: operateurs.len(),
        });
    }

    operateurs
        .iter()
        .zip(suite)
        .try_fold(premier, |acc, (&op, &n)| appliquer(op, acc, n))
}

fn appliquer(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurEval> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Moins => Ok(a - b),
        Operateur::Fois => Ok(a * b),
        Operateur::Div => {
            if b == 0.0 {
                return Err(ErreurEval::DivisionParZero);
            }
            Ok(a / b)
        }
        // reste flottant : signe du dividende (pas un modulo mathématique)
        Operateur::Modulo => Ok(a % b),
    }
}
