// src/noyau/format.rs

use num_traits::ToPrimitive;

/// Affichage d’un résultat :
/// - valeur entière (tient dans un i64) => entier sans point ni zéros (4.0 -> "4")
/// - sinon Display f64 : chiffres minimaux, '.' décimal, jamais de notation scientifique
///
/// 2^63 sort de i64 (`to_i64` = None) mais le Display f64 d’un entier
/// n’a pas de partie décimale : le texte reste "9223372036854775808".
pub fn format_resultat(x: f64) -> String {
    match x.to_i64() {
        Some(n) if n as f64 == x => format!("{n}"),
        _ => format!("{x}"),
    }
}
