// src/noyau/jetons.rs
//
// Jetons : sépare une expression en deux suites ordonnées
// - nombres    : f64
// - opérateurs : + - * / %
//
// Le signe "-" collé à un nombre (début d’expression, ou juste après un
// autre opérateur) est un signe, pas un opérateur : "12+-7", "-3+1".

use super::erreur::ErreurEval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Div,
    Modulo,
}

impl Operateur {
    /// Forme ASCII (après sanitize).
    pub fn from_ascii(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Div),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }

    /// Forme saisie : glyphes d’affichage ou ASCII clavier.
    pub fn from_saisie(c: char) -> Option<Self> {
        match c {
            '−' => Some(Self::Moins),
            '×' => Some(Self::Fois),
            '÷' => Some(Self::Div),
            _ => Self::from_ascii(c),
        }
    }

    pub fn ascii(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Div => '/',
            Self::Modulo => '%',
        }
    }

    /// Glyphe affiché à l’écran (× ÷ − plutôt que * / -).
    pub fn glyphe(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '−',
            Self::Fois => '×',
            Self::Div => '÷',
            Self::Modulo => '%',
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Jetons {
    pub nombres: Vec<f64>,
    pub operateurs: Vec<Operateur>,
}

/// Glyphes d’affichage -> ASCII.
pub fn sanitize(expr: &str) -> String {
    expr.replace('×', "*").replace('÷', "/").replace('−', "-")
}

/// Tokenize une expression déjà passée par `sanitize`.
///
/// - chiffres et '.' s’accumulent dans un tampon
/// - un opérateur vide le tampon (tampon vide => aucun nombre poussé)
/// - espaces ignorés, tout autre caractère refusé
pub fn tokenize(s: &str) -> Result<Jetons, ErreurEval> {
    let mut out = Jetons::default();
    let mut tampon = String::new();

    // true au début et juste après un opérateur : un '-' y est un signe.
    let mut attend_operande = true;
    let mut negatif = false;
    let mut signe_en_attente = false;

    for c in s.chars() {
        if c.is_ascii_digit() || c == '.' {
            tampon.push(c);
            attend_operande = false;
            continue;
        }

        if c.is_whitespace() {
            continue;
        }

        let op = Operateur::from_ascii(c).ok_or(ErreurEval::CaractereInattendu(c))?;

        if op == Operateur::Moins && tampon.is_empty() && attend_operande {
            negatif = !negatif;
            signe_en_attente = true;
            continue;
        }

        flush(&mut tampon, &mut negatif, &mut out.nombres)?;
        signe_en_attente = false;
        out.operateurs.push(op);
        attend_operande = true;
    }

    // "5×-" : signe sans nombre derrière. Sans aucun nombre ("−", "×−"),
    // on laisse passer : l’évaluation donne 0.
    if signe_en_attente && tampon.is_empty() && !out.nombres.is_empty() {
        return Err(ErreurEval::ExpressionMalformee {
            nombres: out.nombres.len(),
            operateurs: out.operateurs.len(),
        });
    }

    flush(&mut tampon, &mut negatif, &mut out.nombres)?;
    Ok(out)
}

fn flush(
    tampon: &mut String,
    negatif: &mut bool,
    nombres: &mut Vec<f64>,
) -> Result<(), ErreurEval> {
    if tampon.is_empty() {
        return Ok(());
    }

    let v: f64 = tampon
        .parse()
        .map_err(|_| ErreurEval::NombreInvalide(tampon.clone()))?;

    nombres.push(if *negatif { -v } else { v });
    tampon.clear();
    *negatif = false;
    Ok(())
}

/// Format utilitaire (traces) : jetons en texte, dans l’ordre de lecture.
pub fn format_tokens(jetons: &Jetons) -> String {
    let mut out = Vec::with_capacity(jetons.nombres.len() + jetons.operateurs.len());
    for (i, n) in jetons.nombres.iter().enumerate() {
        out.push(n.to_string());
        if let Some(op) = jetons.operateurs.get(i) {
            out.push(op.ascii().to_string());
        }
    }
    // opérateurs en trop (désynchronisation)
    for op in jetons.operateurs.iter().skip(jetons.nombres.len()) {
        out.push(op.ascii().to_string());
    }
    out.join(" ")
}
