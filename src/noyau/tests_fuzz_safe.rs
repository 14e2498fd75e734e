//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la session sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : le résultat affiché == réduction gauche-à-droite de référence

use std::time::{Duration, Instant};

use super::format::format_resultat;
use super::session::TEXTE_ERREUR;
use super::Session;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

const OPS: [char; 5] = ['+', '−', '×', '÷', '%'];

fn gen_nombre(rng: &mut Rng) -> String {
    // 0 inclus : division / reste par zéro doivent arriver
    let entier = rng.pick(30);
    if rng.pick(4) == 0 {
        format!("{entier}.{}", 1 + rng.pick(9))
    } else {
        format!("{entier}")
    }
}

/// Expression bien formée n0 op1 n1 ... + sa réduction de référence
/// (None si division par zéro ou résultat non fini).
fn gen_expr(rng: &mut Rng, max_ops: u32) -> (String, Option<f64>) {
    let n0 = gen_nombre(rng);
    let mut expr = n0.clone();
    let mut acc: Option<f64> = n0.parse().ok();

    for _ in 0..rng.pick(max_ops + 1) {
        let op = OPS[rng.pick(OPS.len() as u32) as usize];
        let n = gen_nombre(rng);
        let v: f64 = n.parse().unwrap_or(f64::NAN);

        expr.push(op);
        expr.push_str(&n);

        acc = acc.and_then(|a| match op {
            '+' => Some(a + v),
            '−' => Some(a - v),
            '×' => Some(a * v),
            '÷' if v == 0.0 => None,
            '÷' => Some(a / v),
            _ => Some(a % v),
        });
    }

    (expr, acc.filter(|v| v.is_finite()))
}

fn taper_texte(s: &mut Session, expr: &str) {
    let mut buf = [0u8; 4];
    for c in expr.chars() {
        s.handle_input(c.encode_utf8(&mut buf));
    }
}

const TOUCHES: [&str; 20] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "−", "×", "÷", "%", "equals",
    "clear", "backspace", "toggleSign",
];

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_reference_gauche_droite() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 6);

        let mut s = Session::new();
        taper_texte(&mut s, &expr);
        assert_eq!(s.texte_affiche(), expr);

        s.handle_input("equals");
        assert!(s.vient_d_evaluer());

        match attendu {
            Some(v) => {
                assert_eq!(s.texte_affiche(), format_resultat(v), "expr={expr:?}");
                assert_eq!(s.historique().len(), 1);
                seen_ok += 1;
            }
            None => {
                assert_eq!(s.texte_affiche(), TEXTE_ERREUR, "expr={expr:?}");
                assert!(s.historique().is_empty());
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_enchainement_resultats() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut s = Session::new();

    for _ in 0..100 {
        budget(t0, max);

        s.handle_input("clear");
        let (expr, attendu) = gen_expr(&mut rng, 3);
        taper_texte(&mut s, &expr);
        s.handle_input("equals");

        let Some(v) = attendu else {
            assert_eq!(s.texte_affiche(), TEXTE_ERREUR);
            continue;
        };

        // un opérateur enchaîne sur le résultat affiché (même négatif)
        s.handle_input("+");
        s.handle_input("1");
        s.handle_input("equals");
        assert_eq!(
            s.texte_affiche(),
            format_resultat(format_resultat(v).parse::<f64>().unwrap() + 1.0),
            "expr={expr:?}"
        );
    }
}

#[test]
fn fuzz_safe_touches_aleatoires_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xDEC0DE_u64);
    let mut s = Session::new();

    for _ in 0..5000 {
        budget(t0, max);

        let t = TOUCHES[rng.pick(TOUCHES.len() as u32) as usize];
        let avant = s.entrees_historique().len();
        let etait_evaluee = s.vient_d_evaluer();
        let etait_vide = s.expression().is_empty();

        s.handle_input(t);

        // "0" seulement pour une expression vide, sinon l’expression telle quelle
        if s.expression().is_empty() {
            assert_eq!(s.texte_affiche(), "0");
        } else {
            assert_eq!(s.texte_affiche(), s.expression());
        }

        // l’historique ne grandit que sur "=" réussi, d’une entrée à la fois
        let reussi = t == "equals"
            && !etait_evaluee
            && !etait_vide
            && s.texte_affiche() != TEXTE_ERREUR;
        assert_eq!(
            s.entrees_historique().len(),
            avant + usize::from(reussi),
            "touche={t:?}"
        );

        // "=" laisse toujours un résultat lisible ou "Error"
        if s.vient_d_evaluer() {
            let txt = s.texte_affiche();
            assert!(
                txt == TEXTE_ERREUR || txt.parse::<f64>().is_ok(),
                "affichage inattendu: {txt:?}"
            );
        }

        if rng.coin() && s.expression().chars().count() > 40 {
            s.handle_input("clear");
        }
    }
}
