//! Tests scientifiques (campagne) : propriétés observables du pipeline complet.
//!
//! - précédence, pourcent, glyphes, arrondi d’affichage
//! - taxonomie d’erreurs (type fin conservé, deux catégories visibles)
//! - aller-retour d’angle asin(sin θ) en degrés (proptest)
//! - pureté : même entrée + même unité => même sortie

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::erreurs::{ErreurCalcul, ErreurEval, ErreurLex, ErreurParse};
use super::eval::EvalResult;
use super::format::{format_resultat, TEXTE_ENTREE_INVALIDE, TEXTE_ERREUR_MATH};
use super::{calculer, evaluer_expression, UniteAngle};

fn texte(expr: &str) -> String {
    let a = evaluer_expression(expr, UniteAngle::Degres);
    assert!(!a.est_erreur, "expr={expr:?} => erreur {:?}", a.texte);
    a.texte
}

fn erreur(expr: &str) -> ErreurCalcul {
    match calculer(expr, UniteAngle::Degres).resultat {
        EvalResult::Erreur(e) => e,
        EvalResult::Nombre(v) => panic!("expr={expr:?} : erreur attendue, reçu {v}"),
    }
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Précédence + pourcent ------------------------ */

#[test]
fn sci_precedence_standard() {
    assert_eq!(texte("2+3*4"), "14");
    assert_eq!(texte("(2+3)*4"), "20");
    assert_eq!(texte("2*3+4*5"), "26");
    assert_eq!(texte("-(2+3)*2"), "-10");
}

#[test]
fn sci_pourcent_avant_addition() {
    assert_eq!(texte("50+10%"), "50.1");
    assert_eq!(texte("200-50%"), "199.5");
}

/* ------------------------ Glyphes + arrondi ------------------------ */

#[test]
fn sci_glyphes_localises() {
    assert_eq!(texte("5×3"), "15");
    assert_eq!(texte("√9"), "3");
    assert_eq!(texte("9÷3"), "3");
    assert_eq!(texte("2×π"), texte("2*pi"));
}

#[test]
fn sci_arrondi_affichage() {
    assert_eq!(texte("0.1+0.2"), "0.3");
    assert_eq!(texte("1-0.9"), "0.1");
    assert_eq!(texte("1/3"), "0.333333333333");
    assert_eq!(texte("2/3"), "0.666666666667");
}

#[test]
fn sci_notation_scientifique() {
    assert_eq!(texte("1e5"), "100000");
    assert_eq!(texte("1e5+e-e"), "100000");
    assert_eq!(texte("1e-9*3"), "3e-9");
}

/* ------------------------ Taxonomie d’erreurs ------------------------ */

#[test]
fn sci_erreurs_math() {
    for expr in ["sqrt(-1)", "1/0", "log(-5)", "ln(0)", "tan(90)"] {
        assert_eq!(erreur(expr), ErreurCalcul::Eval(ErreurEval::MathError), "expr={expr:?}");
        let a = evaluer_expression(expr, UniteAngle::Degres);
        assert!(a.est_erreur);
        assert_eq!(a.texte, TEXTE_ERREUR_MATH);
    }
}

#[test]
fn sci_erreurs_entree_invalide() {
    assert_eq!(
        erreur("foo(1)"),
        ErreurCalcul::Eval(ErreurEval::UnknownIdentifier("foo".into()))
    );
    assert_eq!(erreur("2+"), ErreurCalcul::Parse(ErreurParse::UnexpectedEnd));
    assert_eq!(
        erreur("2 3"),
        ErreurCalcul::Parse(ErreurParse::UnexpectedToken {
            trouve: "3".into(),
            pos: 2
        })
    );
    assert_eq!(
        erreur("1..2"),
        ErreurCalcul::Lex(ErreurLex::MalformedNumber { pos: 0 })
    );
    assert_eq!(
        erreur("pow(2)"),
        ErreurCalcul::Parse(ErreurParse::ArityMismatch {
            nom: "pow".into(),
            attendu: 2,
            recu: 1
        })
    );

    for expr in ["foo(1)", "2+", "2 3", "1..2", "pow(2)", "$"] {
        let a = evaluer_expression(expr, UniteAngle::Degres);
        assert!(a.est_erreur, "expr={expr:?}");
        assert_eq!(a.texte, TEXTE_ENTREE_INVALIDE, "expr={expr:?}");
    }
}

/* ------------------------ Unité d’angle ------------------------ */

#[test]
fn sci_unite_passee_par_appel() {
    // deux appels entrelacés avec des unités différentes ne se gênent pas
    let deg = evaluer_expression("cos(180)", UniteAngle::Degres);
    let rad = evaluer_expression("cos(pi)", UniteAngle::Radians);
    let deg2 = evaluer_expression("cos(180)", UniteAngle::Degres);
    assert_eq!(deg.texte, "-1");
    assert_eq!(rad.texte, "-1");
    assert_eq!(deg, deg2);
}

#[test]
fn sci_petits_angles_gardent_leur_valeur() {
    let r = UniteAngle::Radians;
    assert_eq!(evaluer_expression("sin(1e-13)", r).texte, "1e-13");
    assert_eq!(evaluer_expression("tan(1e-13)", r).texte, "1e-13");
    assert_eq!(evaluer_expression("sin(-2.5e-12)", r).texte, "-2.5e-12");
    assert_eq!(texte("asin(sin(5e-11))"), "5e-11");
    assert_eq!(texte("atan(tan(1e-9))"), "1e-9");
}

#[test]
fn sci_inverses_en_radians() {
    let a = evaluer_expression("asin(1)", UniteAngle::Radians);
    assert_eq!(a.texte, "1.57079632679");
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // 2048 termes (4095 caractères) : chaîne gauche aussi haute que l’entrée
    let expr = vec!["1"; 2048].join("+");
    assert!(expr.chars().count() <= 4096);

    let c = calculer(&expr, UniteAngle::Degres);
    assert_eq!(c.affichage.texte, "2048");
    assert!(c.demarche.arbre.starts_with("(((("));
    budget(t0, max);

    // 2 / 2^2047 : sous-dépassement vers 0 (fini), pas d’erreur
    let expr = vec!["2"; 2048].join("/");
    assert_eq!(texte(&expr), "0");
    budget(t0, max);
}

#[test]
fn sci_stress_pourcents_a_la_limite() {
    // "1%%%…" : refusé dès le second %, sans jamais construire la chaîne
    let expr = format!("1{}", "%".repeat(4095));
    assert_eq!(
        erreur(&expr),
        ErreurCalcul::Parse(ErreurParse::UnexpectedToken {
            trouve: "%".into(),
            pos: 2
        })
    );

    // alternance légale : 1% * 1% * … jusqu’à la limite
    let expr = format!("1{}", "%*1".repeat(1023));
    assert!(expr.chars().count() <= 4096);
    assert_eq!(texte(&expr), "0");
}

#[test]
fn sci_stress_entree_trop_longue() {
    let expr = "1+".repeat(3000) + "1";
    assert_eq!(
        erreur(&expr),
        ErreurCalcul::Lex(ErreurLex::InputTooLong { max: 4096 })
    );
}

/* ------------------------ Propriétés (proptest) ------------------------ */

proptest! {
    /// asin(sin θ) = θ en degrés, à la tolérance de l’arrondi près.
    #[test]
    fn prop_aller_retour_angle_degres(theta in -89.0f64..89.0) {
        let expr = format!("asin(sin({theta}))");
        match calculer(&expr, UniteAngle::Degres).resultat {
            EvalResult::Nombre(v) => {
                let tol = 1e-9 * theta.abs().max(1.0);
                prop_assert!((v - theta).abs() <= tol, "theta={theta} v={v}");
            }
            EvalResult::Erreur(e) => {
                return Err(TestCaseError::fail(format!("theta={theta} erreur={e}")));
            }
        }
    }

    /// Angles entiers : l’aller-retour est exact après arrondi.
    #[test]
    fn prop_aller_retour_angle_entier(theta in -90i32..=90) {
        let a = evaluer_expression(&format!("asin(sin({theta}))"), UniteAngle::Degres);
        prop_assert_eq!(a.texte, theta.to_string());
    }

    /// Petits angles (jusqu’à 1e-15 degré) : jamais ramenés à 0.
    #[test]
    fn prop_aller_retour_petits_angles(
        mantisse in 1.0f64..10.0,
        exposant in -15i32..=-1,
        negatif in any::<bool>(),
    ) {
        let signe = if negatif { -1.0 } else { 1.0 };
        let theta = signe * mantisse * 10f64.powi(exposant);
        let expr = format!("asin(sin({theta:e}))");
        match calculer(&expr, UniteAngle::Degres).resultat {
            EvalResult::Nombre(v) => {
                let tol = 1e-9 * theta.abs();
                prop_assert!((v - theta).abs() <= tol, "theta={theta:e} v={v:e}");
            }
            EvalResult::Erreur(e) => {
                return Err(TestCaseError::fail(format!("theta={theta:e} erreur={e}")));
            }
        }
    }

    /// Pureté : même entrée + même unité => même résultat, même texte.
    #[test]
    fn prop_purete(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6, rad in any::<bool>()) {
        let unite = if rad { UniteAngle::Radians } else { UniteAngle::Degres };
        let expr = format!("sin({a})*{b}+sqrt({a})/({b})%");
        let c1 = calculer(&expr, unite);
        let c2 = calculer(&expr, unite);
        prop_assert_eq!(&c1, &c2);
        prop_assert_eq!(format_resultat(&c1.resultat), format_resultat(&c1.resultat));
    }

    /// L’affichage ne montre jamais inf / NaN.
    #[test]
    fn prop_jamais_non_fini(a in any::<f64>(), b in any::<f64>()) {
        let expr = format!("({a})/({b})");
        let t = evaluer_expression(&expr, UniteAngle::Degres).texte;
        prop_assert!(!t.contains("inf") && !t.contains("NaN"), "expr={expr} texte={t}");
    }
}
