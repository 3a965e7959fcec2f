//! Noyau — évaluation de l’arbre
//!
//! Parcours récursif de `Expr`, sans jamais le modifier :
//! - constantes / fonctions résolues par la table statique (fonctions.rs)
//! - politique d’angle passée en paramètre (jamais globale)
//! - contrôle de finitude après CHAQUE calcul : NaN / ±inf => ErreurMath,
//!   la valeur non finie ne remonte jamais plus haut
//! - arrondi final à 12 chiffres significatifs (0.1 + 0.2 => 0.3)

use super::erreurs::{ErreurCalcul, ErreurEval};
use super::expr::{Base, Expr, Maillon, OpBinaire};
use super::fonctions::{Constante, Fonction};
use super::trig::UniteAngle;

/// Précision d’affichage : absorbe le bruit binaire des flottants.
pub const CHIFFRES_SIGNIFICATIFS: usize = 12;

#[derive(Clone, Debug, PartialEq)]
pub enum EvalResult {
    Nombre(f64),
    Erreur(ErreurCalcul),
}

/// API : évalue un arbre déjà construit.
pub fn evaluer(expr: &Expr, unite: UniteAngle) -> EvalResult {
    match evaluer_noeud(expr, unite) {
        Ok(v) => EvalResult::Nombre(arrondir_significatif(v, CHIFFRES_SIGNIFICATIFS)),
        Err(e) => EvalResult::Erreur(e.into()),
    }
}

/// Chaîne + - * / % : boucle sur l’épine gauche ; la récursion ne descend
/// que dans les opérandes droits et la base (imbrication bornée au parse).
fn evaluer_noeud(expr: &Expr, unite: UniteAngle) -> Result<f64, ErreurEval> {
    let (base, maillons) = expr.epine();

    let mut acc = match base {
        Base::Nombre(v) => v,

        Base::Constante(nom) => Constante::depuis_nom(nom)
            .map(Constante::valeur)
            .ok_or_else(|| ErreurEval::UnknownIdentifier(nom.to_string()))?,

        Base::Appel(nom, args) => {
            let f = Fonction::depuis_nom(nom)
                .ok_or_else(|| ErreurEval::UnknownIdentifier(nom.to_string()))?;

            let mut valeurs = Vec::with_capacity(args.len());
            for a in args {
                valeurs.push(evaluer_noeud(a, unite)?);
            }

            // None : indéfini (tan(90°)) => même catégorie que non fini
            f.appliquer(&valeurs, unite).ok_or(ErreurEval::MathError)?
        }

        Base::Neg(x) => -evaluer_noeud(x, unite)?,
    };
    acc = fini(acc)?;

    for m in maillons {
        acc = match m {
            Maillon::Binaire(op, droite) => {
                let b = evaluer_noeud(droite, unite)?;
                match op {
                    OpBinaire::Add => acc + b,
                    OpBinaire::Sub => acc - b,
                    OpBinaire::Mul => acc * b,
                    OpBinaire::Div => acc / b,
                }
            }
            Maillon::Pourcent => acc / 100.0,
        };
        acc = fini(acc)?;
    }

    Ok(acc)
}

/// Contrôle de finitude : court-circuit immédiat.
fn fini(v: f64) -> Result<f64, ErreurEval> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurEval::MathError)
    }
}

/// Arrondi à `chiffres` chiffres significatifs (décimaux).
///
/// Passe par l’écriture scientifique : l’arrondi décimal est exact là où
/// `(v * 10^k).round() / 10^k` réintroduirait du bruit binaire.
/// -0 devient 0.
pub fn arrondir_significatif(v: f64, chiffres: usize) -> f64 {
    if v == 0.0 || !v.is_finite() || chiffres == 0 {
        return if v == 0.0 { 0.0 } else { v };
    }
    let texte = format!("{:.*e}", chiffres - 1, v);
    texte.parse::<f64>().unwrap_or(v)
}
