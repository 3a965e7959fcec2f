// src/noyau/format.rs

use super::erreurs::Categorie;
use super::eval::EvalResult;

pub const TEXTE_ERREUR_MATH: &str = "Erreur math";
pub const TEXTE_ENTREE_INVALIDE: &str = "Entrée invalide";

/// Ce que la vue affiche : texte + drapeau d’erreur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    pub texte: String,
    pub est_erreur: bool,
}

/* ------------------------ Nombres ------------------------ */

/// Au-delà / en deçà : écriture scientifique (sinon trop de zéros).
const SEUIL_GRAND: f64 = 1e21;
const SEUIL_PETIT: f64 = 1e-7;

/// Représentation décimale la plus courte (Display de f64 = aller-retour exact).
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let a = v.abs();
    if a >= SEUIL_GRAND || a < SEUIL_PETIT {
        format!("{v:e}")
    } else {
        format!("{v}")
    }
}

/* ------------------------ Résultat complet ------------------------ */

pub fn format_resultat(r: &EvalResult) -> String {
    match r {
        EvalResult::Nombre(v) if v.is_finite() => format_nombre(*v),
        // défense en profondeur : l’évaluateur ne produit jamais de non-fini
        EvalResult::Nombre(_) => TEXTE_ERREUR_MATH.to_string(),
        EvalResult::Erreur(e) => match e.categorie() {
            Categorie::MathError => TEXTE_ERREUR_MATH.to_string(),
            Categorie::InvalidInput => TEXTE_ENTREE_INVALIDE.to_string(),
        },
    }
}

pub fn affichage(r: &EvalResult) -> Affichage {
    let est_erreur = match r {
        EvalResult::Nombre(v) => !v.is_finite(),
        EvalResult::Erreur(_) => true,
    };
    Affichage {
        texte: format_resultat(r),
        est_erreur,
    }
}
