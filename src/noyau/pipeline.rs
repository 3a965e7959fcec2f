//! Noyau — pipeline complet
//!
//! jetons -> arbre -> valeur -> affichage
//!
//! Idle → Jetons → Syntaxe → Evaluation → Formaté : toute erreur saute
//! directement à “Formaté” avec sa charge d’erreur (pas de reprise, pas de
//! résultat partiel). Rien n’est conservé d’un appel à l’autre.

use tracing::debug;

use super::erreurs::ErreurCalcul;
use super::eval::{evaluer, EvalResult};
use super::expr::{format_expr_pretty, Expr};
use super::format::{affichage, Affichage};
use super::jetons::{format_tokens, tokenize};
use super::syntaxe::parse;
use super::trig::UniteAngle;

/// Dernière étape atteinte par le pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Etape {
    #[default]
    Idle,
    Jetons,
    Syntaxe,
    Evaluation,
    Formate,
}

/// Trace lisible du calcul (panneau “Démarche”).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub arbre: String,
    /// Étape où le pipeline s’est arrêté (Formate si tout a réussi).
    pub etape: Etape,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    pub resultat: EvalResult,
    pub affichage: Affichage,
    pub demarche: Demarche,
}

/// API publique minimale : texte affiché + drapeau d’erreur.
pub fn evaluer_expression(entree: &str, unite: UniteAngle) -> Affichage {
    calculer(entree, unite).affichage
}

/// API complète : résultat typé + affichage + démarche.
#[tracing::instrument(level = "debug", skip(unite), fields(unite = unite.libelle()))]
pub fn calculer(entree: &str, unite: UniteAngle) -> Calcul {
    let mut demarche = Demarche::default();

    let resultat = match analyser(entree, &mut demarche) {
        Ok(arbre) => {
            demarche.etape = Etape::Evaluation;
            evaluer(&arbre, unite)
        }
        Err(e) => EvalResult::Erreur(e),
    };

    match &resultat {
        EvalResult::Nombre(v) => {
            debug!(valeur = *v, "évaluation réussie");
            demarche.etape = Etape::Formate;
        }
        EvalResult::Erreur(e) => {
            debug!(etape = ?demarche.etape, erreur = %e, "évaluation échouée");
        }
    }

    Calcul {
        affichage: affichage(&resultat),
        resultat,
        demarche,
    }
}

/// Jetons + arbre, en remplissant la démarche au fil de l’eau.
fn analyser(entree: &str, demarche: &mut Demarche) -> Result<Expr, ErreurCalcul> {
    demarche.etape = Etape::Jetons;
    let jetons = tokenize(entree.trim())?;
    demarche.jetons = format_tokens(&jetons);
    debug!(n = jetons.len(), jetons = %demarche.jetons, "jetons");

    demarche.etape = Etape::Syntaxe;
    let arbre = parse(&jetons)?;
    demarche.arbre = format_expr_pretty(&arbre);
    debug!(arbre = %demarche.arbre, "arbre");

    Ok(arbre)
}
