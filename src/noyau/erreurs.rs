// src/noyau/erreurs.rs
//
// Taxonomie d’erreurs du noyau.
// - ErreurLex   : jetons (caractère inconnu, nombre mal formé)
// - ErreurParse : syntaxe (jeton inattendu, fin prématurée, arité)
// - ErreurEval  : évaluation (non-fini, identifiant inconnu)
//
// Le formatteur ne montre que deux catégories (Categorie), mais le type fin
// reste disponible pour les tests et les traces.

use thiserror::Error;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurLex {
    #[error("caractère inattendu '{c}' (position {pos})")]
    UnexpectedChar { c: char, pos: usize },

    #[error("nombre mal formé (position {pos})")]
    MalformedNumber { pos: usize },

    #[error("entrée trop longue (max {max} caractères)")]
    InputTooLong { max: usize },
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurParse {
    #[error("jeton inattendu '{trouve}' (position {pos})")]
    UnexpectedToken { trouve: String, pos: usize },

    #[error("fin d’expression inattendue")]
    UnexpectedEnd,

    #[error("{nom} attend {attendu} argument(s), reçu {recu}")]
    ArityMismatch {
        nom: String,
        attendu: usize,
        recu: usize,
    },

    #[error("imbrication trop profonde (max {max})")]
    NestingTooDeep { max: usize },
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    /// Résultat infini ou NaN (√ négatif, log ≤ 0, division par zéro…).
    #[error("erreur math (résultat non fini)")]
    MathError,

    #[error("identifiant inconnu: {0}")]
    UnknownIdentifier(String),
}

/// Erreur d’un appel complet (jetons → arbre → valeur).
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error(transparent)]
    Lex(#[from] ErreurLex),

    #[error(transparent)]
    Parse(#[from] ErreurParse),

    #[error(transparent)]
    Eval(#[from] ErreurEval),
}

/// Les deux catégories visibles par l’utilisateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    MathError,
    InvalidInput,
}

impl ErreurCalcul {
    pub fn categorie(&self) -> Categorie {
        match self {
            ErreurCalcul::Eval(ErreurEval::MathError) => Categorie::MathError,
            ErreurCalcul::Eval(ErreurEval::UnknownIdentifier(_))
            | ErreurCalcul::Lex(_)
            | ErreurCalcul::Parse(_) => Categorie::InvalidInput,
        }
    }
}
