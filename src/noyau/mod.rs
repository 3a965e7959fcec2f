//! Noyau scientifique (flottant, 12 chiffres significatifs)
//!
//! Organisation interne :
//! - erreurs.rs   : taxonomie (lex / parse / éval) + catégories visibles
//! - jetons.rs    : tokenisation (glyphes × ÷ √ π normalisés)
//! - expr.rs      : AST + affichage “démarche”
//! - syntaxe.rs   : descente récursive jetons -> Expr
//! - fonctions.rs : table statique constantes / fonctions
//! - trig.rs      : unité d’angle + angles spéciaux
//! - eval.rs      : évaluation + contrôle de finitude + arrondi
//! - format.rs    : affichage du résultat
//! - pipeline.rs  : pipeline complet

pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod pipeline;
pub mod syntaxe;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use format::Affichage;
pub use pipeline::{calculer, evaluer_expression, Demarche};
pub use trig::UniteAngle;
