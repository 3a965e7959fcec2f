//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, affichage, drapeau
//! d’erreur, unité d’angle, démarche) et offrir des opérations simples
//! (C/CLR/AC, bascule DEG/RAD) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - L’unité d’angle vit ici et est passée au noyau à CHAQUE appel.

use crate::noyau::{Affichage, Demarche, UniteAngle};

/// Unité au lancement (convention des calculatrices de poche).
const UNITE_DEFAUT: UniteAngle = UniteAngle::Degres;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // dernier affichage (nombre ou message d’erreur)
    pub est_erreur: bool,
    pub apercu: String, // aperçu pendant la frappe (vide si invalide)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub unite: UniteAngle,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            est_erreur: false,
            apercu: String::new(),
            demarche: Demarche::default(),
            unite: UNITE_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + unité par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.unite = UNITE_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.apercu.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.est_erreur = false;
        self.apercu.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// DEG <-> RAD. L’aperçu dépend de l’unité : il sera recalculé.
    pub fn basculer_unite(&mut self) {
        self.unite = self.unite.basculer();
        self.apercu.clear();
        self.focus_entree = true;
    }

    /// Déposer un résultat complet (affichage + démarche).
    ///
    /// Choix UX : même en erreur on garde la démarche (elle montre l’étape
    /// où le calcul s’est arrêté).
    pub fn set_resultat(&mut self, affichage: Affichage, demarche: Demarche) {
        self.resultat = affichage.texte;
        self.est_erreur = affichage.est_erreur;
        self.demarche = demarche;
        self.apercu.clear();
        self.focus_entree = true;
    }

    /// Aperçu pendant la frappe : seulement les résultats valides
    /// (une expression en cours de frappe est souvent incomplète).
    pub fn set_apercu(&mut self, affichage: Affichage) {
        if affichage.est_erreur {
            self.apercu.clear();
        } else {
            self.apercu = affichage.texte;
        }
    }
}
