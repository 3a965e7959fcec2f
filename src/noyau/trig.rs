// src/noyau/trig.rs
//
// Politique d’unité d’angle pour sin/cos/tan et leurs inverses
// -------------------------------------------------------------
// - sin/cos/tan : argument (unité active) -> radians, puis fonction
// - asin/acos/atan : fonction en radians, puis radians -> unité active
// - Angles spéciaux : multiple entier d’un quart de tour => valeur exacte
//   (sin(180°) = 0, cos(π/2) = 0, tan(90°) indéfini)

use std::f64::consts::{FRAC_PI_2, PI};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UniteAngle {
    #[default]
    Degres,
    Radians,
}

impl UniteAngle {
    pub fn libelle(self) -> &'static str {
        match self {
            UniteAngle::Degres => "DEG",
            UniteAngle::Radians => "RAD",
        }
    }

    pub fn basculer(self) -> UniteAngle {
        match self {
            UniteAngle::Degres => UniteAngle::Radians,
            UniteAngle::Radians => UniteAngle::Degres,
        }
    }

    /// Valeur d’un quart de tour dans cette unité.
    fn quart_de_tour(self) -> f64 {
        match self {
            UniteAngle::Degres => 90.0,
            UniteAngle::Radians => FRAC_PI_2,
        }
    }
}

pub fn vers_radians(x: f64, unite: UniteAngle) -> f64 {
    match unite {
        UniteAngle::Degres => x * (PI / 180.0),
        UniteAngle::Radians => x,
    }
}

pub fn depuis_radians(x: f64, unite: UniteAngle) -> f64 {
    match unite {
        UniteAngle::Degres => x * (180.0 / PI),
        UniteAngle::Radians => x,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrigOutcome {
    Valeur(f64),
    Indefini, // tan(90°), tan(3π/2), …
}

/// Au-delà, un f64 “entier” ne dit plus rien de l’angle réel.
const QUARTS_MAX: f64 = 1e9;

/// Bruit d’arrondi admis autour de k quarts de tour (ex: 3*pi/2), en ulp de q.
const TOLERANCE_ULP: f64 = 8.0;

/// Applique sin/cos/tan à un angle exprimé dans l’unité active.
pub fn trig(f: TrigFn, x: f64, unite: UniteAngle) -> TrigOutcome {
    if let Some(k) = quarts_entiers(x, unite) {
        return trig_special(f, k);
    }

    let r = vers_radians(x, unite);
    let v = match f {
        TrigFn::Sin => r.sin(),
        TrigFn::Cos => r.cos(),
        TrigFn::Tan => r.tan(),
    };
    TrigOutcome::Valeur(v)
}

/// Si x vaut k quarts de tour (k entier non nul), renvoie k mod 4.
///
/// k = 0 n’est jamais raccourci : près de zéro, sin/tan sont déjà exacts
/// et un petit angle (1e-13) doit garder sa valeur.
fn quarts_entiers(x: f64, unite: UniteAngle) -> Option<i64> {
    let q = x / unite.quart_de_tour();
    if !q.is_finite() || q.abs() > QUARTS_MAX {
        return None;
    }
    let k = q.round();
    if k == 0.0 || (q - k).abs() > TOLERANCE_ULP * f64::EPSILON * q.abs() {
        return None;
    }
    Some((k as i64).rem_euclid(4))
}

/// Table sur [0, 2π) par pas de π/2.
fn trig_special(f: TrigFn, k_mod: i64) -> TrigOutcome {
    use TrigOutcome::*;

    match (f, k_mod) {
        (TrigFn::Sin, 0) | (TrigFn::Sin, 2) => Valeur(0.0),
        (TrigFn::Sin, 1) => Valeur(1.0),
        (TrigFn::Sin, _) => Valeur(-1.0),

        (TrigFn::Cos, 1) | (TrigFn::Cos, 3) => Valeur(0.0),
        (TrigFn::Cos, 0) => Valeur(1.0),
        (TrigFn::Cos, _) => Valeur(-1.0),

        (TrigFn::Tan, 0) | (TrigFn::Tan, 2) => Valeur(0.0),
        (TrigFn::Tan, _) => Indefini,
    }
}
