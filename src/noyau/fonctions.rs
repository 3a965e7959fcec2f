// src/noyau/fonctions.rs
//
// Table statique des noms reconnus : constantes + fonctions.
// Un nom => une variante d’énumération fermée (arité + implémentation).
// Aucune résolution dynamique : tout nom hors table est “inconnu”.

use std::f64::consts;

use super::trig::{depuis_radians, trig, TrigFn, TrigOutcome, UniteAngle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn depuis_nom(nom: &str) -> Option<Constante> {
        match nom {
            "pi" => Some(Constante::Pi),
            "e" => Some(Constante::E),
            _ => None,
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => consts::PI,
            Constante::E => consts::E,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Log, // base 10
    Ln,
    Pow,
}

impl Fonction {
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        use Fonction::*;
        let f = match nom {
            "sin" => Sin,
            "cos" => Cos,
            "tan" => Tan,
            "asin" => Asin,
            "acos" => Acos,
            "atan" => Atan,
            "sqrt" => Sqrt,
            "log" => Log,
            "ln" => Ln,
            "pow" => Pow,
            _ => return None,
        };
        Some(f)
    }

    pub fn arite(self) -> usize {
        match self {
            Fonction::Pow => 2,
            _ => 1,
        }
    }

    /// Applique la fonction. `args.len()` == `arite()` (vérifié au parse).
    ///
    /// Retour `None` : résultat indéfini (ex: tan(90°)). Les valeurs non finies
    /// (NaN, ±inf) sont renvoyées telles quelles : le contrôle de finitude
    /// est fait par l’évaluateur.
    pub fn appliquer(self, args: &[f64], unite: UniteAngle) -> Option<f64> {
        use Fonction::*;

        let x = args.first().copied().unwrap_or(f64::NAN);

        let v = match self {
            Sin => return trig_valeur(TrigFn::Sin, x, unite),
            Cos => return trig_valeur(TrigFn::Cos, x, unite),
            Tan => return trig_valeur(TrigFn::Tan, x, unite),

            Asin => depuis_radians(x.asin(), unite),
            Acos => depuis_radians(x.acos(), unite),
            Atan => depuis_radians(x.atan(), unite),

            Sqrt => x.sqrt(),
            Log => x.log10(),
            Ln => x.ln(),

            Pow => {
                let y = args.get(1).copied().unwrap_or(f64::NAN);
                x.powf(y)
            }
        };
        Some(v)
    }
}

fn trig_valeur(f: TrigFn, x: f64, unite: UniteAngle) -> Option<f64> {
    match trig(f, x, unite) {
        TrigOutcome::Valeur(v) => Some(v),
        TrigOutcome::Indefini => None,
    }
}
