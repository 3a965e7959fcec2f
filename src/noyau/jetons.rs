// src/noyau/jetons.rs

use std::fmt;

use super::erreurs::ErreurLex;

/// Garde-fou : au-delà, on refuse l’entrée avant même de la lire.
pub const LONGUEUR_MAX: usize = 4096;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonctions + constantes (tout mot en lettres, normalisé en minuscules)
    // NOTE: c’est l’évaluation qui décidera si le nom est connu.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Percent, // % postfixe

    Racine, // √ (préfixe, équivaut à sqrt)

    LPar,
    RPar,
    Comma,
}

/// Jeton + position (index en caractères dans l’entrée).
#[derive(Clone, Debug, PartialEq)]
pub struct Jeton {
    pub tok: Tok,
    pub pos: usize,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5) + notation scientifique (1e5, 2.5E-3)
/// - opérateurs + - * / %
/// - glyphes × ÷ (=> * /), √ (=> sqrt), π (=> pi)
/// - parenthèses ( ) et virgule
/// - identifiants [a-zA-Z]+ (normalisés en minuscules)
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurLex> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > LONGUEUR_MAX {
        return Err(ErreurLex::InputTooLong { max: LONGUEUR_MAX });
    }

    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Symboles d’un caractère (glyphes localisés compris)
        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            ',' => Some(Tok::Comma),
            '+' => Some(Tok::Plus),
            '-' | '−' => Some(Tok::Minus),
            '*' | '×' => Some(Tok::Star),
            '/' | '÷' => Some(Tok::Slash),
            '%' => Some(Tok::Percent),
            '√' => Some(Tok::Racine),
            'π' => Some(Tok::Ident("pi".to_string())),
            _ => None,
        };
        if let Some(tok) = simple {
            out.push(Jeton { tok, pos: i });
            i += 1;
            continue;
        }

        // Nombre : chiffres, ou '.' immédiatement suivi d’un chiffre
        let debut_nombre = c.is_ascii_digit()
            || (c == '.' && chars.get(i + 1).is_some_and(|d| d.is_ascii_digit()));
        if debut_nombre {
            let (valeur, fin) = lire_nombre(&chars, i)?;
            out.push(Jeton {
                tok: Tok::Num(valeur),
                pos: i,
            });
            i = fin;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z]+
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Jeton {
                tok: Tok::Ident(word.to_ascii_lowercase()),
                pos: start,
            });
            continue;
        }

        return Err(ErreurLex::UnexpectedChar { c, pos: i });
    }

    Ok(out)
}

/// Lit un littéral numérique à partir de `start`.
/// Retourne (valeur, index juste après le littéral).
///
/// Un 'e'/'E' collé au nombre ouvre TOUJOURS un exposant : "1e5" est un seul
/// nombre, et "2e" est mal formé (pas de multiplication implicite par e).
fn lire_nombre(chars: &[char], start: usize) -> Result<(f64, usize), ErreurLex> {
    let malforme = ErreurLex::MalformedNumber { pos: start };
    let mut i = start;
    let mut point_vu = false;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            i += 1;
        } else if c == '.' {
            if point_vu {
                return Err(malforme);
            }
            point_vu = true;
            i += 1;
        } else {
            break;
        }
    }

    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        i += 1;
        if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
            i += 1;
        }
        let debut_exposant = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i == debut_exposant {
            return Err(malforme);
        }
    }

    // "1.5.2" : le second point colle au littéral (après exposant aussi)
    if i < chars.len() && chars[i] == '.' {
        return Err(malforme);
    }

    let texte: String = chars[start..i].iter().collect();
    let valeur = texte.parse::<f64>().map_err(|_| malforme)?;
    Ok((valeur, i))
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Ident(name) => f.write_str(name),

            Tok::Plus => f.write_str("+"),
            Tok::Minus => f.write_str("-"),
            Tok::Star => f.write_str("*"),
            Tok::Slash => f.write_str("/"),
            Tok::Percent => f.write_str("%"),
            Tok::Racine => f.write_str("√"),

            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
            Tok::Comma => f.write_str(","),
        }
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| j.tok.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
