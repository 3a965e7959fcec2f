// src/noyau/expr.rs
//
// AST flottant.
// - Nombre    : littéral f64
// - Constante : nom (pi, e, ou inconnu => décidé à l’évaluation)
// - Appel     : fonction + arguments (un seul, sauf pow)
// - Binaire / Unaire : opérateurs
//
// IMPORTANT :
// - l’arbre n’est construit que par un parse réussi (jamais d’arbre partiel)
// - l’évaluation le lit sans jamais le modifier
// - les chaînes + - * / % donnent un arbre penché à gauche, aussi haut que
//   l’entrée est longue : on le parcourt par son épine (boucle), jamais en
//   récursion sur l’enfant gauche. Seule l’imbrication comptée par le
//   parse (parenthèses, moins unaire, √, appels) coûte de la pile.

use std::mem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUnaire {
    Neg,
    Pourcent, // x% = x/100
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),
    Constante(String),
    Appel(String, Vec<Expr>),
    Binaire(OpBinaire, Box<Expr>, Box<Expr>),
    Unaire(OpUnaire, Box<Expr>),
}

impl Expr {
    pub fn binaire(op: OpBinaire, a: Expr, b: Expr) -> Expr {
        Expr::Binaire(op, Box::new(a), Box::new(b))
    }

    pub fn unaire(op: OpUnaire, x: Expr) -> Expr {
        Expr::Unaire(op, Box::new(x))
    }

    /// Déroule l’épine gauche : la base (premier opérande de la chaîne) puis
    /// les maillons, du plus interne au plus externe.
    ///
    /// "1 + 2 * 3 % - 4" => base 1, maillons [+ (2*3)%, - 4]
    pub fn epine(&self) -> (Base<'_>, Vec<Maillon<'_>>) {
        let mut maillons = Vec::new();
        let mut courant = self;

        let base = loop {
            match courant {
                Expr::Binaire(op, a, b) => {
                    maillons.push(Maillon::Binaire(*op, &**b));
                    courant = &**a;
                }
                Expr::Unaire(OpUnaire::Pourcent, x) => {
                    maillons.push(Maillon::Pourcent);
                    courant = &**x;
                }
                Expr::Unaire(OpUnaire::Neg, x) => break Base::Neg(&**x),
                Expr::Nombre(v) => break Base::Nombre(*v),
                Expr::Constante(nom) => break Base::Constante(nom),
                Expr::Appel(nom, args) => break Base::Appel(nom, args),
            }
        };

        maillons.reverse();
        (base, maillons)
    }
}

/// Premier opérande d’une chaîne (jamais un Binaire ni un %).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Base<'a> {
    Nombre(f64),
    Constante(&'a str),
    Appel(&'a str, &'a [Expr]),
    Neg(&'a Expr),
}

/// Opération appliquée à l’accumulateur d’une chaîne.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Maillon<'a> {
    Binaire(OpBinaire, &'a Expr),
    Pourcent,
}

// Libération en pile explicite : le Drop dérivé descendrait toute la chaîne.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pile = Vec::new();
        detacher_enfants(self, &mut pile);
        while let Some(mut e) = pile.pop() {
            detacher_enfants(&mut e, &mut pile);
        }
    }
}

fn detacher_enfants(e: &mut Expr, pile: &mut Vec<Expr>) {
    match e {
        Expr::Binaire(_, a, b) => {
            pile.push(mem::replace(a.as_mut(), Expr::Nombre(0.0)));
            pile.push(mem::replace(b.as_mut(), Expr::Nombre(0.0)));
        }
        Expr::Unaire(_, x) => pile.push(mem::replace(x.as_mut(), Expr::Nombre(0.0))),
        Expr::Appel(_, args) => pile.append(args),
        Expr::Nombre(_) | Expr::Constante(_) => {}
    }
}

impl OpBinaire {
    pub fn symbole(self) -> char {
        match self {
            OpBinaire::Add => '+',
            OpBinaire::Sub => '-',
            OpBinaire::Mul => '*',
            OpBinaire::Div => '/',
        }
    }
}

/// Affichage “démarche” : parenthèses explicites autour de chaque opération,
/// pour montrer la précédence retenue par le parse.
pub fn format_expr_pretty(e: &Expr) -> String {
    let (base, maillons) = e.epine();

    let ouvrantes = maillons
        .iter()
        .filter(|m| matches!(m, Maillon::Binaire(..)))
        .count();
    let mut out = "(".repeat(ouvrantes);

    match base {
        Base::Nombre(v) => out.push_str(&v.to_string()),
        Base::Constante("pi") => out.push('π'),
        Base::Constante(nom) => out.push_str(nom),
        Base::Appel(nom, args) => {
            let args: Vec<String> = args.iter().map(format_expr_pretty).collect();
            out.push_str(&format!("{nom}({})", args.join(", ")));
        }
        Base::Neg(x) => {
            out.push('-');
            out.push_str(&format_expr_pretty(x));
        }
    }

    for m in maillons {
        match m {
            Maillon::Binaire(op, droite) => {
                out.push_str(&format!(" {} {})", op.symbole(), format_expr_pretty(droite)));
            }
            Maillon::Pourcent => out.push('%'),
        }
    }

    out
}
