// src/noyau/syntaxe.rs
//
// Descente récursive : jetons -> Expr
// Grammaire (précédence croissante) :
//
//   expr      := terme (('+' | '-') terme)*
//   terme     := unaire (('*' | '/') unaire | '%')*   (jamais '%' '%')
//   unaire    := '-' unaire | puissance
//   puissance := '√' puissance | primaire
//   primaire  := nombre | ident | ident '(' args? ')' | '(' expr ')'
//   args      := expr (',' expr)*
//
// Règles:
// - '%' postfixe (un seul d’affilée) : divise par 100 tout ce que le terme a accumulé
//   (plus lié que + -, moins lié que * /) : "50+10%" => 50 + 0.1
// - √ préfixe == sqrt : "√9", "√(8+1)", "√√16"
// - fonction connue : arité vérifiée ici (pow = 2, les autres = 1)
// - nom inconnu : accepté tel quel, refusé à l’évaluation
// - jamais d’arbre partiel : la première erreur arrête tout

use super::erreurs::ErreurParse;
use super::expr::{Expr, OpBinaire, OpUnaire};
use super::fonctions::Fonction;
use super::jetons::{Jeton, Tok};

/// Garde-fou anti pile : parenthèses, moins unaires, √ et appels imbriqués.
pub const PROFONDEUR_MAX: usize = 256;

/// Construit l’arbre complet, ou échoue sans rien produire.
pub fn parse(jetons: &[Jeton]) -> Result<Expr, ErreurParse> {
    let mut p = Parseur {
        jetons,
        i: 0,
        profondeur: 0,
    };

    let e = p.expr()?;

    // Reste des jetons : "2 3", "2)", "1,2"…
    if let Some(j) = p.courant() {
        return Err(inattendu(j));
    }
    Ok(e)
}

struct Parseur<'a> {
    jetons: &'a [Jeton],
    i: usize,
    profondeur: usize,
}

impl<'a> Parseur<'a> {
    fn courant(&self) -> Option<&'a Jeton> {
        self.jetons.get(self.i)
    }

    fn avancer(&mut self) -> Option<&'a Jeton> {
        let j = self.jetons.get(self.i)?;
        self.i += 1;
        Some(j)
    }

    fn voit(&self, tok: &Tok) -> bool {
        self.courant().is_some_and(|j| &j.tok == tok)
    }

    fn entrer(&mut self) -> Result<(), ErreurParse> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(ErreurParse::NestingTooDeep {
                max: PROFONDEUR_MAX,
            });
        }
        Ok(())
    }

    fn sortir(&mut self) {
        self.profondeur -= 1;
    }

    fn expr(&mut self) -> Result<Expr, ErreurParse> {
        let mut gauche = self.terme()?;

        loop {
            let op = match self.courant().map(|j| &j.tok) {
                Some(Tok::Plus) => OpBinaire::Add,
                Some(Tok::Minus) => OpBinaire::Sub,
                _ => break,
            };
            self.i += 1;

            let droite = self.terme()?;
            gauche = Expr::binaire(op, gauche, droite);
        }

        Ok(gauche)
    }

    fn terme(&mut self) -> Result<Expr, ErreurParse> {
        let mut acc = self.unaire()?;
        let mut apres_pourcent = false;

        while let Some(j) = self.courant() {
            match j.tok {
                Tok::Star => {
                    self.i += 1;
                    let d = self.unaire()?;
                    acc = Expr::binaire(OpBinaire::Mul, acc, d);
                    apres_pourcent = false;
                }
                Tok::Slash => {
                    self.i += 1;
                    let d = self.unaire()?;
                    acc = Expr::binaire(OpBinaire::Div, acc, d);
                    apres_pourcent = false;
                }
                // un seul % par facteur : "5%%" est refusé
                Tok::Percent if apres_pourcent => return Err(inattendu(j)),
                Tok::Percent => {
                    self.i += 1;
                    acc = Expr::unaire(OpUnaire::Pourcent, acc);
                    apres_pourcent = true;
                }
                _ => break,
            }
        }

        Ok(acc)
    }

    fn unaire(&mut self) -> Result<Expr, ErreurParse> {
        if self.voit(&Tok::Minus) {
            self.i += 1;
            self.entrer()?;
            let x = self.unaire()?;
            self.sortir();
            return Ok(Expr::unaire(OpUnaire::Neg, x));
        }
        self.puissance()
    }

    fn puissance(&mut self) -> Result<Expr, ErreurParse> {
        if self.voit(&Tok::Racine) {
            self.i += 1;
            self.entrer()?;
            let x = self.puissance()?;
            self.sortir();
            return Ok(Expr::Appel("sqrt".to_string(), vec![x]));
        }
        self.primaire()
    }

    fn primaire(&mut self) -> Result<Expr, ErreurParse> {
        let j = self.avancer().ok_or(ErreurParse::UnexpectedEnd)?;

        match &j.tok {
            Tok::Num(v) => Ok(Expr::Nombre(*v)),

            Tok::Ident(nom) => {
                if !self.voit(&Tok::LPar) {
                    return Ok(Expr::Constante(nom.clone()));
                }
                self.i += 1;

                self.entrer()?;
                let args = self.arguments()?;
                self.sortir();

                if let Some(f) = Fonction::depuis_nom(nom) {
                    if args.len() != f.arite() {
                        return Err(ErreurParse::ArityMismatch {
                            nom: nom.clone(),
                            attendu: f.arite(),
                            recu: args.len(),
                        });
                    }
                }
                Ok(Expr::Appel(nom.clone(), args))
            }

            Tok::LPar => {
                self.entrer()?;
                let e = self.expr()?;
                self.fermer()?;
                self.sortir();
                Ok(e)
            }

            _ => Err(inattendu(j)),
        }
    }

    /// Après '(' d’un appel : zéro ou plusieurs expressions séparées par ','.
    fn arguments(&mut self) -> Result<Vec<Expr>, ErreurParse> {
        let mut args = Vec::new();
        if self.voit(&Tok::RPar) {
            self.i += 1;
            return Ok(args);
        }

        loop {
            args.push(self.expr()?);
            let j = self.avancer().ok_or(ErreurParse::UnexpectedEnd)?;
            match j.tok {
                Tok::Comma => continue,
                Tok::RPar => return Ok(args),
                _ => return Err(inattendu(j)),
            }
        }
    }

    fn fermer(&mut self) -> Result<(), ErreurParse> {
        let j = self.avancer().ok_or(ErreurParse::UnexpectedEnd)?;
        match j.tok {
            Tok::RPar => Ok(()),
            _ => Err(inattendu(j)),
        }
    }
}

fn inattendu(j: &Jeton) -> ErreurParse {
    ErreurParse::UnexpectedToken {
        trouve: j.tok.to_string(),
        pos: j.pos,
    }
}
