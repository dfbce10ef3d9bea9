// src/noyau/analyse.rs
//
// Descente récursive sur les jetons d’un membre.
//
// Grammaire:
//   equation → membre '=' membre
//   membre   → terme (('+'|'-') terme)*
//   terme    → facteur ('*' facteur)*
//   facteur  → operande ('/' operande)*
//   operande → atome ('^' operande)?
//   atome    → ('+'|'-')? nombre | X
//
// Règles:
// - Un '+'/'-' qui suit un terme complet est binaire ; partout ailleurs
//   (début de membre, après * / ^ ou après un '+'/'-' binaire) c’est le
//   signe du littéral qui suit. Un seul signe par littéral, jamais devant X.
// - Tour d’exposants résolue de droite à gauche ; X interdit en exposant.
// - Un terme = une fraction : Π numérateurs / Π dénominateurs, degré
//   = Σ exposants du haut - Σ exposants du bas.

use log::{debug, trace};

use super::coefficients::TableCoefficients;
use super::erreurs::{ErreurEquation, Resultat};
use super::jetons::{format_tokens, separer_cotes, tokenize, Tok, VARIABLE};
use super::numerique::{est_nul, puissance};

/// Valeur intermédiaire d’un opérande.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operande {
    Litteral(f64),
    /// X^exposant
    Variable { exposant: f64 },
}

/// Terme réduit : multiplicateur * X^degre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Terme {
    pub multiplicateur: f64,
    pub degre: f64,
}

/// Hauteur maximale d’une tour d’exposants (garde-fou de pile).
pub const MAX_PROFONDEUR: usize = 256;

/// Base d’un opérande, avant l’éventuel '^'.
#[derive(Clone, Copy, Debug)]
enum Atome {
    Nombre(f64),
    Variable,
}

/* ------------------------ API ------------------------ */

/// Équation texte -> table validée (degrés 0, 1, 2 seulement).
pub fn analyser(texte: &str) -> Resultat<TableCoefficients> {
    let tokens = tokenize(texte)?;
    analyser_jetons(&tokens)?.valider()
}

/// Jetons -> table brute (tous degrés, avant validation).
/// Membre gauche au signe +1, membre droit au signe -1.
pub fn analyser_jetons(tokens: &[Tok]) -> Resultat<TableCoefficients> {
    let (gauche, droite) = separer_cotes(tokens)?;

    let mut table = TableCoefficients::new();
    analyser_membre(gauche, 1.0, &mut table)?;
    analyser_membre(droite, -1.0, &mut table)?;
    Ok(table)
}

/// Replie tous les termes d’un membre dans `table`.
pub fn analyser_membre(tokens: &[Tok], signe: f64, table: &mut TableCoefficients) -> Resultat<()> {
    debug!("membre (signe {signe}) : {}", format_tokens(tokens));

    if tokens.is_empty() {
        return Err(ErreurEquation::syntaxe("membre vide"));
    }

    let mut cur = Curseur::new(tokens);
    let mut s = signe;

    loop {
        let terme = cur.terme()?;
        trace!("terme : {:?} * X^{:?}", terme.multiplicateur * s, terme.degre);
        table.ajouter(terme.degre, terme.multiplicateur * s);

        match cur.suivant() {
            None => return Ok(()),
            Some(Tok::Plus) => s = signe,
            Some(Tok::Minus) => s = -signe,
            Some(t) => {
                return Err(ErreurEquation::syntaxe(format!(
                    "'{}' inattendu après un terme",
                    format_tokens(std::slice::from_ref(t))
                )))
            }
        }
    }
}

/* ------------------------ Curseur ------------------------ */

struct Curseur<'a> {
    tokens: &'a [Tok],
    pos: usize,
}

impl<'a> Curseur<'a> {
    fn new(tokens: &'a [Tok]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn voir(&self) -> Option<&'a Tok> {
        self.tokens.get(self.pos)
    }

    fn suivant(&mut self) -> Option<&'a Tok> {
        let t = self.tokens.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn manger(&mut self, attendu: &Tok) -> bool {
        if self.voir() == Some(attendu) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// terme → facteur ('*' facteur)*
    fn terme(&mut self) -> Resultat<Terme> {
        let mut numerateurs = Vec::new();
        let mut denominateurs = Vec::new();

        loop {
            self.facteur(&mut numerateurs, &mut denominateurs)?;
            if !self.manger(&Tok::Star) {
                break;
            }
        }

        reduire_fraction(&numerateurs, &denominateurs)
    }

    /// facteur → operande ('/' operande)*
    fn facteur(
        &mut self,
        numerateurs: &mut Vec<Operande>,
        denominateurs: &mut Vec<Operande>,
    ) -> Resultat<()> {
        numerateurs.push(self.operande(0)?);
        while self.manger(&Tok::Slash) {
            denominateurs.push(self.operande(0)?);
        }
        Ok(())
    }

    /// operande → atome ('^' operande)?
    fn operande(&mut self, profondeur: usize) -> Resultat<Operande> {
        if profondeur >= MAX_PROFONDEUR {
            return Err(ErreurEquation::syntaxe(format!(
                "tour d’exposants trop haute (max {MAX_PROFONDEUR})"
            )));
        }

        let base = self.atome()?;

        if !self.manger(&Tok::Caret) {
            return Ok(match base {
                Atome::Nombre(v) => Operande::Litteral(v),
                Atome::Variable => Operande::Variable { exposant: 1.0 },
            });
        }

        let exposant = match self.operande(profondeur + 1)? {
            Operande::Litteral(e) => e,
            Operande::Variable { .. } => {
                return Err(ErreurEquation::syntaxe(format!(
                    "{VARIABLE} ne peut pas être en exposant"
                )))
            }
        };

        match base {
            Atome::Variable => Ok(Operande::Variable { exposant }),
            Atome::Nombre(v) => Ok(Operande::Litteral(puissance(v, exposant)?)),
        }
    }

    /// atome → ('+'|'-')? nombre | X
    fn atome(&mut self) -> Resultat<Atome> {
        match self.suivant() {
            Some(Tok::Var) => Ok(Atome::Variable),
            Some(Tok::Num(v, _)) => Ok(Atome::Nombre(*v)),

            Some(signe @ (Tok::Plus | Tok::Minus)) => match self.suivant() {
                Some(Tok::Num(v, _)) => Ok(Atome::Nombre(if *signe == Tok::Minus {
                    -*v
                } else {
                    *v
                })),
                Some(t) => Err(ErreurEquation::syntaxe(format!(
                    "littéral attendu après '{}', trouvé '{}'",
                    format_tokens(std::slice::from_ref(signe)),
                    format_tokens(std::slice::from_ref(t))
                ))),
                None => Err(ErreurEquation::syntaxe(format!(
                    "littéral attendu après '{}'",
                    format_tokens(std::slice::from_ref(signe))
                ))),
            },

            Some(t) => Err(ErreurEquation::syntaxe(format!(
                "'{}' inattendu (opérande attendu)",
                format_tokens(std::slice::from_ref(t))
            ))),
            None => Err(ErreurEquation::syntaxe("terme incomplet")),
        }
    }
}

/* ------------------------ Fraction ------------------------ */

/// (Π littéraux, Σ exposants de X)
fn multiplicateur_et_degre(operandes: &[Operande]) -> (f64, f64) {
    let mut multiplicateur = 1.0;
    let mut degre = 0.0;
    for op in operandes {
        match op {
            Operande::Litteral(v) => multiplicateur *= v,
            Operande::Variable { exposant } => degre += exposant,
        }
    }
    (multiplicateur, degre)
}

/// Réduit numérateurs / dénominateurs en un seul terme.
pub fn reduire_fraction(numerateurs: &[Operande], denominateurs: &[Operande]) -> Resultat<Terme> {
    let (m_haut, d_haut) = multiplicateur_et_degre(numerateurs);
    let (m_bas, d_bas) = multiplicateur_et_degre(denominateurs);

    if est_nul(m_bas) {
        return Err(ErreurEquation::DivisionParZero(format!(
            "dénominateur nul ({m_bas:?})"
        )));
    }

    Ok(Terme {
        multiplicateur: m_haut / m_bas,
        degre: d_haut - d_bas,
    })
}
