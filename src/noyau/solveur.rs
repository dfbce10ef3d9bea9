// src/noyau/solveur.rs
//
// Résolution selon le degré effectif :
// - degré 0 : c ≈ 0 => "any", sinon "no"
// - degré 1 : x = -c/b
// - degré 2 : discriminant D = b² - 4ac
//     D ≈ 0 => racine double -b/2a (renvoyée deux fois)
//     D > 0 => (-b ± √D)/2a
//     D < 0 => paire conjuguée (-b/2a) ± (√-D/2a)·i
//
// Les racines sont TOUJOURS renvoyées triées (réels croissants, complexes
// selon leur texte).

use std::cmp::Ordering;
use std::fmt;

use log::debug;

use super::coefficients::TableCoefficients;
use super::complexe::Complexe;
use super::erreurs::Resultat;
use super::format::texte_flottant;
use super::numerique::{est_nul, racine_carree};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Racine {
    Reelle(f64),
    /// Tout X est solution ("any").
    Toute,
    /// Aucune solution ("no").
    Aucune,
    Complexe(Complexe),
}

impl Racine {
    fn rang(&self) -> u8 {
        match self {
            Racine::Reelle(_) => 0,
            Racine::Complexe(_) => 1,
            Racine::Toute => 2,
            Racine::Aucune => 3,
        }
    }

    /// Ordre du résultat : réels croissants, complexes par texte.
    pub fn comparer(&self, autre: &Racine) -> Ordering {
        match (self, autre) {
            (Racine::Reelle(x), Racine::Reelle(y)) => x.total_cmp(y),
            (Racine::Complexe(z), Racine::Complexe(w)) => z.to_string().cmp(&w.to_string()),
            _ => self.rang().cmp(&autre.rang()),
        }
    }

    /// Valeur réelle, si la racine en est une.
    pub fn reelle(&self) -> Option<f64> {
        match self {
            Racine::Reelle(x) => Some(*x),
            _ => None,
        }
    }
}

impl fmt::Display for Racine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Racine::Reelle(x) => f.write_str(&texte_flottant(*x)),
            Racine::Toute => write!(f, "any"),
            Racine::Aucune => write!(f, "no"),
            Racine::Complexe(z) => write!(f, "{z}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cas {
    ToutReel,
    AucuneSolution,
    Lineaire,
    DiscriminantNul,
    DiscriminantPositif,
    DiscriminantNegatif,
}

impl Cas {
    pub fn description(&self) -> &'static str {
        match self {
            Cas::ToutReel => "Tout réel X est solution de l’équation.",
            Cas::AucuneSolution => "L’équation n’a pas de solution.",
            Cas::Lineaire => "L’équation a une solution unique.",
            Cas::DiscriminantNul => {
                "Discriminant nul : deux solutions réelles confondues."
            }
            Cas::DiscriminantPositif => {
                "Discriminant strictement positif : deux solutions réelles."
            }
            Cas::DiscriminantNegatif => {
                "Discriminant strictement négatif : pas de solution réelle, deux solutions complexes conjuguées."
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub cas: Cas,
    /// Présent seulement au degré 2.
    pub discriminant: Option<f64>,
    /// Triées.
    pub racines: Vec<Racine>,
}

/// -0.0 -> 0.0 (rien d’autre).
fn sans_zero_negatif(x: f64) -> f64 {
    x + 0.0
}

/// Résout a·X² + b·X + c = 0 (table validée).
pub fn resoudre(table: &TableCoefficients) -> Resultat<Solution> {
    let (a, b, c) = (table.a(), table.b(), table.c());

    let mut solution = if !est_nul(a) {
        resoudre_degre_deux(a, b, c)?
    } else if !est_nul(b) {
        resoudre_degre_un(b, c)
    } else {
        resoudre_degre_zero(c)
    };

    solution.racines.sort_by(Racine::comparer);
    debug!(
        "résolution a={a:?} b={b:?} c={c:?} -> {:?} {:?}",
        solution.cas, solution.racines
    );
    Ok(solution)
}

fn resoudre_degre_zero(c: f64) -> Solution {
    let (cas, racine) = if est_nul(c) {
        (Cas::ToutReel, Racine::Toute)
    } else {
        (Cas::AucuneSolution, Racine::Aucune)
    };
    Solution {
        cas,
        discriminant: None,
        racines: vec![racine],
    }
}

fn resoudre_degre_un(b: f64, c: f64) -> Solution {
    Solution {
        cas: Cas::Lineaire,
        discriminant: None,
        racines: vec![Racine::Reelle(sans_zero_negatif(-c / b))],
    }
}

fn resoudre_degre_deux(a: f64, b: f64, c: f64) -> Resultat<Solution> {
    let discriminant = b * b - 4.0 * a * c;

    let (cas, racines) = if est_nul(discriminant) {
        let x = sans_zero_negatif(-b / (2.0 * a));
        (Cas::DiscriminantNul, vec![Racine::Reelle(x), Racine::Reelle(x)])
    } else if discriminant > 0.0 {
        let r = racine_carree(discriminant)?;
        let x0 = sans_zero_negatif((-b + r) / (2.0 * a));
        let x1 = sans_zero_negatif((-b - r) / (2.0 * a));
        (Cas::DiscriminantPositif, vec![Racine::Reelle(x0), Racine::Reelle(x1)])
    } else {
        let r = racine_carree(-discriminant)?;
        let mut re = -b / (2.0 * a);
        if est_nul(re) {
            re = re.abs();
        }
        // signe de im suivi tel quel : a < 0 => im < 0, l’affichage s’en charge
        let z = Complexe::new(re, r / (2.0 * a));
        (
            Cas::DiscriminantNegatif,
            vec![Racine::Complexe(z), Racine::Complexe(z.conjugue())],
        )
    };

    Ok(Solution {
        cas,
        discriminant: Some(discriminant),
        racines,
    })
}
