// src/noyau/format.rs
//
// Affichage : forme réduite (lecture humaine), forme canonique (re-lisible
// par le parseur), racines, table brute.

use super::coefficients::TableCoefficients;
use super::numerique::{egal_approx, est_nul};
use super::solveur::Racine;

/* ------------------------ Helpers ------------------------ */

/// Flottant le plus court, exposant sur au moins deux chiffres et signé
/// ("-5e-06", "1e+16") ; notation décimale entre 1e-4 et 1e16.
pub fn texte_flottant(v: f64) -> String {
    let brut = format!("{v:?}");
    match brut.split_once('e') {
        None => brut,
        Some((mantisse, exposant)) => {
            let (signe, chiffres) = match exposant.strip_prefix('-') {
                Some(c) => ('-', c),
                None => ('+', exposant),
            };
            format!("{mantisse}e{signe}{chiffres:0>2}")
        }
    }
}

/// Coefficient devant X : rien si ≈ 1.
fn prefixe_coefficient(v: f64) -> String {
    if egal_approx(v, 1.0) {
        String::new()
    } else {
        format!("{} * ", texte_flottant(v))
    }
}

fn terme_reduit(degre: u8, v: f64) -> String {
    match degre {
        2 => format!("{}X^2", prefixe_coefficient(v)),
        1 => format!("{}X", prefixe_coefficient(v)),
        _ => texte_flottant(v),
    }
}

/* ------------------------ Forme réduite ------------------------ */

/// Forme réduite "a * X^2 + b * X + c = 0.0".
///
/// - termes négligeables omis
/// - coefficient ≈ 1 omis (sauf constante)
/// - tous les signes inversés si le terme de tête est négatif
///   (affichage seulement : la table n’est pas modifiée)
pub fn forme_reduite(table: &TableCoefficients) -> String {
    let termes: Vec<(u8, f64)> = [(2u8, table.a()), (1, table.b()), (0, table.c())]
        .into_iter()
        .filter(|(_, v)| !est_nul(*v))
        .collect();

    let facteur = match termes.first() {
        Some((_, v)) if *v < 0.0 => -1.0,
        _ => 1.0,
    };

    let mut out = String::new();
    for (i, (degre, v)) in termes.iter().enumerate() {
        let v = v * facteur;
        if i == 0 {
            out.push_str(&terme_reduit(*degre, v));
        } else if v < 0.0 {
            out.push_str(&format!(" - {}", terme_reduit(*degre, -v)));
        } else {
            out.push_str(&format!(" + {}", terme_reduit(*degre, v)));
        }
    }

    if out.is_empty() {
        out.push_str("0.0");
    }
    out.push_str(" = 0.0");
    out
}

/* ------------------------ Forme canonique ------------------------ */

/// "a * X^2 ± b * X^1 ± c = 0", sans notation scientifique :
/// re-parser ce texte redonne la même table.
pub fn forme_canonique(table: &TableCoefficients) -> String {
    fn signe_et_valeur(v: f64) -> String {
        if v < 0.0 {
            format!("- {}", -v)
        } else {
            format!("+ {}", v.abs())
        }
    }

    format!(
        "{} * X^2 {} * X^1 {} = 0",
        table.a(),
        signe_et_valeur(table.b()),
        signe_et_valeur(table.c())
    )
}

/* ------------------------ Racines / table ------------------------ */

pub fn format_racines(racines: &[Racine]) -> String {
    racines
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Table brute : "X^0 : c ; X^1 : b ; ..." (degrés croissants).
pub fn format_table(table: &TableCoefficients) -> String {
    let entrees = table.entrees();
    if entrees.is_empty() {
        return "(vide)".to_string();
    }
    entrees
        .iter()
        .map(|(d, v)| format!("X^{d:?} : {v:?}"))
        .collect::<Vec<_>>()
        .join(" ; ")
}
