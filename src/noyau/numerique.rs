// src/noyau/numerique.rs
//
// Primitives numériques autonomes (aucun sqrt/powf de la bibliothèque).
// Toutes les comparaisons à zéro du noyau passent par `egal_approx`.
//
// Règles:
// - racine_carree : Newton depuis x/2, arrêt quand deux estimations
//   successives diffèrent de moins de EPSILON. Convergence quadratique
//   près de la racine, précédée d’une phase de division par ~2 quand
//   x est grand : ITERATIONS_MAX_RACINE couvre toute la plage des f64.
// - puissance : récursive (carré pour exposant >= 10, produit pour
//   [1, 10), racines successives pour la partie fractionnaire).

use log::trace;

use super::erreurs::{ErreurEquation, Resultat};

/// Tolérance globale : |a - b| < EPSILON => a ≈ b.
pub const EPSILON: f64 = 1e-11;

/// Borne de Newton (au-delà : NonConvergence, jamais de boucle infinie).
pub const ITERATIONS_MAX_RACINE: usize = 2048;

/* ------------------------ Comparaisons ------------------------ */

pub fn egal_approx_eps(a: f64, b: f64, epsilon: f64) -> bool {
    (b - a).abs() < epsilon
}

/// a ≈ b à EPSILON près.
pub fn egal_approx(a: f64, b: f64) -> bool {
    egal_approx_eps(a, b, EPSILON)
}

/// x ≈ 0.
pub fn est_nul(x: f64) -> bool {
    egal_approx(x, 0.0)
}

/* ------------------------ Racine carrée ------------------------ */

/// √x par Newton, bornée.
pub fn racine_carree(x: f64) -> Resultat<f64> {
    if est_nul(x) {
        return Ok(0.0);
    }
    if x < 0.0 {
        return Err(ErreurEquation::Domaine(format!(
            "racine carrée d’un nombre négatif ({x:?})"
        )));
    }

    let mut precedente = x / 2.0;
    for _ in 0..ITERATIONS_MAX_RACINE {
        let estimation = (precedente + x / precedente) / 2.0;
        if (estimation - precedente).abs() < EPSILON {
            return Ok(estimation);
        }
        precedente = estimation;
    }

    Err(ErreurEquation::NonConvergence {
        valeur: x,
        iterations: ITERATIONS_MAX_RACINE,
    })
}

/* ------------------------ Puissance ------------------------ */

pub fn carre(x: f64) -> f64 {
    x * x
}

/// base^exposant.
///
/// - base < 0 : exposant entier seulement (signe selon la parité)
/// - base ≈ 0 : exposant < 0 => division par zéro ; 0^0 = 1 ; sinon 0
/// - exposant ≈ 0 : 1
pub fn puissance(base: f64, exposant: f64) -> Resultat<f64> {
    puissance_eps(base, exposant, EPSILON)
}

fn puissance_eps(base: f64, exposant: f64, epsilon: f64) -> Resultat<f64> {
    if !exposant.is_finite() {
        return Err(ErreurEquation::Domaine(format!(
            "exposant non fini ({exposant:?})"
        )));
    }

    let mut signe = 1.0;
    let mut base = base;
    if base < 0.0 {
        if exposant.trunc() != exposant {
            return Err(ErreurEquation::Domaine(format!(
                "résultat imaginaire ({base:?}^{exposant:?})"
            )));
        }
        if exposant.rem_euclid(2.0) == 1.0 {
            signe = -1.0;
        }
        base = -base;
    }

    if est_nul(base) {
        if exposant < 0.0 {
            return Err(ErreurEquation::DivisionParZero(format!(
                "0 élevé à une puissance négative ({exposant:?})"
            )));
        }
        return Ok(if est_nul(exposant) { 1.0 } else { 0.0 });
    }
    if est_nul(exposant) {
        return Ok(1.0);
    }

    if exposant < 0.0 {
        // le signe de la base suit l’inverse : (-2)^-3 = -0.125
        return Ok(signe / puissance_eps(base, -exposant, epsilon)?);
    }
    if exposant >= 10.0 {
        return Ok(signe * carre(puissance_eps(base, exposant / 2.0, epsilon / 2.0)?));
    }
    if exposant >= 1.0 {
        return Ok(signe * base * puissance_eps(base, exposant - 1.0, epsilon)?);
    }

    // Partie fractionnaire : x^e = √(x^(2e)), epsilon remonte à chaque pas.
    trace!("puissance fractionnaire: base={base:?} exposant={exposant:?} eps={epsilon:e}");
    if epsilon >= 1.0 {
        return Ok(signe * racine_carree(base)?);
    }
    Ok(signe * racine_carree(puissance_eps(base, exposant * 2.0, epsilon * 2.0)?)?)
}

/* ------------------------ Plancher ------------------------ */

/// Arrondi vers -∞.
pub fn plancher(x: f64) -> f64 {
    let t = x.trunc();
    if x < 0.0 && t != x {
        t - 1.0
    } else {
        t
    }
}
