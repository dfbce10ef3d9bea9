// src/noyau/coefficients.rs
//
// Table degré -> coefficient (creuse, lecture à zéro explicite).
//
// IMPORTANT:
// - Les degrés sont des flottants tant que la table n’est pas validée
//   (X^1.5, X^-1 ... s’accumulent normalement, puis se compensent ou non).
// - Deux degrés sont la même clé ssi ils sont égaux au sens IEEE (0.0 == -0.0).
// - Entrées gardées triées par degré : l’égalité de deux tables ne dépend
//   pas de l’ordre des termes dans l’équation.
// - Après `valider`, seuls 0, 1, 2 subsistent.

use std::cmp::Ordering;

use super::erreurs::{ErreurEquation, Resultat};
use super::numerique::est_nul;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableCoefficients {
    entrees: Vec<(f64, f64)>,
}

fn est_degre_supporte(degre: f64) -> bool {
    degre == 0.0 || degre == 1.0 || degre == 2.0
}

impl TableCoefficients {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construit une table en accumulant des paires (degré, coefficient).
    pub fn depuis(paires: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut table = Self::new();
        for (degre, valeur) in paires {
            table.ajouter(degre, valeur);
        }
        table
    }

    /// coefficient[degre] += valeur (entrée créée si absente, à sa place).
    pub fn ajouter(&mut self, degre: f64, valeur: f64) {
        if let Some((_, v)) = self.entrees.iter_mut().find(|(d, _)| *d == degre) {
            *v += valeur;
            return;
        }
        let pos = self
            .entrees
            .partition_point(|(d, _)| d.total_cmp(&degre) == Ordering::Less);
        self.entrees.insert(pos, (degre, valeur));
    }

    /// Lecture : 0 si le degré n’a jamais été touché.
    pub fn coefficient(&self, degre: f64) -> f64 {
        self.entrees
            .iter()
            .find(|(d, _)| *d == degre)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }

    /// Coefficient de X^2.
    pub fn a(&self) -> f64 {
        self.coefficient(2.0)
    }

    /// Coefficient de X^1.
    pub fn b(&self) -> f64 {
        self.coefficient(1.0)
    }

    /// Coefficient de X^0.
    pub fn c(&self) -> f64 {
        self.coefficient(0.0)
    }

    /// Entrées, degrés croissants.
    pub fn entrees(&self) -> &[(f64, f64)] {
        &self.entrees
    }

    /// Retire les degrés hors {0,1,2} négligeables ; refuse ceux qui restent.
    pub fn valider(mut self) -> Resultat<Self> {
        self.entrees
            .retain(|(d, v)| est_degre_supporte(*d) || !est_nul(*v));

        if let Some((degre, _)) = self.entrees.iter().find(|(d, _)| !est_degre_supporte(*d)) {
            return Err(ErreurEquation::Degre { degre: *degre });
        }
        Ok(self)
    }

    /// Degré effectif : le plus haut coefficient non négligeable (0 si aucun).
    pub fn degre(&self) -> u8 {
        if !est_nul(self.a()) {
            2
        } else if !est_nul(self.b()) {
            1
        } else {
            0
        }
    }
}
