// src/noyau/complexe.rs
//
// Nombre complexe (flottant) : utilitaire indépendant du parseur.
// Le solveur s’en sert pour la paire conjuguée (discriminant < 0) ;
// l’affichage "a + b * i" / "a - b * i" est le format des racines.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use super::erreurs::{ErreurEquation, Resultat};
use super::format::texte_flottant;
use super::numerique::{est_nul, plancher, racine_carree};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complexe {
    pub re: f64,
    pub im: f64,
}

impl Complexe {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn conjugue(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// |z|² (sans racine).
    pub fn norme_carree(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// |z| via la racine carrée du noyau.
    pub fn module(self) -> Resultat<f64> {
        racine_carree(self.norme_carree())
    }

    /// self / autre.
    pub fn diviser(self, autre: Complexe) -> Resultat<Complexe> {
        let d = autre.norme_carree();
        if est_nul(d) {
            return Err(ErreurEquation::DivisionParZero(format!(
                "division complexe par {autre}"
            )));
        }
        Ok(Complexe::new(
            (self.re * autre.re + self.im * autre.im) / d,
            (self.im * autre.re - self.re * autre.im) / d,
        ))
    }

    /// Reste gaussien : self - autre * ⌊self / autre⌋ (plancher par composante).
    pub fn reste(self, autre: Complexe) -> Resultat<Complexe> {
        let q = self.diviser(autre)?;
        let q = Complexe::new(plancher(q.re), plancher(q.im));
        Ok(self - autre * q)
    }
}

impl From<f64> for Complexe {
    fn from(re: f64) -> Self {
        Complexe::new(re, 0.0)
    }
}

impl Add for Complexe {
    type Output = Complexe;

    fn add(self, rhs: Complexe) -> Complexe {
        Complexe::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complexe {
    type Output = Complexe;

    fn sub(self, rhs: Complexe) -> Complexe {
        Complexe::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complexe {
    type Output = Complexe;

    fn mul(self, rhs: Complexe) -> Complexe {
        Complexe::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + rhs.re * self.im,
        )
    }
}

impl Neg for Complexe {
    type Output = Complexe;

    fn neg(self) -> Complexe {
        Complexe::new(-self.re, -self.im)
    }
}

impl Zero for Complexe {
    fn zero() -> Self {
        Complexe::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complexe {
    fn one() -> Self {
        Complexe::new(1.0, 0.0)
    }
}

/// "re + im * i" ou "re - |im| * i" ; une partie réelle ≈ 0 s’affiche sans signe.
impl fmt::Display for Complexe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let re = if est_nul(self.re) { self.re.abs() } else { self.re };
        if self.im < 0.0 {
            write!(f, "{} - {} * i", texte_flottant(re), texte_flottant(-self.im))
        } else {
            write!(f, "{} + {} * i", texte_flottant(re), texte_flottant(self.im))
        }
    }
}
