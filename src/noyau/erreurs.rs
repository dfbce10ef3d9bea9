// src/noyau/erreurs.rs
//
// Erreurs du noyau : toutes sont des erreurs d’entrée utilisateur,
// détectées immédiatement et remontées telles quelles (pas de reprise).

use thiserror::Error;

/// Résultat du noyau.
pub type Resultat<T> = std::result::Result<T, ErreurEquation>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurEquation {
    /// Caractère interdit, '=' absent ou multiple, littéral mal formé,
    /// X en exposant, jeton inattendu.
    #[error("équation incorrecte : {0}")]
    Syntaxe(String),

    /// Un coefficient non négligeable subsiste hors des degrés 0, 1, 2.
    #[error("degré non supporté : {degre} (seuls 0, 1 et 2 sont acceptés)")]
    Degre { degre: f64 },

    /// Dénominateur nul, ou 0 élevé à une puissance négative.
    #[error("division par zéro : {0}")]
    DivisionParZero(String),

    /// Base négative avec exposant non entier, racine d’un négatif.
    #[error("hors domaine : {0}")]
    Domaine(String),

    /// Newton n’a pas convergé dans la borne d’itérations.
    #[error("racine carrée de {valeur} : pas de convergence après {iterations} itérations")]
    NonConvergence { valeur: f64, iterations: usize },
}

impl ErreurEquation {
    pub(crate) fn syntaxe(msg: impl Into<String>) -> Self {
        ErreurEquation::Syntaxe(msg.into())
    }
}
