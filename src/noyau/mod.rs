//! Noyau du solveur
//!
//! Organisation interne :
//! - erreurs.rs      : erreurs typées (syntaxe, degré, division par zéro, domaine, convergence)
//! - numerique.rs    : ≈ à EPSILON près, √ (Newton borné), puissance récursive, plancher
//! - jetons.rs       : tokenisation + validation (alphabet, unique '=')
//! - analyse.rs      : descente récursive membre/terme/facteur/opérande
//! - coefficients.rs : table degré -> coefficient + validation des degrés
//! - solveur.rs      : résolution degré 0/1/2, racines triées
//! - complexe.rs     : nombre complexe (paire conjuguée, module, reste)
//! - format.rs       : formes réduite / canonique, racines
//! - eval.rs         : pipeline complet + démarche

pub mod analyse;
pub mod coefficients;
pub mod complexe;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod numerique;
pub mod solveur;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use analyse::analyser;
pub use erreurs::{ErreurEquation, Resultat};
pub use eval::resoudre_equation;
pub use solveur::resoudre;
