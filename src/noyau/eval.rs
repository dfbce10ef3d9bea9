//! Noyau — résolution (pipeline réel)
//!
//! texte -> jetons -> '=' -> membres (descente récursive) -> table brute
//!       -> validation des degrés -> solveur -> racines triées
//!
//! La démarche garde chaque étape en texte pour le panneau "Démarche".

use log::debug;

use super::analyse::analyser_jetons;
use super::erreurs::Resultat;
use super::format::{forme_canonique, forme_reduite, format_racines, format_table};
use super::jetons::{format_tokens, tokenize};
use super::solveur::{resoudre, Solution};

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub table_brute: String,
    pub canonique: String,
    pub reduite: String,
    pub degre: String,
    pub discriminant: String,
    pub cas: String,
    pub racines: String,
    pub note: String,
}

/// API publique : résout une équation et retourne:
/// - la Solution (cas + discriminant + racines triées)
/// - la Démarche (jetons, table brute, formes, degré, discriminant)
pub fn resoudre_equation(texte: &str) -> Resultat<(Solution, DemarcheNoyau)> {
    // 1) Jetons
    let jetons = tokenize(texte)?;
    let jetons_txt = format_tokens(&jetons);

    // 2) Membres -> table brute (tous degrés)
    let brute = analyser_jetons(&jetons)?;
    let table_brute = format_table(&brute);

    // 3) Validation des degrés
    let table = brute.valider()?;
    debug!("table validée : {}", format_table(&table));

    // 4) Solveur
    let solution = resoudre(&table)?;

    // 5) Démarche
    let d = DemarcheNoyau {
        jetons: jetons_txt,
        table_brute,
        canonique: forme_canonique(&table),
        reduite: forme_reduite(&table),
        degre: table.degre().to_string(),
        discriminant: match solution.discriminant {
            Some(v) => format!("{v:?}"),
            None => "—".into(),
        },
        cas: solution.cas.description().into(),
        racines: format_racines(&solution.racines),
        note: "Pipeline: jetons → '=' → membres → table brute → degrés {0,1,2} → solveur → racines triées.".into(),
    };

    Ok((solution, d))
}
