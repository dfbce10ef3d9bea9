// src/noyau/jetons.rs
//
// Tokenisation + validation de l’équation.
// - espaces ignorés (partout)
// - alphabet : 0-9 . + - * / ^ = X (X sensible à la casse)
// - exactement un '='
//
// Le signe d’un littéral n’est PAS décidé ici : '+'/'-' sortent toujours
// en jetons, le parseur tranche (binaire ou unaire).

use super::erreurs::{ErreurEquation, Resultat};

/// Symbole de la variable.
pub const VARIABLE: char = 'X';

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    /// Littéral non signé `chiffres(.chiffres)?` : valeur + texte source.
    Num(f64, String),
    Var,

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
    Egal,
}

fn est_autorise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '^' | '=') || c == VARIABLE
}

/// Tokenize une équation complète.
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();

    // Alphabet d’abord : un caractère interdit l’emporte sur toute autre faute.
    if let Some(c) = chars.iter().find(|c| !est_autorise(**c)) {
        return Err(ErreurEquation::syntaxe(format!(
            "caractère interdit '{c}'"
        )));
    }

    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        match c {
            '+' => out.push(Tok::Plus),
            '-' => out.push(Tok::Minus),
            '*' => out.push(Tok::Star),
            '/' => out.push(Tok::Slash),
            '^' => out.push(Tok::Caret),
            '=' => out.push(Tok::Egal),
            _ if c == VARIABLE => out.push(Tok::Var),

            _ if c.is_ascii_digit() => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }

                // partie décimale : '.' doit être suivi d’au moins un chiffre
                if i < chars.len() && chars[i] == '.' {
                    i += 1;
                    let start_frac = i;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                    if i == start_frac {
                        let lit: String = chars[start..i].iter().collect();
                        return Err(ErreurEquation::syntaxe(format!(
                            "littéral incorrect '{lit}'"
                        )));
                    }
                }

                let lit: String = chars[start..i].iter().collect();
                let v = lit.parse::<f64>().map_err(|_| {
                    ErreurEquation::syntaxe(format!("littéral incorrect '{lit}'"))
                })?;
                out.push(Tok::Num(v, lit));
                continue;
            }

            // '.' sans chiffre devant
            _ => {
                return Err(ErreurEquation::syntaxe(format!(
                    "'{c}' inattendu (position {i})"
                )))
            }
        }
        i += 1;
    }

    Ok(out)
}

/// Sépare les jetons autour de l’unique '='.
pub fn separer_cotes(tokens: &[Tok]) -> Resultat<(&[Tok], &[Tok])> {
    let positions: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| matches!(t, Tok::Egal))
        .map(|(i, _)| i)
        .collect();

    match positions.as_slice() {
        [p] => Ok((&tokens[..*p], &tokens[*p + 1..])),
        [] => Err(ErreurEquation::syntaxe("il manque le signe '='")),
        _ => Err(ErreurEquation::syntaxe(format!(
            "{} signes '=' (un seul attendu)",
            positions.len()
        ))),
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(_, lit) => lit.clone(),
            Tok::Var => VARIABLE.to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Egal => "=".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
