//! Tests scientifiques (campagne) : tables de référence parseur + solveur.
//!
//! But : figer le comportement sur des équations "méchantes".
//! - signes collés / séparés par des espaces
//! - chaînes de divisions
//! - tours d’exposants
//! - degrés qui se compensent
//! - discriminant à la frontière de la précision
//!
//! Notes :
//! - Les coefficients sont comparés à EPSILON près (jamais ==).
//! - Les racines complexes sont comparées sur leur texte exact.

use super::analyse::analyser;
use super::coefficients::TableCoefficients;
use super::erreurs::ErreurEquation;
use super::numerique::egal_approx;
use super::solveur::{resoudre, Racine};

fn assert_coefficients(equation: &str, attendu: [f64; 3]) {
    let table = analyser(equation).unwrap_or_else(|e| panic!("equation={equation:?} err={e}"));
    for (degre, v) in attendu.iter().enumerate() {
        let obtenu = table.coefficient(degre as f64);
        assert!(
            egal_approx(obtenu, *v),
            "equation={equation:?} X^{degre}: attendu {v:?}, obtenu {obtenu:?}"
        );
    }
}

fn assert_erreur(equation: &str, est_attendue: fn(&ErreurEquation) -> bool) {
    match analyser(equation) {
        Err(e) if est_attendue(&e) => {}
        autre => panic!("equation={equation:?} : erreur inattendue {autre:?}"),
    }
}

/// Attendus : réels (à EPSILON près) ou textes exacts.
enum Attendu {
    Reels(&'static [f64]),
    Textes(&'static [&'static str]),
}

fn assert_solution(c: f64, b: f64, a: f64, attendu: Attendu) {
    let table = TableCoefficients::depuis([(0.0, c), (1.0, b), (2.0, a)]);
    let s = resoudre(&table).unwrap_or_else(|e| panic!("a={a} b={b} c={c} err={e}"));

    match attendu {
        Attendu::Reels(v) => {
            assert_eq!(s.racines.len(), v.len(), "a={a} b={b} c={c} : {:?}", s.racines);
            for (r, x) in s.racines.iter().zip(v) {
                match r {
                    Racine::Reelle(y) => assert!(
                        egal_approx(*x, *y),
                        "a={a} b={b} c={c} : attendu {x:?}, obtenu {y:?}"
                    ),
                    autre => panic!("a={a} b={b} c={c} : attendu réel, obtenu {autre}"),
                }
            }
        }
        Attendu::Textes(t) => {
            let obtenu: Vec<String> = s.racines.iter().map(|r| r.to_string()).collect();
            assert_eq!(obtenu, t, "a={a} b={b} c={c}");
        }
    }
}

/* ------------------------ Parseur : équations valides ------------------------ */

#[test]
fn sci_equations_correctes() {
    let cas: &[(&str, [f64; 3])] = &[
        ("0=0", [0.0, 0.0, 0.0]),
        ("X^2= 0", [0.0, 0.0, 1.0]),
        ("X^1 =0", [0.0, 1.0, 0.0]),
        ("X^2 + X^1 = 0", [0.0, 1.0, 1.0]),
        ("X^2 + X^1 + X^0=0", [1.0, 1.0, 1.0]),
        ("2.5 * X^2 + 3/ 2*X^1 + 4/ 2 /2 * 10*X^0= 0", [10.0, 1.5, 2.5]),
        (
            "-3.5 *X^2-2.1*X^2 - 1.4*X^1 -7 /2*X^0   +  X^0 +21.0*X^2=0",
            [-2.5, -1.4, 15.4],
        ),
        (
            "-7 /2*X^0 +-3.5 *X^2 - 1.4*X^1   +  X^0 -2.1*X^2 +21.0*X^2= -23.3*X^1+ 13.4*X^2 + 0.2 *X^0",
            [-2.7, 21.9, 2.0],
        ),
        (
            "2*2.3*1/0.5/2*3/4*X^2=1/2*2/2/4*4*X^2/2/X^2",
            [-0.25, 0.0, 3.45],
        ),
        (
            "-2.000/+20000.3*+1/-0.5/-2*3/4/0.4*X^3/X^1*2.0 - -2*X^0*X^2*X^1/X^2*-2.0334*X^0/X^0 + + 31.4*X^4/X^3*2 - +12*X^2/X^2=0.0000",
            [-12.0, 58.7332, -0.000_374_994_375_084_373_734_393_984_090_2],
        ),
        ("X^+100 / X^99 = 1", [-1.0, 1.0, 0.0]),
        ("X^-100 / X^-101 = 4", [-4.0, 1.0, 0.0]),
        ("X^2 + X^1^100.32^3.12 + X^0=0", [1.0, 1.0, 1.0]),
        ("X^-2.0^+1.0000*X^4 + X^1^100.32^3.12 + X^0=0", [1.0, 1.0, 1.0]),
        ("X^-2.0^-2.0000*X^1.75 + X^1^100.32^3.12 + X^0=0", [1.0, 1.0, 1.0]),
        ("X^2^1^1^3^6 + X^-100.1^0.0 + X^0=0", [1.0, 1.0, 1.0]),
        ("X^2^1^1^3^6 + X^0^0.0 + X^0=0", [1.0, 1.0, 1.0]),
        ("-2*X + X*X + X^0=0", [1.0, -2.0, 1.0]),
    ];

    for (equation, attendu) in cas {
        assert_coefficients(equation, *attendu);
    }
}

/* ------------------------ Parseur : équations refusées ------------------------ */

#[test]
fn sci_erreurs_de_syntaxe() {
    let cas = [
        "0",
        "0=",
        "0 = 0 = 0",
        "X^0 + X^2",
        "X^2 = X^^2",
        "X^--2 = 0",
        "Y^2-1=0",
        "X^2 + X^1 - X^0 + 10e5 = 0",
        "++0 = 0",
        "X^97 / X^(100 - 3) = 0",
        "X+^1 = 0",
        "- = 0",
        "+ = 0",
        "",
        "=",
        "=1",
        "X.0 = 1.0",
        "X^.0 = 1.0",
        "X_1 = 1.0",
        "X^^ = 23.10",
        "X^X^2 = 0",
        "X^2^X^4 = 0",
        "2^3^X^2 = 0",
        "2^3^-4.01^X=0",
        "XX = 0",
        "X^9=0 - X = 0",
        "X^9^ = 0",
        "-X = 0",
    ];
    for equation in cas {
        assert_erreur(equation, |e| matches!(e, ErreurEquation::Syntaxe(_)));
    }
}

#[test]
fn sci_erreurs_de_degre() {
    let cas = [
        "X^3 = 0",
        "X^100 / X^97 = 0",
        "X^97 / X^100 - 3 = 0",
        "X^1 * X^2 = 0",
        "1=1 + X^4",
        "X^-100 / X^-99 = 4",
        "X^3 * X^1.4 = 1.0",
        "X^1.5 = 1.0",
        "X^1^ - 2 * X^2 = 0",
        "X^2^2 + X^1 + X^0=0",
    ];
    for equation in cas {
        assert_erreur(equation, |e| matches!(e, ErreurEquation::Degre { .. }));
    }
}

#[test]
fn sci_erreurs_numeriques() {
    assert_erreur("X^0^-3.3 = 0", |e| matches!(e, ErreurEquation::DivisionParZero(_)));
    assert_erreur("3/0 * X = 1", |e| matches!(e, ErreurEquation::DivisionParZero(_)));
    assert_erreur("X/0.000000000001 = 1", |e| {
        matches!(e, ErreurEquation::DivisionParZero(_))
    });
    assert_erreur("X^-2.2^-3.3 = 0", |e| matches!(e, ErreurEquation::Domaine(_)));
    assert_erreur("-4^0.5 * X = 0", |e| matches!(e, ErreurEquation::Domaine(_)));
}

/* ------------------------ Solveur ------------------------ */

#[test]
fn sci_degre_zero() {
    assert_solution(32.1, 0.0, 0.0, Attendu::Textes(&["no"]));
    assert_solution(0.0, 0.0, 0.0, Attendu::Textes(&["any"]));
    assert_solution(1e-29, 0.0, 0.0, Attendu::Textes(&["any"]));
    assert_solution(-1e-29, 0.0, 0.0, Attendu::Textes(&["any"]));
    assert_solution(-0.000001, 0.0, 0.0, Attendu::Textes(&["no"]));
    assert_solution(0.000001, 0.0, 0.0, Attendu::Textes(&["no"]));
}

#[test]
fn sci_degre_un() {
    assert_solution(32.1, 2.3, 0.0, Attendu::Reels(&[-32.1 / 2.3]));
    assert_solution(2.3, -32.1, 0.0, Attendu::Reels(&[2.3 / 32.1]));
    assert_solution(-3.4, -5.6, 0.0, Attendu::Reels(&[-3.4 / 5.6]));
    assert_solution(-64.1, 2.4, 0.0, Attendu::Reels(&[64.1 / 2.4]));
}

#[test]
fn sci_discriminant_nul() {
    assert_solution(9.0, -6.0, 1.0, Attendu::Reels(&[3.0, 3.0]));
    assert_solution(-23.12, -13.6, -2.0, Attendu::Reels(&[-3.4, -3.4]));
    assert_solution(0.0, 0.0, 112.0, Attendu::Reels(&[0.0, 0.0]));
}

#[test]
fn sci_discriminant_positif() {
    assert_solution(
        -3.2,
        0.0,
        4.6,
        Attendu::Reels(&[-0.834_057_656_228_299_1, 0.834_057_656_228_299_1]),
    );
    assert_solution(
        3.2,
        0.0,
        -4.6,
        Attendu::Reels(&[-0.834_057_656_228_299_1, 0.834_057_656_228_299_1]),
    );
    assert_solution(-6.0, 1.0, 1.0, Attendu::Reels(&[-3.0, 2.0]));
    assert_solution(
        31.442578357,
        23.2377135,
        4.1,
        Attendu::Reels(&[-3.435435000010138, -2.2322999999898627]),
    );
    assert_solution(0.0, -11.25, 3.0, Attendu::Reels(&[0.0, 3.75]));
    assert_solution(-16.0, -4.0, 2.0, Attendu::Reels(&[-2.0, 4.0]));
}

#[test]
fn sci_discriminant_negatif() {
    assert_solution(
        4.0,
        0.0,
        1.0,
        Attendu::Textes(&["0.0 + 2.0 * i", "0.0 - 2.0 * i"]),
    );
    assert_solution(
        -27.3,
        8.4,
        -2.1,
        Attendu::Textes(&["2.0 + 3.0 * i", "2.0 - 3.0 * i"]),
    );
    assert_solution(
        4.42,
        -4.2,
        1.0,
        Attendu::Textes(&["2.1 + 0.09999999999999894 * i", "2.1 - 0.09999999999999894 * i"]),
    );
}

/* ------------------------ Bout en bout ------------------------ */

#[test]
fn sci_parse_puis_resout() {
    let table = analyser("X^2 - 6 * X = -9").unwrap();
    let s = resoudre(&table).unwrap();
    assert_eq!(s.racines, vec![Racine::Reelle(3.0), Racine::Reelle(3.0)]);

    let table = analyser("2 * X^2 / 2 + 4 * X^0 = 0").unwrap();
    let t: Vec<String> = resoudre(&table)
        .unwrap()
        .racines
        .iter()
        .map(|r| r.to_string())
        .collect();
    assert_eq!(t, vec!["0.0 + 2.0 * i", "0.0 - 2.0 * i"]);
    // (-2)^-3 = -0.125 : le signe survit à l’inverse
    let table = analyser("-2^-3 * X + 1 = 0").unwrap();
    assert!(egal_approx(table.b(), -0.125));
    let s = resoudre(&table).unwrap();
    assert_eq!(s.racines, vec![Racine::Reelle(8.0)]);
}
