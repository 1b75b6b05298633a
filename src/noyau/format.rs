// src/noyau/format.rs
//
// Affichage EXACT "joli" des valeurs :
// - rationnels : "6", "-5/6"
// - termes π   : "π", "4π", "π/2", "-3π/4"
// - termes √   : "√2", "√2/2", "3√7/4", "-√3"
// - combinés   : "π√2", "3π√2/4"
// - somme      : termes joints par " + " / " - ", "0" si vide
//
// C'est le contrat d'affichage stable du moteur ; l'adaptateur le rend tel
// quel, le moteur ne définit aucun format de transport.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::valeur::{Terme, ValeurExacte};

fn affiche_rationnel(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// Partie symbolique d'un terme : "", "π", "√n" ou "π√n".
fn symbole(pi: bool, racine: &BigInt) -> String {
    match (pi, racine.is_one()) {
        (false, true) => String::new(),
        (true, true) => "π".to_string(),
        (false, false) => format!("√{racine}"),
        (true, false) => format!("π√{racine}"),
    }
}

/// |coeff|·symbole sans le signe : "π/2", "3√7/4", "5/6"…
fn affiche_terme_abs(t: &Terme) -> String {
    let coeff = t.coeff.abs();
    let p = coeff.numer();
    let q = coeff.denom();
    let sym = symbole(t.pi, &t.racine);

    if sym.is_empty() {
        return affiche_rationnel(&coeff);
    }

    let tete = if p.is_one() {
        sym
    } else {
        format!("{p}{sym}")
    };

    if q.is_one() {
        tete
    } else {
        format!("{tete}/{q}")
    }
}

/// Rendu canonique complet d'une valeur exacte.
pub fn affiche_valeur(v: &ValeurExacte) -> String {
    let termes = v.termes();
    if termes.is_empty() {
        return "0".to_string();
    }

    let mut out = String::new();
    for (i, t) in termes.iter().enumerate() {
        let negatif = t.coeff.is_negative();
        if i == 0 {
            if negatif {
                out.push('-');
            }
        } else if negatif {
            out.push_str(" - ");
        } else {
            out.push_str(" + ");
        }
        out.push_str(&affiche_terme_abs(t));
    }
    out
}

impl fmt::Display for ValeurExacte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", affiche_valeur(self))
    }
}

/* ------------------------ Angle coeff·π "joli" ------------------------ */

/// coeff·π : affichage joli ("0", "π", "π/2", "-π/4", "7π/6", "2π").
pub fn affiche_angle_pi(coeff: &BigRational) -> String {
    let n = coeff.numer();
    let d = coeff.denom();

    if n.is_zero() {
        return "0".to_string();
    }

    if d.is_one() {
        if n.is_one() {
            return "π".to_string();
        }
        if *n == BigInt::from(-1) {
            return "-π".to_string();
        }
        return format!("{n}π");
    }

    if n.is_one() {
        return format!("π/{d}");
    }
    if *n == BigInt::from(-1) {
        return format!("-π/{d}");
    }
    format!("{n}π/{d}")
}

/* ------------------------ Tests ------------------------ */
