// src/noyau/lecture.rs
//
// Lecture décimale EXACTE tronquée d'une valeur, à précision demandée.
// - tout en entiers "scalés" (×10^digits) : aucune erreur flottante
// - π par la formule de Machin, avec cache par précision
// - √n par Newton sur entiers scalés
// - chiffres de garde internes pour amortir les troncatures intermédiaires
//
// Complémentaire de ValeurExacte::approx() (f64) : ici la précision est
// arbitraire, là c'est un simple pont de cohérence.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use super::valeur::ValeurExacte;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier "scalé" (×10^digits) en texte décimal tronqué.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// r -> entier "scalé" = trunc(r * 10^digits)
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    let scale = pow10(digits);
    (r.numer() * scale) / r.denom()
}

/* ------------------------ π (Machin) + cache ------------------------ */

/// arctan(1/q) en entier scalé (troncature) via série:
/// atan(z) = z - z^3/3 + z^5/5 - ...
fn arctan_inv_q_scaled(q: i64, scale: &BigInt) -> BigInt {
    let q = BigInt::from(q);

    let mut k: usize = 0;
    let mut sign_pos = true;

    let mut q_pow = q.clone();
    let mut sum = BigInt::zero();

    loop {
        let denom = BigInt::from((2 * k + 1) as i64);
        let d = &q_pow * &denom;

        let term = scale / &d;
        if term.is_zero() {
            break;
        }

        if sign_pos {
            sum += &term;
        } else {
            sum -= &term;
        }

        q_pow *= &q;
        q_pow *= &q;

        sign_pos = !sign_pos;
        k += 1;
    }

    sum
}

fn pi_scaled_compute(digits: usize) -> BigInt {
    // extra pour amortir les erreurs de troncature
    let extra = 10usize;
    let scale = pow10(digits + extra);

    // Machin : π = 16·atan(1/5) - 4·atan(1/239)
    let a = arctan_inv_q_scaled(5, &scale);
    let b = arctan_inv_q_scaled(239, &scale);

    let mut pi = BigInt::from(16) * a - BigInt::from(4) * b;

    pi /= pow10(extra);
    pi
}

static PI_CACHE: OnceLock<Mutex<HashMap<usize, BigInt>>> = OnceLock::new();

fn pi_scaled_cached(digits: usize) -> BigInt {
    let m = PI_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = m.lock().expect("mutex π");

    if let Some(v) = guard.get(&digits) {
        return v.clone();
    }

    let v = pi_scaled_compute(digits);
    guard.insert(digits, v.clone());
    v
}

/* ------------------------ √ scalée (Newton) ------------------------ */

/// sqrt(r) en entier scalé : trunc( sqrt(r) * 10^digits ), r = n/d >= 0.
fn rational_sqrt_scaled(r: &BigRational, digits: usize) -> BigInt {
    let n = r.numer().clone();
    let d = r.denom().clone();

    if n.is_zero() {
        return BigInt::zero();
    }

    // y ≈ sqrt(n/d)·10^digits  =>  y² ≈ (n·10^(2·digits))/d
    let scale2 = pow10(2 * digits);
    let target = n * scale2;

    let mut y = pow10(digits);
    if y.is_zero() {
        y = BigInt::one();
    }

    loop {
        let denom = &d * &y;
        if denom.is_zero() {
            break;
        }

        let q = &target / denom;
        let y_next = (&y + q) >> 1;

        if y_next == y || y_next == (&y - 1u32) {
            let mut y_adj = y_next;

            while (&y_adj + 1u32) * (&y_adj + 1u32) * &d <= target {
                y_adj += 1u32;
            }
            while &y_adj * &y_adj * &d > target {
                y_adj -= 1u32;
            }
            return y_adj;
        }

        y = y_next;
    }

    y
}

/* ------------------------ Lecture d'une valeur exacte ------------------------ */

/// Chiffres de garde internes.
const GARDE: usize = 10;

/// Rendu décimal tronqué à `digits` chiffres après la virgule.
/// Terme à terme : coeff scalé, ×π et ×√n scalés au besoin, somme exacte.
pub fn lecture_decimale(v: &ValeurExacte, digits: usize) -> String {
    let etendu = digits + GARDE;
    let scale_etendue = pow10(etendu);

    let mut somme = BigInt::zero();

    for t in v.termes() {
        let mut x = rational_scaled(&t.coeff, etendu);

        if t.pi {
            x = (x * pi_scaled_cached(etendu)) / &scale_etendue;
        }

        if !t.racine.is_one() {
            let racine = BigRational::from_integer(t.racine.clone());
            x = (x * rational_sqrt_scaled(&racine, etendu)) / &scale_etendue;
        }

        somme += x;
    }

    somme /= pow10(GARDE);
    scaled_to_decimal(somme, digits)
}

/* ------------------------ Tests ------------------------ */
