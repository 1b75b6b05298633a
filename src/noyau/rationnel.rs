// src/noyau/rationnel.rs
//
// Outils rationnels exacts au-dessus de BigRational.
// - BigRational garantit déjà la forme réduite (pgcd 1, dénominateur > 0)
//   et l'absence de débordement (entiers à précision arbitraire).
// - Entrée flottante : meilleure approximation rationnelle par fractions
//   continues, avec tolérance serrée. C'est le pendant "valeur" de
//   l'accrochage d'angle : entrée approchée, sortie exacte.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::ErreurGeometrie;

/// Tolérance absolue (relative à la grandeur) de la conversion f64 → rationnel.
const TOL_CONVERSION: f64 = 1e-9;

/* ------------------------ f64 -> rationnel (fractions continues) ------------------------ */

/// Convertit un f64 fini en rationnel exact par fractions continues :
/// premier convergent p/q tel que |x - p/q| <= TOL_CONVERSION·max(1,|x|).
///
/// Les entrées "propres" retombent sur leur forme simple (2.0 -> 2,
/// 0.1 -> 1/10, 1.9999999999999998 -> 2) ; une valeur réellement
/// irrationnelle reçoit un convergent à dénominateur modéré.
pub fn rationnel_depuis_f64(x: f64) -> Result<BigRational, ErreurGeometrie> {
    if !x.is_finite() {
        return Err(ErreurGeometrie::GeometrieInvalide(
            "paramètre non fini".into(),
        ));
    }
    if x == 0.0 {
        return Ok(BigRational::zero());
    }

    let negatif = x < 0.0;
    let cible = x.abs();
    let tol = TOL_CONVERSION * cible.max(1.0);

    // Convergents h/k de la fraction continue de `cible`.
    let (mut h_prec, mut k_prec): (i128, i128) = (1, 0);
    let (mut h, mut k): (i128, i128) = (cible.floor() as i128, 1);
    let mut reste = cible - cible.floor();

    for _ in 0..64 {
        let approx = h as f64 / k as f64;
        if (approx - cible).abs() <= tol {
            break;
        }
        if reste <= f64::EPSILON {
            break;
        }

        let t = 1.0 / reste;
        let a = t.floor();
        reste = t - a;

        // garde-fou débordement : on s'arrête sur le dernier convergent sûr
        let a = a as i128;
        let Some(h_suiv) = a.checked_mul(h).and_then(|v| v.checked_add(h_prec)) else {
            break;
        };
        let Some(k_suiv) = a.checked_mul(k).and_then(|v| v.checked_add(k_prec)) else {
            break;
        };

        h_prec = h;
        k_prec = k;
        h = h_suiv;
        k = k_suiv;
    }

    let mut r = BigRational::new(BigInt::from(h), BigInt::from(k));
    if negatif {
        r = -r;
    }
    Ok(r)
}

/// Lecture d'un paramètre géométrique strictement positif.
pub(crate) fn parametre_positif(x: f64, nom: &str) -> Result<BigRational, ErreurGeometrie> {
    let r = rationnel_depuis_f64(x)?;
    if !r.is_positive() {
        return Err(ErreurGeometrie::GeometrieInvalide(format!(
            "{nom} doit être strictement positif"
        )));
    }
    Ok(r)
}

/* ------------------------ Division gardée ------------------------ */

/// a / b, en refusant le zéro exact.
pub fn diviser(a: &BigRational, b: &BigRational) -> Result<BigRational, ErreurGeometrie> {
    if b.is_zero() {
        return Err(ErreurGeometrie::DivisionParZero);
    }
    Ok(a / b)
}

/// 1 / r, en refusant le zéro exact.
pub fn inverse(r: &BigRational) -> Result<BigRational, ErreurGeometrie> {
    if r.is_zero() {
        return Err(ErreurGeometrie::DivisionParZero);
    }
    Ok(BigRational::one() / r)
}

/// Lecture flottante (affichage / pont de cohérence seulement).
pub fn en_f64(r: &BigRational) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}

/* ------------------------ Puissance entière (exponentiation binaire) ------------------------ */

pub(crate) fn puissance_entiere(base: BigRational, exp: i64) -> BigRational {
    if exp == 0 {
        return BigRational::one();
    }
    if exp < 0 {
        let pos = puissance_entiere(base, -exp);
        return BigRational::one() / pos;
    }

    let mut e = exp as u64;
    let mut acc = BigRational::one();
    let mut b = base;

    while e > 0 {
        if (e & 1) == 1 {
            acc *= b.clone();
        }
        e >>= 1;
        if e > 0 {
            b *= b.clone();
        }
    }
    acc
}

/* ------------------------ Racines entières exactes ------------------------ */

/// √r si r est un carré parfait rationnel (numérateur ET dénominateur carrés).
pub(crate) fn racine_rationnelle_exacte(r: &BigRational) -> Option<BigRational> {
    if r.is_negative() {
        return None;
    }
    let sn = racine_entiere_exacte(r.numer())?;
    let sd = racine_entiere_exacte(r.denom())?;
    Some(BigRational::new(sn, sd))
}

fn racine_entiere_exacte(x: &BigInt) -> Option<BigInt> {
    if x.is_negative() {
        return None;
    }
    let s = racine_entiere_plancher(x);
    if &s * &s == *x {
        Some(s)
    } else {
        None
    }
}

/// floor(√x) par Newton sur BigInt.
pub(crate) fn racine_entiere_plancher(x: &BigInt) -> BigInt {
    if x.is_zero() || x.is_negative() {
        return BigInt::zero();
    }

    let mut y = depart_approx_racine(x);
    loop {
        let y_next = (&y + (x / &y)) >> 1;
        if y_next >= y {
            let mut z = y_next;
            while (&z + 1u32) * (&z + 1u32) <= *x {
                z += 1u32;
            }
            while &z * &z > *x {
                z -= 1u32;
            }
            return z;
        }
        y = y_next;
    }
}

fn depart_approx_racine(x: &BigInt) -> BigInt {
    let bits = x.bits();
    let half = bits.div_ceil(2);
    BigInt::one() << half
}

/* ------------------------ Extraction de carrés parfaits ------------------------ */

/// Décompose n >= 0 en n = s² * t, avec t sans facteur carré.
/// Essai par p = 2 puis impairs : suffisant pour nos petits radicandes
/// (√2, √3, √6, √12, discriminants de Héron, etc.)
pub(crate) fn extrait_carre_parfait(n: &BigInt) -> (BigInt, BigInt) {
    if n.is_zero() {
        return (BigInt::zero(), BigInt::zero());
    }
    if n.is_one() {
        return (BigInt::one(), BigInt::one());
    }

    let mut reste = n.clone();
    let mut s = BigInt::one();

    let mut p = BigInt::from(2);
    while &p * &p <= reste {
        let p2 = &p * &p;

        while (&reste % &p2).is_zero() {
            reste /= &p2;
            s *= &p;
        }

        if p == BigInt::from(2) {
            p = BigInt::from(3);
        } else {
            p += 2;
        }
    }

    (s, reste)
}

/* ------------------------ Modulo rationnel exact (sans flottants) ------------------------ */

/// Réduction modulo `periode` d'un coefficient rationnel (ex: periode=2 pour
/// un coefficient de π sur un tour). Retourne un rationnel dans [0, periode).
///
/// Si coeff = n/d, alors coeff mod periode = (n mod (periode*d))/d.
pub(crate) fn mod_rationnel(coeff: &BigRational, periode: i64) -> BigRational {
    if periode <= 0 {
        return coeff.clone();
    }
    if coeff.is_zero() {
        return BigRational::zero();
    }

    let d = coeff.denom().clone();
    let n = coeff.numer().clone();

    let p = BigInt::from(periode);
    let m = &p * &d;

    let r = mod_euclid_bigint(&n, &m);
    BigRational::new(r, d)
}

fn mod_euclid_bigint(a: &BigInt, m: &BigInt) -> BigInt {
    if m.is_zero() {
        return a.clone();
    }
    let mut r = a % m;
    if r.is_negative() {
        r += m;
    }
    r
}

/* ------------------------ Tests ------------------------ */
