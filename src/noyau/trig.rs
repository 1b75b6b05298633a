// src/noyau/trig.rs
//
// Trigonométrie exacte sur la table d'angles standards.
// - sin/cos/tan : accrochage de l'angle flottant puis valeur exacte stockée ;
//   tan = sin/cos par division exacte (indéfini si cos nul)
// - variantes internes à angle rationnel EXACT (multiple de π) pour les
//   formules : recherche exacte dans la table, sans accrochage
// - asin/acos/atan : recherche inverse, angle principal retourné en multiple
//   rationnel de π ; aucune entrée ne correspond => AucunAngleExact
//
// Recherche inverse : égalité structurelle d'abord, sinon pont flottant à
// tolérance serrée (les valeurs de la table sont séparées de bien plus).

use num_bigint::BigInt;
use num_rational::BigRational;

use super::erreur::ErreurGeometrie;
use super::format::{affiche_angle_pi, affiche_valeur};
use super::rationnel::mod_rationnel;
use super::table::{entree_pour_coeff, table_angles, valeur_la_plus_proche, AngleStandard};
use super::valeur::ValeurExacte;

/// Tolérance du pont flottant des recherches inverses.
const TOL_INVERSE: f64 = 1e-8;

fn rat(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/* ------------------------ Trig directe (angle flottant accroché) ------------------------ */

/// sin exact de l'angle accroché.
pub fn sin_exact(angle: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    let e = valeur_la_plus_proche(angle)?;
    tracing::debug!(
        "sin({}) = {}",
        affiche_angle_pi(e.coeff_pi()),
        affiche_valeur(e.sinus())
    );
    Ok(e.sinus().clone())
}

/// cos exact de l'angle accroché.
pub fn cos_exact(angle: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    let e = valeur_la_plus_proche(angle)?;
    tracing::debug!(
        "cos({}) = {}",
        affiche_angle_pi(e.coeff_pi()),
        affiche_valeur(e.cosinus())
    );
    Ok(e.cosinus().clone())
}

/// tan exact de l'angle accroché ; TangenteIndefinie si l'angle s'accroche
/// à π/2 ou 3π/2 (cos exactement nul).
pub fn tan_exact(angle: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    let e = valeur_la_plus_proche(angle)?;
    tangente_de_entree(e)
}

fn tangente_de_entree(e: &AngleStandard) -> Result<ValeurExacte, ErreurGeometrie> {
    if e.cosinus().est_nulle() {
        tracing::debug!("tan({}) = indéfini", affiche_angle_pi(e.coeff_pi()));
        return Err(ErreurGeometrie::TangenteIndefinie);
    }
    let t = e.sinus().diviser(e.cosinus())?;
    tracing::debug!("tan({}) = {}", affiche_angle_pi(e.coeff_pi()), affiche_valeur(&t));
    Ok(t)
}

/* ------------------------ Trig à angle rationnel exact ------------------------ */

/// sin(coeff·π) par recherche exacte (coeff réduit modulo 2 au préalable).
/// Angle hors table => AucunAngleExact.
pub(crate) fn sin_de_coeff(coeff: &BigRational) -> Result<ValeurExacte, ErreurGeometrie> {
    let reduit = mod_rationnel(coeff, 2);
    let e = entree_pour_coeff(&reduit).ok_or(ErreurGeometrie::AucunAngleExact)?;
    Ok(e.sinus().clone())
}

/// tan(coeff·π) par recherche exacte, pour les formules (aire de polygone).
pub(crate) fn tan_de_coeff(coeff: &BigRational) -> Result<ValeurExacte, ErreurGeometrie> {
    let reduit = mod_rationnel(coeff, 2);
    let e = entree_pour_coeff(&reduit).ok_or(ErreurGeometrie::AucunAngleExact)?;
    tangente_de_entree(e)
}

/* ------------------------ Recherches inverses (angle principal) ------------------------ */

fn correspond(table: &ValeurExacte, exacte: Option<&ValeurExacte>, approche: f64) -> bool {
    if let Some(v) = exacte {
        if v == table {
            return true;
        }
    }
    (table.approx() - approche).abs() <= TOL_INVERSE
}

fn cherche_asin(
    exacte: Option<&ValeurExacte>,
    approche: f64,
) -> Result<BigRational, ErreurGeometrie> {
    // plage principale [-π/2, π/2] : coeff ∈ [0, 1/2] ∪ [3/2, 2)
    for e in table_angles() {
        let c = e.coeff_pi();
        let principal = if *c <= rat(1, 2) {
            c.clone()
        } else if *c >= rat(3, 2) {
            c - rat(2, 1)
        } else {
            continue;
        };

        if correspond(e.sinus(), exacte, approche) {
            return Ok(principal);
        }
    }
    Err(ErreurGeometrie::AucunAngleExact)
}

fn cherche_acos(
    exacte: Option<&ValeurExacte>,
    approche: f64,
) -> Result<BigRational, ErreurGeometrie> {
    // plage principale [0, π] : coeff ∈ [0, 1]
    for e in table_angles() {
        let c = e.coeff_pi();
        if *c > rat(1, 1) {
            continue;
        }
        if correspond(e.cosinus(), exacte, approche) {
            return Ok(c.clone());
        }
    }
    Err(ErreurGeometrie::AucunAngleExact)
}

/// arcsin en multiple rationnel de π (plage [-1/2, 1/2] de π).
pub fn asin_exact(x: f64) -> Result<BigRational, ErreurGeometrie> {
    if !x.is_finite() {
        return Err(ErreurGeometrie::GeometrieInvalide("valeur non finie".into()));
    }
    cherche_asin(None, x)
}

/// arccos en multiple rationnel de π (plage [0, 1] de π).
pub fn acos_exact(x: f64) -> Result<BigRational, ErreurGeometrie> {
    if !x.is_finite() {
        return Err(ErreurGeometrie::GeometrieInvalide("valeur non finie".into()));
    }
    cherche_acos(None, x)
}

/// arctan en multiple rationnel de π (plage ]-1/2, 1/2[ de π).
pub fn atan_exact(x: f64) -> Result<BigRational, ErreurGeometrie> {
    if !x.is_finite() {
        return Err(ErreurGeometrie::GeometrieInvalide("valeur non finie".into()));
    }

    // plage principale ]-π/2, π/2[ : coeff ∈ [0, 1/2[ ∪ ]3/2, 2)
    for e in table_angles() {
        let c = e.coeff_pi();
        let principal = if *c < rat(1, 2) {
            c.clone()
        } else if *c > rat(3, 2) {
            c - rat(2, 1)
        } else {
            continue;
        };

        if e.cosinus().est_nulle() {
            continue;
        }
        let tangente = e.sinus().approx() / e.cosinus().approx();
        if (tangente - x).abs() <= TOL_INVERSE {
            return Ok(principal);
        }
    }
    Err(ErreurGeometrie::AucunAngleExact)
}

/* ---- variantes exactes, pour les formules ---- */

/// arcsin d'une valeur exacte (égalité structurelle, pont flottant en appui).
pub(crate) fn asin_de_valeur(v: &ValeurExacte) -> Result<BigRational, ErreurGeometrie> {
    cherche_asin(Some(v), v.approx())
}

/// arccos d'une valeur exacte.
pub(crate) fn acos_de_valeur(v: &ValeurExacte) -> Result<BigRational, ErreurGeometrie> {
    cherche_acos(Some(v), v.approx())
}

/* ------------------------ Tests ------------------------ */
