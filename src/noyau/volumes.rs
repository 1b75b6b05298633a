// src/noyau/volumes.rs
//
// Solides exacts : volumes et surfaces.
// Même régime que aires.rs : paramètres f64 convertis en rationnels exacts,
// préconditions relationnelles d'abord, résultat ValeurExacte.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::aires::aire_polygone;
use super::erreur::ErreurGeometrie;
use super::rationnel::{parametre_positif, puissance_entiere};
use super::valeur::ValeurExacte;

fn rat_entier(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/* ------------------------ Sphère ------------------------ */

/// Volume de la sphère : (4/3)·π·r³.
pub fn volume_sphere(rayon: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    let r = parametre_positif(rayon, "rayon")?;
    let coeff = BigRational::new(BigInt::from(4), BigInt::from(3)) * puissance_entiere(r, 3);
    Ok(ValeurExacte::pi_fois(coeff))
}

/// Surface de la sphère : 4·π·r².
pub fn surface_sphere(rayon: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    let r = parametre_positif(rayon, "rayon")?;
    Ok(ValeurExacte::pi_fois(rat_entier(4) * &r * &r))
}

/// Volume d'une calotte sphérique : π·h²·(3r - h)/3 ; exige 0 < h ≤ 2r.
pub fn volume_calotte(rayon: f64, hauteur: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    let r = parametre_positif(rayon, "rayon")?;
    let h = parametre_positif(hauteur, "hauteur")?;

    if h > rat_entier(2) * &r {
        return Err(ErreurGeometrie::GeometrieInvalide(
            "hauteur supérieure au diamètre".into(),
        ));
    }

    let coeff = &h * &h * (rat_entier(3) * &r - &h) / rat_entier(3);
    Ok(ValeurExacte::pi_fois(coeff))
}

/* ------------------------ Cône ------------------------ */

/// Volume du cône : (1/3)·π·r²·h.
pub fn volume_cone(rayon: f64, hauteur: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    let r = parametre_positif(rayon, "rayon")?;
    let h = parametre_positif(hauteur, "hauteur")?;
    let coeff = BigRational::new(BigInt::one(), BigInt::from(3)) * &r * &r * h;
    Ok(ValeurExacte::pi_fois(coeff))
}

/// Surface totale du cône : π·r² + π·r·√(r² + h²).
/// Exacte dès que r² + h² est un carré parfait ou se réduit à un seul
/// radical supporté (toujours le cas pour des entrées rationnelles).
pub fn surface_cone(rayon: f64, hauteur: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    let r = parametre_positif(rayon, "rayon")?;
    let h = parametre_positif(hauteur, "hauteur")?;

    // apothème (hauteur oblique) : √(r² + h²)
    let apotheme = ValeurExacte::depuis_rationnel(&r * &r + &h * &h).racine()?;

    let base = ValeurExacte::pi_fois(&r * &r);
    let laterale = ValeurExacte::pi_fois(r).multiplier(&apotheme)?;

    Ok(base.ajouter(&laterale))
}

/* ------------------------ Pyramide ------------------------ */

/// Volume d'une pyramide de base donnée : (1/3)·aire_base·h.
pub fn volume_pyramide(aire_base: f64, hauteur: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    let a = parametre_positif(aire_base, "aire de base")?;
    let h = parametre_positif(hauteur, "hauteur")?;
    Ok(ValeurExacte::depuis_rationnel(
        a * h / rat_entier(3),
    ))
}

/// Variante : base polygonale régulière (n côtés de longueur donnée),
/// l'aire de base passe par aire_polygone.
pub fn volume_pyramide_reguliere(
    n: u32,
    cote: f64,
    hauteur: f64,
) -> Result<ValeurExacte, ErreurGeometrie> {
    let h = parametre_positif(hauteur, "hauteur")?;
    let base = aire_polygone(n, cote)?;
    Ok(base.echelle(&(h / rat_entier(3))))
}

/* ------------------------ Troncs ------------------------ */

/// Volume d'un tronc de pyramide : (h/3)·(A₁ + A₂ + √(A₁·A₂)).
pub fn volume_tronc_pyramide(
    aire_base1: f64,
    aire_base2: f64,
    hauteur: f64,
) -> Result<ValeurExacte, ErreurGeometrie> {
    let a1 = parametre_positif(aire_base1, "aire de base 1")?;
    let a2 = parametre_positif(aire_base2, "aire de base 2")?;
    let h = parametre_positif(hauteur, "hauteur")?;

    let moyenne = ValeurExacte::depuis_rationnel(&a1 * &a2).racine()?;
    let somme = ValeurExacte::depuis_rationnel(a1 + a2).ajouter(&moyenne);

    Ok(somme.echelle(&(h / rat_entier(3))))
}

/// Volume d'un tronc de cône : (π·h/3)·(r₁² + r₁·r₂ + r₂²).
pub fn volume_tronc_cone(
    rayon1: f64,
    rayon2: f64,
    hauteur: f64,
) -> Result<ValeurExacte, ErreurGeometrie> {
    let r1 = parametre_positif(rayon1, "rayon 1")?;
    let r2 = parametre_positif(rayon2, "rayon 2")?;
    let h = parametre_positif(hauteur, "hauteur")?;

    let coeff = (&r1 * &r1 + &r1 * &r2 + &r2 * &r2) * h / rat_entier(3);
    Ok(ValeurExacte::pi_fois(coeff))
}

/* ------------------------ Tétraèdre régulier ------------------------ */

/// Volume du tétraèdre régulier : a³·√2/12.
pub fn volume_tetraedre(arete: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    let a = parametre_positif(arete, "arête")?;
    let coeff = puissance_entiere(a, 3) / rat_entier(12);
    ValeurExacte::racine_fois(coeff, &BigInt::from(2))
}

/* ------------------------ Tests ------------------------ */
