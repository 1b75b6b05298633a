// src/noyau/aires.rs
//
// Géométrie plane exacte : aires et circonférence.
// - entrées : paramètres f64 finis, convertis en rationnels exacts
//   (fractions continues, cf. rationnel.rs)
// - préconditions relationnelles revalidées ici (inégalité triangulaire,
//   corde ≤ diamètre, hauteur ≤ diamètre) : fail fast AVANT tout calcul
// - résultat : ValeurExacte, jamais une approximation

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::erreur::ErreurGeometrie;
use super::rationnel::parametre_positif;
use super::trig::{acos_de_valeur, asin_de_valeur, sin_de_coeff, tan_de_coeff};
use super::valeur::ValeurExacte;

/* ------------------------ Cercle ------------------------ */

/// Aire du disque : π·r².
pub fn aire_cercle(rayon: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    let r = parametre_positif(rayon, "rayon")?;
    Ok(ValeurExacte::pi_fois(&r * &r))
}

/// Circonférence : 2π·r.
pub fn circonference(rayon: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    let r = parametre_positif(rayon, "rayon")?;
    Ok(ValeurExacte::pi_fois(r * BigRational::from_integer(BigInt::from(2))))
}

/* ------------------------ Triangle (Héron) ------------------------ */

/// Aire d'un triangle par la formule de Héron.
/// Inégalité triangulaire STRICTE exigée ; le discriminant rationnel donne
/// soit un rationnel pur, soit un unique radical supporté.
pub fn aire_triangle(a: f64, b: f64, c: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    let a = parametre_positif(a, "côté a")?;
    let b = parametre_positif(b, "côté b")?;
    let c = parametre_positif(c, "côté c")?;

    if &a + &b <= c || &a + &c <= b || &b + &c <= a {
        return Err(ErreurGeometrie::TriangleInvalide(format!(
            "côtés {a}, {b}, {c} : inégalité triangulaire violée"
        )));
    }

    // s(s-a)(s-b)(s-c), tout en rationnel exact
    let s = (&a + &b + &c) / BigRational::from_integer(BigInt::from(2));
    let discriminant = &s * (&s - &a) * (&s - &b) * (&s - &c);

    ValeurExacte::depuis_rationnel(discriminant).racine()
}

/* ------------------------ Polygone régulier ------------------------ */

/// Aire d'un polygone régulier à n côtés de longueur s : n·s²/(4·tan(π/n)).
/// π/n doit être un angle de la table (n ∈ {3, 4, 6, 12}) ; sinon l'erreur
/// de la recherche exacte est propagée telle quelle.
pub fn aire_polygone(n: u32, cote: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    if n < 3 {
        return Err(ErreurGeometrie::GeometrieInvalide(format!(
            "polygone à {n} côtés"
        )));
    }
    let s = parametre_positif(cote, "côté")?;

    let tangente = tan_de_coeff(&BigRational::new(BigInt::one(), BigInt::from(n)))?;

    // n·s²/4
    let coeff = BigRational::new(BigInt::from(n), BigInt::from(4)) * &s * &s;
    ValeurExacte::depuis_rationnel(coeff).diviser(&tangente)
}

/* ------------------------ Segment circulaire ------------------------ */

/// Cœur commun : aire = r²·(θ - sin θ)/2, θ = coeff·π recouvré par
/// trigonométrie inverse exacte.
fn aire_segment_depuis_theta(
    rayon: &BigRational,
    theta: &BigRational,
) -> Result<ValeurExacte, ErreurGeometrie> {
    let sinus = sin_de_coeff(theta)?;
    let moitie_r2 = (rayon * rayon) / BigRational::from_integer(BigInt::from(2));

    Ok(ValeurExacte::pi_fois(theta.clone())
        .soustraire(&sinus)
        .echelle(&moitie_r2))
}

/// Aire d'un segment circulaire depuis hauteur (flèche) et rayon.
/// cos(θ/2) = 1 - h/r ; exige 0 < h ≤ 2r. Hauteur au-delà du rayon :
/// segment majeur, la même formule reste valable.
pub fn aire_segment_hauteur_rayon(hauteur: f64, rayon: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    let h = parametre_positif(hauteur, "hauteur")?;
    let r = parametre_positif(rayon, "rayon")?;

    if h > BigRational::from_integer(BigInt::from(2)) * &r {
        return Err(ErreurGeometrie::GeometrieInvalide(
            "hauteur supérieure au diamètre".into(),
        ));
    }

    // cos(θ/2) = 1 - h/r, rationnel exact dans [-1, 1)
    let cos_demi = BigRational::from_integer(BigInt::one()) - &h / &r;
    let demi = acos_de_valeur(&ValeurExacte::depuis_rationnel(cos_demi))?;
    let theta = demi * BigRational::from_integer(BigInt::from(2));

    aire_segment_depuis_theta(&r, &theta)
}

/// Aire d'un segment circulaire depuis hauteur et corde.
/// Le rayon se déduit : r = (c² + 4h²)/(8h), toujours cohérent (h ≤ 2r),
/// puis même calcul que hauteur/rayon.
pub fn aire_segment_hauteur_corde(hauteur: f64, corde: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    parametre_positif(hauteur, "hauteur")?;
    parametre_positif(corde, "corde")?;

    let rayon = (corde * corde + 4.0 * hauteur * hauteur) / (8.0 * hauteur);
    aire_segment_hauteur_rayon(hauteur, rayon)
}

/// Aire d'un segment circulaire depuis corde et rayon (segment mineur :
/// la corde seule ne distingue pas les deux côtés).
/// sin(θ/2) = c/(2r) ; exige 0 < c ≤ 2r.
pub fn aire_segment_corde_rayon(corde: f64, rayon: f64) -> Result<ValeurExacte, ErreurGeometrie> {
    let c = parametre_positif(corde, "corde")?;
    let r = parametre_positif(rayon, "rayon")?;

    let diametre = BigRational::from_integer(BigInt::from(2)) * &r;
    if c > diametre {
        return Err(ErreurGeometrie::GeometrieInvalide(
            "corde supérieure au diamètre".into(),
        ));
    }

    let sin_demi = &c / diametre;
    let demi = asin_de_valeur(&ValeurExacte::depuis_rationnel(sin_demi))?;
    let theta = demi * BigRational::from_integer(BigInt::from(2));

    aire_segment_depuis_theta(&r, &theta)
}

/* ------------------------ Tests ------------------------ */
