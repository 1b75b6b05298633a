//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier les garanties du moteur sans faire chauffer la machine.
//! - budget temps global par test
//! - pont exact/flottant sur TOUTE la table
//! - accord structurel inter-formules (trois entrées du segment circulaire)
//! - scénarios concrets de référence (4π, 36π, Héron 3-4-5…)
//!
//! Notes (alignées avec l'état du noyau) :
//! - L'accrochage est assumé : les invariants portent sur l'angle accroché,
//!   pas sur l'entrée flottante brute.
//! - L'accord inter-formules du segment vaut pour le segment MINEUR (h ≤ r) :
//!   la corde seule ne distingue pas les deux côtés du disque.

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;

use super::aires::{
    aire_cercle, aire_polygone, aire_segment_corde_rayon, aire_segment_hauteur_corde,
    aire_segment_hauteur_rayon, aire_triangle,
};
use super::erreur::ErreurGeometrie;
use super::lecture::lecture_decimale;
use super::table::{rad_le_plus_proche, table_angles};
use super::trig::{asin_exact, tan_exact};
use super::valeur::ValeurExacte;
use super::volumes::volume_sphere;

fn rat(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Pont exact / flottant ------------------------ */

#[test]
fn sci_pont_exact_flottant_table_complete() {
    // chaque angle standard : sin/cos exacts cohérents avec la trig f64
    for e in table_angles() {
        let x = e.radians();
        assert!(
            (e.sinus().approx() - x.sin()).abs() < 1e-12,
            "sin, angle {}",
            e.coeff_pi()
        );
        assert!(
            (e.cosinus().approx() - x.cos()).abs() < 1e-12,
            "cos, angle {}",
            e.coeff_pi()
        );
    }
}

#[test]
fn sci_identite_pythagoricienne_structurelle() {
    // sin² + cos² = 1, en égalité EXACTE, sur toute la table
    // (y compris les valeurs à deux termes de 15°/75°)
    let un = ValeurExacte::depuis_entier(1);
    for e in table_angles() {
        let s2 = e.sinus().multiplier(e.sinus()).unwrap();
        let c2 = e.cosinus().multiplier(e.cosinus()).unwrap();
        assert_eq!(s2.ajouter(&c2), un, "angle {}", e.coeff_pi());
    }
}

/* ------------------------ Accrochage ------------------------ */

#[test]
fn sci_accrochage_idempotent() {
    // accrocher un angle déjà dans la table le laisse inchangé
    for e in table_angles() {
        assert_eq!(&rad_le_plus_proche(e.radians()).unwrap(), e.coeff_pi());
    }
}

#[test]
fn sci_accrochage_deterministe() {
    // même entrée => même sortie, sur un balayage serré d'un tour complet
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    for k in 0..1000 {
        let angle = k as f64 * 0.0063;
        let a = rad_le_plus_proche(angle).unwrap();
        let b = rad_le_plus_proche(angle).unwrap();
        assert_eq!(a, b);
        budget(t0, max);
    }
}

/* ------------------------ Accord inter-formules (segment) ------------------------ */

#[test]
fn sci_segment_trois_entrees_accord_structurel() {
    // segment mineur : corde dérivée en flottant des mêmes (h, r),
    // corde = 2·√(h·(2r - h))
    let cas: [(f64, f64); 4] = [(1.0, 2.0), (2.0, 2.0), (3.0, 6.0), (0.5, 1.0)];

    for (h, r) in cas {
        let corde = 2.0 * (h * (2.0 * r - h)).sqrt();

        let par_hr = aire_segment_hauteur_rayon(h, r).unwrap();
        let par_hc = aire_segment_hauteur_corde(h, corde).unwrap();
        let par_cr = aire_segment_corde_rayon(corde, r).unwrap();

        assert_eq!(par_hr, par_hc, "h={h} r={r}");
        assert_eq!(par_hr, par_cr, "h={h} r={r}");
    }
}

#[test]
fn sci_segment_complet_egale_disque() {
    // h = 2r : le segment est le disque entier
    assert_eq!(
        aire_segment_hauteur_rayon(4.0, 2.0).unwrap(),
        aire_cercle(2.0).unwrap()
    );
}

/* ------------------------ Zéro algébrique ------------------------ */

#[test]
fn sci_zero_algebrique() {
    // v - v = 0 sur une valeur mixte π + radical
    let v = aire_segment_hauteur_rayon(1.0, 2.0).unwrap(); // 4π/3 - √3
    assert!(v.soustraire(&v).est_nulle());

    // √2·√2 - 2 = 0
    let racine2 = ValeurExacte::racine_fois(rat(1, 1), &BigInt::from(2)).unwrap();
    let produit = racine2.multiplier(&racine2).unwrap();
    assert!(produit.soustraire(&ValeurExacte::depuis_entier(2)).est_nulle());
}

/* ------------------------ Scénarios concrets de référence ------------------------ */

#[test]
fn sci_scenarios_reference() {
    // aire du disque de rayon 2 : 4π
    let aire = aire_cercle(2.0).unwrap();
    assert_eq!(aire.to_string(), "4π");
    assert!((aire.approx() - 12.566370614359172).abs() < 1e-9);

    // volume de la sphère de rayon 3 : 36π
    assert_eq!(volume_sphere(3.0).unwrap().to_string(), "36π");

    // Héron 3-4-5 : rationnel pur 6
    assert_eq!(
        aire_triangle(3.0, 4.0, 5.0).unwrap(),
        ValeurExacte::depuis_entier(6)
    );

    // Héron (2,2,3) : discriminant 63/16, radical unique 3√7/4
    assert_eq!(aire_triangle(2.0, 2.0, 3.0).unwrap().to_string(), "3√7/4");

    // tangente sur angle accroché à π/2 : indéfinie
    assert_eq!(
        tan_exact(std::f64::consts::FRAC_PI_2),
        Err(ErreurGeometrie::TangenteIndefinie)
    );

    // (1,1,3) : inégalité triangulaire violée
    assert!(matches!(
        aire_triangle(1.0, 1.0, 3.0),
        Err(ErreurGeometrie::TriangleInvalide(_))
    ));
}

/* ------------------------ Propagation des erreurs ------------------------ */

#[test]
fn sci_propagation_sans_degradation() {
    // angle hors table : l'erreur remonte telle quelle, jamais approchée
    assert_eq!(aire_polygone(5, 1.0), Err(ErreurGeometrie::AucunAngleExact));
    assert_eq!(
        aire_segment_hauteur_rayon(1.0, 3.0),
        Err(ErreurGeometrie::AucunAngleExact)
    );
    assert_eq!(asin_exact(0.3), Err(ErreurGeometrie::AucunAngleExact));
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_grands_parametres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // triplet 3-4-5 à l'échelle 10⁹ : tout reste exact en BigRational
    let aire = aire_triangle(3.0e9, 4.0e9, 5.0e9).unwrap();
    budget(t0, max);

    let attendu = ValeurExacte::depuis_rationnel(
        BigRational::from_integer(BigInt::from(6_000_000_000_000_000_000i64)),
    );
    assert_eq!(aire, attendu);
}

#[test]
fn sci_stress_lecture_grande_precision() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    // 500 décimales de π sans geler
    let v = ValeurExacte::pi_fois(rat(1, 1));
    let s = lecture_decimale(&v, 500);
    budget(t0, max);

    assert_eq!(s.len(), 2 + 500);
    assert!(s.starts_with("3.14159265358979323846264338327950288419716939937510"));
}
