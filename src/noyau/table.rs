// src/noyau/table.rs
//
// Table des angles standards : les 24 multiples de π/12 sur [0, 2π),
// chacun avec sin/cos exacts (coefficients rationnels, √2, √3, √6).
// - construite une fois (OnceLock), jamais mutée ensuite : lectures
//   concurrentes sans verrou
// - premier quadrant codé en dur, le reste par symétrie
//   (sin(π-x) = sin x, sin(π+x) = -sin x, cos x = sin(x+π/2))
// - recherche du plus proche voisin par dichotomie sur l'angle approché
//
// Contrat assumé : entrée approchée, sortie exacte. L'accrochage arrondit
// l'angle flottant au plus proche angle connu ; les garanties d'exactitude
// en aval portent sur l'angle accroché, pas sur l'entrée.

use std::sync::OnceLock;

use num_bigint::BigInt;
use num_rational::BigRational;

use super::erreur::ErreurGeometrie;
use super::format::affiche_angle_pi;
use super::valeur::ValeurExacte;

/// Un angle "spécial" : multiple rationnel de π dans [0, 2), sin/cos exacts,
/// et son approximation flottante (pour la recherche seulement).
#[derive(Clone, Debug)]
pub struct AngleStandard {
    coeff_pi: BigRational,
    sinus: ValeurExacte,
    cosinus: ValeurExacte,
    radians: f64,
}

impl AngleStandard {
    /// L'angle, en multiple rationnel de π.
    pub fn coeff_pi(&self) -> &BigRational {
        &self.coeff_pi
    }

    pub fn sinus(&self) -> &ValeurExacte {
        &self.sinus
    }

    pub fn cosinus(&self) -> &ValeurExacte {
        &self.cosinus
    }

    /// Approximation flottante de l'angle (recherche / affichage).
    pub fn radians(&self) -> f64 {
        self.radians
    }
}

/* ------------------------ Construction ------------------------ */

fn rat(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/// sin(k·π/12) pour k ∈ [0, 6] (premier quadrant, valeurs classiques).
fn sinus_premier_quadrant(k: usize) -> ValeurExacte {
    let racine = |cn: i64, cd: i64, n: i64| {
        // radicandes 2, 3, 6 : positifs et sans facteur carré
        ValeurExacte::racine_fois(rat(cn, cd), &BigInt::from(n)).expect("radicande positif")
    };

    match k {
        0 => ValeurExacte::zero(),
        // sin 15° = (√6 - √2)/4
        1 => racine(1, 4, 6).soustraire(&racine(1, 4, 2)),
        2 => ValeurExacte::depuis_rationnel(rat(1, 2)),
        3 => racine(1, 2, 2),
        4 => racine(1, 2, 3),
        // sin 75° = (√6 + √2)/4
        5 => racine(1, 4, 6).ajouter(&racine(1, 4, 2)),
        _ => ValeurExacte::depuis_entier(1),
    }
}

/// sin(k·π/12) pour k ∈ [0, 24), par symétrie de quadrant.
fn sinus_pour_index(k: usize) -> ValeurExacte {
    let k = k % 24;
    match k {
        0..=6 => sinus_premier_quadrant(k),
        7..=12 => sinus_premier_quadrant(12 - k),
        13..=18 => sinus_premier_quadrant(k - 12).negation(),
        _ => sinus_premier_quadrant(24 - k).negation(),
    }
}

fn construit_table() -> Vec<AngleStandard> {
    (0..24usize)
        .map(|k| AngleStandard {
            coeff_pi: rat(k as i64, 12),
            sinus: sinus_pour_index(k),
            // cos x = sin(x + π/2)
            cosinus: sinus_pour_index(k + 6),
            radians: k as f64 * std::f64::consts::PI / 12.0,
        })
        .collect()
}

static TABLE: OnceLock<Vec<AngleStandard>> = OnceLock::new();

/// La table, triée par angle croissant. Immuable après construction.
pub fn table_angles() -> &'static [AngleStandard] {
    TABLE.get_or_init(construit_table).as_slice()
}

/* ------------------------ Recherche ------------------------ */

/// Entrée exacte pour un coefficient de π déjà réduit modulo 2 (ou None
/// si l'angle n'est pas dans la table). Recherche exacte, sans accrochage.
pub(crate) fn entree_pour_coeff(coeff: &BigRational) -> Option<&'static AngleStandard> {
    table_angles().iter().find(|e| &e.coeff_pi == coeff)
}

/// Accroche un angle flottant à l'entrée la plus proche de la table.
/// Réduction modulo 2π dans [0, 2π), puis dichotomie ; en cas d'égalité
/// stricte on préfère l'angle inférieur.
pub fn valeur_la_plus_proche(angle: f64) -> Result<&'static AngleStandard, ErreurGeometrie> {
    if !angle.is_finite() {
        return Err(ErreurGeometrie::GeometrieInvalide("angle non fini".into()));
    }

    let tau = 2.0 * std::f64::consts::PI;
    let reduit = angle.rem_euclid(tau);
    let t = table_angles();

    // premier index strictement au-dessus de l'angle réduit
    let i = t.partition_point(|e| e.radians <= reduit);

    let bas = &t[i - 1]; // i >= 1 : t[0].radians == 0.0 <= reduit
    let ecart_bas = reduit - bas.radians;
    let ecart_haut = if i < t.len() {
        t[i].radians - reduit
    } else {
        tau - reduit // candidat 2π ≡ entrée 0
    };

    let choix = if ecart_haut < ecart_bas {
        if i < t.len() {
            &t[i]
        } else {
            &t[0]
        }
    } else {
        bas
    };

    tracing::debug!(
        entree = angle,
        accroche = %affiche_angle_pi(choix.coeff_pi()),
        ecart = (reduit - choix.radians).abs().min((tau - reduit).abs()),
        "accrochage d'angle"
    );

    Ok(choix)
}

/// Variante ne retournant que l'angle accroché (multiple rationnel de π).
pub fn rad_le_plus_proche(angle: f64) -> Result<BigRational, ErreurGeometrie> {
    Ok(valeur_la_plus_proche(angle)?.coeff_pi.clone())
}

/* ------------------------ Tests ------------------------ */
