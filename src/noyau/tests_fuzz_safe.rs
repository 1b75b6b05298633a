//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler les formules sans brûler la machine.
//! - RNG déterministe (graine fixe)
//! - paramètres générés comme petits rationnels (la frontière f64 les
//!   reconvertit exactement : l'invariant exact≈flottant est alors testable)
//! - budget temps global
//! - liste blanche d'erreurs *normales* (domaine volontairement limité)
//! - invariant clé : un résultat Ok doit coller à la formule flottante
//!   de référence (pont exact/flottant), jamais s'en écarter

use std::time::{Duration, Instant};

use super::aires::{aire_cercle, aire_polygone, aire_segment_hauteur_rayon, aire_triangle};
use super::erreur::ErreurGeometrie;
use super::trig::{cos_exact, sin_exact, tan_exact};
use super::valeur::ValeurExacte;
use super::volumes::{volume_calotte, volume_cone, volume_sphere, volume_tetraedre};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn est_erreur_attendue(e: &ErreurGeometrie) -> bool {
    // Liste blanche : erreurs *normales* en fuzz, le domaine exact est
    // volontairement limité (table finie, contraintes relationnelles).
    matches!(
        e,
        ErreurGeometrie::TriangleInvalide(_)
            | ErreurGeometrie::GeometrieInvalide(_)
            | ErreurGeometrie::AucunAngleExact
            | ErreurGeometrie::TangenteIndefinie
    )
}

/// Petit rationnel positif k/d, retourné en f64 (reconversion exacte garantie).
fn gen_param(rng: &mut Rng) -> f64 {
    let k = 1.0 + rng.pick(24) as f64; // 1..24
    let d = match rng.pick(4) {
        0 => 1.0,
        1 => 2.0,
        2 => 4.0,
        _ => 8.0,
    };
    k / d
}

fn verifie_pont(valeur: &ValeurExacte, reference: f64, contexte: &str) {
    assert!(
        (valeur.approx() - reference).abs() <= 1e-6 * reference.abs().max(1.0),
        "écart exact/flottant: {contexte} exact={} ref={reference}",
        valeur.approx()
    );
}

/* ------------------------ Fuzz formules ------------------------ */

#[test]
fn fuzz_safe_formules_invariant_pont() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let a = gen_param(&mut rng);
        let b = gen_param(&mut rng);
        let c = gen_param(&mut rng);

        let (resultat, reference, contexte) = match rng.pick(8) {
            0 => (aire_cercle(a), std::f64::consts::PI * a * a, "cercle"),
            1 => {
                let s = (a + b + c) / 2.0;
                let disc = s * (s - a) * (s - b) * (s - c);
                (aire_triangle(a, b, c), disc.max(0.0).sqrt(), "triangle")
            }
            2 => {
                let n = [3u32, 4, 5, 6, 12][rng.pick(5) as usize];
                let reference =
                    n as f64 * a * a / (4.0 * (std::f64::consts::PI / n as f64).tan());
                (aire_polygone(n, a), reference, "polygone")
            }
            3 => {
                let reference = {
                    let x: f64 = 1.0 - a / b;
                    if x.abs() <= 1.0 {
                        let theta = 2.0 * x.acos();
                        b * b * (theta - theta.sin()) / 2.0
                    } else {
                        0.0
                    }
                };
                (aire_segment_hauteur_rayon(a, b), reference, "segment")
            }
            4 => (
                volume_sphere(a),
                4.0 / 3.0 * std::f64::consts::PI * a * a * a,
                "sphère",
            ),
            5 => (
                volume_calotte(a, b),
                std::f64::consts::PI * b * b * (3.0 * a - b) / 3.0,
                "calotte",
            ),
            6 => (
                volume_cone(a, b),
                std::f64::consts::PI * a * a * b / 3.0,
                "cône",
            ),
            _ => (
                volume_tetraedre(a),
                a * a * a * 2.0_f64.sqrt() / 12.0,
                "tétraèdre",
            ),
        };

        match resultat {
            Ok(v) => {
                verifie_pont(&v, reference, contexte);
                vus_ok += 1;
            }
            Err(e) => {
                assert!(est_erreur_attendue(&e), "erreur non attendue: {e} ({contexte})");
                vus_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne balaye rien.
    assert!(vus_ok > 50, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune erreur vue: fuzz trop sage");
}

/* ------------------------ Fuzz trig ------------------------ */

#[test]
fn fuzz_safe_trig_identites_structurelles() {
    let t0 = Instant::now();
    let max = Duration::from_millis(800);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let un = ValeurExacte::depuis_entier(1);

    for _ in 0..200 {
        budget(t0, max);

        // angle près d'un multiple de π/12 : accrochage déterministe
        let k = rng.pick(48) as f64 - 24.0;
        let bruit = (rng.pick(200) as f64 - 100.0) * 1e-4; // |bruit| ≤ 0.01
        let angle = k * std::f64::consts::PI / 12.0 + bruit;

        let s = sin_exact(angle).unwrap();
        let c = cos_exact(angle).unwrap();

        // sin² + cos² = 1, en égalité structurelle exacte
        let somme = s
            .multiplier(&s)
            .unwrap()
            .ajouter(&c.multiplier(&c).unwrap());
        assert_eq!(somme, un, "angle={angle}");

        // |sin| ≤ 1 côté flottant
        assert!(s.approx().abs() <= 1.0 + 1e-12);

        // tan : soit sin/cos exact, soit indéfini quand cos est nul
        match tan_exact(angle) {
            Ok(t) => {
                assert!(!c.est_nulle());
                assert!((t.approx() - s.approx() / c.approx()).abs() < 1e-9);
            }
            Err(ErreurGeometrie::TangenteIndefinie) => assert!(c.est_nulle()),
            Err(e) => panic!("erreur non attendue: {e}"),
        }
    }
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn fuzz_safe_determinisme_affichage() {
    // même graine => mêmes expressions => mêmes rendus
    let tirage = |graine: u64| -> Vec<String> {
        let mut rng = Rng::new(graine);
        (0..60)
            .map(|_| {
                let a = gen_param(&mut rng);
                let b = gen_param(&mut rng);
                match aire_segment_hauteur_rayon(a, b) {
                    Ok(v) => v.to_string(),
                    Err(e) => format!("erreur: {e}"),
                }
            })
            .collect()
    };

    assert_eq!(tirage(0xFEED_u64), tirage(0xFEED_u64));
}
