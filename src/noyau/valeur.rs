// src/noyau/valeur.rs
//
// Valeur exacte (sans flottants) : somme normalisée de termes
//   coeff · π^{0|1} · √n   (n entier sans facteur carré, 1 = pas de racine)
//
// Invariants :
// - termes triés par signature (π, radicande), signatures toutes distinctes
// - coefficients nuls retirés ; la liste vide est le zéro exact
// - radicandes toujours sans facteur carré (√8 est stocké 2√2)
// - un seul radicande par terme ; une somme peut en mélanger plusieurs
//   (sin 15° = √6/4 - √2/4)
//
// Hors grammaire (ExpressionNonSupportee) : π², racine quatrième,
// racine imbriquée, inverse de π.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::erreur::ErreurGeometrie;
use super::rationnel::{extrait_carre_parfait, inverse, racine_rationnelle_exacte};

/* ------------------------ Terme ------------------------ */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Terme {
    pub(crate) coeff: BigRational,
    pub(crate) pi: bool,
    pub(crate) racine: BigInt,
}

impl Terme {
    fn rationnel(coeff: BigRational) -> Terme {
        Terme {
            coeff,
            pi: false,
            racine: BigInt::one(),
        }
    }

    fn signature(&self) -> (bool, BigInt) {
        (self.pi, self.racine.clone())
    }

    /// coeff · π^{0|1} · √n en lecture flottante.
    pub(crate) fn approx(&self) -> f64 {
        let mut x = super::rationnel::en_f64(&self.coeff);
        if self.pi {
            x *= std::f64::consts::PI;
        }
        if !self.racine.is_one() {
            x *= super::rationnel::en_f64(&BigRational::from_integer(self.racine.clone())).sqrt();
        }
        x
    }

    /// t² est rationnel dès que t ne porte pas π.
    fn carre_rationnel(&self) -> Option<BigRational> {
        if self.pi {
            return None;
        }
        Some(&self.coeff * &self.coeff * BigRational::from_integer(self.racine.clone()))
    }
}

fn multiplier_termes(a: &Terme, b: &Terme) -> Result<Terme, ErreurGeometrie> {
    if a.pi && b.pi {
        return Err(ErreurGeometrie::ExpressionNonSupportee("π·π".into()));
    }

    let mut coeff = &a.coeff * &b.coeff;

    // √a · √b : radicandes sans facteur carré => on re-réduit le produit.
    // Même radicande : tout le carré sort, le terme redevient rationnel.
    let produit = &a.racine * &b.racine;
    let (sorti, reste) = extrait_carre_parfait(&produit);
    coeff *= BigRational::from_integer(sorti);

    Ok(Terme {
        coeff,
        pi: a.pi || b.pi,
        racine: reste,
    })
}

/* ------------------------ ValeurExacte ------------------------ */

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ValeurExacte {
    termes: Vec<Terme>,
}

/// Fusionne par signature, retire les coefficients nuls, trie.
fn normalise(mut termes: Vec<Terme>) -> Vec<Terme> {
    termes.sort_by(|a, b| a.signature().cmp(&b.signature()));

    let mut out: Vec<Terme> = Vec::with_capacity(termes.len());
    for t in termes {
        match out.last_mut() {
            Some(dernier) if dernier.signature() == t.signature() => {
                dernier.coeff += t.coeff;
            }
            _ => out.push(t),
        }
    }

    out.retain(|t| !t.coeff.is_zero());
    out
}

impl ValeurExacte {
    /* ---- constructeurs ---- */

    pub fn zero() -> ValeurExacte {
        ValeurExacte { termes: Vec::new() }
    }

    pub fn depuis_rationnel(r: BigRational) -> ValeurExacte {
        ValeurExacte {
            termes: normalise(vec![Terme::rationnel(r)]),
        }
    }

    pub fn depuis_entier(n: i64) -> ValeurExacte {
        ValeurExacte::depuis_rationnel(BigRational::from_integer(BigInt::from(n)))
    }

    /// r·π (un seul terme).
    pub fn pi_fois(r: BigRational) -> ValeurExacte {
        ValeurExacte {
            termes: normalise(vec![Terme {
                coeff: r,
                pi: true,
                racine: BigInt::one(),
            }]),
        }
    }

    /// r·√n, radicande normalisé sans facteur carré (r·√8 devient 2r·√2).
    pub fn racine_fois(r: BigRational, n: &BigInt) -> Result<ValeurExacte, ErreurGeometrie> {
        if n.is_negative() {
            return Err(ErreurGeometrie::ExpressionNonSupportee(
                "racine carrée d'un négatif".into(),
            ));
        }
        if n.is_zero() {
            return Ok(ValeurExacte::zero());
        }

        let (sorti, reste) = extrait_carre_parfait(n);
        let coeff = r * BigRational::from_integer(sorti);

        Ok(ValeurExacte {
            termes: normalise(vec![Terme {
                coeff,
                pi: false,
                racine: reste,
            }]),
        })
    }

    /* ---- arithmétique ---- */

    pub fn ajouter(&self, autre: &ValeurExacte) -> ValeurExacte {
        let mut termes = self.termes.clone();
        termes.extend(autre.termes.iter().cloned());
        ValeurExacte {
            termes: normalise(termes),
        }
    }

    pub fn soustraire(&self, autre: &ValeurExacte) -> ValeurExacte {
        self.ajouter(&autre.negation())
    }

    pub fn negation(&self) -> ValeurExacte {
        ValeurExacte {
            termes: self
                .termes
                .iter()
                .map(|t| Terme {
                    coeff: -t.coeff.clone(),
                    pi: t.pi,
                    racine: t.racine.clone(),
                })
                .collect(),
        }
    }

    /// Multiplie chaque coefficient par r.
    pub fn echelle(&self, r: &BigRational) -> ValeurExacte {
        if r.is_zero() {
            return ValeurExacte::zero();
        }
        ValeurExacte {
            termes: self
                .termes
                .iter()
                .map(|t| Terme {
                    coeff: &t.coeff * r,
                    pi: t.pi,
                    racine: t.racine.clone(),
                })
                .collect(),
        }
    }

    /// Distribution terme à terme. √n·√n redevient rationnel ; √a·√b est
    /// re-réduit sans facteur carré ; π·π est refusé.
    pub fn multiplier(&self, autre: &ValeurExacte) -> Result<ValeurExacte, ErreurGeometrie> {
        let mut termes = Vec::with_capacity(self.termes.len() * autre.termes.len());
        for a in &self.termes {
            for b in &autre.termes {
                termes.push(multiplier_termes(a, b)?);
            }
        }
        Ok(ValeurExacte {
            termes: normalise(termes),
        })
    }

    /// Division exacte.
    /// - diviseur rationnel pur ou mono-terme radical : multiplication par
    ///   l'inverse (1/(c√n) = √n/(cn))
    /// - diviseur à deux termes radicaux : rationalisation par le conjugué
    /// - zéro exact : DivisionParZero ; π au dénominateur ou trois termes et
    ///   plus : hors grammaire
    pub fn diviser(&self, diviseur: &ValeurExacte) -> Result<ValeurExacte, ErreurGeometrie> {
        if diviseur.est_nulle() {
            return Err(ErreurGeometrie::DivisionParZero);
        }
        if diviseur.termes.iter().any(|t| t.pi) {
            return Err(ErreurGeometrie::ExpressionNonSupportee(
                "π au dénominateur".into(),
            ));
        }

        match diviseur.termes.len() {
            1 => {
                let t = &diviseur.termes[0];
                // 1/(c·√n) = (1/(c·n))·√n
                let coeff = inverse(&(&t.coeff * BigRational::from_integer(t.racine.clone())))?;
                let inv = ValeurExacte {
                    termes: normalise(vec![Terme {
                        coeff,
                        pi: false,
                        racine: t.racine.clone(),
                    }]),
                };
                self.multiplier(&inv)
            }
            2 => {
                // (t1 + t2) · (t1 - t2) = t1² - t2², rationnel dès que les
                // deux termes sont sans π. Signatures distinctes => non nul.
                let t1 = &diviseur.termes[0];
                let t2 = &diviseur.termes[1];

                let c1 = t1.carre_rationnel().ok_or_else(|| {
                    ErreurGeometrie::ExpressionNonSupportee("π au dénominateur".into())
                })?;
                let c2 = t2.carre_rationnel().ok_or_else(|| {
                    ErreurGeometrie::ExpressionNonSupportee("π au dénominateur".into())
                })?;

                let conjugue = ValeurExacte {
                    termes: normalise(vec![
                        t1.clone(),
                        Terme {
                            coeff: -t2.coeff.clone(),
                            pi: false,
                            racine: t2.racine.clone(),
                        },
                    ]),
                };

                let denominateur = c1 - c2;
                Ok(self.multiplier(&conjugue)?.echelle(&inverse(&denominateur)?))
            }
            _ => Err(ErreurGeometrie::ExpressionNonSupportee(
                "dénominateur à plus de deux termes".into(),
            )),
        }
    }

    /// √v, défini seulement pour une valeur rationnelle pure et positive ;
    /// sinon le résultat serait une racine imbriquée, hors grammaire.
    pub fn racine(&self) -> Result<ValeurExacte, ErreurGeometrie> {
        let Some(r) = self.comme_rationnel() else {
            return Err(ErreurGeometrie::ExpressionNonSupportee(
                "racine imbriquée".into(),
            ));
        };
        if r.is_negative() {
            return Err(ErreurGeometrie::ExpressionNonSupportee(
                "racine carrée d'un négatif".into(),
            ));
        }

        // carré parfait rationnel : raccourci exact (Newton), évite la
        // factorisation des gros discriminants
        if let Some(s) = racine_rationnelle_exacte(&r) {
            return Ok(ValeurExacte::depuis_rationnel(s));
        }

        // √(p/q) = √(p·q)/q
        let pq = r.numer() * r.denom();
        let coeff = BigRational::new(BigInt::one(), r.denom().clone());
        ValeurExacte::racine_fois(coeff, &pq)
    }

    /* ---- prédicats & lectures ---- */

    pub fn est_nulle(&self) -> bool {
        self.termes.is_empty()
    }

    /// Some(r) si la valeur est un rationnel pur (zéro inclus).
    pub fn comme_rationnel(&self) -> Option<BigRational> {
        match self.termes.as_slice() {
            [] => Some(BigRational::zero()),
            [t] if !t.pi && t.racine.is_one() => Some(t.coeff.clone()),
            _ => None,
        }
    }

    /// Lecture flottante (affichage / pont de cohérence seulement,
    /// jamais utilisée pour l'égalité).
    pub fn approx(&self) -> f64 {
        self.termes.iter().map(Terme::approx).sum()
    }

    pub(crate) fn termes(&self) -> &[Terme] {
        &self.termes
    }
}

/* ------------------------ Tests ------------------------ */
