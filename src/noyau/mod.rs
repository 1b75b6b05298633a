//! Noyau géométrique Q-pur
//!
//! Organisation interne :
//! - rationnel.rs : outils rationnels exacts + frontière f64 (fractions continues)
//! - valeur.rs    : valeurs exactes (somme normalisée de termes coeff·π·√n)
//! - format.rs    : affichage EXACT "joli" (4π, √2/2, 3√7/4…)
//! - table.rs     : table des angles standards + accrochage au plus proche
//! - trig.rs      : trig exacte directe + recherches inverses
//! - aires.rs     : géométrie plane (cercle, triangle, polygone, segment)
//! - volumes.rs   : solides (sphère, calotte, cône, pyramide, troncs, tétraèdre)
//! - lecture.rs   : lecture décimale exacte tronquée

pub mod aires;
pub mod erreur;
pub mod format;
pub mod lecture;
pub mod rationnel;
pub mod table;
pub mod trig;
pub mod valeur;
pub mod volumes;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;
