// src/noyau/erreur.rs
//
// Erreurs du moteur exact.
// - Conditions nommées, retournées telles quelles à l'appelant.
// - Aucune récupération locale : jamais de repli silencieux vers une
//   approximation flottante.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurGeometrie {
    /// Inverse ou division par un zéro exact.
    #[error("division par zéro")]
    DivisionParZero,

    /// Les côtés violent l'inégalité triangulaire (contrainte relationnelle,
    /// pas une simple positivité).
    #[error("triangle invalide: {0}")]
    TriangleInvalide(String),

    /// Contrainte de cohérence géométrique violée (ex: h > 2r).
    #[error("géométrie invalide: {0}")]
    GeometrieInvalide(String),

    /// Tangente demandée sur un angle accroché à π/2 ou 3π/2.
    #[error("tangente indéfinie (cos nul)")]
    TangenteIndefinie,

    /// Recherche inverse : aucune entrée de la table ne correspond.
    #[error("angle non reconnu (angles spéciaux seulement)")]
    AucunAngleExact,

    /// Le calcul demanderait un terme hors grammaire (π², racine imbriquée…).
    #[error("expression hors grammaire exacte: {0}")]
    ExpressionNonSupportee(String),
}
