//! Moteur de géométrie et trigonométrie exactes Q-pur
//!
//! Résultats en forme fermée EXACTE (rationnels, multiples rationnels de π,
//! radicaux √n) au lieu d'approximations flottantes. Les entrées sont des
//! paramètres numériques simples ; un angle flottant est accroché au plus
//! proche angle "spécial" de la table (contrat assumé : entrée approchée,
//! sortie exacte).
//!
//! Moteur pur : aucune E/S, aucun état mutable ; la table d'angles est
//! construite une fois au premier usage puis lue sans verrou. Toute
//! impossibilité (tangente indéfinie, angle hors table, terme hors
//! grammaire…) est retournée comme condition nommée, jamais dégradée en
//! approximation.

pub mod noyau;

// API publique
pub use noyau::erreur::ErreurGeometrie;
pub use noyau::valeur::ValeurExacte;

pub use noyau::format::{affiche_angle_pi, affiche_valeur};
pub use noyau::lecture::lecture_decimale;

pub use noyau::table::{rad_le_plus_proche, table_angles, valeur_la_plus_proche, AngleStandard};
pub use noyau::trig::{acos_exact, asin_exact, atan_exact, cos_exact, sin_exact, tan_exact};

pub use noyau::aires::{
    aire_cercle, aire_polygone, aire_segment_corde_rayon, aire_segment_hauteur_corde,
    aire_segment_hauteur_rayon, aire_triangle, circonference,
};
pub use noyau::volumes::{
    surface_cone, surface_sphere, volume_calotte, volume_cone, volume_pyramide,
    volume_pyramide_reguliere, volume_sphere, volume_tetraedre, volume_tronc_cone,
    volume_tronc_pyramide,
};
