//! Types d'erreurs pour le crate esrijson

use thiserror::Error;

/// Erreurs pouvant survenir lors de la conversion d'un feature set Esri JSON.
///
/// Seule la structure du batch peut mettre la conversion en échec. Les
/// anomalies par enregistrement (géométrie absente ou invalide, code de
/// domaine inconnu) ne sont jamais des erreurs : elles dégradent en
/// géométrie `null` ou en valeur brute inchangée.
#[derive(Debug, Error)]
pub enum EsriJsonError {
    /// L'entrée n'a pas de tableau `features`
    #[error("missing 'features' array in feature set")]
    MissingFeatures,

    /// Le tableau `features` n'est pas une liste d'objets feature
    #[error("malformed feature set: {0}")]
    MalformedFeatureSet(String),
}

impl EsriJsonError {
    /// Crée une erreur de feature set malformé avec contexte
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedFeatureSet(reason.into())
    }
}
