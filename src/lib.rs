//! # esrijson
//!
//! Conversion de feature sets Esri JSON (ArcGIS REST) vers GeoJSON.
//!
//! ## Features
//!
//! - Conversion 1:1 préservant l'ordre : une feature GeoJSON par
//!   enregistrement source, jamais de filtrage
//! - Résolution des attributs pilotée par le schéma de champs : domaines
//!   `codedValue`, timestamps epoch → ISO-8601
//! - Tolérance par enregistrement : géométrie absente ou invalide → `null`,
//!   code de domaine inconnu → valeur brute, sans jamais interrompre le batch
//! - Types `geojson` pour l'interopérabilité avec l'écosystème Rust géospatial
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//!
//! let input = json!({
//!     "features": [
//!         { "attributes": { "OBJECTID": 1 }, "geometry": { "x": 2.35, "y": 48.86 } }
//!     ]
//! });
//!
//! let geojson = esrijson::from_esri(None, &input).unwrap();
//! assert_eq!(geojson.features.len(), 1);
//! ```

pub mod convert;
pub mod error;
pub mod types;

pub use error::EsriJsonError;
pub use types::{CodedValue, Domain, Field, FieldType};

use geojson::FeatureCollection;
use serde_json::Value;

use convert::translate_feature;

/// Convertit un feature set Esri JSON en `FeatureCollection` GeoJSON.
///
/// # Arguments
///
/// * `fields` - Schéma de champs du service source, tel que renvoyé par son
///   endpoint de métadonnées. Avec `None` (ou un slice vide), le schéma
///   embarqué dans le feature set (`input.fields`) est utilisé s'il existe ;
///   sinon la résolution des domaines et des dates est désactivée.
/// * `input` - Feature set déjà désérialisé, avec son tableau `features`.
///
/// # Returns
///
/// Une `FeatureCollection` avec exactement une feature par enregistrement
/// source, dans le même ordre.
///
/// # Errors
///
/// Retourne `EsriJsonError` uniquement si la structure du batch est
/// inexploitable (tableau `features` absent ou n'étant pas une liste
/// d'objets). Les anomalies par enregistrement ne font jamais échouer la
/// conversion.
pub fn from_esri(
    fields: Option<&[Field]>,
    input: &Value,
) -> Result<FeatureCollection, EsriJsonError> {
    // 1. Validation structurelle du batch
    let records = input
        .get("features")
        .ok_or(EsriJsonError::MissingFeatures)?;
    let records = records
        .as_array()
        .ok_or_else(|| EsriJsonError::malformed("'features' is not an array"))?;

    // Schéma explicite, sinon celui embarqué dans le feature set.
    // Un schéma vide équivaut à une absence de schéma.
    let embedded: Option<Vec<Field>> = match fields {
        Some(schema) if !schema.is_empty() => None,
        _ => input
            .get("fields")
            .and_then(|v| serde_json::from_value(v.clone()).ok()),
    };
    let fields = fields
        .filter(|schema| !schema.is_empty())
        .or_else(|| embedded.as_deref())
        .filter(|schema| !schema.is_empty());

    // 2. Traduction enregistrement par enregistrement, ordre préservé
    let mut features = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let record = record.as_object().ok_or_else(|| {
            EsriJsonError::malformed(format!("feature at index {index} is not an object"))
        })?;
        features.push(translate_feature(fields, record));
    }

    tracing::debug!(features = features.len(), "Converted Esri feature set");

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}
