//! Traduction des enregistrements Esri en features GeoJSON

pub mod attributes;
pub mod geometry;

use geojson::{Feature, JsonObject};
use serde_json::Value;

use crate::types::Field;
use attributes::{resolve_value, sanitize_key};
use geometry::translate_geometry;

/// Traduit un enregistrement Esri en feature GeoJSON.
///
/// Fonction totale : elle retourne toujours une feature complète, au besoin
/// avec une géométrie `null` et des propriétés vides. Les attributs sont
/// parcourus dans l'ordre du schéma quand il est fourni (puis les attributs
/// hors schéma dans leur ordre d'insertion), sinon dans l'ordre d'insertion.
pub fn translate_feature(fields: Option<&[Field]>, record: &JsonObject) -> Feature {
    let attributes = record.get("attributes").and_then(Value::as_object);

    let mut properties = JsonObject::new();
    if let Some(attributes) = attributes {
        match fields {
            Some(schema) if !schema.is_empty() => {
                // D'abord les champs du schéma présents dans les attributs
                for field in schema {
                    if let Some(raw) = attributes.get(&field.name) {
                        properties
                            .insert(sanitize_key(&field.name), resolve_value(Some(field), raw));
                    }
                }
                // Puis les attributs sans descripteur
                for (key, raw) in attributes {
                    if !schema.iter().any(|f| f.name == *key) {
                        properties.insert(sanitize_key(key), resolve_value(None, raw));
                    }
                }
            }
            _ => {
                for (key, raw) in attributes {
                    properties.insert(sanitize_key(key), resolve_value(None, raw));
                }
            }
        }
    }

    Feature {
        bbox: None,
        geometry: translate_geometry(record.get("geometry")),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
