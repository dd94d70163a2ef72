//! Types de données pour le schéma de champs Esri
//!
//! Ces types se désérialisent directement depuis le tableau `fields` renvoyé
//! par un service ArcGIS REST (clés `esriFieldType*`, domaines à valeurs
//! codées). Le schéma est optionnel : sans lui, la résolution des attributs
//! dégrade en passage à l'identique.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Descripteur d'un champ du service source
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Field {
    /// Nom du champ, identique (sensible à la casse) à la clé d'attribut
    pub name: String,

    /// Type Esri du champ
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Alias d'affichage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Domaine de valeurs attaché au champ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,

    /// Longueur maximale (champs texte)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
}

/// Types de champs Esri (`esriFieldType*`)
///
/// Variante fermée : un type inconnu d'un service plus récent désérialise en
/// [`FieldType::Unknown`] au lieu de faire échouer tout le schéma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    String,
    SmallInteger,
    Integer,
    Single,
    Double,
    Date,
    Oid,
    Geometry,
    Blob,
    Raster,
    Guid,
    GlobalId,
    Xml,
    Unknown,
}

/// Mapping des noms de types Esri vers les variantes
const FIELD_TYPES: &[(&str, FieldType)] = &[
    ("esriFieldTypeString", FieldType::String),
    ("esriFieldTypeSmallInteger", FieldType::SmallInteger),
    ("esriFieldTypeInteger", FieldType::Integer),
    ("esriFieldTypeSingle", FieldType::Single),
    ("esriFieldTypeDouble", FieldType::Double),
    ("esriFieldTypeDate", FieldType::Date),
    ("esriFieldTypeOID", FieldType::Oid),
    ("esriFieldTypeGeometry", FieldType::Geometry),
    ("esriFieldTypeBlob", FieldType::Blob),
    ("esriFieldTypeRaster", FieldType::Raster),
    ("esriFieldTypeGUID", FieldType::Guid),
    ("esriFieldTypeGlobalID", FieldType::GlobalId),
    ("esriFieldTypeXML", FieldType::Xml),
];

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        FIELD_TYPES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, t)| *t)
            .unwrap_or(FieldType::Unknown)
    }
}

impl From<String> for FieldType {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        FIELD_TYPES
            .iter()
            .find(|(_, t)| *t == field_type)
            .map(|(n, _)| (*n).to_string())
            .unwrap_or_else(|| "esriFieldTypeUnknown".to_string())
    }
}

/// Domaine de valeurs d'un champ
///
/// Seuls les domaines `codedValue` participent à la résolution des
/// attributs ; `range` et `inherited` sont portés tels quels.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum Domain {
    #[serde(rename = "codedValue")]
    CodedValue {
        name: String,
        #[serde(rename = "codedValues")]
        coded_values: Vec<CodedValue>,
    },
    #[serde(rename = "range")]
    Range { name: String, range: [f64; 2] },
    #[serde(rename = "inherited")]
    Inherited,
}

/// Entrée d'un domaine à valeurs codées
///
/// Le code est conservé en JSON brut : la correspondance avec la valeur
/// d'attribut est une égalité stricte, sensible au type (un code numérique
/// ne correspond jamais à son équivalent en chaîne).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodedValue {
    pub name: String,
    pub code: Value,
}
