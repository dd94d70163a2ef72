//! Résolution des valeurs d'attributs et nettoyage des clés

use chrono::{DateTime, SecondsFormat};
use serde_json::Value;

use crate::types::{CodedValue, Domain, Field, FieldType};

/// Résout la valeur d'affichage d'un attribut brut selon son descripteur.
///
/// Sans descripteur, la valeur passe à l'identique. Un champ date convertit
/// les timestamps epoch (millisecondes) en ISO-8601 UTC ; un champ à domaine
/// `codedValue` substitue le nom associé au code. Toute valeur qui ne
/// correspond à rien ressort inchangée, jamais en erreur.
pub fn resolve_value(field: Option<&Field>, raw: &Value) -> Value {
    let Some(field) = field else {
        return raw.clone();
    };

    if field.field_type == FieldType::Date {
        return resolve_date(raw);
    }

    if let Some(Domain::CodedValue { coded_values, .. }) = &field.domain {
        return resolve_coded_value(coded_values, raw);
    }

    raw.clone()
}

/// Nettoie une clé d'attribut pour les consommateurs GeoJSON.
///
/// Supprime uniquement `.`, `(` et `)` en préservant l'ordre des autres
/// caractères. Deux clés distinctes peuvent se confondre après nettoyage ;
/// dans ce cas la dernière écrite l'emporte dans les propriétés de sortie.
pub fn sanitize_key(key: &str) -> String {
    key.chars().filter(|c| !matches!(c, '.' | '(' | ')')).collect()
}

/// Convertit un timestamp epoch (ms) en chaîne ISO-8601 UTC
fn resolve_date(raw: &Value) -> Value {
    // Une date absente reste null : surtout pas de 1970-01-01
    if raw.is_null() {
        return Value::Null;
    }

    match raw.as_i64().and_then(DateTime::from_timestamp_millis) {
        Some(dt) => Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => raw.clone(),
    }
}

/// Cherche le nom associé à un code dans un domaine à valeurs codées
fn resolve_coded_value(coded_values: &[CodedValue], raw: &Value) -> Value {
    // Les valeurs vides ne passent jamais par le domaine
    if is_empty_value(raw) {
        return raw.clone();
    }

    // Égalité stricte, sensible au type : 0 ne correspond pas à "0"
    match coded_values.iter().find(|cv| cv.code == *raw) {
        Some(cv) => Value::String(cv.name.clone()),
        None => raw.clone(),
    }
}

/// Une valeur vide : null, chaîne vide ou chaîne d'espaces
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date_field(name: &str) -> Field {
        serde_json::from_value(json!({
            "name": name,
            "type": "esriFieldTypeDate",
            "alias": name
        }))
        .unwrap()
    }

    fn coded_field(name: &str, field_type: &str, codes: Value) -> Field {
        serde_json::from_value(json!({
            "name": name,
            "type": field_type,
            "alias": name,
            "domain": {
                "type": "codedValue",
                "name": name,
                "codedValues": codes
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_no_descriptor_passes_through() {
        assert_eq!(resolve_value(None, &json!("D")), json!("D"));
        assert_eq!(resolve_value(None, &json!(42)), json!(42));
        assert_eq!(resolve_value(None, &Value::Null), Value::Null);
    }

    #[test]
    fn test_date_epoch_to_iso() {
        let field = date_field("last_edited_date");
        assert_eq!(
            resolve_value(Some(&field), &json!(1432147670000i64)),
            json!("2015-05-20T18:47:50.000Z")
        );
    }

    #[test]
    fn test_null_date_stays_null() {
        let field = date_field("date");
        let resolved = resolve_value(Some(&field), &Value::Null);
        assert_eq!(resolved, Value::Null);
        // Et surtout pas l'epoch zéro
        assert_ne!(resolved, json!("1970-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_non_integer_date_passes_through() {
        let field = date_field("date");
        assert_eq!(
            resolve_value(Some(&field), &json!("not a timestamp")),
            json!("not a timestamp")
        );
    }

    #[test]
    fn test_coded_value_substitution() {
        let field = coded_field(
            "NAME",
            "esriFieldTypeSmallInteger",
            json!([
                { "name": "Name0", "code": 0 },
                { "name": "Name1", "code": 1 }
            ]),
        );

        assert_eq!(resolve_value(Some(&field), &json!(0)), json!("Name0"));
        assert_eq!(resolve_value(Some(&field), &json!(1)), json!("Name1"));
    }

    #[test]
    fn test_coded_value_is_type_sensitive() {
        let field = coded_field(
            "NAME",
            "esriFieldTypeSmallInteger",
            json!([{ "name": "Name0", "code": 0 }]),
        );

        // "0" (chaîne) ne doit pas matcher le code numérique 0
        assert_eq!(resolve_value(Some(&field), &json!("0")), json!("0"));
    }

    #[test]
    fn test_unmatched_code_passes_through() {
        let field = coded_field(
            "ZONEFIELD",
            "esriFieldTypeString",
            json!([
                { "name": "Zone A", "code": "A" },
                { "name": "Zone B", "code": "B" }
            ]),
        );

        assert_eq!(resolve_value(Some(&field), &json!("D")), json!("D"));
    }

    #[test]
    fn test_empty_value_skips_domain() {
        let field = coded_field(
            "ST_PREFIX",
            "esriFieldTypeString",
            json!([{ "name": "North", "code": " " }]),
        );

        // Même si " " figure dans le domaine, une valeur vide reste brute
        assert_eq!(resolve_value(Some(&field), &json!(" ")), json!(" "));
        assert_eq!(resolve_value(Some(&field), &json!("")), json!(""));
        assert_eq!(resolve_value(Some(&field), &Value::Null), Value::Null);
    }

    #[test]
    fn test_plain_field_passes_through() {
        let field: Field = serde_json::from_value(json!({
            "name": "OBJECTID",
            "type": "esriFieldTypeOID",
            "alias": "OBJECTID"
        }))
        .unwrap();

        assert_eq!(resolve_value(Some(&field), &json!(7)), json!(7));
    }

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("(EVT.RT)"), "EVTRT");
        assert_eq!(sanitize_key("plain_key"), "plain_key");
        assert_eq!(sanitize_key("a.b(c)d"), "abcd");
        assert_eq!(sanitize_key("St. John's"), "St John's");
    }
}
