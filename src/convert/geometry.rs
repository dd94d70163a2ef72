//! Traduction des géométries Esri vers GeoJSON
//!
//! Les géométries Esri sont identifiées par leur clé de forme (`x`/`y`,
//! `points`, `paths`, `rings`). Toute géométrie absente, nulle ou non
//! reconnue dégrade en `None` — jamais en erreur, l'enregistrement devient
//! une feature à géométrie dégénérée.

use geojson::{Geometry, Position, Value as GeoValue};
use serde_json::Value;

/// Traduit une géométrie Esri brute en géométrie GeoJSON.
///
/// Retourne `None` pour une géométrie absente, nulle, sans clé de forme
/// reconnue, ou dont les coordonnées ne sont pas numériques. Les anneaux de
/// polygones sont émis tels quels : ni réordonnancement d'orientation, ni
/// regroupement par contenance.
pub fn translate_geometry(raw: Option<&Value>) -> Option<Geometry> {
    let obj = raw?.as_object()?;

    if obj.contains_key("x") && obj.contains_key("y") {
        let x = obj.get("x")?.as_f64()?;
        let y = obj.get("y")?.as_f64()?;
        return Some(Geometry::new(GeoValue::Point(vec![x, y])));
    }

    if let Some(points) = obj.get("points") {
        let coords = parse_positions(points)?;
        return Some(Geometry::new(GeoValue::MultiPoint(coords)));
    }

    if let Some(paths) = obj.get("paths") {
        let mut lines = parse_line_sets(paths)?;
        // Un seul chemin -> LineString, sinon MultiLineString
        return Some(if lines.len() == 1 {
            Geometry::new(GeoValue::LineString(lines.remove(0)))
        } else {
            Geometry::new(GeoValue::MultiLineString(lines))
        });
    }

    if let Some(rings) = obj.get("rings") {
        let rings = parse_line_sets(rings)?;
        return Some(Geometry::new(GeoValue::Polygon(rings)));
    }

    None
}

/// Lit une position `[x, y, ...]` ; toutes les ordonnées doivent être numériques
fn parse_position(value: &Value) -> Option<Position> {
    let coords = value.as_array()?;
    if coords.len() < 2 {
        return None;
    }
    coords.iter().map(Value::as_f64).collect()
}

/// Lit un tableau de positions
fn parse_positions(value: &Value) -> Option<Vec<Position>> {
    value.as_array()?.iter().map(parse_position).collect()
}

/// Lit un tableau de chemins ou d'anneaux
fn parse_line_sets(value: &Value) -> Option<Vec<Vec<Position>>> {
    value.as_array()?.iter().map(parse_positions).collect()
}
