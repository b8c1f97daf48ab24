//! Result writers: typed domain objects into untyped output records.
//!
//! Writers are shared across every handler that returns the same shape so
//! identical underlying data always produces an identical output record.
//! Two rules apply throughout: an unset scalar (absent string, non-positive
//! revision or feature id) omits its key entirely, while a guaranteed list
//! key materialises an empty sequence rather than disappearing.

use serde_json::Value;

use lathe_types::{Inertia, MaterialEntry, Point3, Transform};

use super::JsonMap;
use super::readers::{KEY_ORIGIN, KEY_SCALE, KEY_XAXIS, KEY_YAXIS, KEY_ZAXIS};

/// Inserts a string key only when a value is present.
pub(crate) fn put_opt_string(out: &mut JsonMap, key: &str, value: Option<&str>) {
    if let Some(text) = value {
        out.insert(key.to_owned(), Value::from(text));
    }
}

/// Inserts an integer key only when the value is positive.
pub(crate) fn put_positive(out: &mut JsonMap, key: &str, value: i32) {
    if value > 0 {
        out.insert(key.to_owned(), Value::from(value));
    }
}

/// Inserts a list of strings when one is present, regardless of emptiness.
pub(crate) fn put_opt_strings(out: &mut JsonMap, key: &str, values: Option<Vec<String>>) {
    if let Some(items) = values {
        out.insert(key.to_owned(), Value::from(items));
    }
}

/// Writes a point as an `x`/`y`/`z` record.
pub(crate) fn point(value: &Point3) -> JsonMap {
    let mut out = JsonMap::new();
    out.insert("x".to_owned(), Value::from(value.x));
    out.insert("y".to_owned(), Value::from(value.y));
    out.insert("z".to_owned(), Value::from(value.z));
    out
}

/// Writes a transform with exactly the key set the reader accepts.
pub(crate) fn transform(value: &Transform) -> JsonMap {
    let mut out = JsonMap::new();
    out.insert(KEY_ORIGIN.to_owned(), Value::Object(point(&value.origin)));
    out.insert(KEY_XAXIS.to_owned(), Value::Object(point(&value.x_axis)));
    out.insert(KEY_YAXIS.to_owned(), Value::Object(point(&value.y_axis)));
    out.insert(KEY_ZAXIS.to_owned(), Value::Object(point(&value.z_axis)));
    out.insert(KEY_SCALE.to_owned(), Value::from(value.scale));
    out
}

/// Writes an inertia result: a tensor becomes three axis-row point
/// records, a principal-axis vector becomes a single point record.
pub(crate) fn inertia(value: &Inertia) -> JsonMap {
    match value {
        Inertia::Tensor(rows) => {
            let mut out = JsonMap::new();
            let [x_row, y_row, z_row] = rows;
            out.insert(KEY_XAXIS.to_owned(), Value::Object(point(&row_point(x_row))));
            out.insert(KEY_YAXIS.to_owned(), Value::Object(point(&row_point(y_row))));
            out.insert(KEY_ZAXIS.to_owned(), Value::Object(point(&row_point(z_row))));
            out
        }
        Inertia::Vector(values) => point(&row_point(values)),
    }
}

fn row_point(row: &[f64; 3]) -> Point3 {
    Point3::new(row[0], row[1], row[2])
}

/// Writes a material entry list as `model`/`material` records; unset
/// fields are omitted per entry but the list itself always materialises.
pub(crate) fn material_entries(entries: &[MaterialEntry]) -> Vec<Value> {
    entries
        .iter()
        .map(|entry| {
            let mut out = JsonMap::new();
            put_opt_string(&mut out, "model", entry.file.as_deref());
            put_opt_string(&mut out, "material", entry.material.as_deref());
            Value::Object(out)
        })
        .collect()
}
