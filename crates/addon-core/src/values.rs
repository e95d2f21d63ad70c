use serde_yaml::{Mapping, Value};

use crate::error::{AddOnError, AddOnResult};

/// The nested document a chart reads at render time. Paths such as
/// `global.cluster` address nested keys.
pub type ValuesTree = Mapping;

/// Template-engine truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => true,
    }
}

/// Write `value` at `path`, creating missing intermediate mappings and
/// leaving sibling keys untouched. Any non-mapping intermediate value is
/// replaced with an empty mapping.
///
/// A truthy scalar in the way is overwritten too; that case is logged since
/// it drops data the caller supplied.
pub fn set_path(tree: &mut ValuesTree, path: &str, value: impl Into<Value>) {
    let segments: Vec<&str> = path.split('.').collect();
    write(tree, &segments, value.into(), path);
}

/// Like [`set_path`], but fails with [`AddOnError::PathConflict`] instead of
/// replacing a truthy non-mapping intermediate value. Falsy values are still
/// replaced. Nothing is written when the call fails.
pub fn try_set_path(tree: &mut ValuesTree, path: &str, value: impl Into<Value>) -> AddOnResult<()> {
    let segments: Vec<&str> = path.split('.').collect();
    if let Some(segment) = find_conflict(tree, &segments) {
        return Err(AddOnError::PathConflict {
            path: path.to_string(),
            segment,
        });
    }
    write(tree, &segments, value.into(), path);
    Ok(())
}

/// Read the value at `path`, if every segment resolves.
pub fn get_path<'a>(tree: &'a ValuesTree, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = tree.get(segments.next()?)?;
    for segment in segments {
        current = current.as_mapping()?.get(segment)?;
    }
    Some(current)
}

/// First intermediate segment holding a truthy non-mapping value.
fn find_conflict(tree: &Mapping, segments: &[&str]) -> Option<String> {
    let (_, parents) = segments.split_last()?;
    let mut current = tree;
    for segment in parents {
        match current.get(*segment) {
            Some(Value::Mapping(child)) => current = child,
            Some(other) if is_truthy(other) => return Some(segment.to_string()),
            _ => return None,
        }
    }
    None
}

fn write(map: &mut Mapping, segments: &[&str], value: Value, path: &str) {
    match segments {
        [] => {}
        [last] => {
            map.insert(Value::from(*last), value);
        }
        [head, rest @ ..] => {
            let slot = map.entry(Value::from(*head)).or_insert(Value::Null);
            match slot {
                Value::Mapping(child) => write(child, rest, value, path),
                other => {
                    if is_truthy(other) {
                        tracing::warn!(
                            path,
                            segment = %head,
                            replaced = ?other,
                            "Overwriting non-mapping value with a mapping"
                        );
                    }
                    let mut child = Mapping::new();
                    write(&mut child, rest, value, path);
                    *other = Value::Mapping(child);
                }
            }
        }
    }
}
