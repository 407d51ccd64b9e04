//! Scalar substitution

use std::borrow::Cow;

use regex::Captures;
use sheet_stencil_core::{CellValue, Worksheet};

use crate::payload::Payload;
use crate::placeholder::SCALAR_PATTERN;

/// Replace every `{{ key }}` marker in `text` with its payload value
///
/// Markers whose key is absent, or bound to a list, are left untouched.
/// Text without markers is returned borrowed.
///
/// ```
/// use sheet_stencil_template::{substitute_scalars, Payload};
///
/// let payload = Payload::from_json_str(r#"{"name": "Ada", "n": 3}"#).unwrap();
/// assert_eq!(substitute_scalars("Hi {{ name }} x{{n}}", &payload), "Hi Ada x3");
/// assert_eq!(substitute_scalars("{{ missing }}", &payload), "{{ missing }}");
/// ```
pub fn substitute_scalars<'t>(text: &'t str, payload: &Payload) -> Cow<'t, str> {
    SCALAR_PATTERN.replace_all(text, |caps: &Captures<'_>| {
        match payload.scalar_text(&caps[1]) {
            Some(value) => value.into_owned(),
            None => caps[0].to_string(),
        }
    })
}

/// Apply [`substitute_scalars`] to every text cell of a worksheet
///
/// The result is always written back as text. Returns the number of cells
/// whose content changed.
pub fn substitute_worksheet(worksheet: &mut Worksheet, payload: &Payload) -> usize {
    let mut changed = 0;
    for (_, _, cell) in worksheet.iter_cells_mut() {
        let replaced = match &cell.value {
            CellValue::Text(text) => match substitute_scalars(text, payload) {
                Cow::Owned(replaced) if replaced != *text => replaced,
                _ => continue,
            },
            _ => continue,
        };
        cell.value = CellValue::Text(replaced);
        changed += 1;
    }
    changed
}
