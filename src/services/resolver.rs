use crate::domain::models::{Hint, HintRecord, Templates, UNKNOWN_PERSON};
use crate::services::alphabet;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CipherError {
    #[error("hint addresses position {position} but the key has {key_length} characters")]
    PositionOutOfRange { position: usize, key_length: usize },
    #[error("key character {0:?} is not in the A-Z/0-9 alphabet")]
    UnsupportedSymbol(char),
    #[error("hint for position {position} references hint {reference}, which is not resolved yet")]
    UnresolvedReference { position: usize, reference: usize },
}

/// Applies the completed hint set to the key.
///
/// Returns the encrypted key and one clue record per hint, both in
/// processing order (the completed set's order, ascending by character).
///
/// A relative hint's `reference_hint` is a 1-based index into that same
/// processing order; it must point strictly backward so the referenced
/// encrypted value already exists. Anything else — zero, self, forward or
/// past the end of the list — is rejected before the accumulator is read.
pub fn resolve(
    key: &str,
    hints: &[Hint],
    templates: &Templates,
) -> Result<(String, Vec<HintRecord>), CipherError> {
    let key_chars: Vec<char> = key.chars().collect();
    let mut encrypted_key = String::with_capacity(hints.len());
    let mut records = Vec::with_capacity(hints.len());

    for (order, hint) in hints.iter().enumerate() {
        let position = hint.character();
        if position == 0 || position > key_chars.len() {
            return Err(CipherError::PositionOutOfRange {
                position,
                key_length: key_chars.len(),
            });
        }
        let plain = key_chars[position - 1];
        let value = alphabet::value_of(plain).ok_or(CipherError::UnsupportedSymbol(plain))?;

        let (encrypted_value, hint_text) = match hint {
            Hint::Direct { person, shift, .. } => {
                let encrypted_value = alphabet::shift(value, *shift);
                let text = render(
                    &templates.direct,
                    &[
                        ("person", display_person(person).to_string()),
                        ("index", position.to_string()),
                        ("shift", shift.to_string()),
                        ("encrypted_char", alphabet::symbol_of(encrypted_value).to_string()),
                    ],
                );
                (encrypted_value, text)
            }
            Hint::Relative {
                person,
                reference_hint,
                extra_shift,
                ..
            } => {
                let reference = *reference_hint;
                if reference == 0 || reference > order {
                    return Err(CipherError::UnresolvedReference {
                        position,
                        reference,
                    });
                }
                // The guards above make the referenced hint already
                // processed. Its person passes through unchanged: only a
                // hint's own empty person gets the placeholder.
                let reference_person = hints[reference - 1].person();
                let template = if *extra_shift >= 0 {
                    &templates.relative_more
                } else {
                    &templates.relative_less
                };
                let text = render(
                    template,
                    &[
                        ("person", display_person(person).to_string()),
                        ("index", position.to_string()),
                        ("extra_shift", extra_shift.abs().to_string()),
                        ("reference_person", reference_person.to_string()),
                    ],
                );
                (alphabet::shift(value, *extra_shift), text)
            }
        };

        let symbol = alphabet::symbol_of(encrypted_value);
        encrypted_key.push(symbol);
        records.push(HintRecord {
            person: hint.person().to_string(),
            hint_text,
            requirement: hint.requirement().to_string(),
            encrypted_char: symbol,
        });
    }

    Ok((encrypted_key, records))
}

fn display_person(person: &str) -> &str {
    if person.is_empty() {
        UNKNOWN_PERSON
    } else {
        person
    }
}

fn render(template: &str, fields: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in fields {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}
