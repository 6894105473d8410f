//! Hooks for the entry screen's input widgets.
//!
//! Widgets hand over raw text; these hooks normalise it into
//! [`FormEvent`]s. Empty or whitespace-only text always means "no value".

use vdyp_params_core::types::NumericInput;

use crate::events::{FormEvent, NumericField, TextField};

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Create a species code event from the code picker of row `slot`.
#[must_use]
pub fn on_species_code_input(slot: usize, text: &str) -> FormEvent {
    FormEvent::SpeciesCodeChanged {
        slot,
        code: non_blank(text),
    }
}

/// Create a percent event from the percent field of row `slot`.
///
/// A cleared field becomes an absent percent; anything else is passed on
/// as typed so the store's input policy decides how to read it.
#[must_use]
pub fn on_species_percent_input(slot: usize, text: &str) -> FormEvent {
    if text.trim().is_empty() {
        FormEvent::SpeciesPercentChanged { slot, value: None }
    } else {
        FormEvent::SpeciesPercentTyped {
            slot,
            text: text.to_string(),
        }
    }
}

/// Create a percent event from a numeric spinner of row `slot`.
#[must_use]
pub fn on_species_percent_value(slot: usize, value: Option<f64>) -> FormEvent {
    FormEvent::SpeciesPercentChanged {
        slot,
        value: value.map(NumericInput::Number),
    }
}

/// Create a site species event from the site species picker.
#[must_use]
pub fn on_site_species_selected(text: &str) -> FormEvent {
    FormEvent::SiteSpeciesSelected(non_blank(text))
}

/// Create an event for a free-text site field.
#[must_use]
pub fn on_text_input(field: TextField, text: &str) -> FormEvent {
    FormEvent::TextFieldChanged {
        field,
        value: non_blank(text),
    }
}

/// Create an event for a numeric site or density field.
///
/// Text is read leniently: `"25 m"` becomes `25.0`, unreadable text `0.0`.
#[must_use]
pub fn on_numeric_input(field: NumericField, text: &str) -> FormEvent {
    let value = non_blank(text).map(|t| NumericInput::Text(t).coerce_lenient());
    FormEvent::NumericFieldChanged { field, value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_code_is_none() {
        assert_eq!(
            on_species_code_input(2, "   "),
            FormEvent::SpeciesCodeChanged { slot: 2, code: None }
        );
        assert_eq!(
            on_species_code_input(0, " PL "),
            FormEvent::SpeciesCodeChanged {
                slot: 0,
                code: Some("PL".to_string())
            }
        );
    }

    #[test]
    fn percent_text_is_passed_through() {
        assert_eq!(
            on_species_percent_input(1, "12,5"),
            FormEvent::SpeciesPercentTyped {
                slot: 1,
                text: "12,5".to_string()
            }
        );
        assert_eq!(
            on_species_percent_input(1, ""),
            FormEvent::SpeciesPercentChanged { slot: 1, value: None }
        );
    }

    #[test]
    fn numeric_fields_are_read_leniently() {
        assert_eq!(
            on_numeric_input(NumericField::Height, "17.5 m"),
            FormEvent::NumericFieldChanged {
                field: NumericField::Height,
                value: Some(17.5)
            }
        );
        assert_eq!(
            on_numeric_input(NumericField::BasalArea, "?"),
            FormEvent::NumericFieldChanged {
                field: NumericField::BasalArea,
                value: Some(0.0)
            }
        );
        assert_eq!(
            on_numeric_input(NumericField::Age, ""),
            FormEvent::NumericFieldChanged {
                field: NumericField::Age,
                value: None
            }
        );
    }
}
