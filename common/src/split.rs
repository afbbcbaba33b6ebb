#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitBehaviour {
    #[default]
    None,
    DropEmpty,
}

/// Splits `text` on `delimiter`.
///
/// With `SplitBehaviour::None` every field is kept, empty ones included, but a trailing
/// delimiter does not open a new field: four spaces give four empty fields.
/// `SplitBehaviour::DropEmpty` discards all empty fields.
pub fn split(text: &str, delimiter: char, behaviour: SplitBehaviour) -> Vec<&str> {
    match behaviour {
        SplitBehaviour::None => text.split_terminator(delimiter).collect(),
        SplitBehaviour::DropEmpty => text
            .split(delimiter)
            .filter(|field| !field.is_empty())
            .collect(),
    }
}
