use nutype::nutype;

pub const MAX_TITLE_LENGTH: usize = 512;

/// Display title of a launcher item.
///
/// Surrounding whitespace is trimmed; interior whitespace and case are kept
/// as given since tokenization and matching depend on them.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_TITLE_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Title(String);
