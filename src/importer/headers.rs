//! Header normalization: many spellings, three canonical fields.

use super::validation::strip_invisible;

pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const MEAL_PREFERENCE: &str = "meal_preference";

/// Known header spellings (already lower-cased and trimmed).
const SYNONYMS: &[(&str, &str)] = &[
    // first name
    ("first_name", FIRST_NAME),
    ("firstname", FIRST_NAME),
    ("first name", FIRST_NAME),
    ("first", FIRST_NAME),
    ("fname", FIRST_NAME),
    ("given name", FIRST_NAME),
    ("given_name", FIRST_NAME),
    // last name
    ("last_name", LAST_NAME),
    ("lastname", LAST_NAME),
    ("last name", LAST_NAME),
    ("last", LAST_NAME),
    ("lname", LAST_NAME),
    ("surname", LAST_NAME),
    ("family name", LAST_NAME),
    ("family_name", LAST_NAME),
    // meal preference
    ("meal_preference", MEAL_PREFERENCE),
    ("meal preference", MEAL_PREFERENCE),
    ("meal", MEAL_PREFERENCE),
    ("dietary", MEAL_PREFERENCE),
    ("dietary preference", MEAL_PREFERENCE),
    ("dietary_preference", MEAL_PREFERENCE),
    ("diet", MEAL_PREFERENCE),
    ("food preference", MEAL_PREFERENCE),
    ("food_preference", MEAL_PREFERENCE),
];

/// Map a raw header cell to its canonical name.
/// Unknown headers come back lower-cased and trimmed, and are ignored later.
pub fn normalize_header(raw: &str) -> String {
    let key = strip_invisible(raw).trim().to_lowercase();

    SYNONYMS
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(key)
}

pub fn is_canonical(name: &str) -> bool {
    matches!(name, FIRST_NAME | LAST_NAME | MEAL_PREFERENCE)
}
