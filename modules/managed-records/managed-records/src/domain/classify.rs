/// Colors that flag a record as being of special interest. Case-sensitive.
pub const PRIMARY_COLORS: [&str; 3] = ["blue", "red", "yellow"];

#[must_use]
pub fn is_primary_color(color: &str) -> bool {
    PRIMARY_COLORS.contains(&color)
}
