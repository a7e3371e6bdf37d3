/// Splits a source or hex line at commas, trimming the surrounding
/// whitespace of every field.
pub fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim)
}
