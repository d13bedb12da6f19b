/// Parse four numbers separated by any mix of commas and whitespace.
///
/// Returns `None` unless exactly four tokens are present and all of them
/// parse as numbers. Values come back in source order; their axis meaning
/// depends on where the string came from.
pub fn parse_bbox(raw: Option<&str>) -> Option<[f64; 4]> {
    let raw = raw?;

    let values = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<f64>().ok())
        .collect::<Option<Vec<f64>>>()?;

    values.try_into().ok()
}
