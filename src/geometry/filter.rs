pub const NITROGEN: &str = "N";

/// Indices of the symbols equal to `target`, ignoring ASCII case.
pub fn select_indices<'a, I>(symbols: I, target: &str) -> Vec<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    symbols
        .into_iter()
        .enumerate()
        .filter(|(_, symbol)| symbol.eq_ignore_ascii_case(target))
        .map(|(i, _)| i)
        .collect()
}
