use std::collections::BTreeSet;

/// Names present in both lists.
pub fn intersect_columns<A, B>(left: A, right: B) -> BTreeSet<String>
where
    A: IntoIterator,
    A::Item: AsRef<str>,
    B: IntoIterator,
    B::Item: AsRef<str>,
{
    let left: BTreeSet<String> = left.into_iter().map(|s| s.as_ref().to_string()).collect();
    right
        .into_iter()
        .filter(|s| left.contains(s.as_ref()))
        .map(|s| s.as_ref().to_string())
        .collect()
}
