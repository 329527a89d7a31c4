/// Ordinal color scale that grows its domain on lookup.
///
/// Lookups of keys not yet in the domain append them, so the n-th distinct key
/// gets `range[n % range.len()]`.
#[derive(Debug, Clone)]
pub struct OrdinalScale<'a> {
    domain: Vec<String>,
    range: &'a [&'a str],
}

impl<'a> OrdinalScale<'a> {
    pub fn new<I>(range: &'a [&'a str], domain: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut scale = Self {
            domain: Vec::new(),
            range,
        };
        for key in domain {
            let key: String = key.into();
            scale.index_of(&key);
        }
        scale
    }

    /// Seed the domain with the lexically smallest and largest label.
    pub fn from_label_extent<'l, L>(range: &'a [&'a str], labels: L) -> Self
    where
        L: IntoIterator<Item = &'l str>,
    {
        let (mut min, mut max): (Option<&str>, Option<&str>) = (None, None);
        for label in labels {
            min = Some(min.map_or(label, |m| m.min(label)));
            max = Some(max.map_or(label, |m| m.max(label)));
        }
        Self::new(range, min.into_iter().chain(max))
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Color for `key`; `None` only when the range is empty.
    pub fn color(&mut self, key: &str) -> Option<&'a str> {
        if self.range.is_empty() {
            return None;
        }
        let index = self.index_of(key);
        Some(self.range[index % self.range.len()])
    }

    fn index_of(&mut self, key: &str) -> usize {
        match self.domain.iter().position(|k| k == key) {
            Some(index) => index,
            None => {
                self.domain.push(key.to_string());
                self.domain.len() - 1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: &[&str] = &["#4c4646", "#504a4b", "#565051"];

    #[test]
    fn extent_seeds_min_and_max_once() {
        let scale = OrdinalScale::from_label_extent(RANGE, ["Rent", "Food", "Gas"]);
        assert_eq!(scale.domain(), ["Food", "Rent"]);

        let scale = OrdinalScale::from_label_extent(RANGE, ["Rent", "Rent"]);
        assert_eq!(scale.domain(), ["Rent"]);
    }

    #[test]
    fn unseen_keys_continue_after_the_seed() {
        let mut scale = OrdinalScale::from_label_extent(RANGE, ["Rent", "Food"]);
        assert_eq!(scale.color("1200"), Some("#565051"));
        assert_eq!(scale.color("300"), Some("#4c4646"));
        assert_eq!(scale.color("1200"), Some("#565051"));
        assert_eq!(scale.color("Food"), Some("#4c4646"));
        assert_eq!(scale.domain().len(), 4);
    }

    #[test]
    fn empty_range_has_no_colors() {
        let mut scale = OrdinalScale::new(&[], ["a"]);
        assert_eq!(scale.color("a"), None);
    }
}
