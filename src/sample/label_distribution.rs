use std::collections::HashMap;


/// Occurrence count of each label within some set of rows.
///
/// Labels are kept in the order they are first seen,
/// so that every iteration over a distribution,
/// and thus every tie-break, is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelDistribution {
    counts: Vec<(String, usize)>,
    position: HashMap<String, usize>,
    n: usize,
}


impl LabelDistribution {
    /// Construct an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }


    /// Count one more occurrence of `label`.
    pub fn add<S: AsRef<str>>(&mut self, label: S) {
        let label = label.as_ref();
        match self.position.get(label) {
            Some(&k) => { self.counts[k].1 += 1; },
            None => {
                self.position.insert(label.to_string(), self.counts.len());
                self.counts.push((label.to_string(), 1));
            },
        }
        self.n += 1;
    }


    /// Total number of occurrences.
    pub fn n(&self) -> usize {
        self.n
    }


    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }


    /// Returns `true` if no label has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }


    /// Returns the count of `label`, `0` if it never occurred.
    pub fn count<S: AsRef<str>>(&self, label: S) -> usize {
        self.position.get(label.as_ref())
            .map(|&k| self.counts[k].1)
            .unwrap_or(0)
    }


    /// Iterate over `(label, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter()
            .map(|(label, count)| (label.as_str(), *count))
    }


    /// Returns the label if exactly one label occurs.
    pub fn pure_label(&self) -> Option<&str> {
        match &self.counts[..] {
            [(label, _)] => Some(label.as_str()),
            _ => None,
        }
    }


    /// Returns the most frequent label.
    /// Ties go to the label seen first.
    pub fn majority(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (label, count) in self.iter() {
            match best {
                Some((_, c)) if c >= count => {},
                _ => { best = Some((label, count)); },
            }
        }
        best.map(|(label, _)| label)
    }
}


impl<S: AsRef<str>> FromIterator<S> for LabelDistribution {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dist = Self::new();
        for label in iter {
            dist.add(label);
        }
        dist
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_in_first_seen_order() {
        let dist = ["b", "a", "b", "c", "a", "b"].into_iter()
            .collect::<LabelDistribution>();

        assert_eq!(dist.n(), 6);
        assert_eq!(dist.len(), 3);
        let pairs = dist.iter().collect::<Vec<_>>();
        assert_eq!(pairs, vec![("b", 3), ("a", 2), ("c", 1)]);
        assert_eq!(dist.count("z"), 0);
    }


    #[test]
    fn majority_prefers_first_seen_on_ties() {
        let dist = ["no", "yes", "yes", "no"].into_iter()
            .collect::<LabelDistribution>();
        assert_eq!(dist.majority(), Some("no"));

        let dist = ["yes", "no", "no"].into_iter()
            .collect::<LabelDistribution>();
        assert_eq!(dist.majority(), Some("no"));
    }


    #[test]
    fn pure_label_only_for_single_label() {
        let dist = ["x", "x"].into_iter().collect::<LabelDistribution>();
        assert_eq!(dist.pure_label(), Some("x"));

        let dist = ["x", "y"].into_iter().collect::<LabelDistribution>();
        assert_eq!(dist.pure_label(), None);

        assert_eq!(LabelDistribution::new().majority(), None);
    }
}
