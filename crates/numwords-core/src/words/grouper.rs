//! Splitting numbers into base-1000 groups.

use std::ops::Index;

use super::extractor::ValidatedNumber;

/// Base-1000 digits of a number, least-significant group first.
///
/// `groups[0]` holds units, `groups[1]` thousands, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSequence(Vec<u16>);

impl GroupSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.0
    }

    /// Rebuild the number the groups were taken from.
    pub fn reconstruct(&self) -> u64 {
        self.0
            .iter()
            .rev()
            .fold(0u64, |acc, &g| acc * 1000 + u64::from(g))
    }
}

impl Index<usize> for GroupSequence {
    type Output = u16;

    fn index(&self, index: usize) -> &u16 {
        &self.0[index]
    }
}

/// Split `number` into groups of three decimal digits.
///
/// Produces `ceil(digits / 3)` groups; zero yields a single `0` group.
pub fn group(number: ValidatedNumber) -> GroupSequence {
    let mut n = number.get();
    let digit_count = n.to_string().len();
    let group_count = digit_count.div_ceil(3);

    let mut groups = Vec::with_capacity(group_count);
    for _ in 0..group_count {
        groups.push((n % 1000) as u16);
        n /= 1000;
    }

    GroupSequence(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn groups_of(value: u64) -> Vec<u16> {
        group(ValidatedNumber::try_from(value).unwrap()).as_slice().to_vec()
    }

    #[test]
    fn test_group_order() {
        assert_eq!(groups_of(52832), vec![832, 52]);
        assert_eq!(groups_of(66723107008), vec![8, 107, 723, 66]);
    }

    #[test]
    fn test_group_count() {
        assert_eq!(groups_of(0), vec![0]);
        assert_eq!(groups_of(7), vec![7]);
        assert_eq!(groups_of(999), vec![999]);
        assert_eq!(groups_of(1000), vec![0, 1]);
        assert_eq!(groups_of(1000000), vec![0, 0, 1]);
        assert_eq!(groups_of(ValidatedNumber::MAX).len(), 5);
    }

    #[test]
    fn test_reconstruct() {
        for value in [1, 10, 1001, 9121, 10022, 66723107008, ValidatedNumber::MAX] {
            let number = ValidatedNumber::try_from(value).unwrap();
            assert_eq!(group(number).reconstruct(), value);
        }
    }
}
