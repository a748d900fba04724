use super::Modifier;

impl Modifier {
    /// Positions of the rolls that count toward the total, in ascending order
    ///
    /// Ties are broken by roll order: the die rolled earlier is kept.
    pub(crate) fn retain(&self, rolls: &[u64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..rolls.len()).collect();
        let keep = match *self {
            Modifier::None => return order,
            Modifier::KeepHigh(n) => {
                // stable sort, equal values stay in roll order
                order.sort_by(|&a, &b| rolls[b].cmp(&rolls[a]));
                n
            }
            Modifier::KeepLow(n) => {
                order.sort_by_key(|&index| rolls[index]);
                n
            }
        };
        order.truncate(keep);
        order.sort_unstable();
        order
    }
}
