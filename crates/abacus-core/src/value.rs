//! Place values derived from bead offsets. Nothing here is stored: values are
//! recomputed from current offsets whenever they are needed.

use crate::bead::Bead;

/// Sum of the weights of the engaged beads in a column.
pub fn column_value<'a>(beads: impl IntoIterator<Item = &'a Bead>) -> u8 {
    beads
        .into_iter()
        .filter(|b| b.is_engaged())
        .map(|b| b.weight())
        .sum()
}

/// Fold decimal digits (most significant first) into a number.
pub fn fold_digits(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(*d as u64))
}

/// Text for the digit display: one digit per column, then the total.
pub fn format_readout(digits: &[u8]) -> String {
    if digits.is_empty() {
        return String::new();
    }
    let mut s = String::with_capacity(digits.len() * 2 + 24);
    for (i, d) in digits.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        s.push(char::from(b'0' + (*d).min(9)));
    }
    s.push_str(" = ");
    s.push_str(&fold_digits(digits).to_string());
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_keeps_leading_zeros_out_of_value() {
        assert_eq!(fold_digits(&[0, 0, 4, 2]), 42);
        assert_eq!(fold_digits(&[]), 0);
    }

    #[test]
    fn readout_lists_columns_then_total() {
        assert_eq!(format_readout(&[0, 1, 7]), "0 1 7 = 17");
        assert_eq!(format_readout(&[]), "");
    }
}
