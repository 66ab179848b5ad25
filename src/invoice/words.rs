//! # Amount in Words
//!
//! Spells a rupee amount using the Indian numbering system
//! (crore / lakh / thousand / hundred).
//!
//! ```
//! use autobill::invoice::words::to_words;
//!
//! assert_eq!(to_words(1005), "One Thousand Five Rupees Only");
//! assert_eq!(to_words(100000), "One Lakh Rupees Only");
//! ```

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Convert a whole rupee amount to words, e.g. `21` → "Twenty One Rupees Only".
pub fn to_words(amount: u64) -> String {
    if amount == 0 {
        return "Zero Rupees Only".to_string();
    }

    let mut words = spell(amount);
    words.push_str("Rupees Only");
    words.trim().to_string()
}

/// Convert a decimal amount to words.
///
/// Negative input uses its magnitude, the fraction is truncated (paise are
/// not spelled) and non-finite input is treated as zero.
pub fn amount_to_words(amount: f64) -> String {
    if !amount.is_finite() {
        return to_words(0);
    }
    to_words(amount.abs().trunc() as u64)
}

/// Spell `n` with Indian grouping. Every emitted word is followed by a space.
fn spell(n: u64) -> String {
    let mut words = String::new();
    let mut rest = n;

    let crore = rest / CRORE;
    rest %= CRORE;
    let lakh = rest / LAKH;
    rest %= LAKH;
    let thousand = rest / THOUSAND;
    rest %= THOUSAND;
    let hundred = rest / 100;
    rest %= 100;

    if crore > 0 {
        // Beyond 99 crore the crore count is itself spelled with grouping
        if crore > 99 {
            words.push_str(&spell(crore));
        } else {
            words.push_str(&two_digits(crore));
            words.push(' ');
        }
        words.push_str("Crore ");
    }
    if lakh > 0 {
        words.push_str(&two_digits(lakh));
        words.push_str(" Lakh ");
    }
    if thousand > 0 {
        words.push_str(&two_digits(thousand));
        words.push_str(" Thousand ");
    }
    if hundred > 0 {
        words.push_str(ONES[hundred as usize]);
        words.push_str(" Hundred ");
    }
    if rest > 0 {
        words.push_str(&two_digits(rest));
        words.push(' ');
    }

    words
}

/// Words for 1..=99.
fn two_digits(n: u64) -> String {
    match n {
        0 => String::new(),
        1..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        _ => {
            let tens = TENS[(n / 10 % 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                one => format!("{} {}", tens, ONES[one as usize]),
            }
        }
    }
}
