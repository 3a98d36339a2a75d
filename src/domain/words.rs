pub const AND: &str = "and";
pub const CENT: &str = "cent";
pub const CENTS: &str = "cents";
pub const DOLLAR: &str = "dollar";
pub const DOLLARS: &str = "dollars";
pub const HUNDRED: &str = "hundred";
pub const NEGATIVE: &str = "negative";
pub const ZERO: &str = "zero";

/// Words for 1 through 19. Index 0 is unused.
pub const ONES: [&str; 20] = [
    "",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Multiples of ten, indexed by the tens digit. Index 0 is unused.
pub const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Place-value suffixes indexed by digit group, smallest first.
pub const SUFFIXES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Returns the suffix for a digit group, or `None` past quintillion.
pub fn suffix(place_index: usize) -> Option<&'static str> {
    SUFFIXES.get(place_index).copied()
}
