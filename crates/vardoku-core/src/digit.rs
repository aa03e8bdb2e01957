//! Digit symbols and alphabet range expressions.

use std::fmt::{self, Display};

use tinyvec::TinyVec;

/// Master symbol table shared by every puzzle alphabet.
///
/// A digit's numeric value is its index in this table, so ordinary digits
/// read at face value (`'4'` → 4) and letters continue from 10 (`'A'` → 10).
/// Arithmetic rules (killer sums, kropki ratios, XV sums) all operate on
/// these values.
pub const SYMBOLS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A single digit symbol from the master table.
///
/// # Examples
///
/// ```
/// use vardoku_core::Digit;
///
/// let four = Digit::from_symbol('4').unwrap();
/// assert_eq!(four.value(), 4);
///
/// let a = Digit::from_symbol('A').unwrap();
/// assert_eq!(a.value(), 10);
///
/// assert!(Digit::from_symbol('#').is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(char);

impl Digit {
    /// Creates a digit from its symbol, if the symbol is in the master
    /// table.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        SYMBOLS.contains(symbol).then_some(Self(symbol))
    }

    /// Creates a digit from its numeric value, if it fits the master table.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        SYMBOLS.chars().nth(usize::from(value)).map(Self)
    }

    /// Returns the symbol character.
    #[must_use]
    pub const fn symbol(self) -> char {
        self.0
    }

    /// Returns the numeric value (index in the master table).
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn value(self) -> u8 {
        SYMBOLS.find(self.0).expect("digit symbol is in table") as u8
    }

    /// Returns `true` if the two digits' values differ by exactly one.
    #[must_use]
    pub fn is_consecutive(self, other: Self) -> bool {
        self.value().abs_diff(other.value()) == 1
    }

    /// Returns `true` if the two digits' values differ by less than `diff`.
    #[must_use]
    pub fn is_within(self, other: Self, diff: u8) -> bool {
        self.value().abs_diff(other.value()) < diff
    }

    /// Returns `true` if one digit's value is `ratio` times the other's.
    #[must_use]
    pub fn is_in_ratio(self, other: Self, ratio: u8) -> bool {
        let u = u16::from(self.value());
        let v = u16::from(other.value());
        u == u16::from(ratio) * v || v == u16::from(ratio) * u
    }
}

impl Default for Digit {
    fn default() -> Self {
        Self('0')
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A short inline list of digits.
///
/// Used for per-cell typed digits, pencil marks, and candidate sets. Nine
/// digits fit inline; larger alphabets spill to the heap.
pub type DigitList = TinyVec<[Digit; 9]>;

/// An error from parsing a digit range expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DigitRangeError {
    /// A symbol outside the master table appeared in the expression.
    #[display("symbol {symbol:?} is not a valid digit")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
    },
    /// A `-` appeared without a digit on both sides.
    #[display("dangling '-' in range expression")]
    DanglingDash,
}

/// Parses a range expression like `"1-9"` or `"0-3; A,B,C X-Z"` into the
/// digits it denotes.
///
/// `-` expands to every symbol between its two neighbors (endpoints
/// included); `;`, `,` and spaces separate sub-ranges. A descending range
/// like `"9-1"` keeps only its endpoints.
///
/// # Errors
///
/// Returns [`DigitRangeError`] if the expression contains a symbol outside
/// the master table or a dash without both endpoints.
///
/// # Examples
///
/// ```
/// use vardoku_core::digit::parse_digit_range;
///
/// let digits = parse_digit_range("0-3; A,B")?;
/// let symbols: String = digits.iter().map(|d| d.symbol()).collect();
/// assert_eq!(symbols, "0123AB");
/// # Ok::<(), vardoku_core::digit::DigitRangeError>(())
/// ```
pub fn parse_digit_range(range: &str) -> Result<Vec<Digit>, DigitRangeError> {
    let chars: Vec<char> = range.chars().collect();
    let mut digits = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            ';' | ',' | ' ' => i += 1,
            '-' => return Err(DigitRangeError::DanglingDash),
            symbol => {
                let start =
                    Digit::from_symbol(symbol).ok_or(DigitRangeError::InvalidSymbol { symbol })?;
                digits.push(start);
                if chars.get(i + 1) == Some(&'-') {
                    let symbol = *chars.get(i + 2).ok_or(DigitRangeError::DanglingDash)?;
                    let end = Digit::from_symbol(symbol)
                        .ok_or(DigitRangeError::InvalidSymbol { symbol })?;
                    for value in start.value() + 1..end.value() {
                        digits.extend(Digit::from_value(value));
                    }
                    digits.push(end);
                    i += 3;
                } else {
                    i += 1;
                }
            }
        }
    }
    Ok(digits)
}
