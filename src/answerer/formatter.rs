//! Hebrew answer templates.

/// Answer for questions that do not name both a city and a year.
pub const FALLBACK_ANSWER: &str = "מצטער, כעת אני יכול לענות רק על שאלות הכוללות עיר ושנה. \
נסו למשל: 'כמה פרויקטים של התחדשות עירונית הוכרזו בתל אביב בשנת 2025?'";

/// Renders the count answer for a municipality and year.
///
/// # Examples
///
/// ```
/// use renewal::answerer::compose;
///
/// assert_eq!(
///     compose("2025", "חיפה", 3),
///     "בשנת 2025 הוכרזו 3 מתחמי התחדשות עירונית בחיפה."
/// );
/// ```
pub fn compose(year: &str, municipality: &str, count: usize) -> String {
    if count == 0 {
        format!("לא נמצאו מתחמי התחדשות עירונית ב{municipality} בשנת {year}.")
    } else {
        format!("בשנת {year} הוכרזו {count} מתחמי התחדשות עירונית ב{municipality}.")
    }
}

/// Returns the fixed fallback answer.
pub fn fallback() -> &'static str {
    FALLBACK_ANSWER
}
