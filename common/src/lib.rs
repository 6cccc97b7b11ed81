//! The `common` crate contains macros and test utilities shared between the
//! SDK crates.

/// Feature-gated test utilities that can be shared across crate boundaries.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

/// Assert at compile time that two `usize` values are equal. This assert has a
/// nice benefit where there compiler error will actually _print out_ the
/// two values.
///
/// ```
/// const TOKENS: &[&str] = &["HIGH", "MEDIUM", "LOW"];
/// common::const_assert_usize_eq!(TOKENS.len(), 3);
/// ```
#[macro_export]
macro_rules! const_assert_usize_eq {
    ($x:expr, $y:expr $(,)?) => {
        const _: [(); $x] = [(); $y];
    };
}

/// Returns the `snake_case` form of an `UpperCamelCase` type name.
///
/// Every wire field name is prefixed with the snake_case form of its record's
/// type name, so this is used to check those prefixes.
///
/// ```
/// use common::to_snake_case;
/// assert_eq!(to_snake_case("PayInvoiceInput"), "pay_invoice_input");
/// assert_eq!(
///     to_snake_case("CreateTestModePaymentoutput"),
///     "create_test_mode_paymentoutput",
/// );
/// ```
pub fn to_snake_case(camel: &str) -> String {
    let mut out = String::with_capacity(camel.len() + 8);
    for (idx, c) in camel.char_indices() {
        if c.is_ascii_uppercase() {
            if idx != 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
