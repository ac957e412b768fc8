use calctty::session::evaluate;

fn result(keys: &str) -> String {
    let display = evaluate(keys).expect("Decoding failed");
    display.current().unwrap_or_default().to_string()
}

#[test]
fn test_no_operator_precedence() {
    // (3 + 4) × 5, not 3 + (4 × 5)
    assert_eq!(result("3 + 4 × 5 ="), "35");
    assert_eq!(result("20 − 8 ÷ 2 ="), "6");
}

#[test]
fn test_each_operator() {
    assert_eq!(result("12 + 30 ="), "42");
    assert_eq!(result("12 - 30 ="), "-18");
    assert_eq!(result("12 * 30 ="), "360");
    assert_eq!(result("12 / 30 ="), "0.4");
}

#[test]
fn test_fractional_results_chain() {
    assert_eq!(result("1 / 4 ="), "0.25");
    assert_eq!(result("1 / 4 = * 8 ="), "2");
    assert_eq!(result("1 / 3 ="), "0.3333333333333333");
}

#[test]
fn test_negative_results_chain() {
    assert_eq!(result("2 - 9 ="), "-7");
    assert_eq!(result("2 - 9 = * 3 ="), "-21");
    // an operator after a lone 0 is ignored
    assert_eq!(result("0 - 3 ="), "3");
}

#[test]
fn test_zero_results() {
    assert_eq!(result("5 - 5 ="), "0");
    // -3 × 0 is negative zero, still shown as 0
    assert_eq!(result("2 - 5 = * 0 ="), "0");
}

#[test]
fn test_digits_append_to_result() {
    assert_eq!(result("6 * 7 = 1"), "421");
}

#[test]
fn test_overflow_shows_error() {
    let big = "9".repeat(200);
    assert_eq!(result(&format!("{big} * {big} =")), "Error");
}
