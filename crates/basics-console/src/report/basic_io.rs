//! Basic console I/O report.
//!
//! Each section is a straight sequence of writes against a [`ConsoleIo`];
//! [`run`] prints them in order under a banner.

use crate::chars;
use crate::console::{Color, ConsoleIo};
use crate::error::BasicsResult;
use crate::limits::TYPE_BOUNDARIES;
use crate::logging::targets;
use crate::template::Value;

/// The integer every numeric format is applied to.
pub const SAMPLE_NUMBER: i32 = 99999;

/// Specifiers shown by [`format_numeric_data`], in order.
pub const NUMERIC_SPECIFIERS: &[&str] = &["c", "d9", "f3", "n", "E", "e", "X", "x"];

/// Color the greeting is echoed in.
pub const GREETING_COLOR: Color = Color::Yellow;

const SAMPLE_CHAR: char = 'a';
const SAMPLE_TEXT: &str = "Hello There";

/// Run every section in order.
pub fn run<C: ConsoleIo>(console: &mut C) -> BasicsResult<()> {
    console.write_line("***** Basic Console I/O *****", &[])?;
    collect_user_data(console)?;
    format_numeric_data(console)?;
    report_type_boundaries(console)?;
    report_char_predicates(console)?;
    Ok(())
}

/// Prompt for a name and an age and echo them back in [`GREETING_COLOR`].
///
/// Both answers are kept as raw text. At end of input the missing answer
/// renders empty.
pub fn collect_user_data<C: ConsoleIo>(console: &mut C) -> BasicsResult<()> {
    console.write("Please enter your name: ", &[])?;
    let name = console.read_line();
    console.write("Please enter your age: ", &[])?;
    let age = console.read_line();

    if name.is_none() || age.is_none() {
        log::debug!(target: targets::REPORT, "Input ended before both answers were read");
    }

    {
        let mut highlighted = console.with_color(GREETING_COLOR);
        highlighted.write_line(
            "Hello {0}! You are {1} years old.",
            &[Value::from(name.as_deref()), Value::from(age.as_deref())],
        )?;
    }

    console.newline()
}

/// Show [`SAMPLE_NUMBER`] under each of [`NUMERIC_SPECIFIERS`].
pub fn format_numeric_data<C: ConsoleIo>(console: &mut C) -> BasicsResult<()> {
    console.write_line(
        "The value {0} in various formats:",
        &[Value::from(SAMPLE_NUMBER)],
    )?;
    for spec in NUMERIC_SPECIFIERS {
        let template = format!("{spec} format: {{0:{spec}}}");
        console.write_line(&template, &[Value::from(SAMPLE_NUMBER)])?;
    }
    console.newline()
}

/// Print the int, double and bool boundary constants.
pub fn report_type_boundaries<C: ConsoleIo>(console: &mut C) -> BasicsResult<()> {
    console.write_line("=> Data type Functionality:", &[])?;
    for boundary in TYPE_BOUNDARIES {
        console.write_line(&format!("{}: {{0}}", boundary.label), &[boundary.value])?;
    }
    console.newline()
}

/// Print digit, letter, whitespace and punctuation tests on fixed samples.
pub fn report_char_predicates<C: ConsoleIo>(console: &mut C) -> BasicsResult<()> {
    console.write_line("=> Char type functionality:", &[])?;
    console.write_line(
        "char.IsDigit('{0}'): {1}",
        &[
            Value::from(SAMPLE_CHAR),
            Value::from(chars::is_digit(SAMPLE_CHAR)),
        ],
    )?;
    console.write_line(
        "char.IsLetter('{0}'): {1}",
        &[
            Value::from(SAMPLE_CHAR),
            Value::from(chars::is_letter(SAMPLE_CHAR)),
        ],
    )?;
    for index in [5usize, 6] {
        console.write_line(
            "char.IsWhiteSpace('{0}', {1}): {2}",
            &[
                Value::from(SAMPLE_TEXT),
                Value::from(index),
                Value::from(chars::is_whitespace_at(SAMPLE_TEXT, index)?),
            ],
        )?;
    }
    console.write_line(
        "char.IsPunctuation('{0}'): {1}",
        &[Value::from('?'), Value::from(chars::is_punctuation('?'))],
    )?;
    console.newline()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestConsole;

    #[test]
    fn test_greeting_line() {
        let mut tc = TestConsole::with_input(&["Ada", "36"]);
        collect_user_data(&mut tc).unwrap();
        tc.assert_contains("Hello Ada! You are 36 years old.");
        assert!(tc.output().iter().any(|l| l.ends_with("Hello Ada! You are 36 years old.")));
    }

    #[test]
    fn test_greeting_is_highlighted_then_restored() {
        let mut tc = TestConsole::with_input(&["Ada", "36"]);
        collect_user_data(&mut tc).unwrap();
        assert_eq!(tc.color_changes(), vec![Color::Yellow, Color::Default]);
        assert_eq!(tc.foreground_color(), Color::Default);
        assert!(tc.raw_output_string().contains('\u{1b}'));
    }

    #[test]
    fn test_eof_prints_placeholders() {
        let mut tc = TestConsole::with_input(&[]);
        collect_user_data(&mut tc).unwrap();
        tc.assert_contains("Hello ! You are  years old.");
    }

    #[test]
    fn test_age_is_not_parsed() {
        let mut tc = TestConsole::with_input(&["Bob", "thirty-six"]);
        collect_user_data(&mut tc).unwrap();
        tc.assert_contains("Hello Bob! You are thirty-six years old.");
    }

    #[test]
    fn test_numeric_section() {
        let mut tc = TestConsole::new();
        format_numeric_data(&mut tc).unwrap();
        assert_eq!(
            tc.output(),
            vec![
                "The value 99999 in various formats:",
                "c format: $99,999.00",
                "d9 format: 000099999",
                "f3 format: 99999.000",
                "n format: 99,999.00",
                "E format: 9.999900E+004",
                "e format: 9.999900e+004",
                "X format: 1869F",
                "x format: 1869f",
                "",
            ]
        );
    }

    #[test]
    fn test_type_boundaries_section() {
        let mut tc = TestConsole::new();
        report_type_boundaries(&mut tc).unwrap();
        assert_eq!(
            tc.output(),
            vec![
                "=> Data type Functionality:",
                "Max of int: 2147483647",
                "Min of int: -2147483648",
                "Max of double: 1.7976931348623157E+308",
                "Min of double: -1.7976931348623157E+308",
                "double.Epsilon: 5E-324",
                "double.PositiveInfinity: ∞",
                "double.NegativeInfinity: -∞",
                "bool.FalseString: False",
                "bool.TrueString: True",
                "",
            ]
        );
    }

    #[test]
    fn test_char_predicates_section() {
        let mut tc = TestConsole::new();
        report_char_predicates(&mut tc).unwrap();
        assert_eq!(
            tc.output(),
            vec![
                "=> Char type functionality:",
                "char.IsDigit('a'): False",
                "char.IsLetter('a'): True",
                "char.IsWhiteSpace('Hello There', 5): True",
                "char.IsWhiteSpace('Hello There', 6): False",
                "char.IsPunctuation('?'): True",
                "",
            ]
        );
    }

    #[test]
    fn test_run_prints_sections_in_order() {
        let mut tc = TestConsole::with_input(&["Ada", "36"]);
        run(&mut tc).unwrap();
        let out = tc.output_string();
        let banner = out.find("***** Basic Console I/O *****").unwrap();
        let greeting = out.find("Hello Ada!").unwrap();
        let numbers = out.find("The value 99999").unwrap();
        let limits = out.find("=> Data type Functionality:").unwrap();
        let chars = out.find("=> Char type functionality:").unwrap();
        assert!(banner < greeting && greeting < numbers && numbers < limits && limits < chars);
    }
}
