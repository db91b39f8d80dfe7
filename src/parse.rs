use nom::character::complete::digit0;
use nom::error::{make_error, ErrorKind};
use nom::sequence::preceded;
use nom::{
    branch::alt,
    character::complete::{char as char_parser, i64 as i64_parser},
    combinator::opt,
    IResult,
};
use rust_decimal::Decimal;

use crate::errors::SpesaError;

fn separator_parser(input: &str) -> IResult<&str, ()> {
    alt((char_parser('.'), char_parser(',')))(input).map(|(input, _)| (input, ()))
}

fn after_separator_parser(input: &str) -> IResult<&str, i64> {
    let (input, after_digits) = digit0(input)?;
    match after_digits.len() {
        0 => Ok((input, 0)),
        1 => Ok((input, after_digits.parse::<u8>().unwrap() as i64 * 10)),
        2 => Ok((input, after_digits.parse::<u8>().unwrap() as i64)),
        _ => Err(nom::Err::Error(make_error(input, ErrorKind::TooLarge))),
    }
}

fn decimals_parser(input: &str) -> IResult<&str, i64> {
    preceded(separator_parser, after_separator_parser)(input)
}

fn cents_parser(input: &str) -> IResult<&str, i64> {
    let (input, whole) = opt(i64_parser)(input)?;
    let whole = whole.unwrap_or(0);
    if whole >= i64::MAX / 100 || whole <= i64::MIN / 100 {
        return Err(nom::Err::Error(make_error(input, ErrorKind::TooLarge)));
    }
    let (input, decimals) = opt(decimals_parser)(input)?;
    let decimals = decimals.unwrap_or(0);
    let decimals = if whole < 0 { -decimals } else { decimals };
    Ok((input, whole * 100 + decimals))
}

/// Parses a user-typed amount (`"3.5"`, `"3,50"`, `"12"`) into a decimal
/// with two fractional digits. More than two decimals is rejected.
pub fn parse_amount(s: &str) -> Result<Decimal, SpesaError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(SpesaError::Parse("Empty amount".to_string()));
    }
    match cents_parser(s) {
        Ok(("", cents)) => Ok(Decimal::new(cents, 2)),
        Ok((_, _)) => Err(SpesaError::Parse("Too many characters".to_string())),
        Err(e) => Err(SpesaError::Parse(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_amount("12").unwrap(), dec("12.00"));
        assert_eq!(parse_amount("0").unwrap(), dec("0.00"));
    }

    #[test]
    fn parses_one_and_two_decimal_digits() {
        assert_eq!(parse_amount("3.5").unwrap(), dec("3.50"));
        assert_eq!(parse_amount("3.50").unwrap(), dec("3.50"));
        assert_eq!(parse_amount("0.05").unwrap(), dec("0.05"));
    }

    #[test]
    fn accepts_comma_as_separator() {
        assert_eq!(parse_amount("3,50").unwrap(), dec("3.50"));
    }

    #[test]
    fn parses_negative_amounts() {
        // Positivity is enforced by the caller, not the parser.
        assert_eq!(parse_amount("-4.25").unwrap(), dec("-4.25"));
    }

    #[test]
    fn rejects_excess_precision() {
        assert!(parse_amount("1.234").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("1.2.3").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("   ").is_err());
    }
}
