//! Integer literal scanning.

use nom::{character::complete::digit1, combinator::map_res, Parser};
use num_bigint::BigUint;
use num_traits::Num;

use super::{token::Kind, LexResult};

/// Parses a [`Kind::IntLiteral`] from the maximal run of ASCII digits at the start of `input`.
pub fn int(input: &str) -> LexResult<'_> {
    map_res(digit1, |digits: &str| BigUint::from_str_radix(digits, 10))
        .parse(input)
        .map(|(tail, value)| (tail, Kind::IntLiteral(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_parser_is_correct() {
        assert!(int("149 * 2").is_ok_and(|res| res == (" * 2", Kind::IntLiteral(149u32.into()))));
        assert!(int("12+3").is_ok_and(|res| res == ("+3", Kind::IntLiteral(12u32.into()))));
        assert!(int("+12").is_err());
        assert!(int("").is_err());
    }
}
