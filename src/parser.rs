//! Parser parses decimal numbers in plain or scientific format.

use core::str::Chars;

use smallvec::SmallVec;

use crate::defs::Error;
use crate::defs::Scale;
use crate::defs::Sign;

#[derive(Debug)]
pub struct ParserState<'a> {
    s: &'a str,
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    digits: SmallVec<[u8; 64]>,
    e: Scale,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            s,
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            digits: SmallVec::new(),
            e: 0,
        }
    }

    // Returns next character of a string in lower case,
    // or None if string end reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next().map(|c| c.to_ascii_lowercase());
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    fn invalid(&self) -> Error {
        Error::domain(self.s, "decimal numbers")
    }

    /// Returns sign, mantissa digits, and scale.
    pub fn raw_parts(&self) -> (Sign, &[u8], Scale) {
        (self.sign, &self.digits, self.e)
    }
}

/// Parses a decimal number: `[+-]digits[.digits][e[+-]digits]`.
pub fn parse(s: &str) -> Result<ParserState<'_>, Error> {
    let mut parser_state = ParserState::new(s);
    let ch = parser_state.next_char();

    // sign
    if let Some(c) = ch {
        match c {
            '+' => {
                parser_state.next_char();
            }
            '-' => {
                parser_state.sign = Sign::Neg;
                parser_state.next_char();
            }
            _ => {}
        };
    }

    let int_len = parse_digits(&mut parser_state);

    let mut frac_len = 0;
    if Some('.') == parser_state.cur_char() {
        parser_state.next_char();
        frac_len = parse_digits(&mut parser_state);
    }

    if int_len + frac_len == 0 {
        return Err(parser_state.invalid());
    }

    let mut e: Scale = 0;
    if Some('e') == parser_state.cur_char() {
        parser_state.next_char();
        e = parse_exp(&mut parser_state)?;
    }

    if parser_state.cur_char().is_some() {
        return Err(parser_state.invalid());
    }

    parser_state.e = e
        .checked_sub(frac_len as Scale)
        .ok_or(Error::ExponentOverflow)?;

    Ok(parser_state)
}

// Collects digits, returns the number of digits read.
fn parse_digits(parser_state: &mut ParserState) -> usize {
    let mut ch = parser_state.cur_char();
    let mut len = 0;

    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            // leading zeroes carry no value
            if !(d == 0 && parser_state.digits.is_empty()) {
                parser_state.digits.push(d as u8);
            }
            len += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    len
}

fn parse_exp(parser_state: &mut ParserState) -> Result<Scale, Error> {
    let mut neg = false;
    let mut ch = parser_state.cur_char();
    if let Some(c) = ch {
        match c {
            '+' => {
                ch = parser_state.next_char();
            }
            '-' => {
                neg = true;
                ch = parser_state.next_char();
            }
            _ => {}
        };
    }

    let mut e: Scale = 0;
    let mut len = 0;
    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            e = e
                .checked_mul(10)
                .and_then(|e| e.checked_add(d as Scale))
                .ok_or(Error::ExponentOverflow)?;
            len += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    if len == 0 {
        return Err(parser_state.invalid());
    }

    Ok(if neg { -e } else { e })
}
