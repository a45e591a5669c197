//! # Axis-Aligned Path Data Parser
//!
//! Parses the compact path-data subset the digit outlines are authored in:
//! absolute/relative moveto (`M`/`m`), lineto (`L`/`l`), horizontal and
//! vertical lineto (`H`/`h`/`V`/`v`), and closepath (`Z`/`z`). Numbers may
//! be separated by whitespace, commas, or nothing at all when a sign makes
//! the boundary unambiguous (`"m220-220"`).
//!
//! Curves are deliberately unsupported: the digit shapes are rectilinear,
//! and anything else in the data is an input error, not a fallback case.

use crate::error::OutlineError;
use glam::DVec2;

/// Parses path data into closed rings.
///
/// Each `M`/`m` starts a new ring and each `Z`/`z` closes the current one
/// (without duplicating the start point). A trailing unclosed ring is
/// treated as closed, matching the fill behavior of the source format.
///
/// # Errors
///
/// Returns [`OutlineError`] for unsupported commands, malformed numbers,
/// missing arguments, or coordinates before the first moveto.
pub fn parse(data: &str) -> Result<Vec<Vec<DVec2>>, OutlineError> {
    let mut scanner = Scanner::new(data);
    let mut rings: Vec<Vec<DVec2>> = Vec::new();
    let mut ring: Vec<DVec2> = Vec::new();
    let mut cursor = DVec2::ZERO;
    let mut subpath_start = DVec2::ZERO;
    let mut command: Option<char> = None;

    loop {
        scanner.skip_separators();
        let Some(c) = scanner.peek() else { break };

        if c.is_ascii_alphabetic() {
            scanner.advance();
            match c {
                'M' | 'm' | 'L' | 'l' | 'H' | 'h' | 'V' | 'v' => {
                    command = Some(c);
                    continue;
                }
                'Z' | 'z' => {
                    cursor = subpath_start;
                    if !ring.is_empty() {
                        rings.push(std::mem::take(&mut ring));
                    }
                    command = None;
                    continue;
                }
                other => {
                    return Err(OutlineError::UnsupportedCommand {
                        command: other,
                        offset: scanner.pos - 1,
                    });
                }
            }
        }

        // A number without a fresh command letter repeats the previous
        // command; extra moveto pairs degrade to lineto per the format.
        let cmd = command.ok_or(OutlineError::MissingMoveto)?;
        match cmd {
            'M' | 'm' => {
                let x = scanner.number(cmd)?;
                let y = scanner.number(cmd)?;
                if !ring.is_empty() {
                    rings.push(std::mem::take(&mut ring));
                }
                cursor = if cmd == 'm' {
                    cursor + DVec2::new(x, y)
                } else {
                    DVec2::new(x, y)
                };
                subpath_start = cursor;
                ring.push(cursor);
                command = Some(if cmd == 'm' { 'l' } else { 'L' });
            }
            'L' | 'l' => {
                let x = scanner.number(cmd)?;
                let y = scanner.number(cmd)?;
                if ring.is_empty() {
                    return Err(OutlineError::MissingMoveto);
                }
                cursor = if cmd == 'l' {
                    cursor + DVec2::new(x, y)
                } else {
                    DVec2::new(x, y)
                };
                ring.push(cursor);
            }
            'H' | 'h' => {
                let x = scanner.number(cmd)?;
                if ring.is_empty() {
                    return Err(OutlineError::MissingMoveto);
                }
                cursor.x = if cmd == 'h' { cursor.x + x } else { x };
                ring.push(cursor);
            }
            'V' | 'v' => {
                let y = scanner.number(cmd)?;
                if ring.is_empty() {
                    return Err(OutlineError::MissingMoveto);
                }
                cursor.y = if cmd == 'v' { cursor.y + y } else { y };
                ring.push(cursor);
            }
            _ => unreachable!("command set filtered above"),
        }
    }

    if !ring.is_empty() {
        rings.push(ring);
    }
    Ok(rings)
}

/// Byte-level scanner over path data.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(data: &'a str) -> Self {
        Self {
            bytes: data.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.bytes.get(self.pos).map(|&b| b as char)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() || c == ',' {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reads the next number: optional sign, digits, optional fraction.
    fn number(&mut self, command: char) -> Result<f64, OutlineError> {
        self.skip_separators();
        let start = self.pos;
        if matches!(self.peek(), Some('+') | Some('-')) {
            self.advance();
        }
        let mut seen_dot = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                self.advance();
            } else {
                break;
            }
        }
        let text = &self.bytes[start..self.pos];
        if text.is_empty() || text == b"+" || text == b"-" {
            return Err(OutlineError::MissingArgument {
                command,
                offset: start,
            });
        }
        // Bytes are a checked ASCII subset, safe to reinterpret.
        std::str::from_utf8(text)
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or(OutlineError::InvalidNumber { offset: start })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rectangle() {
        let rings = parse("M0 0H10V5H0z").unwrap();
        assert_eq!(rings.len(), 1);
        assert_eq!(
            rings[0],
            vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(10.0, 0.0),
                DVec2::new(10.0, 5.0),
                DVec2::new(0.0, 5.0),
            ]
        );
    }

    #[test]
    fn test_parse_relative_commands() {
        let rings = parse("M1 1h4v3h-4z").unwrap();
        assert_eq!(
            rings[0],
            vec![
                DVec2::new(1.0, 1.0),
                DVec2::new(5.0, 1.0),
                DVec2::new(5.0, 4.0),
                DVec2::new(1.0, 4.0),
            ]
        );
    }

    #[test]
    fn test_parse_glued_negative_numbers() {
        // "m220-220" must split into dx=220, dy=-220.
        let rings = parse("M0 1100V0h660v1100zm220-220V220h220v660z").unwrap();
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[1][0], DVec2::new(220.0, 880.0));
        assert_eq!(rings[1][1], DVec2::new(220.0, 220.0));
    }

    #[test]
    fn test_relative_moveto_after_close_uses_subpath_start() {
        let rings = parse("M10 10h5v5h-5zm1 1h2v2h-2z").unwrap();
        // After z, the cursor returns to (10, 10); m1 1 lands at (11, 11).
        assert_eq!(rings[1][0], DVec2::new(11.0, 11.0));
    }

    #[test]
    fn test_implicit_lineto_after_moveto() {
        let rings = parse("M0 0 10 0 10 10z").unwrap();
        assert_eq!(rings[0].len(), 3);
        assert_eq!(rings[0][2], DVec2::new(10.0, 10.0));
    }

    #[test]
    fn test_unclosed_ring_is_kept() {
        let rings = parse("M0 0h4v4").unwrap();
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 3);
    }

    #[test]
    fn test_unsupported_command_rejected() {
        let err = parse("M0 0C1 1 2 2 3 3z").unwrap_err();
        assert!(matches!(
            err,
            OutlineError::UnsupportedCommand { command: 'C', .. }
        ));
    }

    #[test]
    fn test_leading_coordinates_rejected() {
        assert!(matches!(parse("10 10"), Err(OutlineError::MissingMoveto)));
    }

    #[test]
    fn test_missing_argument_rejected() {
        assert!(matches!(
            parse("M5"),
            Err(OutlineError::MissingArgument { command: 'M', .. })
        ));
    }
}
