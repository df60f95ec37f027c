//! Interpreter for the restricted path language used by stroke fonts.
//!
//! A path is a concatenation of commands, each a single ASCII letter followed by numbers
//! separated by commas and/or whitespace. Only absolute `M x y` and `L x y` are accepted.
use crate::errors::{OutlineError, OutlineResult};
use crate::{Point, Subpath};

/// A single decoded path command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Starts a new subpath at the point
    MoveTo(Point),
    /// Extends the current subpath to the point
    LineTo(Point),
}

impl PathCommand {
    /// Decodes one command letter with its raw parameter text
    pub fn parse(command: char, params: &str, codepoint: &str) -> OutlineResult<Self> {
        let build: fn(Point) -> Self = match command {
            'M' => Self::MoveTo,
            'L' => Self::LineTo,
            _ => {
                return Err(OutlineError::UnsupportedCommand {
                    command,
                    params: params.trim().to_string(),
                    codepoint: codepoint.to_string(),
                })
            }
        };

        let numbers = parse_numbers(params, codepoint)?;
        match numbers.as_slice() {
            [x, y] => Ok(build(Point::new(*x, *y))),
            _ => Err(OutlineError::ParameterCount {
                command,
                expected: 2,
                found: numbers.len(),
                codepoint: codepoint.to_string(),
            }),
        }
    }
}

/// Splits path data into `(command letter, raw parameters)` pairs
struct Segments<'a> {
    data: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = (char, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let mut chars = self.data.chars();
        let command = chars.next()?;
        let rest = chars.as_str();

        let end = rest.find(|c: char| c.is_ascii_alphabetic()).unwrap_or(rest.len());
        let (params, tail) = rest.split_at(end);
        self.data = tail;

        Some((command, params))
    }
}

fn parse_numbers(params: &str, codepoint: &str) -> OutlineResult<Vec<f64>> {
    params
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| OutlineError::MalformedNumber {
                token: token.to_string(),
                codepoint: codepoint.to_string(),
            })
        })
        .collect()
}

/// Interprets `data` into its subpaths, in the order they are drawn.
///
/// `codepoint` only serves diagnostics. Empty (or whitespace-only) data yields no subpaths.
pub fn parse_path(data: &str, codepoint: &str) -> OutlineResult<Vec<Subpath>> {
    let data = data.trim_start();

    // Anything in front of the first command letter cannot be a command
    let start = data.find(|c: char| c.is_ascii_alphabetic()).unwrap_or(data.len());
    if start > 0 {
        return Err(OutlineError::MalformedNumber {
            token: data[..start].trim().to_string(),
            codepoint: codepoint.to_string(),
        });
    }

    let mut subpaths: Vec<Subpath> = Vec::new();
    for (command, params) in (Segments { data }) {
        match PathCommand::parse(command, params, codepoint)? {
            PathCommand::MoveTo(point) => subpaths.push(Subpath::new(point)),
            PathCommand::LineTo(point) => match subpaths.last_mut() {
                Some(current) => current.push(point),
                None => {
                    return Err(OutlineError::NoCurrentSubpath {
                        codepoint: codepoint.to_string(),
                    })
                }
            },
        }
    }

    Ok(subpaths)
}
