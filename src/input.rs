//! Console input: parsing and the retry-on-invalid prompt loop.
//!
//! Input is consumed as whitespace-separated tokens, so several components may
//! be typed on one line. Invalid tokens are reported and re-prompted; only end
//! of input or an I/O failure ends a prompt with an error.

use crate::config::SessionConfig;
use crate::vector::VectorN;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Errors from parsing or reading user input
#[derive(Debug)]
pub enum InputError {
    /// Token is not an integer
    NotAnInteger(String),

    /// Integer outside the accepted dimension range
    OutOfRange { value: i64, min: usize, max: usize },

    /// Token is not a finite real number
    NotANumber(String),

    /// A vector in a list has the wrong number of components (1-based index)
    WrongComponentCount {
        vector: usize,
        expected: usize,
        actual: usize,
    },

    /// Square basis expected: one vector per dimension
    WrongVectorCount { expected: usize, actual: usize },

    /// No vectors given
    Empty,

    /// Input ended before a value was read
    Eof,

    /// Underlying reader or writer failed
    Io(std::io::Error),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::NotAnInteger(tok) => write!(f, "'{}' is not an integer", tok),
            InputError::OutOfRange { value, min, max } => {
                write!(f, "{} is outside the range {}-{}", value, min, max)
            }
            InputError::NotANumber(tok) => write!(f, "'{}' is not a number", tok),
            InputError::WrongComponentCount {
                vector,
                expected,
                actual,
            } => write!(
                f,
                "vector {} has {} components, expected {}",
                vector, actual, expected
            ),
            InputError::WrongVectorCount { expected, actual } => write!(
                f,
                "expected {} vectors for R^{}, got {}",
                expected, expected, actual
            ),
            InputError::Empty => write!(f, "no vectors given"),
            InputError::Eof => write!(f, "unexpected end of input"),
            InputError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        InputError::Io(e)
    }
}

/// Parse a dimension and check it against the session bounds.
pub fn parse_dimension(text: &str, config: &SessionConfig) -> Result<usize, InputError> {
    let token = text.trim();
    let value: i64 = token
        .parse()
        .map_err(|_| InputError::NotAnInteger(token.to_string()))?;

    match usize::try_from(value) {
        Ok(d) if config.accepts(d) => Ok(d),
        _ => Err(InputError::OutOfRange {
            value,
            min: config.min_dimension,
            max: config.max_dimension,
        }),
    }
}

/// Parse one finite vector component.
pub fn parse_component(text: &str) -> Result<f64, InputError> {
    let token = text.trim();
    match token.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(InputError::NotANumber(token.to_string())),
    }
}

/// Parse a basis written as `"1,0;1,1"`: vectors separated by `;`,
/// components by `,`. All vectors must have the length of the first.
pub fn parse_vector_list(text: &str) -> Result<Vec<VectorN>, InputError> {
    let mut basis: Vec<VectorN> = Vec::new();

    for (i, chunk) in text
        .split(';')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .enumerate()
    {
        let components = chunk
            .split(',')
            .map(parse_component)
            .collect::<Result<Vec<f64>, _>>()?;

        if let Some(first) = basis.first() {
            if components.len() != first.dimension() {
                return Err(InputError::WrongComponentCount {
                    vector: i + 1,
                    expected: first.dimension(),
                    actual: components.len(),
                });
            }
        }
        basis.push(VectorN::new(components));
    }

    if basis.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(basis)
}

/// [`parse_vector_list`] with the same rules the prompt enforces: the
/// dimension must be within the session bounds and there must be exactly one
/// vector per dimension.
pub fn parse_basis(text: &str, config: &SessionConfig) -> Result<Vec<VectorN>, InputError> {
    let basis = parse_vector_list(text)?;
    let dimension = basis[0].dimension();

    if !config.accepts(dimension) {
        return Err(InputError::OutOfRange {
            value: dimension as i64,
            min: config.min_dimension,
            max: config.max_dimension,
        });
    }
    if basis.len() != dimension {
        return Err(InputError::WrongVectorCount {
            expected: dimension,
            actual: basis.len(),
        });
    }
    Ok(basis)
}

/// Prompt loop over any reader/writer pair.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    config: SessionConfig,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W, config: SessionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
            pending: VecDeque::new(),
        }
    }

    /// Release the writer (tests inspect what was printed).
    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(tok);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::Eof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Ask until a dimension within the configured range is entered.
    pub fn read_dimension(&mut self) -> Result<usize, InputError> {
        let (min, max) = (self.config.min_dimension, self.config.max_dimension);
        loop {
            write!(
                self.writer,
                "Enter the dimension of the space ({}-{}): ",
                min, max
            )?;
            self.writer.flush()?;

            let token = self.next_token()?;
            match parse_dimension(&token, &self.config) {
                Ok(d) => return Ok(d),
                Err(InputError::OutOfRange { value, .. }) => {
                    tracing::debug!(value, "dimension out of range");
                    writeln!(
                        self.writer,
                        "Please enter a number between {} and {}.",
                        min, max
                    )?;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "rejected dimension");
                    writeln!(self.writer, "Invalid input. Please enter an integer.")?;
                }
            }
        }
    }

    fn read_component(&mut self, index: usize) -> Result<f64, InputError> {
        loop {
            write!(self.writer, "  Component {}: ", index)?;
            self.writer.flush()?;

            let token = self.next_token()?;
            match parse_component(&token) {
                Ok(x) => return Ok(x),
                Err(e) => {
                    tracing::debug!(error = %e, "rejected component");
                    writeln!(self.writer, "  Invalid input. Please enter a number.")?;
                }
            }
        }
    }

    /// Read `dimension` vectors of `dimension` components each.
    pub fn read_basis(&mut self, dimension: usize) -> Result<Vec<VectorN>, InputError> {
        writeln!(
            self.writer,
            "Enter {} vectors for R^{}:",
            dimension, dimension
        )?;
        writeln!(self.writer)?;

        let mut basis = Vec::with_capacity(dimension);
        for i in 1..=dimension {
            writeln!(self.writer, "Vector {}:", i)?;
            let mut components = Vec::with_capacity(dimension);
            for j in 1..=dimension {
                components.push(self.read_component(j)?);
            }
            basis.push(VectorN::new(components));
            writeln!(self.writer)?;
        }
        Ok(basis)
    }
}
