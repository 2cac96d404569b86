use std::io::BufRead;

use super::error::ParseError;
use super::model::SeriesData;

/// Parse whitespace-separated rows of floats: the first token of each row
/// is `x`, the rest form that row's `y` values.
///
/// The first token that is not a number aborts the parse with
/// [`ParseError::Conversion`]. Blank lines are skipped.
pub fn parse_series<R: BufRead>(reader: R) -> Result<SeriesData, ParseError> {
    let mut data = SeriesData::default();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;

        let mut tokens = line.split_whitespace();
        let first = match tokens.next() {
            Some(tok) => tok,
            None => continue,
        };

        let x = parse_float(first, line_no)?;
        let ys = tokens
            .map(|tok| parse_float(tok, line_no))
            .collect::<Result<Vec<_>, _>>()?;
        data.push(x, ys);
    }

    log::debug!("parsed {} series records", data.len());
    Ok(data)
}

fn parse_float(token: &str, line: usize) -> Result<f64, ParseError> {
    token.parse::<f64>().map_err(|_| ParseError::Conversion {
        line,
        token: token.to_string(),
    })
}
