use std::io::{self, BufRead, Write};

/// Read one line without its line ending. `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Print `message` (no newline), then read one trimmed line.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;
    Ok(read_line(input)?.map(|line| line.trim().to_string()))
}

/// Keep prompting `"{label} {n}: "` until a blank line (or end of input),
/// returning the entries in the order they were typed.
pub fn collect_until_blank<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Vec<String>> {
    let mut items = Vec::new();
    loop {
        let message = format!("{} {}: ", label, items.len() + 1);
        match prompt(input, output, &message)? {
            Some(item) if !item.is_empty() => items.push(item),
            _ => break,
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_and_echoes_message() {
        let mut input = Cursor::new("  Azerbaijan \r\n");
        let mut output = Vec::new();

        let line = prompt(&mut input, &mut output, "Ad: ").unwrap();
        assert_eq!(line.as_deref(), Some("Azerbaijan"));
        assert_eq!(String::from_utf8(output).unwrap(), "Ad: ");
    }

    #[test]
    fn test_prompt_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(prompt(&mut input, &mut output, "> ").unwrap(), None);
    }

    #[test]
    fn test_collect_until_blank() {
        let mut input = Cursor::new("Söz azadlığı\n  Təhsil hüququ  \n\nleftover\n");
        let mut output = Vec::new();

        let items = collect_until_blank(&mut input, &mut output, "Hüquq").unwrap();
        assert_eq!(items, vec!["Söz azadlığı", "Təhsil hüququ"]);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Hüquq 1: Hüquq 2: Hüquq 3: "
        );
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("leftover"));
    }

    #[test]
    fn test_collect_stops_at_eof() {
        let mut input = Cursor::new("one\ntwo");
        let mut output = Vec::new();

        let items = collect_until_blank(&mut input, &mut output, "Mənbə").unwrap();
        assert_eq!(items, vec!["one", "two"]);
    }
}
