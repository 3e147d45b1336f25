use nom::{
    bytes::complete::take_while1,
    character::complete::multispace0,
    IResult,
};
use crate::token::{Span, Token};

fn is_token_char(c: char) -> bool {
    !c.is_whitespace()
}

/// Split text on whitespace, keeping the byte span of every token so the
/// renderer can map words back into the original source.
pub fn split_with_spans(original_input: &str) -> Vec<Token<'_>> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        // 1. Skip whitespace
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        // 2. Take one run of non-whitespace
        let parse_res: IResult<&str, &str> = take_while1(is_token_char)(input);
        match parse_res {
            Ok((next_input, chunk)) => {
                let start = input.as_ptr() as usize - original_input.as_ptr() as usize;
                result.push(Token {
                    span: Span::new(start, start + chunk.len()),
                    text: chunk,
                });
                input = next_input;
            }
            Err(_) => break,
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_index_back_into_source() {
        let input = "  The quick\tfox.  \n runs ";
        let tokens = split_with_spans(input);

        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["The", "quick", "fox.", "runs"]);

        for token in &tokens {
            assert_eq!(&input[token.span.start..token.span.end], token.text);
            assert_eq!(token.span.len(), token.text.len());
        }
    }

    #[test]
    fn test_blank_input_yields_no_tokens() {
        assert!(split_with_spans("").is_empty());
        assert!(split_with_spans("   \t\n ").is_empty());
    }
}
