//! Block segmentation and expression parsing

use crate::error::MmmlError;
use crate::language::Event;
use crate::registry::Registry;
use crate::INDENTATION;

/// Parse one expression (a header line plus its optional indented body)
/// into an event. The header's identifier is dispatched through the
/// registry; the body is segmented and parsed recursively, each result
/// appended to the event in encounter order.
pub(crate) fn parse_expression(
    registry: &mut Registry,
    expression: &str,
) -> Result<Event, MmmlError> {
    let (header, block) = split_header(expression)?;
    let (identifier, arguments) = tokenize_header(header)?;
    let mut event = registry.invoke(identifier, &arguments)?;

    if event.accepts_children() {
        for child_expression in segment_block(block)? {
            let child = parse_expression(registry, &child_expression)?;
            event.append(child);
        }
    }

    Ok(event)
}

/// A document holds exactly one root expression: after the first
/// non-blank line, every non-blank line must be indented.
pub(crate) fn check_single_root(text: &str) -> Result<(), MmmlError> {
    let mut lines = text
        .lines()
        .filter(|line| {
            !line
                .trim()
                .is_empty()
        });
    let _header = lines.next();

    for line in lines {
        let starts_flush = line
            .chars()
            .next()
            .map(|c| !c.is_whitespace())
            .unwrap_or(false);
        if starts_flush {
            return Err(MmmlError::MalformedExpression(format!(
                "multiple root expressions; unexpected line '{}'",
                line
            )));
        }
    }

    Ok(())
}

/// Scan past blank lines to the header; everything after it is the block.
fn split_header(expression: &str) -> Result<(&str, &str), MmmlError> {
    let mut remainder = expression;
    loop {
        if remainder.is_empty() {
            return Err(MmmlError::MalformedExpression(
                "no MMML expression found".to_string(),
            ));
        }
        let (line, rest) = match remainder.split_once('\n') {
            Some((line, rest)) => (line, rest),
            None => (remainder, ""),
        };
        if !line
            .trim()
            .is_empty()
        {
            return Ok((line, rest));
        }
        remainder = rest;
    }
}

/// Split a header into its identifier and positional argument tokens.
/// Spaces and tabs both separate; runs collapse. Arguments stay strings;
/// typed coercion belongs to the registered handlers.
fn tokenize_header(header: &str) -> Result<(&str, Vec<String>), MmmlError> {
    let mut tokens = header.split_whitespace();
    let identifier = tokens
        .next()
        .ok_or_else(|| MmmlError::MalformedExpression("no MMML expression found".to_string()))?;
    let arguments = tokens
        .map(str::to_string)
        .collect();
    Ok((identifier, arguments))
}

/// Split an indented body into its top-level expressions. Every non-blank
/// line must carry at least one indentation unit; after stripping it, a
/// line that is still indented continues the current expression, anything
/// else starts the next one.
fn segment_block(block: &str) -> Result<Vec<String>, MmmlError> {
    let mut expressions = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in block.lines() {
        if line
            .trim()
            .is_empty()
        {
            continue;
        }

        let stripped = line
            .strip_prefix(INDENTATION)
            .ok_or_else(|| {
                MmmlError::MalformedExpression(format!(
                    "bad line '{}', missing indentation?",
                    line
                ))
            })?;

        if stripped.starts_with(INDENTATION) {
            if current.is_empty() {
                return Err(MmmlError::MalformedExpression(format!(
                    "line '{}' appears before any header line",
                    line
                )));
            }
            current.push(stripped);
        } else {
            if !current.is_empty() {
                expressions.push(current.join("\n"));
            }
            current = vec![stripped];
        }
    }

    if !current.is_empty() {
        expressions.push(current.join("\n"));
    }

    Ok(expressions)
}
