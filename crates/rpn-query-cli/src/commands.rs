//! Executes parsed commands and renders their results.

use std::fs;
use std::io::Write;
use std::path::Path;

use rpn_query::{ArithmeticTrace, QueryMatcher, QueryTrace, RpnCalculator, Step, join_tokens};
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::cli::Command;
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

/// Run `command`, writing results to `out`.
///
/// # Errors
///
/// Returns [`CliError`] when evaluation fails, documents cannot be read, or
/// output cannot be written.
pub fn run<W: Write>(command: &Command, config: &CliConfig, out: &mut W) -> Result<(), CliError> {
    match command {
        Command::Eval { expression, trace } => {
            run_eval(expression, *trace, config.format, out)
        }
        Command::Match {
            query,
            document,
            trace,
        } => run_match(query, document, *trace, config.format, out),
        Command::Search {
            query,
            documents,
            documents_file,
        } => {
            let mut corpus = documents.clone();
            if let Some(path) = documents_file {
                corpus.extend(read_documents(path)?);
            }
            run_search(query, &corpus, config.format, out)
        }
    }
}

fn run_eval<W: Write>(
    expression: &str,
    trace: bool,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    debug!(expression, "evaluating arithmetic expression");
    let evaluation = RpnCalculator::new().trace_expression(expression)?;
    debug!(
        steps = evaluation.steps.len(),
        result = evaluation.result,
        "arithmetic expression evaluated"
    );

    match (format, trace) {
        (OutputFormat::Json, true) => write_json(out, &arithmetic_trace_json(&evaluation)),
        (OutputFormat::Json, false) => {
            write_json(out, &json!({ "result": number_json(evaluation.result) }))
        }
        (OutputFormat::Text, true) => write_arithmetic_trace(out, &evaluation),
        (OutputFormat::Text, false) => Ok(writeln!(out, "{}", evaluation.result)?),
    }
}

fn run_match<W: Write>(
    query: &str,
    document: &str,
    trace: bool,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    debug!(query, document, "matching query");
    let evaluation = QueryMatcher::default().trace(query, document)?;
    debug!(converted = %evaluation.converted, "terms substituted");
    debug!(tokens = %join_tokens(&evaluation.tokens), "query tokenised");
    debug!(rpn = %join_tokens(&evaluation.rpn), "query converted to RPN");
    debug!(result = evaluation.result, "query evaluated");

    match (format, trace) {
        (OutputFormat::Json, true) => write_json(out, &evaluation),
        (OutputFormat::Json, false) => {
            write_json(out, &json!({ "result": evaluation.result }))
        }
        (OutputFormat::Text, true) => write_query_trace(out, &evaluation),
        (OutputFormat::Text, false) => Ok(writeln!(out, "{}", evaluation.result)?),
    }
}

fn run_search<W: Write>(
    query: &str,
    documents: &[String],
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let matches = QueryMatcher::default().filter(query, documents.iter().map(String::as_str));
    info!(
        query,
        searched = documents.len(),
        matched = matches.len(),
        "search finished"
    );

    match format {
        OutputFormat::Json => write_json(out, &matches),
        OutputFormat::Text => {
            for document in matches {
                writeln!(out, "{document}")?;
            }
            Ok(())
        }
    }
}

/// Documents are the non-blank lines of the file.
fn read_documents(path: &Path) -> Result<Vec<String>, CliError> {
    let contents = fs::read_to_string(path)?;
    let documents: Vec<String> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();
    debug!(path = %path.display(), count = documents.len(), "documents loaded");
    Ok(documents)
}

/// JSON has no infinity or NaN, so those values are written as the strings
/// text output uses (`inf`, `-inf`, `NaN`).
fn number_json(value: f64) -> Value {
    if value.is_finite() {
        Value::from(value)
    } else {
        Value::String(value.to_string())
    }
}

fn arithmetic_trace_json(evaluation: &ArithmeticTrace) -> Value {
    let steps: Vec<Value> = evaluation
        .steps
        .iter()
        .map(|step| {
            let stack: Vec<Value> = step.stack.iter().copied().map(number_json).collect();
            json!({ "token": step.token, "stack": stack })
        })
        .collect();
    json!({ "steps": steps, "result": number_json(evaluation.result) })
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(
    out: &mut W,
    value: &T,
) -> Result<(), CliError> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_steps<W: Write, T: std::fmt::Display>(
    out: &mut W,
    steps: &[Step<T>],
) -> Result<(), CliError> {
    for (index, step) in steps.iter().enumerate() {
        let stack = step
            .stack
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "step {}: {} -> [{stack}]", index + 1, step.token)?;
    }
    Ok(())
}

fn write_arithmetic_trace<W: Write>(
    out: &mut W,
    evaluation: &ArithmeticTrace,
) -> Result<(), CliError> {
    write_steps(out, &evaluation.steps)?;
    writeln!(out, "result: {}", evaluation.result)?;
    Ok(())
}

fn write_query_trace<W: Write>(out: &mut W, evaluation: &QueryTrace) -> Result<(), CliError> {
    writeln!(out, "converted: {}", evaluation.converted)?;
    writeln!(out, "tokens: {}", join_tokens(&evaluation.tokens))?;
    writeln!(out, "rpn: {}", join_tokens(&evaluation.rpn))?;
    write_steps(out, &evaluation.steps)?;
    writeln!(out, "result: {}", evaluation.result)?;
    Ok(())
}
