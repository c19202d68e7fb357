//! # Output Rendering
//!
//! Text output is line oriented: one header per concrete matrix, one line per
//! solution, and a closing summary. JSON output is a single pretty-printed
//! document carrying the same data.

use std::fmt::Display;
use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use hyperlin_core::Matrix;
use hyperlin_solve::{FamilySummary, MatrixSolutions};

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A pretty-printed JSON document.
    Json,
}

#[derive(Serialize)]
struct FamilyReport<'a, E> {
    results: &'a [MatrixSolutions<E>],
    summary: FamilySummary,
}

#[derive(Serialize)]
struct ExpansionReport<'a, E> {
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    matrices: Option<&'a [Matrix<E>]>,
}

fn join<E: Display>(items: &[E]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `[[a, b], [c, d]]`
pub fn matrix_line<E: Display>(matrix: &Matrix<E>) -> String {
    let rows: Vec<String> = matrix
        .iter_rows()
        .map(|row| format!("[{}]", join(row)))
        .collect();
    format!("[{}]", rows.join(", "))
}

/// `(x0, x1, …)`
pub fn solution_line<E: Display>(x: &[E]) -> String {
    format!("({})", join(x))
}

/// One-line summary.
pub fn summary_line(summary: &FamilySummary) -> String {
    format!(
        "{} matrices, {} solvable, {} solutions",
        summary.matrices, summary.solvable, summary.solutions
    )
}

/// Write per-matrix solutions and the family summary.
pub fn write_family<E, W>(
    out: &mut W,
    results: &[MatrixSolutions<E>],
    format: OutputFormat,
) -> Result<()>
where
    E: Display + Serialize,
    W: Write + ?Sized,
{
    let summary = FamilySummary::of(results);
    match format {
        OutputFormat::Text => {
            for r in results {
                writeln!(out, "matrix {}: {}", r.index, matrix_line(&r.matrix))?;
                if r.solutions.is_empty() {
                    writeln!(out, "  no solutions")?;
                }
                for x in &r.solutions {
                    writeln!(out, "  {}", solution_line(x))?;
                }
            }
            writeln!(out, "{}", summary_line(&summary))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &FamilyReport { results, summary })?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write the expansion count and, when given, every concrete matrix.
pub fn write_expansions<E, W>(
    out: &mut W,
    count: usize,
    matrices: Option<&[Matrix<E>]>,
    format: OutputFormat,
) -> Result<()>
where
    E: Display + Serialize,
    W: Write + ?Sized,
{
    match format {
        OutputFormat::Text => {
            for (i, m) in matrices.unwrap_or_default().iter().enumerate() {
                writeln!(out, "matrix {i}: {}", matrix_line(m))?;
            }
            writeln!(out, "{count} concrete matrices")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &ExpansionReport { count, matrices })?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<MatrixSolutions<u8>> {
        vec![
            MatrixSolutions {
                index: 0,
                matrix: Matrix::from_rows(vec![vec![1, 0], vec![0, 1]]).unwrap(),
                solutions: vec![vec![1, 2]],
            },
            MatrixSolutions {
                index: 1,
                matrix: Matrix::from_rows(vec![vec![0, 0], vec![0, 1]]).unwrap(),
                solutions: vec![],
            },
        ]
    }

    #[test]
    fn family_text() {
        let mut out = Vec::<u8>::new();
        write_family(&mut out, &results(), OutputFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "matrix 0: [[1, 0], [0, 1]]\n  (1, 2)\n\
             matrix 1: [[0, 0], [0, 1]]\n  no solutions\n\
             2 matrices, 1 solvable, 1 solutions\n"
        );
    }

    #[test]
    fn family_json() {
        let mut out = Vec::<u8>::new();
        write_family(&mut out, &results(), OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["summary"]["solvable"], 1);
        assert_eq!(json["results"][0]["solutions"], serde_json::json!([[1, 2]]));
        assert_eq!(json["results"][1]["matrix"], serde_json::json!([[0, 0], [0, 1]]));
    }

    #[test]
    fn expansions_json_omits_absent_list() {
        let mut out = Vec::<u8>::new();
        write_expansions::<u8, _>(&mut out, 768, None, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json, serde_json::json!({ "count": 768 }));
    }

    #[test]
    fn empty_solution_renders_as_unit() {
        assert_eq!(solution_line::<u8>(&[]), "()");
        assert_eq!(matrix_line(&Matrix::<u8>::from_rows(vec![]).unwrap()), "[]");
    }
}
