//! End-to-end PageRank run over a matrix file.
//!
//! ```bash
//! cargo run --example pagerank_demo -- graph.dat 1000
//! ```
//!
//! Mirrors the classic batch flow: echo the raw adjacency matrix, normalize
//! it, echo the stochastic form, then print the uniform start vector, the
//! final scores, the total mass, and a top-10 table. Both arguments are
//! optional (`exemple.dat` and 1000 iterations by default).

use std::io::Write;
use std::process::ExitCode;

use sprank::io::{read_matrix_path, write_matrix, write_vector};
use sprank::{score_checked, top_k, ScoreConfig, Vector};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "exemple.dat".to_string());
    let iterations = match args.next() {
        None => 1000,
        Some(raw) => match raw.parse::<usize>() {
            Ok(k) => k,
            Err(_) => {
                eprintln!("usage: pagerank_demo [<matrix file> [<iterations>]]");
                return ExitCode::FAILURE;
            }
        },
    };

    let mut matrix = match read_matrix_path(&path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    write_matrix(&mut out, &matrix).expect("write to stdout");

    matrix.to_stochastic();
    write_matrix(&mut out, &matrix).expect("write to stdout");

    let r0 = Vector::uniform(matrix.row_count());
    write_vector(&mut out, &r0).expect("write to stdout");

    let scores = match score_checked(&matrix, r0, ScoreConfig { iterations }) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    write_vector(&mut out, &scores).expect("write to stdout");

    writeln!(out, "total mass: {:.6}", scores.sum()).expect("write to stdout");
    writeln!(out, "\nnode  | score").expect("write to stdout");
    writeln!(out, "------|--------").expect("write to stdout");
    for (node, s) in top_k(scores.as_slice(), 10) {
        writeln!(out, "{node:<5} | {s:.5}").expect("write to stdout");
    }

    ExitCode::SUCCESS
}
