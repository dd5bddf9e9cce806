use std::io::{self, BufRead, Write};

use log::debug;
use lumina_calc::evaluate_expression;

fn main() {
    pretty_env_logger::init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Type an expression per line (Ctrl-D to quit).");
    let _ = write!(stdout, "> ");
    let _ = stdout.flush();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let preview = evaluate_expression(line.trim());
        debug!("preview for {:?}: {preview:?}", line.trim());

        if preview.is_empty() {
            println!("(nothing to preview)");
        } else {
            println!("= {preview}");
        }

        let _ = write!(stdout, "> ");
        let _ = stdout.flush();
    }
}
