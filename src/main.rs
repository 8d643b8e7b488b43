use std::io;

use chrono::Utc;

fn main() {
    // Launchers pass the query either as a single argument or word-split;
    // joining keeps both forms equivalent.
    let words: Vec<String> = std::env::args().skip(1).collect();
    let query = words.join(" ");
    let query = if query.trim().is_empty() {
        None
    } else {
        Some(query.as_str())
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = time_palette::run(query, Utc::now(), &mut out) {
        // The launcher contract treats a silent empty result as valid
        // failure UI, so faults stay on stderr and the exit code stays 0.
        eprintln!("[TimePalette] {}", e);
    }
}
