use colored::*;

const TOTAL_WIDTH: usize = 48;

/// Print a colored section header.
pub fn header(title: &str) {
    let pad = TOTAL_WIDTH.saturating_sub(title.len() + 4);
    println!(
        "\n{} {} {}",
        "══".bright_black(),
        title.bright_green().bold(),
        "═".repeat(pad).bright_black()
    );
}

/// Print one indented report line.
pub fn line(msg: &str) {
    println!("  {}", msg);
}
