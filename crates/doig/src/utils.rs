use colored::Colorize;

/// 見出しを表示（例: `[*] Tools`）
pub fn print_heading(title: &str) {
    println!("{}", format!("[*] {}", title).green());
}

/// 一覧の項目を表示（例: `  [-] nmap`）
pub fn print_item(item: &str) {
    println!("{}", format!("  [-] {}", item).yellow());
}

pub fn print_note(note: &str) {
    println!("  {}", note.dimmed());
}
