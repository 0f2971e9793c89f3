#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = atelier_ui::run() {
        eprintln!("Atelier failed: {err}");
        std::process::exit(1);
    }
}
