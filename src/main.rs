fn main() {
    if let Err(e) = chess_match::console::run_console_loop() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
