fn main() {
    if let Err(e) = md_to_anki::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
