fn main() {
    if let Err(e) = medvault_lib::run() {
        eprintln!("medvault: {e}");
        std::process::exit(1);
    }
}
