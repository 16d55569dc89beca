fn main() {
    if let Err(err) = uritemplate::cli::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
