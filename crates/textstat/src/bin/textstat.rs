fn main() {
    if let Err(err) = textstat::run() {
        eprintln!("{}", textstat::format_error(&err));
        std::process::exit(1);
    }
}
