fn main() {
    std::process::exit(medtrack_lib::run());
}
