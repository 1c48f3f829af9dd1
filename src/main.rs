fn main() {
    omvpack::app::cli::run();
}
