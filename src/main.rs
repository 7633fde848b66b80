fn main() {
    coverletter::app::cli::run();
}
