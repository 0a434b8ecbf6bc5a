fn main() {
    odoogen::app::cli::run();
}
