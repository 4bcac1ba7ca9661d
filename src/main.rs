fn main() {
    tpgen::app::cli::run();
}
