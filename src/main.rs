fn main() {
    pretty_env_logger::init();
    learnpath::app::cli::run();
}
