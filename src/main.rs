fn main() {
    tibia_extract::cli::run();
}
