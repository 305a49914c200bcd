fn main() {
    brandmap::run_app();
}
