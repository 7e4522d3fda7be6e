fn main() {
    chronoforge_lib::run()
}
