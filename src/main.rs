fn main() {
    takibi::run()
}
