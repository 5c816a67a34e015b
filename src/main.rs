fn main() {
    qrcody_lib::run()
}
