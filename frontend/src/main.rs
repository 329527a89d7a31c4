fn main() {
    finance_frontend::start();
}
