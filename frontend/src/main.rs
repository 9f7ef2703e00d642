fn main() {
    newsportal_frontend::start();
}
