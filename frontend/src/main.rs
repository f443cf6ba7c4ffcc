fn main() {
    xclone_frontend::run();
}
