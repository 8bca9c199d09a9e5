use std::io;

fn main() -> io::Result<()> {
    grid_chess::frontend::terminal_session::run_stdio_loop()
}
